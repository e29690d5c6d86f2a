//! Frame pacing
//!
//! The scheduler waits between frames through a [`Pacer`]. [`SleepPacer`]
//! simply blocks the thread. [`KeyboardPacer`] spends the same interval polling
//! the terminal for input so the user can stop the animation with `q`, `Esc`
//! or `Ctrl-C` while raw mode is enabled.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::thread;
use std::time::{Duration, Instant};

/// What the scheduler should do after a wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    Continue,
    Stop,
}

/// Blocks between frames
pub trait Pacer {
    fn wait(&mut self, interval: Duration) -> io::Result<Pace>;
}

/// Sleeps for the whole interval and never asks to stop
#[derive(Debug, Default, Clone, Copy)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn wait(&mut self, interval: Duration) -> io::Result<Pace> {
        thread::sleep(interval);
        Ok(Pace::Continue)
    }
}

/// Polls crossterm for key presses until the interval elapses
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyboardPacer;

impl Pacer for KeyboardPacer {
    fn wait(&mut self, interval: Duration) -> io::Result<Pace> {
        let deadline = Instant::now() + interval;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Ok(Pace::Continue);
            }

            if event::poll(remaining)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && is_quit_key(key) {
                        return Ok(Pace::Stop);
                    }
                }
            }
        }
    }
}

/// Keys that end an interactive animation
pub fn is_quit_key(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
