//! Terminal session for the animation
//!
//! On a real terminal the cursor is hidden and raw mode is enabled so key
//! presses reach [`KeyboardPacer`] instead of raising signals. Both are undone
//! before returning, even when the loop fails. Lifecycle events are logged
//! only outside raw mode.

use super::scheduler::{KeyboardPacer, SleepPacer};
use super::{Animation, RunSummary, StarConfig};
use crate::error::Result;
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode},
};
use std::io::{self, IsTerminal, Write};
use tracing::{debug, warn};

/// Run the animation on stdout, choosing the pacer by whether stdout is a tty
pub fn run_on_stdout(config: StarConfig) -> Result<RunSummary> {
    let mut animation = Animation::new(config)?;
    debug!(
        width = animation.track().width(),
        interval_ms = animation.interval().as_millis() as u64,
        frames = ?animation.frame_limit(),
        "starting animation"
    );

    let summary = if io::stdout().is_terminal() {
        run_interactive(&mut animation)?
    } else {
        debug!("stdout is not a terminal; running without key handling");
        let mut stdout = io::stdout().lock();
        animation.run(&mut stdout, &mut SleepPacer)?
    };

    debug!(frames = summary.frames, reason = ?summary.reason, "animation finished");
    Ok(summary)
}

/// Run with raw mode and a hidden cursor, restoring both afterwards
pub fn run_interactive(animation: &mut Animation) -> Result<RunSummary> {
    let mut stdout = io::stdout();

    enable_raw_mode()?;
    let res = match execute!(stdout, cursor::Hide) {
        Ok(()) => animation.run(&mut stdout, &mut KeyboardPacer),
        Err(e) => Err(e.into()),
    };

    // Restore terminal
    if let Err(e) = disable_raw_mode() {
        warn!("failed to disable raw mode: {}", e);
    }
    restore_cursor(&mut stdout, res)
}

/// Show the cursor and end the frame line, keeping the run's own result
fn restore_cursor<W: Write>(out: &mut W, res: Result<RunSummary>) -> Result<RunSummary> {
    if let Err(e) = execute!(out, cursor::Show).and_then(|()| writeln!(out)) {
        warn!("failed to restore cursor: {}", e);
    }
    res
}
