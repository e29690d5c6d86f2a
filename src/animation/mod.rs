//! Moving-star animation
//!
//! A single marker bounces between two boundaries on one terminal line:
//!
//! ```text
//! |                                            *     |
//! ```
//!
//! Each frame is rendered by [`render::write_frame`], the marker is moved by
//! [`marker::Marker::advance`], and the loop is paced by a
//! [`scheduler::Pacer`]. [`terminal::run_interactive`] wraps the loop with
//! crossterm raw mode and cursor handling for real terminals.

pub mod constants;
pub mod marker;
pub mod render;
pub mod scheduler;
pub mod terminal;

use crate::error::Result;
use constants::{DEFAULT_INTERVAL, DEFAULT_WIDTH};
use marker::{Marker, Track};
use scheduler::{Pace, Pacer};
use std::io::Write;
use std::time::Duration;

/// Animation settings collected from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarConfig {
    /// Columns between the boundaries
    pub width: usize,
    /// Pause after each frame
    pub interval: Duration,
    /// Stop after this many frames; `None` runs until interrupted
    pub frames: Option<u64>,
}

impl Default for StarConfig {
    fn default() -> Self {
        StarConfig {
            width: DEFAULT_WIDTH,
            interval: DEFAULT_INTERVAL,
            frames: None,
        }
    }
}

/// Why [`Animation::run`] returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    FrameLimit,
    Pacer,
}

/// Result of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub reason: StopReason,
}

/// Animation state: the marker on its track, and how far we've got
#[derive(Debug)]
pub struct Animation {
    marker: Marker,
    interval: Duration,
    frame_limit: Option<u64>,
    frames_drawn: u64,
}

impl Animation {
    /// Validate the config and place the marker at the left boundary
    pub fn new(config: StarConfig) -> Result<Self> {
        let track = Track::new(config.width)?;
        Ok(Animation {
            marker: Marker::new(track),
            interval: config.interval,
            frame_limit: config.frames,
            frames_drawn: 0,
        })
    }

    pub fn track(&self) -> Track {
        self.marker.track()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn frame_limit(&self) -> Option<u64> {
        self.frame_limit
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Run render -> flush -> advance -> wait until the frame limit is hit or
    /// the pacer asks to stop.
    ///
    /// Must not log: in raw mode a stderr line is drawn over the frame.
    pub fn run<W: Write, P: Pacer>(&mut self, out: &mut W, pacer: &mut P) -> Result<RunSummary> {
        let reason = loop {
            if self.frame_limit.is_some_and(|limit| self.frames_drawn >= limit) {
                break StopReason::FrameLimit;
            }

            render::write_frame(out, &self.marker)?;
            out.flush()?;
            self.frames_drawn += 1;
            self.marker.advance();

            if pacer.wait(self.interval)? == Pace::Stop {
                break StopReason::Pacer;
            }
        };

        Ok(RunSummary {
            frames: self.frames_drawn,
            reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io;

    /// Pacer that never sleeps and stops after a fixed number of waits
    struct CountingPacer {
        waits: u64,
        stop_after: Option<u64>,
    }

    impl Pacer for CountingPacer {
        fn wait(&mut self, _interval: Duration) -> io::Result<Pace> {
            self.waits += 1;
            match self.stop_after {
                Some(n) if self.waits >= n => Ok(Pace::Stop),
                _ => Ok(Pace::Continue),
            }
        }
    }

    fn config(width: usize, frames: Option<u64>) -> StarConfig {
        StarConfig {
            width,
            interval: Duration::ZERO,
            frames,
        }
    }

    #[test]
    fn test_default_config() {
        let config = StarConfig::default();
        assert_eq!(config.width, 50);
        assert_eq!(config.interval, Duration::from_millis(50));
        assert_eq!(config.frames, None);
    }

    #[test]
    fn test_rejects_narrow_track() {
        assert!(matches!(
            Animation::new(config(1, Some(1))),
            Err(Error::InvalidWidth { width: 1 })
        ));
    }

    #[test]
    fn test_frame_limit_bounds_the_loop() {
        let mut animation = Animation::new(config(4, Some(3))).unwrap();
        let mut pacer = CountingPacer {
            waits: 0,
            stop_after: None,
        };
        let mut out = Vec::new();

        let summary = animation.run(&mut out, &mut pacer).unwrap();

        assert_eq!(
            summary,
            RunSummary {
                frames: 3,
                reason: StopReason::FrameLimit,
            }
        );
        assert_eq!(pacer.waits, 3);
        assert_eq!(String::from_utf8(out).unwrap(), "|*   |\r| *  |\r|  * |\r");
    }

    #[test]
    fn test_pacer_stop_ends_loop() {
        let mut animation = Animation::new(config(10, None)).unwrap();
        let mut pacer = CountingPacer {
            waits: 0,
            stop_after: Some(5),
        };
        let mut out = Vec::new();

        let summary = animation.run(&mut out, &mut pacer).unwrap();

        assert_eq!(summary.frames, 5);
        assert_eq!(summary.reason, StopReason::Pacer);
        assert_eq!(animation.marker().position(), 5);
    }

    #[test]
    fn test_write_failure_propagates() {
        struct ClosedOutput;

        impl Write for ClosedOutput {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut animation = Animation::new(config(5, None)).unwrap();
        let mut pacer = CountingPacer {
            waits: 0,
            stop_after: None,
        };

        let result = animation.run(&mut ClosedOutput, &mut pacer);

        assert!(matches!(result, Err(Error::Io(_))));
        assert_eq!(animation.frames_drawn(), 0);
    }
}
