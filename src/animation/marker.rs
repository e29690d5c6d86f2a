//! Track bounds and marker motion
//!
//! The [`Marker`] moves one column per frame and reverses as soon as it lands
//! on either boundary column, so it bounces between `0` and `width - 1`
//! without ever leaving the [`Track`] it was created on.

use super::constants::MIN_WIDTH;
use crate::error::{Error, Result};

/// A fixed-width column range `[0, width)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    width: usize,
}

impl Track {
    /// Create a track, rejecting widths with no room to bounce
    pub fn new(width: usize) -> Result<Self> {
        if width < MIN_WIDTH {
            return Err(Error::InvalidWidth { width });
        }
        Ok(Track { width })
    }

    pub fn width(self) -> usize {
        self.width
    }

    /// Last column the marker may occupy
    pub fn last(self) -> usize {
        self.width - 1
    }

    /// Whether `position` is one of the two boundary columns
    pub fn is_boundary(self, position: usize) -> bool {
        position == 0 || position == self.last()
    }
}

/// Direction of travel along the track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Current marker position and direction on its track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    track: Track,
    position: usize,
    direction: Direction,
}

impl Marker {
    /// Start at the left boundary of `track`, moving right
    pub fn new(track: Track) -> Self {
        Marker {
            track,
            position: 0,
            direction: Direction::Forward,
        }
    }

    pub fn track(&self) -> Track {
        self.track
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Move one column and reverse if a boundary was reached.
    ///
    /// Returns `true` when the direction flipped on this call.
    pub fn advance(&mut self) -> bool {
        // Direction always points inward from a boundary, so neither arm can
        // step outside [0, width).
        self.position = match self.direction {
            Direction::Forward => self.position + 1,
            Direction::Backward => self.position - 1,
        };

        if self.track.is_boundary(self.position) {
            self.direction = self.direction.reversed();
            return true;
        }
        false
    }
}
