// Constants for the moving-star animation

use std::time::Duration;

/// Default number of columns between the two boundaries
pub const DEFAULT_WIDTH: usize = 50;

/// Default pause between frames
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(50);

/// Smallest track that still has two distinct boundary columns
pub const MIN_WIDTH: usize = 2;

/// Glyph drawn at the marker position
pub const MARKER_GLYPH: char = '*';

/// Glyph drawn at both ends of the track
pub const BOUNDARY_GLYPH: char = '|';

/// Returns the cursor to column 0 so the next frame overwrites this one
pub const FRAME_END: char = '\r';
