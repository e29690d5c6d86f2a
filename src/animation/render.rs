//! Frame rendering
//!
//! A frame is `|`, then `width` cells (spaces plus one marker glyph), then `|`,
//! terminated by a carriage return instead of a newline so the following frame
//! is drawn over the same terminal line.

use super::constants::{BOUNDARY_GLYPH, FRAME_END, MARKER_GLYPH};
use super::marker::Marker;
use std::io::{self, Write};

/// Build the visible part of a frame (no trailing carriage return)
pub fn render_line(marker: &Marker) -> String {
    let width = marker.track().width();
    let mut line = String::with_capacity(width + 2);
    line.push(BOUNDARY_GLYPH);
    for column in 0..width {
        if column == marker.position() {
            line.push(MARKER_GLYPH);
        } else {
            line.push(' ');
        }
    }
    line.push(BOUNDARY_GLYPH);
    line
}

/// Write one full frame, carriage return included
pub fn write_frame<W: Write>(out: &mut W, marker: &Marker) -> io::Result<()> {
    write!(out, "{}{}", render_line(marker), FRAME_END)
}
