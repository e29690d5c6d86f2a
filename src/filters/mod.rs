//! Byte-stream filters over standard input
//!
//! Every filter reads raw bytes until end of input, the way a `getchar` loop
//! does, and writes to any [`std::io::Write`]. Inputs are taken as
//! [`std::io::BufRead`] so callers can pass a locked stdin or a byte slice.
//!
//! - [`escape`]: double backslashes
//! - [`squeeze`]: collapse runs of spaces
//! - [`counts`]: blank/tab/newline and per-digit counters
//! - [`eof`]: report whether any input was available

pub mod counts;
pub mod eof;
pub mod escape;
pub mod squeeze;

pub use counts::{count_blanks, count_digits, BlankCounts, DigitCounts};
pub use eof::probe_eof;
pub use escape::escape;
pub use squeeze::squeeze;
