//! Fixed tables printed to standard output
//!
//! None of these read input. Each writes a complete table to any
//! [`std::io::Write`] and flushes it.

pub mod ascii;
pub mod conversions;

pub use ascii::write_ascii_table;
pub use conversions::{write_ell_table, write_temperature_table};
