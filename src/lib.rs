//! # Introduction
//!
//! kandr collects the early K&R C exercises as small Rust programs. Each one
//! is a library function over generic [`std::io::BufRead`] /
//! [`std::io::Write`] handles, and a subcommand of the `kandr` binary.
//!
//! ## Exercises
//!
//! 1. [`animation`] — a star bouncing between two bars on one terminal line,
//!    redrawn in place with a carriage return.
//! 2. [`filters`] — stdin filters: escape, squeeze blanks, count blanks,
//!    count digits, probe end of input.
//! 3. [`tables`] — Fahrenheit/Celsius, ell/inch/centimeter and ASCII charts.
//!
//! Errors from all of them are reported through [`Error`]; diagnostics go to
//! stderr through `tracing` (see [`logger`]).

pub mod animation;
pub mod error;
pub mod filters;
pub mod logger;
pub mod tables;

pub use error::{Error, Result};
