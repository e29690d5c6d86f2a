//! Unit conversion tables
//!
//! - Fahrenheit to Celsius from -60 up to 100 in steps of 20
//! - Ells to inches and centimeters, in three chunks of ten rows

use crate::error::Result;
use std::io::Write;

pub const FAHRENHEIT_START: i32 = -60;
pub const FAHRENHEIT_END: i32 = 100;
pub const FAHRENHEIT_STEP: usize = 20;

/// Inches in one ell
pub const INCHES_PER_ELL: u32 = 45;
pub const CM_PER_INCH: f64 = 2.54;
pub const CHUNK_SIZE: u32 = 10;
pub const NUM_CHUNKS: u32 = 3;

pub fn fahrenheit_to_celsius(f: i32) -> f64 {
    (f64::from(f) - 32.0) * 5.0 / 9.0
}

/// Header `f\tc`, then one `<f>\t<c>` row per step
pub fn write_temperature_table<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "f\tc")?;
    for f in (FAHRENHEIT_START..FAHRENHEIT_END).step_by(FAHRENHEIT_STEP) {
        writeln!(out, "{}\t{:.2}", f, fahrenheit_to_celsius(f))?;
    }
    out.flush()?;
    Ok(())
}

/// A single row of the ell table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllRow {
    pub ell: u32,
    pub inches: u32,
    pub centimeters: f64,
}

impl EllRow {
    pub fn new(ell: u32) -> Self {
        let inches = ell * INCHES_PER_ELL;
        EllRow {
            ell,
            inches,
            centimeters: f64::from(inches) * CM_PER_INCH,
        }
    }
}

/// Header, then per chunk a dashed separator and [`CHUNK_SIZE`] rows
pub fn write_ell_table<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Ell\tInches\tCentimeters")?;
    for chunk in 0..NUM_CHUNKS {
        writeln!(out, "{}", "-".repeat(20))?;
        for j in 0..CHUNK_SIZE {
            let row = EllRow::new(chunk * CHUNK_SIZE + j + 1);
            writeln!(out, "{}\t{}\t{:.2}", row.ell, row.inches, row.centimeters)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freezing_and_crossover() {
        assert!(fahrenheit_to_celsius(32).abs() < 1e-9);
        assert!((fahrenheit_to_celsius(-40) + 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_ell_row() {
        let row = EllRow::new(2);
        assert_eq!(row.inches, 90);
        assert!((row.centimeters - 228.6).abs() < 1e-9);
    }

    #[test]
    fn test_temperature_rows() {
        let mut out = Vec::new();
        write_temperature_table(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "f\tc");
        assert_eq!(lines[1], "-60\t-51.11");
        assert_eq!(lines[2], "-40\t-40.00");
        assert_eq!(lines[8], "80\t26.67");
    }
}
