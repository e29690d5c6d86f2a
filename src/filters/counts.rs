//! Character counters
//!
//! [`count_blanks`] tallies spaces, tabs and newlines. [`count_digits`] keeps
//! one counter per decimal digit and can print either the raw counts or a
//! logarithmic star histogram.

use crate::error::Result;
use std::io::{BufRead, Write};

/// Totals of the three whitespace bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlankCounts {
    pub blanks: u64,
    pub tabs: u64,
    pub newlines: u64,
}

impl BlankCounts {
    /// Print as `b: ..`, `t: ..`, `n: ..` lines
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "b: {}", self.blanks)?;
        writeln!(out, "t: {}", self.tabs)?;
        writeln!(out, "n: {}", self.newlines)?;
        out.flush()?;
        Ok(())
    }
}

pub fn count_blanks<R: BufRead>(input: R) -> Result<BlankCounts> {
    let mut counts = BlankCounts::default();
    for byte in input.bytes() {
        match byte? {
            b' ' => counts.blanks += 1,
            b'\t' => counts.tabs += 1,
            b'\n' => counts.newlines += 1,
            _ => {}
        }
    }
    Ok(counts)
}

/// Occurrences of `0` through `9`, indexed by digit value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigitCounts {
    pub occurs: [u64; 10],
}

impl DigitCounts {
    pub fn get(&self, digit: usize) -> Option<u64> {
        self.occurs.get(digit).copied()
    }

    /// One `<digit>: <count>` line per digit
    pub fn write_table<W: Write>(&self, out: &mut W) -> Result<()> {
        for (digit, count) in self.occurs.iter().enumerate() {
            writeln!(out, "{}: {}", digit, count)?;
        }
        out.flush()?;
        Ok(())
    }

    /// One `<digit>: ***` line per digit, with [`histogram_width`] stars
    pub fn write_histogram<W: Write>(&self, out: &mut W) -> Result<()> {
        for (digit, &count) in self.occurs.iter().enumerate() {
            let bar = "*".repeat(histogram_width(count));
            writeln!(out, "{}: {}", digit, bar)?;
        }
        out.flush()?;
        Ok(())
    }
}

pub fn count_digits<R: BufRead>(input: R) -> Result<DigitCounts> {
    let mut counts = DigitCounts::default();
    for byte in input.bytes() {
        let byte = byte?;
        if byte.is_ascii_digit() {
            counts.occurs[usize::from(byte - b'0')] += 1;
        }
    }
    Ok(counts)
}

/// Stars drawn for `count`: ceil(log2(count)), with 0 and 1 drawing nothing
pub fn histogram_width(count: u64) -> usize {
    if count < 2 {
        return 0;
    }
    ((count - 1).ilog2() + 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_blanks() {
        let counts = count_blanks(&b"a b\tc  d\n\te\n"[..]).unwrap();
        assert_eq!(
            counts,
            BlankCounts {
                blanks: 3,
                tabs: 2,
                newlines: 2,
            }
        );
    }

    #[test]
    fn test_blank_report_format() {
        let counts = BlankCounts {
            blanks: 4,
            tabs: 0,
            newlines: 1,
        };
        let mut out = Vec::new();
        counts.write_to(&mut out).unwrap();
        assert_eq!(out, b"b: 4\nt: 0\nn: 1\n");
    }

    #[test]
    fn test_count_digits_ignores_other_bytes() {
        let counts = count_digits(&b"a1b22c333 9\n"[..]).unwrap();
        assert_eq!(counts.get(0), Some(0));
        assert_eq!(counts.get(1), Some(1));
        assert_eq!(counts.get(2), Some(2));
        assert_eq!(counts.get(3), Some(3));
        assert_eq!(counts.get(9), Some(1));
        assert_eq!(counts.get(10), None);
    }

    #[test]
    fn test_histogram_width() {
        assert_eq!(histogram_width(0), 0);
        assert_eq!(histogram_width(1), 0);
        assert_eq!(histogram_width(2), 1);
        assert_eq!(histogram_width(3), 2);
        assert_eq!(histogram_width(4), 2);
        assert_eq!(histogram_width(5), 3);
        assert_eq!(histogram_width(8), 3);
        assert_eq!(histogram_width(9), 4);
        assert_eq!(histogram_width(1024), 10);
    }

    #[test]
    fn test_histogram_output() {
        let counts = count_digits(&b"0000 11 2"[..]).unwrap();
        let mut out = Vec::new();
        counts.write_histogram(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "0: **");
        assert_eq!(lines[1], "1: *");
        assert_eq!(lines[2], "2: ");
        assert_eq!(lines[9], "9: ");
    }
}
