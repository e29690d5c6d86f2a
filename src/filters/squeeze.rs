// Collapse runs of spaces into one

use crate::error::Result;
use std::io::{BufRead, Write};

/// Copy `input` to `output`, writing each run of spaces as a single space.
///
/// A pending run is only emitted once a non-space byte follows it, so trailing
/// spaces at end of input are dropped.
pub fn squeeze<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<()> {
    let mut saw_blank = false;

    for byte in input.bytes() {
        let byte = byte?;
        if byte == b' ' {
            saw_blank = true;
            continue;
        }
        if saw_blank {
            output.write_all(b" ")?;
            saw_blank = false;
        }
        output.write_all(&[byte])?;
    }

    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &[u8]) -> String {
        let mut out = Vec::new();
        squeeze(input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_collapses_runs() {
        assert_eq!(run(b"a    b  c d"), "a b c d");
    }

    #[test]
    fn test_leading_run_kept_as_one() {
        assert_eq!(run(b"   x"), " x");
    }

    #[test]
    fn test_trailing_spaces_dropped() {
        assert_eq!(run(b"x   "), "x");
        assert_eq!(run(b"     "), "");
    }

    #[test]
    fn test_tabs_are_not_blanks() {
        assert_eq!(run(b"a\t\tb"), "a\t\tb");
    }

    #[test]
    fn test_newline_ends_run() {
        assert_eq!(run(b"a  \n  b\n"), "a \n b\n");
    }
}
