// Copy input, doubling backslashes

use crate::error::Result;
use std::io::{BufRead, Write};

const BACKSLASH: u8 = b'\\';

/// Copy `input` to `output`, writing each backslash twice.
///
/// Every other byte, tab and backspace included, is copied as is.
pub fn escape<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<()> {
    for byte in input.bytes() {
        let byte = byte?;
        if byte == BACKSLASH {
            output.write_all(b"\\\\")?;
        } else {
            output.write_all(&[byte])?;
        }
    }
    output.flush()?;
    Ok(())
}
