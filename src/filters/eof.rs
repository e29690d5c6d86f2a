// End-of-file probe

use crate::error::Result;
use std::io::{BufRead, Write};

/// Sentinel `getchar` returns at end of input
pub const EOF: i32 = -1;

/// `-1` returned from `main`, as the shell sees it
pub const EOF_EXIT_STATUS: u8 = 255;

/// Print [`EOF`], then read a single byte and print `c=1` if one was
/// available or `c=0` at end of input. Returns whether a byte was read.
pub fn probe_eof<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<bool> {
    writeln!(output, "{}", EOF)?;

    let got_byte = match input.bytes().next() {
        Some(byte) => {
            byte?;
            true
        }
        None => false,
    };

    writeln!(output, "c={}", u8::from(got_byte))?;
    output.flush()?;
    Ok(got_byte)
}
