// ASCII code chart

use crate::error::Result;
use std::io::Write;

pub const ROWS: u8 = 16;
pub const COLUMNS: u8 = 8;

/// Space through tilde; everything else in 0..128 is a control code
pub fn is_printable(code: u8) -> bool {
    code.is_ascii_graphic() || code == b' '
}

/// 16 rows of 8 cells: hex code, then `'c'` or `NP`, each cell tab-terminated
pub fn write_ascii_table<W: Write>(out: &mut W) -> Result<()> {
    for row in 0..ROWS {
        for column in 0..COLUMNS {
            let code = row * COLUMNS + column;
            write!(out, "{:02x} ", code)?;
            if is_printable(code) {
                write!(out, "'{}' \t", char::from(code))?;
            } else {
                write!(out, "NP \t")?;
            }
        }
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
