use std::io::{BufRead, Write};

use anyhow::Result;

use crate::checksum;
use crate::cipher;

/// Transform direction, fixed for a whole run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl Mode {
    /// Map the caller-supplied token onto a direction.
    ///
    /// Only "in" and "de" select anything; every other token yields
    /// `None`, and the run drains its input without writing output.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "in" => Some(Mode::Encrypt),
            "de" => Some(Mode::Decrypt),
            _ => None,
        }
    }
}

/// Read lines from `input`, transform each in place, write to `output`.
///
/// One buffer is cleared and reused across iterations; the terminator
/// stays in the buffer so the mask can skip it. Encrypting appends a
/// decimal checksum line after every masked line; decrypting writes the
/// masked line alone and makes no attempt to recognize or strip checksum
/// lines, so it is only format-compatible with bare masked lines.
/// Returns the number of input lines consumed.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    mode: Option<Mode>,
    key: u8,
) -> Result<u64> {
    let mut line = Vec::new();
    let mut consumed = 0u64;

    loop {
        line.clear();
        let n = input.read_until(b'\n', &mut line)?;
        if n == 0 {
            break;
        }
        consumed += 1;

        match mode {
            Some(Mode::Encrypt) => {
                // Checksum goes over the untouched bytes, terminator included.
                let sum = checksum::digest(&line);
                println!("read {} byte line, checksum {}", n, sum);
                cipher::mask_in_place(&mut line, key);
                output.write_all(&line)?;
                writeln!(output, "{}", sum)?;
            }
            Some(Mode::Decrypt) => {
                println!("read {} byte line", n);
                cipher::mask_in_place(&mut line, key);
                output.write_all(&line)?;
            }
            // Unknown token: consume and discard every line.
            None => {}
        }
    }

    Ok(consumed)
}
