//! The interactive console primitives the demo binaries share: prompt for a
//! typed value with retry on bad input, and the yes/no "run again?" question.
//!
//! Both functions are generic over the reader and writer so tests can drive
//! them with in-memory cursors instead of a terminal.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Prompts until a line parses as `T` and passes `accept`.
///
/// A line that fails to parse prints a generic error and re-prompts. A
/// parsed value is handed to `accept`, which is responsible for writing its
/// own rejection message before the loop re-prompts. EOF on the input stream
/// is reported as [`io::ErrorKind::UnexpectedEof`] rather than looping.
pub fn request_input<T, R, W, F>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    mut accept: F,
) -> io::Result<T>
where
    T: FromStr,
    R: BufRead,
    W: Write,
    F: FnMut(&mut W, &T) -> io::Result<bool>,
{
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed while waiting for a value",
            ));
        }

        match line.trim().parse::<T>() {
            Ok(value) => {
                if accept(output, &value)? {
                    return Ok(value);
                }
            }
            Err(_) => writeln!(output, "That is not a valid value.\n")?,
        }
    }
}

/// An `accept` argument for [`request_input`] that takes any parsed value.
pub fn accept_any<T, W: Write>(_output: &mut W, _value: &T) -> io::Result<bool> {
    Ok(true)
}

/// Asks whether the user would like to run the program again.
///
/// Empty input (and EOF) defaults to no. `y`/`yes`/`n`/`no` are accepted
/// case-insensitively; anything else lists the valid responses and
/// re-prompts.
pub fn request_continue<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    loop {
        write!(output, "Would you like to run the program again? [y/N] ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }

        let response = line.trim().to_lowercase();
        match response.as_str() {
            "" | "n" | "no" => return Ok(false),
            "y" | "yes" => return Ok(true),
            other => writeln!(
                output,
                "{} is an invalid response. Available responses are yes, y, no, or n.\n",
                other
            )?,
        }
    }
}
