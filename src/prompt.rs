//! Validated line-input reading.
//!
//! Every prompt in the program goes through [`read_valid`]: print the prompt,
//! read one line, try to parse it, and on failure print a retry message and
//! ask again. This keeps the retry policy out of the game and menu logic.

use std::io;
use std::io::{BufRead, Write};

/// Prompt until `parse` accepts the trimmed input line.
///
/// `parse` returns `None` to reject a line; rejection prints `retry_message`
/// and re-prompts. Retries are unbounded. A closed input stream surfaces as
/// `io::ErrorKind::UnexpectedEof`.
pub fn read_valid<B, W, T, P>(
    reader: &mut B,
    writer: &mut W,
    prompt: &str,
    retry_message: &str,
    parse: P,
) -> io::Result<T>
where
    B: BufRead,
    W: Write,
    P: Fn(&str) -> Option<T>,
{
    loop {
        write!(writer, "{}", prompt)?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed while waiting for a response",
            ));
        }

        if let Some(value) = parse(line.trim()) {
            return Ok(value);
        }

        writeln!(writer, "{}", retry_message)?;
    }
}

/// Prompt until the user enters an integer.
pub fn read_number<B: BufRead, W: Write>(
    reader: &mut B,
    writer: &mut W,
    prompt: &str,
) -> io::Result<u32> {
    read_valid(
        reader,
        writer,
        prompt,
        "Invalid input. Please enter a number.",
        |line| line.parse::<u32>().ok(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_valid_accepts_first_valid_line() {
        let mut input = Cursor::new("hello\n");
        let mut output = Vec::new();

        let value = read_valid(&mut input, &mut output, "> ", "nope", |line| {
            Some(line.to_string())
        })
        .unwrap();

        assert_eq!(value, "hello");
        assert_eq!(String::from_utf8(output).unwrap(), "> ");
    }

    #[test]
    fn test_read_valid_retries_until_parse_succeeds() {
        let mut input = Cursor::new("bad\nworse\n42\n");
        let mut output = Vec::new();

        let value = read_valid(&mut input, &mut output, "> ", "try again", |line| {
            line.parse::<u32>().ok()
        })
        .unwrap();

        assert_eq!(value, 42);
        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(transcript.matches("try again").count(), 2);
        assert_eq!(transcript.matches("> ").count(), 3);
    }

    #[test]
    fn test_read_valid_trims_whitespace() {
        let mut input = Cursor::new("  y  \n");
        let mut output = Vec::new();

        let value = read_valid(&mut input, &mut output, "> ", "nope", |line| {
            Some(line.to_string())
        })
        .unwrap();

        assert_eq!(value, "y");
    }

    #[test]
    fn test_read_valid_reports_eof() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let err = read_valid(&mut input, &mut output, "> ", "nope", |_| Some(()))
            .unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_read_number_rejects_non_integers() {
        let mut input = Cursor::new("abc\n3.5\n7\n");
        let mut output = Vec::new();

        let value = read_number(&mut input, &mut output, "n: ").unwrap();

        assert_eq!(value, 7);
        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(
            transcript.matches("Invalid input. Please enter a number.").count(),
            2
        );
    }
}
