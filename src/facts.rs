//! Static fact store: line-delimited text files read fresh on every request.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fs;
use std::io;
use std::io::Write;

/// Load all lines of a fact source.
///
/// A missing or unreadable file is reported on `writer` and yields an empty
/// list; the program keeps running either way.
pub fn load<W: Write>(path: &str, writer: &mut W) -> io::Result<Vec<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text.lines().map(str::to_string).collect()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            writeln!(
                writer,
                "File '{}' not found. Please make sure the file exists in the same directory.",
                path
            )?;
            Ok(Vec::new())
        }
        Err(err) => {
            writeln!(writer, "An error occurred: {}", err)?;
            Ok(Vec::new())
        }
    }
}

/// Pick a uniformly random fact, or `None` if the list is empty.
pub fn pick_random<'a, R: Rng>(facts: &'a [String], rng: &mut R) -> Option<&'a str> {
    facts.choose(rng).map(String::as_str)
}
