//! Greeting banner and options table.

use comfy_table::{ContentArrangement, Table};
use crossterm::style::Stylize;
use std::io;
use std::io::Write;

const HELLO_BANNER: &str = r#"
 _   _      _ _       _
| | | |    | | |     | |
| |_| | ___| | | ___ | |
|  _  |/ _ \ | |/ _ \| |
| | | |  __/ | | (_) |_|
\_| |_/\___|_|_|\___/(_)
"#;

const OPTIONS: [&str; 5] = [
    "\u{1F37F} Movies",
    "\u{1F3B5} Music",
    "\u{1F3AE} Games",
    "\u{1F602} Jokes",
    "\u{1F4DA} Interesting stories",
];

fn options_table() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Your options:"]);
    for option in OPTIONS {
        table.add_row(vec![option]);
    }
    table
}

/// Print the banner, the welcome line, and the options table.
pub fn greet<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", HELLO_BANNER.green())?;
    writeln!(
        writer,
        "Welcome to the entertainment chatbot! What are you interested in?"
    )?;
    writeln!(writer, "{}", options_table())?;
    Ok(())
}
