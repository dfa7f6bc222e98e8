//! Number-guessing game.
//!
//! A hidden target in [1, 20] and unbounded guesses. There is deliberately no
//! attempt limit; the loop only ends on a correct guess.

use crate::constants::{NUMBER_MAX, NUMBER_MIN};
use crate::prompt;
use rand::Rng;
use std::io;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    TooSmall,
    TooHigh,
    Correct,
}

pub fn evaluate(target: u32, guess: u32) -> GuessOutcome {
    if guess == target {
        GuessOutcome::Correct
    } else if guess < target {
        GuessOutcome::TooSmall
    } else {
        GuessOutcome::TooHigh
    }
}

/// Run a full game against a freshly picked target.
pub fn run<R, B, W>(rng: &mut R, reader: &mut B, writer: &mut W) -> io::Result<()>
where
    R: Rng,
    B: BufRead,
    W: Write,
{
    let target = rng.gen_range(NUMBER_MIN..=NUMBER_MAX);
    play(target, reader, writer)
}

/// Drive the guess loop for a known target until it is found.
pub fn play<B: BufRead, W: Write>(
    target: u32,
    reader: &mut B,
    writer: &mut W,
) -> io::Result<()> {
    loop {
        let guess = prompt::read_number(
            reader,
            writer,
            "Try to guess a number between 1 and 20: ",
        )?;

        if !(NUMBER_MIN..=NUMBER_MAX).contains(&guess) {
            writeln!(writer, "Please enter a number between 1 and 20.")?;
            continue;
        }

        match evaluate(target, guess) {
            GuessOutcome::Correct => {
                writeln!(writer, "You are right! Great!")?;
                return Ok(());
            }
            GuessOutcome::TooSmall => writeln!(writer, "Your figure is too small")?,
            GuessOutcome::TooHigh => writeln!(writer, "Your figure is too high")?,
        }
    }
}
