//! Word-guessing game ("Wheel of Fortune").
//!
//! A session holds a secret uppercase word, a mask of revealed positions, and
//! a budget of 7 incorrect guesses. A correct letter reveals every occurrence
//! at once and costs nothing, even when the letter was already revealed; an
//! incorrect letter costs one attempt.

use crate::constants::{MASK_PLACEHOLDER, MAX_ATTEMPTS, WHEEL_WORDS};
use crate::prompt;
use rand::Rng;
use std::io;
use std::io::{BufRead, Write};

/// Result of guessing a single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterResult {
    Hit,
    Miss,
}

/// One game's state, created fresh per invocation and discarded at game end.
pub struct WheelSession {
    secret: &'static str,
    mask: Vec<char>,
    attempts_left: u32,
}

impl WheelSession {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self::with_secret(WHEEL_WORDS[rng.gen_range(0..WHEEL_WORDS.len())])
    }

    pub fn with_secret(secret: &'static str) -> Self {
        Self {
            secret,
            mask: vec![MASK_PLACEHOLDER; secret.chars().count()],
            attempts_left: MAX_ATTEMPTS,
        }
    }

    /// Apply one letter guess, revealing all matching positions on a hit and
    /// consuming one attempt on a miss. Input is normalized to uppercase.
    pub fn guess(&mut self, letter: char) -> LetterResult {
        let letter = letter.to_ascii_uppercase();
        let mut hit = false;

        for (index, secret_char) in self.secret.chars().enumerate() {
            if secret_char == letter {
                self.mask[index] = secret_char;
                hit = true;
            }
        }

        if hit {
            LetterResult::Hit
        } else {
            self.attempts_left = self.attempts_left.saturating_sub(1);
            LetterResult::Miss
        }
    }

    pub fn is_won(&self) -> bool {
        !self.mask.contains(&MASK_PLACEHOLDER)
    }

    pub fn is_lost(&self) -> bool {
        self.attempts_left == 0 && !self.is_won()
    }

    pub fn is_over(&self) -> bool {
        self.is_won() || self.attempts_left == 0
    }

    pub fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    pub fn secret(&self) -> &str {
        self.secret
    }

    /// The mask as shown to the player, letters separated by spaces.
    pub fn masked_word(&self) -> String {
        let mut display = String::with_capacity(self.mask.len() * 2);
        for (index, c) in self.mask.iter().enumerate() {
            if index > 0 {
                display.push(' ');
            }
            display.push(*c);
        }
        display
    }

    /// Remaining-attempt line with singular/plural wording.
    pub fn attempts_line(&self) -> String {
        if self.attempts_left == 1 {
            "1 attempt has left.".to_string()
        } else {
            format!("{} attempts have left.", self.attempts_left)
        }
    }
}

fn parse_letter(line: &str) -> Option<char> {
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}

/// Run a full game against a freshly picked secret word.
pub fn run<R, B, W>(rng: &mut R, reader: &mut B, writer: &mut W) -> io::Result<()>
where
    R: Rng,
    B: BufRead,
    W: Write,
{
    let mut session = WheelSession::new(rng);
    play(&mut session, reader, writer)
}

/// Drive an existing session to its win or loss report.
pub fn play<B: BufRead, W: Write>(
    session: &mut WheelSession,
    reader: &mut B,
    writer: &mut W,
) -> io::Result<()> {
    while !session.is_over() {
        writeln!(writer, "{}", session.masked_word())?;
        writeln!(writer, "{}", session.attempts_line())?;

        let letter = prompt::read_valid(
            reader,
            writer,
            "Please guess the letter: ",
            "Wrong input. Please input one letter.",
            parse_letter,
        )?;

        match session.guess(letter) {
            LetterResult::Hit => writeln!(writer, "You are right!")?,
            LetterResult::Miss => writeln!(writer, "You are wrong!")?,
        }
    }

    if session.is_won() {
        writeln!(
            writer,
            "Congratulations, you have guessed the word: {}",
            session.secret()
        )
    } else {
        writeln!(writer, "Sorry, you lost. The word was: {}", session.secret())
    }
}
