//! Rock-paper-scissors, one valid round per invocation.

use crate::prompt;
use rand::Rng;
use std::io;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Rock,
    Paper,
    Scissors,
}

impl Hand {
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Paper, Hand::Scissors];

    pub fn parse(line: &str) -> Option<Hand> {
        match line.to_lowercase().as_str() {
            "rock" => Some(Hand::Rock),
            "paper" => Some(Hand::Paper),
            "scissors" => Some(Hand::Scissors),
            _ => None,
        }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Hand {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Hand::Rock => "rock",
            Hand::Paper => "paper",
            Hand::Scissors => "scissors",
        }
    }

    /// The hand this one defeats (rock > scissors > paper > rock).
    pub fn beats(&self) -> Hand {
        match self {
            Hand::Rock => Hand::Scissors,
            Hand::Scissors => Hand::Paper,
            Hand::Paper => Hand::Rock,
        }
    }

    /// How the winning hand defeats its victim.
    fn clash_line(&self) -> &'static str {
        match self {
            Hand::Rock => "Rock smashes scissors!",
            Hand::Paper => "Paper covers rock!",
            Hand::Scissors => "Scissors cuts paper!",
        }
    }
}

/// Round result relative to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

pub fn resolve(user: Hand, computer: Hand) -> Outcome {
    if user == computer {
        Outcome::Tie
    } else if user.beats() == computer {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

/// Read one valid choice, roll the computer's, and report the round.
pub fn run<R, B, W>(rng: &mut R, reader: &mut B, writer: &mut W) -> io::Result<()>
where
    R: Rng,
    B: BufRead,
    W: Write,
{
    let user = prompt::read_valid(
        reader,
        writer,
        "Choose rock or paper or scissors: ",
        "Wrong choice. Please choose rock, paper, or scissors.",
        Hand::parse,
    )?;
    let computer = Hand::random(rng);

    writeln!(
        writer,
        "\nYou chose {}, computer chose {}.\n",
        user.name(),
        computer.name()
    )?;

    match resolve(user, computer) {
        Outcome::Tie => writeln!(
            writer,
            "Both players selected {}. It's a tie!",
            user.name()
        ),
        Outcome::Win => writeln!(writer, "{} You win!", user.clash_line()),
        Outcome::Lose => writeln!(writer, "{} You lose.", computer.clash_line()),
    }
}
