//! Menu dispatcher: free-text category matching, the games sub-menu, and the
//! outer play-again loop.

use crate::constants::{MOVIES_FILE, MUSIC_FILE, STORIES_FILE};
use crate::facts;
use crate::games::{number_guess, rock_paper_scissors, wheel};
use crate::jokes::JokeProvider;
use crate::prompt;
use crate::ui;
use rand::Rng;
use std::io;
use std::io::{BufRead, Write};

/// Top-level menu categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Movies,
    Music,
    Games,
    Jokes,
    Stories,
}

/// Keyword table in priority order; the first category whose keyword occurs
/// as a substring of the lowercased input wins.
const KEYWORDS: [(Category, &[&str]); 5] = [
    (Category::Movies, &["movie"]),
    (Category::Music, &["music"]),
    (Category::Games, &["game"]),
    (Category::Jokes, &["joke"]),
    (Category::Stories, &["interesting story", "interesting stories"]),
];

impl Category {
    pub fn match_input(input: &str) -> Option<Category> {
        let lowered = input.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
            .map(|(category, _)| *category)
    }
}

/// Games sub-menu, first level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameBranch {
    Logical,
    Mathematical,
}

impl GameBranch {
    fn from_choice(choice: u32) -> Option<GameBranch> {
        match choice {
            1 => Some(GameBranch::Logical),
            2 => Some(GameBranch::Mathematical),
            _ => None,
        }
    }
}

/// Games sub-menu, logical branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalGame {
    RockPaperScissors,
    WheelOfFortune,
}

impl LogicalGame {
    fn from_choice(choice: u32) -> Option<LogicalGame> {
        match choice {
            1 => Some(LogicalGame::RockPaperScissors),
            2 => Some(LogicalGame::WheelOfFortune),
            _ => None,
        }
    }
}

/// Greet, dispatch, and repeat until the user declines to play again.
pub fn run<R, B, W, J>(
    rng: &mut R,
    reader: &mut B,
    writer: &mut W,
    jokes: &J,
) -> io::Result<()>
where
    R: Rng,
    B: BufRead,
    W: Write,
    J: JokeProvider,
{
    loop {
        ui::greet(writer)?;

        let category = prompt::read_valid(
            reader,
            writer,
            "User's choice: ",
            "Please select an option from the available categories: \
             movies, music, games, jokes, interesting stories?",
            Category::match_input,
        )?;

        dispatch(category, rng, reader, writer, jokes)?;

        let play_again = prompt::read_valid(
            reader,
            writer,
            "Play again? (y/n): ",
            "Wrong input. Please enter 'y' to play again or 'n' to exit.",
            |line| match line.to_lowercase().as_str() {
                "y" => Some(true),
                "n" => Some(false),
                _ => None,
            },
        )?;

        if !play_again {
            return Ok(());
        }
    }
}

fn dispatch<R, B, W, J>(
    category: Category,
    rng: &mut R,
    reader: &mut B,
    writer: &mut W,
    jokes: &J,
) -> io::Result<()>
where
    R: Rng,
    B: BufRead,
    W: Write,
    J: JokeProvider,
{
    match category {
        Category::Movies => show_random_fact(MOVIES_FILE, rng, writer),
        Category::Music => show_random_fact(MUSIC_FILE, rng, writer),
        Category::Stories => show_random_fact(STORIES_FILE, rng, writer),
        Category::Jokes => writeln!(writer, "{}", jokes.random_joke(rng)),
        Category::Games => games_menu(rng, reader, writer),
    }
}

/// Print one random line of the source, or nothing when the source is empty.
fn show_random_fact<R: Rng, W: Write>(
    path: &str,
    rng: &mut R,
    writer: &mut W,
) -> io::Result<()> {
    let list = facts::load(path, writer)?;
    if let Some(fact) = facts::pick_random(&list, rng) {
        writeln!(writer, "{}", fact)?;
    }
    Ok(())
}

/// Two-level numeric sub-menu; an invalid choice re-prompts at its own level.
fn games_menu<R, B, W>(rng: &mut R, reader: &mut B, writer: &mut W) -> io::Result<()>
where
    R: Rng,
    B: BufRead,
    W: Write,
{
    let branch = loop {
        let choice = prompt::read_number(
            reader,
            writer,
            "Please choose the game. For logical games press 1, \
             for mathematical games press 2: ",
        )?;
        match GameBranch::from_choice(choice) {
            Some(branch) => break branch,
            None => writeln!(writer, "Please select correct option")?,
        }
    };

    match branch {
        GameBranch::Mathematical => number_guess::run(rng, reader, writer),
        GameBranch::Logical => {
            let game = loop {
                let choice = prompt::read_number(
                    reader,
                    writer,
                    "For Rock-Paper-Scissors game press 1, \
                     for Wheel of Fortune game press 2: ",
                )?;
                match LogicalGame::from_choice(choice) {
                    Some(game) => break game,
                    None => writeln!(writer, "Please select correct option")?,
                }
            };
            match game {
                LogicalGame::RockPaperScissors => rock_paper_scissors::run(rng, reader, writer),
                LogicalGame::WheelOfFortune => wheel::run(rng, reader, writer),
            }
        }
    }
}
