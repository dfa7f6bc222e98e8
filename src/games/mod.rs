//! The three interactive mini-games.

pub mod number_guess;
pub mod rock_paper_scissors;
pub mod wheel;
