//! Parlor - a line-oriented terminal entertainment chatbot.
//!
//! This module exposes the menu, prompt, and game logic for testing and
//! external use.

pub mod constants;
pub mod facts;
pub mod games;
pub mod jokes;
pub mod menu;
pub mod prompt;
pub mod ui;
