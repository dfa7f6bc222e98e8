//! Integration test: scripted Wheel of Fortune sessions.

use parlor::games::wheel::{self, WheelSession};
use parlor::jokes::BuiltinJokes;
use parlor::menu;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::Cursor;

fn play_scripted(secret: &'static str, script: &str) -> String {
    let mut session = WheelSession::with_secret(secret);
    let mut input = Cursor::new(script.to_string());
    let mut output = Vec::new();

    wheel::play(&mut session, &mut input, &mut output).unwrap();

    String::from_utf8(output).unwrap()
}

#[test]
fn test_guessing_every_letter_wins_with_all_attempts_intact() {
    let transcript = play_scripted("PYTHON", "p\ny\nt\nh\no\nn\n");

    assert!(transcript.contains("_ _ _ _ _ _"));
    assert!(transcript.contains("P Y T H O _"));
    assert!(transcript.contains("Congratulations, you have guessed the word: PYTHON"));
    // No miss ever happened, so only the full budget is ever reported.
    assert!(transcript.contains("7 attempts have left."));
    assert!(!transcript.contains("6 attempts have left."));
}

#[test]
fn test_seven_misses_lose_and_reveal_the_secret() {
    let transcript = play_scripted("PYTHON", "q\nw\ne\nr\ns\nz\nx\n");

    assert!(transcript.contains("1 attempt has left."));
    assert!(transcript.contains("Sorry, you lost. The word was: PYTHON"));
    assert!(!transcript.contains("Congratulations"));
    // Misses never reveal anything.
    assert!(!transcript.contains("P _"));
}

#[test]
fn test_invalid_guesses_are_rejected_without_penalty() {
    let transcript = play_scripted("PYTHON", "77\nab\n!\np\ny\nt\nh\no\nn\n");

    assert_eq!(
        transcript.matches("Wrong input. Please input one letter.").count(),
        3
    );
    assert!(transcript.contains("Congratulations, you have guessed the word: PYTHON"));
    assert!(!transcript.contains("6 attempts have left."));
}

#[test]
fn test_mixed_hits_and_misses_report_both_ways() {
    let transcript = play_scripted("PYTHON", "z\np\nq\ny\nt\nh\no\nn\n");

    assert!(transcript.contains("You are wrong!"));
    assert!(transcript.contains("You are right!"));
    assert!(transcript.contains("5 attempts have left."));
    assert!(transcript.contains("Congratulations, you have guessed the word: PYTHON"));
}

/// Driving the game through the menu with the whole alphabet as guesses:
/// alphabetical guessing racks up seven misses before completing any word in
/// the vocabulary, so the session always ends in a loss, and a leftover 'n'
/// line answers the play-again prompt.
#[test]
fn test_menu_driven_wheel_session_runs_to_completion() {
    let mut script = String::from("play a game\n1\n2\n");
    for letter in 'a'..='z' {
        script.push(letter);
        script.push('\n');
    }

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut input = Cursor::new(script);
    let mut output = Vec::new();

    menu::run(&mut rng, &mut input, &mut output, &BuiltinJokes).unwrap();

    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.contains("Please guess the letter: "));
    assert!(transcript.contains("Sorry, you lost. The word was: "));
    assert!(transcript.contains("Play again? (y/n): "));
}
