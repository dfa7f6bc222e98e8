//! Joke provider collaborator.
//!
//! The dispatcher only needs "give me one displayable joke"; the trait keeps
//! the source swappable and the built-in implementation ships a small list of
//! programming one-liners.

use rand::Rng;

pub trait JokeProvider {
    fn random_joke<R: Rng>(&self, rng: &mut R) -> &str;
}

/// Built-in joke list, always non-empty.
pub struct BuiltinJokes;

const JOKES: [&str; 12] = [
    "There are only 10 kinds of people in this world: those who know binary and those who don't.",
    "A programmer's wife asks: 'Would you go to the shop and pick up a loaf of bread? If they have eggs, get a dozen.' He returns with 12 loaves.",
    "Why do programmers prefer dark mode? Because light attracts bugs.",
    "A SQL query walks into a bar, walks up to two tables and asks: 'Can I join you?'",
    "How many programmers does it take to change a light bulb? None, that's a hardware problem.",
    "To understand what recursion is, you must first understand recursion.",
    "There are two hard things in computer science: cache invalidation, naming things, and off-by-one errors.",
    "I would tell you a UDP joke, but you might not get it.",
    "A programmer is told to 'go to hell'; he finds the worst part of that statement is the 'go to'.",
    "Why did the programmer quit his job? Because he didn't get arrays.",
    "Debugging: being the detective in a crime movie where you are also the murderer.",
    "It works on my machine.",
];

impl JokeProvider for BuiltinJokes {
    fn random_joke<R: Rng>(&self, rng: &mut R) -> &str {
        JOKES[rng.gen_range(0..JOKES.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_joke_comes_from_the_list() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..20 {
            let joke = BuiltinJokes.random_joke(&mut rng);
            assert!(JOKES.contains(&joke));
            assert!(!joke.is_empty());
        }
    }

    #[test]
    fn test_random_joke_is_reproducible_with_a_seed() {
        let first = BuiltinJokes.random_joke(&mut ChaCha8Rng::seed_from_u64(99));
        let second = BuiltinJokes.random_joke(&mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(first, second);
    }
}
