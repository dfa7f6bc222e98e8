// Word-guessing game constants
pub const MAX_ATTEMPTS: u32 = 7;
pub const MASK_PLACEHOLDER: char = '_';
pub const WHEEL_WORDS: [&str; 5] = ["PYTHON", "PROGRAMMING", "DEVELOPER", "FUNCTION", "ENGINEER"];

// Number-guessing game constants
pub const NUMBER_MIN: u32 = 1;
pub const NUMBER_MAX: u32 = 20;

// Fact sources, read fresh from the working directory on every request
pub const MOVIES_FILE: &str = "movies.txt";
pub const MUSIC_FILE: &str = "music.txt";
pub const STORIES_FILE: &str = "interesting_stories.txt";
