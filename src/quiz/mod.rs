pub mod hangman;
pub mod multiple_choice;
pub mod spelling;

pub use hangman::HangmanQuiz;
pub use multiple_choice::MultipleChoiceQuiz;
pub use spelling::SpellingQuiz;

use crate::console::Console;
use rand::Rng;
use std::io;

/// Typed in place of an answer to give up on the current word.
pub const QUIT: &str = "quit";
/// Typed in spelling mode to show the entry's description.
pub const HINT: &str = "hint";

/// How one quiz exchange ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum Outcome {
    Passed,
    Failed,
}

impl Outcome {
    pub fn is_passed(self) -> bool {
        self == Outcome::Passed
    }
}

/// Quiz selector as given on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LessonType {
    Random,
    Spelling,
    MultipleChoice,
    Hangman,
}

impl LessonType {
    /// Map the numeric selector `0..=3`; anything else means [`LessonType::Random`].
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => LessonType::Spelling,
            2 => LessonType::MultipleChoice,
            3 => LessonType::Hangman,
            _ => LessonType::Random,
        }
    }

    /// Settle on a playable quiz, picking uniformly for [`LessonType::Random`].
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> QuizKind {
        match self {
            LessonType::Spelling => QuizKind::Spelling,
            LessonType::MultipleChoice => QuizKind::MultipleChoice,
            LessonType::Hangman => QuizKind::Hangman,
            LessonType::Random => match rng.gen_range(0..3) {
                0 => QuizKind::Spelling,
                1 => QuizKind::MultipleChoice,
                _ => QuizKind::Hangman,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum QuizKind {
    Spelling,
    MultipleChoice,
    Hangman,
}

/// Next answer line, lowercased. Blank lines are skipped after re-showing
/// `prompt`; closed input reads as [`QUIT`].
pub(crate) fn read_answer<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
) -> io::Result<String> {
    loop {
        console.write_line(prompt)?;
        match console.read_line()? {
            None => return Ok(QUIT.to_string()),
            Some(line) if line.is_empty() => continue,
            Some(line) => return Ok(line.to_lowercase()),
        }
    }
}
