use super::{read_answer, Outcome, HINT, QUIT};
use crate::console::Console;
use crate::lesson::LessonEntry;
use std::io;

/// Ask for the spelling of `origin_word` until the learner gets it or quits.
/// There is no attempt limit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpellingQuiz;

impl SpellingQuiz {
    pub fn run<C: Console + ?Sized>(
        &self,
        entry: &LessonEntry,
        console: &mut C,
    ) -> io::Result<Outcome> {
        let target = entry.word.to_lowercase();
        console.write_line(&format!("How do you spell {}?", entry.origin_word))?;

        loop {
            let answer = read_answer(console, "Your answer:")?;

            if answer == HINT {
                console.write_line(&entry.description)?;
            } else if answer == QUIT {
                console.write_line(&format!("The correct spelling is: {}", entry.word))?;
                return Ok(Outcome::Failed);
            } else if answer == target {
                console.write_line(&format!("Correct! The word is: {}", entry.word))?;
                return Ok(Outcome::Passed);
            } else {
                console.write_line("Incorrect. Try again.")?;
            }
        }
    }
}
