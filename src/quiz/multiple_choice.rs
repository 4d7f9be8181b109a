use super::{read_answer, Outcome, QUIT};
use crate::console::Console;
use crate::distractor::DistractorGenerator;
use crate::error::{parse_in_range, NumberError};
use crate::lesson::LessonEntry;
use crate::segment::segment;
use rand::seq::SliceRandom;
use rand::Rng;
use std::io;

/// Shuffled answer options for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choices {
    pub options: Vec<String>,
    /// 1-based position of the correct word in `options`.
    pub correct: usize,
}

/// Four options, one guess.
#[derive(Debug, Clone, Copy)]
pub struct MultipleChoiceQuiz<'a> {
    generator: &'a DistractorGenerator,
}

impl<'a> MultipleChoiceQuiz<'a> {
    pub fn new(generator: &'a DistractorGenerator) -> Self {
        Self { generator }
    }

    /// The correct word plus three distractors, shuffled.
    ///
    /// The correct slot is tracked through the shuffle rather than searched
    /// for, so a distractor that happens to equal the word cannot move it.
    pub fn build_choices<R: Rng + ?Sized>(&self, word: &str, rng: &mut R) -> Choices {
        let chars = segment(word);
        let mut tagged: Vec<(bool, String)> = std::iter::once((true, word.to_string()))
            .chain(
                self.generator
                    .generate(word, &chars, rng)
                    .into_iter()
                    .map(|d| (false, d)),
            )
            .collect();
        tagged.shuffle(rng);

        let correct = tagged
            .iter()
            .position(|(is_correct, _)| *is_correct)
            .map_or(1, |idx| idx + 1);

        Choices {
            options: tagged.into_iter().map(|(_, option)| option).collect(),
            correct,
        }
    }

    pub fn run<C: Console + ?Sized, R: Rng + ?Sized>(
        &self,
        entry: &LessonEntry,
        console: &mut C,
        rng: &mut R,
    ) -> io::Result<Outcome> {
        let choices = self.build_choices(&entry.word, rng);
        let count = choices.options.len();

        for (idx, option) in choices.options.iter().enumerate() {
            console.write_line(&format!("{}. {option}", idx + 1))?;
        }

        let prompt = format!("Enter your choice (1-{count}):");
        loop {
            console.write_line("")?;
            console.write_line(&format!("How do you spell {}?", entry.origin_word))?;
            let answer = read_answer(console, &prompt)?;

            if answer == QUIT {
                console.write_line(&format!("The word was: {}", entry.word))?;
                return Ok(Outcome::Failed);
            }

            match parse_in_range(&answer, 1, count as i64) {
                Err(NumberError::NonNumeric(_)) => {
                    console.write_line("Invalid input! Please enter a number.")?;
                }
                Err(NumberError::OutOfRange { .. }) => {
                    console.write_line(&format!(
                        "Invalid input! Please enter a number between 1 and {count}."
                    ))?;
                }
                Ok(choice) if choice as usize == choices.correct => {
                    console.write_line("Correct! You found the word!")?;
                    console.write_line(&entry.word)?;
                    console.write_line(&entry.description)?;
                    console.write_line(&entry.origin_word)?;
                    return Ok(Outcome::Passed);
                }
                Ok(_) => {
                    console.write_line(&format!(
                        "Wrong! The correct choice was {}!",
                        choices.correct
                    ))?;
                    console.write_line(&format!("The word was: {}", entry.word))?;
                    console.write_line(&entry.description)?;
                    console.write_line(&entry.origin_word)?;
                    return Ok(Outcome::Failed);
                }
            }
        }
    }
}
