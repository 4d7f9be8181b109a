use crate::config::Config;
use crate::console::Console;
use crate::distractor::DistractorGenerator;
use crate::lesson::{LessonEntry, LessonSet};
use crate::quiz::{HangmanQuiz, MultipleChoiceQuiz, Outcome, QuizKind, SpellingQuiz};
use itertools::Itertools;
use rand::Rng;
use std::io;
use tracing::info;

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub show_recap: bool,
    pub pause_between_entries: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_recap: true,
            pause_between_entries: true,
        }
    }
}

impl From<&Config> for SessionConfig {
    fn from(cfg: &Config) -> Self {
        Self {
            show_recap: cfg.show_recap,
            pause_between_entries: cfg.pause_between_entries,
        }
    }
}

/// Result of one quizzed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryResult {
    pub word: String,
    pub outcome: Outcome,
}

/// Drives one quiz mode over a lesson set.
///
/// Spelling walks the whole shuffled set; multiple choice and hangman only
/// quiz the first entry after shuffling.
pub struct Session<'a> {
    config: SessionConfig,
    generator: &'a DistractorGenerator,
}

impl<'a> Session<'a> {
    pub fn new(config: SessionConfig, generator: &'a DistractorGenerator) -> Self {
        Self { config, generator }
    }

    pub fn run<C: Console + ?Sized, R: Rng + ?Sized>(
        &self,
        mut lessons: LessonSet,
        kind: QuizKind,
        console: &mut C,
        rng: &mut R,
    ) -> io::Result<Vec<EntryResult>> {
        if self.config.show_recap {
            self.recap(&lessons, console)?;
        }

        console.write_line("")?;
        console.write_line("Starting lesson...")?;
        console.write_line("")?;
        lessons.shuffle(rng);

        let mut results = Vec::new();
        match kind {
            QuizKind::Spelling => {
                for entry in lessons.entries() {
                    let outcome = SpellingQuiz.run(entry, console)?;
                    results.push(record(entry, outcome));
                    if self.config.pause_between_entries {
                        self.pause(console, "Press Enter to continue...")?;
                        console.clear()?;
                    }
                }
            }
            QuizKind::MultipleChoice | QuizKind::Hangman => {
                if let Some(entry) = lessons.first() {
                    let outcome = if kind == QuizKind::Hangman {
                        HangmanQuiz.run(entry, console)?
                    } else {
                        MultipleChoiceQuiz::new(self.generator).run(entry, console, rng)?
                    };
                    results.push(record(entry, outcome));
                    if self.config.pause_between_entries {
                        console.read_line()?;
                    }
                }
            }
        }

        info!(
            %kind,
            passed = results.iter().filter(|r| r.outcome.is_passed()).count(),
            total = results.len(),
            "session finished: {}",
            results
                .iter()
                .map(|r| format!("{}={}", r.word, r.outcome))
                .join(", ")
        );
        Ok(results)
    }

    fn recap<C: Console + ?Sized>(&self, lessons: &LessonSet, console: &mut C) -> io::Result<()> {
        console.write_line("")?;
        console.write_line("Recap")?;
        console.write_line("")?;
        for line in lessons.recap_lines() {
            console.write_line(&line)?;
        }
        self.pause(console, "Press Enter to start the lesson...")?;
        console.clear()
    }

    /// Show `message` and wait for one line; closed input does not block.
    fn pause<C: Console + ?Sized>(&self, console: &mut C, message: &str) -> io::Result<()> {
        console.write_line("")?;
        console.write_line(message)?;
        console.write_line("")?;
        console.read_line()?;
        Ok(())
    }
}

fn record(entry: &LessonEntry, outcome: Outcome) -> EntryResult {
    info!(word = %entry.word, lesson = entry.lesson_number, %outcome, "entry finished");
    EntryResult {
        word: entry.word.clone(),
        outcome,
    }
}
