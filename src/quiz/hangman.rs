use super::{read_answer, Outcome, QUIT};
use crate::console::Console;
use crate::lesson::LessonEntry;
use crate::segment::segment;
use std::io;

const HIDDEN: &str = "_";

/// Partially revealed target word, one slot per character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    target: Vec<String>,
    slots: Vec<String>,
}

impl Mask {
    /// Hide every character of `word` except spaces.
    pub fn new(word: &str) -> Self {
        let target: Vec<String> = segment(word).into_iter().map(str::to_string).collect();
        let slots = target
            .iter()
            .map(|c| if c == " " { c.clone() } else { HIDDEN.to_string() })
            .collect();
        Self { target, slots }
    }

    /// Reveal every slot holding `guess`. Returns whether anything matched.
    pub fn reveal(&mut self, guess: &str) -> bool {
        let mut found = false;
        for (slot, c) in self.slots.iter_mut().zip(&self.target) {
            if c == guess {
                slot.clone_from(c);
                found = true;
            }
        }
        found
    }

    pub fn is_solved(&self) -> bool {
        !self.slots.iter().any(|s| s == HIDDEN)
    }

    pub fn render(&self) -> String {
        self.slots.concat()
    }
}

/// Letter-by-letter guessing with no guess limit.
#[derive(Debug, Clone, Copy, Default)]
pub struct HangmanQuiz;

impl HangmanQuiz {
    pub fn run<C: Console + ?Sized>(
        &self,
        entry: &LessonEntry,
        console: &mut C,
    ) -> io::Result<Outcome> {
        let target = entry.word.to_lowercase();
        let mut mask = Mask::new(&target);

        while !mask.is_solved() {
            console.clear()?;
            console.write_line("")?;
            console.write_line("Guess the word!")?;
            console.write_line(&format!("Current: {}", mask.render()))?;

            let guess = read_answer(console, "Enter a letter or a full word:")?;

            if guess == QUIT {
                console.write_line(&format!("The word was: {}", entry.word))?;
                return Ok(Outcome::Failed);
            }
            if guess == target {
                break;
            }

            let single_char = segment(&guess).len() == 1;
            if !(single_char && mask.reveal(&guess)) {
                console.write_line("Wrong!")?;
            }
        }

        console.write_line("")?;
        console.write_line("You found the word!")?;
        console.write_line(&entry.word)?;
        console.write_line(&entry.description)?;
        console.write_line(&entry.origin_word)?;
        Ok(Outcome::Passed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;

    fn run(entry: &LessonEntry, input: &[&str]) -> (Outcome, ScriptedConsole) {
        let mut console = ScriptedConsole::new(input.iter().copied());
        let outcome = HangmanQuiz.run(entry, &mut console).unwrap();
        (outcome, console)
    }

    #[test]
    fn test_mask_prereveals_spaces() {
        let mask = Mask::new("ус гал");
        assert_eq!(mask.render(), "__ ___");
        assert!(!mask.is_solved());
    }

    #[test]
    fn test_mask_reveals_every_occurrence() {
        let mut mask = Mask::new("байгаль");
        assert!(mask.reveal("а"));
        assert_eq!(mask.render(), "_а__а__");
        assert!(!mask.reveal("ө"));
        assert_eq!(mask.render(), "_а__а__");
    }

    #[test]
    fn test_full_word_guess_succeeds_immediately() {
        let entry = LessonEntry::new(1, "Байгаль", "nature", "nature");
        let (outcome, console) = run(&entry, &["БАЙГАЛЬ"]);
        assert_eq!(outcome, Outcome::Passed);
        assert!(console.output().contains(&"You found the word!".to_string()));
        assert_eq!(console.output().last().unwrap(), "nature");
    }

    #[test]
    fn test_letter_guesses_reveal_word() {
        let entry = LessonEntry::new(2, "ус", "water", "water");
        let (outcome, console) = run(&entry, &["у", "С"]);
        assert_eq!(outcome, Outcome::Passed);
        assert!(console.output().contains(&"Current: __".to_string()));
        assert!(console.output().contains(&"Current: у_".to_string()));
        assert_eq!(console.remaining_input(), 0);
    }

    #[test]
    fn test_wrong_letter_keeps_session_open() {
        let entry = LessonEntry::new(2, "ус", "water", "water");
        let (outcome, console) = run(&entry, &["я", "у", "с"]);
        assert_eq!(outcome, Outcome::Passed);
        let wrong = console.output().iter().filter(|l| *l == "Wrong!").count();
        assert_eq!(wrong, 1);
        // the mask after the miss is unchanged
        let currents: Vec<&String> = console
            .output()
            .iter()
            .filter(|l| l.starts_with("Current:"))
            .collect();
        assert_eq!(currents[0], "Current: __");
        assert_eq!(currents[1], "Current: __");
    }

    #[test]
    fn test_multi_char_wrong_guess() {
        let entry = LessonEntry::new(2, "ус", "water", "water");
        let (outcome, console) = run(&entry, &["ус ", "quit"]);
        assert_eq!(outcome, Outcome::Failed);
        assert!(console.output().contains(&"Wrong!".to_string()));
        assert_eq!(console.output().last().unwrap(), "The word was: ус");
    }

    #[test]
    fn test_quit_and_closed_input_fail() {
        let entry = LessonEntry::new(2, "ус", "water", "water");
        let (outcome, _) = run(&entry, &["QUIT"]);
        assert_eq!(outcome, Outcome::Failed);

        let (outcome, _) = run(&entry, &["у"]);
        assert_eq!(outcome, Outcome::Failed);
    }

    #[test]
    fn test_screen_cleared_per_round() {
        let entry = LessonEntry::new(2, "ус", "water", "water");
        let (_, console) = run(&entry, &["у", "с"]);
        assert_eq!(console.clears(), 2);
    }

    #[test]
    fn test_word_without_letters_is_already_solved() {
        let entry = LessonEntry::new(0, " ", "blank", "blank");
        let (outcome, console) = run(&entry, &[]);
        assert_eq!(outcome, Outcome::Passed);
        assert_eq!(console.clears(), 0);
    }
}
