use crate::segment::segment;
use rand::seq::SliceRandom;
use rand::Rng;

/// Letters of the Mongolian Cyrillic alphabet, used as replacement letters.
pub const MONGOLIAN_CYRILLIC: [&str; 35] = [
    "а", "б", "в", "г", "д", "е", "ё", "ж", "з", "и", "й", "к", "л", "м", "н", "о", "ө", "п", "р",
    "с", "т", "у", "ү", "ф", "х", "ц", "ч", "ш", "щ", "ъ", "ы", "ь", "э", "ю", "я",
];

pub const DISTRACTOR_COUNT: usize = 3;

const MIN_CHANGES: usize = 2;
const MAX_CHANGES: usize = 4;
/// Regeneration attempts before a distractor is built by position instead.
const MAX_ATTEMPTS: usize = 8;
/// Redraws of a replacement letter that keeps coming out equal to the replaced one.
const MAX_LETTER_DRAWS: usize = 8;

/// Produces misspelled variants of a word for multiple-choice questions.
#[derive(Debug, Clone)]
pub struct DistractorGenerator {
    alphabet: Vec<String>,
}

impl Default for DistractorGenerator {
    fn default() -> Self {
        Self::new(MONGOLIAN_CYRILLIC.iter().map(|s| s.to_string()).collect())
    }
}

impl DistractorGenerator {
    pub fn new(alphabet: Vec<String>) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &[String] {
        &self.alphabet
    }

    /// Build [`DISTRACTOR_COUNT`] wrong spellings of `word`.
    ///
    /// `chars` is the segmentation of `word`. The distractors are not
    /// guaranteed to differ from each other.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        word: &str,
        chars: &[&str],
        rng: &mut R,
    ) -> Vec<String> {
        let required = MIN_CHANGES.min(changeable_positions(chars).len());

        (0..DISTRACTOR_COUNT)
            .map(|_| {
                for _ in 0..MAX_ATTEMPTS {
                    let candidate = self.perturb(word, chars, rng);
                    if differing_chars(word, &candidate) >= required {
                        return candidate;
                    }
                }
                let changes = self.change_count(chars, rng);
                self.substitute_positions(word.to_string(), changes, rng)
            })
            .collect()
    }

    /// Number of substitutions for one distractor: uniform in 2..=min(len, 4),
    /// capped by how many non-space characters the word has.
    fn change_count<R: Rng + ?Sized>(&self, chars: &[&str], rng: &mut R) -> usize {
        let upper = chars.len().min(MAX_CHANGES);
        let count = if upper >= MIN_CHANGES {
            rng.gen_range(MIN_CHANGES..=upper)
        } else {
            upper
        };
        count.min(changeable_positions(chars).len())
    }

    /// One distractor by substituting the first occurrence of randomly ordered
    /// characters of the word.
    ///
    /// Repeated characters resolve to their first occurrence in the partially
    /// changed word, which can land on an already substituted slot.
    fn perturb<R: Rng + ?Sized>(&self, word: &str, chars: &[&str], rng: &mut R) -> String {
        let mut remaining = self.change_count(chars, rng);
        let mut result = word.to_string();
        let mut queue = chars.to_vec();
        queue.shuffle(rng);

        while remaining > 0 {
            let Some(candidate) = queue.pop() else {
                break;
            };
            if candidate == " " {
                continue;
            }
            let Some(idx) = result.find(candidate) else {
                continue;
            };
            let Some(letter) = self.draw_letter(candidate, rng) else {
                continue;
            };

            result.replace_range(idx..idx + candidate.len(), letter);
            remaining -= 1;
        }

        if remaining > 0 {
            result = self.substitute_positions(result, remaining, rng);
        }
        result
    }

    /// Substitute `count` distinct non-space positions of `word`.
    fn substitute_positions<R: Rng + ?Sized>(
        &self,
        word: String,
        count: usize,
        rng: &mut R,
    ) -> String {
        let mut chars: Vec<String> = segment(&word).into_iter().map(str::to_string).collect();
        let mut positions = changeable_positions(&segment(&word));
        positions.shuffle(rng);

        for idx in positions.into_iter().take(count) {
            if let Some(letter) = self.draw_letter(&chars[idx], rng) {
                chars[idx] = letter.to_string();
            }
        }
        chars.concat()
    }

    /// A replacement letter different from `current`, reshuffling the alphabet
    /// per draw.
    fn draw_letter<R: Rng + ?Sized>(&self, current: &str, rng: &mut R) -> Option<&str> {
        for _ in 0..MAX_LETTER_DRAWS {
            let letter = self.alphabet.choose(rng)?;
            if letter != current {
                return Some(letter);
            }
        }
        self.alphabet
            .iter()
            .find(|l| l.as_str() != current)
            .map(String::as_str)
    }
}

fn changeable_positions(chars: &[&str]) -> Vec<usize> {
    chars
        .iter()
        .enumerate()
        .filter(|(_, c)| **c != " ")
        .map(|(i, _)| i)
        .collect()
}

/// Count of character positions at which `a` and `b` differ.
pub fn differing_chars(a: &str, b: &str) -> usize {
    let a = segment(a);
    let b = segment(b);
    let common = a.iter().zip(&b).filter(|(x, y)| x != y).count();
    common + a.len().abs_diff(b.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generate_for(word: &str, seed: u64) -> Vec<String> {
        let chars = segment(word);
        let mut rng = StdRng::seed_from_u64(seed);
        DistractorGenerator::default().generate(word, &chars, &mut rng)
    }

    #[test]
    fn test_generates_three_distractors() {
        let distractors = generate_for("байгаль", 1);
        assert_eq!(distractors.len(), DISTRACTOR_COUNT);
    }

    #[test]
    fn test_distractors_differ_in_at_least_two_chars() {
        for seed in 0..200 {
            for word in ["байгаль", "ус", "аав", "аа", "ээж ах", "mongol"] {
                for d in generate_for(word, seed) {
                    let diff = differing_chars(word, &d);
                    assert!(
                        diff >= 2,
                        "'{d}' differs from '{word}' in {diff} chars (seed {seed})"
                    );
                    assert!(diff <= 4, "'{d}' has too many changes (seed {seed})");
                }
            }
        }
    }

    #[test]
    fn test_distractors_keep_char_count() {
        for seed in 0..50 {
            for d in generate_for("хөдөө", seed) {
                assert_eq!(segment(&d).len(), 5);
            }
        }
    }

    #[test]
    fn test_spaces_are_never_replaced() {
        for seed in 0..100 {
            for d in generate_for("ус гал", seed) {
                assert_eq!(segment(&d)[2], " ", "space moved in '{d}'");
            }
        }
    }

    #[test]
    fn test_single_char_word_changes_once() {
        for seed in 0..20 {
            for d in generate_for("а", seed) {
                assert_eq!(differing_chars("а", &d), 1);
            }
        }
    }

    #[test]
    fn test_all_space_word_is_left_alone() {
        assert_eq!(generate_for("  ", 3), vec!["  "; 3]);
    }

    #[test]
    fn test_same_seed_same_distractors() {
        assert_eq!(generate_for("байгаль", 42), generate_for("байгаль", 42));
    }

    #[test]
    fn test_replacement_letters_come_from_alphabet() {
        let generator = DistractorGenerator::new(vec!["x".to_string(), "y".to_string()]);
        let word = "abcd";
        let chars = segment(word);
        let mut rng = StdRng::seed_from_u64(9);
        for d in generator.generate(word, &chars, &mut rng) {
            let changed: Vec<&str> = segment(&d)
                .into_iter()
                .zip(segment(word))
                .filter(|(new, old)| new != old)
                .map(|(new, _)| new)
                .collect();
            assert!(changed.len() >= 2);
            assert!(changed.iter().all(|c| *c == "x" || *c == "y"));
        }
    }

    #[test]
    fn test_single_letter_alphabet_terminates() {
        // every draw equals the replaced letter, so generation has to fall back
        let generator = DistractorGenerator::new(vec!["а".to_string()]);
        let word = "аа";
        let chars = segment(word);
        let mut rng = StdRng::seed_from_u64(5);
        let distractors = generator.generate(word, &chars, &mut rng);
        assert_eq!(distractors, vec!["аа"; 3]);
    }

    #[test]
    fn test_differing_chars() {
        assert_eq!(differing_chars("ус", "ус"), 0);
        assert_eq!(differing_chars("ус", "ав"), 2);
        assert_eq!(differing_chars("ус", "у"), 1);
    }
}
