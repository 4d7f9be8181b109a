use crate::error::{parse_in_range, LessonError, LineError};
use rand::seq::SliceRandom;
use rand::Rng;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

const FIELD_DELIMITER: char = ';';

/// One vocabulary item from a lesson file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonEntry {
    pub lesson_number: u8,
    pub word: String,
    pub description: String,
    pub origin_word: String,
}

impl LessonEntry {
    pub fn new(
        lesson_number: u8,
        word: impl Into<String>,
        description: impl Into<String>,
        origin_word: impl Into<String>,
    ) -> Self {
        Self {
            lesson_number,
            word: word.into(),
            description: description.into(),
            origin_word: origin_word.into(),
        }
    }
}

/// Parse a single `number;word;description;origin` line.
///
/// Fields past the fourth are ignored; fields are taken verbatim.
pub fn parse_line(line: &str) -> Result<LessonEntry, LineError> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() < 4 {
        return Err(LineError::TooFewFields {
            found: fields.len(),
        });
    }

    let lesson_number = parse_in_range(fields[0], 0, u8::MAX as i64)? as u8;

    Ok(LessonEntry::new(lesson_number, fields[1], fields[2], fields[3]))
}

/// Ordered lesson entries loaded from one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonSet {
    entries: Vec<LessonEntry>,
}

impl LessonSet {
    /// Parse lesson text, keeping only entries numbered `filter` when one is given.
    ///
    /// Malformed lines are reported through `warn!` and skipped; lines filtered
    /// out are dropped silently.
    pub fn parse(text: &str, filter: Option<u8>) -> Self {
        let mut entries = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let entry = match parse_line(line) {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(line = idx + 1, "skipping lesson line '{line}': {e}");
                    continue;
                }
            };

            if filter.is_some_and(|n| n != entry.lesson_number) {
                continue;
            }
            entries.push(entry);
        }

        debug!(count = entries.len(), ?filter, "parsed lesson entries");
        Self { entries }
    }

    /// Read and parse a lesson file.
    ///
    /// Invalid UTF-8 is replaced rather than rejected so one bad byte does not
    /// cost the whole file.
    pub fn from_file<P: AsRef<Path>>(path: P, filter: Option<u8>) -> Result<Self, LessonError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LessonError::NotFound(path.to_path_buf()));
        }

        let bytes = fs::read(path).map_err(|source| LessonError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);
        if matches!(text, Cow::Owned(_)) {
            warn!(path = %path.display(), "lesson file is not valid UTF-8, invalid bytes replaced");
        }

        Ok(Self::parse(&text, filter))
    }

    pub fn from_entries(entries: Vec<LessonEntry>) -> Self {
        Self { entries }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.entries.shuffle(rng);
    }

    pub fn entries(&self) -> &[LessonEntry] {
        &self.entries
    }

    pub fn first(&self) -> Option<&LessonEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One `word (description)- origin` line per entry, in set order.
    pub fn recap_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| format!("{} ({})- {}", e.word, e.description, e.origin_word))
            .collect()
    }
}
