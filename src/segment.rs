//! Splitting text into user-visible characters along UTF-8 sequence boundaries.
//!
//! Lesson vocabulary is mostly Cyrillic, where every letter is two bytes wide.
//! Hangman masks and distractor substitution both index by character, never by
//! byte, so everything goes through [`segment`].

/// Width of the UTF-8 sequence introduced by `lead`, judged by its leading bits.
///
/// Continuation bytes and invalid lead bytes report a width of 1 so a scan over
/// malformed input still advances one byte at a time.
pub fn sequence_width(lead: u8) -> usize {
    if lead & 0x80 == 0x00 {
        1
    } else if lead & 0xE0 == 0xC0 {
        2
    } else if lead & 0xF0 == 0xE0 {
        3
    } else if lead & 0xF8 == 0xF0 {
        4
    } else {
        1
    }
}

/// Segment arbitrary bytes. Total over any input: concatenating the result
/// always gives back `bytes`, truncated trailing sequences included.
pub fn segment_bytes(bytes: &[u8]) -> Vec<&[u8]> {
    let mut chars = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let end = (i + sequence_width(bytes[i])).min(bytes.len());
        chars.push(&bytes[i..end]);
        i = end;
    }
    chars
}

/// Segment a string into one slice per character.
pub fn segment(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut chars = Vec::with_capacity(text.len());
    let mut i = 0;
    while i < bytes.len() {
        // a &str is valid UTF-8, so the lead byte width always lands on a boundary
        let end = i + sequence_width(bytes[i]);
        chars.push(&text[i..end]);
        i = end;
    }
    chars
}

/// Number of characters in `text` as [`segment`] counts them.
pub fn char_count(text: &str) -> usize {
    text.bytes().filter(|b| b & 0xC0 != 0x80).count()
}
