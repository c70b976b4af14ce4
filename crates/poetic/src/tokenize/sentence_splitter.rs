//! # Sentence Splitter

use core::ops::Range;

use regex::Regex;

/// Abbreviations whose trailing period does not end a sentence.
///
/// Compared case-insensitively, without the trailing period.
pub const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "mt", "vs", "etc", "e.g", "i.e", "cf", "al",
    "jan", "feb", "apr", "jun", "jul", "aug", "sept", "oct", "nov", "inc", "ltd", "corp",
    "capt",
];

/// Abbreviations which are also ordinary words; only an abbreviation when a
/// number follows: `No. 5`, `vol. 2`.
pub const NUMBERED_ABBREVIATIONS: &[&str] = &["no", "vol", "ch", "fig", "pp"];

/// Closing characters which may trail a terminator: `He said "stop."`.
const TERMINATOR_PATTERN: &str = r#"[.!?\u{2026}]+["'\u{201D}\u{2019})\]]*"#;

/// Rule-based sentence boundary detector.
///
/// A boundary is a run of terminal punctuation (`.`, `!`, `?`, `…`), with any
/// closing quotes or brackets, followed by whitespace or the end of text.
/// A lone `.` is not a boundary when it closes a known abbreviation, a
/// numbered abbreviation followed by a digit (`No. 5`), or a single-letter
/// initial; nor when the next sentence would start in lowercase. A lone `I`
/// is the pronoun unless another initial follows it.
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    terminator_re: Regex,
    abbreviations: Vec<String>,
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new(DEFAULT_ABBREVIATIONS)
    }
}

impl SentenceSplitter {
    /// Build a splitter with the given abbreviation list.
    ///
    /// ## Arguments
    /// * `abbreviations` - abbreviations without their trailing period.
    pub fn new<S: AsRef<str>>(abbreviations: &[S]) -> Self {
        Self {
            terminator_re: Regex::new(TERMINATOR_PATTERN).expect("static terminator pattern"),
            abbreviations: abbreviations
                .iter()
                .map(|a| a.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// The abbreviation list, lowercased.
    pub fn abbreviations(&self) -> &[String] {
        &self.abbreviations
    }

    /// Find the byte ranges of all sentences in `text`.
    ///
    /// Ranges are trimmed of surrounding whitespace; whitespace-only
    /// stretches produce no range.
    pub fn split_ranges(
        &self,
        text: &str,
    ) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        let mut start = 0;

        for m in self.terminator_re.find_iter(text) {
            if m.start() < start {
                continue;
            }
            let rest = &text[m.end()..];
            let at_gap = rest.chars().next().is_none_or(char::is_whitespace);
            if !at_gap || !self.is_boundary(&text[start..m.start()], m.as_str(), rest) {
                continue;
            }

            push_trimmed(text, start..m.end(), &mut ranges);
            start = m.end();
        }
        push_trimmed(text, start..text.len(), &mut ranges);

        ranges
    }

    /// Split `text` into trimmed sentence substrings.
    pub fn split<'a>(
        &self,
        text: &'a str,
    ) -> Vec<&'a str> {
        self.split_ranges(text)
            .into_iter()
            .map(|r| &text[r])
            .collect()
    }

    fn is_boundary(
        &self,
        before: &str,
        terminator: &str,
        rest: &str,
    ) -> bool {
        if terminator != "." {
            return true;
        }

        let last_word = before
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or_default()
            .trim_start_matches(['(', '[', '"', '\'', '\u{201C}', '\u{2018}']);

        let next = rest.trim_start();

        // Initial: "J. R. R. Tolkien". The pronoun "I" is only an initial
        // when another initial follows it.
        if let Some(c) = single_capital(last_word)
            && (c != 'I' || next.split_whitespace().next().is_some_and(is_initial))
        {
            return false;
        }

        let lowered = last_word.to_lowercase();
        if self.abbreviations.iter().any(|a| a == &lowered) {
            return false;
        }
        if NUMBERED_ABBREVIATIONS.contains(&lowered.as_str())
            && next.chars().next().is_some_and(|c| c.is_ascii_digit())
        {
            return false;
        }

        !next.chars().next().is_some_and(char::is_lowercase)
    }
}

fn single_capital(word: &str) -> Option<char> {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() && c.is_uppercase() => Some(c),
        _ => None,
    }
}

fn is_initial(word: &str) -> bool {
    word.strip_suffix('.').and_then(single_capital).is_some()
}

fn push_trimmed(
    text: &str,
    range: Range<usize>,
    ranges: &mut Vec<Range<usize>>,
) {
    let slice = &text[range.clone()];
    let trimmed = slice.trim_start();
    let start = range.start + (slice.len() - trimmed.len());
    let trimmed = trimmed.trim_end();
    if !trimmed.is_empty() {
        ranges.push(start..start + trimmed.len());
    }
}
