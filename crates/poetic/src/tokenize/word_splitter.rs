//! # Word Splitter
//!
//! Treebank-style word tokenization:
//! * punctuation is split into its own tokens (`...` and `--` stay whole),
//! * contractions split before the clitic: `don't` -> `do`, `n't`,
//! * initialisms (`U.S.`) and decimals (`3.14`) stay whole,
//! * double quotes become ``` `` ``` when opening and `''` when closing,
//! * a period glued to the final token of a sentence is split off.

use regex::Regex;

const WORD_PATTERN: &str = concat!(
    r"(?:\p{L}\.){2,}",
    r"|\d+(?:[.,:]\d+)+",
    r"|[\w&&[^_]](?:['\u{2019}]?[\w&&[^_]]|-[\w&&[^_]])*",
    r"|\.\.\.|--",
    r"|\S",
);

const CLITIC_PATTERN: &str = r"(?i)^(.+?)(n['\u{2019}]t|['\u{2019}](?:s|re|ve|ll|d|m))$";

/// Regex-driven word tokenizer.
#[derive(Debug, Clone)]
pub struct WordSplitter {
    word_re: Regex,
    clitic_re: Regex,
}

impl Default for WordSplitter {
    fn default() -> Self {
        Self {
            word_re: Regex::new(WORD_PATTERN).expect("static word pattern"),
            clitic_re: Regex::new(CLITIC_PATTERN).expect("static clitic pattern"),
        }
    }
}

impl WordSplitter {
    /// Split a single sentence into word tokens.
    pub fn split(
        &self,
        sentence: &str,
    ) -> Vec<String> {
        let mut tokens: Vec<String> = Vec::new();

        for m in self.word_re.find_iter(sentence) {
            let word = m.as_str();
            if word == "\"" || word == "\u{201C}" || word == "\u{201D}" {
                let opening = sentence[..m.start()]
                    .chars()
                    .next_back()
                    .is_none_or(|c| c.is_whitespace() || "([{".contains(c));
                tokens.push(if opening { "``" } else { "''" }.to_string());
            } else if let Some(caps) = self.clitic_re.captures(word) {
                tokens.push(caps[1].to_string());
                tokens.push(caps[2].to_string());
            } else {
                tokens.push(word.to_string());
            }
        }

        if let Some(last) = tokens.last_mut()
            && last.len() > 1
            && last.ends_with('.')
            && *last != "..."
        {
            last.pop();
            tokens.push(".".to_string());
        }

        tokens
    }
}
