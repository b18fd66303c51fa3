//! Sentence, word, letter and syllable counts

use serde::{Deserialize, Serialize};

/// Words with at least this many syllables count as complex (Gunning Fog)
pub const COMPLEX_WORD_SYLLABLES: usize = 3;

/// Counts extracted from a text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStatistics {
    pub sentences: usize,
    pub words: usize,
    pub syllables: usize,
    pub complex_words: usize,
    pub letters: usize,
}

impl TextStatistics {
    /// Tokenize `text` and count everything the scoring formulas need
    ///
    /// Sentences end at runs of `.`, `!` or `?`; a fragment only counts if it
    /// contains a word. Words are whitespace separated tokens with leading
    /// and trailing punctuation trimmed; tokens without a letter are ignored.
    pub fn from_text(text: &str) -> Self {
        let sentences = text
            .split(['.', '!', '?'])
            .filter(|fragment| fragment.split_whitespace().any(|t| word_of(t).is_some()))
            .count();

        let mut stats = TextStatistics {
            sentences,
            ..Default::default()
        };

        for word in text.split_whitespace().filter_map(word_of) {
            let syllables = count_syllables(word);
            stats.words += 1;
            stats.syllables += syllables;
            stats.letters += word.chars().filter(|c| c.is_alphabetic()).count();
            if syllables >= COMPLEX_WORD_SYLLABLES {
                stats.complex_words += 1;
            }
        }

        stats
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0 || self.sentences == 0
    }

    /// Words per sentence
    pub fn average_sentence_length(&self) -> f64 {
        self.words as f64 / self.sentences as f64
    }

    /// Syllables per word
    pub fn average_syllables_per_word(&self) -> f64 {
        self.syllables as f64 / self.words as f64
    }
}

fn word_of(token: &str) -> Option<&str> {
    let word = token.trim_matches(|c: char| !c.is_alphanumeric());
    word.chars().any(|c| c.is_alphabetic()).then_some(word)
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Heuristic syllable count: groups of consecutive vowels, minus one for a
/// trailing silent `e`, at least 1
///
/// Not phonetically exact ("table" counts as one syllable).
pub fn count_syllables(word: &str) -> usize {
    let lower = word.to_lowercase();

    let mut count = 0;
    let mut previous_was_vowel = false;
    for c in lower.chars() {
        let vowel = is_vowel(c);
        if vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = vowel;
    }

    if lower.ends_with('e') && count > 1 {
        count -= 1;
    }

    count.max(1)
}
