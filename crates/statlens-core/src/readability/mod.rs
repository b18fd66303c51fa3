//! Readability scoring
//!
//! Three classical formulas, all reported on a 0-100 reading-ease scale
//! where higher means easier:
//!
//! - Flesch Reading Ease
//! - Gunning Fog (grade level rescaled to ease)
//! - Coleman-Liau (grade level rescaled to ease)

mod text;

pub use text::{count_syllables, TextStatistics, COMPLEX_WORD_SYLLABLES};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

use crate::errors::StatsError;

/// Readability formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadabilityMethod {
    #[default]
    Flesch,
    GunningFog,
    ColemanLiau,
}

impl ReadabilityMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            ReadabilityMethod::Flesch => "flesch",
            ReadabilityMethod::GunningFog => "gunning_fog",
            ReadabilityMethod::ColemanLiau => "coleman_liau",
        }
    }
}

impl fmt::Display for ReadabilityMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReadabilityMethod {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flesch" => Ok(ReadabilityMethod::Flesch),
            "gunning_fog" => Ok(ReadabilityMethod::GunningFog),
            "coleman_liau" => Ok(ReadabilityMethod::ColemanLiau),
            other => Err(StatsError::InvalidInput(format!(
                "unknown readability method '{}' (expected flesch, gunning_fog or coleman_liau)",
                other
            ))),
        }
    }
}

/// Reading-ease band of a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadabilityLevel {
    #[serde(rename = "Very Easy")]
    VeryEasy,
    #[serde(rename = "Easy")]
    Easy,
    #[serde(rename = "Fairly Easy")]
    FairlyEasy,
    #[serde(rename = "Standard")]
    Standard,
    #[serde(rename = "Fairly Difficult")]
    FairlyDifficult,
    #[serde(rename = "Difficult")]
    Difficult,
    #[serde(rename = "Very Difficult")]
    VeryDifficult,
    #[serde(rename = "Unable to determine")]
    Undetermined,
}

impl ReadabilityLevel {
    /// Band a 0-100 ease score (90/80/70/60/50/30 cut points)
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            ReadabilityLevel::VeryEasy
        } else if score >= 80.0 {
            ReadabilityLevel::Easy
        } else if score >= 70.0 {
            ReadabilityLevel::FairlyEasy
        } else if score >= 60.0 {
            ReadabilityLevel::Standard
        } else if score >= 50.0 {
            ReadabilityLevel::FairlyDifficult
        } else if score >= 30.0 {
            ReadabilityLevel::Difficult
        } else {
            ReadabilityLevel::VeryDifficult
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReadabilityLevel::VeryEasy => "Very Easy",
            ReadabilityLevel::Easy => "Easy",
            ReadabilityLevel::FairlyEasy => "Fairly Easy",
            ReadabilityLevel::Standard => "Standard",
            ReadabilityLevel::FairlyDifficult => "Fairly Difficult",
            ReadabilityLevel::Difficult => "Difficult",
            ReadabilityLevel::VeryDifficult => "Very Difficult",
            ReadabilityLevel::Undetermined => "Unable to determine",
        }
    }
}

impl fmt::Display for ReadabilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Readability score of one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityResult {
    /// Ease score in [0, 100]
    pub score: f64,
    pub level: ReadabilityLevel,
    /// How much the score can be trusted, in [0, 100]
    pub confidence: f64,
    pub method: ReadabilityMethod,
    pub statistics: TextStatistics,
}

/// Words per sentence considered typical prose
const SWEET_SPOT: (f64, f64) = (10.0, 25.0);

/// Score `text` with the given formula
///
/// Text without a single word yields score 0, confidence 0 and
/// [`ReadabilityLevel::Undetermined`].
pub fn readability_score(text: &str, method: ReadabilityMethod) -> ReadabilityResult {
    let statistics = TextStatistics::from_text(text);

    if statistics.is_empty() {
        debug!(%method, "no words found, readability undetermined");
        return ReadabilityResult {
            score: 0.0,
            level: ReadabilityLevel::Undetermined,
            confidence: 0.0,
            method,
            statistics,
        };
    }

    let raw = match method {
        ReadabilityMethod::Flesch => flesch(&statistics),
        ReadabilityMethod::GunningFog => grade_to_ease(gunning_fog_grade(&statistics)),
        ReadabilityMethod::ColemanLiau => grade_to_ease(coleman_liau_grade(&statistics)),
    };
    let score = raw.clamp(0.0, 100.0);
    let confidence = confidence(&statistics);

    trace!(%method, raw, score, confidence, "readability computed");

    ReadabilityResult {
        score,
        level: ReadabilityLevel::from_score(score),
        confidence,
        method,
        statistics,
    }
}

/// Flesch Reading Ease: `206.835 - 1.015 ASL - 84.6 ASW`
fn flesch(stats: &TextStatistics) -> f64 {
    206.835
        - 1.015 * stats.average_sentence_length()
        - 84.6 * stats.average_syllables_per_word()
}

/// Gunning Fog grade: `0.4 (ASL + 100 · complex / words)`
fn gunning_fog_grade(stats: &TextStatistics) -> f64 {
    let complex_ratio = stats.complex_words as f64 / stats.words as f64;
    0.4 * (stats.average_sentence_length() + 100.0 * complex_ratio)
}

/// Coleman-Liau grade: `0.0588 L - 0.296 S - 15.8`
fn coleman_liau_grade(stats: &TextStatistics) -> f64 {
    let words = stats.words as f64;
    let letters_per_100 = stats.letters as f64 / words * 100.0;
    let sentences_per_100 = stats.sentences as f64 / words * 100.0;
    0.0588 * letters_per_100 - 0.296 * sentences_per_100 - 15.8
}

/// Grade 0 maps to 100, grade 20 to 0
fn grade_to_ease(grade: f64) -> f64 {
    100.0 - 5.0 * grade
}

fn confidence(stats: &TextStatistics) -> f64 {
    let word_factor = (stats.words as f64 / 100.0).min(1.0);
    let sentence_factor = (stats.sentences as f64 / 5.0).min(1.0);

    let asl = stats.average_sentence_length();
    let distance = if asl < SWEET_SPOT.0 {
        SWEET_SPOT.0 - asl
    } else if asl > SWEET_SPOT.1 {
        asl - SWEET_SPOT.1
    } else {
        0.0
    };
    let length_factor = (1.0 - distance / 10.0).max(0.0);

    (40.0 * word_factor + 30.0 * sentence_factor + 30.0 * length_factor).clamp(0.0, 100.0)
}
