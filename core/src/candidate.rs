//! Rhyme candidate types.
//!
//! This module provides:
//! - `RhymeType`: similarity band (or the cross-language tag)
//! - `Quality`: human-facing label derived from similarity
//! - `RhymeCandidate`: one scored match, recomputed per query

use serde::{Deserialize, Serialize};
use std::fmt;

/// Similarity band a candidate falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RhymeType {
    Perfect,
    Near,
    Slant,
    Assonant,
    /// Admitted through a suffix bridge rather than phonetic scoring.
    CrossLanguage,
}

impl RhymeType {
    /// Classify a same-language similarity score.
    pub fn from_similarity(similarity: f64) -> Self {
        if similarity >= 0.95 {
            RhymeType::Perfect
        } else if similarity >= 0.85 {
            RhymeType::Near
        } else if similarity >= 0.75 {
            RhymeType::Slant
        } else {
            RhymeType::Assonant
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RhymeType::Perfect => "perfect",
            RhymeType::Near => "near",
            RhymeType::Slant => "slant",
            RhymeType::Assonant => "assonant",
            RhymeType::CrossLanguage => "cross-language",
        }
    }
}

impl fmt::Display for RhymeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quality label shown next to a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Fair,
}

impl Quality {
    pub fn from_similarity(similarity: f64) -> Self {
        if similarity >= 0.95 {
            Quality::Excellent
        } else if similarity >= 0.85 {
            Quality::VeryGood
        } else if similarity >= 0.75 {
            Quality::Good
        } else {
            Quality::Fair
        }
    }

    /// Label for a candidate; bridged matches are always `Good`.
    pub fn for_candidate(candidate: &RhymeCandidate) -> Self {
        match candidate.rhyme_type {
            RhymeType::CrossLanguage => Quality::Good,
            _ => Quality::from_similarity(candidate.similarity),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Quality::Excellent => "Excellent",
            Quality::VeryGood => "Very Good",
            Quality::Good => "Good",
            Quality::Fair => "Fair",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scored rhyme match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RhymeCandidate {
    pub word: String,
    pub last_syllable: String,
    pub phonetic_suffix: String,
    pub syllable_count: usize,
    pub similarity: f64,
    pub rhyme_type: RhymeType,
}
