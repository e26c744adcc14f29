//! Resume format classification: structure, clarity, and length

use crate::analysis::tokenizer::{Tokenizer, UnicodeTokenizer};
use crate::config::AnalysisConfig;
use crate::error::{Result, ResumeAnalyzerError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Section headers scanned for during structure analysis.
const SECTION_HEADERS: &[&str] = &[
    "education",
    "experience",
    "skills",
    "projects",
    "certifications",
    "achievements",
    "summary",
];

/// Sections required for the top structural rating.
const ESSENTIAL_SECTIONS: &[&str] = &["education", "experience", "skills"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructureRating {
    Excellent,
    Good,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClarityRating {
    #[serde(rename = "Too Concise")]
    TooConcise,
    Good,
    #[serde(rename = "Too Verbose")]
    TooVerbose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthRating {
    #[serde(rename = "Too Short")]
    TooShort,
    Appropriate,
    #[serde(rename = "Too Long")]
    TooLong,
}

impl fmt::Display for StructureRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureRating::Excellent => write!(f, "Excellent"),
            StructureRating::Good => write!(f, "Good"),
            StructureRating::NeedsImprovement => write!(f, "Needs Improvement"),
        }
    }
}

impl fmt::Display for ClarityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClarityRating::TooConcise => write!(f, "Too Concise"),
            ClarityRating::Good => write!(f, "Good"),
            ClarityRating::TooVerbose => write!(f, "Too Verbose"),
        }
    }
}

impl fmt::Display for LengthRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthRating::TooShort => write!(f, "Too Short"),
            LengthRating::Appropriate => write!(f, "Appropriate"),
            LengthRating::TooLong => write!(f, "Too Long"),
        }
    }
}

/// Three independent categorical judgments of document form, not content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatAnalysis {
    pub structure: StructureRating,
    pub clarity: ClarityRating,
    pub length: LengthRating,
}

/// Classifies a resume's structure (section coverage), clarity (average
/// sentence length), and length (word count) against fixed heuristics.
pub struct FormatClassifier<T: Tokenizer = UnicodeTokenizer> {
    tokenizer: T,
    section_patterns: Vec<(String, Regex)>,
    thresholds: AnalysisConfig,
}

impl FormatClassifier<UnicodeTokenizer> {
    pub fn new(thresholds: &AnalysisConfig) -> Result<Self> {
        Self::with_tokenizer(UnicodeTokenizer, thresholds)
    }
}

impl<T: Tokenizer> FormatClassifier<T> {
    pub fn with_tokenizer(tokenizer: T, thresholds: &AnalysisConfig) -> Result<Self> {
        let section_patterns = SECTION_HEADERS
            .iter()
            .map(|section| {
                Regex::new(&format!(r"\b{}\b", section))
                    .map(|re| (section.to_string(), re))
                    .map_err(|e| {
                        ResumeAnalyzerError::Analysis(format!(
                            "Failed to compile section pattern '{}': {}",
                            section, e
                        ))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            tokenizer,
            section_patterns,
            thresholds: thresholds.clone(),
        })
    }

    /// Run all three rules. Each is independent and order-insensitive.
    pub fn classify(&self, text: &str) -> FormatAnalysis {
        let sections = self.identify_sections(text);

        FormatAnalysis {
            structure: self.evaluate_structure(&sections),
            clarity: self.evaluate_clarity(text),
            length: self.evaluate_length(text),
        }
    }

    /// Whole-word scan of lowercased text for known section headers.
    pub fn identify_sections(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.section_patterns
            .iter()
            .filter(|(_, re)| re.is_match(&lowered))
            .map(|(section, _)| section.clone())
            .collect()
    }

    fn evaluate_structure(&self, sections: &[String]) -> StructureRating {
        let found_essential = ESSENTIAL_SECTIONS
            .iter()
            .filter(|essential| sections.iter().any(|s| s == *essential))
            .count();

        if found_essential == ESSENTIAL_SECTIONS.len() {
            StructureRating::Excellent
        } else if found_essential >= 2 {
            StructureRating::Good
        } else {
            StructureRating::NeedsImprovement
        }
    }

    fn evaluate_clarity(&self, text: &str) -> ClarityRating {
        let sentences = self.tokenizer.sentences(text);
        let avg_length = if sentences.is_empty() {
            0.0
        } else {
            let total_words: usize = sentences
                .iter()
                .map(|s| s.split_whitespace().count())
                .sum();
            total_words as f64 / sentences.len() as f64
        };

        if avg_length < self.thresholds.clarity_min_avg_words {
            ClarityRating::TooConcise
        } else if avg_length > self.thresholds.clarity_max_avg_words {
            ClarityRating::TooVerbose
        } else {
            ClarityRating::Good
        }
    }

    fn evaluate_length(&self, text: &str) -> LengthRating {
        let word_count = self.tokenizer.words(text).len();

        if word_count < self.thresholds.length_min_words {
            LengthRating::TooShort
        } else if word_count > self.thresholds.length_max_words {
            LengthRating::TooLong
        } else {
            LengthRating::Appropriate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> FormatClassifier {
        FormatClassifier::new(&AnalysisConfig {
            clarity_min_avg_words: 8.0,
            clarity_max_avg_words: 20.0,
            length_min_words: 200,
            length_max_words: 1000,
        })
        .unwrap()
    }

    #[test]
    fn test_all_essential_sections_is_excellent() {
        let analysis = classifier().classify("Education\nExperience\nSkills");
        assert_eq!(analysis.structure, StructureRating::Excellent);
    }

    #[test]
    fn test_two_essential_sections_is_good() {
        let analysis = classifier().classify("Experience\nSkills\nProjects");
        assert_eq!(analysis.structure, StructureRating::Good);
    }

    #[test]
    fn test_few_essential_sections_needs_improvement() {
        // Non-essential sections alone do not count towards structure
        let analysis = classifier().classify("Projects\nCertifications\nSummary\nSkills");
        assert_eq!(analysis.structure, StructureRating::NeedsImprovement);
    }

    #[test]
    fn test_section_scan_is_whole_word() {
        let sections = classifier().identify_sections("experienced in upskilling teams");
        assert!(sections.is_empty());
    }

    #[test]
    fn test_empty_text_is_too_concise_and_too_short() {
        let analysis = classifier().classify("");
        assert_eq!(analysis.clarity, ClarityRating::TooConcise);
        assert_eq!(analysis.length, LengthRating::TooShort);
    }

    #[test]
    fn test_short_sentences_are_too_concise() {
        let analysis = classifier().classify("Did things. Made stuff. Was there.");
        assert_eq!(analysis.clarity, ClarityRating::TooConcise);
    }

    #[test]
    fn test_long_sentences_are_too_verbose() {
        let sentence = format!("{} end.", "word ".repeat(30));
        let analysis = classifier().classify(&sentence);
        assert_eq!(analysis.clarity, ClarityRating::TooVerbose);
    }

    #[test]
    fn test_moderate_sentences_are_good() {
        let text = "I build reliable distributed systems in Rust every single day. \
                    My teams ship production services that customers depend on heavily.";
        let analysis = classifier().classify(text);
        assert_eq!(analysis.clarity, ClarityRating::Good);
    }

    #[test]
    fn test_length_boundaries() {
        let short = "word ".repeat(199);
        let appropriate = "word ".repeat(200);
        let long = "word ".repeat(1001);

        assert_eq!(classifier().classify(&short).length, LengthRating::TooShort);
        assert_eq!(classifier().classify(&appropriate).length, LengthRating::Appropriate);
        assert_eq!(classifier().classify(&long).length, LengthRating::TooLong);
    }

    #[test]
    fn test_rating_display_strings() {
        assert_eq!(StructureRating::NeedsImprovement.to_string(), "Needs Improvement");
        assert_eq!(ClarityRating::TooConcise.to_string(), "Too Concise");
        assert_eq!(LengthRating::Appropriate.to_string(), "Appropriate");
    }
}
