//! Improvement suggestion synthesis

use crate::analysis::format::{ClarityRating, FormatAnalysis, LengthRating, StructureRating};
use crate::analysis::skills::SkillSet;
use crate::config::AnalysisConfig;

const STRUCTURE_SUGGESTION: &str =
    "Improve resume structure by including all essential sections (Education, Experience, Skills)";
const CLARITY_SUGGESTION: &str = "Optimize sentence length for better readability";

const GENERAL_SUGGESTIONS: &[&str] = &[
    "Quantify achievements with specific metrics and results",
    "Use action verbs to describe experiences",
    "Ensure consistent formatting throughout the document",
];

/// Combines targeted signals (missing skills, format ratings) with a fixed
/// set of general best-practice suggestions. Output order is significant:
/// targeted suggestions come first, generic ones last.
pub struct SuggestionSynthesizer {
    length_suggestion: String,
}

impl SuggestionSynthesizer {
    pub fn new(thresholds: &AnalysisConfig) -> Self {
        Self {
            length_suggestion: format!(
                "Adjust resume length to be between {}-{} words",
                thresholds.length_min_words, thresholds.length_max_words
            ),
        }
    }

    pub fn synthesize(
        &self,
        resume_skills: &SkillSet,
        job_skills: &SkillSet,
        format: &FormatAnalysis,
    ) -> Vec<String> {
        let mut suggestions = Vec::new();

        let missing = job_skills.difference(resume_skills);
        if !missing.is_empty() {
            suggestions.push(format!("Add missing skills: {}", missing.join(", ")));
        }

        if format.structure != StructureRating::Excellent {
            suggestions.push(STRUCTURE_SUGGESTION.to_string());
        }

        if matches!(format.clarity, ClarityRating::TooConcise | ClarityRating::TooVerbose) {
            suggestions.push(CLARITY_SUGGESTION.to_string());
        }

        if matches!(format.length, LengthRating::TooShort | LengthRating::TooLong) {
            suggestions.push(self.length_suggestion.clone());
        }

        suggestions.extend(GENERAL_SUGGESTIONS.iter().map(|s| s.to_string()));

        suggestions
    }
}
