//! Analysis orchestration: composes skill extraction, format
//! classification, match scoring, and suggestion synthesis into one report

use crate::analysis::format::{FormatAnalysis, FormatClassifier};
use crate::analysis::scorer::{MatchScorer, SkillsMatch};
use crate::analysis::skills::SkillExtractor;
use crate::analysis::suggestions::SuggestionSynthesizer;
use crate::config::Config;
use crate::error::Result;
use log::debug;
use serde::{Deserialize, Serialize};

/// The full comparison report. Constructed once per analysis call and never
/// mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    /// Match score in 0.0..=100.0, two decimal places
    pub score: f64,
    pub skills_match: SkillsMatch,
    /// Targeted suggestions first, generic ones last; order is meaningful
    pub suggestions: Vec<String>,
    pub format: FormatAnalysis,
}

/// Stateless analysis pipeline. Every call re-parses the text from scratch;
/// identical inputs produce identical reports.
pub struct AnalysisEngine {
    skills: SkillExtractor,
    format: FormatClassifier,
    suggestions: SuggestionSynthesizer,
}

impl AnalysisEngine {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            skills: SkillExtractor::new()?,
            format: FormatClassifier::new(&config.analysis)?,
            suggestions: SuggestionSynthesizer::new(&config.analysis),
        })
    }

    /// Analyze one resume/job-description pair: skills from both texts,
    /// format from the resume only, then score and suggestions.
    pub fn analyze(&self, resume_text: &str, job_text: &str) -> Result<ResumeAnalysis> {
        let resume_skills = self.skills.extract(resume_text);
        let job_skills = self.skills.extract(job_text);
        debug!(
            "Extracted {} resume skills, {} job skills",
            resume_skills.len(),
            job_skills.len()
        );

        let score = MatchScorer::score(&resume_skills, &job_skills);
        let format = self.format.classify(resume_text);
        let suggestions = self
            .suggestions
            .synthesize(&resume_skills, &job_skills, &format);
        let skills_match = MatchScorer::partition(&resume_skills, &job_skills);

        Ok(ResumeAnalysis {
            score,
            skills_match,
            suggestions,
            format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::format::{LengthRating, StructureRating};

    fn engine() -> AnalysisEngine {
        AnalysisEngine::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_full_match_scenario() {
        let resume = "Experience, Education, Skills: Python, AWS";
        let job = "Looking for Python and AWS experience";

        let analysis = engine().analyze(resume, job).unwrap();

        assert_eq!(analysis.score, 100.0);
        assert_eq!(analysis.skills_match.matched.as_slice(), &["aws", "python"]);
        assert!(analysis.skills_match.missing.is_empty());
        assert_eq!(analysis.format.structure, StructureRating::Excellent);
    }

    #[test]
    fn test_missing_skill_drives_first_suggestion() {
        let resume = "Education, Experience, Skills: Python";
        let job = "Must know Kubernetes";

        let analysis = engine().analyze(resume, job).unwrap();

        assert!(analysis.skills_match.missing.contains("kubernetes"));
        assert!(analysis.suggestions[0].contains("kubernetes"));
    }

    #[test]
    fn test_short_resume_gets_length_suggestion() {
        let resume = "Skills: Python";
        let job = "Python developer wanted";

        let analysis = engine().analyze(resume, job).unwrap();

        assert_eq!(analysis.format.length, LengthRating::TooShort);
        assert!(analysis
            .suggestions
            .iter()
            .any(|s| s.contains("Adjust resume length")));
    }

    #[test]
    fn test_empty_job_description_scores_zero() {
        let analysis = engine()
            .analyze("Education, Experience, Skills: Python", "")
            .unwrap();

        assert_eq!(analysis.score, 0.0);
        assert!(analysis.skills_match.matched.is_empty());
        assert!(analysis.skills_match.missing.is_empty());
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let resume = "Experience with Python, Docker, and machine learning. Education and skills listed.";
        let job = "Python and Kubernetes engineer with data science background";

        let first = engine().analyze(resume, job).unwrap();
        let second = engine().analyze(resume, job).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_report_serializes_with_flat_field_names() {
        let analysis = engine()
            .analyze("Education, Experience, Skills: Python", "Python")
            .unwrap();

        let json = serde_json::to_value(&analysis).unwrap();

        assert!(json.get("score").is_some());
        assert!(json.get("skills_match").is_some());
        assert!(json.get("suggestions").is_some());
        assert_eq!(json["format"]["length"], "Too Short");
    }
}
