//! Report structures wrapping the core analysis for presentation

use crate::analysis::engine::ResumeAnalysis;
use crate::analysis::format::StructureRating;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full report handed to formatters: the core analysis plus derived chart
/// axes and generation metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis: ResumeAnalysis,
    pub radar: RadarAxes,
    pub metadata: ReportMetadata,
}

/// Radar-chart axis values, all in 0.0..=100.0. A presentation-side
/// derivation from the analysis, not an analysis result itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarAxes {
    pub technical_skills: f64,
    pub format: f64,
    pub overall_match: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub analyzer_version: String,
    pub resume_file: String,
    pub job_file: String,
    pub processing_time_ms: u64,
}

impl AnalysisReport {
    pub fn new(
        analysis: ResumeAnalysis,
        resume_file: String,
        job_file: String,
        processing_time_ms: u64,
    ) -> Self {
        let radar = RadarAxes::from_analysis(&analysis);
        Self {
            analysis,
            radar,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                analyzer_version: env!("CARGO_PKG_VERSION").to_string(),
                resume_file,
                job_file,
                processing_time_ms,
            },
        }
    }
}

impl RadarAxes {
    pub fn from_analysis(analysis: &ResumeAnalysis) -> Self {
        let total_job_skills =
            analysis.skills_match.matched.len() + analysis.skills_match.missing.len();
        let technical_skills = if total_job_skills == 0 {
            0.0
        } else {
            analysis.skills_match.matched.len() as f64 / total_job_skills as f64 * 100.0
        };

        let format = match analysis.format.structure {
            StructureRating::Excellent => 95.0,
            StructureRating::Good => 80.0,
            StructureRating::NeedsImprovement => 60.0,
        };

        Self {
            technical_skills,
            format,
            overall_match: analysis.score,
        }
    }
}
