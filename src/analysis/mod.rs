//! Resume analysis engine: skill extraction, format classification,
//! match scoring, and suggestion synthesis

pub mod engine;
pub mod format;
pub mod scorer;
pub mod skills;
pub mod suggestions;
pub mod tokenizer;

pub use engine::{AnalysisEngine, ResumeAnalysis};
pub use format::{ClarityRating, FormatAnalysis, FormatClassifier, LengthRating, StructureRating};
pub use scorer::{MatchScorer, SkillsMatch};
pub use skills::{SkillExtractor, SkillSet};
