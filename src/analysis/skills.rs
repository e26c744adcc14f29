//! Skill vocabulary extraction via fixed pattern matching

use crate::error::{Result, ResumeAnalyzerError};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Skill pattern groups. The category is informational; matching and
/// scoring treat all tokens uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Programming,
    Concepts,
    DataStores,
    DevOps,
    Methodologies,
}

/// Closed vocabulary of recognized skill tokens, grouped by category. Every
/// alternation branch is word-boundary anchored, which also prevents shorter
/// tokens from matching inside longer ones ("java" never fires inside
/// "javascript", "sql" never fires inside "postgresql").
const SKILL_PATTERNS: &[(SkillCategory, &str)] = &[
    (
        SkillCategory::Programming,
        r"\b(python|java|javascript|react|angular|vue|node\.js|aws|azure|git)\b",
    ),
    (
        SkillCategory::Concepts,
        r"\b(machine learning|artificial intelligence|data science|blockchain)\b",
    ),
    (
        SkillCategory::DataStores,
        r"\b(sql|mongodb|postgresql|mysql|oracle)\b",
    ),
    (
        SkillCategory::DevOps,
        r"\b(docker|kubernetes|jenkins|ci/cd)\b",
    ),
    (
        SkillCategory::Methodologies,
        r"\b(agile|scrum|kanban|waterfall)\b",
    ),
];

/// Every canonical token the extractor can emit, for vocabulary-closure
/// checks.
pub const VOCABULARY: &[&str] = &[
    "python", "java", "javascript", "react", "angular", "vue", "node.js", "aws", "azure", "git",
    "machine learning", "artificial intelligence", "data science", "blockchain",
    "sql", "mongodb", "postgresql", "mysql", "oracle",
    "docker", "kubernetes", "jenkins", "ci/cd",
    "agile", "scrum", "kanban", "waterfall",
];

/// Deduplicated, lexicographically sorted set of lowercase skill tokens.
/// Set operations produce new values; a `SkillSet` is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet(Vec<String>);

impl SkillSet {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        tokens.sort();
        tokens.dedup();
        SkillSet(tokens)
    }

    pub fn empty() -> Self {
        SkillSet(Vec::new())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.binary_search_by(|t| t.as_str().cmp(token)).is_ok()
    }

    /// Tokens present in both sets, sorted.
    pub fn intersection(&self, other: &SkillSet) -> SkillSet {
        SkillSet(
            self.0
                .iter()
                .filter(|t| other.contains(t))
                .cloned()
                .collect(),
        )
    }

    /// Tokens in `self` but not in `other`, sorted.
    pub fn difference(&self, other: &SkillSet) -> SkillSet {
        SkillSet(
            self.0
                .iter()
                .filter(|t| !other.contains(t))
                .cloned()
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn join(&self, sep: &str) -> String {
        self.0.join(sep)
    }
}

/// Extracts the fixed skill vocabulary from free text. Matching is
/// case-insensitive (input is lowercased first) and purely textual.
pub struct SkillExtractor {
    patterns: Vec<(SkillCategory, Regex)>,
}

impl SkillExtractor {
    pub fn new() -> Result<Self> {
        let patterns = SKILL_PATTERNS
            .iter()
            .map(|(category, pattern)| {
                Regex::new(pattern)
                    .map(|re| (*category, re))
                    .map_err(|e| {
                        ResumeAnalyzerError::Analysis(format!(
                            "Failed to compile skill pattern '{}': {}",
                            pattern, e
                        ))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Extract all recognized skill tokens from `text`, deduplicated and
    /// sorted. No frequency or position information is retained.
    pub fn extract(&self, text: &str) -> SkillSet {
        let lowered = text.to_lowercase();
        let mut tokens = Vec::new();

        for (_, pattern) in &self.patterns {
            for mat in pattern.find_iter(&lowered) {
                tokens.push(mat.as_str().to_string());
            }
        }

        SkillSet::new(tokens)
    }

    pub fn vocabulary_size(&self) -> usize {
        VOCABULARY.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> SkillExtractor {
        SkillExtractor::new().unwrap()
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        assert!(extractor().extract("").is_empty());
    }

    #[test]
    fn test_extraction_is_case_insensitive() {
        let skills = extractor().extract("Proficient in PYTHON and Docker");

        assert!(skills.contains("python"));
        assert!(skills.contains("docker"));
    }

    #[test]
    fn test_output_is_sorted_and_deduplicated() {
        let skills = extractor().extract("python docker python aws docker");

        assert_eq!(skills.as_slice(), &["aws", "docker", "python"]);
    }

    #[test]
    fn test_word_boundaries_suppress_substring_matches() {
        // "javascript" must not also emit "java"; "postgresql" must not emit "sql"
        let skills = extractor().extract("javascript and postgresql");

        assert_eq!(skills.as_slice(), &["javascript", "postgresql"]);
    }

    #[test]
    fn test_multi_word_and_punctuated_tokens() {
        let skills = extractor().extract("machine learning, node.js, ci/cd pipelines");

        assert!(skills.contains("machine learning"));
        assert!(skills.contains("node.js"));
        assert!(skills.contains("ci/cd"));
    }

    #[test]
    fn test_vocabulary_closure() {
        let text = "python java javascript react angular vue node.js aws azure git \
                    machine learning artificial intelligence data science blockchain \
                    sql mongodb postgresql mysql oracle docker kubernetes jenkins ci/cd \
                    agile scrum kanban waterfall plus unrecognized words like cobol";
        let skills = extractor().extract(text);

        for token in skills.iter() {
            assert!(VOCABULARY.contains(&token.as_str()), "unexpected token: {}", token);
        }
        assert!(!skills.contains("cobol"));
    }

    #[test]
    fn test_set_operations_are_disjoint_and_sorted() {
        let a = SkillSet::new(vec!["python", "aws", "docker"]);
        let b = SkillSet::new(vec!["aws", "kubernetes"]);

        let matched = a.intersection(&b);
        let missing = b.difference(&a);

        assert_eq!(matched.as_slice(), &["aws"]);
        assert_eq!(missing.as_slice(), &["kubernetes"]);
        assert!(matched.intersection(&missing).is_empty());
    }
}
