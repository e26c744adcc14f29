//! Match scoring between resume and job skill sets

use crate::analysis::skills::SkillSet;
use serde::{Deserialize, Serialize};

/// Partition of the job's skill set relative to the resume. `matched` and
/// `missing` are disjoint by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillsMatch {
    pub matched: SkillSet,
    pub missing: SkillSet,
}

pub struct MatchScorer;

impl MatchScorer {
    /// Percentage of job-required skills present in the resume, rounded to
    /// two decimal places. An empty job skill set scores exactly 0.0: a job
    /// description with no recognized vocabulary always yields zero,
    /// regardless of resume quality.
    pub fn score(resume_skills: &SkillSet, job_skills: &SkillSet) -> f64 {
        if job_skills.is_empty() {
            return 0.0;
        }

        let matched = resume_skills.intersection(job_skills).len();
        let score = matched as f64 / job_skills.len() as f64 * 100.0;

        // The ratio cannot exceed 1.0 mathematically; the cap is a safety
        // invariant on the 0..=100 output range.
        ((score * 100.0).round() / 100.0).min(100.0)
    }

    /// Split the job skill set into skills the resume covers and skills it
    /// lacks.
    pub fn partition(resume_skills: &SkillSet, job_skills: &SkillSet) -> SkillsMatch {
        SkillsMatch {
            matched: resume_skills.intersection(job_skills),
            missing: job_skills.difference(resume_skills),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_job_set_scores_zero() {
        let resume = SkillSet::new(vec!["python", "aws"]);
        let job = SkillSet::empty();

        assert_eq!(MatchScorer::score(&resume, &job), 0.0);
    }

    #[test]
    fn test_full_coverage_scores_hundred() {
        let resume = SkillSet::new(vec!["python", "aws", "docker"]);
        let job = SkillSet::new(vec!["python", "aws"]);

        assert_eq!(MatchScorer::score(&resume, &job), 100.0);
    }

    #[test]
    fn test_partial_coverage_rounds_to_two_decimals() {
        let resume = SkillSet::new(vec!["python"]);
        let job = SkillSet::new(vec!["python", "aws", "docker"]);

        // 1/3 * 100 = 33.333... -> 33.33
        assert_eq!(MatchScorer::score(&resume, &job), 33.33);
    }

    #[test]
    fn test_score_stays_in_range() {
        let resume = SkillSet::new(vec!["python", "aws", "docker", "git"]);
        let job = SkillSet::new(vec!["kubernetes"]);

        let score = MatchScorer::score(&resume, &job);
        assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn test_partition_is_disjoint_and_bounded() {
        let resume = SkillSet::new(vec!["python", "aws"]);
        let job = SkillSet::new(vec!["python", "kubernetes", "docker"]);

        let skills_match = MatchScorer::partition(&resume, &job);

        assert_eq!(skills_match.matched.as_slice(), &["python"]);
        assert_eq!(skills_match.missing.as_slice(), &["docker", "kubernetes"]);
        assert!(skills_match.matched.intersection(&skills_match.missing).is_empty());
        assert!(skills_match.matched.len() + skills_match.missing.len() <= job.len());
    }
}
