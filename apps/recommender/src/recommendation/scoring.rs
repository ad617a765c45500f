use std::collections::{HashMap, HashSet};

use crate::models::cv::CandidateProfile;

/// Computes a relevance score for one candidate against a weight map.
///
/// The score is the arithmetic mean of the weights of the candidate's
/// skills (primary and additional combined) that appear in the map.
/// Skills with no known weight are excluded from both the sum and the
/// denominator, so noise skills cannot dilute the average. A candidate
/// with no weighted skills scores exactly 0.0.
pub fn score_candidate(candidate: &CandidateProfile, weights: &HashMap<String, f64>) -> f64 {
    let mut skills: HashSet<&str> = candidate
        .primary_skills
        .iter()
        .map(String::as_str)
        .collect();
    if let Some(additional) = &candidate.additional_skills {
        skills.extend(additional.iter().map(String::as_str));
    }

    let matched: Vec<f64> = skills
        .iter()
        .filter_map(|name| weights.get(*name).copied())
        .collect();

    if matched.is_empty() {
        return 0.0;
    }

    matched.iter().sum::<f64>() / matched.len() as f64
}
