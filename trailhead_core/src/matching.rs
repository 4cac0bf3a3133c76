//! Career Matching Engine
//!
//! Provides DETERMINISTIC scoring of a profile against career requirement
//! sets. No AI/ML is used - scores are calculated from the profile's skill
//! levels and the catalog's weights.
//!
//! Formula per requirement: contribution = min(1, level / desired) × weight
//! Where:
//! - a missing skill contributes 0 (its full desired level becomes the gap)
//! - meeting or exceeding the desired level earns the full weight, no bonus
//! - a zero desired level is trivially satisfied
//!
//! The weighted sum is normalized by the total weight onto a 0-100 scale.
//! Scoring is total over its inputs: degenerate weights yield a score of 0
//! instead of a division fault, and no error leaves this module.

use crate::catalog::Catalog;
use crate::types::{Career, Profile};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Score of one profile against one career, with per-skill gaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerScore {
    pub career: Career,
    /// Normalized fit on the 0-100 scale, rounded to two decimals.
    pub score: f64,
    /// Skill name -> positive shortfall against the desired level. Only
    /// requirements with a gap appear here.
    pub gaps: HashMap<String, f64>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scores a single career against the profile.
pub fn score_career(profile: &Profile, career: &Career) -> CareerScore {
    let mut score_sum = 0.0;
    let mut weight_sum = 0.0;
    let mut gaps: HashMap<String, f64> = HashMap::new();

    for req in &career.requirements {
        weight_sum += req.weight;

        let (contrib, gap) = match profile.level_of(&req.skill) {
            None => (0.0, req.desired_level),
            Some(level) => {
                let gap = (req.desired_level - level).max(0.0);
                let contrib = if req.desired_level > 0.0 {
                    (level / req.desired_level).min(1.0)
                } else {
                    1.0
                };
                (contrib, gap)
            }
        };

        score_sum += contrib * req.weight;
        if gap > 0.0 {
            gaps.insert(req.skill.clone(), gap);
        }
    }

    let normalized = if weight_sum > 0.0 {
        score_sum / weight_sum * 100.0
    } else {
        0.0
    };

    CareerScore {
        career: career.clone(),
        score: round2(normalized),
        gaps,
    }
}

/// Scores every career in the catalog and returns the best `top_n`.
///
/// Careers are scored independently, so permuting the catalog never changes
/// an individual score. The sort is stable and descending; ties keep
/// catalog order. Asking for more than the catalog holds returns them all.
pub fn recommend(profile: &Profile, catalog: &Catalog, top_n: usize) -> Vec<CareerScore> {
    let mut results: Vec<CareerScore> = catalog
        .careers()
        .iter()
        .map(|career| score_career(profile, career))
        .collect();

    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    results.truncate(top_n);
    results
}
