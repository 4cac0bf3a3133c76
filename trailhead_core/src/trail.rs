//! Learning Trail Generator
//!
//! Turns the gap between a profile and a chosen career into a prioritized
//! list of actionable study items. Planning is read-only: this module never
//! mutates the profile and performs no I/O.
//!
//! Unlike the scorer, a missing skill counts as level 0 here, so an absent
//! requirement surfaces with its full desired level as the gap.

use crate::types::{Career, Profile};
use serde::{Deserialize, Serialize};

/// Advisory emitted when the profile already meets every requirement.
pub const ALIGNED_ADVISORY: &str =
    "Profile aligned: consolidate current skills and pursue specializations.";

/// One prioritized gap to close for a target career.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailStep {
    pub skill: String,
    pub desired_level: f64,
    pub gap: f64,
}

/// Computes the largest gaps toward a career, biggest first.
///
/// Only requirements with a positive gap are kept. The sort is stable, so
/// equal gaps keep requirement order. At most `top_k` steps are returned.
pub fn trail_steps(profile: &Profile, career: &Career, top_k: usize) -> Vec<TrailStep> {
    let mut steps: Vec<TrailStep> = career
        .requirements
        .iter()
        .filter_map(|req| {
            let level = profile.level_of(&req.skill).unwrap_or(0.0);
            let gap = (req.desired_level - level).max(0.0);
            if gap > 0.0 {
                Some(TrailStep {
                    skill: req.skill.clone(),
                    desired_level: req.desired_level,
                    gap,
                })
            } else {
                None
            }
        })
        .collect();

    steps.sort_by(|a, b| {
        b.gap
            .partial_cmp(&a.gap)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    steps.truncate(top_k);
    steps
}

/// Renders the trail as human-readable action items.
///
/// Never returns an empty list: a fully aligned profile yields the single
/// aligned advisory instead.
pub fn learning_trail(profile: &Profile, career: &Career, top_k: usize) -> Vec<String> {
    let steps = trail_steps(profile, career, top_k);
    if steps.is_empty() {
        return vec![ALIGNED_ADVISORY.to_string()];
    }

    steps
        .iter()
        .map(|step| {
            format!(
                "Learn or practice '{}' up to level {:.1} (gap {:.1})",
                step.skill, step.desired_level, step.gap
            )
        })
        .collect()
}
