//! End-to-end flow: build a profile, rank the built-in catalog, derive the
//! learning trail for the best match, and round-trip through the store.

use tempfile::TempDir;
use trailhead_core::catalog::Catalog;
use trailhead_core::matching::recommend;
use trailhead_core::store::ProfileStore;
use trailhead_core::trail::{learning_trail, ALIGNED_ADVISORY};
use trailhead_core::types::{Profile, Skill};

fn data_leaning_profile() -> Profile {
    let mut profile = Profile::new("Ana Souza", Some(28), "Analyst moving into data work");
    profile.upsert_skill(Skill::new("Python", "technical", 8.0));
    profile.upsert_skill(Skill::new("Statistics", "technical", 5.0));
    profile.upsert_skill(Skill::new("Machine Learning", "technical", 4.0));
    profile.upsert_skill(Skill::new("Communication", "behavioral", 7.0));
    profile
}

#[test]
fn recommend_ranks_data_scientist_first_for_data_profile() {
    let profile = data_leaning_profile();
    let catalog = Catalog::builtin();

    let ranked = recommend(&profile, &catalog, 10);
    assert_eq!(ranked.len(), 4);
    assert_eq!(ranked[0].career.name, "Data Scientist");
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn trail_for_best_match_targets_remaining_gaps() {
    let profile = data_leaning_profile();
    let catalog = Catalog::builtin();

    let best = &recommend(&profile, &catalog, 1)[0];
    let trail = learning_trail(&profile, &best.career, 5);

    assert!(!trail.is_empty());
    assert_ne!(trail, vec![ALIGNED_ADVISORY.to_string()]);
    // Machine Learning (4.0 vs desired 6.0) is the widest remaining gap.
    assert!(trail[0].contains("Machine Learning"));
}

#[test]
fn saved_profile_scores_identically_after_reload() {
    let dir = TempDir::new().unwrap();
    let store = ProfileStore::new(dir.path()).unwrap();
    let profile = data_leaning_profile();
    let catalog = Catalog::builtin();

    store.save(&profile).unwrap();
    let reloaded = store.load("Ana Souza").unwrap();
    assert_eq!(reloaded, profile);

    let before = recommend(&profile, &catalog, 10);
    let after = recommend(&reloaded, &catalog, 10);
    for (a, b) in before.iter().zip(after.iter()) {
        assert_eq!(a.career.name, b.career.name);
        assert_eq!(a.score, b.score);
    }
}
