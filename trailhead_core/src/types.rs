use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lower bound of the proficiency scale.
pub const MIN_LEVEL: f64 = 0.0;
/// Upper bound of the proficiency scale.
pub const MAX_LEVEL: f64 = 10.0;

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

/// One named skill with a proficiency level on the 0-10 scale.
///
/// Skill names are matched case-insensitively everywhere; a profile never
/// holds two skills that differ only by case.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Open set, e.g. "technical" or "behavioral".
    pub category: String,
    pub level: f64,
}

impl Skill {
    /// Builds a skill, clamping the level into [0.0, 10.0].
    pub fn new(name: &str, category: &str, level: f64) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            level: level.clamp(MIN_LEVEL, MAX_LEVEL),
        }
    }
}

/// A named individual with an insertion-ordered set of skills.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default)]
    pub description: String,
    /// ISO-8601, set once at creation. Defaults to "now" when a stored
    /// profile predates the field.
    #[serde(default = "now_rfc3339")]
    pub created_at: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl Profile {
    pub fn new(name: &str, age: Option<u32>, description: &str) -> Self {
        Self {
            name: name.to_string(),
            age,
            description: description.to_string(),
            created_at: now_rfc3339(),
            skills: Vec::new(),
        }
    }

    /// Inserts or replaces a skill, matching names case-insensitively.
    ///
    /// A replaced skill keeps its position in the list; a new skill is
    /// appended. Always succeeds.
    pub fn upsert_skill(&mut self, skill: Skill) {
        for slot in self.skills.iter_mut() {
            if slot.name.to_lowercase() == skill.name.to_lowercase() {
                *slot = skill;
                return;
            }
        }
        self.skills.push(skill);
    }

    /// Removes the first skill matching `name` case-insensitively.
    ///
    /// Returns whether a removal occurred; "not found" is not an error.
    pub fn remove_skill(&mut self, name: &str) -> bool {
        let target = name.to_lowercase();
        match self.skills.iter().position(|s| s.name.to_lowercase() == target) {
            Some(index) => {
                self.skills.remove(index);
                true
            }
            None => false,
        }
    }

    /// Looks up the level of a skill, case-insensitively.
    pub fn level_of(&self, name: &str) -> Option<f64> {
        let target = name.to_lowercase();
        self.skills
            .iter()
            .find(|s| s.name.to_lowercase() == target)
            .map(|s| s.level)
    }

    /// Arithmetic mean level per category, over the skills present.
    ///
    /// Categories with no skills are omitted, so no division by zero.
    pub fn category_averages(&self) -> HashMap<String, f64> {
        let mut sums: HashMap<String, (f64, usize)> = HashMap::new();
        for skill in &self.skills {
            let entry = sums.entry(skill.category.clone()).or_insert((0.0, 0));
            entry.0 += skill.level;
            entry.1 += 1;
        }
        sums.into_iter()
            .map(|(category, (sum, count))| (category, sum / count as f64))
            .collect()
    }
}

/// One weighted requirement of a career archetype.
///
/// Weights are expected positive and desired levels non-negative, but
/// construction does not enforce this; the matching engine absorbs
/// degenerate values instead of erroring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub skill: String,
    pub weight: f64,
    pub desired_level: f64,
}

impl Requirement {
    pub fn new(skill: &str, weight: f64, desired_level: f64) -> Self {
        Self {
            skill: skill.to_string(),
            weight,
            desired_level,
        }
    }
}

/// A career archetype: a name plus an ordered requirement list.
///
/// Read-only after construction as far as the matching engine is concerned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Career {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<Requirement>,
}

impl Career {
    pub fn new(name: &str, description: &str, requirements: Vec<Requirement>) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            requirements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_profile() -> Profile {
        let mut profile = Profile::new("Ana", Some(28), "Junior analyst");
        profile.upsert_skill(Skill::new("Python", "technical", 8.0));
        profile.upsert_skill(Skill::new("Statistics", "technical", 5.0));
        profile.upsert_skill(Skill::new("Communication", "behavioral", 7.0));
        profile
    }

    #[test]
    fn test_skill_level_clamped() {
        assert_eq!(Skill::new("Python", "technical", 12.5).level, 10.0);
        assert_eq!(Skill::new("Python", "technical", -3.0).level, 0.0);
        assert_eq!(Skill::new("Python", "technical", 6.5).level, 6.5);
    }

    #[test]
    fn test_upsert_replaces_case_insensitively_in_place() {
        let mut profile = create_test_profile();
        profile.upsert_skill(Skill::new("PYTHON", "technical", 9.0));

        assert_eq!(profile.skills.len(), 3);
        // Position retained, second call's level wins.
        assert_eq!(profile.skills[0].name, "PYTHON");
        assert_eq!(profile.skills[0].level, 9.0);
    }

    #[test]
    fn test_upsert_appends_new_skill() {
        let mut profile = create_test_profile();
        profile.upsert_skill(Skill::new("SQL", "technical", 4.0));

        assert_eq!(profile.skills.len(), 4);
        assert_eq!(profile.skills[3].name, "SQL");
    }

    #[test]
    fn test_remove_skill() {
        let mut profile = create_test_profile();

        assert!(profile.remove_skill("statistics"));
        assert_eq!(profile.skills.len(), 2);
        assert!(!profile.remove_skill("statistics"));
    }

    #[test]
    fn test_level_of() {
        let profile = create_test_profile();

        assert_eq!(profile.level_of("python"), Some(8.0));
        assert_eq!(profile.level_of("Communication"), Some(7.0));
        assert_eq!(profile.level_of("Rust"), None);
    }

    #[test]
    fn test_category_averages() {
        let profile = create_test_profile();
        let averages = profile.category_averages();

        assert_eq!(averages.len(), 2);
        assert!((averages["technical"] - 6.5).abs() < 1e-9);
        assert!((averages["behavioral"] - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_category_averages_empty_profile() {
        let profile = Profile::new("Empty", None, "");
        assert!(profile.category_averages().is_empty());
    }

    #[test]
    fn test_profile_roundtrip() {
        let profile = create_test_profile();
        let json = serde_json::to_string(&profile).unwrap();
        let restored: Profile = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, profile);
        assert_eq!(restored.created_at, profile.created_at);
        assert_eq!(restored.skills[0].name, "Python");
    }

    #[test]
    fn test_profile_missing_fields_default() {
        let json = r#"{"name": "Bare"}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.name, "Bare");
        assert_eq!(profile.age, None);
        assert_eq!(profile.description, "");
        assert!(profile.skills.is_empty());
        assert!(!profile.created_at.is_empty());
    }

    #[test]
    fn test_age_absent_when_none() {
        let profile = Profile::new("NoAge", None, "");
        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("age"));
    }
}
