//! Career catalog: the built-in archetypes plus YAML-loaded additions.

use crate::types::{Career, Requirement};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Ordered collection of career archetypes available for matching.
///
/// Registration order is the tie-break order during ranking. Duplicate
/// names are allowed; each entry is scored independently.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    careers: Vec<Career>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the four built-in archetypes.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.register(Career::new(
            "Data Scientist",
            "Analyzes data and builds predictive models.",
            vec![
                Requirement::new("Python", 3.0, 7.0),
                Requirement::new("Statistics", 2.0, 6.0),
                Requirement::new("Machine Learning", 3.0, 6.0),
                Requirement::new("Communication", 1.0, 6.0),
            ],
        ));
        catalog.register(Career::new(
            "Software Engineer",
            "Builds systems and applies software engineering practice.",
            vec![
                Requirement::new("Algorithms", 3.0, 7.0),
                Requirement::new("Data Structures", 3.0, 7.0),
                Requirement::new("Python", 2.0, 6.0),
                Requirement::new("Teamwork", 1.0, 6.0),
            ],
        ));
        catalog.register(Career::new(
            "Automation & IoT Specialist",
            "Integrates devices, sensors and automations.",
            vec![
                Requirement::new("Basic Electronics", 2.0, 6.0),
                Requirement::new("Python", 2.0, 6.0),
                Requirement::new("Embedded Systems", 3.0, 7.0),
                Requirement::new("Adaptability", 1.0, 6.0),
            ],
        ));
        catalog.register(Career::new(
            "UX Designer",
            "Designs user-centered digital experiences.",
            vec![
                Requirement::new("Creativity", 3.0, 7.0),
                Requirement::new("Prototyping", 2.0, 6.0),
                Requirement::new("User Research", 2.0, 6.0),
                Requirement::new("Empathy", 2.0, 7.0),
            ],
        ));
        catalog
    }

    /// Registers a career at the end of the catalog.
    pub fn register(&mut self, career: Career) {
        self.careers.push(career);
    }

    pub fn careers(&self) -> &[Career] {
        &self.careers
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }
}

/// Loads additional careers from a YAML file.
pub fn load_catalog(path: &Path) -> Result<Vec<Career>, CatalogError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let careers: Vec<Career> = serde_yaml::from_reader(reader)?;
    log::info!(
        "[CATALOG] Loaded {} careers from {}",
        careers.len(),
        path.display()
    );
    Ok(careers)
}
