//! Static scheme catalog
//!
//! Read-only scholarship and course records. The catalog is seeded in code
//! and can optionally be overridden by a `data/catalog.json` file under the
//! configured root; a missing file falls back to the seed.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::types::{Course, Platform, Scholarship};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Catalog {
    pub scholarships: Vec<Scholarship>,
    pub courses: Vec<Course>,
}

impl Catalog {
    /// Built-in catalog: the national scheme records the portal ships with.
    pub fn seed() -> Self {
        Catalog {
            scholarships: vec![
                Scholarship {
                    id: "NSP-001".to_string(),
                    name: "Post Matric Scholarship Scheme for Minorities".to_string(),
                    provider: "Ministry of Minority Affairs".to_string(),
                    amount: "₹12,000 / year".to_string(),
                    deadline: "2024-10-31".to_string(),
                    eligibility_description: "Income < 2L, Scored > 50% in prev exam".to_string(),
                    tags: vec!["Minority".to_string(), "Needs-based".to_string()],
                },
                Scholarship {
                    id: "NSP-002".to_string(),
                    name: "Central Sector Scheme of Scholarship".to_string(),
                    provider: "Department of Higher Education".to_string(),
                    amount: "₹10,000 - ₹20,000 / year".to_string(),
                    deadline: "2024-11-15".to_string(),
                    eligibility_description: "Top 20th Percentile in Class 12".to_string(),
                    tags: vec!["Merit-based".to_string(), "UG".to_string(), "PG".to_string()],
                },
                Scholarship {
                    id: "AICTE-001".to_string(),
                    name: "Pragati Scholarship Scheme".to_string(),
                    provider: "AICTE".to_string(),
                    amount: "₹50,000 / year".to_string(),
                    deadline: "2024-12-01".to_string(),
                    eligibility_description: "Girl students admitted to Diploma/Degree".to_string(),
                    tags: vec!["Women".to_string(), "Technical".to_string()],
                },
                Scholarship {
                    id: "ST-001".to_string(),
                    name: "Pre-Matric Scholarship for SC Students".to_string(),
                    provider: "Ministry of Social Justice".to_string(),
                    amount: "₹3,500 / year".to_string(),
                    deadline: "2024-09-30".to_string(),
                    eligibility_description: "Parental Income < 2.5L".to_string(),
                    tags: vec!["SC".to_string(), "School".to_string()],
                },
            ],
            courses: vec![
                Course {
                    id: "SW-01".to_string(),
                    title: "Introduction to Python Programming".to_string(),
                    platform: Platform::Swayam,
                    duration: "8 Weeks".to_string(),
                    certification: true,
                    category: "Computer Science".to_string(),
                },
                Course {
                    id: "NSDC-01".to_string(),
                    title: "Data Entry Operator Qualification".to_string(),
                    platform: Platform::Nsdc,
                    duration: "12 Weeks".to_string(),
                    certification: true,
                    category: "Vocational".to_string(),
                },
                Course {
                    id: "NPTEL-01".to_string(),
                    title: "Soft Skills for Business Negotiations".to_string(),
                    platform: Platform::Nptel,
                    duration: "4 Weeks".to_string(),
                    certification: false,
                    category: "Management".to_string(),
                },
                Course {
                    id: "SI-01".to_string(),
                    title: "Electric Vehicle Technician".to_string(),
                    platform: Platform::SkillIndia,
                    duration: "6 Months".to_string(),
                    certification: true,
                    category: "Technical".to_string(),
                },
            ],
        }
    }

    pub fn scholarship(&self, id: &str) -> Option<&Scholarship> {
        self.scholarships.iter().find(|s| s.id == id)
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }
}

/// Load the catalog from `data/catalog.json` under `root`, or fall back to
/// the seed when the file does not exist.
pub fn load_catalog(root: &str) -> Result<Catalog> {
    let path = PathBuf::from(root).join("data/catalog.json");

    if !path.exists() {
        return Ok(Catalog::seed());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read catalog from {:?}", path))?;

    let catalog: Catalog = serde_json::from_str(&content)
        .with_context(|| "Failed to parse catalog JSON")?;

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_four_of_each() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.scholarships.len(), 4);
        assert_eq!(catalog.courses.len(), 4);
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::seed();
        assert_eq!(
            catalog.scholarship("AICTE-001").map(|s| s.name.as_str()),
            Some("Pragati Scholarship Scheme")
        );
        assert_eq!(
            catalog.course("SI-01").map(|c| c.platform),
            Some(Platform::SkillIndia)
        );
        assert!(catalog.scholarship("NSP-999").is_none());
    }

    #[test]
    fn test_load_falls_back_to_seed_when_file_missing() {
        let catalog = load_catalog("/nonexistent/root").unwrap();
        assert_eq!(catalog.scholarships.len(), 4);
    }

    #[test]
    fn test_catalog_json_round_trip() {
        let seed = Catalog::seed();
        let json = serde_json::to_string_pretty(&seed).unwrap();
        let parsed: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.scholarships.len(), seed.scholarships.len());
        assert_eq!(parsed.courses[3].platform, Platform::SkillIndia);
    }
}
