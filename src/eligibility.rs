//! Eligibility rule engine
//!
//! Deterministic, explainable replacement for black-box matching: a fixed
//! table of predicate rules over the student profile, each granting specific
//! scholarship ids. Rules are OR-combined and the result is deduplicated
//! by id.

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::types::{EducationLevel, IncomeRange, Scholarship, StudentProfile};

/// A single eligibility rule: when `applies` holds for a profile, every id
/// in `grants` is added to the result set.
pub struct EligibilityRule {
    pub id: &'static str,
    pub name: &'static str,
    pub grants: &'static [&'static str],
    pub applies: fn(&StudentProfile) -> bool,
}

fn low_income(profile: &StudentProfile) -> bool {
    matches!(
        profile.income_range,
        IncomeRange::Below1L | IncomeRange::Between1LAnd2_5L
    )
}

fn higher_education(profile: &StudentProfile) -> bool {
    matches!(
        profile.education_level,
        EducationLevel::Undergraduate | EducationLevel::Postgraduate
    )
}

fn technical_track(profile: &StudentProfile) -> bool {
    matches!(
        profile.education_level,
        EducationLevel::Diploma | EducationLevel::Undergraduate
    )
}

/// Rule table, evaluated in order. Result order follows this order, then
/// grant order within each rule.
pub const RULES: &[EligibilityRule] = &[
    EligibilityRule {
        id: "R-INCOME-001",
        name: "Low Income Support",
        grants: &["NSP-001", "ST-001"],
        applies: low_income,
    },
    EligibilityRule {
        id: "R-EDU-001",
        name: "Higher Education Support",
        grants: &["NSP-002"],
        applies: higher_education,
    },
    EligibilityRule {
        id: "R-EDU-002",
        name: "Technical/Diploma Support",
        grants: &["AICTE-001"],
        applies: technical_track,
    },
];

/// Scholarships the profile is eligible for, deduplicated by id. An empty
/// result means no rule fired; callers render a "no matches" state rather
/// than treating it as an error.
pub fn eligible_scholarships(profile: &StudentProfile, catalog: &Catalog) -> Vec<Scholarship> {
    collect_granted(RULES, profile, catalog)
}

/// Names of the rules the profile satisfied, for explainability alongside
/// the scholarship list.
pub fn match_reasons(profile: &StudentProfile) -> Vec<String> {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(profile))
        .map(|rule| rule.name.to_string())
        .collect()
}

fn collect_granted(
    rules: &[EligibilityRule],
    profile: &StudentProfile,
    catalog: &Catalog,
) -> Vec<Scholarship> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut eligible = Vec::new();

    for rule in rules {
        if !(rule.applies)(profile) {
            continue;
        }
        for &id in rule.grants {
            if !seen.insert(id) {
                continue;
            }
            // Ids with no catalog record are dropped silently.
            if let Some(scholarship) = catalog.scholarship(id) {
                eligible.push(scholarship.clone());
            }
        }
    }

    eligible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ProfileDetails, State, VerifiedIdentity};

    fn create_test_profile(education: EducationLevel, income: IncomeRange) -> StudentProfile {
        StudentProfile::from_verification(
            VerifiedIdentity {
                token: "VERIFIED_UID_0_SECURE".to_string(),
                name: "Rahul Kumar".to_string(),
                state: "Delhi".to_string(),
            },
            ProfileDetails {
                education_level: education,
                state: State::Delhi,
                district: "New Delhi".to_string(),
                income_range: income,
                interests: vec![],
            },
        )
    }

    #[test]
    fn test_low_income_grants_needs_based_schemes() {
        let catalog = Catalog::seed();
        let profile = create_test_profile(EducationLevel::Class10, IncomeRange::Below1L);
        let ids: Vec<String> = eligible_scholarships(&profile, &catalog)
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["NSP-001", "ST-001"]);
    }

    #[test]
    fn test_rules_are_or_combined_in_rule_order() {
        let catalog = Catalog::seed();
        let profile =
            create_test_profile(EducationLevel::Undergraduate, IncomeRange::Between1LAnd2_5L);
        let ids: Vec<String> = eligible_scholarships(&profile, &catalog)
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["NSP-001", "ST-001", "NSP-002", "AICTE-001"]);
    }

    #[test]
    fn test_no_rule_fires_returns_empty() {
        let catalog = Catalog::seed();
        let profile = create_test_profile(EducationLevel::Class10, IncomeRange::Above8L);
        assert!(eligible_scholarships(&profile, &catalog).is_empty());
        assert!(match_reasons(&profile).is_empty());
    }

    #[test]
    fn test_overlapping_grants_deduplicate_by_id() {
        fn always(_: &StudentProfile) -> bool {
            true
        }
        let overlapping: &[EligibilityRule] = &[
            EligibilityRule {
                id: "T-1",
                name: "first",
                grants: &["NSP-001", "NSP-002"],
                applies: always,
            },
            EligibilityRule {
                id: "T-2",
                name: "second",
                grants: &["NSP-002", "ST-001"],
                applies: always,
            },
        ];
        let catalog = Catalog::seed();
        let profile = create_test_profile(EducationLevel::Class12, IncomeRange::Above8L);
        let ids: Vec<String> = collect_granted(overlapping, &profile, &catalog)
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["NSP-001", "NSP-002", "ST-001"]);
    }

    #[test]
    fn test_unknown_grant_id_is_dropped() {
        fn always(_: &StudentProfile) -> bool {
            true
        }
        let rules: &[EligibilityRule] = &[EligibilityRule {
            id: "T-3",
            name: "stale grant",
            grants: &["NSP-404", "ST-001"],
            applies: always,
        }];
        let catalog = Catalog::seed();
        let profile = create_test_profile(EducationLevel::Class12, IncomeRange::Above8L);
        let ids: Vec<String> = collect_granted(rules, &profile, &catalog)
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["ST-001"]);
    }

    #[test]
    fn test_engine_is_idempotent() {
        let catalog = Catalog::seed();
        let profile = create_test_profile(EducationLevel::Diploma, IncomeRange::Below1L);
        let first: Vec<String> = eligible_scholarships(&profile, &catalog)
            .into_iter()
            .map(|s| s.id)
            .collect();
        let second: Vec<String> = eligible_scholarships(&profile, &catalog)
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(first, second);
        assert_eq!(catalog.scholarships.len(), 4);
    }

    #[test]
    fn test_match_reasons_name_satisfied_rules() {
        let profile = create_test_profile(EducationLevel::Diploma, IncomeRange::Below1L);
        assert_eq!(
            match_reasons(&profile),
            vec!["Low Income Support", "Technical/Diploma Support"]
        );
    }
}
