//! Course recommendation engine
//!
//! Partitions the course catalog by education level and maps each level to a
//! fixed pair of suggested next steps.

use crate::catalog::Catalog;
use crate::types::{Course, EducationLevel, Platform, StudentProfile};

/// Courses recommended for the profile's education level. School-level
/// students get vocational and Skill India offerings, higher-education
/// students get Computer Science and Management, everyone else sees the
/// full catalog.
pub fn recommended_courses(profile: &StudentProfile, catalog: &Catalog) -> Vec<Course> {
    match profile.education_level {
        EducationLevel::Class10 | EducationLevel::Class12 => catalog
            .courses
            .iter()
            .filter(|c| c.category == "Vocational" || c.platform == Platform::SkillIndia)
            .cloned()
            .collect(),
        EducationLevel::Undergraduate | EducationLevel::Postgraduate => catalog
            .courses
            .iter()
            .filter(|c| c.category == "Computer Science" || c.category == "Management")
            .cloned()
            .collect(),
        // Explicit fallback, not an error path.
        EducationLevel::Diploma => catalog.courses.clone(),
    }
}

/// Fixed pair of suggested next actions for an education level. Total over
/// the enum; levels without a tailored pair get the generic one.
pub fn next_steps(level: EducationLevel) -> [&'static str; 2] {
    match level {
        EducationLevel::Class10 => [
            "Explore Diploma Courses in Engineering",
            "Prepare for Higher Secondary (Science/Commerce/Arts)",
        ],
        EducationLevel::Class12 => [
            "Apply for Undergraduate Programs (CUET)",
            "Check Vocational Training on Skill India",
        ],
        EducationLevel::Diploma => ["Lateral Entry to B.Tech", "Apprenticeship under NAPS"],
        EducationLevel::Undergraduate => [
            "Post Graduate Entrance Exams (GATE/CAT)",
            "Industry Certification Courses",
        ],
        EducationLevel::Postgraduate => ["Upskilling", "Certification"],
    }
}
