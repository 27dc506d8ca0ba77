//! Scheme Matcher Library
//!
//! Core library for matching verified student profiles against government
//! scholarship and course catalogs. The verification flow is a mock of the
//! UIDAI OTP scheme and never stores the raw Aadhaar number.

pub mod catalog;
pub mod eligibility;
pub mod recommend;
pub mod types;
pub mod uidai;
pub mod verify;

pub use types::*;
