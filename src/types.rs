use serde::{Deserialize, Serialize};
use std::fmt;

/// Academic stage of the student. Display forms match the portal dropdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum EducationLevel {
    #[serde(rename = "Class 10")]
    Class10,
    #[serde(rename = "Class 12")]
    Class12,
    Diploma,
    Undergraduate,
    Postgraduate,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 5] = [
        EducationLevel::Class10,
        EducationLevel::Class12,
        EducationLevel::Diploma,
        EducationLevel::Undergraduate,
        EducationLevel::Postgraduate,
    ];
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EducationLevel::Class10 => "Class 10",
            EducationLevel::Class12 => "Class 12",
            EducationLevel::Diploma => "Diploma",
            EducationLevel::Undergraduate => "Undergraduate",
            EducationLevel::Postgraduate => "Postgraduate",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum State {
    Delhi,
    Maharashtra,
    #[serde(rename = "Uttar Pradesh")]
    UttarPradesh,
    Karnataka,
    Other,
}

impl State {
    pub const ALL: [State; 5] = [
        State::Delhi,
        State::Maharashtra,
        State::UttarPradesh,
        State::Karnataka,
        State::Other,
    ];

    /// Map a KYC state string onto the closed set, falling back to Other.
    pub fn from_kyc(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "delhi" => State::Delhi,
            "maharashtra" => State::Maharashtra,
            "uttar pradesh" => State::UttarPradesh,
            "karnataka" => State::Karnataka,
            _ => State::Other,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            State::Delhi => "Delhi",
            State::Maharashtra => "Maharashtra",
            State::UttarPradesh => "Uttar Pradesh",
            State::Karnataka => "Karnataka",
            State::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

/// Annual family income bucket. Used only for eligibility checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum IncomeRange {
    #[serde(rename = "Below 1 Lakh")]
    Below1L,
    #[serde(rename = "1 Lakh - 2.5 Lakhs")]
    Between1LAnd2_5L,
    #[serde(rename = "2.5 Lakhs - 8 Lakhs")]
    Between2_5LAnd8L,
    #[serde(rename = "Above 8 Lakhs")]
    Above8L,
}

impl IncomeRange {
    pub const ALL: [IncomeRange; 4] = [
        IncomeRange::Below1L,
        IncomeRange::Between1LAnd2_5L,
        IncomeRange::Between2_5LAnd8L,
        IncomeRange::Above8L,
    ];
}

impl fmt::Display for IncomeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IncomeRange::Below1L => "Below 1 Lakh",
            IncomeRange::Between1LAnd2_5L => "1 Lakh - 2.5 Lakhs",
            IncomeRange::Between2_5LAnd8L => "2.5 Lakhs - 8 Lakhs",
            IncomeRange::Above8L => "Above 8 Lakhs",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Platform {
    #[serde(rename = "SWAYAM")]
    Swayam,
    #[serde(rename = "NPTEL")]
    Nptel,
    #[serde(rename = "Skill India")]
    SkillIndia,
    #[serde(rename = "NSDC")]
    Nsdc,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Platform::Swayam => "SWAYAM",
            Platform::Nptel => "NPTEL",
            Platform::SkillIndia => "Skill India",
            Platform::Nsdc => "NSDC",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Scholarship {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub amount: String,
    pub deadline: String,
    pub eligibility_description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub platform: Platform,
    pub duration: String,
    pub certification: bool,
    pub category: String,
}

/// Outcome of a successful OTP verification: the opaque token plus the
/// minimal KYC attributes it vouches for. The raw Aadhaar number is never
/// part of this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    pub token: String,
    pub name: String,
    pub state: String,
}

/// User-entered fields collected at profile setup, after verification.
#[derive(Debug, Clone)]
pub struct ProfileDetails {
    pub education_level: EducationLevel,
    pub state: State,
    pub district: String,
    pub income_range: IncomeRange,
    pub interests: Vec<String>,
}

/// A verified student profile. Only constructible from a [`VerifiedIdentity`],
/// so the token is non-empty by construction and the profile cannot exist
/// without a completed verification.
#[derive(Debug, Clone, Serialize)]
pub struct StudentProfile {
    verification_token: String,
    pub name: String,
    pub education_level: EducationLevel,
    pub state: State,
    pub district: String,
    pub income_range: IncomeRange,
    pub interests: Vec<String>,
}

impl StudentProfile {
    pub fn from_verification(identity: VerifiedIdentity, details: ProfileDetails) -> Self {
        StudentProfile {
            verification_token: identity.token,
            name: identity.name,
            education_level: details.education_level,
            state: details.state,
            district: details.district,
            income_range: details.income_range,
            interests: details.interests,
        }
    }

    pub fn verification_token(&self) -> &str {
        &self.verification_token
    }
}

/// Wire shape of the collaborator's send-OTP reply.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SendOtpResponse {
    pub success: bool,
    pub message: String,
}

/// Wire shape of the collaborator's verify-OTP reply. The payload fields are
/// only populated on success.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerifyOtpResponse {
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user_data: Option<KycData>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KycData {
    pub name: String,
    pub state: String,
}
