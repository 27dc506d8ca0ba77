use anyhow::Result;
use std::io::{self, Write};
use std::time::Duration;

use match_schemes::catalog::{self, Catalog};
use match_schemes::eligibility;
use match_schemes::recommend;
use match_schemes::types::{
    EducationLevel, IncomeRange, ProfileDetails, State, StudentProfile, VerifiedIdentity,
};
use match_schemes::uidai::MockUidaiService;
use match_schemes::verify::VerificationSession;

#[tokio::main]
async fn main() -> Result<()> {
    let root = std::env::var("ROOT").unwrap_or_else(|_| ".".to_string());
    let catalog = catalog::load_catalog(&root)?;

    println!("=== Padhai Ka Safar (demo) ===");
    println!("Identity verification via UIDAI (mock)\n");

    let identity = run_verification().await?;
    println!("\nVerified: {} ({})\n", identity.name, identity.state);

    let profile = collect_profile(identity)?;
    render_dashboard(&profile, &catalog);

    Ok(())
}

async fn run_verification() -> Result<VerifiedIdentity> {
    let latency = if std::env::var("FAST_DEMO").is_ok() {
        Duration::ZERO
    } else {
        Duration::from_millis(1500)
    };
    let mut session = VerificationSession::new(MockUidaiService::with_latency(latency));

    loop {
        let aadhaar = prompt("Enter Aadhaar number (12 digits): ")?;
        match session.submit_identifier(&aadhaar).await {
            Ok(()) => break,
            Err(e) => println!("{}", e),
        }
    }
    println!("OTP sent to registered mobile ending in ******1234");

    loop {
        let otp = prompt("Enter OTP (demo: 123456): ")?;
        match session.submit_otp(&otp).await {
            Ok(identity) => return Ok(identity),
            Err(e) => println!("{}", e),
        }
    }
}

fn collect_profile(identity: VerifiedIdentity) -> Result<StudentProfile> {
    let education_level = choose("Education level", &EducationLevel::ALL)?;
    let state = choose("State", &State::ALL)?;
    let income_range = choose("Family income range", &IncomeRange::ALL)?;
    let district = prompt("District: ")?;
    let interests: Vec<String> = prompt("Interests (comma separated): ")?
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    Ok(StudentProfile::from_verification(
        identity,
        ProfileDetails {
            education_level,
            state,
            district,
            income_range,
            interests,
        },
    ))
}

fn render_dashboard(profile: &StudentProfile, catalog: &Catalog) {
    println!("\n--- Scholarships for {} ---", profile.name);
    let scholarships = eligibility::eligible_scholarships(profile, catalog);
    if scholarships.is_empty() {
        println!("No matching scholarships for this profile.");
    } else {
        for s in &scholarships {
            println!("- {} [{}]", s.name, s.id);
            println!("  {} | {} | apply by {}", s.provider, s.amount, s.deadline);
            println!("  Eligibility: {}", s.eligibility_description);
        }
        let reasons = eligibility::match_reasons(profile);
        println!("Matched rules: {}", reasons.join(", "));
    }

    println!("\n--- Recommended courses ---");
    for c in recommend::recommended_courses(profile, catalog) {
        let cert = if c.certification { "certified" } else { "no certificate" };
        println!("- {} ({}, {}, {})", c.title, c.platform, c.duration, cert);
    }

    println!("\n--- Next steps ---");
    for step in recommend::next_steps(profile.education_level) {
        println!("- {}", step);
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn choose<T: Copy + std::fmt::Display>(label: &str, options: &[T]) -> Result<T> {
    println!("{}:", label);
    for (i, option) in options.iter().enumerate() {
        println!("  {}. {}", i + 1, option);
    }
    loop {
        let input = prompt("> ")?;
        match input.parse::<usize>() {
            Ok(n) if n >= 1 && n <= options.len() => return Ok(options[n - 1]),
            _ => println!("Enter a number between 1 and {}", options.len()),
        }
    }
}
