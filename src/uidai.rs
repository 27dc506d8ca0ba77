//! Mock UIDAI OTP collaborator
//!
//! Stands in for the real UIDAI ASA/KSA exchange. The mock always resolves
//! after a fixed simulated latency and accepts a single demo OTP. The
//! Aadhaar number passed to `send_otp` is never retained.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;

use crate::types::{KycData, SendOtpResponse, VerifyOtpResponse};

/// The single OTP the mock accepts.
pub const DEMO_OTP: &str = "123456";

const DEFAULT_LATENCY_MS: u64 = 1500;

/// Black-box verification collaborator. The state machine only inspects the
/// `success` flag and payload shape of the replies; transport failures
/// surface as `Err`.
#[async_trait]
pub trait OtpService {
    /// Trigger an OTP to the mobile number registered against `identifier`.
    async fn send_otp(&self, identifier: &str) -> Result<SendOtpResponse>;

    /// Check `code` and, on success, return a verification token plus
    /// minimal KYC data.
    async fn verify_otp(&self, code: &str) -> Result<VerifyOtpResponse>;
}

/// Mock service with configurable latency. Production-shaped defaults;
/// tests run with zero latency.
pub struct MockUidaiService {
    latency: Duration,
}

impl MockUidaiService {
    pub fn new() -> Self {
        Self {
            latency: Duration::from_millis(DEFAULT_LATENCY_MS),
        }
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for MockUidaiService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OtpService for MockUidaiService {
    async fn send_otp(&self, _identifier: &str) -> Result<SendOtpResponse> {
        tokio::time::sleep(self.latency).await;

        Ok(SendOtpResponse {
            success: true,
            message: "OTP sent to registered mobile ending in ******1234".to_string(),
        })
    }

    async fn verify_otp(&self, code: &str) -> Result<VerifyOtpResponse> {
        tokio::time::sleep(self.latency).await;

        if code == DEMO_OTP {
            Ok(VerifyOtpResponse {
                success: true,
                token: Some(fresh_token()),
                user_data: Some(KycData {
                    name: "Rahul Kumar".to_string(),
                    state: "Delhi".to_string(),
                }),
                message: None,
            })
        } else {
            Ok(VerifyOtpResponse {
                success: false,
                token: None,
                user_data: None,
                message: Some("Incorrect OTP. Please try again.".to_string()),
            })
        }
    }
}

static TOKEN_SEQ: AtomicU64 = AtomicU64::new(0);

/// Synthetic token, unique per process: wall-clock millis plus a sequence
/// counter so back-to-back verifications never collide.
fn fresh_token() -> String {
    let seq = TOKEN_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("VERIFIED_UID_{}_{}_SECURE", Utc::now().timestamp_millis(), seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_latency() -> MockUidaiService {
        MockUidaiService::with_latency(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_send_otp_always_succeeds() {
        let service = zero_latency();
        let res = service.send_otp("123412341234").await.unwrap();
        assert!(res.success);
        assert!(res.message.contains("OTP sent"));
    }

    #[tokio::test]
    async fn test_verify_otp_accepts_demo_code_only() {
        let service = zero_latency();

        let ok = service.verify_otp(DEMO_OTP).await.unwrap();
        assert!(ok.success);
        let kyc = ok.user_data.unwrap();
        assert_eq!(kyc.name, "Rahul Kumar");
        assert_eq!(kyc.state, "Delhi");

        let bad = service.verify_otp("654321").await.unwrap();
        assert!(!bad.success);
        assert!(bad.token.is_none());
        assert_eq!(bad.message.as_deref(), Some("Incorrect OTP. Please try again."));
    }

    #[tokio::test]
    async fn test_tokens_are_unique_and_well_formed() {
        let service = zero_latency();
        let a = service.verify_otp(DEMO_OTP).await.unwrap().token.unwrap();
        let b = service.verify_otp(DEMO_OTP).await.unwrap().token.unwrap();
        assert_ne!(a, b);
        assert!(a.starts_with("VERIFIED_UID_"));
        assert!(a.ends_with("_SECURE"));
    }
}
