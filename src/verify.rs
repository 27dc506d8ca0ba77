//! Verification state machine
//!
//! Gates profile creation behind a two-step mock identity check:
//! `AwaitingIdentifier -> AwaitingOtp -> Verified`. Failures keep the
//! machine in its current state; every rejection is recoverable by
//! resubmitting. The submitted identifier is never retained past the
//! `submit_identifier` call.

use regex::Regex;
use thiserror::Error;

use crate::types::VerifiedIdentity;
use crate::uidai::OtpService;

#[derive(Debug, Error)]
pub enum VerifyError {
    /// Identifier fails the 12-digit check, or the collaborator refused it.
    #[error("Invalid Aadhaar Number format.")]
    FormatRejection,
    /// OTP does not match the accepted value.
    #[error("Incorrect OTP. Please try again.")]
    CodeRejection,
    /// Collaborator call failed unexpectedly; retrying is safe.
    #[error("Service unavailable. Please try again.")]
    ServiceUnavailable(anyhow::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyState {
    AwaitingIdentifier,
    AwaitingOtp,
    Verified,
}

/// One verification flow. Transient: dropped once a profile is created or
/// the flow is abandoned. Callers serialize the submit operations; a
/// pending call's result is simply discarded if the user navigates away.
pub struct VerificationSession<S> {
    service: S,
    state: VerifyState,
}

impl<S: OtpService> VerificationSession<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: VerifyState::AwaitingIdentifier,
        }
    }

    pub fn state(&self) -> VerifyState {
        self.state
    }

    /// First step: validate the identifier format and dispatch an OTP.
    /// Advances to `AwaitingOtp` on success. The identifier itself is
    /// dropped here either way. Only applies in `AwaitingIdentifier`;
    /// out-of-order calls are rejected without a service call and the
    /// machine stays put, so `Verified` stays terminal.
    pub async fn submit_identifier(&mut self, identifier: &str) -> Result<(), VerifyError> {
        if self.state != VerifyState::AwaitingIdentifier {
            return Err(VerifyError::FormatRejection);
        }
        if !is_valid_identifier(identifier) {
            return Err(VerifyError::FormatRejection);
        }

        let res = self
            .service
            .send_otp(identifier)
            .await
            .map_err(VerifyError::ServiceUnavailable)?;

        if !res.success {
            return Err(VerifyError::FormatRejection);
        }

        self.state = VerifyState::AwaitingOtp;
        Ok(())
    }

    /// Second step: check the OTP. On success the machine reaches its
    /// terminal `Verified` state and yields the identity; on rejection it
    /// stays in `AwaitingOtp` with no attempt limit. Only applies in
    /// `AwaitingOtp`; the identifier step cannot be bypassed.
    pub async fn submit_otp(&mut self, code: &str) -> Result<VerifiedIdentity, VerifyError> {
        if self.state != VerifyState::AwaitingOtp {
            return Err(VerifyError::CodeRejection);
        }
        let res = self
            .service
            .verify_otp(code)
            .await
            .map_err(VerifyError::ServiceUnavailable)?;

        match (res.success, res.token, res.user_data) {
            (true, Some(token), Some(kyc)) => {
                self.state = VerifyState::Verified;
                Ok(VerifiedIdentity {
                    token,
                    name: kyc.name,
                    state: kyc.state,
                })
            }
            _ => Err(VerifyError::CodeRejection),
        }
    }

    /// User-initiated "go back" from the OTP step.
    pub fn reset_to_identifier(&mut self) {
        if self.state == VerifyState::AwaitingOtp {
            self.state = VerifyState::AwaitingIdentifier;
        }
    }
}

fn is_valid_identifier(identifier: &str) -> bool {
    Regex::new(r"^\d{12}$")
        .map(|re| re.is_match(identifier))
        .unwrap_or(false)
}
