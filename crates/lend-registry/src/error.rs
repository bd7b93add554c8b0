// error.rs — Error types for the application registry.

use thiserror::Error;

use crate::application::ApplicationStatus;

/// An intake precondition violation. The submission had no effect; the
/// caller must correct the application and submit again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The application was not in the `Submitted` status at intake.
    #[error("application {id} must be submitted at intake, status is {status}")]
    NotSubmitted { id: u64, status: ApplicationStatus },

    /// The credit score lies outside the accepted range.
    #[error("application {id} has credit score {credit_score}, outside 500..=900")]
    CreditScoreOutOfRange { id: u64, credit_score: u16 },

    /// The tax id does not match the required format
    /// (five uppercase letters, four digits, one uppercase letter).
    #[error("application {id} has malformed tax id '{tax_id}'")]
    MalformedTaxId { id: u64, tax_id: String },
}

/// Errors surfaced by registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Intake validation failed; nothing was stored.
    #[error("intake rejected: {0}")]
    Validation(#[from] ValidationError),

    /// An id-targeted operation referenced an id absent from the registry.
    #[error("no application with id {id}")]
    NotFound { id: u64 },

    /// Resubmission targeted a record that exists but is not in
    /// `VerificationFailed`.
    #[error("application {id} is not eligible for resubmission, status is {status}")]
    IneligibleForResubmission { id: u64, status: ApplicationStatus },

    /// A FIFO-selection operation found no application in the required
    /// status set.
    #[error("no application with status {required}")]
    NoEligibleApplication { required: &'static str },
}
