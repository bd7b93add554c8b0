// application.rs — the loan application entity and its lifecycle states.
//
// The state machine:
//   Submitted / Resubmitted → VerificationSuccess → Approved | Rejected
//   Submitted / Resubmitted → VerificationFailed → (resubmit) → Resubmitted
//
// Approved and Rejected are terminal.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The lifecycle state of a loan application.
///
/// `#[serde(rename_all = "snake_case")]` keeps the wire form aligned with
/// the `Display` rendering used in log lines and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// Accepted at intake, awaiting a first verification decision.
    Submitted,

    /// Back in the verification queue after a failed verification.
    Resubmitted,

    /// Verification passed — awaiting approval or rejection.
    VerificationSuccess,

    /// Verification failed — eligible for resubmission.
    VerificationFailed,

    /// Approved. Terminal.
    Approved,

    /// Rejected. Terminal.
    Rejected,
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplicationStatus::Submitted => write!(f, "submitted"),
            ApplicationStatus::Resubmitted => write!(f, "resubmitted"),
            ApplicationStatus::VerificationSuccess => write!(f, "verification_success"),
            ApplicationStatus::VerificationFailed => write!(f, "verification_failed"),
            ApplicationStatus::Approved => write!(f, "approved"),
            ApplicationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl ApplicationStatus {
    /// True for statuses awaiting a verification decision
    /// (`Submitted` or `Resubmitted`).
    pub fn is_pending_verification(self) -> bool {
        matches!(
            self,
            ApplicationStatus::Submitted | ApplicationStatus::Resubmitted
        )
    }

    /// True for statuses with no outgoing transition.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            ApplicationStatus::Approved | ApplicationStatus::Rejected
        )
    }

    /// Check whether transitioning from this status to `next` is valid.
    ///
    /// The valid transitions form a directed graph:
    ///   Submitted / Resubmitted → VerificationSuccess | VerificationFailed
    ///   VerificationFailed → Resubmitted
    ///   VerificationSuccess → Approved | Rejected
    ///
    /// The id-targeted registry operations deliberately bypass this check
    /// (see [`crate::Registry::verify_application`]); it is consulted by the
    /// resubmission path and exported for host-side introspection.
    pub fn can_transition_to(self, next: ApplicationStatus) -> bool {
        matches!(
            (self, next),
            (
                ApplicationStatus::Submitted | ApplicationStatus::Resubmitted,
                ApplicationStatus::VerificationSuccess | ApplicationStatus::VerificationFailed,
            ) | (
                ApplicationStatus::VerificationFailed,
                ApplicationStatus::Resubmitted,
            ) | (
                ApplicationStatus::VerificationSuccess,
                ApplicationStatus::Approved | ApplicationStatus::Rejected,
            )
        )
    }
}

/// One loan request.
///
/// The registry validates `tax_id` and `credit_score` once, at intake; a
/// stored application is trusted from then on. `status` is the only field
/// the registry mutates after intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    /// Caller-assigned identifier. Uniqueness is not enforced; id-targeted
    /// lookups resolve duplicates to the first match in insertion order.
    pub id: u64,

    /// Applicant name. Free text, unvalidated.
    pub name: String,

    /// Tax identifier. Must match five uppercase letters, four digits, one
    /// uppercase letter (e.g. `ABCDE1234F`) at intake.
    pub tax_id: String,

    /// Credit score. Must lie in `500..=900` at intake.
    pub credit_score: u16,

    /// Current lifecycle status.
    pub status: ApplicationStatus,
}

impl Application {
    /// Create a new application in the `Submitted` status.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        tax_id: impl Into<String>,
        credit_score: u16,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            tax_id: tax_id.into(),
            credit_score,
            status: ApplicationStatus::Submitted,
        }
    }
}
