// registry.rs — the financial institution's application registry.
//
// Owns the ordered collection of applications and every operation that
// advances one through its lifecycle. Intake is the only validation gate;
// a stored application is trusted. Operations that take no id act on the
// oldest eligible application (lowest id, insertion order on ties) — a
// FIFO single-worker queue.

use std::sync::OnceLock;

use regex::Regex;

use crate::application::{Application, ApplicationStatus};
use crate::error::{RegistryError, ValidationError};

/// Lowest credit score accepted at intake.
pub const MIN_CREDIT_SCORE: u16 = 500;

/// Highest credit score accepted at intake.
pub const MAX_CREDIT_SCORE: u16 = 900;

/// Tax id format accepted at intake: five uppercase letters, four digits,
/// one uppercase letter.
pub const TAX_ID_PATTERN: &str = r"^[A-Z]{5}[0-9]{4}[A-Z]$";

fn tax_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TAX_ID_PATTERN).expect("TAX_ID_PATTERN is a valid regex"))
}

/// The application registry of a single financial institution.
///
/// Process-local and single-threaded; no ambient state is shared between
/// registry values. Applications are appended at intake and never removed —
/// every application ever accepted stays enumerable for the registry's
/// lifetime.
#[derive(Debug, Default)]
pub struct Registry {
    applications: Vec<Application>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            applications: Vec::new(),
        }
    }

    /// Number of applications ever accepted.
    pub fn len(&self) -> usize {
        self.applications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }

    /// Accept a new application into the registry.
    ///
    /// Preconditions, checked in order: the application is in `Submitted`
    /// status, its credit score lies in `500..=900`, and its tax id matches
    /// [`TAX_ID_PATTERN`]. On any violation the submission is rejected with
    /// the failed rule and the collection is left exactly as before.
    pub fn submit(&mut self, application: Application) -> Result<(), RegistryError> {
        validate_intake(&application)?;
        tracing::debug!(
            "application {} accepted for intake ({})",
            application.id,
            application.name
        );
        self.applications.push(application);
        Ok(())
    }

    /// All applications, in insertion order.
    pub fn applications(&self) -> impl Iterator<Item = &Application> + '_ {
        self.applications.iter()
    }

    /// Applications in `Submitted` status.
    pub fn submitted_applications(&self) -> impl Iterator<Item = &Application> + '_ {
        self.with_status(ApplicationStatus::Submitted)
    }

    /// Applications awaiting a verification decision
    /// (`Submitted` or `Resubmitted`).
    pub fn pending_verification_applications(&self) -> impl Iterator<Item = &Application> + '_ {
        self.applications
            .iter()
            .filter(|a| a.status.is_pending_verification())
    }

    /// Applications in `VerificationFailed` status.
    pub fn verification_failed_applications(&self) -> impl Iterator<Item = &Application> + '_ {
        self.with_status(ApplicationStatus::VerificationFailed)
    }

    /// Applications in `Resubmitted` status.
    pub fn resubmitted_applications(&self) -> impl Iterator<Item = &Application> + '_ {
        self.with_status(ApplicationStatus::Resubmitted)
    }

    /// Applications in `Approved` status.
    pub fn approved_applications(&self) -> impl Iterator<Item = &Application> + '_ {
        self.with_status(ApplicationStatus::Approved)
    }

    /// Applications in `Rejected` status.
    pub fn rejected_applications(&self) -> impl Iterator<Item = &Application> + '_ {
        self.with_status(ApplicationStatus::Rejected)
    }

    /// Mark the oldest pending-verification application as having passed
    /// verification. Returns the claimed application.
    pub fn mark_verification_success(&mut self) -> Result<&Application, RegistryError> {
        let index = self.oldest_pending_verification()?;
        Ok(self.assign_status(index, ApplicationStatus::VerificationSuccess))
    }

    /// Mark the oldest pending-verification application as having failed
    /// verification. Returns the claimed application.
    pub fn mark_verification_failed(&mut self) -> Result<&Application, RegistryError> {
        let index = self.oldest_pending_verification()?;
        Ok(self.assign_status(index, ApplicationStatus::VerificationFailed))
    }

    /// Record a verification outcome for the application with the given id.
    ///
    /// The prior status is not re-checked before mutating: verifying an
    /// already-decided application overwrites its status. Callers wanting
    /// stricter semantics can consult
    /// [`ApplicationStatus::can_transition_to`] first.
    pub fn verify_application(
        &mut self,
        id: u64,
        passed: bool,
    ) -> Result<&Application, RegistryError> {
        let index = self.index_of(id)?;
        let next = if passed {
            ApplicationStatus::VerificationSuccess
        } else {
            ApplicationStatus::VerificationFailed
        };
        Ok(self.assign_status(index, next))
    }

    /// Approve the oldest application that passed verification.
    pub fn approve_application(&mut self) -> Result<&Application, RegistryError> {
        let index = self.oldest_awaiting_decision()?;
        Ok(self.assign_status(index, ApplicationStatus::Approved))
    }

    /// Reject the oldest application that passed verification.
    pub fn reject_application(&mut self) -> Result<&Application, RegistryError> {
        let index = self.oldest_awaiting_decision()?;
        Ok(self.assign_status(index, ApplicationStatus::Rejected))
    }

    /// Approve the application with the given id, unconditionally — the
    /// prior status is not re-checked (same contract as
    /// [`Registry::verify_application`]).
    pub fn approve_application_by_id(&mut self, id: u64) -> Result<&Application, RegistryError> {
        let index = self.index_of(id)?;
        Ok(self.assign_status(index, ApplicationStatus::Approved))
    }

    /// Return a verification-failed application to the pending pool.
    ///
    /// Fails with `NotFound` if no application has the id, and with
    /// `IneligibleForResubmission` if the application exists but is not in
    /// `VerificationFailed`. Nothing is mutated on either failure.
    pub fn resubmit_application(&mut self, id: u64) -> Result<&Application, RegistryError> {
        let index = self.index_of(id)?;
        let status = self.applications[index].status;
        if !status.can_transition_to(ApplicationStatus::Resubmitted) {
            return Err(RegistryError::IneligibleForResubmission { id, status });
        }
        Ok(self.assign_status(index, ApplicationStatus::Resubmitted))
    }

    fn with_status(&self, status: ApplicationStatus) -> impl Iterator<Item = &Application> + '_ {
        self.applications.iter().filter(move |a| a.status == status)
    }

    /// Index of the first application with the given id, in insertion order.
    fn index_of(&self, id: u64) -> Result<usize, RegistryError> {
        self.applications
            .iter()
            .position(|a| a.id == id)
            .ok_or(RegistryError::NotFound { id })
    }

    fn oldest_pending_verification(&self) -> Result<usize, RegistryError> {
        self.oldest_matching(|a| a.status.is_pending_verification())
            .ok_or(RegistryError::NoEligibleApplication {
                required: "submitted or resubmitted",
            })
    }

    fn oldest_awaiting_decision(&self) -> Result<usize, RegistryError> {
        self.oldest_matching(|a| a.status == ApplicationStatus::VerificationSuccess)
            .ok_or(RegistryError::NoEligibleApplication {
                required: "verification_success",
            })
    }

    /// Deterministic FIFO selection: the eligible application with the
    /// lowest id, ties broken by insertion order. Keyed on
    /// `(id, insertion index)` so the result does not depend on container
    /// iteration quirks.
    fn oldest_matching(&self, eligible: impl Fn(&Application) -> bool) -> Option<usize> {
        self.applications
            .iter()
            .enumerate()
            .filter(|(_, a)| eligible(a))
            .min_by_key(|&(index, application)| (application.id, index))
            .map(|(index, _)| index)
    }

    /// The single mutation point every transition funnels through.
    fn assign_status(&mut self, index: usize, next: ApplicationStatus) -> &Application {
        let from = self.applications[index].status;
        self.applications[index].status = next;
        let application = &self.applications[index];
        tracing::info!("application {}: {} -> {}", application.id, from, next);
        application
    }
}

fn validate_intake(application: &Application) -> Result<(), ValidationError> {
    if application.status != ApplicationStatus::Submitted {
        return Err(ValidationError::NotSubmitted {
            id: application.id,
            status: application.status,
        });
    }
    if !(MIN_CREDIT_SCORE..=MAX_CREDIT_SCORE).contains(&application.credit_score) {
        return Err(ValidationError::CreditScoreOutOfRange {
            id: application.id,
            credit_score: application.credit_score,
        });
    }
    if !tax_id_regex().is_match(&application.tax_id) {
        return Err(ValidationError::MalformedTaxId {
            id: application.id,
            tax_id: application.tax_id.clone(),
        });
    }
    Ok(())
}
