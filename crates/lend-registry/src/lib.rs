//! # lend-registry
//!
//! Loan application lifecycle registry for a single financial institution.
//!
//! A [`Registry`] owns the ordered collection of [`Application`] records,
//! validates each one at intake (status, credit score range, tax id format)
//! and advances them through the verification and decision lifecycle:
//!
//! ```text
//! Submitted / Resubmitted → VerificationSuccess → Approved | Rejected
//! Submitted / Resubmitted → VerificationFailed → (resubmit) → Resubmitted
//! ```
//!
//! Operations that take no id act on the oldest eligible application
//! (lowest id, insertion order on ties) — a FIFO single-worker queue. The
//! id-targeted variants share the same transition code but skip the
//! prior-status check; see the notes on [`Registry::verify_application`].
//!
//! ## Key components
//!
//! - [`Application`] — one loan request (caller-assigned id, name, tax id,
//!   credit score, status)
//! - [`ApplicationStatus`] — the closed lifecycle enum with transition
//!   introspection
//! - [`Registry`] — intake gate, filtered read views, FIFO and id-targeted
//!   lifecycle operations
//! - [`RegistryError`] / [`ValidationError`] — the full failure contract
//!
//! The registry is a process-local, single-threaded library: no storage,
//! no network surface, no internal locking. Hosts exposing it to multiple
//! callers must wrap it in their own mutual exclusion so select-oldest and
//! status assignment stay atomic.

pub mod application;
pub mod error;
pub mod registry;

pub use application::{Application, ApplicationStatus};
pub use error::{RegistryError, ValidationError};
pub use registry::{Registry, MAX_CREDIT_SCORE, MIN_CREDIT_SCORE, TAX_ID_PATTERN};
