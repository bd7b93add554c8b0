// lifecycle.rs — End-to-end lifecycle test for the application registry.
//
// This test drives a full intake-to-decision flow through the public API:
//
//   1. Submit an application → it appears in the submitted view
//   2. Mark verification failed (FIFO claim) → verification_failed view
//   3. Resubmit by id → back in the pending-verification pool
//   4. Mark verification success (FIFO claim again)
//   5. Approve (FIFO) → approved view
//
// VERIFY:
//   - The application lands in exactly one filtered view at each step
//   - The FIFO operations claim the expected record every time
//   - Fields other than status never change

use lend_registry::{Application, ApplicationStatus, Registry, RegistryError};

#[test]
fn full_lifecycle_from_intake_to_approval() {
    let mut registry = Registry::new();

    registry
        .submit(Application::new(1, "John Doe", "ABCDE1234F", 750))
        .unwrap();
    assert_eq!(registry.submitted_applications().count(), 1);

    let claimed = registry.mark_verification_failed().unwrap();
    assert_eq!(claimed.id, 1);
    assert_eq!(registry.verification_failed_applications().count(), 1);
    assert_eq!(registry.pending_verification_applications().count(), 0);

    registry.resubmit_application(1).unwrap();
    assert_eq!(registry.resubmitted_applications().count(), 1);
    assert_eq!(registry.pending_verification_applications().count(), 1);

    let claimed = registry.mark_verification_success().unwrap();
    assert_eq!(claimed.id, 1);

    let approved = registry.approve_application().unwrap();
    assert_eq!(approved.id, 1);
    assert_eq!(approved.status, ApplicationStatus::Approved);

    // Exactly one view contains the application now.
    let approved: Vec<&Application> = registry.approved_applications().collect();
    assert_eq!(approved.len(), 1);
    assert_eq!(approved[0].id, 1);
    assert_eq!(approved[0].name, "John Doe");
    assert_eq!(approved[0].tax_id, "ABCDE1234F");
    assert_eq!(approved[0].credit_score, 750);

    assert_eq!(registry.submitted_applications().count(), 0);
    assert_eq!(registry.pending_verification_applications().count(), 0);
    assert_eq!(registry.verification_failed_applications().count(), 0);
    assert_eq!(registry.resubmitted_applications().count(), 0);
    assert_eq!(registry.rejected_applications().count(), 0);

    // Never removed: still enumerable among all applications.
    assert_eq!(registry.len(), 1);
}

#[test]
fn fifo_queue_processes_three_applications_in_id_order() {
    let mut registry = Registry::new();

    registry
        .submit(Application::new(1, "John Doe", "ABCDE1234F", 750))
        .unwrap();
    registry
        .submit(Application::new(2, "Jane Roe", "ABCDE1244F", 760))
        .unwrap();
    registry
        .submit(Application::new(3, "Jim Poe", "ABCDE1254F", 770))
        .unwrap();

    // The verification worker fails the two oldest applications in order.
    assert_eq!(registry.mark_verification_failed().unwrap().id, 1);
    assert_eq!(registry.mark_verification_failed().unwrap().id, 2);

    registry.resubmit_application(1).unwrap();
    registry.resubmit_application(2).unwrap();

    let resubmitted: Vec<u64> = registry.resubmitted_applications().map(|a| a.id).collect();
    assert_eq!(resubmitted, vec![1, 2]);

    // Id 3 was never touched.
    let third = registry.applications().find(|a| a.id == 3).unwrap();
    assert_eq!(third.status, ApplicationStatus::Submitted);

    // Resubmitted applications re-enter the queue ahead of id 3.
    assert_eq!(registry.mark_verification_success().unwrap().id, 1);
    assert_eq!(registry.mark_verification_success().unwrap().id, 2);
    assert_eq!(registry.mark_verification_success().unwrap().id, 3);

    // Decisions drain the verified pool oldest-first.
    assert_eq!(registry.approve_application().unwrap().id, 1);
    assert_eq!(registry.reject_application().unwrap().id, 2);
    assert_eq!(registry.approve_application().unwrap().id, 3);

    assert!(matches!(
        registry.approve_application(),
        Err(RegistryError::NoEligibleApplication { .. })
    ));

    assert_eq!(registry.approved_applications().count(), 2);
    assert_eq!(registry.rejected_applications().count(), 1);
    assert_eq!(registry.len(), 3);
}
