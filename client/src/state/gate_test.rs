use super::*;

// =============================================================
// Initial state
// =============================================================

#[test]
fn gate_starts_waiting() {
    let gate = GateLifecycle::new();
    assert_eq!(gate.phase(), GatePhase::Waiting);
    assert!(!gate.is_ready());
    assert!(!gate.is_resolved());
    assert!(!gate.is_cancelled());
}

// =============================================================
// Forward transitions
// =============================================================

#[test]
fn timer_advances_to_ready_pending() {
    let mut gate = GateLifecycle::new();
    assert!(gate.mark_ready());
    assert_eq!(gate.phase(), GatePhase::ReadyPending);
    assert!(gate.is_ready());
    assert!(!gate.is_resolved());
}

#[test]
fn resolution_advances_to_ready_resolved() {
    let mut gate = GateLifecycle::new();
    gate.mark_ready();
    assert!(gate.mark_resolved());
    assert_eq!(gate.phase(), GatePhase::ReadyResolved);
    assert!(gate.is_resolved());
}

#[test]
fn resolution_is_rejected_before_timer_fires() {
    let mut gate = GateLifecycle::new();
    assert!(!gate.mark_resolved());
    assert_eq!(gate.phase(), GatePhase::Waiting);
}

// =============================================================
// Idempotence
// =============================================================

#[test]
fn double_fired_timer_does_not_double_transition() {
    let mut gate = GateLifecycle::new();
    assert!(gate.mark_ready());
    assert!(!gate.mark_ready());
    assert_eq!(gate.phase(), GatePhase::ReadyPending);
}

#[test]
fn timer_after_resolution_is_a_no_op() {
    let mut gate = GateLifecycle::new();
    gate.mark_ready();
    gate.mark_resolved();
    assert!(!gate.mark_ready());
    assert_eq!(gate.phase(), GatePhase::ReadyResolved);
}

#[test]
fn double_resolution_does_not_double_transition() {
    let mut gate = GateLifecycle::new();
    gate.mark_ready();
    assert!(gate.mark_resolved());
    assert!(!gate.mark_resolved());
}

// =============================================================
// Cancellation (teardown)
// =============================================================

#[test]
fn cancel_before_timer_blocks_every_transition() {
    let mut gate = GateLifecycle::new();
    gate.cancel();
    assert!(!gate.mark_ready());
    assert!(!gate.mark_resolved());
    assert_eq!(gate.phase(), GatePhase::Waiting);
    assert!(gate.is_cancelled());
}

#[test]
fn cancel_between_ready_and_resolution_discards_the_result() {
    let mut gate = GateLifecycle::new();
    gate.mark_ready();
    gate.cancel();
    assert!(!gate.mark_resolved());
    assert_eq!(gate.phase(), GatePhase::ReadyPending);
}

#[test]
fn cancel_preserves_the_phase_it_froze() {
    let mut gate = GateLifecycle::new();
    gate.mark_ready();
    gate.mark_resolved();
    gate.cancel();
    assert_eq!(gate.phase(), GatePhase::ReadyResolved);
}
