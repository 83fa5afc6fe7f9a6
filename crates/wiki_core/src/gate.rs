//! Completion gate: joins the animator's terminal state with generation
//! success before the browsing view may be entered.

/// What the gate allows for the current pair of signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// At least one signal is still missing.
    Wait,
    /// Both signals are present and no settle timer is pending yet.
    ScheduleSettle,
    /// Both signals are present and the settle timer is already pending.
    AwaitSettle,
}

/// Pure AND-gate over the two readiness signals.
pub fn evaluate(animation_done: bool, data_ready: bool, settle_scheduled: bool) -> GateDecision {
    match (animation_done && data_ready, settle_scheduled) {
        (false, _) => GateDecision::Wait,
        (true, false) => GateDecision::ScheduleSettle,
        (true, true) => GateDecision::AwaitSettle,
    }
}

/// Whether a transition to browsing may fire when the settle timer elapses.
pub fn may_transition(animation_done: bool, data_ready: bool) -> bool {
    animation_done && data_ready
}
