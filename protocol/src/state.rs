//! Verification session phases.

/// Where a verification session currently stands.
///
/// A session moves `Idle → Filtering → Matching → Passed | Failed`, or ends
/// in `Aborted` when it cannot reach a decision (insufficient valid frames,
/// or an internal error mid-loop). There are no retries within a session; a
/// caller re-invokes the whole protocol with a fresh frame batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    /// Selecting the valid frames the matching loop will consume.
    Filtering,
    /// Running the frame-against-record matching loop.
    Matching,
    Passed,
    Failed,
    Aborted,
}

impl SessionPhase {
    /// True once the session can no longer change phase.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Passed | Self::Failed | Self::Aborted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_decision_phases_are_terminal() {
        assert!(!SessionPhase::Idle.is_terminal());
        assert!(!SessionPhase::Filtering.is_terminal());
        assert!(!SessionPhase::Matching.is_terminal());
        assert!(SessionPhase::Passed.is_terminal());
        assert!(SessionPhase::Failed.is_terminal());
        assert!(SessionPhase::Aborted.is_terminal());
    }
}
