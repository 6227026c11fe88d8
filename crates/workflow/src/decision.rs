/// Outcome of checking the caller's stated intent against the current SSL
/// termination state of the load balancer.
///
/// The workflow assists exactly one transition: from "no termination
/// configured" to "termination configured with this mapping". Adding a
/// further mapping to an already-terminated load balancer is the other
/// consistent case; everything else is refused before any mutation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TerminationDecision {
    /// The requested operation is consistent with the current state.
    Proceed,

    /// Termination is not configured and the caller did not ask to enable
    /// it.
    MissingSslFlag,

    /// Termination is already configured and the caller asked to enable it
    /// again.
    AlreadyConfigured,
}

impl TerminationDecision {
    /// Evaluates the `(enabled, want_ssl)` pair.
    #[must_use]
    pub const fn evaluate(enabled: bool, want_ssl: bool) -> Self {
        match (enabled, want_ssl) {
            (false, false) => Self::MissingSslFlag,
            (true, true) => Self::AlreadyConfigured,
            _ => Self::Proceed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_two_consistent_pairs_proceed() {
        assert_eq!(
            TerminationDecision::evaluate(false, true),
            TerminationDecision::Proceed
        );
        assert_eq!(
            TerminationDecision::evaluate(true, false),
            TerminationDecision::Proceed
        );
        assert_eq!(
            TerminationDecision::evaluate(false, false),
            TerminationDecision::MissingSslFlag
        );
        assert_eq!(
            TerminationDecision::evaluate(true, true),
            TerminationDecision::AlreadyConfigured
        );
    }
}
