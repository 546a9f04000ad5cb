use thiserror::Error;

/// Caller-facing failures of the UCB1 selector.
///
/// Every variant aborts the run: partial bandit state is not meaningfully
/// resumable, so there are no recoverable or retried conditions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Bad round or arm budget (zero rounds, zero arms).
    ///
    /// Surfaced before any round executes.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A reward lookup fell outside the table's bounds.
    ///
    /// This is how a table shorter than the round budget, or narrower than
    /// the arm count, surfaces: at the first round where the lookup fails.
    #[error("reward lookup out of range at round {round}, arm {arm}")]
    RewardOutOfRange {
        /// Round index of the failed lookup.
        round: usize,
        /// Arm index of the failed lookup.
        arm: usize,
    },
}
