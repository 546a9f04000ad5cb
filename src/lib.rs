//! `adsel`: deterministic UCB1 ad-selection replay over precomputed reward tables.
//!
//! You have a fixed set of arms (here: ads, but any discrete options you
//! choose between repeatedly) and an offline log of rewards, one scalar per
//! `(round, arm)` pair.  `adsel` replays the Upper Confidence Bound (UCB1)
//! policy against that log round by round: each round it scores every arm by
//! its observed average reward plus a shrinking exploration bonus, picks the
//! argmax, looks up the reward the log recorded for that pick, and folds the
//! outcome back into the per-arm statistics before the next round.  The loop
//! is a closed feedback chain, not a stateless transform: round `n` cannot be
//! computed without the fully updated statistics from round `n - 1`.
//!
//! **Goals:**
//! - **Deterministic by construction**: same table + round budget + arm count
//!   → byte-identical trace and statistics.  There is no randomness anywhere
//!   in the policy, not even for tie-breaking (ties go to the lowest index).
//! - **Replayable**: rewards come from a read-only [`RewardSource`] indexed by
//!   `(round, arm)`, so a run over the same table is exactly reproducible.
//! - **Small core**: the policy lives in [`run_ucb1`] / [`Ucb1`]; file
//!   loading, summary printing, and histogram rendering are peripheral
//!   collaborators that treat [`RunResult`] as opaque data.
//!
//! **Non-goals:**
//! - No persistence of policy state across runs.
//! - No concurrent execution: rounds form a hard sequential dependency chain.
//! - No confidence-bound variant other than UCB1, and no live/streaming
//!   reward generation (the table is assumed available upfront).
//!
//! # The UCB1 bound
//!
//! A sampled arm `i` at round `n` scores
//!
//! ```text
//!   score[i] = reward_sum[i] / pulls[i] + sqrt(3/2 * ln(n + 1) / pulls[i])
//! ```
//!
//! The `ln(n + 1)` keeps the logarithm defined at the first round and grows
//! the exploration bonus monotonically with elapsed rounds, while the
//! `1 / pulls[i]` factor shrinks an arm's uncertainty the more it has been
//! tried.  Unsampled arms score positive infinity, so every arm is pulled at
//! least once before any arm is pulled twice.
//!
//! UCB1 is from Auer, Cesa-Bianchi & Fischer (2002), "Finite-time Analysis
//! of the Multiarmed Bandit Problem", which proves logarithmic expected
//! regret for bounded i.i.d. rewards.  Replaying a policy against a logged
//! reward table is the standard offline evaluation setup; see Li et al.
//! (2011, arXiv:1003.5956) for the unbiased-replay framing.
//!
//! # Example
//!
//! ```rust
//! use adsel::{run_ucb1, DenseTable};
//!
//! // 3 rounds, 2 arms.  Arm 0 and arm 1 each pay off once early, then both
//! // pay off in the final round.
//! let table = DenseTable::from_rows(vec![
//!     vec![1.0, 0.0],
//!     vec![0.0, 1.0],
//!     vec![1.0, 1.0],
//! ]).unwrap();
//!
//! let result = run_ucb1(&table, 3, 2).unwrap();
//! assert_eq!(result.trace, vec![0, 1, 0]);
//! assert_eq!(result.total_reward, 3.0);
//! ```

#![forbid(unsafe_code)]

mod error;
pub use error::*;

mod table;
pub use table::*;

mod ucb;
pub use ucb::*;

pub mod loader;
pub use loader::{load_table, LoadError};

pub mod report;
pub use report::{selection_histogram, write_histogram, write_summary};

pub const ADSEL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Running statistics for one arm, owned by a single run.
///
/// `reward_sum / pulls` (the arm's observed average) is only defined when
/// `pulls > 0`; [`ArmStats::mean_reward`] returns `None` otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmStats {
    /// How many rounds chose this arm.
    pub pulls: u64,
    /// Total reward observed across those rounds.
    pub reward_sum: f64,
}

impl ArmStats {
    /// Observed average reward, or `None` for an unsampled arm.
    pub fn mean_reward(&self) -> Option<f64> {
        if self.pulls == 0 {
            None
        } else {
            Some(self.reward_sum / self.pulls as f64)
        }
    }
}

/// Terminal snapshot of a completed run.
///
/// Created once, after the final round; a run that aborts produces no
/// `RunResult` at all, so consumers never see partial state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    /// Final per-arm statistics, indexed by arm.
    pub stats: Vec<ArmStats>,
    /// The arm chosen each round, in round order (length = round budget).
    pub trace: Vec<usize>,
    /// Sum of all rewards actually received.
    ///
    /// Always equals the sum of `stats[i].reward_sum` over all arms.
    pub total_reward: f64,
}

impl RunResult {
    /// Number of arms this run selected over.
    pub fn arm_count(&self) -> usize {
        self.stats.len()
    }

    /// Number of rounds this run executed.
    pub fn round_count(&self) -> usize {
        self.trace.len()
    }
}
