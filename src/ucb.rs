//! The UCB1 selector: the only part of this crate with algorithmic content.
//!
//! [`Ucb1`] is the stepwise state machine (`select` then `update`, once per
//! round); [`run_ucb1`] drives it against a [`RewardSource`] for a full round
//! budget.  Both are strictly single-threaded and synchronous: round `n`'s
//! scores require the fully updated statistics from round `n - 1`, so there
//! is nothing to parallelize across rounds.

use crate::{ArmStats, Error, RewardSource, RunResult};

/// Stepwise UCB1 policy state for one run.
///
/// All per-run statistics are private to one instance; nothing is shared or
/// reused across runs.  Callers that obtain rewards live (rather than from a
/// table) can drive the same loop [`run_ucb1`] uses:
///
/// ```rust
/// use adsel::Ucb1;
///
/// let mut policy = Ucb1::new(2).unwrap();
/// for round in 0..10 {
///     let arm = policy.select(round);
///     let reward = if arm == 0 { 1.0 } else { 0.0 }; // your observation
///     policy.update(arm, reward);
/// }
/// let result = policy.finish();
/// assert_eq!(result.trace.len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct Ucb1 {
    stats: Vec<ArmStats>,
    trace: Vec<usize>,
    total_reward: f64,
}

impl Ucb1 {
    /// Create a fresh policy over `arms` arms.
    ///
    /// Fails with [`Error::InvalidInput`] when `arms == 0`.
    pub fn new(arms: usize) -> Result<Self, Error> {
        if arms == 0 {
            return Err(Error::InvalidInput(
                "arm count must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            stats: vec![ArmStats::default(); arms],
            trace: Vec::new(),
            total_reward: 0.0,
        })
    }

    /// Number of arms this policy selects over.
    pub fn arm_count(&self) -> usize {
        self.stats.len()
    }

    /// Per-arm statistics accumulated so far.
    pub fn stats(&self) -> &[ArmStats] {
        &self.stats
    }

    /// Upper confidence bound for one arm at the given round.
    ///
    /// Unsampled arms score positive infinity, which compares strictly
    /// greater than every finite score, so each arm is guaranteed a pull
    /// before any arm repeats (cold-start exploration by construction).
    fn upper_bound(&self, round: usize, arm: usize) -> f64 {
        let s = &self.stats[arm];
        match s.mean_reward() {
            Some(avg) => {
                let bonus = (1.5 * ((round + 1) as f64).ln() / s.pulls as f64).sqrt();
                avg + bonus
            }
            None => f64::INFINITY,
        }
    }

    /// Choose the arm for `round`: argmax of the upper confidence bounds.
    ///
    /// The scan runs in increasing arm index and only replaces the current
    /// best on a strictly greater score, so the lowest-index arm wins ties.
    /// The seed is score 0 / arm 0: a fully-degenerate round where every
    /// bound is non-positive defaults to arm 0.
    pub fn select(&self, round: usize) -> usize {
        let mut chosen = 0usize;
        let mut best = 0.0f64;
        for arm in 0..self.stats.len() {
            let score = self.upper_bound(round, arm);
            if score > best {
                best = score;
                chosen = arm;
            }
        }
        chosen
    }

    /// Record the observed reward for the arm chosen this round.
    ///
    /// `arm` must come from [`Ucb1::select`]; out-of-range indices are
    /// ignored.
    pub fn update(&mut self, arm: usize, reward: f64) {
        let Some(s) = self.stats.get_mut(arm) else {
            return;
        };
        s.pulls += 1;
        s.reward_sum += reward;
        self.total_reward += reward;
        self.trace.push(arm);
    }

    /// Consume the policy and produce the terminal snapshot.
    pub fn finish(self) -> RunResult {
        RunResult {
            stats: self.stats,
            trace: self.trace,
            total_reward: self.total_reward,
        }
    }
}

/// Replay UCB1 against a reward table for `rounds` rounds over `arms` arms.
///
/// Preconditions: `rounds >= 1` and `arms >= 1`, violations fail with
/// [`Error::InvalidInput`] before any round executes.  The source is
/// consumed purely through [`RewardSource::reward`]; the first lookup that
/// falls outside its bounds aborts the run with
/// [`Error::RewardOutOfRange`] and no partial result.
///
/// Given an identical table, round budget, and arm count, the returned
/// trace and statistics are exactly reproducible.
///
/// # Example
///
/// ```rust
/// use adsel::{run_ucb1, DenseTable};
///
/// let table = DenseTable::from_rows(vec![vec![1.0]]).unwrap();
/// let r = run_ucb1(&table, 1, 1).unwrap();
/// assert_eq!(r.trace, vec![0]);
/// assert_eq!(r.total_reward, 1.0);
/// ```
pub fn run_ucb1<S: RewardSource>(source: &S, rounds: usize, arms: usize) -> Result<RunResult, Error> {
    if rounds == 0 {
        return Err(Error::InvalidInput(
            "round budget must be at least 1".to_string(),
        ));
    }
    let mut policy = Ucb1::new(arms)?;
    for round in 0..rounds {
        let chosen = policy.select(round);
        let reward = source
            .reward(round, chosen)
            .ok_or(Error::RewardOutOfRange {
                round,
                arm: chosen,
            })?;
        policy.update(chosen, reward);
    }
    Ok(policy.finish())
}
