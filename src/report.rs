//! Read-only output consumers for [`RunResult`]: a plain-text summary table
//! and a text frequency chart of the selection trace.
//!
//! Both write to a caller-supplied sink so harnesses and tests can capture
//! output; neither inspects selector internals beyond the public result.

use std::io::{self, Write};

use crate::RunResult;

/// Bucket trace entries by arm index: one bucket per arm in `[0, arms)`.
///
/// Trace entries outside the range are ignored (a completed run never
/// produces them).
///
/// # Example
///
/// ```rust
/// use adsel::selection_histogram;
///
/// assert_eq!(selection_histogram(&[0, 1, 0, 2, 0], 3), vec![3, 1, 1]);
/// ```
#[must_use]
pub fn selection_histogram(trace: &[usize], arms: usize) -> Vec<u64> {
    let mut buckets = vec![0u64; arms];
    for &arm in trace {
        if let Some(b) = buckets.get_mut(arm) {
            *b += 1;
        }
    }
    buckets
}

/// Write per-arm pulls, reward sums, and means, followed by the total reward.
pub fn write_summary<W: Write>(w: &mut W, result: &RunResult) -> io::Result<()> {
    writeln!(w, "{:>4}  {:>8}  {:>12}  {:>8}", "arm", "pulls", "reward_sum", "mean")?;
    for (arm, s) in result.stats.iter().enumerate() {
        let mean = s
            .mean_reward()
            .map_or_else(|| "-".to_string(), |m| format!("{m:.4}"));
        writeln!(
            w,
            "{arm:>4}  {:>8}  {:>12.4}  {mean:>8}",
            s.pulls, s.reward_sum
        )?;
    }
    writeln!(w, "total reward: {:.4}", result.total_reward)
}

/// Render a text frequency chart of the selection trace, one bar per arm.
///
/// Bars are scaled so the most-selected arm spans `width` characters; `width`
/// is clamped to at least 1.
pub fn write_histogram<W: Write>(
    w: &mut W,
    trace: &[usize],
    arms: usize,
    width: usize,
) -> io::Result<()> {
    let buckets = selection_histogram(trace, arms);
    let max = buckets.iter().copied().max().unwrap_or(0);
    let width = width.max(1);

    writeln!(w, "selections per arm ({} rounds):", trace.len())?;
    for (arm, &count) in buckets.iter().enumerate() {
        let bar_len = if max == 0 {
            0
        } else {
            ((count as f64 / max as f64) * width as f64).round() as usize
        };
        writeln!(w, "{arm:>4} | {:<width$} {count}", "#".repeat(bar_len))?;
    }
    Ok(())
}
