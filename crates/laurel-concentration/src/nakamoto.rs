use crate::{ConcentrationError, Result};
use indexmap::IndexMap;
use laurel_types::VoterId;
use tracing::debug;

/// Smallest number of top-weighted voters whose combined weight exceeds
/// half the total.
///
/// A low coefficient means a small coalition can outvote everyone else.
/// Computed as one pass over weights sorted descending, accumulating
/// until the running sum strictly exceeds half the total. A total weight
/// of zero leaves the statistic undefined and is reported as an error.
pub fn nakamoto_coefficient(weights: &IndexMap<VoterId, f64>) -> Result<usize> {
    let total: f64 = weights.values().sum();
    if total <= 0.0 {
        return Err(ConcentrationError::ZeroTotalWeight);
    }

    let mut sorted: Vec<f64> = weights.values().copied().collect();
    sorted.sort_by(|a, b| b.total_cmp(a));

    let half = 0.5 * total;
    let mut cumulative = 0.0;

    for (count, weight) in sorted.iter().enumerate() {
        cumulative += weight;
        if cumulative > half {
            let coefficient = count + 1;
            debug!(
                coefficient,
                voters = weights.len(),
                total_weight = total,
                "Nakamoto coefficient computed"
            );
            return Ok(coefficient);
        }
    }

    // Floating-point shortfall on the last addition; the full electorate
    // is the coalition
    Ok(sorted.len())
}
