//! Weighted discrete sampling.

use rand::Rng;

use crate::{Result, SwingError};

/// Pick one item from `items` with probability proportional to its weight.
///
/// Draws a uniform value in [0, Σweights) and subtracts successive weights
/// until the remainder is spent. When all weight sits on a single entry the
/// choice degenerates to that entry regardless of the draw. Floating
/// rounding can leave a sliver of remainder after the final subtraction;
/// the last item is returned in that case.
pub fn weighted_choice<'a, T>(items: &'a [T], weights: &[f64], rng: &mut impl Rng) -> Result<&'a T> {
    if items.is_empty() || items.len() != weights.len() {
        return Err(SwingError::InvalidWeights {
            reason: "items and weights must be non-empty and equal length",
        });
    }
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(SwingError::InvalidWeights {
            reason: "weights must be finite and non-negative",
        });
    }
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return Err(SwingError::InvalidWeights {
            reason: "weights must not all be zero",
        });
    }

    let mut remainder = rng.gen_range(0.0..total);
    let mut chosen = items.len() - 1; // rounding fallback
    for (i, weight) in weights.iter().enumerate() {
        remainder -= weight;
        if remainder <= 0.0 {
            chosen = i;
            break;
        }
    }
    Ok(&items[chosen])
}
