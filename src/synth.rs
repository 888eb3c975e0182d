//! Bounded random value synthesis.
//!
//! Values are drawn uniformly from the inclusive `[min, max]` interval of a
//! [`SensorRange`] and rounded to two decimal places, half away from zero.
//! The rounded value is kept on the two-decimal grid inside the range, so it
//! never leaves `[min, max]` even when a bound has more than two decimals.

use rand::Rng;

use crate::sensor::SensorRange;

const SCALE: f64 = 100.0;

/// Rounds to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * SCALE).round() / SCALE
}

/// Draws one value for `range`.
///
/// A zero-width range yields its bound unchanged. So does a range too narrow
/// to contain any two-decimal value, e.g. `[0.071, 0.079]`.
pub fn synthesize_value<R: Rng + ?Sized>(range: &SensorRange, rng: &mut R) -> f64 {
    let (min, max) = (range.min(), range.max());
    if min == max {
        return min;
    }

    // At large magnitudes the grid is coarser than f64 spacing; never step outside the range.
    let lowest = grid_ceil(min).max(min);
    let highest = grid_floor(max).min(max);
    if lowest > highest {
        return min;
    }

    round2(rng.random_range(min..=max)).clamp(lowest, highest)
}

// Smallest two-decimal value >= `value`.
fn grid_ceil(value: f64) -> f64 {
    let steps = (value * SCALE).round();
    let candidate = steps / SCALE;
    if candidate < value {
        (steps + 1.0) / SCALE
    } else {
        candidate
    }
}

// Largest two-decimal value <= `value`.
fn grid_floor(value: f64) -> f64 {
    let steps = (value * SCALE).round();
    let candidate = steps / SCALE;
    if candidate > value {
        (steps - 1.0) / SCALE
    } else {
        candidate
    }
}
