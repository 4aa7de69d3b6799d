//! Cross-thickness length scaling.
//!
//! Material laid out at the reference thickness h* is later rolled to
//! thickness h, which stretches or compresses the length axis. Forward
//! deformation converts a length measured at h* into the equivalent length
//! at h; backward deformation inverts it.

/// A pure unary rounding function, e.g. "round to N decimals". `None` means
/// no rounding is applied.
pub type RoundingFn = fn(f64) -> f64;

/// `l' = k * (h* * l / h)`, optionally rounded.
///
/// When `h == h_ref` the result is mathematically `k * l`; callers that want
/// an exact no-op at `h == h_ref` should special-case it themselves (the
/// outer scheduler does).
pub fn forward_deform(
    length: f64,
    h_ref: f64,
    h: f64,
    strain: f64,
    rounding_fn: Option<RoundingFn>,
) -> f64 {
    let l1 = strain * (h_ref * length / h);
    match rounding_fn {
        Some(f) => f(l1),
        None => l1,
    }
}

/// Inverse of [`forward_deform`]: `l = l' * h / (k * h*)`.
pub fn backward_deform(
    length: f64,
    h_ref: f64,
    h: f64,
    strain: f64,
    rounding_fn: Option<RoundingFn>,
) -> f64 {
    let l1 = length * h / (strain * h_ref);
    match rounding_fn {
        Some(f) => f(l1),
        None => l1,
    }
}

/// Rounds to 1 decimal place. Used internally by the scheduler for the
/// forward-deformed available-length computation — this precision is a
/// fixed constant, independent of any rounding function the caller passes
/// to [`crate::pack`].
pub fn round_to_1_decimal(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Rounds to 4 decimal places. Used internally by the scheduler for the
/// back-deformed consumption subtracted from remaining sheet length.
pub fn round_to_4_decimals(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}
