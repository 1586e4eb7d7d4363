// Rounding helpers. `f64::floor`/`f64::ceil` live in `std`; `no_std` builds go through `libm`.

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("virtual-grid needs either the `std` or the `libm` feature for float rounding");

#[cfg(feature = "std")]
pub(crate) fn floor(x: f64) -> f64 {
    x.floor()
}

#[cfg(feature = "std")]
pub(crate) fn ceil(x: f64) -> f64 {
    x.ceil()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
pub(crate) fn floor(x: f64) -> f64 {
    libm::floor(x)
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
pub(crate) fn ceil(x: f64) -> f64 {
    libm::ceil(x)
}

/// Converts a rounded, non-negative track position into an index.
///
/// Float-to-int `as` casts saturate, so huge values clamp to `usize::MAX` and NaN becomes 0.
pub(crate) fn to_track(x: f64) -> usize {
    if x <= 0.0 { 0 } else { x as usize }
}

/// Replaces negative, NaN and infinite values with zero.
pub(crate) fn non_negative(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}
