use crate::McError;

/// Floating point type used throughout system
pub type Real = f64;

/// Relative threshold below which two normalized immittances are treated as equal.
///
/// Branch selection compares quantities scaled by the reference impedance
/// (`RL / Z0`, `GL * Z0`, ...) against this value.
pub const DISPATCH_ZERO: Real = 1e-12;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, McError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(McError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, McError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(McError::NonPositive { what, value: v })
    }
}

/// Square root of a quantity that must be non-negative by construction.
///
/// A negative radicand means the caller's guard was wrong, so it surfaces as
/// an invariant violation rather than a NaN.
pub fn checked_sqrt(v: Real, what: &'static str) -> Result<Real, McError> {
    if v >= 0.0 {
        Ok(v.sqrt())
    } else {
        Err(McError::Invariant { what })
    }
}
