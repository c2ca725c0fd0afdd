use thiserror::Error;

use rootfind_core::Function;

use crate::evaluate::{NonFiniteResidual, evaluate};

/// Errors that can occur when creating a [`Bracket`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,
    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,
    /// Function values at the endpoints share a strict sign.
    #[error("no sign change")]
    NoSignChange,
}

/// Current bracket endpoints and the function values at each one.
///
/// Endpoints keep the order the caller gave them in. Narrowing always tests
/// against `a`, so `[a, b]` and `[b, a]` only give the same trace when the
/// bracket changes sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    a: f64,
    b: f64,
    f_a: f64,
    f_b: f64,
}

impl Bracket {
    /// Validates `ends`, evaluates both endpoints, and builds the bracket.
    ///
    /// With `check_sign` the bracket must have nonzero width and a sign
    /// change. Without it any finite pair is accepted, including `a == b`.
    ///
    /// # Errors
    ///
    /// Returns a `BracketError` for invalid endpoints or a missing sign
    /// change, or `NonFiniteResidual` if either endpoint evaluates to `inf`
    /// or `NaN`.
    pub(crate) fn open<E>(
        function: &(impl Function + ?Sized),
        ends: [f64; 2],
        check_sign: bool,
    ) -> Result<Self, E>
    where
        E: From<BracketError> + From<NonFiniteResidual>,
    {
        let [a, b] = ends;
        if !a.is_finite() || !b.is_finite() {
            return Err(BracketError::NonFinite.into());
        }

        #[allow(clippy::float_cmp)]
        if check_sign && a == b {
            return Err(BracketError::ZeroWidth.into());
        }

        let f_a = evaluate(function, a)?;
        let f_b = evaluate(function, b)?;

        if check_sign {
            Ok(Self::new(ends, [f_a, f_b])?)
        } else {
            Ok(Self::unchecked(ends, [f_a, f_b]))
        }
    }

    /// Creates a bracket after checking that the endpoint values change sign.
    ///
    /// A zero at either endpoint counts as a sign change.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NoSignChange` if both values share a strict sign.
    pub(crate) fn new(ends: [f64; 2], values: [f64; 2]) -> Result<Self, BracketError> {
        if same_strict_sign(values[0], values[1]) {
            return Err(BracketError::NoSignChange);
        }
        Ok(Self::unchecked(ends, values))
    }

    /// Creates a bracket without checking for a sign change.
    pub(crate) fn unchecked(ends: [f64; 2], values: [f64; 2]) -> Self {
        let [a, b] = ends;
        let [f_a, f_b] = values;
        Self { a, b, f_a, f_b }
    }

    /// Returns the endpoints `[a, b]` in caller order.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.a, self.b]
    }

    /// Returns `[f(a), f(b)]`.
    #[must_use]
    pub fn values(&self) -> [f64; 2] {
        [self.f_a, self.f_b]
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.a + self.b)
    }

    /// Returns the bracket width, `|b - a|`.
    #[must_use]
    pub fn width(&self) -> f64 {
        (self.b - self.a).abs()
    }

    /// Returns the root of the secant line through both endpoints.
    ///
    /// Returns `None` when the line is flat (`f(a) == f(b)`).
    #[must_use]
    pub fn secant_root(&self) -> Option<f64> {
        let denom = self.f_b - self.f_a;
        #[allow(clippy::float_cmp)]
        if denom == 0.0 {
            return None;
        }
        Some((self.a * self.f_b - self.b * self.f_a) / denom)
    }

    /// Narrows the bracket to `[a, x]` or `[x, b]`.
    ///
    /// If `f(a)` and `f(x)` have opposite signs, `x` replaces `b`. Otherwise
    /// it replaces `a`.
    pub(crate) fn narrow(&mut self, x: f64, fx: f64) {
        if opposite_signs(self.f_a, fx) {
            self.b = x;
            self.f_b = fx;
        } else {
            self.a = x;
            self.f_a = fx;
        }
    }
}

// Sign tests avoid multiplying values, which can underflow to zero.
fn opposite_signs(a: f64, b: f64) -> bool {
    (a < 0.0 && b > 0.0) || (a > 0.0 && b < 0.0)
}

fn same_strict_sign(a: f64, b: f64) -> bool {
    (a < 0.0 && b < 0.0) || (a > 0.0 && b > 0.0)
}
