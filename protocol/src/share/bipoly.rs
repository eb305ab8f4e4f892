//! The bivariate polynomial and its fixed-coordinate projections.
//!
//! ```text
//! f(x, y) = secret + Σ_{j=1..T-1} a_j·x^j + Σ_{k=1..U-1} b_k·y^k
//! ```
//!
//! The polynomial is additively separable: there are no `x·y` cross terms.
//! Fixing `y` gives an [`XPoly`] in `x`; fixing `x` gives a [`YPoly`] in `y`.
//! Both projections share the parent's coefficient slice through an `Arc`,
//! so they are cheap to hand out and can outlive the [`BiPoly`].

use std::fmt;
use std::sync::Arc;

use rand::{CryptoRng, RngCore};

use crate::error::{Axis, ShareError};
use crate::group::{horner_from_linear, Group, Scalar};

/// One evaluated sample `(x, y, f(x, y))` of the bivariate polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BiPoint<S> {
    /// The x coordinate.
    pub x: i64,
    /// The y coordinate.
    pub y: i64,
    /// The polynomial value at `(x, y)`.
    pub v: S,
}

impl<S> BiPoint<S> {
    /// Build a point.
    pub fn new(x: i64, y: i64, v: S) -> Self {
        Self { x, y, v }
    }

    /// The coordinate along `axis`.
    pub fn coordinate(&self, axis: Axis) -> i64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

/// The secret-sharing source of truth.
///
/// Created once per sharing session and dropped after its commitment and
/// projections are handed out. `Debug` never prints the secret or the
/// coefficients.
#[derive(Clone)]
pub struct BiPoly<G: Group> {
    pub(crate) group: G,
    pub(crate) secret: G::Scalar,
    pub(crate) x_coeffs: Arc<[G::Scalar]>,
    pub(crate) y_coeffs: Arc<[G::Scalar]>,
}

impl<G: Group> BiPoly<G> {
    /// Sample a fresh polynomial with thresholds `t` (x axis) and `u` (y axis).
    ///
    /// Draws `t - 1` x-coefficients and `u - 1` y-coefficients uniformly from
    /// `rng`. Fails if either threshold is zero.
    pub fn new<R: RngCore + CryptoRng + ?Sized>(
        group: G,
        t: usize,
        u: usize,
        secret: G::Scalar,
        rng: &mut R,
    ) -> Result<Self, ShareError> {
        if t == 0 {
            return Err(ShareError::InvalidThreshold {
                axis: Axis::X,
                value: t,
            });
        }
        if u == 0 {
            return Err(ShareError::InvalidThreshold {
                axis: Axis::Y,
                value: u,
            });
        }
        let x_coeffs: Vec<_> = (1..t).map(|_| G::Scalar::random(rng)).collect();
        let y_coeffs: Vec<_> = (1..u).map(|_| G::Scalar::random(rng)).collect();
        Ok(Self::from_coefficients(group, secret, x_coeffs, y_coeffs))
    }

    /// Build a polynomial from explicit coefficients.
    ///
    /// `x_coeffs[j - 1]` multiplies `x^j` and `y_coeffs[k - 1]` multiplies
    /// `y^k`.
    pub fn from_coefficients(
        group: G,
        secret: G::Scalar,
        x_coeffs: Vec<G::Scalar>,
        y_coeffs: Vec<G::Scalar>,
    ) -> Self {
        Self {
            group,
            secret,
            x_coeffs: x_coeffs.into(),
            y_coeffs: y_coeffs.into(),
        }
    }

    /// The group this polynomial lives in.
    pub fn group(&self) -> &G {
        &self.group
    }

    /// The x threshold.
    pub fn t(&self) -> usize {
        self.x_coeffs.len() + 1
    }

    /// The y threshold.
    pub fn u(&self) -> usize {
        self.y_coeffs.len() + 1
    }

    /// Evaluate at `(x, y)`. O(T + U).
    pub fn eval(&self, x: i64, y: i64) -> BiPoint<G::Scalar> {
        let x_part = horner_from_linear(&self.x_coeffs, G::Scalar::from_i64(x));
        let y_part = horner_from_linear(&self.y_coeffs, G::Scalar::from_i64(y));
        BiPoint::new(x, y, self.secret + x_part + y_part)
    }

    /// The projection `f(·, y)`.
    pub fn x_poly(&self, y: i64) -> XPoly<G> {
        let constant = self.secret + horner_from_linear(&self.y_coeffs, G::Scalar::from_i64(y));
        XPoly::from_parts(self.group.clone(), y, constant, Arc::clone(&self.x_coeffs))
    }

    /// The projection `f(x, ·)`.
    pub fn y_poly(&self, x: i64) -> YPoly<G> {
        let constant = self.secret + horner_from_linear(&self.x_coeffs, G::Scalar::from_i64(x));
        YPoly::from_parts(self.group.clone(), x, constant, Arc::clone(&self.y_coeffs))
    }

    /// One row per participant: the y-projections at `x = 0, 1, …, n-1`.
    ///
    /// Each row can be split further among `U` custodians by evaluating it
    /// along `y`.
    pub fn shares(&self, n: usize) -> Vec<YPoly<G>> {
        (0..n as i64).map(|x| self.y_poly(x)).collect()
    }
}

impl<G: Group> fmt::Debug for BiPoly<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BiPoly")
            .field("group", &self.group.name())
            .field("t", &self.t())
            .field("u", &self.u())
            .finish_non_exhaustive()
    }
}

/// `f(·, Y)` for a fixed `Y`: a polynomial in `x` of degree `T - 1`.
#[derive(Clone, PartialEq, Eq)]
pub struct XPoly<G: Group> {
    group: G,
    y: i64,
    constant: G::Scalar,
    x_coeffs: Arc<[G::Scalar]>,
}

impl<G: Group> XPoly<G> {
    pub(crate) fn from_parts(
        group: G,
        y: i64,
        constant: G::Scalar,
        x_coeffs: Arc<[G::Scalar]>,
    ) -> Self {
        Self {
            group,
            y,
            constant,
            x_coeffs,
        }
    }

    /// The fixed y coordinate.
    pub fn y(&self) -> i64 {
        self.y
    }

    /// `f(0, Y)`.
    pub fn constant(&self) -> G::Scalar {
        self.constant
    }

    /// Coefficients of `x^1 .. x^(T-1)`.
    pub fn coeffs(&self) -> &[G::Scalar] {
        &self.x_coeffs
    }

    /// The group this projection lives in.
    pub fn group(&self) -> &G {
        &self.group
    }

    /// The x threshold.
    pub fn t(&self) -> usize {
        self.x_coeffs.len() + 1
    }

    /// Evaluate at `x`, returning the point `(x, Y, f(x, Y))`.
    pub fn eval(&self, x: i64) -> BiPoint<G::Scalar> {
        let v = self.constant + horner_from_linear(&self.x_coeffs, G::Scalar::from_i64(x));
        BiPoint::new(x, self.y, v)
    }
}

impl<G: Group> fmt::Debug for XPoly<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XPoly")
            .field("y", &self.y)
            .field("t", &self.t())
            .finish_non_exhaustive()
    }
}

/// `f(X, ·)` for a fixed `X`: a polynomial in `y` of degree `U - 1`.
#[derive(Clone, PartialEq, Eq)]
pub struct YPoly<G: Group> {
    group: G,
    x: i64,
    constant: G::Scalar,
    y_coeffs: Arc<[G::Scalar]>,
}

impl<G: Group> YPoly<G> {
    pub(crate) fn from_parts(
        group: G,
        x: i64,
        constant: G::Scalar,
        y_coeffs: Arc<[G::Scalar]>,
    ) -> Self {
        Self {
            group,
            x,
            constant,
            y_coeffs,
        }
    }

    /// The fixed x coordinate.
    pub fn x(&self) -> i64 {
        self.x
    }

    /// `f(X, 0)`.
    pub fn constant(&self) -> G::Scalar {
        self.constant
    }

    /// Coefficients of `y^1 .. y^(U-1)`.
    pub fn coeffs(&self) -> &[G::Scalar] {
        &self.y_coeffs
    }

    /// The group this projection lives in.
    pub fn group(&self) -> &G {
        &self.group
    }

    /// The y threshold.
    pub fn u(&self) -> usize {
        self.y_coeffs.len() + 1
    }

    /// Evaluate at `y`, returning the point `(X, y, f(X, y))`.
    pub fn eval(&self, y: i64) -> BiPoint<G::Scalar> {
        let v = self.constant + horner_from_linear(&self.y_coeffs, G::Scalar::from_i64(y));
        BiPoint::new(self.x, y, v)
    }
}

impl<G: Group> fmt::Debug for YPoly<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YPoly")
            .field("x", &self.x)
            .field("u", &self.u())
            .finish_non_exhaustive()
    }
}
