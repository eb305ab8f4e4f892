//! # Group Arithmetic
//!
//! The sharing engine is written against three small traits so it can run
//! over any prime-order group:
//!
//! - [`Scalar`] — an element of the group's scalar field.
//! - [`Point`] — a group element, multiplied by scalars.
//! - [`Group`] — a factory and codec for both, plus a canonical name.
//!
//! Scalars and points are `Copy` value types. Every operation returns a new
//! value; nothing is mutated in place, so basis polynomials and accumulators
//! can never alias each other.
//!
//! [`Ristretto255`] is the production group. A small prime-field group for
//! deterministic tests lives in `small`, compiled for unit tests only.

pub mod ristretto;
#[cfg(test)]
pub mod small;

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

use rand::{CryptoRng, RngCore};

use crate::error::CodecError;

pub use ristretto::Ristretto255;

/// An element of a prime-order group's scalar field.
pub trait Scalar:
    Copy
    + Eq
    + Debug
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Embed a signed integer. Negative values map to the additive inverse.
    fn from_i64(n: i64) -> Self;

    /// Multiplicative inverse, or `None` for zero.
    fn invert(&self) -> Option<Self>;

    /// Sample a uniformly random scalar from the injected source.
    fn random<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Self;

    /// Canonical little-endian encoding.
    fn to_bytes(&self) -> Vec<u8>;

    /// Returns `true` for the additive identity.
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

/// An element of a prime-order group, written additively.
pub trait Point<S: Scalar>:
    Copy + Eq + Debug + Send + Sync + 'static + Add<Output = Self> + Mul<S, Output = Self>
{
    /// The neutral element.
    fn identity() -> Self;

    /// Canonical encoding.
    fn to_bytes(&self) -> Vec<u8>;
}

/// A prime-order group: scalar/point factories and their codecs.
pub trait Group: Clone + Debug + Send + Sync + 'static {
    /// Scalar field element type.
    type Scalar: Scalar;
    /// Group element type.
    type Point: Point<Self::Scalar>;

    /// Canonical group name. Two groups are the same iff their names match.
    fn name(&self) -> String;

    /// The standard generator.
    fn generator(&self) -> Self::Point;

    /// Length in bytes of a canonical point encoding.
    fn point_len(&self) -> usize;

    /// Length in bytes of a canonical scalar encoding.
    fn scalar_len(&self) -> usize;

    /// Decode a canonical point encoding.
    fn point_from_bytes(&self, bytes: &[u8]) -> Result<Self::Point, CodecError>;

    /// Decode a canonical scalar encoding.
    fn scalar_from_bytes(&self, bytes: &[u8]) -> Result<Self::Scalar, CodecError>;
}

/// Evaluate `Σ coeffs[i]·x^(i+1)` by Horner's rule.
///
/// The coefficient slices of the bivariate polynomial start at degree one;
/// the constant term is kept separately.
pub(crate) fn horner_from_linear<S: Scalar>(coeffs: &[S], x: S) -> S {
    coeffs
        .iter()
        .rev()
        .fold(S::zero(), |acc, &c| (acc + c) * x)
}

/// Group-side counterpart of [`horner_from_linear`]: `Σ commits[i]·x^(i+1)`.
pub(crate) fn horner_points_from_linear<S: Scalar, P: Point<S>>(commits: &[P], x: S) -> P {
    commits
        .iter()
        .rev()
        .fold(P::identity(), |acc, &c| (acc + c) * x)
}

#[cfg(test)]
mod tests {
    use super::small::{SmallScalar, Z97};
    use super::*;

    #[test]
    fn horner_skips_constant_term() {
        // 2x + 5x^2 at x = 2 is 4 + 20.
        let coeffs = [SmallScalar::<97>::from_i64(2), SmallScalar::from_i64(5)];
        assert_eq!(
            horner_from_linear(&coeffs, SmallScalar::from_i64(2)),
            SmallScalar::from_i64(24)
        );
        assert_eq!(
            horner_from_linear::<SmallScalar<97>>(&[], SmallScalar::from_i64(9)),
            SmallScalar::zero()
        );
    }

    #[test]
    fn horner_points_matches_scalar_horner() {
        let group = Z97::default();
        let g = group.generator();
        let coeffs = [SmallScalar::<97>::from_i64(3), SmallScalar::from_i64(11)];
        let commits: Vec<_> = coeffs.iter().map(|&c| g * c).collect();
        let x = SmallScalar::from_i64(6);
        assert_eq!(
            horner_points_from_linear(&commits, x),
            g * horner_from_linear(&coeffs, x)
        );
    }
}
