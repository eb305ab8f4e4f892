//! A toy prime-order group for deterministic tests.
//!
//! Scalars are integers mod `P`, and "points" are the additive group
//! `Z_P` generated by [`SMALL_GENERATOR`], so `s·G` is just `s·5 mod P`.
//! Discrete logs are trivial here, which makes commitments easy to check by
//! hand. Never use this outside tests.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use rand::{CryptoRng, Rng, RngCore};

use super::{Group, Point, Scalar};
use crate::error::CodecError;

/// Generator of the toy point group.
pub const SMALL_GENERATOR: u64 = 5;

/// Encoded width of toy scalars and points.
const WIDTH: usize = 8;

/// An integer modulo the prime `P`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SmallScalar<const P: u64>(u64);

/// An element of the additive group `Z_P`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SmallPoint<const P: u64>(u64);

/// The toy group over `Z_P`. `P` must be prime and below 2^32.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct SmallPrimeGroup<const P: u64>;

/// The group used throughout the tests.
pub type Z97 = SmallPrimeGroup<97>;

impl<const P: u64> SmallScalar<P> {
    /// Reduce `v` mod `P`.
    pub fn new(v: u64) -> Self {
        Self(v % P)
    }

    /// The canonical representative in `0..P`.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl<const P: u64> SmallPoint<P> {
    /// The point whose discrete log base 1 is `v`.
    pub fn new(v: u64) -> Self {
        Self(v % P)
    }
}

impl<const P: u64> fmt::Debug for SmallScalar<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.0, P)
    }
}

impl<const P: u64> fmt::Debug for SmallPoint<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] (Z_{})", self.0, P)
    }
}

impl<const P: u64> fmt::Debug for SmallPrimeGroup<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SmallPrimeGroup<{}>", P)
    }
}

impl<const P: u64> Add for SmallScalar<P> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self((self.0 + rhs.0) % P)
    }
}

impl<const P: u64> Sub for SmallScalar<P> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self((self.0 + P - rhs.0) % P)
    }
}

impl<const P: u64> Mul for SmallScalar<P> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self((self.0 * rhs.0) % P)
    }
}

impl<const P: u64> Neg for SmallScalar<P> {
    type Output = Self;
    fn neg(self) -> Self {
        Self((P - self.0) % P)
    }
}

impl<const P: u64> Add for SmallPoint<P> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self((self.0 + rhs.0) % P)
    }
}

impl<const P: u64> Mul<SmallScalar<P>> for SmallPoint<P> {
    type Output = Self;
    fn mul(self, rhs: SmallScalar<P>) -> Self {
        Self((self.0 * rhs.0) % P)
    }
}

impl<const P: u64> Scalar for SmallScalar<P> {
    fn zero() -> Self {
        Self(0)
    }

    fn one() -> Self {
        Self(1 % P)
    }

    fn from_i64(n: i64) -> Self {
        Self(n.rem_euclid(P as i64) as u64)
    }

    fn invert(&self) -> Option<Self> {
        if self.0 == 0 {
            return None;
        }
        // Fermat: a^(P-2) = a^-1 for prime P.
        let mut result = Self::one();
        let mut base = *self;
        let mut exp = P - 2;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            exp >>= 1;
        }
        Some(result)
    }

    fn random<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(0..P))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_le_bytes().to_vec()
    }
}

impl<const P: u64> Point<SmallScalar<P>> for SmallPoint<P> {
    fn identity() -> Self {
        Self(0)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_le_bytes().to_vec()
    }
}

fn decode_word<const P: u64>(bytes: &[u8], what: &'static str) -> Result<u64, CodecError> {
    let arr: [u8; WIDTH] = bytes.try_into().map_err(|_| CodecError::InvalidLength {
        expected: WIDTH,
        got: bytes.len(),
    })?;
    let v = u64::from_le_bytes(arr);
    if v >= P {
        return Err(CodecError::InvalidElement(what));
    }
    Ok(v)
}

impl<const P: u64> Group for SmallPrimeGroup<P> {
    type Scalar = SmallScalar<P>;
    type Point = SmallPoint<P>;

    fn name(&self) -> String {
        format!("Z{}", P)
    }

    fn generator(&self) -> SmallPoint<P> {
        SmallPoint::new(SMALL_GENERATOR)
    }

    fn point_len(&self) -> usize {
        WIDTH
    }

    fn scalar_len(&self) -> usize {
        WIDTH
    }

    fn point_from_bytes(&self, bytes: &[u8]) -> Result<SmallPoint<P>, CodecError> {
        decode_word::<P>(bytes, "toy point").map(SmallPoint)
    }

    fn scalar_from_bytes(&self, bytes: &[u8]) -> Result<SmallScalar<P>, CodecError> {
        decode_word::<P>(bytes, "toy scalar").map(SmallScalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type S = SmallScalar<97>;

    #[test]
    fn arithmetic_wraps_mod_p() {
        assert_eq!(S::new(90) + S::new(10), S::new(3));
        assert_eq!(S::new(3) - S::new(10), S::new(90));
        assert_eq!(-S::new(1), S::new(96));
        assert_eq!(S::from_i64(-1), S::new(96));
        assert_eq!(S::new(50) * S::new(2), S::new(3));
    }

    #[test]
    fn every_nonzero_element_inverts() {
        for v in 1..97 {
            let s = S::new(v);
            assert_eq!(s * s.invert().unwrap(), S::one());
        }
        assert!(S::zero().invert().is_none());
    }

    #[test]
    fn random_draws_cover_the_field() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;
        use std::collections::HashSet;

        let mut rng = StdRng::seed_from_u64(97);
        let seen: HashSet<u64> = (0..5_000).map(|_| S::random(&mut rng).value()).collect();
        assert!(seen.iter().all(|&v| v < 97));
        assert_eq!(seen.len(), 97);
    }

    #[test]
    fn out_of_range_encodings_are_rejected() {
        let group = Z97::default();
        assert!(group.scalar_from_bytes(&97u64.to_le_bytes()).is_err());
        assert_eq!(
            group.point_from_bytes(&96u64.to_le_bytes()).unwrap(),
            SmallPoint::new(96)
        );
    }
}
