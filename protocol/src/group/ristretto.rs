//! # Ristretto255
//!
//! The production group: the prime-order Ristretto quotient of Curve25519,
//! via `curve25519-dalek`. Scalars are 32-byte canonical little-endian
//! integers mod ℓ; points are 32-byte compressed Ristretto encodings.

use curve25519_dalek::constants::RISTRETTO_BASEPOINT_POINT;
use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use curve25519_dalek::scalar::Scalar as DalekScalar;
use curve25519_dalek::traits::Identity;
use rand::{CryptoRng, RngCore};

use super::{Group, Point, Scalar};
use crate::config::{
    COMMIT_BASE_LABEL, GROUP_NAME, RISTRETTO_POINT_LENGTH, RISTRETTO_SCALAR_LENGTH,
};
use crate::error::CodecError;

impl Scalar for DalekScalar {
    fn zero() -> Self {
        DalekScalar::ZERO
    }

    fn one() -> Self {
        DalekScalar::ONE
    }

    fn from_i64(n: i64) -> Self {
        let magnitude = DalekScalar::from(n.unsigned_abs());
        if n < 0 {
            -magnitude
        } else {
            magnitude
        }
    }

    fn invert(&self) -> Option<Self> {
        // dalek maps zero to zero instead of failing.
        if *self == DalekScalar::ZERO {
            None
        } else {
            Some(DalekScalar::invert(self))
        }
    }

    fn random<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        let mut wide = [0u8; 64];
        rng.fill_bytes(&mut wide);
        DalekScalar::from_bytes_mod_order_wide(&wide)
    }

    fn to_bytes(&self) -> Vec<u8> {
        DalekScalar::to_bytes(self).to_vec()
    }
}

impl Point<DalekScalar> for RistrettoPoint {
    fn identity() -> Self {
        <RistrettoPoint as Identity>::identity()
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.compress().to_bytes().to_vec()
    }
}

/// The Ristretto255 group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ristretto255;

impl Ristretto255 {
    /// Derive a point with unknown discrete log from a domain label.
    ///
    /// The label is expanded to 64 bytes with BLAKE3 in XOF mode and mapped
    /// onto the group with the Elligator-based uniform map.
    pub fn derive_point(&self, label: &[u8]) -> RistrettoPoint {
        let mut wide = [0u8; 64];
        let mut hasher = blake3::Hasher::new();
        hasher.update(label);
        hasher.finalize_xof().fill(&mut wide);
        RistrettoPoint::from_uniform_bytes(&wide)
    }

    /// The base point `H` every node uses for Feldman commitments.
    pub fn commit_base_point(&self) -> RistrettoPoint {
        self.derive_point(COMMIT_BASE_LABEL)
    }
}

impl Group for Ristretto255 {
    type Scalar = DalekScalar;
    type Point = RistrettoPoint;

    fn name(&self) -> String {
        GROUP_NAME.to_string()
    }

    fn generator(&self) -> RistrettoPoint {
        RISTRETTO_BASEPOINT_POINT
    }

    fn point_len(&self) -> usize {
        RISTRETTO_POINT_LENGTH
    }

    fn scalar_len(&self) -> usize {
        RISTRETTO_SCALAR_LENGTH
    }

    fn point_from_bytes(&self, bytes: &[u8]) -> Result<RistrettoPoint, CodecError> {
        let compressed =
            CompressedRistretto::from_slice(bytes).map_err(|_| CodecError::InvalidLength {
                expected: RISTRETTO_POINT_LENGTH,
                got: bytes.len(),
            })?;
        compressed
            .decompress()
            .ok_or(CodecError::InvalidElement("ristretto255 point"))
    }

    fn scalar_from_bytes(&self, bytes: &[u8]) -> Result<DalekScalar, CodecError> {
        let arr: [u8; RISTRETTO_SCALAR_LENGTH] =
            bytes.try_into().map_err(|_| CodecError::InvalidLength {
                expected: RISTRETTO_SCALAR_LENGTH,
                got: bytes.len(),
            })?;
        Option::from(DalekScalar::from_canonical_bytes(arr))
            .ok_or(CodecError::InvalidElement("ristretto255 scalar"))
    }
}
