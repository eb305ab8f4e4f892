//! # Wire Codecs
//!
//! Hex transport forms for group elements, samples and commitments. Every
//! point and scalar travels as the lowercase hex of its canonical byte
//! encoding. Decoding rejects uppercase digits, then checks the byte length
//! and group membership.

use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::group::{Group, Point, Scalar};
use crate::share::{BiPoint, CommitData};

/// Lowercase hex of a point's canonical encoding.
pub fn point_to_hex<G: Group>(point: &G::Point) -> String {
    hex::encode(point.to_bytes())
}

/// Decode a point from hex.
pub fn hex_to_point<G: Group>(group: &G, s: &str) -> Result<G::Point, CodecError> {
    let bytes = decode_exact(s, group.point_len())?;
    group.point_from_bytes(&bytes)
}

/// Lowercase hex of a scalar's canonical encoding.
pub fn scalar_to_hex<S: Scalar>(scalar: &S) -> String {
    hex::encode(scalar.to_bytes())
}

/// Decode a scalar from hex.
pub fn hex_to_scalar<G: Group>(group: &G, s: &str) -> Result<G::Scalar, CodecError> {
    let bytes = decode_exact(s, group.scalar_len())?;
    group.scalar_from_bytes(&bytes)
}

fn decode_exact(s: &str, expected: usize) -> Result<Vec<u8>, CodecError> {
    if s.bytes().any(|b| b.is_ascii_uppercase()) {
        return Err(CodecError::InvalidHex("uppercase hex digits".into()));
    }
    let bytes = hex::decode(s)?;
    if bytes.len() != expected {
        return Err(CodecError::InvalidLength {
            expected,
            got: bytes.len(),
        });
    }
    Ok(bytes)
}

/// Interpret a scalar as a signed 64-bit integer.
///
/// Reads the first 8 bytes of the little-endian canonical encoding. This is
/// only meaningful for scalars whose integer value fits in 64 bits (small
/// coordinates, counters). It is NOT a reduction of an arbitrary field
/// element: the high bytes are silently dropped.
pub fn scalar_to_int<S: Scalar>(scalar: &S) -> Result<i64, CodecError> {
    let bytes = scalar.to_bytes();
    let head: [u8; 8] = bytes
        .get(..8)
        .and_then(|b| b.try_into().ok())
        .ok_or(CodecError::InvalidLength {
            expected: 8,
            got: bytes.len(),
        })?;
    Ok(i64::from_le_bytes(head))
}

// ---------------------------------------------------------------------------
// Commitments
// ---------------------------------------------------------------------------

/// Transport form of [`CommitData`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolyCommitData {
    /// Base point `H`.
    pub base_point_hex: String,
    /// `secret·H`.
    pub secret_commit_hex: String,
    /// Commitments to the x coefficients, `T - 1` entries.
    pub x_commits_hex: Vec<String>,
    /// Commitments to the y coefficients, `U - 1` entries.
    pub y_commits_hex: Vec<String>,
}

impl<G: Group> CommitData<G> {
    /// Encode for transport.
    pub fn marshal(&self) -> PolyCommitData {
        PolyCommitData {
            base_point_hex: point_to_hex::<G>(&self.h),
            secret_commit_hex: point_to_hex::<G>(&self.secret_commit),
            x_commits_hex: self.x_commits.iter().map(point_to_hex::<G>).collect(),
            y_commits_hex: self.y_commits.iter().map(point_to_hex::<G>).collect(),
        }
    }

    /// Decode from transport form.
    pub fn unmarshal(group: G, raw: &PolyCommitData) -> Result<Self, CodecError> {
        let h = hex_to_point(&group, &raw.base_point_hex)?;
        let secret_commit = hex_to_point(&group, &raw.secret_commit_hex)?;
        let x_commits = raw
            .x_commits_hex
            .iter()
            .map(|s| hex_to_point(&group, s))
            .collect::<Result<Vec<_>, _>>()?;
        let y_commits = raw
            .y_commits_hex
            .iter()
            .map(|s| hex_to_point(&group, s))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CommitData::from_parts(
            group,
            h,
            secret_commit,
            x_commits,
            y_commits,
        ))
    }
}

// ---------------------------------------------------------------------------
// Samples
// ---------------------------------------------------------------------------

/// Transport form of a [`BiPoint`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiPointWire {
    /// The x coordinate.
    pub x: i64,
    /// The y coordinate.
    pub y: i64,
    /// Hex of the canonical scalar encoding of the value.
    pub value_hex: String,
}

impl BiPointWire {
    /// Encode a sample.
    pub fn encode<S: Scalar>(point: &BiPoint<S>) -> Self {
        Self {
            x: point.x,
            y: point.y,
            value_hex: scalar_to_hex(&point.v),
        }
    }

    /// Decode a sample.
    pub fn decode<G: Group>(&self, group: &G) -> Result<BiPoint<G::Scalar>, CodecError> {
        Ok(BiPoint::new(
            self.x,
            self.y,
            hex_to_scalar(group, &self.value_hex)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::small::{SmallScalar, Z97};
    use crate::group::Ristretto255;
    use crate::share::BiPoly;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ristretto_commit() -> CommitData<Ristretto255> {
        let group = Ristretto255;
        let mut rng = StdRng::seed_from_u64(5);
        let secret = <Ristretto255 as Group>::Scalar::random(&mut rng);
        BiPoly::new(group, 3, 2, secret, &mut rng)
            .unwrap()
            .commit(group.commit_base_point())
    }

    #[test]
    fn marshal_round_trip() {
        let commit = ristretto_commit();
        let wire = commit.marshal();
        assert_eq!(wire.x_commits_hex.len(), 2);
        assert_eq!(wire.y_commits_hex.len(), 1);

        let decoded = CommitData::unmarshal(Ristretto255, &wire).unwrap();
        assert_eq!(decoded, commit);
        assert_eq!(decoded.marshal(), wire);
    }

    #[test]
    fn wire_hex_is_lowercase_and_canonical_length() {
        let wire = ristretto_commit().marshal();
        let all = std::iter::once(&wire.base_point_hex)
            .chain(std::iter::once(&wire.secret_commit_hex))
            .chain(&wire.x_commits_hex)
            .chain(&wire.y_commits_hex);
        for s in all {
            assert_eq!(s.len(), 64);
            assert!(s.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }

    #[test]
    fn wire_field_names_match_protocol() {
        let json = serde_json::to_value(ristretto_commit().marshal()).unwrap();
        for key in ["BasePointHex", "SecretCommitHex", "XCommitsHex", "YCommitsHex"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn unmarshal_rejects_malformed_input() {
        let good = ristretto_commit().marshal();

        let mut bad_hex = good.clone();
        bad_hex.secret_commit_hex = "zz".repeat(32);
        assert!(matches!(
            CommitData::unmarshal(Ristretto255, &bad_hex),
            Err(CodecError::InvalidHex(_))
        ));

        let mut short = good.clone();
        short.x_commits_hex[0] = "00".repeat(31);
        assert_eq!(
            CommitData::unmarshal(Ristretto255, &short),
            Err(CodecError::InvalidLength {
                expected: 32,
                got: 31
            })
        );

        let mut off_curve = good;
        off_curve.y_commits_hex[0] = "ff".repeat(32);
        assert!(matches!(
            CommitData::unmarshal(Ristretto255, &off_curve),
            Err(CodecError::InvalidElement(_))
        ));
    }

    #[test]
    fn uppercase_hex_is_rejected() {
        let good = ristretto_commit().marshal();
        let mut upper = good.clone();
        upper.base_point_hex = good.base_point_hex.to_uppercase();
        assert_ne!(upper.base_point_hex, good.base_point_hex);
        assert!(matches!(
            CommitData::unmarshal(Ristretto255, &upper),
            Err(CodecError::InvalidHex(_))
        ));

        let wire = BiPointWire {
            x: 1,
            y: 1,
            value_hex: "2A00000000000000".into(),
        };
        assert!(matches!(
            wire.decode(&Z97::default()),
            Err(CodecError::InvalidHex(_))
        ));
    }

    #[test]
    fn bipoint_wire_round_trip() {
        let point = BiPoint::new(3, -1, SmallScalar::<97>::new(42));
        let wire = BiPointWire::encode(&point);
        assert_eq!(wire.value_hex, "2a00000000000000");
        assert_eq!(wire.decode(&Z97::default()).unwrap(), point);
    }

    #[test]
    fn scalar_to_int_reads_small_values() {
        assert_eq!(scalar_to_int(&SmallScalar::<97>::new(96)).unwrap(), 96);
        let s = <<Ristretto255 as Group>::Scalar as Scalar>::from_i64(123_456_789);
        assert_eq!(scalar_to_int(&s).unwrap(), 123_456_789);
    }

    #[test]
    fn scalar_to_int_truncates_large_values() {
        // -1 mod ℓ has non-zero high bytes; only the low 8 bytes survive.
        let minus_one = <<Ristretto255 as Group>::Scalar as Scalar>::from_i64(-1);
        assert_ne!(scalar_to_int(&minus_one).unwrap(), -1);
    }
}
