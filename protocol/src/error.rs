//! Error types for the sharing engine.
//!
//! Every fallible operation in [`crate::group`], [`crate::share`] and
//! [`crate::codec`] returns one of the two enums below. The engine never
//! logs; it classifies the failure and hands back enough context for the
//! caller to react.

use std::fmt;

use thiserror::Error;

/// Which axis of the bivariate polynomial an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The x axis (custodian groups, threshold `T`).
    X,
    /// The y axis (custodians within a group, threshold `U`).
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Coarse classification of a [`ShareError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad threshold, empty input, or threshold not met.
    InvalidInput,
    /// Points disagree on the coordinate they must share.
    MismatchedPoint,
    /// Polynomial operands have different coefficient counts.
    MismatchedLength,
    /// Polynomial operands live in different groups.
    MismatchedGroup,
    /// A zero denominator, i.e. a duplicated coordinate.
    DivisionByZero,
    /// Hex or group element decoding failed.
    Codec,
}

/// Errors produced by polynomial construction, arithmetic and reconstruction.
#[derive(Debug, Error)]
pub enum ShareError {
    /// A threshold of zero was requested.
    #[error("invalid {axis} threshold {value}: must be at least 1")]
    InvalidThreshold {
        /// Axis the threshold belongs to.
        axis: Axis,
        /// The rejected value.
        value: usize,
    },

    /// Reconstruction was called with no points at all.
    #[error("empty point set")]
    EmptyPoints,

    /// Fewer points than the threshold were supplied.
    #[error("threshold not met: got {got} points, need {need}")]
    ThresholdNotMet {
        /// Number of points supplied.
        got: usize,
        /// Threshold required.
        need: usize,
    },

    /// A point does not share the fixed coordinate of the first point.
    #[error("point {index} has {axis} = {found}, expected {expected}")]
    MismatchedPoint {
        /// The shared axis that disagrees.
        axis: Axis,
        /// Position of the offending point in the input.
        index: usize,
        /// Coordinate of the first point.
        expected: i64,
        /// Coordinate of the offending point.
        found: i64,
    },

    /// Pointwise addition of polynomials with different lengths.
    #[error("coefficient length mismatch: {left} vs {right}")]
    MismatchedLength {
        /// Coefficient count of the left operand.
        left: usize,
        /// Coefficient count of the right operand.
        right: usize,
    },

    /// Arithmetic across two different groups.
    #[error("group mismatch: {left} vs {right}")]
    MismatchedGroup {
        /// Name of the left operand's group.
        left: String,
        /// Name of the right operand's group.
        right: String,
    },

    /// Interpolation hit a zero denominator.
    #[error("division by zero: coordinate {coordinate} appears more than once")]
    DivisionByZero {
        /// The duplicated coordinate.
        coordinate: i64,
    },

    /// Wire decoding failed.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl ShareError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShareError::InvalidThreshold { .. }
            | ShareError::EmptyPoints
            | ShareError::ThresholdNotMet { .. } => ErrorKind::InvalidInput,
            ShareError::MismatchedPoint { .. } => ErrorKind::MismatchedPoint,
            ShareError::MismatchedLength { .. } => ErrorKind::MismatchedLength,
            ShareError::MismatchedGroup { .. } => ErrorKind::MismatchedGroup,
            ShareError::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            ShareError::Codec(_) => ErrorKind::Codec,
        }
    }
}

/// Errors from hex and group-element (de)serialization.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// The input is not valid hex.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// Decoded bytes have the wrong length for the target type.
    #[error("invalid encoding length: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Canonical length in bytes.
        expected: usize,
        /// Length actually supplied.
        got: usize,
    },

    /// Bytes do not decode to a valid group element.
    #[error("bytes do not encode a valid {0}")]
    InvalidElement(&'static str),
}

impl From<hex::FromHexError> for CodecError {
    fn from(err: hex::FromHexError) -> Self {
        CodecError::InvalidHex(err.to_string())
    }
}
