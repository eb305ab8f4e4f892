//! # Bivariate Threshold Sharing
//!
//! A secret is split along two axes at once. Along `x` (custodian groups)
//! any `T` samples with a common `y` rebuild that column; along `y`
//! (custodians within a group) any `U` samples with a common `x` rebuild
//! that row.
//!
//! - [`BiPoly`] — the dealer's polynomial; never persisted.
//! - [`XPoly`] / [`YPoly`] — fixed-coordinate projections.
//! - [`CommitData`] — Feldman commitments for verifying samples.
//! - [`lagrange_for_y_poly`] / [`lagrange_for_x_poly`] — threshold recovery.
//! - [`PriPoly`] — plain polynomial arithmetic used by interpolation.
//!
//! Everything here is a pure computation over immutable values. Distinct
//! instances can be used from any number of threads without coordination.

pub mod bipoly;
pub mod commit;
pub mod lagrange;
pub mod pri_poly;

pub use bipoly::{BiPoint, BiPoly, XPoly, YPoly};
pub use commit::CommitData;
pub use lagrange::{lagrange_for_x_poly, lagrange_for_y_poly};
pub use pri_poly::PriPoly;
