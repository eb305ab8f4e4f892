// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # DKMS Protocol — Core Library
//!
//! Distributed key management built on bivariate threshold secret sharing.
//! A dealer splits a user's secret along two axes at once: `T` custodian
//! groups along `x`, `U` custodians per group along `y`. Each node keeps one
//! row and one column of the dealer's polynomial, checked against public
//! Feldman commitments, and never sees the polynomial itself.
//!
//! ## Architecture
//!
//! - **group** — The scalar/point/group traits and the Ristretto255 backend.
//! - **share** — Bivariate polynomials, projections, commitments, Lagrange.
//! - **codec** — Hex wire forms for commitments and samples.
//! - **dealer** — Sampling a polynomial and building registration requests.
//! - **registration** — The node side: verify, reconstruct, store.
//! - **user** — What a node persists per user, and where.
//! - **config** — Protocol constants.
//! - **error** — Error taxonomy for the sharing engine.
//!
//! ## Ground Rules
//!
//! 1. The engine never logs and never touches I/O. Orchestration layers do.
//! 2. Randomness is always injected, so every sharing is reproducible in tests.
//! 3. Untrusted samples go through `CommitData::verify_point` before use.

pub mod codec;
pub mod config;
pub mod dealer;
pub mod error;
pub mod group;
pub mod registration;
pub mod share;
pub mod user;

pub use codec::{BiPointWire, PolyCommitData};
pub use dealer::{Dealer, Dealing};
pub use error::{CodecError, ErrorKind, ShareError};
pub use group::{Group, Point, Ristretto255, Scalar};
pub use registration::{register, KeyRegisterRequest, KeyRegisterResponse, RegistrationError};
pub use share::{
    lagrange_for_x_poly, lagrange_for_y_poly, BiPoint, BiPoly, CommitData, PriPoly, XPoly, YPoly,
};
pub use user::{MemoryRepository, NodeInfo, Repository, RepositoryError, User};
