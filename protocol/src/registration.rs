//! # Key Registration
//!
//! A node learns its share of a user's key from a dealer-built request:
//!
//! 1. `U` samples sharing the node's `x`, which rebuild its row `f(X, ·)`;
//! 2. `T` samples sharing the node's `y`, which rebuild its column `f(·, Y)`;
//! 3. the Feldman commitment to the dealer's polynomial.
//!
//! Every sample is checked against the commitment before interpolation,
//! because reconstruction itself trusts its input. Only the commitment and
//! the two reconstructed projections are persisted.
//!
//! Samples arrive in plaintext; transport security is the deployment's job.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::{BiPointWire, PolyCommitData};
use crate::config::{MAX_THRESHOLD, MIN_THRESHOLD};
use crate::error::{CodecError, ShareError};
use crate::group::Group;
use crate::share::{lagrange_for_x_poly, lagrange_for_y_poly, CommitData};
use crate::user::{NodeInfo, Repository, RepositoryError, User};

/// Body of a key registration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRegisterRequest {
    /// User the key belongs to.
    pub user_id: String,
    /// X threshold.
    pub t: usize,
    /// Y threshold.
    pub u: usize,
    /// Commitment to the dealer's polynomial.
    pub commit_data: PolyCommitData,
    /// `u` row samples followed by `t` column samples.
    pub points: Vec<BiPointWire>,
    /// All nodes holding shares for this user.
    pub nodes: Vec<NodeInfo>,
}

/// Body of a successful registration response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRegisterResponse {
    /// Registered user.
    pub user_id: String,
    /// X threshold of the stored column.
    pub t: usize,
    /// Y threshold of the stored row.
    pub u: usize,
    /// The commitment, echoed back.
    pub commit: PolyCommitData,
    /// The nodes, echoed back.
    pub nodes: Vec<NodeInfo>,
}

/// Why a registration was refused.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// The request is structurally wrong.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A threshold is outside `MIN_THRESHOLD..=MAX_THRESHOLD`.
    #[error("threshold {name}={value} outside {min}..={max}")]
    ThresholdOutOfRange {
        /// `"t"` or `"u"`.
        name: &'static str,
        /// Requested value.
        value: usize,
        /// Smallest accepted value.
        min: usize,
        /// Largest accepted value.
        max: usize,
    },

    /// The commitment's shape disagrees with the requested thresholds.
    #[error("commitment is for t={commit_t}, u={commit_u}; request says t={t}, u={u}")]
    CommitmentShape {
        /// Threshold implied by the x commitments.
        commit_t: usize,
        /// Threshold implied by the y commitments.
        commit_u: usize,
        /// Requested x threshold.
        t: usize,
        /// Requested y threshold.
        u: usize,
    },

    /// A sample is not on the committed polynomial.
    #[error("point ({x}, {y}) does not match the commitment")]
    CommitmentMismatch {
        /// The sample's x coordinate.
        x: i64,
        /// The sample's y coordinate.
        y: i64,
    },

    /// Hex or group decoding failed.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Reconstruction failed.
    #[error(transparent)]
    Share(#[from] ShareError),

    /// The user could not be stored.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

fn check_threshold(name: &'static str, value: usize) -> Result<(), RegistrationError> {
    if (MIN_THRESHOLD..=MAX_THRESHOLD).contains(&value) {
        Ok(())
    } else {
        Err(RegistrationError::ThresholdOutOfRange {
            name,
            value,
            min: MIN_THRESHOLD,
            max: MAX_THRESHOLD,
        })
    }
}

/// Verify, reconstruct and store a user's shares.
pub fn register<G, R>(
    group: &G,
    repository: &R,
    request: &KeyRegisterRequest,
) -> Result<KeyRegisterResponse, RegistrationError>
where
    G: Group,
    R: Repository<G> + ?Sized,
{
    if request.user_id.trim().is_empty() {
        return Err(RegistrationError::InvalidRequest("empty user id".into()));
    }
    check_threshold("t", request.t)?;
    check_threshold("u", request.u)?;
    if request.points.len() != request.t + request.u {
        return Err(RegistrationError::InvalidRequest(format!(
            "expected {} points (u={} + t={}), got {}",
            request.t + request.u,
            request.u,
            request.t,
            request.points.len()
        )));
    }

    let commit = CommitData::unmarshal(group.clone(), &request.commit_data)?;
    if commit.t() != request.t || commit.u() != request.u {
        return Err(RegistrationError::CommitmentShape {
            commit_t: commit.t(),
            commit_u: commit.u(),
            t: request.t,
            u: request.u,
        });
    }

    let points = request
        .points
        .iter()
        .map(|p| p.decode(group))
        .collect::<Result<Vec<_>, _>>()?;
    if let Some(bad) = points.iter().find(|p| !commit.verify_point(p)) {
        tracing::warn!(
            user_id = %request.user_id,
            x = bad.x,
            y = bad.y,
            "registration point failed commitment check"
        );
        return Err(RegistrationError::CommitmentMismatch { x: bad.x, y: bad.y });
    }

    let (row, column) = points.split_at(request.u);
    let my_y_poly = lagrange_for_y_poly(group, row, request.u)?;
    let my_x_poly = lagrange_for_x_poly(group, column, request.t)?;

    tracing::debug!(
        user_id = %request.user_id,
        x = my_y_poly.x(),
        y = my_x_poly.y(),
        "shares reconstructed"
    );

    let user = User {
        id: request.user_id.clone(),
        poly_commit: commit,
        my_y_poly,
        my_x_poly,
        nodes: request.nodes.clone(),
        registered_at: Utc::now(),
    };
    let (t, u) = (user.my_x_poly.t(), user.my_y_poly.u());
    repository.save(user)?;

    tracing::info!(user_id = %request.user_id, t, u, "user registered");

    Ok(KeyRegisterResponse {
        user_id: request.user_id.clone(),
        t,
        u,
        commit: request.commit_data.clone(),
        nodes: request.nodes.clone(),
    })
}
