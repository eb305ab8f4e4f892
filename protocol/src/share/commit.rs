//! # Feldman Commitments
//!
//! Every coefficient of the bivariate polynomial is committed as
//! `coefficient·H` for a public base point `H`:
//!
//! ```text
//! SecretCommit = secret·H
//! XCommits[j-1] = a_j·H        j = 1..T-1
//! YCommits[k-1] = b_k·H        k = 1..U-1
//! ```
//!
//! Anyone holding the commitment can then check a claimed sample
//! `(x, y, v)` without learning the secret:
//!
//! ```text
//! v·H == SecretCommit + Σ XCommits[j-1]·x^j + Σ YCommits[k-1]·y^k
//! ```
//!
//! Reconstruction in [`crate::share::lagrange`] trusts its input; this
//! module is where untrusted points get checked.

use crate::group::{horner_points_from_linear, Group, Scalar};

use super::bipoly::{BiPoint, BiPoly, XPoly, YPoly};

/// Feldman commitments to a [`BiPoly`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitData<G: Group> {
    pub(crate) group: G,
    pub(crate) h: G::Point,
    pub(crate) secret_commit: G::Point,
    pub(crate) x_commits: Vec<G::Point>,
    pub(crate) y_commits: Vec<G::Point>,
}

impl<G: Group> BiPoly<G> {
    /// Commit to the secret and every coefficient under base point `h`.
    pub fn commit(&self, h: G::Point) -> CommitData<G> {
        CommitData {
            group: self.group.clone(),
            h,
            secret_commit: h * self.secret,
            x_commits: self.x_coeffs.iter().map(|&c| h * c).collect(),
            y_commits: self.y_coeffs.iter().map(|&c| h * c).collect(),
        }
    }
}

impl<G: Group> CommitData<G> {
    /// Assemble commitments received from elsewhere.
    pub fn from_parts(
        group: G,
        h: G::Point,
        secret_commit: G::Point,
        x_commits: Vec<G::Point>,
        y_commits: Vec<G::Point>,
    ) -> Self {
        Self {
            group,
            h,
            secret_commit,
            x_commits,
            y_commits,
        }
    }

    /// The group the commitments live in.
    pub fn group(&self) -> &G {
        &self.group
    }

    /// The base point `H`.
    pub fn base_point(&self) -> G::Point {
        self.h
    }

    /// `secret·H`.
    pub fn secret_commit(&self) -> G::Point {
        self.secret_commit
    }

    /// Commitments to the x coefficients, lowest degree first.
    pub fn x_commits(&self) -> &[G::Point] {
        &self.x_commits
    }

    /// Commitments to the y coefficients, lowest degree first.
    pub fn y_commits(&self) -> &[G::Point] {
        &self.y_commits
    }

    /// The committed x threshold.
    pub fn t(&self) -> usize {
        self.x_commits.len() + 1
    }

    /// The committed y threshold.
    pub fn u(&self) -> usize {
        self.y_commits.len() + 1
    }

    /// `f(x, y)·H`, computed from the commitments alone.
    pub fn eval_commit(&self, x: i64, y: i64) -> G::Point {
        self.secret_commit
            + horner_points_from_linear(&self.x_commits, G::Scalar::from_i64(x))
            + horner_points_from_linear(&self.y_commits, G::Scalar::from_i64(y))
    }

    /// Check that `point` lies on the committed polynomial.
    pub fn verify_point(&self, point: &BiPoint<G::Scalar>) -> bool {
        self.h * point.v == self.eval_commit(point.x, point.y)
    }

    /// Check a y-projection: its constant against `f(X, 0)·H` and each
    /// coefficient against the matching y commitment.
    pub fn verify_y_poly(&self, poly: &YPoly<G>) -> bool {
        poly.coeffs().len() == self.y_commits.len()
            && self.h * poly.constant() == self.eval_commit(poly.x(), 0)
            && poly
                .coeffs()
                .iter()
                .zip(&self.y_commits)
                .all(|(&c, &commit)| self.h * c == commit)
    }

    /// Check an x-projection: its constant against `f(0, Y)·H` and each
    /// coefficient against the matching x commitment.
    pub fn verify_x_poly(&self, poly: &XPoly<G>) -> bool {
        poly.coeffs().len() == self.x_commits.len()
            && self.h * poly.constant() == self.eval_commit(0, poly.y())
            && poly
                .coeffs()
                .iter()
                .zip(&self.x_commits)
                .all(|(&c, &commit)| self.h * c == commit)
    }
}
