//! # Lagrange Reconstruction
//!
//! Rebuilds a projection of the bivariate polynomial from a threshold of its
//! samples. For `n` points sharing one coordinate, the other coordinates
//! `c_0 .. c_{n-1}` define the basis
//!
//! ```text
//! L_j(Z) = Π_{m≠j} (Z - c_m) / (c_j - c_m)
//! ```
//!
//! and the projection is `Σ_j v_j·L_j(Z)`. Each basis is expanded into an
//! explicit [`PriPoly`], so the result carries every coefficient, not just
//! the constant term. Cost is O(n²) scalar operations.
//!
//! These functions check shape only: the shared coordinate, the point count
//! and distinct coordinates. They do NOT check that points are genuine, and
//! any points past the threshold are ignored without being cross-checked.
//! Callers that receive points from untrusted parties must run them through
//! [`CommitData::verify_point`](super::CommitData::verify_point) first.

use crate::error::{Axis, ShareError};
use crate::group::{Group, Scalar};

use super::bipoly::{BiPoint, XPoly, YPoly};
use super::pri_poly::PriPoly;

/// Reconstruct the y-projection `f(X, ·)` from `u` points sharing `X`.
///
/// Uses exactly `points[..u]`.
pub fn lagrange_for_y_poly<G: Group>(
    group: &G,
    points: &[BiPoint<G::Scalar>],
    u: usize,
) -> Result<YPoly<G>, ShareError> {
    let mut coeffs = interpolate(group, points, u, Axis::X)?;
    let constant = coeffs.remove(0);
    Ok(YPoly::from_parts(
        group.clone(),
        points[0].x,
        constant,
        coeffs.into(),
    ))
}

/// Reconstruct the x-projection `f(·, Y)` from `t` points sharing `Y`.
///
/// Uses exactly `points[..t]`.
pub fn lagrange_for_x_poly<G: Group>(
    group: &G,
    points: &[BiPoint<G::Scalar>],
    t: usize,
) -> Result<XPoly<G>, ShareError> {
    let mut coeffs = interpolate(group, points, t, Axis::Y)?;
    let constant = coeffs.remove(0);
    Ok(XPoly::from_parts(
        group.clone(),
        points[0].y,
        constant,
        coeffs.into(),
    ))
}

/// Interpolate through the first `threshold` points, all of which share the
/// coordinate on `shared`. Returns `threshold` coefficients, lowest first.
fn interpolate<G: Group>(
    group: &G,
    points: &[BiPoint<G::Scalar>],
    threshold: usize,
    shared: Axis,
) -> Result<Vec<G::Scalar>, ShareError> {
    let free = match shared {
        Axis::X => Axis::Y,
        Axis::Y => Axis::X,
    };
    let first = points.first().ok_or(ShareError::EmptyPoints)?;
    if threshold == 0 {
        return Err(ShareError::InvalidThreshold {
            axis: free,
            value: threshold,
        });
    }

    let expected = first.coordinate(shared);
    if let Some((index, p)) = points
        .iter()
        .enumerate()
        .find(|(_, p)| p.coordinate(shared) != expected)
    {
        return Err(ShareError::MismatchedPoint {
            axis: shared,
            index,
            expected,
            found: p.coordinate(shared),
        });
    }

    if points.len() < threshold {
        return Err(ShareError::ThresholdNotMet {
            got: points.len(),
            need: threshold,
        });
    }
    let points = &points[..threshold];

    let mut acc = PriPoly::new(group.clone(), vec![G::Scalar::zero(); threshold]);
    for (j, p) in points.iter().enumerate() {
        let basis = basis_poly(group, points, j, free)?;
        acc = acc.add(&basis.scale(p.v))?;
    }
    Ok(acc.into_coeffs())
}

/// The Lagrange basis `L_j` over the `free` coordinates of `points`.
fn basis_poly<G: Group>(
    group: &G,
    points: &[BiPoint<G::Scalar>],
    j: usize,
    free: Axis,
) -> Result<PriPoly<G>, ShareError> {
    let cj = points[j].coordinate(free);
    let mut basis = PriPoly::constant(group.clone(), G::Scalar::one());
    let mut inv_den = G::Scalar::one();
    for (m, p) in points.iter().enumerate() {
        if m == j {
            continue;
        }
        let cm = p.coordinate(free);
        basis = basis.mul(&PriPoly::linear_factor(
            group.clone(),
            G::Scalar::from_i64(cm),
        ));
        let den = G::Scalar::from_i64(cj) - G::Scalar::from_i64(cm);
        let inv = den
            .invert()
            .ok_or(ShareError::DivisionByZero { coordinate: cm })?;
        inv_den = inv_den * inv;
    }
    Ok(basis.scale(inv_den))
}
