//! # Dealer
//!
//! The trusted party that samples a bivariate polynomial for a user's
//! secret, publishes its commitment and hands each node the samples it
//! needs to register.
//!
//! A [`Dealing`] holds the polynomial and must be dropped once every node
//! has its request. Nothing in this module persists it.

use rand::{CryptoRng, RngCore};

use crate::codec::BiPointWire;
use crate::config::FIRST_SHARE_COORDINATE;
use crate::error::ShareError;
use crate::group::Group;
use crate::registration::KeyRegisterRequest;
use crate::share::{BiPoly, CommitData};
use crate::user::NodeInfo;

/// Sharing parameters for one group and base point.
#[derive(Debug, Clone)]
pub struct Dealer<G: Group> {
    group: G,
    t: usize,
    u: usize,
    h: G::Point,
}

impl<G: Group> Dealer<G> {
    /// A dealer splitting secrets with thresholds `t` (x) and `u` (y),
    /// committing under base point `h`.
    pub fn new(group: G, t: usize, u: usize, h: G::Point) -> Self {
        Self { group, t, u, h }
    }

    /// The x threshold.
    pub fn t(&self) -> usize {
        self.t
    }

    /// The y threshold.
    pub fn u(&self) -> usize {
        self.u
    }

    /// Share `secret` under a freshly sampled polynomial.
    pub fn deal<R: RngCore + CryptoRng + ?Sized>(
        &self,
        secret: G::Scalar,
        rng: &mut R,
    ) -> Result<Dealing<G>, ShareError> {
        let poly = BiPoly::new(self.group.clone(), self.t, self.u, secret, rng)?;
        let commit = poly.commit(self.h);
        tracing::debug!(
            group = %self.group.name(),
            t = self.t,
            u = self.u,
            "dealt bivariate polynomial"
        );
        Ok(Dealing { poly, commit })
    }
}

/// One dealt secret: the polynomial and its public commitment.
#[derive(Debug)]
pub struct Dealing<G: Group> {
    poly: BiPoly<G>,
    commit: CommitData<G>,
}

impl<G: Group> Dealing<G> {
    /// The public commitment.
    pub fn commitment(&self) -> &CommitData<G> {
        &self.commit
    }

    /// Build the registration request for the node at `(x0, y0)`.
    ///
    /// The first `U` points share `x0` with `y = 1..=U`; the remaining `T`
    /// share `y0` with `x = 1..=T`.
    pub fn registration_request(
        &self,
        user_id: impl Into<String>,
        x0: i64,
        y0: i64,
        nodes: Vec<NodeInfo>,
    ) -> KeyRegisterRequest {
        let (t, u) = (self.poly.t(), self.poly.u());
        let first = FIRST_SHARE_COORDINATE;
        let row = (first..first + u as i64).map(|y| self.poly.eval(x0, y));
        let column = (first..first + t as i64).map(|x| self.poly.eval(x, y0));
        KeyRegisterRequest {
            user_id: user_id.into(),
            t,
            u,
            commit_data: self.commit.marshal(),
            points: row.chain(column).map(|p| BiPointWire::encode(&p)).collect(),
            nodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::small::{SmallScalar, Z97};

    #[test]
    fn request_layout() {
        let group = Z97::default();
        let mut rng = rand::thread_rng();
        let dealing = Dealer::new(group, 3, 2, group.generator())
            .deal(SmallScalar::new(7), &mut rng)
            .unwrap();
        let req = dealing.registration_request("bob", 4, 9, Vec::new());

        assert_eq!((req.t, req.u), (3, 2));
        assert_eq!(req.points.len(), 5);
        let coords: Vec<_> = req.points.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(coords, [(4, 1), (4, 2), (1, 9), (2, 9), (3, 9)]);

        let commit = dealing.commitment();
        for wire in &req.points {
            assert!(commit.verify_point(&wire.decode(&group).unwrap()));
        }
        assert_eq!(req.commit_data, commit.marshal());
    }

    #[test]
    fn zero_threshold_cannot_deal() {
        let group = Z97::default();
        let dealer = Dealer::new(group, 0, 2, group.generator());
        assert!(dealer.deal(SmallScalar::new(1), &mut rand::thread_rng()).is_err());
    }
}
