//! # Registered Users
//!
//! What a node keeps after a successful registration: the public commitment
//! and the two projections it reconstructed for its own coordinates. The
//! dealer's polynomial and the raw samples are never stored.
//!
//! Storage engine choice is left to the deployment; [`MemoryRepository`] is
//! the reference implementation.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::group::Group;
use crate::share::{CommitData, XPoly, YPoly};

/// Errors from a [`Repository`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// A user with this id is already registered.
    #[error("user already registered: {0}")]
    AlreadyExists(String),
}

/// Another node taking part in a user's sharing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInfo {
    /// Node identifier.
    pub id: String,
    /// Network address the node is reachable at.
    pub address: String,
}

/// A user's key material as held by this node.
#[derive(Debug, Clone)]
pub struct User<G: Group> {
    /// User identifier.
    pub id: String,
    /// Commitments to the dealer's polynomial.
    pub poly_commit: CommitData<G>,
    /// This node's row `f(X, ·)`.
    pub my_y_poly: YPoly<G>,
    /// This node's column `f(·, Y)`.
    pub my_x_poly: XPoly<G>,
    /// The other nodes holding shares for this user.
    pub nodes: Vec<NodeInfo>,
    /// When the registration completed.
    pub registered_at: DateTime<Utc>,
}

/// Persistence for registered users.
pub trait Repository<G: Group>: Send + Sync {
    /// Store a new user. Fails if the id is taken.
    fn save(&self, user: User<G>) -> Result<(), RepositoryError>;

    /// Look a user up by id.
    fn find(&self, id: &str) -> Option<User<G>>;

    /// Number of stored users.
    fn len(&self) -> usize;

    /// Whether no users are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An in-process [`Repository`] behind a read-write lock.
#[derive(Debug)]
pub struct MemoryRepository<G: Group> {
    users: RwLock<HashMap<String, User<G>>>,
}

impl<G: Group> MemoryRepository<G> {
    /// An empty repository.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

impl<G: Group> Default for MemoryRepository<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Group> Repository<G> for MemoryRepository<G> {
    fn save(&self, user: User<G>) -> Result<(), RepositoryError> {
        let mut users = self.users.write();
        if users.contains_key(&user.id) {
            return Err(RepositoryError::AlreadyExists(user.id));
        }
        users.insert(user.id.clone(), user);
        Ok(())
    }

    fn find(&self, id: &str) -> Option<User<G>> {
        self.users.read().get(id).cloned()
    }

    fn len(&self) -> usize {
        self.users.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::small::{SmallScalar, Z97};
    use crate::share::BiPoly;

    fn user(id: &str) -> User<Z97> {
        let f = BiPoly::from_coefficients(
            Z97::default(),
            SmallScalar::new(7),
            vec![SmallScalar::new(2)],
            vec![SmallScalar::new(3)],
        );
        User {
            id: id.to_string(),
            poly_commit: f.commit(Z97::default().generator()),
            my_y_poly: f.y_poly(1),
            my_x_poly: f.x_poly(1),
            nodes: vec![NodeInfo {
                id: "node-1".into(),
                address: "127.0.0.1:9750".into(),
            }],
            registered_at: Utc::now(),
        }
    }

    #[test]
    fn save_then_find() {
        let repo = MemoryRepository::new();
        assert!(repo.is_empty());
        repo.save(user("alice")).unwrap();

        let found = repo.find("alice").unwrap();
        assert_eq!(found.id, "alice");
        assert_eq!(found.my_y_poly.x(), 1);
        assert_eq!(repo.len(), 1);
        assert!(repo.find("bob").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let repo = MemoryRepository::new();
        repo.save(user("alice")).unwrap();
        assert_eq!(
            repo.save(user("alice")),
            Err(RepositoryError::AlreadyExists("alice".into()))
        );
        assert_eq!(repo.len(), 1);
    }
}
