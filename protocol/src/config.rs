//! # Protocol Configuration & Constants
//!
//! Every fixed parameter of the key-management protocol lives here. Nodes
//! and dealers must agree on all of them, so changing one is a protocol
//! version bump.

// ---------------------------------------------------------------------------
// Protocol Version
// ---------------------------------------------------------------------------

/// The full protocol version string.
pub const PROTOCOL_VERSION: &str = "0.1.0";

// ---------------------------------------------------------------------------
// Group Parameters
// ---------------------------------------------------------------------------

/// Canonical name of the production group.
pub const GROUP_NAME: &str = "ristretto255";

/// Compressed Ristretto point length in bytes.
pub const RISTRETTO_POINT_LENGTH: usize = 32;

/// Canonical Ristretto scalar length in bytes.
pub const RISTRETTO_SCALAR_LENGTH: usize = 32;

/// Domain label hashed to the commitment base point `H`.
///
/// `H` must have an unknown discrete log relative to the generator, so it is
/// derived by hashing rather than chosen.
pub const COMMIT_BASE_LABEL: &[u8] = b"dkms/feldman-commit-base/v1";

// ---------------------------------------------------------------------------
// Sharing Limits
// ---------------------------------------------------------------------------

/// Largest `T` or `U` a node accepts in a registration request.
///
/// Reconstruction costs O(n²) scalar operations per axis. 64 custodians per
/// axis is far beyond any real deployment and keeps a hostile request cheap.
pub const MAX_THRESHOLD: usize = 64;

/// Smallest meaningful threshold. `1` means the axis is not split at all.
pub const MIN_THRESHOLD: usize = 1;

/// First coordinate the dealer hands out on each axis.
///
/// Coordinate 0 evaluates the axis polynomial at its constant term, so
/// dealing starts at 1.
pub const FIRST_SHARE_COORDINATE: i64 = 1;
