//! Simulates "activation-code" style certificate revocation over a binary
//! identifier tree. Leaves stand for vehicle identifiers; revoking a leaf
//! marks its whole path to the root as unusable, and the surviving
//! ("pickable") nodes are what a vehicle can still request activation codes
//! for. The crate measures the anonymity such requests retain: the crowd
//! size, i.e. how many leaves are derivable from the picked nodes.
//!
//! Two picking strategies are evaluated. Fixed-Size Subset
//! ([`fss_crowd_size`]) picks one node per identifier bit and maximizes the
//! crowd; Variable-Size Subset ([`vss_nodes_needed`]) picks as few nodes as
//! needed to reach a target crowd. Revocation patterns driving a
//! simulation come from a [`RevocationSetGenerator`] (best case, worst
//! case, or seeded pseudorandom), and [`Simulator`] bundles the three
//! patterns into per-scenario reports.
//!
//! ```
//! use activation_tree::{ActivationTree, RevocationSetGenerator, fss_crowd_size};
//!
//! let generator = RevocationSetGenerator::new(16)?;
//! let mut tree = ActivationTree::new(16)?;
//! tree.revoke(generator.random(100, 42)?);
//! let crowd = fss_crowd_size(&mut tree);
//! assert!(crowd < 1 << 16);
//! # Ok::<(), activation_tree::SimulationError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

/// A sparse re-export of std, or its core/alloc equivalents when built
/// without the `std` feature.
pub mod maybestd {
    #[cfg(not(feature = "std"))]
    pub use alloc::{boxed, collections, vec};
    pub use core::{cmp, fmt, hash, marker, mem, ops};
    #[cfg(feature = "std")]
    pub use std::{boxed, collections, vec};
}

/// Defines errors raised by simulation configuration and set generation.
pub mod error;
/// Generates best-case, worst-case and pseudorandom revocation leaf-sets.
pub mod revocation;
/// Implements the Fixed-Size and Variable-Size Subset picking strategies.
pub mod selection;
/// Evaluates picking strategies across revocation patterns.
pub mod simulation;
/// Defines the activation tree itself.
pub mod tree;
/// Bit-level helpers for node identifiers.
pub mod utils;

pub use error::SimulationError;
pub use revocation::RevocationSetGenerator;
pub use selection::{fss_crowd_size, vss_nodes_needed};
pub use simulation::{FssScenario, SimConfig, Simulator, VssScenario};
pub use tree::{ActivationTree, MAX_ID_LENGTH};
