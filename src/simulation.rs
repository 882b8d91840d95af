//! Scenario evaluation for the two picking strategies: for a given
//! revocation count, measure the best-case and worst-case revocation
//! patterns exactly and the average over seeded pseudorandom trials.
//!
//! Sweeping revocation counts, formatting and persisting results are left
//! to the caller; this module only produces the per-scenario numbers.

use crate::error::SimulationError;
use crate::maybestd::vec::Vec;
use crate::revocation::RevocationSetGenerator;
use crate::selection::{fss_crowd_size, vss_nodes_needed};
use crate::tree::ActivationTree;

/// The identifier bit-length used by the ACPC and BCAM schemes: 40 bits,
/// about a trillion vehicles.
pub const DEFAULT_VID_LENGTH: usize = 40;

/// First digits of Planck's constant, the default base seed for the
/// pseudorandom trials.
pub const PLANCK_CONSTANT: u64 = 662_607_004;

/// First digits of pi, the default per-trial seed increment.
pub const PI_CONSTANT: u64 = 314_159;

/// Configuration for a [`Simulator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Bit-length of the leaf identifiers.
    pub id_length: usize,
    /// Number of pseudorandom trials averaged per scenario.
    pub trials: u64,
    /// Seed of the first pseudorandom trial.
    pub base_seed: u64,
    /// Seed increment between consecutive trials.
    pub seed_step: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            id_length: DEFAULT_VID_LENGTH,
            trials: 10_000,
            base_seed: PLANCK_CONSTANT,
            seed_step: PI_CONSTANT,
        }
    }
}

/// Crowd sizes reached by the Fixed-Size Subset strategy under one
/// revocation count.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "borsh", derive(borsh::BorshSerialize, borsh::BorshDeserialize))]
pub struct FssScenario {
    /// The simulated number of revoked leaves.
    pub revocations: u64,
    /// Crowd size under the best-case revocation pattern.
    pub best: u64,
    /// Crowd size under the worst-case revocation pattern.
    pub worst: u64,
    /// Mean crowd size over the pseudorandom trials.
    pub average: f64,
}

/// Picked-node counts needed by the Variable-Size Subset strategy to reach
/// a target crowd size under one revocation count.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "borsh", derive(borsh::BorshSerialize, borsh::BorshDeserialize))]
pub struct VssScenario {
    /// The simulated number of revoked leaves.
    pub revocations: u64,
    /// The crowd size the strategy had to reach.
    pub target_crowd: u64,
    /// Nodes picked under the best-case revocation pattern.
    pub best: u64,
    /// Nodes picked under the worst-case revocation pattern.
    pub worst: u64,
    /// Mean picked-node count over the pseudorandom trials.
    pub average: f64,
    /// Mean number of nodes still pickable tree-wide once the strategy
    /// finished, over the pseudorandom trials. Together with `average` this
    /// bounds the broadcast size a pick-everything fallback would need.
    pub average_pickable: f64,
}

/// Evaluates picking strategies against the three revocation patterns for a
/// fixed identifier bit-length and trial schedule.
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimConfig,
    generator: RevocationSetGenerator,
}

impl Simulator {
    /// Creates a simulator; fails if the configured bit-length cannot back
    /// an activation tree.
    pub fn new(config: SimConfig) -> Result<Self, SimulationError> {
        let generator = RevocationSetGenerator::new(config.id_length)?;
        Ok(Self { config, generator })
    }

    /// The simulator's configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The seed used for the i-th pseudorandom trial.
    fn trial_seed(&self, trial: u64) -> u64 {
        self.config
            .base_seed
            .wrapping_add(trial.wrapping_mul(self.config.seed_step))
    }

    /// Builds a fresh tree with the given leaves revoked.
    fn revoked_tree(&self, leaves: Vec<u64>) -> Result<ActivationTree, SimulationError> {
        let mut tree = ActivationTree::new(self.config.id_length)?;
        tree.revoke(leaves);
        Ok(tree)
    }

    /// Measures the Fixed-Size Subset crowd size for `revocations` revoked
    /// leaves: exact best and worst cases, and the mean over the configured
    /// pseudorandom trials.
    pub fn fss_scenario(&self, revocations: u64) -> Result<FssScenario, SimulationError> {
        let mut best_tree = self.revoked_tree(self.generator.best_case(revocations)?)?;
        let best = fss_crowd_size(&mut best_tree);

        let mut worst_tree = self.revoked_tree(self.generator.worst_case(revocations)?)?;
        let worst = fss_crowd_size(&mut worst_tree);

        let mut total = 0f64;
        for trial in 0..self.config.trials {
            let leaves = self.generator.random(revocations, self.trial_seed(trial))?;
            let mut tree = self.revoked_tree(leaves)?;
            total += fss_crowd_size(&mut tree) as f64;
        }
        let average = if self.config.trials == 0 {
            0.0
        } else {
            total / self.config.trials as f64
        };

        Ok(FssScenario {
            revocations,
            best,
            worst,
            average,
        })
    }

    /// Measures how many nodes the Variable-Size Subset strategy picks to
    /// reach `target_crowd` with `revocations` revoked leaves: exact best
    /// and worst cases, the mean over the configured pseudorandom trials,
    /// and the mean count of nodes left pickable after selection.
    pub fn vss_scenario(
        &self,
        revocations: u64,
        target_crowd: u64,
    ) -> Result<VssScenario, SimulationError> {
        let mut best_tree = self.revoked_tree(self.generator.best_case(revocations)?)?;
        let best = vss_nodes_needed(&mut best_tree, target_crowd);

        let mut worst_tree = self.revoked_tree(self.generator.worst_case(revocations)?)?;
        let worst = vss_nodes_needed(&mut worst_tree, target_crowd);

        let mut total_picked = 0f64;
        let mut total_pickable = 0f64;
        for trial in 0..self.config.trials {
            let leaves = self.generator.random(revocations, self.trial_seed(trial))?;
            let mut tree = self.revoked_tree(leaves)?;
            total_picked += vss_nodes_needed(&mut tree, target_crowd) as f64;
            total_pickable += tree.count_all_pickable_nodes() as f64;
        }
        let (average, average_pickable) = if self.config.trials == 0 {
            (0.0, 0.0)
        } else {
            let trials = self.config.trials as f64;
            (total_picked / trials, total_pickable / trials)
        };

        Ok(VssScenario {
            revocations,
            target_crowd,
            best,
            worst,
            average,
            average_pickable,
        })
    }
}
