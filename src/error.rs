use crate::maybestd::fmt;

/// An error that occurred while configuring a simulation or generating a
/// revocation set.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SimulationError {
    /// The identifier bit-length is outside the supported range
    /// (1..=[`MAX_ID_LENGTH`](crate::tree::MAX_ID_LENGTH)). A tree needs at
    /// least a root and a leaf level, and identifiers must fit in a u64
    /// together with their sentinel bit.
    UnsupportedIdLength(usize),
    /// More revocations were requested than the tree has leaves.
    TooManyRevocations {
        /// The requested number of revocations
        requested: u64,
        /// The number of leaves in the tree, `2^id_length`
        capacity: u64,
    },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::UnsupportedIdLength(len) => {
                write!(f, "unsupported id length: {}", len)
            }
            SimulationError::TooManyRevocations {
                requested,
                capacity,
            } => write!(
                f,
                "cannot revoke {} leaves in a tree with {} leaves",
                requested, capacity
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SimulationError {}
