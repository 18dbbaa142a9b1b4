//! Error type shared by every atom and molecule operation.

use thiserror::Error;

/// Errors raised by the atomic model.
///
/// None of these are fatal: the failing operation leaves the atom (or both
/// atoms, for bonding) in its last valid state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The electron configuration could not be built; it has been reset to empty.
    #[error("atom construction failed: {0}")]
    Construction(String),

    /// A covalent bond was rejected before either atom was mutated.
    #[error("covalent bond rejected: {0}")]
    CovalentBond(String),

    /// Valence shell requested for an atom without electrons.
    #[error("all shells are empty")]
    EmptyValence,

    /// The valence shell has a subshell count outside the capacity table.
    #[error("unknown valence capacity for a shell of {0} subshells")]
    UnknownCapacity(usize),

    /// A decay would leave the periodic table or drive the neutron count negative.
    #[error("decay rejected: {0}")]
    Decay(String),

    /// No element matches the given name or symbol.
    #[error("unknown element: '{0}'")]
    UnknownElement(String),

    #[error("atomic number {0} is outside 1..=118")]
    AtomicNumberOutOfRange(usize),

    /// The atom index does not refer to a live atom of the molecule.
    #[error("no atom with index {0}")]
    UnknownAtom(usize),
}

impl Error {
    pub fn construction(detail: impl Into<String>) -> Self {
        Self::Construction(detail.into())
    }

    pub fn covalent_bond(detail: impl Into<String>) -> Self {
        Self::CovalentBond(detail.into())
    }

    pub fn decay(detail: impl Into<String>) -> Self {
        Self::Decay(detail.into())
    }
}
