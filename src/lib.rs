//! Bohr-model atoms: electron configurations filled by the Aufbau order,
//! ionisation, mutual covalent bonding limited by valence-shell capacity,
//! and alpha/beta decay.

pub mod atom;
pub mod atomic_data;
pub mod bond;
pub mod builder;
pub mod error;
pub mod mol;
pub mod periodic_table;
pub mod shells;

pub use atom::{Atom, BetaDecay};
pub use atomic_data::{AtomicNumber, SubshellType};
pub use bond::{Bond, BondOrder};
pub use error::Error;
pub use mol::{AtomId, Mol};
pub use shells::ElectronConfiguration;
