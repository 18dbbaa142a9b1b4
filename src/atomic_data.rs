use std::fmt;

use crate::error::Error;

/// Per-element identity record served by the periodic table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomicData {
    pub anum: AtomicNumber,
    pub symb: &'static str,
    pub name: &'static str,
}

/// Proton count of an element, always within the periodic table (1..=118).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
pub struct AtomicNumber(pub(crate) usize);

impl AtomicNumber {
    pub const MIN: usize = 1;
    pub const MAX: usize = 118;

    pub fn new(num: usize) -> Result<AtomicNumber, Error> {
        if (Self::MIN..=Self::MAX).contains(&num) {
            Ok(AtomicNumber(num))
        } else {
            Err(Error::AtomicNumberOutOfRange(num))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for AtomicNumber {
    type Error = Error;

    fn try_from(num: usize) -> Result<Self, Self::Error> {
        AtomicNumber::new(num)
    }
}

impl fmt::Display for AtomicNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Angular-momentum type of a subshell. The discriminant is the subshell's
/// position inside its shell.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum SubshellType {
    S = 0,
    P,
    D,
    F,
}

impl SubshellType {
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Maximum number of electrons the subshell can hold.
    pub const fn capacity(self) -> u8 {
        match self {
            SubshellType::S => 2,
            SubshellType::P => 6,
            SubshellType::D => 10,
            SubshellType::F => 14,
        }
    }

    pub fn label(self) -> char {
        match self {
            SubshellType::S => 's',
            SubshellType::P => 'p',
            SubshellType::D => 'd',
            SubshellType::F => 'f',
        }
    }
}
