use std::fmt;

use crate::error::Error;

/// Covalent bond order. The discriminant is the number of shared electron
/// pairs, which is also how many electrons each partner gains.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub enum BondOrder {
    Single = 1,
    Double,
    Triple,
}

impl BondOrder {
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Order reached by adding `increment` to this bond, if still at most triple.
    pub fn extended_by(self, increment: BondOrder) -> Result<BondOrder, Error> {
        let combined = self.value() + increment.value();
        BondOrder::try_from(combined).map_err(|_| {
            Error::covalent_bond(format!(
                "bond order cannot exceed 3 (existing {} + increment {})",
                self.value(),
                increment.value()
            ))
        })
    }
}

impl TryFrom<u8> for BondOrder {
    type Error = Error;

    fn try_from(order: u8) -> Result<Self, Self::Error> {
        match order {
            1 => Ok(BondOrder::Single),
            2 => Ok(BondOrder::Double),
            3 => Ok(BondOrder::Triple),
            0 => Err(Error::covalent_bond("bond order must be positive")),
            _ => Err(Error::covalent_bond("bond order cannot be more than 3")),
        }
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BondOrder::Single => write!(f, "Single"),
            BondOrder::Double => write!(f, "Double"),
            BondOrder::Triple => write!(f, "Triple"),
        }
    }
}

/// Edge weight of the molecular graph. One edge is shared by both partners.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Bond {
    pub order: BondOrder,
}

impl Bond {
    pub fn new(order: BondOrder) -> Bond {
        Bond { order }
    }

    /// Electrons this bond contributes to each partner's valence shell.
    pub fn valence_contrib(&self) -> usize {
        self.order.value() as usize
    }
}
