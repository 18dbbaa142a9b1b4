use std::{fmt, str::FromStr};

use log::debug;

use crate::{
    atomic_data::AtomicNumber,
    bond::{Bond, BondOrder},
    error::Error,
    periodic_table::PeriodicTable,
    shells::ElectronConfiguration,
};

/// Direction of a beta decay.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum BetaDecay {
    /// β+: a proton becomes a neutron.
    Plus,
    /// β−: a neutron becomes a proton.
    Minus,
}

/// Bohr-model atom: nucleus counts plus the electron configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    atomic_num: AtomicNumber,
    neutrons: u32,
    electrons: ElectronConfiguration,
}

impl Atom {
    /// Neutral atom whose neutron count equals its atomic number.
    pub fn new(atomic_num: usize) -> Result<Atom, Error> {
        Self::with_neutrons(atomic_num, atomic_num as u32)
    }

    pub fn with_neutrons(atomic_num: usize, neutrons: u32) -> Result<Atom, Error> {
        Self::with_electrons(atomic_num, neutrons, atomic_num)
    }

    /// Atom carrying a custom electron count, i.e. an ion when it differs from
    /// the atomic number.
    pub fn with_electrons(
        atomic_num: usize,
        neutrons: u32,
        electrons: usize,
    ) -> Result<Atom, Error> {
        let atomic_num = AtomicNumber::new(atomic_num)?;
        let mut config = ElectronConfiguration::new();
        config.fill(electrons, atomic_num)?;
        Ok(Atom {
            atomic_num,
            neutrons,
            electrons: config,
        })
    }

    pub fn from_symbol(symbol: &str) -> Result<Atom, Error> {
        let anum = PeriodicTable::get()
            .by_symbol(symbol)
            .ok_or_else(|| Error::UnknownElement(symbol.to_string()))?;
        Self::new(anum.get())
    }

    pub fn from_name(name: &str) -> Result<Atom, Error> {
        let anum = PeriodicTable::get()
            .by_name(name)
            .ok_or_else(|| Error::UnknownElement(name.to_string()))?;
        Self::new(anum.get())
    }

    pub fn atomic_number(&self) -> AtomicNumber {
        self.atomic_num
    }

    pub fn neutron_number(&self) -> u32 {
        self.neutrons
    }

    pub fn mass_number(&self) -> u32 {
        self.atomic_num.get() as u32 + self.neutrons
    }

    pub fn name(&self) -> &'static str {
        PeriodicTable::get().element_name(self.atomic_num)
    }

    pub fn symbol(&self) -> &'static str {
        PeriodicTable::get().element_symbol(self.atomic_num)
    }

    pub fn electrons(&self) -> &ElectronConfiguration {
        &self.electrons
    }

    pub fn total_electrons(&self) -> usize {
        self.electrons.total_electrons()
    }

    /// Protons minus electrons.
    pub fn charge(&self) -> i64 {
        self.atomic_num.get() as i64 - self.total_electrons() as i64
    }

    pub fn valence_shell(&self) -> Result<&[u8], Error> {
        self.electrons.valence_shell()
    }

    pub fn max_valence_shell(&self) -> Result<&'static [u8], Error> {
        self.electrons.max_valence_shell()
    }

    pub fn valence_electrons(&self) -> Result<usize, Error> {
        self.electrons.valence_electrons()
    }

    pub fn max_capacity_valence(&self) -> Result<usize, Error> {
        self.electrons.max_capacity_valence()
    }

    /// Positive `delta` removes electrons (cation), negative adds them (anion).
    ///
    /// Gaining electrons back up to the atomic number restores the neutral
    /// ground state, exceptions included.
    pub fn ionise(&mut self, delta: i32) {
        let was_cation = self.charge() > 0;
        self.electrons.ionise(delta);
        if delta < 0 && was_cation && self.charge() == 0 {
            if let Ok(ground) = ElectronConfiguration::for_atom(self.atomic_num) {
                self.electrons = ground;
            }
        }
    }

    /// Emits an alpha particle: Z and N each drop by two and the electron
    /// configuration is rebuilt for the new element. Returns the helium-4
    /// nucleus. Bonds are not revisited.
    pub fn alpha_decay(&mut self) -> Result<Atom, Error> {
        let neutrons = self.neutrons.checked_sub(2).ok_or_else(|| {
            Error::decay(format!(
                "alpha decay needs 2 neutrons, {} has {}",
                self.symbol(),
                self.neutrons
            ))
        })?;
        let atomic_num = self.atomic_num.get().saturating_sub(2);
        self.transmute(atomic_num, neutrons)?;
        Atom::with_neutrons(2, 2)
    }

    pub fn beta_decay(&mut self, kind: BetaDecay) -> Result<(), Error> {
        let z = self.atomic_num.get();
        let (atomic_num, neutrons) = match kind {
            BetaDecay::Plus => (z - 1, self.neutrons.checked_add(1)),
            BetaDecay::Minus => (z + 1, self.neutrons.checked_sub(1)),
        };
        let neutrons = neutrons.ok_or_else(|| {
            Error::decay(format!(
                "{} has no neutron left for beta minus decay",
                self.symbol()
            ))
        })?;
        self.transmute(atomic_num, neutrons)
    }

    fn transmute(&mut self, atomic_num: usize, neutrons: u32) -> Result<(), Error> {
        let new_num = AtomicNumber::new(atomic_num).map_err(|_| {
            Error::decay(format!(
                "{} would decay to atomic number {}, outside the periodic table",
                self.symbol(),
                atomic_num
            ))
        })?;
        let electrons = ElectronConfiguration::for_atom(new_num)?;
        debug!(
            "{}-{} decays to {}-{}",
            self.symbol(),
            self.mass_number(),
            PeriodicTable::get().element_symbol(new_num),
            atomic_num as u32 + neutrons
        );
        self.atomic_num = new_num;
        self.neutrons = neutrons;
        self.electrons = electrons;
        Ok(())
    }

    /// Checks that this atom can take part in a bond increment of `order`:
    /// at least `order` valence electrons, and room for `order` more.
    pub(crate) fn check_bond_room(&self, order: BondOrder) -> Result<(), Error> {
        let increment = order.value() as usize;
        let valence = self.valence_electrons()?;
        if valence < increment {
            return Err(Error::covalent_bond(format!(
                "not enough electrons to bond: {} has {} valence electrons, needs {}",
                self.symbol(),
                valence,
                increment
            )));
        }
        let capacity = self.max_capacity_valence()?;
        if valence + increment > capacity {
            return Err(Error::covalent_bond(format!(
                "not enough space to bond: {} holds {} of {} valence electrons, needs room for {}",
                self.symbol(),
                valence,
                capacity,
                increment
            )));
        }
        Ok(())
    }

    /// Tops up the valence shell with the electrons `bond` shares.
    pub(crate) fn gain_bond_electrons(&mut self, bond: &Bond) -> Result<(), Error> {
        self.electrons.add_to_valence(bond.valence_contrib())?;
        Ok(())
    }

    /// Takes the shared electrons of `bond` out again, outermost first.
    pub(crate) fn release_bond_electrons(&mut self, bond: &Bond) {
        self.electrons.ionise(bond.valence_contrib() as i32);
    }
}

impl FromStr for Atom {
    type Err = Error;

    /// Accepts an element symbol ("O") or name ("Oxygen").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Atom::from_symbol(s).or_else(|_| Atom::from_name(s))
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.name(), self.symbol())?;
        writeln!(f, "Protons: {}", self.atomic_num)?;
        writeln!(f, "Neutrons: {}", self.neutrons)?;
        writeln!(f, "Shells:")?;
        write!(f, "{}", self.electrons)
    }
}
