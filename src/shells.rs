//! Electron configuration of a Bohr-model atom.
//!
//! Shells are addressed by principal quantum number (1..=7). Each shell only
//! exposes the subshells it physically has: shell 1 holds {s}, shells 2 and 7
//! hold {s, p}, shells 3 and 6 hold {s, p, d}, shells 4 and 5 hold all four.

use std::fmt;

use log::debug;

use crate::{
    atomic_data::{AtomicNumber, SubshellType},
    error::Error,
};

use SubshellType::{D, F, P, S};

pub const SHELL_COUNT: usize = 7;

const S_MAX: u8 = S.capacity();
const P_MAX: u8 = P.capacity();
const D_MAX: u8 = D.capacity();
const F_MAX: u8 = F.capacity();

/// Per-shell subshell capacities.
static MAX_OCCUPANCY: [&[u8]; SHELL_COUNT] = [
    &[S_MAX],
    &[S_MAX, P_MAX],
    &[S_MAX, P_MAX, D_MAX],
    &[S_MAX, P_MAX, D_MAX, F_MAX],
    &[S_MAX, P_MAX, D_MAX, F_MAX],
    &[S_MAX, P_MAX, D_MAX],
    &[S_MAX, P_MAX],
];

// 1s
// 2s       2p
// 3s       3p
// 4s    3d 4p
// 5s    4d 5p
// 6s 4f 5d 6p
// 7s 5f 6d 7p
const FILLING_ORDER: [(usize, SubshellType); 19] = [
    (1, S),
    (2, S),
    (2, P),
    (3, S),
    (3, P),
    (4, S),
    (3, D),
    (4, P),
    (5, S),
    (4, D),
    (5, P),
    (6, S),
    (4, F),
    (5, D),
    (6, P),
    (7, S),
    (5, F),
    (6, D),
    (7, P),
];

/// Ground states that deviate from the naive filling order, keyed by atomic
/// number. Each entry overwrites (shell, subshell) with the given population.
const EXCEPTIONS: [(usize, &[(usize, SubshellType, u8)]); 11] = [
    (24, &[(4, S, 1), (3, D, 5)]),              // Cr
    (29, &[(4, S, 1), (3, D, 10)]),             // Cu
    (41, &[(5, S, 1), (4, D, 4)]),              // Nb
    (42, &[(5, S, 1), (4, D, 5)]),              // Mo
    (44, &[(5, S, 1), (4, D, 7)]),              // Ru
    (45, &[(5, S, 1), (4, D, 8)]),              // Rh
    (46, &[(5, S, 0), (4, D, 10)]),             // Pd
    (47, &[(5, S, 1), (4, D, 10)]),             // Ag
    (78, &[(6, S, 1), (5, D, 9)]),              // Pt
    (79, &[(6, S, 1), (5, D, 10)]),             // Au
    (103, &[(7, S, 1), (5, F, 14), (6, D, 2)]), // Lr
];

/// Capacity row (per-subshell maxima) of shell `n`.
pub fn max_shell(n: usize) -> Option<&'static [u8]> {
    MAX_OCCUPANCY.get(n.checked_sub(1)?).copied()
}

/// Total number of electrons the whole configuration can hold.
pub fn total_capacity() -> usize {
    MAX_OCCUPANCY
        .iter()
        .flat_map(|row| row.iter())
        .map(|&c| c as usize)
        .sum()
}

pub fn electron_count(shell: &[u8]) -> usize {
    shell.iter().map(|&e| e as usize).sum()
}

/// Simplified octet-style capacity of a shell, derived from its subshell count only.
pub fn scalar_capacity(subshell_count: usize) -> Result<usize, Error> {
    match subshell_count {
        1 => Ok(2),
        2 => Ok(8),
        3 => Ok(18),
        4 => Ok(32),
        other => Err(Error::UnknownCapacity(other)),
    }
}

fn coordinate(n: usize, subshell: SubshellType) -> Result<(usize, usize), Error> {
    match max_shell(n) {
        Some(row) if subshell.index() < row.len() => Ok((n - 1, subshell.index())),
        _ => Err(Error::construction(format!(
            "principal quantum number {} and subshell {} out of bounds",
            n,
            subshell.label()
        ))),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElectronConfiguration {
    // trailing entries past a shell's subshell count stay zero
    occupancy: [[u8; 4]; SHELL_COUNT],
}

impl ElectronConfiguration {
    pub fn new() -> ElectronConfiguration {
        Self::default()
    }

    /// Configuration of the neutral atom, exceptions applied.
    pub fn for_atom(atomic_number: AtomicNumber) -> Result<ElectronConfiguration, Error> {
        let mut config = Self::new();
        config.fill(atomic_number.get(), atomic_number)?;
        Ok(config)
    }

    pub fn reset(&mut self) {
        self.occupancy = [[0; 4]; SHELL_COUNT];
    }

    /// Rebuilds the configuration for `electrons` electrons by the Aufbau order.
    ///
    /// When `electrons` equals the atomic number the known ground-state
    /// exceptions are applied on top. On error the configuration is left empty.
    pub fn fill(&mut self, electrons: usize, atomic_number: AtomicNumber) -> Result<(), Error> {
        self.reset();
        let result = self.fill_from_empty(electrons, atomic_number);
        if result.is_err() {
            self.reset();
        }
        result
    }

    fn fill_from_empty(
        &mut self,
        electrons: usize,
        atomic_number: AtomicNumber,
    ) -> Result<(), Error> {
        let capacity = total_capacity();
        if electrons > capacity {
            return Err(Error::construction(format!(
                "{} electrons exceed the total shell capacity of {}",
                electrons, capacity
            )));
        }

        let mut remaining = electrons;
        for &(n, subshell) in FILLING_ORDER.iter() {
            if remaining == 0 {
                break;
            }
            let (i, j) = coordinate(n, subshell)?;
            let to_fill = remaining.min(MAX_OCCUPANCY[i][j] as usize);
            self.occupancy[i][j] += to_fill as u8;
            remaining -= to_fill;
        }

        if electrons == atomic_number.get() {
            self.apply_exceptions(atomic_number)?;
        }
        debug!(
            "filled {} electrons for Z={}: {}",
            electrons,
            atomic_number,
            self.notation()
        );
        Ok(())
    }

    fn apply_exceptions(&mut self, atomic_number: AtomicNumber) -> Result<(), Error> {
        let overrides = EXCEPTIONS
            .iter()
            .find(|(anum, _)| *anum == atomic_number.get())
            .map(|(_, overrides)| *overrides)
            .unwrap_or(&[]);
        for &(n, subshell, electrons) in overrides {
            let (i, j) = coordinate(n, subshell)?;
            self.occupancy[i][j] = electrons;
        }
        Ok(())
    }

    /// Removes (`delta > 0`) or adds (`delta < 0`) electrons.
    ///
    /// Removal empties the highest shell and subshell first. Addition fills the
    /// first subshells in filling order that still have room. Both stop early
    /// once the configuration is empty or full.
    pub fn ionise(&mut self, delta: i32) {
        if delta > 0 {
            self.remove_electrons(delta.unsigned_abs() as usize);
        } else if delta < 0 {
            self.add_electrons(delta.unsigned_abs() as usize);
        }
    }

    fn remove_electrons(&mut self, mut to_lose: usize) {
        for (i, shell) in self.occupancy.iter_mut().enumerate().rev() {
            for occupancy in shell[..MAX_OCCUPANCY[i].len()].iter_mut().rev() {
                if to_lose == 0 {
                    return;
                }
                let removed = (*occupancy as usize).min(to_lose);
                *occupancy -= removed as u8;
                to_lose -= removed;
            }
        }
    }

    fn add_electrons(&mut self, mut to_gain: usize) {
        for &(n, subshell) in FILLING_ORDER.iter() {
            if to_gain == 0 {
                return;
            }
            let (i, j) = (n - 1, subshell.index());
            let spare = (MAX_OCCUPANCY[i][j] - self.occupancy[i][j]) as usize;
            let added = spare.min(to_gain);
            self.occupancy[i][j] += added as u8;
            to_gain -= added;
        }
    }

    /// Occupancy row of shell `n` (1-based).
    pub fn shell(&self, n: usize) -> Option<&[u8]> {
        let row = max_shell(n)?;
        Some(&self.occupancy[n - 1][..row.len()])
    }

    pub fn shells(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.occupancy
            .iter()
            .zip(MAX_OCCUPANCY.iter())
            .map(|(shell, row)| &shell[..row.len()])
    }

    pub fn occupancy(&self, n: usize, subshell: SubshellType) -> Option<u8> {
        self.shell(n)?.get(subshell.index()).copied()
    }

    pub fn total_electrons(&self) -> usize {
        self.shells().map(electron_count).sum()
    }

    /// Principal quantum number of the highest shell with an occupied s subshell.
    pub fn valence_shell_number(&self) -> Result<usize, Error> {
        (1..=SHELL_COUNT)
            .rev()
            .find(|&n| self.occupancy[n - 1][S.index()] != 0)
            .ok_or(Error::EmptyValence)
    }

    pub fn valence_shell(&self) -> Result<&[u8], Error> {
        let n = self.valence_shell_number()?;
        Ok(&self.occupancy[n - 1][..MAX_OCCUPANCY[n - 1].len()])
    }

    pub fn max_valence_shell(&self) -> Result<&'static [u8], Error> {
        Ok(MAX_OCCUPANCY[self.valence_shell_number()? - 1])
    }

    pub fn valence_electrons(&self) -> Result<usize, Error> {
        Ok(electron_count(self.valence_shell()?))
    }

    pub fn max_capacity_valence(&self) -> Result<usize, Error> {
        scalar_capacity(self.valence_shell()?.len())
    }

    /// Tops up the valence shell with `electrons`, lowest subshell with room first.
    /// Returns how many electrons found room.
    pub fn add_to_valence(&mut self, electrons: usize) -> Result<usize, Error> {
        let i = self.valence_shell_number()? - 1;
        let mut to_add = electrons;
        for (occupancy, &max) in self.occupancy[i].iter_mut().zip(MAX_OCCUPANCY[i].iter()) {
            let added = ((max - *occupancy) as usize).min(to_add);
            *occupancy += added as u8;
            to_add -= added;
        }
        Ok(electrons - to_add)
    }

    /// Spectroscopic notation in filling order, e.g. `1s2 2s2 2p4`.
    pub fn notation(&self) -> String {
        FILLING_ORDER
            .iter()
            .filter_map(|&(n, subshell)| {
                let electrons = self.occupancy[n - 1][subshell.index()];
                (electrons > 0).then(|| format!("{}{}{}", n, subshell.label(), electrons))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for ElectronConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for shell in self.shells() {
            writeln!(f, "{:?}", shell)?;
        }
        Ok(())
    }
}
