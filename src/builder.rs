use anyhow::{bail, Context, Result};

use crate::{atom::Atom, mol::Mol};

const ALKANE_PREFIXES: [(&str, usize); 10] = [
    ("meth", 1),
    ("eth", 2),
    ("prop", 3),
    ("but", 4),
    ("pent", 5),
    ("hex", 6),
    ("hept", 7),
    ("oct", 8),
    ("non", 9),
    ("dec", 10),
];

/// Carbon count of a straight-chain alkane name such as `"propane"`.
pub fn alkane_carbon_count(name: &str) -> Option<usize> {
    let prefix = name.trim().to_lowercase();
    let prefix = prefix.strip_suffix("ane")?;
    ALKANE_PREFIXES
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, count)| *count)
}

/// Builds a straight-chain alkane (methane through decane) by bonding a
/// carbon chain with single bonds and saturating every carbon with hydrogen.
pub fn build_alkane(name: &str) -> Result<Mol> {
    let Some(carbons) = alkane_carbon_count(name) else {
        bail!("'{}' is not a straight-chain alkane between methane and decane", name);
    };

    let mut mol = Mol::new();
    let chain = (0..carbons)
        .map(|_| Atom::new(6).map(|carbon| mol.add_atom(carbon)))
        .collect::<Result<Vec<_>, _>>()
        .context("creating carbon chain")?;

    for (i, pair) in chain.windows(2).enumerate() {
        mol.bond(pair[0], pair[1], 1)
            .with_context(|| format!("bonding carbon {} to carbon {}", i + 1, i + 2))?;
    }

    for (i, &carbon) in chain.iter().enumerate() {
        let atom = mol
            .atom_with_idx(carbon)
            .context("carbon vanished from the chain")?;
        let missing = atom.max_capacity_valence()? - atom.valence_electrons()?;
        for _ in 0..missing {
            let hydrogen = mol.add_atom(Atom::new(1)?);
            mol.bond(carbon, hydrogen, 1)
                .with_context(|| format!("saturating carbon {} with hydrogen", i + 1))?;
        }
    }

    Ok(mol)
}
