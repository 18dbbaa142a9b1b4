use log::{debug, warn};
use petgraph::{
    stable_graph::{NodeIndex, StableUnGraph},
    visit::EdgeRef,
};

use crate::{
    atom::{Atom, BetaDecay},
    bond::{Bond, BondOrder},
    error::Error,
};

/// Handle of an atom inside a [`Mol`]. Stays valid until that atom is removed.
pub type AtomId = NodeIndex;

/// Registry of atoms and the covalent bonds between them.
///
/// A bond is a single undirected edge, so both partners always see the same
/// order. Bonding validates both atoms before touching either.
#[derive(Debug, Clone, Default)]
pub struct Mol {
    graph: StableUnGraph<Atom, Bond>,
}

impl Mol {
    pub fn new() -> Mol {
        Self::default()
    }

    pub fn add_atom(&mut self, atom: Atom) -> AtomId {
        self.graph.add_node(atom)
    }

    /// Breaks every bond of the atom, giving the partners their electrons
    /// back, then removes it.
    pub fn remove_atom(&mut self, id: AtomId) -> Result<Atom, Error> {
        for (peer, _) in self.bonds(id)? {
            self.unbond(id, peer)?;
        }
        self.graph
            .remove_node(id)
            .ok_or(Error::UnknownAtom(id.index()))
    }

    pub fn atom_with_idx(&self, id: AtomId) -> Option<&Atom> {
        self.graph.node_weight(id)
    }

    fn atom(&self, id: AtomId) -> Result<&Atom, Error> {
        self.graph
            .node_weight(id)
            .ok_or(Error::UnknownAtom(id.index()))
    }

    fn atom_mut(&mut self, id: AtomId) -> Result<&mut Atom, Error> {
        self.graph
            .node_weight_mut(id)
            .ok_or(Error::UnknownAtom(id.index()))
    }

    pub fn atoms(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.graph
            .node_indices()
            .map(move |idx| (idx, &self.graph[idx]))
    }

    pub fn atom_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn bond_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The atom's (partner, order) list, oldest bond first.
    pub fn bonds(&self, id: AtomId) -> Result<Vec<(AtomId, BondOrder)>, Error> {
        self.atom(id)?;
        let mut edges: Vec<_> = self
            .graph
            .edges(id)
            .map(|edge| {
                let peer = if edge.source() == id {
                    edge.target()
                } else {
                    edge.source()
                };
                (edge.id(), peer, edge.weight().order)
            })
            .collect();
        edges.sort_by_key(|(edge, _, _)| edge.index());
        Ok(edges
            .into_iter()
            .map(|(_, peer, order)| (peer, order))
            .collect())
    }

    pub fn bond_between(&self, a: AtomId, b: AtomId) -> Option<BondOrder> {
        self.graph
            .find_edge(a, b)
            .map(|edge| self.graph[edge].order)
    }

    pub fn atom_degree(&self, id: AtomId) -> usize {
        self.graph.edges(id).count()
    }

    pub fn atom_neighbors(&self, id: AtomId) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.graph
            .neighbors(id)
            .filter_map(move |idx| self.graph.node_weight(idx).map(|atom| (idx, atom)))
    }

    /// Creates a bond of order `increment` between `a` and `b`, or raises an
    /// existing bond by `increment`. Each atom gains `increment` valence
    /// electrons. Returns the resulting bond order.
    ///
    /// Fails without mutating either atom if the increment is not 1..=3, the
    /// combined order would exceed 3, or either atom lacks the valence
    /// electrons or the valence room for the increment.
    pub fn bond(&mut self, a: AtomId, b: AtomId, increment: u8) -> Result<BondOrder, Error> {
        let increment = BondOrder::try_from(increment)?;
        if a == b {
            return Err(Error::covalent_bond("an atom cannot bond to itself"));
        }

        let existing = self.graph.find_edge(a, b);
        let order = match existing {
            Some(edge) => self.graph[edge].order.extended_by(increment)?,
            None => increment,
        };
        self.atom(a)?.check_bond_room(increment)?;
        self.atom(b)?.check_bond_room(increment)?;

        let shared = Bond::new(increment);
        self.atom_mut(a)?.gain_bond_electrons(&shared)?;
        self.atom_mut(b)?.gain_bond_electrons(&shared)?;
        match existing {
            Some(edge) => self.graph[edge].order = order,
            None => {
                self.graph.add_edge(a, b, Bond::new(order));
            }
        }

        debug!(
            "bond {}#{} - {}#{} now {} (+{})",
            self.graph[a].symbol(),
            a.index(),
            self.graph[b].symbol(),
            b.index(),
            order,
            increment.value()
        );
        Ok(order)
    }

    /// Removes the bond between `a` and `b` and takes the shared electrons
    /// back out of both atoms. Returns the removed order, or `None` when the
    /// pair was not bonded.
    pub fn unbond(&mut self, a: AtomId, b: AtomId) -> Result<Option<BondOrder>, Error> {
        self.atom(a)?;
        self.atom(b)?;
        let Some(edge) = self.graph.find_edge(a, b) else {
            return Ok(None);
        };
        let Some(bond) = self.graph.remove_edge(edge) else {
            return Ok(None);
        };
        let order = bond.order;
        self.atom_mut(b)?.release_bond_electrons(&bond);
        self.atom_mut(a)?.release_bond_electrons(&bond);

        debug!(
            "unbonded {}#{} - {}#{} ({})",
            self.graph[a].symbol(),
            a.index(),
            self.graph[b].symbol(),
            b.index(),
            order
        );
        Ok(Some(order))
    }

    pub fn ionise(&mut self, id: AtomId, delta: i32) -> Result<(), Error> {
        self.atom_mut(id)?.ionise(delta);
        Ok(())
    }

    /// Alpha-decays the atom in place and returns the emitted helium nucleus,
    /// which is not added to the molecule. Existing bonds are kept as they are.
    pub fn alpha_decay(&mut self, id: AtomId) -> Result<Atom, Error> {
        self.warn_stale_bonds(id);
        self.atom_mut(id)?.alpha_decay()
    }

    /// Beta-decays the atom in place. Existing bonds are kept as they are.
    pub fn beta_decay(&mut self, id: AtomId, kind: BetaDecay) -> Result<(), Error> {
        self.warn_stale_bonds(id);
        self.atom_mut(id)?.beta_decay(kind)
    }

    fn warn_stale_bonds(&self, id: AtomId) {
        let degree = self.atom_degree(id);
        if degree > 0 {
            warn!(
                "atom #{} decays while holding {} bond(s); they are not revalidated",
                id.index(),
                degree
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mol_with(atomic_numbers: &[usize]) -> (Mol, Vec<AtomId>) {
        let mut mol = Mol::new();
        let ids = atomic_numbers
            .iter()
            .map(|&z| mol.add_atom(Atom::new(z).unwrap()))
            .collect();
        (mol, ids)
    }

    #[test]
    fn hydrogen_molecule() {
        let (mut mol, ids) = mol_with(&[1, 1]);
        let order = mol.bond(ids[0], ids[1], 1).unwrap();
        assert_eq!(order, BondOrder::Single);
        for &id in &ids {
            let atom = mol.atom_with_idx(id).unwrap();
            assert_eq!(atom.valence_electrons().unwrap(), 2);
        }
        assert_eq!(mol.bonds(ids[0]).unwrap(), vec![(ids[1], BondOrder::Single)]);
        assert_eq!(mol.bonds(ids[1]).unwrap(), vec![(ids[0], BondOrder::Single)]);
    }

    #[test]
    fn oxygen_double_bond() {
        let (mut mol, ids) = mol_with(&[8, 8]);
        mol.bond(ids[0], ids[1], 2).unwrap();
        for &id in &ids {
            assert_eq!(mol.atom_with_idx(id).unwrap().total_electrons(), 10);
        }
        assert_eq!(mol.bond_between(ids[1], ids[0]), Some(BondOrder::Double));
    }

    #[test]
    fn extending_a_bond_adds_only_the_increment() {
        let (mut mol, ids) = mol_with(&[7, 7]);
        mol.bond(ids[0], ids[1], 1).unwrap();
        let order = mol.bond(ids[1], ids[0], 2).unwrap();
        assert_eq!(order, BondOrder::Triple);
        assert_eq!(mol.bond_count(), 1);
        for &id in &ids {
            assert_eq!(mol.atom_with_idx(id).unwrap().valence_electrons().unwrap(), 8);
        }
    }

    #[test]
    fn order_above_triple_is_rejected_untouched() {
        let (mut mol, ids) = mol_with(&[6, 6]);
        mol.bond(ids[0], ids[1], 2).unwrap();
        let before = mol.clone();

        let err = mol.bond(ids[0], ids[1], 2).unwrap_err();
        assert!(matches!(err, Error::CovalentBond(_)));
        for &id in &ids {
            assert_eq!(mol.atom_with_idx(id), before.atom_with_idx(id));
        }
        assert_eq!(mol.bond_between(ids[0], ids[1]), Some(BondOrder::Double));
    }

    #[test]
    fn invalid_increments() {
        let (mut mol, ids) = mol_with(&[6, 6]);
        assert!(matches!(mol.bond(ids[0], ids[1], 0), Err(Error::CovalentBond(_))));
        assert!(matches!(mol.bond(ids[0], ids[1], 4), Err(Error::CovalentBond(_))));
        assert!(matches!(mol.bond(ids[0], ids[0], 1), Err(Error::CovalentBond(_))));
        assert_eq!(mol.bond_count(), 0);
    }

    #[test]
    fn failure_on_either_side_leaves_both_untouched() {
        // neon has a full valence shell
        let (mut mol, ids) = mol_with(&[1, 10]);
        let before = mol.clone();
        for (a, b) in [(ids[0], ids[1]), (ids[1], ids[0])] {
            assert!(matches!(mol.bond(a, b, 1), Err(Error::CovalentBond(_))));
            for &id in &ids {
                assert_eq!(mol.atom_with_idx(id), before.atom_with_idx(id));
            }
        }
        assert_eq!(mol.bond_count(), 0);
    }

    #[test]
    fn unbond_restores_both_atoms() {
        let (mut mol, ids) = mol_with(&[8, 1]);
        let before = mol.clone();
        mol.bond(ids[0], ids[1], 1).unwrap();
        assert_eq!(mol.unbond(ids[1], ids[0]).unwrap(), Some(BondOrder::Single));
        for &id in &ids {
            assert_eq!(mol.atom_with_idx(id), before.atom_with_idx(id));
            assert!(mol.bonds(id).unwrap().is_empty());
        }
        assert_eq!(mol.unbond(ids[0], ids[1]).unwrap(), None);
    }

    #[test]
    fn bonds_are_listed_oldest_first() {
        let (mut mol, ids) = mol_with(&[6, 1, 1, 8]);
        mol.bond(ids[0], ids[2], 1).unwrap();
        mol.bond(ids[0], ids[3], 2).unwrap();
        mol.bond(ids[1], ids[0], 1).unwrap();
        assert_eq!(
            mol.bonds(ids[0]).unwrap(),
            vec![
                (ids[2], BondOrder::Single),
                (ids[3], BondOrder::Double),
                (ids[1], BondOrder::Single),
            ]
        );
        assert_eq!(mol.atom_degree(ids[0]), 3);
        assert_eq!(mol.atom_neighbors(ids[0]).count(), 3);
    }

    #[test]
    fn removing_an_atom_tears_down_its_bonds() {
        let (mut mol, ids) = mol_with(&[6, 1, 1]);
        let lone_h = mol.atom_with_idx(ids[1]).unwrap().clone();
        mol.bond(ids[0], ids[1], 1).unwrap();
        mol.bond(ids[0], ids[2], 1).unwrap();

        let carbon = mol.remove_atom(ids[0]).unwrap();
        assert_eq!(carbon.valence_electrons().unwrap(), 4);
        assert_eq!(mol.atom_count(), 2);
        assert_eq!(mol.bond_count(), 0);
        assert_eq!(mol.atom_with_idx(ids[1]), Some(&lone_h));
        assert!(matches!(mol.bonds(ids[0]), Err(Error::UnknownAtom(_))));
        assert!(matches!(mol.remove_atom(ids[0]), Err(Error::UnknownAtom(_))));
    }

    #[test]
    fn decay_keeps_bonds() {
        let (mut mol, ids) = mol_with(&[6, 1]);
        mol.bond(ids[0], ids[1], 1).unwrap();
        mol.beta_decay(ids[0], BetaDecay::Minus).unwrap();
        assert_eq!(mol.atom_with_idx(ids[0]).unwrap().symbol(), "N");
        assert_eq!(mol.bond_between(ids[0], ids[1]), Some(BondOrder::Single));

        let helium = mol.alpha_decay(ids[0]).unwrap();
        assert_eq!(helium.symbol(), "He");
        assert_eq!(mol.atom_with_idx(ids[0]).unwrap().symbol(), "B");
        assert_eq!(mol.atom_count(), 2);
    }

    #[test]
    fn ionise_through_the_registry() {
        let (mut mol, ids) = mol_with(&[17]);
        mol.ionise(ids[0], -1).unwrap();
        assert_eq!(mol.atom_with_idx(ids[0]).unwrap().charge(), -1);
        assert!(matches!(
            mol.ionise(NodeIndex::new(42), 1),
            Err(Error::UnknownAtom(42))
        ));
    }
}
