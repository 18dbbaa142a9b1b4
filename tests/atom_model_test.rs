use bohrmol::{
    shells::max_shell, Atom, BetaDecay, BondOrder, Error, Mol, SubshellType,
    SubshellType::{D, F, S},
};

#[test]
fn neutral_fill_matches_atomic_number_for_every_element() {
    for z in 1..=118 {
        let atom = Atom::new(z).unwrap();
        assert_eq!(atom.total_electrons(), z, "Z={}", z);
        for n in 1..=7 {
            let shell = atom.electrons().shell(n).unwrap();
            let max = max_shell(n).unwrap();
            assert_eq!(shell.len(), max.len());
            assert!(shell.iter().zip(max).all(|(e, m)| e <= m), "Z={} shell {}", z, n);
        }
    }
}

#[test]
fn documented_exceptions() {
    let expected: [(usize, &[(usize, SubshellType, u8)]); 11] = [
        (24, &[(4, S, 1), (3, D, 5)]),
        (29, &[(4, S, 1), (3, D, 10)]),
        (41, &[(5, S, 1), (4, D, 4)]),
        (42, &[(5, S, 1), (4, D, 5)]),
        (44, &[(5, S, 1), (4, D, 7)]),
        (45, &[(5, S, 1), (4, D, 8)]),
        (46, &[(5, S, 0), (4, D, 10)]),
        (47, &[(5, S, 1), (4, D, 10)]),
        (78, &[(6, S, 1), (5, D, 9)]),
        (79, &[(6, S, 1), (5, D, 10)]),
        (103, &[(7, S, 1), (5, F, 14), (6, D, 2)]),
    ];
    for (z, overrides) in expected {
        let atom = Atom::new(z).unwrap();
        for &(n, subshell, electrons) in overrides {
            assert_eq!(
                atom.electrons().occupancy(n, subshell),
                Some(electrons),
                "Z={} {}{:?}",
                z,
                n,
                subshell
            );
        }
    }
}

#[test]
fn ionise_round_trip_on_unbonded_atoms() {
    for z in 1..=118 {
        let original = Atom::new(z).unwrap();
        for n in 1..=z as i32 {
            let mut atom = original.clone();
            atom.ionise(n);
            assert_eq!(atom.total_electrons(), z - n as usize);
            atom.ionise(-n);
            assert_eq!(atom, original, "Z={} n={}", z, n);
        }
    }
}

#[test]
fn hydrogen_and_oxygen_pairs() {
    let mut mol = Mol::new();
    let h1 = mol.add_atom(Atom::new(1).unwrap());
    let h2 = mol.add_atom(Atom::new(1).unwrap());
    mol.bond(h1, h2, 1).unwrap();
    for id in [h1, h2] {
        assert_eq!(mol.atom_with_idx(id).unwrap().valence_electrons().unwrap(), 2);
    }
    assert_eq!(mol.bonds(h1).unwrap(), vec![(h2, BondOrder::Single)]);
    assert_eq!(mol.bonds(h2).unwrap(), vec![(h1, BondOrder::Single)]);

    let o1 = mol.add_atom(Atom::from_name("Oxygen").unwrap());
    let o2 = mol.add_atom("O".parse().unwrap());
    mol.bond(o1, o2, 2).unwrap();
    for id in [o1, o2] {
        assert_eq!(mol.atom_with_idx(id).unwrap().total_electrons(), 10);
    }
}

#[test]
fn bond_then_unbond_is_a_no_op() {
    for (za, zb, k) in [(1, 1, 1), (8, 8, 2), (7, 7, 3), (6, 8, 2), (17, 1, 1)] {
        let mut mol = Mol::new();
        let a = mol.add_atom(Atom::new(za).unwrap());
        let b = mol.add_atom(Atom::new(zb).unwrap());
        let before_a = mol.atom_with_idx(a).unwrap().clone();
        let before_b = mol.atom_with_idx(b).unwrap().clone();

        mol.bond(a, b, k).unwrap();
        mol.unbond(a, b).unwrap();

        assert_eq!(mol.atom_with_idx(a), Some(&before_a));
        assert_eq!(mol.atom_with_idx(b), Some(&before_b));
        assert!(mol.bonds(a).unwrap().is_empty());
        assert!(mol.bonds(b).unwrap().is_empty());
    }
}

#[test]
fn combined_order_is_capped() {
    let mut mol = Mol::new();
    let a = mol.add_atom(Atom::new(7).unwrap());
    let b = mol.add_atom(Atom::new(7).unwrap());
    mol.bond(a, b, 3).unwrap();
    let (before_a, before_b) = (
        mol.atom_with_idx(a).unwrap().clone(),
        mol.atom_with_idx(b).unwrap().clone(),
    );

    assert!(matches!(mol.bond(a, b, 1), Err(Error::CovalentBond(_))));
    assert_eq!(mol.atom_with_idx(a), Some(&before_a));
    assert_eq!(mol.atom_with_idx(b), Some(&before_b));
    assert_eq!(mol.bond_between(a, b), Some(BondOrder::Triple));
}

#[test]
fn uranium_238_alpha_decay() {
    let mut uranium = Atom::with_neutrons(92, 146).unwrap();
    let helium = uranium.alpha_decay().unwrap();
    assert_eq!(uranium.atomic_number().get(), 90);
    assert_eq!(uranium.neutron_number(), 144);
    assert_eq!(uranium.name(), "Thorium");
    assert_eq!(helium.atomic_number().get(), 2);
    assert_eq!(helium.neutron_number(), 2);
}

#[test]
fn carbon_14_beta_minus_decay() {
    let mut carbon = Atom::with_neutrons(6, 8).unwrap();
    carbon.beta_decay(BetaDecay::Minus).unwrap();
    assert_eq!(carbon.atomic_number().get(), 7);
    assert_eq!(carbon.neutron_number(), 7);
    assert_eq!(carbon.symbol(), "N");
}

#[test]
fn empty_atom_has_no_valence_shell() {
    let mut lithium = Atom::new(3).unwrap();
    lithium.ionise(3);
    assert_eq!(lithium.valence_shell(), Err(Error::EmptyValence));

    let mut mol = Mol::new();
    let li = mol.add_atom(lithium);
    let h = mol.add_atom(Atom::new(1).unwrap());
    assert_eq!(mol.bond(li, h, 1), Err(Error::EmptyValence));
}
