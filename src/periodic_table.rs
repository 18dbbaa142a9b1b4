use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::atomic_data::{AtomicData, AtomicNumber};

static ELEMENT_SYMBOLS: [&str; AtomicNumber::MAX] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", //
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca", //
    "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", //
    "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", //
    "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn", //
    "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", //
    "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb", //
    "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", //
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", //
    "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm", //
    "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", //
    "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

static ELEMENT_NAMES: [&str; AtomicNumber::MAX] = [
    "Hydrogen", "Helium", "Lithium", "Beryllium", "Boron", "Carbon", "Nitrogen", "Oxygen",
    "Fluorine", "Neon", "Sodium", "Magnesium", "Aluminium", "Silicon", "Phosphorus", "Sulfur",
    "Chlorine", "Argon", "Potassium", "Calcium", "Scandium", "Titanium", "Vanadium", "Chromium",
    "Manganese", "Iron", "Cobalt", "Nickel", "Copper", "Zinc", "Gallium", "Germanium", "Arsenic",
    "Selenium", "Bromine", "Krypton", "Rubidium", "Strontium", "Yttrium", "Zirconium", "Niobium",
    "Molybdenum", "Technetium", "Ruthenium", "Rhodium", "Palladium", "Silver", "Cadmium",
    "Indium", "Tin", "Antimony", "Tellurium", "Iodine", "Xenon", "Cesium", "Barium", "Lanthanum",
    "Cerium", "Praseodymium", "Neodymium", "Promethium", "Samarium", "Europium", "Gadolinium",
    "Terbium", "Dysprosium", "Holmium", "Erbium", "Thulium", "Ytterbium", "Lutetium", "Hafnium",
    "Tantalum", "Tungsten", "Rhenium", "Osmium", "Iridium", "Platinum", "Gold", "Mercury",
    "Thallium", "Lead", "Bismuth", "Polonium", "Astatine", "Radon", "Francium", "Radium",
    "Actinium", "Thorium", "Protactinium", "Uranium", "Neptunium", "Plutonium", "Americium",
    "Curium", "Berkelium", "Californium", "Einsteinium", "Fermium", "Mendelevium", "Nobelium",
    "Lawrencium", "Rutherfordium", "Dubnium", "Seaborgium", "Bohrium", "Hassium", "Meitnerium",
    "Darmstadtium", "Roentgenium", "Copernicium", "Nihonium", "Flerovium", "Moscovium",
    "Livermorium", "Tennessine", "Oganesson",
];

static PERIODIC_TABLE: Lazy<PeriodicTable> = Lazy::new(PeriodicTable::build);

pub struct PeriodicTable {
    // index 0 holds hydrogen
    by_anum: Vec<AtomicData>,
    by_symbol: HashMap<&'static str, AtomicNumber>,
    by_name: HashMap<&'static str, AtomicNumber>,
}

impl PeriodicTable {
    pub fn get() -> &'static PeriodicTable {
        &PERIODIC_TABLE
    }

    fn build() -> PeriodicTable {
        let by_anum: Vec<AtomicData> = ELEMENT_SYMBOLS
            .iter()
            .zip(ELEMENT_NAMES.iter())
            .enumerate()
            .map(|(i, (&symb, &name))| AtomicData {
                anum: AtomicNumber(i + 1),
                symb,
                name,
            })
            .collect();
        let by_symbol = by_anum.iter().map(|d| (d.symb, d.anum)).collect();
        let by_name = by_anum.iter().map(|d| (d.name, d.anum)).collect();

        PeriodicTable {
            by_anum,
            by_symbol,
            by_name,
        }
    }
}

impl PeriodicTable {
    pub fn data(&self, atomic_number: AtomicNumber) -> &AtomicData {
        &self.by_anum[atomic_number.get() - 1]
    }

    pub fn element_symbol(&self, atomic_number: AtomicNumber) -> &'static str {
        self.data(atomic_number).symb
    }

    pub fn element_name(&self, atomic_number: AtomicNumber) -> &'static str {
        self.data(atomic_number).name
    }

    /// Exact, case-sensitive symbol lookup ("He", not "HE").
    pub fn by_symbol(&self, symbol: &str) -> Option<AtomicNumber> {
        self.by_symbol.get(symbol).copied()
    }

    /// Exact, case-sensitive name lookup ("Oxygen").
    pub fn by_name(&self, name: &str) -> Option<AtomicNumber> {
        self.by_name.get(name).copied()
    }
}
