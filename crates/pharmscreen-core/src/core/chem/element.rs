use phf::phf_map;

/// Chemical elements accepted by the SMILES parser.
///
/// Covers the SMILES organic subset plus the halogens and hydrogen, which is
/// the alphabet drug-like molecules are written in. Anything outside this set
/// is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Hydrogen,
    Boron,
    Carbon,
    Nitrogen,
    Oxygen,
    Fluorine,
    Phosphorus,
    Sulfur,
    Chlorine,
    Bromine,
    Iodine,
}

static BY_SYMBOL: phf::Map<&'static str, Element> = phf_map! {
    "H" => Element::Hydrogen,
    "B" => Element::Boron,
    "C" => Element::Carbon,
    "N" => Element::Nitrogen,
    "O" => Element::Oxygen,
    "F" => Element::Fluorine,
    "P" => Element::Phosphorus,
    "S" => Element::Sulfur,
    "Cl" => Element::Chlorine,
    "Br" => Element::Bromine,
    "I" => Element::Iodine,
};

impl Element {
    /// Look up an element by its symbol (case-sensitive, e.g. "Cl").
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        BY_SYMBOL.get(symbol).copied()
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Element::Hydrogen => "H",
            Element::Boron => "B",
            Element::Carbon => "C",
            Element::Nitrogen => "N",
            Element::Oxygen => "O",
            Element::Fluorine => "F",
            Element::Phosphorus => "P",
            Element::Sulfur => "S",
            Element::Chlorine => "Cl",
            Element::Bromine => "Br",
            Element::Iodine => "I",
        }
    }

    /// Standard (average) atomic weight in Daltons.
    pub fn atomic_weight(&self) -> f64 {
        match self {
            Element::Hydrogen => 1.008,
            Element::Boron => 10.811,
            Element::Carbon => 12.011,
            Element::Nitrogen => 14.007,
            Element::Oxygen => 15.999,
            Element::Fluorine => 18.998,
            Element::Phosphorus => 30.974,
            Element::Sulfur => 32.06,
            Element::Chlorine => 35.45,
            Element::Bromine => 79.904,
            Element::Iodine => 126.904,
        }
    }

    /// Default valence used to fill implicit hydrogens, before any formal
    /// charge adjustment.
    pub fn default_valence(&self) -> u8 {
        match self {
            Element::Hydrogen => 1,
            Element::Boron => 3,
            Element::Carbon => 4,
            Element::Nitrogen => 3,
            Element::Oxygen => 2,
            Element::Fluorine => 1,
            Element::Phosphorus => 3,
            Element::Sulfur => 2,
            Element::Chlorine => 1,
            Element::Bromine => 1,
            Element::Iodine => 1,
        }
    }

    /// Whether the element may be written lowercase (aromatic) in SMILES.
    pub fn supports_aromaticity(&self) -> bool {
        matches!(
            self,
            Element::Boron
                | Element::Carbon
                | Element::Nitrogen
                | Element::Oxygen
                | Element::Phosphorus
                | Element::Sulfur
        )
    }
}
