use serde::{Deserialize, Serialize};

/// One row of the drug input table: a display name and a SMILES string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrugRecord {
    pub name: String,
    pub smiles: String,
}

impl DrugRecord {
    pub fn new(name: &str, smiles: &str) -> Self {
        Self {
            name: name.to_string(),
            smiles: smiles.to_string(),
        }
    }
}

/// The six-descriptor panel derived from a parsable SMILES string.
///
/// The panel is all-or-nothing: an unparsable SMILES yields no panel at all
/// (`Option<DrugDescriptors>` downstream), never a partially filled one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrugDescriptors {
    pub mol_weight: f64,
    pub log_p: f64,
    pub h_donors: usize,
    pub h_acceptors: usize,
    pub rotatable_bonds: usize,
    pub tpsa: f64,
}
