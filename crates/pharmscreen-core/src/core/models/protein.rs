use serde::{Deserialize, Serialize};

/// One FASTA record: the identifier from the header line and the raw
/// sequence with whitespace stripped. Validation and case normalization
/// happen in [`crate::core::seq`], not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProteinRecord {
    pub id: String,
    pub sequence: String,
}

impl ProteinRecord {
    pub fn new(id: &str, sequence: &str) -> Self {
        Self {
            id: id.to_string(),
            sequence: sequence.to_string(),
        }
    }
}

/// Physicochemical properties of a validated protein sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProteinDescriptors {
    pub mol_weight: f64,
    pub aromaticity: f64,
    pub instability: f64,
    pub isoelectric_point: f64,
}
