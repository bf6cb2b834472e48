use crate::core::models::drug::DrugDescriptors;
use serde::{Deserialize, Serialize};

/// Rule-of-Five thresholds, including the rotatable-bond extension.
///
/// The verdict is strict: every threshold must hold simultaneously, and a
/// drug with no descriptor panel (unparsable SMILES) fails outright.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LipinskiRule {
    pub max_mol_weight: f64,
    pub max_log_p: f64,
    pub max_h_donors: usize,
    pub max_h_acceptors: usize,
    pub max_rotatable_bonds: usize,
}

impl Default for LipinskiRule {
    fn default() -> Self {
        Self {
            max_mol_weight: 500.0,
            max_log_p: 5.0,
            max_h_donors: 5,
            max_h_acceptors: 10,
            max_rotatable_bonds: 10,
        }
    }
}

impl LipinskiRule {
    pub fn evaluate(&self, descriptors: Option<&DrugDescriptors>) -> bool {
        match descriptors {
            Some(d) => {
                d.mol_weight <= self.max_mol_weight
                    && d.log_p <= self.max_log_p
                    && d.h_donors <= self.max_h_donors
                    && d.h_acceptors <= self.max_h_acceptors
                    && d.rotatable_bonds <= self.max_rotatable_bonds
            }
            None => false,
        }
    }
}
