use super::drug::{DrugDescriptors, DrugRecord};
use super::protein::{ProteinDescriptors, ProteinRecord};
use serde::{Deserialize, Serialize};

/// One output row of the screen: the full descriptor panel of a
/// (drug, protein) pairing plus the interaction score and the Rule-of-Five
/// verdict.
///
/// Serde field renames pin the 16-column report header. Drug-side fields are
/// `Option` and serialize as empty CSV cells when the SMILES was unparsable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairRecord {
    #[serde(rename = "Drug_Name")]
    pub drug_name: String,
    #[serde(rename = "SMILES")]
    pub smiles: String,
    #[serde(rename = "MolWeight")]
    pub mol_weight: Option<f64>,
    #[serde(rename = "LogP")]
    pub log_p: Option<f64>,
    #[serde(rename = "HBD")]
    pub h_donors: Option<usize>,
    #[serde(rename = "HBA")]
    pub h_acceptors: Option<usize>,
    #[serde(rename = "RotBonds")]
    pub rotatable_bonds: Option<usize>,
    #[serde(rename = "TPSA")]
    pub tpsa: Option<f64>,
    #[serde(rename = "Protein_ID")]
    pub protein_id: String,
    #[serde(rename = "Protein_Length")]
    pub protein_length: usize,
    #[serde(rename = "Protein_MW")]
    pub protein_mw: f64,
    #[serde(rename = "Aromaticity")]
    pub aromaticity: f64,
    #[serde(rename = "Instability")]
    pub instability: f64,
    #[serde(rename = "pI")]
    pub isoelectric_point: f64,
    #[serde(rename = "Score")]
    pub score: Option<f64>,
    #[serde(rename = "Lipinski_Pass")]
    pub lipinski_pass: bool,
}

impl PairRecord {
    /// Assemble a row from the per-entity pieces. `score` is the caller's
    /// responsibility so that its missing-input rule lives in one place
    /// (the screening workflow).
    #[allow(clippy::too_many_arguments)]
    pub fn assemble(
        drug: &DrugRecord,
        drug_descriptors: Option<&DrugDescriptors>,
        protein: &ProteinRecord,
        protein_length: usize,
        protein_descriptors: &ProteinDescriptors,
        score: Option<f64>,
        lipinski_pass: bool,
    ) -> Self {
        Self {
            drug_name: drug.name.clone(),
            smiles: drug.smiles.clone(),
            mol_weight: drug_descriptors.map(|d| d.mol_weight),
            log_p: drug_descriptors.map(|d| d.log_p),
            h_donors: drug_descriptors.map(|d| d.h_donors),
            h_acceptors: drug_descriptors.map(|d| d.h_acceptors),
            rotatable_bonds: drug_descriptors.map(|d| d.rotatable_bonds),
            tpsa: drug_descriptors.map(|d| d.tpsa),
            protein_id: protein.id.clone(),
            protein_length,
            protein_mw: protein_descriptors.mol_weight,
            aromaticity: protein_descriptors.aromaticity,
            instability: protein_descriptors.instability,
            isoelectric_point: protein_descriptors.isoelectric_point,
            score,
            lipinski_pass,
        }
    }
}
