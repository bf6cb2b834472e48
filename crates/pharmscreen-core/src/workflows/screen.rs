use crate::core::chem::lipinski::LipinskiRule;
use crate::core::chem::{descriptors, smiles};
use crate::core::models::drug::{DrugDescriptors, DrugRecord};
use crate::core::models::pair::PairRecord;
use crate::core::models::protein::{ProteinDescriptors, ProteinRecord};
use crate::core::seq::properties;
use crate::workflows::progress::{Progress, ProgressReporter};
use tracing::{info, instrument, warn};

/// Screening parameters. The rule thresholds default to the classic
/// Rule-of-Five values with the rotatable-bond extension.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenConfig {
    pub lipinski: LipinskiRule,
}

/// The result of one screening run: the cross-product rows in drug-major
/// input order, plus what was skipped along the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenOutcome {
    pub rows: Vec<PairRecord>,
    /// Identifiers of proteins dropped for empty or non-standard sequences.
    pub skipped_proteins: Vec<String>,
    /// Names of drugs whose SMILES failed to parse (rows emitted with empty
    /// descriptor cells).
    pub invalid_smiles: Vec<String>,
}

struct ValidProtein<'a> {
    record: &'a ProteinRecord,
    length: usize,
    descriptors: ProteinDescriptors,
}

/// Run the descriptor screen over the full drug × protein cross product.
///
/// Proteins are validated once up front; a protein with an empty sequence or
/// any residue outside the 20 standard letters contributes no rows. A drug
/// with an unparsable SMILES still pairs with every valid protein, but with
/// all drug-derived cells (and the score) empty and a failing rule verdict.
#[instrument(skip_all, name = "screen_workflow")]
pub fn run(
    drugs: &[DrugRecord],
    proteins: &[ProteinRecord],
    config: &ScreenConfig,
    reporter: &ProgressReporter,
) -> ScreenOutcome {
    let mut outcome = ScreenOutcome::default();

    reporter.report(Progress::PhaseStart {
        name: "Analyzing proteins",
    });
    let valid_proteins = prepare_proteins(proteins, &mut outcome);
    reporter.report(Progress::PhaseFinish);

    info!(
        drugs = drugs.len(),
        proteins = valid_proteins.len(),
        skipped = outcome.skipped_proteins.len(),
        "Starting drug-target screen."
    );

    reporter.report(Progress::PhaseStart {
        name: "Screening pairs",
    });
    reporter.report(Progress::TaskStart {
        total_steps: drugs.len() as u64,
    });

    for drug in drugs {
        let drug_descriptors = compute_drug_descriptors(drug, &mut outcome);
        let lipinski_pass = config.lipinski.evaluate(drug_descriptors.as_ref());

        for protein in &valid_proteins {
            let score =
                interaction_score(drug_descriptors.map(|d| d.mol_weight), &protein.descriptors);
            outcome.rows.push(PairRecord::assemble(
                drug,
                drug_descriptors.as_ref(),
                protein.record,
                protein.length,
                &protein.descriptors,
                score,
                lipinski_pass,
            ));
        }
        reporter.report(Progress::TaskIncrement);
    }

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    info!(rows = outcome.rows.len(), "Screen complete.");
    outcome
}

fn prepare_proteins<'a>(
    proteins: &'a [ProteinRecord],
    outcome: &mut ScreenOutcome,
) -> Vec<ValidProtein<'a>> {
    proteins
        .iter()
        .filter_map(|record| match properties::validate(&record.sequence) {
            Ok(seq) => Some(ValidProtein {
                record,
                length: seq.len(),
                descriptors: properties::compute(&seq),
            }),
            Err(reason) => {
                warn!(
                    protein = %record.id,
                    %reason,
                    "Skipping protein due to invalid or empty sequence."
                );
                outcome.skipped_proteins.push(record.id.clone());
                None
            }
        })
        .collect()
}

fn compute_drug_descriptors(
    drug: &DrugRecord,
    outcome: &mut ScreenOutcome,
) -> Option<DrugDescriptors> {
    match smiles::parse_smiles(&drug.smiles) {
        Ok(mol) => Some(descriptors::compute(&mol)),
        Err(reason) => {
            warn!(
                drug = %drug.name,
                %reason,
                "SMILES failed to parse; descriptors recorded as missing."
            );
            outcome.invalid_smiles.push(drug.name.clone());
            None
        }
    }
}

/// Interaction score: `round(drug MW × protein pI / 1000, 2)`; absent when
/// the drug descriptors are.
fn interaction_score(drug_mw: Option<f64>, protein: &ProteinDescriptors) -> Option<f64> {
    drug_mw.map(|mw| (mw * protein.isoelectric_point / 1000.0 * 100.0).round() / 100.0)
}
