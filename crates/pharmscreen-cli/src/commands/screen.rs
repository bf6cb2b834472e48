use crate::cli::ScreenArgs;
use crate::config::PartialScreenConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use pharmscreen::core::io::{drugs, fasta, report};
use pharmscreen::workflows::{self, progress::ProgressReporter};
use tracing::{info, warn};

pub fn run(args: ScreenArgs) -> Result<()> {
    let partial = match &args.config {
        Some(path) => PartialScreenConfig::from_file(path)?,
        None => PartialScreenConfig::default(),
    };
    let config = partial.merge_with_cli(&args);

    info!("Loading drug table from {:?}", &config.drugs_path);
    let drug_records = drugs::read_drugs(&config.drugs_path).map_err(|e| CliError::FileParsing {
        path: config.drugs_path.clone(),
        source: e.into(),
    })?;

    info!("Loading protein records from {:?}", &config.proteins_path);
    let protein_records =
        fasta::read_from_path(&config.proteins_path).map_err(|e| CliError::FileParsing {
            path: config.proteins_path.clone(),
            source: e.into(),
        })?;

    println!(
        "Screening {} drug(s) against {} protein record(s)...",
        drug_records.len(),
        protein_records.len()
    );

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let outcome = workflows::screen::run(&drug_records, &protein_records, &config.screen, &reporter);

    info!(
        "Workflow finished with {} row(s); writing report to {:?}.",
        outcome.rows.len(),
        &config.report_path
    );
    report::write_report(&config.report_path, &outcome.rows).map_err(|e| CliError::FileParsing {
        path: config.report_path.clone(),
        source: e.into(),
    })?;

    if !outcome.skipped_proteins.is_empty() {
        warn!(
            "Skipped {} protein record(s) with invalid or empty sequences.",
            outcome.skipped_proteins.len()
        );
        println!(
            "  {} protein(s) skipped: {}",
            outcome.skipped_proteins.len(),
            outcome.skipped_proteins.join(", ")
        );
    }
    if !outcome.invalid_smiles.is_empty() {
        println!(
            "  {} drug(s) with unparsable SMILES (descriptors left empty): {}",
            outcome.invalid_smiles.len(),
            outcome.invalid_smiles.join(", ")
        );
    }

    println!(
        "✓ {} pairing(s) written to: {}",
        outcome.rows.len(),
        config.report_path.display()
    );

    Ok(())
}
