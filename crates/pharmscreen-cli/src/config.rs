use crate::cli::ScreenArgs;
use crate::error::{CliError, Result};
use pharmscreen::core::chem::lipinski::LipinskiRule;
use pharmscreen::workflows::screen::ScreenConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_DRUGS_PATH: &str = "drug.csv";
pub const DEFAULT_PROTEINS_PATH: &str = "proteins.fasta";
pub const DEFAULT_REPORT_PATH: &str = "output.csv";

/// The fully resolved configuration the screen command runs with.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub drugs_path: PathBuf,
    pub proteins_path: PathBuf,
    pub report_path: PathBuf,
    pub screen: ScreenConfig,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialInputsConfig {
    drugs: Option<PathBuf>,
    proteins: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    report: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialLipinskiConfig {
    max_mol_weight: Option<f64>,
    max_log_p: Option<f64>,
    max_h_donors: Option<usize>,
    max_h_acceptors: Option<usize>,
    max_rotatable_bonds: Option<usize>,
}

/// The optional TOML configuration file. Every field is optional; values
/// merge under CLI arguments and above the built-in defaults.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialScreenConfig {
    inputs: Option<PartialInputsConfig>,
    output: Option<PartialOutputConfig>,
    lipinski: Option<PartialLipinskiConfig>,
}

impl PartialScreenConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn merge_with_cli(mut self, args: &ScreenArgs) -> AppConfig {
        let inputs = self.inputs.take().unwrap_or_default();
        let output = self.output.take().unwrap_or_default();
        let rule_file = self.lipinski.take().unwrap_or_default();

        let defaults = LipinskiRule::default();
        let lipinski = LipinskiRule {
            max_mol_weight: rule_file.max_mol_weight.unwrap_or(defaults.max_mol_weight),
            max_log_p: rule_file.max_log_p.unwrap_or(defaults.max_log_p),
            max_h_donors: rule_file.max_h_donors.unwrap_or(defaults.max_h_donors),
            max_h_acceptors: rule_file.max_h_acceptors.unwrap_or(defaults.max_h_acceptors),
            max_rotatable_bonds: rule_file
                .max_rotatable_bonds
                .unwrap_or(defaults.max_rotatable_bonds),
        };

        AppConfig {
            drugs_path: args
                .drugs
                .clone()
                .or(inputs.drugs)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DRUGS_PATH)),
            proteins_path: args
                .proteins
                .clone()
                .or(inputs.proteins)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PROTEINS_PATH)),
            report_path: args
                .output
                .clone()
                .or(output.report)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_PATH)),
            screen: ScreenConfig { lipinski },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn screen_args(argv: &[&str]) -> ScreenArgs {
        let mut full = vec!["pharmscreen", "screen"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::Screen(args) => args,
            _ => panic!("expected 'screen' subcommand"),
        }
    }

    #[test]
    fn defaults_apply_without_file_or_arguments() {
        let config = PartialScreenConfig::default().merge_with_cli(&screen_args(&[]));
        assert_eq!(config.drugs_path, PathBuf::from("drug.csv"));
        assert_eq!(config.proteins_path, PathBuf::from("proteins.fasta"));
        assert_eq!(config.report_path, PathBuf::from("output.csv"));
        assert_eq!(config.screen.lipinski, LipinskiRule::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("screen.toml");
        fs::write(
            &path,
            r#"
            [inputs]
            drugs = "panel.csv"
            proteins = "targets.fasta"

            [output]
            report = "hits.csv"

            [lipinski]
            max-mol-weight = 600.0
            max-rotatable-bonds = 8
            "#,
        )
        .unwrap();

        let partial = PartialScreenConfig::from_file(&path).unwrap();
        let config = partial.merge_with_cli(&screen_args(&[]));

        assert_eq!(config.drugs_path, PathBuf::from("panel.csv"));
        assert_eq!(config.proteins_path, PathBuf::from("targets.fasta"));
        assert_eq!(config.report_path, PathBuf::from("hits.csv"));
        assert_eq!(config.screen.lipinski.max_mol_weight, 600.0);
        assert_eq!(config.screen.lipinski.max_rotatable_bonds, 8);
        // Untouched thresholds keep their defaults.
        assert_eq!(config.screen.lipinski.max_h_donors, 5);
    }

    #[test]
    fn cli_arguments_override_file_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("screen.toml");
        fs::write(&path, "[inputs]\ndrugs = \"panel.csv\"\n").unwrap();

        let partial = PartialScreenConfig::from_file(&path).unwrap();
        let config = partial.merge_with_cli(&screen_args(&["--drugs", "cli.csv"]));
        assert_eq!(config.drugs_path, PathBuf::from("cli.csv"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("screen.toml");
        fs::write(&path, "[inputs]\ndrug-table = \"x.csv\"\n").unwrap();

        let result = PartialScreenConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let result = PartialScreenConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
