//! Shared application state for the web front-end.

use std::path::PathBuf;
use std::sync::Arc;

/// Shared state injected into every Axum handler.
///
/// Each run overwrites the same fixed filenames under `work_dir`, mirroring
/// the one-shot batch contract of the analyser itself; concurrent runs race
/// on those names and are not coordinated.
#[derive(Debug, Clone)]
pub struct AppState {
    pub work_dir: PathBuf,
    pub analyser_bin: PathBuf,
}

impl AppState {
    pub fn new(work_dir: PathBuf, analyser_bin: PathBuf) -> Self {
        Self {
            work_dir,
            analyser_bin,
        }
    }

    pub fn drugs_path(&self) -> PathBuf {
        self.work_dir.join("drug.csv")
    }

    pub fn proteins_path(&self) -> PathBuf {
        self.work_dir.join("proteins.fasta")
    }

    pub fn report_path(&self) -> PathBuf {
        self.work_dir.join("output.csv")
    }

    pub fn log_path(&self) -> PathBuf {
        self.work_dir.join("analyser.log")
    }
}

pub type SharedState = Arc<AppState>;
