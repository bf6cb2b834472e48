use crate::error::{CliError, Result};
use std::fs::OpenOptions;
use std::path::Path;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self},
    prelude::*,
};

/// Install the global subscriber: a compact ANSI stderr layer plus, when a
/// log file is given, a plain layer appending to it so successive runs
/// accumulate timestamped lines in the same file.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let level_filter = if quiet {
        LevelFilter::OFF
    } else {
        match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(level_filter)
        .with(stderr_layer);

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(CliError::Io)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true);

        subscriber.with(file_layer).init();
    } else {
        subscriber.init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tracing::warn;
    use tracing_subscriber::registry;

    fn file_subscriber(path: &Path) -> impl tracing::Subscriber {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .unwrap();
        registry().with(fmt::layer().with_writer(file).with_ansi(false))
    }

    #[test]
    fn file_layer_writes_log_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.log");

        tracing::subscriber::with_default(file_subscriber(&path), || {
            warn!("message for the log file");
        });

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("message for the log file"));
        assert!(content.contains("WARN"));
    }

    #[test]
    fn append_mode_preserves_previous_runs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analyser.log");

        tracing::subscriber::with_default(file_subscriber(&path), || {
            warn!("first run");
        });
        tracing::subscriber::with_default(file_subscriber(&path), || {
            warn!("second run");
        });

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("first run"));
        assert!(content.contains("second run"));
    }

    #[test]
    fn unwritable_log_file_path_propagates_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending.
        let path = dir.path().join("as_dir");
        File::create(&path).unwrap();
        let nested = path.join("nested.log");

        let result = setup_logging(0, false, Some(&nested));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
