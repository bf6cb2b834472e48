use crate::core::models::protein::ProteinRecord;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FastaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: FastaParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FastaParseErrorKind {
    #[error("sequence data before the first '>' header")]
    SequenceBeforeHeader,
    #[error("header line has an empty identifier")]
    EmptyIdentifier,
}

/// Read FASTA records from a buffered reader.
///
/// The identifier is the first whitespace-delimited token after `>`;
/// the remainder of the header line (the description) is dropped. Sequence
/// lines may span multiple lines and blank lines are tolerated. Records with
/// empty sequences are returned as-is; the screening workflow treats them as
/// invalid proteins rather than a parse failure.
pub fn read_from(reader: &mut impl BufRead) -> Result<Vec<ProteinRecord>, FastaError> {
    let mut records = Vec::new();
    let mut current: Option<ProteinRecord> = None;

    for (line_num, line_res) in reader.lines().enumerate() {
        let line = line_res?;
        let line_num = line_num + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        if let Some(header) = trimmed.strip_prefix('>') {
            let id = header.split_whitespace().next().unwrap_or("");
            if id.is_empty() {
                return Err(FastaError::Parse {
                    line: line_num,
                    kind: FastaParseErrorKind::EmptyIdentifier,
                });
            }
            if let Some(record) = current.take() {
                records.push(record);
            }
            current = Some(ProteinRecord::new(id, ""));
        } else {
            match current.as_mut() {
                Some(record) => {
                    record
                        .sequence
                        .extend(trimmed.chars().filter(|c| !c.is_whitespace()));
                }
                None => {
                    return Err(FastaError::Parse {
                        line: line_num,
                        kind: FastaParseErrorKind::SequenceBeforeHeader,
                    });
                }
            }
        }
    }

    if let Some(record) = current.take() {
        records.push(record);
    }
    Ok(records)
}

/// Read FASTA records from a file path.
pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ProteinRecord>, FastaError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    read_from(&mut reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn parse(content: &str) -> Result<Vec<ProteinRecord>, FastaError> {
        read_from(&mut content.as_bytes())
    }

    #[test]
    fn single_record_parses() {
        let records = parse(">sp1\nMKTAYIAK\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "sp1");
        assert_eq!(records[0].sequence, "MKTAYIAK");
    }

    #[test]
    fn multi_line_sequences_are_joined() {
        let records = parse(">sp1\nMKTAY\nIAKQR\nQISFV\n").unwrap();
        assert_eq!(records[0].sequence, "MKTAYIAKQRQISFV");
    }

    #[test]
    fn identifier_stops_at_whitespace() {
        let records = parse(">sp|P12345|TEST Homo sapiens test protein\nMKT\n").unwrap();
        assert_eq!(records[0].id, "sp|P12345|TEST");
    }

    #[test]
    fn multiple_records_preserve_order() {
        let records = parse(">a\nMK\n>b\nTA\n>c\nYI\n").unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn blank_lines_are_tolerated() {
        let records = parse("\n>a\n\nMK\n\n>b\nTA\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sequence, "MK");
    }

    #[test]
    fn empty_sequence_record_is_kept() {
        let records = parse(">empty\n>b\nTA\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sequence, "");
    }

    #[test]
    fn sequence_before_header_is_an_error() {
        let result = parse("MKTA\n>late\nMK\n");
        assert!(matches!(
            result,
            Err(FastaError::Parse {
                line: 1,
                kind: FastaParseErrorKind::SequenceBeforeHeader,
            })
        ));
    }

    #[test]
    fn empty_identifier_is_an_error() {
        let result = parse(">\nMK\n");
        assert!(matches!(
            result,
            Err(FastaError::Parse {
                line: 1,
                kind: FastaParseErrorKind::EmptyIdentifier,
            })
        ));
    }

    #[test]
    fn empty_input_yields_no_records() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn read_from_path_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("proteins.fasta");
        fs::write(&path, ">sp1 description\nMKTAYIAK\nQRQISFVK\n").unwrap();

        let records = read_from_path(&path).unwrap();
        assert_eq!(records[0].id, "sp1");
        assert_eq!(records[0].sequence, "MKTAYIAKQRQISFVK");
    }

    #[test]
    fn read_from_path_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = read_from_path(dir.path().join("absent.fasta"));
        assert!(matches!(result, Err(FastaError::Io(_))));
    }
}
