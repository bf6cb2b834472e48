use crate::core::models::pair::PairRecord;
use std::path::Path;
use thiserror::Error;

/// The fixed report header, in output order.
pub const COLUMNS: [&str; 16] = [
    "Drug_Name",
    "SMILES",
    "MolWeight",
    "LogP",
    "HBD",
    "HBA",
    "RotBonds",
    "TPSA",
    "Protein_ID",
    "Protein_Length",
    "Protein_MW",
    "Aromaticity",
    "Instability",
    "pI",
    "Score",
    "Lipinski_Pass",
];

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
}

fn csv_error(path: &Path) -> impl Fn(csv::Error) -> ReportError + '_ {
    move |source| ReportError::Csv {
        path: path.to_string_lossy().to_string(),
        source,
    }
}

/// Write the screening report, overwriting any previous one. Missing drug
/// descriptor fields serialize as empty cells. The header row is written even
/// when there are no data rows.
pub fn write_report(path: &Path, rows: &[PairRecord]) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_path(path).map_err(csv_error(path))?;

    if rows.is_empty() {
        writer.write_record(COLUMNS).map_err(csv_error(path))?;
    } else {
        for row in rows {
            writer.serialize(row).map_err(csv_error(path))?;
        }
    }
    writer.flush().map_err(|e| ReportError::Csv {
        path: path.to_string_lossy().to_string(),
        source: csv::Error::from(e),
    })
}

/// Read a previously written report back into rows.
pub fn read_report(path: &Path) -> Result<Vec<PairRecord>, ReportError> {
    let mut reader = csv::Reader::from_path(path).map_err(csv_error(path))?;
    let mut rows = Vec::new();
    for result in reader.deserialize::<PairRecord>() {
        rows.push(result.map_err(csv_error(path))?);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample_row(missing_drug: bool) -> PairRecord {
        PairRecord {
            drug_name: "Aspirin".into(),
            smiles: "CC(=O)OC1=CC=CC=C1C(=O)O".into(),
            mol_weight: (!missing_drug).then_some(180.16),
            log_p: (!missing_drug).then_some(1.2),
            h_donors: (!missing_drug).then_some(1),
            h_acceptors: (!missing_drug).then_some(4),
            rotatable_bonds: (!missing_drug).then_some(3),
            tpsa: (!missing_drug).then_some(63.6),
            protein_id: "sp1".into(),
            protein_length: 20,
            protein_mw: 2395.8,
            aromaticity: 0.1,
            instability: 28.5,
            isoelectric_point: 6.82,
            score: (!missing_drug).then_some(1.23),
            lipinski_pass: !missing_drug,
        }
    }

    #[test]
    fn report_round_trips_through_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.csv");
        let rows = vec![sample_row(false), sample_row(true)];

        write_report(&path, &rows).unwrap();
        let back = read_report(&path).unwrap();
        assert_eq!(back, rows);
    }

    #[test]
    fn header_matches_fixed_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.csv");
        write_report(&path, &[sample_row(false)]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let header = content.lines().next().unwrap();
        assert_eq!(header, COLUMNS.join(","));
    }

    #[test]
    fn missing_drug_fields_serialize_as_empty_cells() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.csv");
        write_report(&path, &[sample_row(true)]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let data_line = content.lines().nth(1).unwrap();
        // MolWeight..TPSA and Score are empty; Lipinski_Pass is false.
        assert!(data_line.contains(",,,,,,"));
        assert!(data_line.ends_with(",false"));
    }

    #[test]
    fn empty_report_still_gets_a_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.csv");
        write_report(&path, &[]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim_end(), COLUMNS.join(","));
    }

    #[test]
    fn write_overwrites_previous_report() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.csv");
        write_report(&path, &[sample_row(false), sample_row(false)]).unwrap();
        write_report(&path, &[sample_row(false)]).unwrap();

        assert_eq!(read_report(&path).unwrap().len(), 1);
    }

    #[test]
    fn read_report_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let result = read_report(&dir.path().join("absent.csv"));
        assert!(matches!(result, Err(ReportError::Csv { .. })));
    }
}
