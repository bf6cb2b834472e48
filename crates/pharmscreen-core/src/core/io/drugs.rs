use crate::core::models::drug::DrugRecord;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Deserialize)]
struct DrugRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "SMILES")]
    smiles: String,
}

#[derive(Debug, Error)]
pub enum DrugCsvError {
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
}

/// Read the drug input table. Requires `Name` and `SMILES` columns; extra
/// columns are ignored and surrounding whitespace is trimmed.
pub fn read_drugs(path: &Path) -> Result<Vec<DrugRecord>, DrugCsvError> {
    let to_error = |source| DrugCsvError::Csv {
        path: path.to_string_lossy().to_string(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(to_error)?;

    let mut drugs = Vec::new();
    for result in reader.deserialize::<DrugRow>() {
        let row = result.map_err(to_error)?;
        drugs.push(DrugRecord {
            name: row.name,
            smiles: row.smiles,
        });
    }
    Ok(drugs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn read_drugs_parses_valid_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("drug.csv");
        fs::write(
            &path,
            "Name,SMILES\nAspirin,CC(=O)OC1=CC=CC=C1C(=O)O\nEthanol,CCO\n",
        )
        .unwrap();

        let drugs = read_drugs(&path).unwrap();
        assert_eq!(drugs.len(), 2);
        assert_eq!(drugs[0].name, "Aspirin");
        assert_eq!(drugs[1].smiles, "CCO");
    }

    #[test]
    fn read_drugs_trims_whitespace() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("drug.csv");
        fs::write(&path, "Name, SMILES\nAspirin , CC(=O)OC1=CC=CC=C1C(=O)O\n").unwrap();

        let drugs = read_drugs(&path).unwrap();
        assert_eq!(drugs[0].name, "Aspirin");
        assert_eq!(drugs[0].smiles, "CC(=O)OC1=CC=CC=C1C(=O)O");
    }

    #[test]
    fn read_drugs_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = read_drugs(&dir.path().join("absent.csv"));
        assert!(matches!(result, Err(DrugCsvError::Csv { .. })));
    }

    #[test]
    fn read_drugs_fails_for_missing_column() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("drug.csv");
        fs::write(&path, "Name,Formula\nAspirin,C9H8O4\n").unwrap();
        assert!(matches!(read_drugs(&path), Err(DrugCsvError::Csv { .. })));
    }

    #[test]
    fn read_drugs_accepts_empty_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("drug.csv");
        fs::write(&path, "Name,SMILES\n").unwrap();
        assert!(read_drugs(&path).unwrap().is_empty());
    }
}
