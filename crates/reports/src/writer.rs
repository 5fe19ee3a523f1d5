//! Dataset files - arrays of records as indented JSON.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::error::ReportResult;

/// Write `records` to `path` as a pretty-printed JSON array.
///
/// Missing parent directories are created. Non-ASCII text is written as
/// UTF-8, not escaped.
pub fn save_to_json<T: Serialize, P: AsRef<Path>>(records: &[T], path: P) -> ReportResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    info!(path = %path.display(), records = records.len(), "Saved dataset");
    Ok(())
}

/// Read a JSON array written by [`save_to_json`].
pub fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> ReportResult<Vec<T>> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kycaml_core::{Customer, Transaction};
    use kycaml_generators::{AmlGenerator, KycGenerator};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    #[test]
    fn test_transactions_round_trip_count() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("aml_synthetic_transactions.json");

        let mut rng = StdRng::seed_from_u64(31);
        let ids = vec!["C-1".to_string(), "C-2".to_string()];
        let txs = AmlGenerator::default()
            .generate_batch_transactions(&mut rng, &ids, 40, 0.25)
            .unwrap();

        save_to_json(&txs, &path).unwrap();
        let loaded: Vec<Transaction> = load_json(&path).unwrap();
        assert_eq!(loaded.len(), 40);
        assert_eq!(loaded, txs);
    }

    #[test]
    fn test_customers_round_trip_count() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/out/kyc_synthetic_customers.json");

        let mut rng = StdRng::seed_from_u64(32);
        let customers = KycGenerator::default()
            .generate_batch_customers(&mut rng, 12, 0.5)
            .unwrap();

        save_to_json(&customers, &path).unwrap();
        let loaded: Vec<Customer> = load_json(&path).unwrap();
        assert_eq!(loaded.len(), 12);
        assert_eq!(loaded.iter().filter(|c| c.is_business()).count(), 6);
    }

    #[test]
    fn test_output_is_indented() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plain.json");
        save_to_json(&["München", "Zürich"], &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n  "));
        assert!(content.contains("München"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = load_json::<Transaction, _>(dir.path().join("absent.json")).unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_malformed_file_is_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "[{").unwrap();
        let err = load_json::<Transaction, _>(&path).unwrap_err();
        assert!(matches!(err, crate::ReportError::Serialization(_)));
    }
}
