//! Summary report over a generated dataset file

use anyhow::{Context, Result};
use kycaml_core::{Customer, Transaction};
use kycaml_reports::{
    load_json, CustomerDatasetReport, ExportFormat, ReportData, TransactionDatasetReport,
};
use std::fs;
use std::path::Path;

use crate::DatasetKind;

/// Render the summary of `input` in `format`.
pub fn render(input: &Path, kind: DatasetKind, format: ExportFormat) -> Result<String> {
    let report: Box<dyn ReportData> = match kind {
        DatasetKind::Transactions => {
            let records: Vec<Transaction> = load_json(input)
                .with_context(|| format!("failed to read transactions from {}", input.display()))?;
            Box::new(TransactionDatasetReport::new("AML Transaction Dataset", records))
        }
        DatasetKind::Customers => {
            let records: Vec<Customer> = load_json(input)
                .with_context(|| format!("failed to read customers from {}", input.display()))?;
            Box::new(CustomerDatasetReport::new("KYC Customer Dataset", records))
        }
    };
    Ok(format.exporter().export(report.as_ref()))
}

pub fn run(
    input: &Path,
    kind: DatasetKind,
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<()> {
    let rendered = render(input, kind, format)?;
    match output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            println!("✅ {} report written to {}", format, path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kycaml_generators::{AmlGenerator, KycGenerator};
    use kycaml_reports::save_to_json;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    #[test]
    fn test_transaction_summary_markdown() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("tx.json");
        let ids = vec!["C-1".to_string(), "C-2".to_string()];
        let txs = AmlGenerator::default()
            .generate_batch_transactions(&mut StdRng::seed_from_u64(61), &ids, 20, 0.5)
            .unwrap();
        save_to_json(&txs, &input).unwrap();

        let md = render(&input, DatasetKind::Transactions, ExportFormat::Markdown).unwrap();
        assert!(md.starts_with("# AML Transaction Dataset"));
        assert!(md.contains("- **Total Transactions**: 20"));
        assert!(md.contains("- **Flagged**: 10"));
    }

    #[test]
    fn test_customer_summary_csv_to_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("customers.json");
        let output = dir.path().join("customers.csv");
        let customers = KycGenerator::default()
            .generate_batch_customers(&mut StdRng::seed_from_u64(62), 8, 0.5)
            .unwrap();
        save_to_json(&customers, &input).unwrap();

        run(&input, DatasetKind::Customers, ExportFormat::Csv, Some(&output)).unwrap();
        let csv = fs::read_to_string(&output).unwrap();
        assert_eq!(csv.lines().count(), 9);
    }

    #[test]
    fn test_summary_missing_input() {
        let dir = TempDir::new().unwrap();
        let result = render(
            &dir.path().join("absent.json"),
            DatasetKind::Customers,
            ExportFormat::Json,
        );
        assert!(result.is_err());
    }
}
