//! Dataset configuration
//!
//! Defaults reproduce the reference dataset (500 transactions at 15%
//! suspicious over 50 customers, 50 KYC profiles at 70% individuals).
//! Any field can be overridden from a JSON file; command-line flags
//! override both.

use kycaml_core::{ensure_ratio, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    // === Transactions ===
    #[serde(default = "default_transaction_count")]
    pub transaction_count: usize,

    #[serde(default = "default_suspicious_ratio")]
    pub suspicious_ratio: f64,

    /// Number of synthetic customer ids transactions are spread over.
    #[serde(default = "default_customer_id_count")]
    pub customer_id_count: usize,

    /// Upper bound on transactions folded into the sample SAR.
    #[serde(default = "default_sar_transaction_limit")]
    pub sar_transaction_limit: usize,

    #[serde(default = "default_pattern_days")]
    pub pattern_days: u32,

    // === Customers ===
    #[serde(default = "default_customer_count")]
    pub customer_count: usize,

    #[serde(default = "default_individual_ratio")]
    pub individual_ratio: f64,

    // === Output files ===
    #[serde(default = "default_transactions_output")]
    pub transactions_output: PathBuf,

    #[serde(default = "default_sar_output")]
    pub sar_output: PathBuf,

    #[serde(default = "default_pattern_output")]
    pub pattern_output: PathBuf,

    #[serde(default = "default_customers_output")]
    pub customers_output: PathBuf,
}

fn default_transaction_count() -> usize {
    500
}

fn default_suspicious_ratio() -> f64 {
    0.15
}

fn default_customer_id_count() -> usize {
    50
}

fn default_sar_transaction_limit() -> usize {
    5
}

fn default_pattern_days() -> u32 {
    30
}

fn default_customer_count() -> usize {
    50
}

fn default_individual_ratio() -> f64 {
    0.7
}

fn default_transactions_output() -> PathBuf {
    PathBuf::from("aml_synthetic_transactions.json")
}

fn default_sar_output() -> PathBuf {
    PathBuf::from("sample_sar_reports.json")
}

fn default_pattern_output() -> PathBuf {
    PathBuf::from("transaction_pattern.json")
}

fn default_customers_output() -> PathBuf {
    PathBuf::from("kyc_synthetic_customers.json")
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            transaction_count: default_transaction_count(),
            suspicious_ratio: default_suspicious_ratio(),
            customer_id_count: default_customer_id_count(),
            sar_transaction_limit: default_sar_transaction_limit(),
            pattern_days: default_pattern_days(),
            customer_count: default_customer_count(),
            individual_ratio: default_individual_ratio(),
            transactions_output: default_transactions_output(),
            sar_output: default_sar_output(),
            pattern_output: default_pattern_output(),
            customers_output: default_customers_output(),
        }
    }
}

impl DatasetConfig {
    /// Load configuration from a JSON file. Missing fields take defaults.
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Reject ratios outside `[0, 1]`.
    pub fn validate(&self) -> CoreResult<()> {
        ensure_ratio("suspicious_ratio", self.suspicious_ratio)?;
        ensure_ratio("individual_ratio", self.individual_ratio)
    }
}
