//! Dataset generation commands

use anyhow::{Context, Result};
use kycaml_core::Transaction;
use kycaml_generators::faker::ids;
use kycaml_generators::{AmlGenerator, KycGenerator};
use kycaml_reports::save_to_json;
use rand::Rng;
use tracing::info;

use crate::config::DatasetConfig;

/// Transaction batch plus one SAR over the first flagged transactions.
pub fn transactions<R: Rng>(rng: &mut R, config: &DatasetConfig) -> Result<()> {
    let generator = AmlGenerator::default();
    let customer_ids: Vec<String> = (0..config.customer_id_count)
        .map(|_| ids::uuid(rng))
        .collect();

    let transactions = generator.generate_batch_transactions(
        rng,
        &customer_ids,
        config.transaction_count,
        config.suspicious_ratio,
    )?;
    save_to_json(&transactions, &config.transactions_output).with_context(|| {
        format!(
            "failed to write transactions to {}",
            config.transactions_output.display()
        )
    })?;

    let with_indicators = transactions
        .iter()
        .filter(|t| !t.risk_indicators.is_empty())
        .count();

    let sar_input: Vec<Transaction> = transactions
        .iter()
        .filter(|t| !t.risk_indicators.is_empty())
        .take(config.sar_transaction_limit)
        .cloned()
        .collect();

    match customer_ids.first() {
        Some(customer_id) if !sar_input.is_empty() => {
            let sar =
                generator.generate_suspicious_activity_report(rng, customer_id, &sar_input)?;
            save_to_json(&[sar], &config.sar_output).with_context(|| {
                format!("failed to write SAR to {}", config.sar_output.display())
            })?;
            println!(
                "✅ SAR over {} transactions saved to {}",
                sar_input.len(),
                config.sar_output.display()
            );
        }
        _ => info!("No transactions with risk indicators, skipping SAR"),
    }

    println!(
        "✅ Generated {} transactions ({} with risk indicators) -> {}",
        transactions.len(),
        with_indicators,
        config.transactions_output.display()
    );
    Ok(())
}

pub fn pattern<R: Rng>(
    rng: &mut R,
    config: &DatasetConfig,
    pattern_type: &str,
    customer_id: Option<String>,
) -> Result<()> {
    let customer_id = customer_id.unwrap_or_else(|| ids::uuid(rng));
    let transactions = AmlGenerator::default().generate_named_pattern(
        rng,
        pattern_type,
        &customer_id,
        config.pattern_days,
    )?;

    save_to_json(&transactions, &config.pattern_output).with_context(|| {
        format!(
            "failed to write pattern to {}",
            config.pattern_output.display()
        )
    })?;
    println!(
        "✅ {} pattern: {} transactions for customer {} -> {}",
        pattern_type.to_uppercase(),
        transactions.len(),
        customer_id,
        config.pattern_output.display()
    );
    Ok(())
}

pub fn customers<R: Rng>(rng: &mut R, config: &DatasetConfig) -> Result<()> {
    let customers = KycGenerator::default().generate_batch_customers(
        rng,
        config.customer_count,
        config.individual_ratio,
    )?;

    save_to_json(&customers, &config.customers_output).with_context(|| {
        format!(
            "failed to write customers to {}",
            config.customers_output.display()
        )
    })?;

    let individuals = customers.iter().filter(|c| c.is_individual()).count();
    println!(
        "✅ Generated {} customers ({} individual, {} business) -> {}",
        customers.len(),
        individuals,
        customers.len() - individuals,
        config.customers_output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kycaml_core::{Customer, SuspiciousActivityReport};
    use kycaml_reports::load_json;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> DatasetConfig {
        DatasetConfig {
            transaction_count: 60,
            customer_id_count: 5,
            customer_count: 10,
            transactions_output: dir.path().join("tx.json"),
            sar_output: dir.path().join("sar.json"),
            pattern_output: dir.path().join("pattern.json"),
            customers_output: dir.path().join("customers.json"),
            ..DatasetConfig::default()
        }
    }

    #[test]
    fn test_transactions_command_writes_both_files() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        transactions(&mut StdRng::seed_from_u64(51), &config).unwrap();

        let txs: Vec<Transaction> = load_json(&config.transactions_output).unwrap();
        assert_eq!(txs.len(), 60);
        let sars: Vec<SuspiciousActivityReport> = load_json(&config.sar_output).unwrap();
        assert_eq!(sars.len(), 1);
        assert!(sars[0].related_transactions.len() <= 5);
    }

    #[test]
    fn test_pattern_command() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        pattern(
            &mut StdRng::seed_from_u64(52),
            &config,
            "rapid_movement",
            Some("CUST-9".to_string()),
        )
        .unwrap();
        let txs: Vec<Transaction> = load_json(&config.pattern_output).unwrap();
        assert!((3..=8).contains(&txs.len()));
        assert!(txs.iter().all(|t| t.customer_id == "CUST-9"));
    }

    #[test]
    fn test_pattern_command_unknown_type() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let result = pattern(&mut StdRng::seed_from_u64(53), &config, "LAYERING", None);
        assert!(result.is_err());
        assert!(!config.pattern_output.exists());
    }

    #[test]
    fn test_pattern_command_days_out_of_range() {
        let dir = TempDir::new().unwrap();
        let config = DatasetConfig {
            pattern_days: u32::MAX,
            ..config_in(&dir)
        };
        let result = pattern(&mut StdRng::seed_from_u64(55), &config, "STRUCTURING", None);
        assert!(result.is_err());
        assert!(!config.pattern_output.exists());
    }

    #[test]
    fn test_customers_command() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        customers(&mut StdRng::seed_from_u64(54), &config).unwrap();
        let loaded: Vec<Customer> = load_json(&config.customers_output).unwrap();
        assert_eq!(loaded.len(), 10);
        assert_eq!(loaded.iter().filter(|c| c.is_individual()).count(), 7);
    }
}
