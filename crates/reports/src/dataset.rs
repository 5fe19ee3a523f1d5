//! Summary reports over generated datasets.

use chrono::{DateTime, Utc};
use kycaml_core::{ctr_threshold, structuring_floor, Customer, RiskLevel, Transaction};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::exporters::ReportData;

// ============================================================================
// Transactions
// ============================================================================

/// One row per transaction.
#[derive(Debug, Clone)]
pub struct TransactionDatasetReport {
    pub title: String,
    pub transactions: Vec<Transaction>,
    pub generated_at: DateTime<Utc>,
}

impl TransactionDatasetReport {
    pub fn new(title: &str, transactions: Vec<Transaction>) -> Self {
        Self {
            title: title.to_string(),
            transactions,
            generated_at: Utc::now(),
        }
    }

    pub fn flagged_count(&self) -> usize {
        self.transactions.iter().filter(|t| t.is_flagged()).count()
    }

    /// Amounts in `[9000, 10000)`, the structuring band.
    pub fn near_threshold_count(&self) -> usize {
        self.transactions
            .iter()
            .filter(|t| t.amount >= structuring_floor() && t.amount < ctr_threshold())
            .count()
    }

    /// Cash deposits and withdrawals, the instruments a CTR applies to.
    pub fn cash_count(&self) -> usize {
        self.transactions
            .iter()
            .filter(|t| t.transaction_type.is_cash())
            .count()
    }

    pub fn screening_hit_count(&self) -> usize {
        self.transactions
            .iter()
            .filter(|t| t.aml_screening.any_hit())
            .count()
    }

    /// Total amount per currency code.
    pub fn totals_by_currency(&self) -> BTreeMap<String, Decimal> {
        let mut totals = BTreeMap::new();
        for tx in &self.transactions {
            *totals.entry(tx.currency.to_string()).or_insert(Decimal::ZERO) += tx.amount;
        }
        totals
    }
}

impl ReportData for TransactionDatasetReport {
    fn title(&self) -> &str {
        &self.title
    }

    fn headers(&self) -> Vec<String> {
        [
            "Transaction ID",
            "Customer",
            "Type",
            "Amount",
            "Currency",
            "Beneficiary Country",
            "Indicators",
            "Alert",
        ]
        .iter()
        .map(|h| h.to_string())
        .collect()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.transactions
            .iter()
            .map(|t| {
                vec![
                    t.transaction_id.clone(),
                    t.customer_id.clone(),
                    t.transaction_type.to_string(),
                    t.amount.to_string(),
                    t.currency.to_string(),
                    t.beneficiary.address.country.clone(),
                    t.risk_indicators.len().to_string(),
                    if t.is_flagged() { "yes" } else { "no" }.to_string(),
                ]
            })
            .collect()
    }

    fn summary(&self) -> Vec<(String, String)> {
        let total = self.transactions.len();
        let flagged = self.flagged_count();
        let mut summary = vec![
            ("Total Transactions".to_string(), total.to_string()),
            ("Flagged".to_string(), flagged.to_string()),
            ("Normal".to_string(), (total - flagged).to_string()),
            (
                "Near CTR Threshold".to_string(),
                self.near_threshold_count().to_string(),
            ),
            ("Cash Transactions".to_string(), self.cash_count().to_string()),
            (
                "Screening Hits".to_string(),
                self.screening_hit_count().to_string(),
            ),
        ];
        for (currency, amount) in self.totals_by_currency() {
            summary.push((format!("Total {}", currency), amount.to_string()));
        }
        summary.push(("Generated At".to_string(), self.generated_at.to_rfc3339()));
        summary
    }
}

// ============================================================================
// Customers
// ============================================================================

/// One row per customer.
#[derive(Debug, Clone)]
pub struct CustomerDatasetReport {
    pub title: String,
    pub customers: Vec<Customer>,
    pub generated_at: DateTime<Utc>,
}

impl CustomerDatasetReport {
    pub fn new(title: &str, customers: Vec<Customer>) -> Self {
        Self {
            title: title.to_string(),
            customers,
            generated_at: Utc::now(),
        }
    }

    pub fn count_by_risk_level(&self, level: RiskLevel) -> usize {
        self.customers
            .iter()
            .filter(|c| c.risk_level() == level)
            .count()
    }

    /// Mean risk score rounded to one decimal; zero for an empty dataset.
    pub fn average_risk_score(&self) -> Decimal {
        if self.customers.is_empty() {
            return Decimal::ZERO;
        }
        let sum: Decimal = self
            .customers
            .iter()
            .map(|c| Decimal::from(c.risk_score()))
            .sum();
        (sum / Decimal::from(self.customers.len())).round_dp(1)
    }

    /// Business customers with at least one PEP beneficial owner.
    pub fn pep_owned_business_count(&self) -> usize {
        self.customers
            .iter()
            .filter(|c| matches!(c, Customer::Business(b) if b.has_pep_owner()))
            .count()
    }
}

impl ReportData for CustomerDatasetReport {
    fn title(&self) -> &str {
        &self.title
    }

    fn headers(&self) -> Vec<String> {
        [
            "Customer ID",
            "Type",
            "Name",
            "Country",
            "Risk Level",
            "Risk Score",
            "KYC Status",
        ]
        .iter()
        .map(|h| h.to_string())
        .collect()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.customers
            .iter()
            .map(|c| {
                vec![
                    c.customer_id().to_string(),
                    c.customer_type().to_string(),
                    c.display_name(),
                    c.country().to_string(),
                    c.risk_level().to_string(),
                    c.risk_score().to_string(),
                    c.kyc_status().status.to_string(),
                ]
            })
            .collect()
    }

    fn summary(&self) -> Vec<(String, String)> {
        let individuals = self.customers.iter().filter(|c| c.is_individual()).count();
        let mut summary = vec![
            ("Total Customers".to_string(), self.customers.len().to_string()),
            ("Individuals".to_string(), individuals.to_string()),
            (
                "Businesses".to_string(),
                (self.customers.len() - individuals).to_string(),
            ),
            (
                "PEP-Owned Businesses".to_string(),
                self.pep_owned_business_count().to_string(),
            ),
        ];
        for level in RiskLevel::ALL {
            summary.push((
                format!("Risk {}", level),
                self.count_by_risk_level(level).to_string(),
            ));
        }
        summary.push((
            "Average Risk Score".to_string(),
            self.average_risk_score().to_string(),
        ));
        summary.push(("Generated At".to_string(), self.generated_at.to_rfc3339()));
        summary
    }
}
