//! # SAR Module
//!
//! Suspicious Activity Report: a regulatory filing that aggregates a set
//! of transactions for one customer.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::transaction::Currency;

/// Length of the look-back window covered by a SAR.
pub const ACTIVITY_PERIOD_DAYS: i64 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[serde(rename_all = "PascalCase")]
pub enum SuspiciousActivityType {
    #[strum(serialize = "Money Laundering")]
    #[serde(rename = "Money Laundering")]
    MoneyLaundering,
    #[strum(serialize = "Terrorist Financing")]
    #[serde(rename = "Terrorist Financing")]
    TerroristFinancing,
    Fraud,
    #[strum(serialize = "Tax Evasion")]
    #[serde(rename = "Tax Evasion")]
    TaxEvasion,
    #[strum(serialize = "Sanctions Violations")]
    #[serde(rename = "Sanctions Violations")]
    SanctionsViolations,
    Structuring,
    #[strum(serialize = "Identity Theft")]
    #[serde(rename = "Identity Theft")]
    IdentityTheft,
    #[strum(serialize = "Cyber Crime")]
    #[serde(rename = "Cyber Crime")]
    CyberCrime,
}

impl SuspiciousActivityType {
    pub const ALL: [SuspiciousActivityType; 8] = [
        SuspiciousActivityType::MoneyLaundering,
        SuspiciousActivityType::TerroristFinancing,
        SuspiciousActivityType::Fraud,
        SuspiciousActivityType::TaxEvasion,
        SuspiciousActivityType::SanctionsViolations,
        SuspiciousActivityType::Structuring,
        SuspiciousActivityType::IdentityTheft,
        SuspiciousActivityType::CyberCrime,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SarStatus {
    Draft,
    Filed,
    UnderReview,
    Closed,
}

impl SarStatus {
    pub const ALL: [SarStatus; 4] = [
        SarStatus::Draft,
        SarStatus::Filed,
        SarStatus::UnderReview,
        SarStatus::Closed,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstitutionRelationship {
    Customer,
    NonCustomer,
    Employee,
    Vendor,
}

impl InstitutionRelationship {
    pub const ALL: [InstitutionRelationship; 4] = [
        InstitutionRelationship::Customer,
        InstitutionRelationship::NonCustomer,
        InstitutionRelationship::Employee,
        InstitutionRelationship::Vendor,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttachmentType {
    AccountStatements,
    TransactionRecords,
    Correspondence,
    IdentificationDocs,
}

impl AttachmentType {
    pub const ALL: [AttachmentType; 4] = [
        AttachmentType::AccountStatements,
        AttachmentType::TransactionRecords,
        AttachmentType::Correspondence,
        AttachmentType::IdentificationDocs,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingInstitution {
    pub name: String,
    pub routing_number: String,
    pub address: String,
    pub contact_person: String,
    pub phone: String,
}

/// Profile of the subject of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspectInfo {
    pub name: String,
    pub account_numbers: Vec<String>,
    pub ssn_tin: String,
    pub date_of_birth: NaiveDate,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub occupation: String,
    pub relationship_to_institution: InstitutionRelationship,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityPeriod {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ActivityPeriod {
    /// Window of [`ACTIVITY_PERIOD_DAYS`] ending on the filing date.
    pub fn ending_on(filing_date: NaiveDate) -> Self {
        Self {
            start_date: filing_date - chrono::Duration::days(ACTIVITY_PERIOD_DAYS),
            end_date: filing_date,
        }
    }

    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SarAttachment {
    pub attachment_id: String,
    #[serde(rename = "type")]
    pub attachment_type: AttachmentType,
    pub filename: String,
    /// Size in KB.
    pub file_size: u32,
    pub upload_date: DateTime<Utc>,
}

/// A Suspicious Activity Report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuspiciousActivityReport {
    pub sar_id: String,
    pub filing_institution: FilingInstitution,
    pub customer_id: String,
    pub suspect_information: SuspectInfo,
    pub suspicious_activity_type: SuspiciousActivityType,
    pub activity_period: ActivityPeriod,
    /// Exact sum of the related transaction amounts.
    pub total_amount_involved: Decimal,
    pub currency: Currency,
    pub narrative_description: String,
    /// Union of originator and beneficiary countries, sorted.
    pub geographic_locations: Vec<String>,
    pub filing_date: NaiveDate,
    pub filing_institution_contact: String,
    pub law_enforcement_notification: bool,
    pub corrective_action_taken: String,
    pub status: SarStatus,
    pub related_transactions: Vec<String>,
    pub attachments: Vec<SarAttachment>,
    pub created_timestamp: DateTime<Utc>,
}
