//! # Transaction Module
//!
//! Transaction records and the parties attached to them.
//!
//! A transaction is created once by the generator and never updated. The
//! originator and beneficiary share the same [`Party`] shape; the
//! suspicious-only attributes live in an always-present optional block so
//! that normal and suspicious records serialize to the same keys.

use crate::screening::{AmlScreening, ComplianceFlags, RiskIndicator};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Currency Transaction Report threshold in USD.
pub fn ctr_threshold() -> Decimal {
    Decimal::new(10_000, 0)
}

/// Lower bound of the structuring band just under [`ctr_threshold`].
pub fn structuring_floor() -> Decimal {
    Decimal::new(9_000, 0)
}

/// Transaction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    WireTransfer,
    AchTransfer,
    CashDeposit,
    CashWithdrawal,
    CheckDeposit,
    AtmWithdrawal,
    CardPayment,
    OnlineTransfer,
    MobilePayment,
    Cryptocurrency,
    MoneyOrder,
    TravelersCheck,
}

impl TransactionType {
    pub const ALL: [TransactionType; 12] = [
        TransactionType::WireTransfer,
        TransactionType::AchTransfer,
        TransactionType::CashDeposit,
        TransactionType::CashWithdrawal,
        TransactionType::CheckDeposit,
        TransactionType::AtmWithdrawal,
        TransactionType::CardPayment,
        TransactionType::OnlineTransfer,
        TransactionType::MobilePayment,
        TransactionType::Cryptocurrency,
        TransactionType::MoneyOrder,
        TransactionType::TravelersCheck,
    ];

    /// Cash-based instruments (relevant for CTR / structuring).
    pub fn is_cash(&self) -> bool {
        matches!(
            self,
            TransactionType::CashDeposit
                | TransactionType::CashWithdrawal
                | TransactionType::AtmWithdrawal
        )
    }
}

/// Settlement currency (ISO 4217).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Cad,
    Jpy,
    Aud,
    Chf,
    Cny,
}

impl Currency {
    pub const ALL: [Currency; 8] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Cad,
        Currency::Jpy,
        Currency::Aud,
        Currency::Chf,
        Currency::Cny,
    ];
}

/// Channel through which the transaction was initiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Channel {
    Online,
    Branch,
    Atm,
    Mobile,
    Phone,
    Api,
}

impl Channel {
    pub const ALL: [Channel; 6] = [
        Channel::Online,
        Channel::Branch,
        Channel::Atm,
        Channel::Mobile,
        Channel::Phone,
        Channel::Api,
    ];

    /// In-person channels used by smurfing runs.
    pub const IN_PERSON: [Channel; 2] = [Channel::Atm, Channel::Branch];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum ProcessingStatus {
    Completed,
    Pending,
    Failed,
    Cancelled,
}

impl ProcessingStatus {
    pub const ALL: [ProcessingStatus; 4] = [
        ProcessingStatus::Completed,
        ProcessingStatus::Pending,
        ProcessingStatus::Failed,
        ProcessingStatus::Cancelled,
    ];
}

/// ISO 20022 style payment purpose code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum PurposeCode {
    Sala,
    Pens,
    Supp,
    Trad,
    Trea,
    Loan,
    Divi,
    Roylt,
    Govn,
    Ssbe,
    Rlti,
    Intc,
    Othr,
}

impl PurposeCode {
    pub const ALL: [PurposeCode; 13] = [
        PurposeCode::Sala,
        PurposeCode::Pens,
        PurposeCode::Supp,
        PurposeCode::Trad,
        PurposeCode::Trea,
        PurposeCode::Loan,
        PurposeCode::Divi,
        PurposeCode::Roylt,
        PurposeCode::Govn,
        PurposeCode::Ssbe,
        PurposeCode::Rlti,
        PurposeCode::Intc,
        PurposeCode::Othr,
    ];
}

/// Kind of identification carried by a party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartyIdType {
    Ssn,
    Passport,
    DriversLicense,
    TaxId,
}

impl PartyIdType {
    pub const ALL: [PartyIdType; 4] = [
        PartyIdType::Ssn,
        PartyIdType::Passport,
        PartyIdType::DriversLicense,
        PartyIdType::TaxId,
    ];
}

/// Which side of the transfer a party sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PartyRole {
    Originator,
    Beneficiary,
}

/// Postal address. `country` is an ISO 3166 alpha-2 code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyIdentification {
    #[serde(rename = "type")]
    pub id_type: PartyIdType,
    pub number: String,
    pub issuing_country: String,
}

/// Attributes only drawn for parties of a suspicious transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyRiskAttributes {
    pub pep_status: bool,
    pub sanctions_hit: bool,
    pub high_risk_customer: bool,
}

/// Originator or beneficiary of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    pub account_number: String,
    pub routing_number: String,
    pub address: Address,
    pub bank_name: String,
    pub swift_code: String,
    pub identification: PartyIdentification,
    /// `None` for parties of normal transactions.
    pub risk_attributes: Option<PartyRiskAttributes>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntermediaryBank {
    pub bank_name: String,
    pub swift_code: String,
    pub country: String,
}

/// A synthetic payment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    pub customer_id: String,
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub currency: Currency,
    pub transaction_date: DateTime<Utc>,
    pub originator: Party,
    pub beneficiary: Party,
    pub intermediary_banks: Vec<IntermediaryBank>,
    pub purpose_code: PurposeCode,
    pub description: String,
    pub channel: Channel,
    pub reference_number: String,
    pub processing_status: ProcessingStatus,
    pub aml_screening: AmlScreening,
    pub risk_indicators: Vec<RiskIndicator>,
    pub compliance_flags: ComplianceFlags,
    pub created_timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Countries touched by the originator and beneficiary, in that order.
    pub fn party_countries(&self) -> [&str; 2] {
        [
            self.originator.address.country.as_str(),
            self.beneficiary.address.country.as_str(),
        ]
    }

    /// Whether the record was generated on the suspicious path.
    ///
    /// The monitoring alert flag is tied one-to-one to that path.
    pub fn is_flagged(&self) -> bool {
        self.compliance_flags.transaction_monitoring_alert
    }

    pub fn has_indicator(&self, indicator: RiskIndicator) -> bool {
        self.risk_indicators.contains(&indicator)
    }
}

/// Named multi-transaction laundering profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PatternType {
    /// Deposits kept just under the $10,000 reporting threshold.
    Structuring,
    /// Large transfers in quick succession.
    RapidMovement,
    /// Many small cash movements through in-person channels.
    Smurfing,
}

impl PatternType {
    pub const ALL: [PatternType; 3] = [
        PatternType::Structuring,
        PatternType::RapidMovement,
        PatternType::Smurfing,
    ];

    /// Indicator stamped on every transaction of the pattern.
    pub fn indicator(&self) -> RiskIndicator {
        match self {
            PatternType::Structuring => RiskIndicator::StructuringPattern,
            PatternType::RapidMovement => RiskIndicator::RapidMovementOfFunds,
            PatternType::Smurfing => RiskIndicator::SmurfingPattern,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_enum_names() {
        assert_eq!(TransactionType::WireTransfer.to_string(), "WIRE_TRANSFER");
        assert_eq!(TransactionType::TravelersCheck.to_string(), "TRAVELERS_CHECK");
        assert_eq!(Currency::Chf.to_string(), "CHF");
        assert_eq!(PurposeCode::Roylt.to_string(), "ROYLT");
        assert_eq!(PartyIdType::DriversLicense.to_string(), "DRIVERS_LICENSE");
        assert_eq!(
            serde_json::to_string(&Channel::Atm).unwrap(),
            "\"ATM\""
        );
    }

    #[test]
    fn test_pattern_type_parse() {
        assert_eq!(
            PatternType::from_str("STRUCTURING").unwrap(),
            PatternType::Structuring
        );
        assert_eq!(
            PatternType::from_str("rapid_movement").unwrap(),
            PatternType::RapidMovement
        );
        assert!(PatternType::from_str("LAYERING").is_err());
    }

    #[test]
    fn test_pattern_indicators() {
        assert_eq!(
            PatternType::Smurfing.indicator(),
            RiskIndicator::SmurfingPattern
        );
        assert_eq!(
            PatternType::Structuring.indicator(),
            RiskIndicator::StructuringPattern
        );
    }

    #[test]
    fn test_cash_types() {
        assert!(TransactionType::CashDeposit.is_cash());
        assert!(!TransactionType::WireTransfer.is_cash());
    }

    #[test]
    fn test_structuring_band_below_threshold() {
        assert!(structuring_floor() < ctr_threshold());
        assert_eq!(ctr_threshold().to_string(), "10000");
    }
}
