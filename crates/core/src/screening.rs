//! # Screening Module
//!
//! AML screening results, risk indicators and compliance flags attached
//! to every transaction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Outcome of a single screening sub-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum ScreeningStatus {
    Clear,
    Pending,
    Hit,
}

impl ScreeningStatus {
    pub const ALL: [ScreeningStatus; 3] = [
        ScreeningStatus::Clear,
        ScreeningStatus::Pending,
        ScreeningStatus::Hit,
    ];

    /// Non-hit outcomes of a sanctions list lookup.
    pub const UNRESOLVED: [ScreeningStatus; 2] = [ScreeningStatus::Clear, ScreeningStatus::Pending];

    pub fn is_hit(&self) -> bool {
        matches!(self, ScreeningStatus::Hit)
    }
}

/// Sanctions lists checked by the sanctions screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SanctionsList {
    #[strum(serialize = "OFAC_SDN")]
    #[serde(rename = "OFAC_SDN")]
    OfacSdn,
    #[strum(serialize = "UN_1267")]
    #[serde(rename = "UN_1267")]
    Un1267,
    EuSanctions,
    HmtSanctions,
}

impl SanctionsList {
    pub const ALL: [SanctionsList; 4] = [
        SanctionsList::OfacSdn,
        SanctionsList::Un1267,
        SanctionsList::EuSanctions,
        SanctionsList::HmtSanctions,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum PepCategory {
    Domestic,
    Foreign,
    International,
}

impl PepCategory {
    pub const ALL: [PepCategory; 3] = [
        PepCategory::Domestic,
        PepCategory::Foreign,
        PepCategory::International,
    ];
}

/// Adverse media topics reported for suspicious parties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaRiskCategory {
    FinancialCrime,
    Corruption,
    Terrorism,
}

impl MediaRiskCategory {
    pub const ALL: [MediaRiskCategory; 3] = [
        MediaRiskCategory::FinancialCrime,
        MediaRiskCategory::Corruption,
        MediaRiskCategory::Terrorism,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanctionsScreening {
    pub status: ScreeningStatus,
    pub lists_checked: Vec<SanctionsList>,
    pub match_score: u8,
    pub screening_timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PepScreening {
    pub status: ScreeningStatus,
    pub match_score: u8,
    pub pep_category: Option<PepCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdverseMediaScreening {
    pub status: ScreeningStatus,
    pub articles_found: u8,
    pub risk_categories: Vec<MediaRiskCategory>,
}

/// The three independent screening sub-checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmlScreening {
    pub sanctions_screening: SanctionsScreening,
    pub pep_screening: PepScreening,
    pub adverse_media: AdverseMediaScreening,
}

impl AmlScreening {
    pub fn any_hit(&self) -> bool {
        self.sanctions_screening.status.is_hit()
            || self.pep_screening.status.is_hit()
            || self.adverse_media.status.is_hit()
    }
}

/// Risk indicator attached to a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskIndicator {
    // === Suspicious catalog ===
    UnusualTransactionPattern,
    HighVolumeLowValue,
    RapidMovementOfFunds,
    CashIntensiveBusiness,
    HighRiskGeography,
    ShellCompanyInvolvement,
    RoundDollarAmounts,
    StructuringPattern,
    UnusualTiming,
    InconsistentBusinessActivity,

    // === Minor indicators on normal traffic ===
    LargeAmount,
    InternationalTransfer,

    // === Pattern-only ===
    SmurfingPattern,
}

impl RiskIndicator {
    /// Catalog sampled (without replacement) for suspicious transactions.
    pub const SUSPICIOUS_CATALOG: [RiskIndicator; 10] = [
        RiskIndicator::UnusualTransactionPattern,
        RiskIndicator::HighVolumeLowValue,
        RiskIndicator::RapidMovementOfFunds,
        RiskIndicator::CashIntensiveBusiness,
        RiskIndicator::HighRiskGeography,
        RiskIndicator::ShellCompanyInvolvement,
        RiskIndicator::RoundDollarAmounts,
        RiskIndicator::StructuringPattern,
        RiskIndicator::UnusualTiming,
        RiskIndicator::InconsistentBusinessActivity,
    ];

    /// Indicators that occasionally show up on normal transactions.
    pub const MINOR: [RiskIndicator; 2] = [
        RiskIndicator::LargeAmount,
        RiskIndicator::InternationalTransfer,
    ];

    pub fn is_suspicious_catalog(&self) -> bool {
        Self::SUSPICIOUS_CATALOG.contains(self)
    }
}

/// Regulatory filings that may apply to a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegulatoryReporting {
    pub ctr_filed: bool,
    pub fbar_applicable: bool,
    pub form_8300_required: bool,
}

/// Derived compliance booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComplianceFlags {
    pub ctr_required: bool,
    pub sar_filed: bool,
    pub enhanced_due_diligence: bool,
    pub transaction_monitoring_alert: bool,
    pub manual_review_required: bool,
    pub regulatory_reporting: RegulatoryReporting,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_is_distinct() {
        let set: HashSet<_> = RiskIndicator::SUSPICIOUS_CATALOG.iter().collect();
        assert_eq!(set.len(), RiskIndicator::SUSPICIOUS_CATALOG.len());
        assert!(!RiskIndicator::SmurfingPattern.is_suspicious_catalog());
        assert!(!RiskIndicator::LargeAmount.is_suspicious_catalog());
    }

    #[test]
    fn test_sanctions_list_names() {
        assert_eq!(SanctionsList::OfacSdn.to_string(), "OFAC_SDN");
        assert_eq!(SanctionsList::Un1267.to_string(), "UN_1267");
        assert_eq!(
            serde_json::to_string(&SanctionsList::Un1267).unwrap(),
            "\"UN_1267\""
        );
        assert_eq!(
            serde_json::to_string(&SanctionsList::EuSanctions).unwrap(),
            "\"EU_SANCTIONS\""
        );
    }

    #[test]
    fn test_screening_hit() {
        let screening = AmlScreening {
            sanctions_screening: SanctionsScreening {
                status: ScreeningStatus::Pending,
                lists_checked: SanctionsList::ALL.to_vec(),
                match_score: 12,
                screening_timestamp: Utc::now(),
            },
            pep_screening: PepScreening {
                status: ScreeningStatus::Hit,
                match_score: 85,
                pep_category: Some(PepCategory::Foreign),
            },
            adverse_media: AdverseMediaScreening {
                status: ScreeningStatus::Clear,
                articles_found: 0,
                risk_categories: vec![],
            },
        };
        assert!(screening.any_hit());
    }

    #[test]
    fn test_indicator_roundtrip_name() {
        assert_eq!(
            RiskIndicator::InconsistentBusinessActivity.to_string(),
            "INCONSISTENT_BUSINESS_ACTIVITY"
        );
    }
}
