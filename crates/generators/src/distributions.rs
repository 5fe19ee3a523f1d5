//! Tagged distributions for every field whose value depends on whether a
//! transaction is suspicious.
//!
//! Each function takes a [`Profile`] and returns a value of the same type
//! for both profiles; only the distribution shifts. Record shape is decided
//! by the caller, never here.

use kycaml_core::{
    ctr_threshold, ComplianceFlags, MediaRiskCategory, PartyRiskAttributes, PartyRole,
    PepCategory, RegulatoryReporting, RiskIndicator, ScreeningStatus,
};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::catalog::{HIGH_RISK_COUNTRIES, STANDARD_COUNTRIES};
use crate::faker::pick;

/// Log-normal parameters (of the underlying normal) for normal amounts.
pub const NORMAL_AMOUNT_MU: f64 = 6.0;
pub const NORMAL_AMOUNT_SIGMA: f64 = 1.5;

/// Probability that a suspicious beneficiary sits in a high-risk country.
pub const HIGH_RISK_COUNTRY_PROBABILITY: f64 = 0.3;

/// Generation context for biased fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    Normal,
    Suspicious,
}

impl From<bool> for Profile {
    fn from(suspicious: bool) -> Self {
        if suspicious {
            Profile::Suspicious
        } else {
            Profile::Normal
        }
    }
}

impl Profile {
    pub fn is_suspicious(&self) -> bool {
        matches!(self, Profile::Suspicious)
    }
}

/// Fair coin that only gets tossed with probability `p`; false otherwise.
///
/// The effective probability of `true` is `p / 2`.
pub fn rare_coin<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    rng.gen_bool(p) && rng.gen_bool(0.5)
}

/// Uniform amount in whole-dollar bounds `[lo, hi]`, drawn in cents.
pub fn uniform_amount<R: Rng + ?Sized>(rng: &mut R, lo: i64, hi: i64) -> Decimal {
    Decimal::new(rng.gen_range(lo * 100..=hi * 100), 2)
}

// ============================================================================
// Amounts
// ============================================================================

/// Shapes a suspicious amount can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuspiciousAmount {
    /// Fixed 9,999.99, one cent under the CTR threshold.
    JustUnderThreshold,
    /// Uniform in the 9,000-9,999 structuring band.
    StructuringBand,
    /// One of a handful of round figures.
    RoundNumber,
    /// Uniform 100,000-500,000.
    Large,
}

impl SuspiciousAmount {
    pub const ALL: [SuspiciousAmount; 4] = [
        SuspiciousAmount::JustUnderThreshold,
        SuspiciousAmount::StructuringBand,
        SuspiciousAmount::RoundNumber,
        SuspiciousAmount::Large,
    ];

    pub const ROUND_NUMBERS: [i64; 5] = [5_000, 7_500, 10_000, 15_000, 25_000];

    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Decimal {
        match self {
            SuspiciousAmount::JustUnderThreshold => ctr_threshold() - min_amount(),
            SuspiciousAmount::StructuringBand => uniform_amount(rng, 9_000, 9_999),
            SuspiciousAmount::RoundNumber => {
                let value = pick(rng, &Self::ROUND_NUMBERS);
                Decimal::new(value, 0)
            }
            SuspiciousAmount::Large => uniform_amount(rng, 100_000, 500_000),
        }
    }
}

fn min_amount() -> Decimal {
    Decimal::new(1, 2)
}

/// Log-normal draw rounded to cents, floored at 0.01.
pub fn lognormal_amount<R: Rng + ?Sized>(rng: &mut R) -> Decimal {
    let z: f64 = StandardNormal.sample(rng);
    let value = (NORMAL_AMOUNT_MU + NORMAL_AMOUNT_SIGMA * z).exp();
    Decimal::from_f64(value)
        .map(|d| d.round_dp(2))
        .unwrap_or_else(min_amount)
        .max(min_amount())
}

pub fn transaction_amount<R: Rng + ?Sized>(profile: Profile, rng: &mut R) -> Decimal {
    match profile {
        Profile::Suspicious => {
            let shape = pick(rng, &SuspiciousAmount::ALL);
            shape.draw(rng)
        }
        Profile::Normal => lognormal_amount(rng),
    }
}

// ============================================================================
// Parties
// ============================================================================

/// Address country for a party. Only suspicious beneficiaries are pulled
/// toward the high-risk set.
pub fn party_country<R: Rng + ?Sized>(profile: Profile, role: PartyRole, rng: &mut R) -> &'static str {
    let biased = profile.is_suspicious() && role == PartyRole::Beneficiary;
    if biased && rng.gen_bool(HIGH_RISK_COUNTRY_PROBABILITY) {
        pick(rng, &HIGH_RISK_COUNTRIES)
    } else {
        pick(rng, &STANDARD_COUNTRIES)
    }
}

/// Suspicious-only party attributes; `None` on the normal path.
pub fn party_risk_attributes<R: Rng + ?Sized>(
    profile: Profile,
    rng: &mut R,
) -> Option<PartyRiskAttributes> {
    match profile {
        Profile::Suspicious => Some(PartyRiskAttributes {
            pep_status: rng.gen_bool(0.5),
            sanctions_hit: rare_coin(rng, 0.1),
            high_risk_customer: true,
        }),
        Profile::Normal => None,
    }
}

// ============================================================================
// Screening
// ============================================================================

pub fn sanctions_status<R: Rng + ?Sized>(profile: Profile, rng: &mut R) -> ScreeningStatus {
    if profile.is_suspicious() && rng.gen_bool(0.2) {
        ScreeningStatus::Hit
    } else {
        pick(rng, &ScreeningStatus::UNRESOLVED)
    }
}

pub fn sanctions_score<R: Rng + ?Sized>(profile: Profile, rng: &mut R) -> u8 {
    match profile {
        Profile::Suspicious => rng.gen_range(60..=100),
        Profile::Normal => rng.gen_range(0..=30),
    }
}

pub fn pep_status<R: Rng + ?Sized>(profile: Profile, rng: &mut R) -> ScreeningStatus {
    if profile.is_suspicious() && rng.gen_bool(0.15) {
        ScreeningStatus::Hit
    } else {
        ScreeningStatus::Clear
    }
}

pub fn pep_score<R: Rng + ?Sized>(profile: Profile, rng: &mut R) -> u8 {
    match profile {
        Profile::Suspicious => rng.gen_range(70..=100),
        Profile::Normal => rng.gen_range(0..=20),
    }
}

pub fn pep_category<R: Rng + ?Sized>(profile: Profile, rng: &mut R) -> Option<PepCategory> {
    match profile {
        Profile::Suspicious => PepCategory::ALL.choose(rng).copied(),
        Profile::Normal => None,
    }
}

pub fn adverse_media_status<R: Rng + ?Sized>(profile: Profile, rng: &mut R) -> ScreeningStatus {
    if profile.is_suspicious() && rng.gen_bool(0.1) {
        ScreeningStatus::Hit
    } else {
        ScreeningStatus::Clear
    }
}

pub fn articles_found<R: Rng + ?Sized>(profile: Profile, rng: &mut R) -> u8 {
    match profile {
        Profile::Suspicious => rng.gen_range(1..=5),
        Profile::Normal => 0,
    }
}

pub fn media_risk_categories(profile: Profile) -> Vec<MediaRiskCategory> {
    match profile {
        Profile::Suspicious => MediaRiskCategory::ALL.to_vec(),
        Profile::Normal => Vec::new(),
    }
}

// ============================================================================
// Indicators and flags
// ============================================================================

/// Suspicious: 2-5 distinct indicators from the catalog.
/// Normal: one minor indicator with probability 0.1, otherwise none.
pub fn risk_indicators<R: Rng + ?Sized>(profile: Profile, rng: &mut R) -> Vec<RiskIndicator> {
    match profile {
        Profile::Suspicious => {
            let count = rng.gen_range(2..=5);
            RiskIndicator::SUSPICIOUS_CATALOG
                .choose_multiple(rng, count)
                .copied()
                .collect()
        }
        Profile::Normal => {
            if rng.gen_bool(0.1) {
                RiskIndicator::MINOR.choose(rng).copied().into_iter().collect()
            } else {
                Vec::new()
            }
        }
    }
}

pub fn compliance_flags<R: Rng + ?Sized>(profile: Profile, rng: &mut R) -> ComplianceFlags {
    let suspicious = profile.is_suspicious();
    ComplianceFlags {
        ctr_required: rare_coin(rng, 0.05),
        sar_filed: suspicious && rng.gen_bool(0.5),
        enhanced_due_diligence: suspicious || rng.gen_bool(0.5),
        transaction_monitoring_alert: suspicious,
        manual_review_required: suspicious || rng.gen_bool(0.5),
        regulatory_reporting: RegulatoryReporting {
            ctr_filed: rare_coin(rng, 0.03),
            fbar_applicable: rare_coin(rng, 0.02),
            form_8300_required: rare_coin(rng, 0.01),
        },
    }
}
