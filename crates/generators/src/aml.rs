//! # AML Generator
//!
//! Synthetic transactions, laundering patterns and Suspicious Activity
//! Reports.
//!
//! Every field that depends on suspicion goes through [`crate::distributions`]
//! so normal and suspicious records share one shape.

use chrono::{DateTime, Duration, Utc};
use kycaml_core::{
    ActivityPeriod, Address, AdverseMediaScreening, AmlScreening, AttachmentType, Channel,
    CoreError, CoreResult, Currency, FilingInstitution, InstitutionRelationship,
    IntermediaryBank, Party, PartyIdType, PartyIdentification, PartyRole, PatternType,
    PepScreening, ProcessingStatus, PurposeCode, SanctionsList, SanctionsScreening, SarAttachment,
    SarStatus, SuspectInfo, SuspiciousActivityReport, SuspiciousActivityType, Transaction,
    TransactionType,
};
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use tracing::{debug, info};

use crate::catalog::{BANKS, SAR_NARRATIVES, STANDARD_COUNTRIES};
use crate::distributions::{self as dist, Profile};
use crate::faker::{dates, ids, pick, text, FakeDataProvider, Locale, LocaleRegistry};

/// Transactions are dated within this many days before `now`.
pub const TRANSACTION_WINDOW_DAYS: i64 = 90;

/// SARs are filed within this many days before `now`.
pub const SAR_FILING_WINDOW_DAYS: i64 = 30;

/// Probability that a transaction routes through intermediary banks.
pub const INTERMEDIARY_PROBABILITY: f64 = 0.3;

/// Generator for AML transaction data.
#[derive(Debug)]
pub struct AmlGenerator {
    registry: LocaleRegistry,
    now: DateTime<Utc>,
}

impl Default for AmlGenerator {
    fn default() -> Self {
        Self::new(LocaleRegistry::default())
    }
}

impl AmlGenerator {
    pub fn new(registry: LocaleRegistry) -> Self {
        Self {
            registry,
            now: Utc::now(),
        }
    }

    /// Pin the reference instant all relative dates are computed from.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Party names and addresses always use the US provider.
    fn faker(&self) -> &dyn FakeDataProvider {
        self.registry.get(Locale::Us)
    }

    // ========================================================================
    // Transactions
    // ========================================================================

    /// Generate one transaction. A missing customer id gets a fresh UUID.
    pub fn generate_transaction<R: Rng>(
        &self,
        rng: &mut R,
        customer_id: Option<&str>,
        suspicious: bool,
    ) -> Transaction {
        let profile = Profile::from(suspicious);
        let transaction_id = ids::uuid(rng);
        let customer_id = match customer_id {
            Some(id) => id.to_string(),
            None => ids::uuid(rng),
        };

        let amount = dist::transaction_amount(profile, rng);
        let transaction_date = dates::datetime_within_days(rng, self.now, TRANSACTION_WINDOW_DAYS);

        // Originators are never biased; only the beneficiary carries the profile.
        let originator = self.party(rng, PartyRole::Originator, Profile::Normal);
        let beneficiary = self.party(rng, PartyRole::Beneficiary, profile);

        Transaction {
            transaction_id,
            customer_id,
            transaction_type: pick(rng, &TransactionType::ALL),
            amount,
            currency: pick(rng, &Currency::ALL),
            transaction_date,
            originator,
            beneficiary,
            intermediary_banks: self.intermediary_banks(rng),
            purpose_code: pick(rng, &PurposeCode::ALL),
            description: text::sentence(rng),
            channel: pick(rng, &Channel::ALL),
            reference_number: ids::bothify(rng, "TXN-####-????-####"),
            processing_status: pick(rng, &ProcessingStatus::ALL),
            aml_screening: self.screening(rng, profile),
            risk_indicators: dist::risk_indicators(profile, rng),
            compliance_flags: dist::compliance_flags(profile, rng),
            created_timestamp: self.now,
        }
    }

    fn party<R: Rng>(&self, rng: &mut R, role: PartyRole, profile: Profile) -> Party {
        let faker = self.faker();
        let name = match role {
            PartyRole::Originator => faker.name(rng),
            PartyRole::Beneficiary => faker.company(rng),
        };
        let account_number = ids::bban(rng);
        let routing_number = ids::aba(rng);
        let address = Address {
            street: faker.street_address(rng),
            city: faker.city(rng),
            state: faker.state(rng),
            country: dist::party_country(profile, role, rng).to_string(),
            postal_code: faker.postcode(rng),
        };
        let bank_name = pick(rng, &BANKS).to_string();
        let swift_code = ids::swift(rng, &address.country);
        let identification = PartyIdentification {
            id_type: pick(rng, &PartyIdType::ALL),
            number: ids::ssn(rng),
            issuing_country: pick(rng, &STANDARD_COUNTRIES).to_string(),
        };

        Party {
            name,
            account_number,
            routing_number,
            address,
            bank_name,
            swift_code,
            identification,
            risk_attributes: dist::party_risk_attributes(profile, rng),
        }
    }

    fn intermediary_banks<R: Rng>(&self, rng: &mut R) -> Vec<IntermediaryBank> {
        if !rng.gen_bool(INTERMEDIARY_PROBABILITY) {
            return Vec::new();
        }
        let count = rng.gen_range(1..=2);
        (0..count)
            .map(|_| {
                let country = pick(rng, &STANDARD_COUNTRIES).to_string();
                IntermediaryBank {
                    bank_name: pick(rng, &BANKS).to_string(),
                    swift_code: ids::swift(rng, &country),
                    country,
                }
            })
            .collect()
    }

    fn screening<R: Rng>(&self, rng: &mut R, profile: Profile) -> AmlScreening {
        AmlScreening {
            sanctions_screening: SanctionsScreening {
                status: dist::sanctions_status(profile, rng),
                lists_checked: SanctionsList::ALL.to_vec(),
                match_score: dist::sanctions_score(profile, rng),
                screening_timestamp: self.now,
            },
            pep_screening: PepScreening {
                status: dist::pep_status(profile, rng),
                match_score: dist::pep_score(profile, rng),
                pep_category: dist::pep_category(profile, rng),
            },
            adverse_media: AdverseMediaScreening {
                status: dist::adverse_media_status(profile, rng),
                articles_found: dist::articles_found(profile, rng),
                risk_categories: dist::media_risk_categories(profile),
            },
        }
    }

    // ========================================================================
    // Patterns
    // ========================================================================

    /// Generate a series of suspicious transactions following `pattern`.
    ///
    /// The base instant is `now - days`. Each transaction is generated
    /// suspicious, then its amount and date (and channel for smurfing) are
    /// overwritten and the pattern indicator appended when missing.
    ///
    /// Fails with `InvalidArgument` when `now - days` is outside the
    /// representable date range.
    pub fn generate_transaction_pattern<R: Rng>(
        &self,
        rng: &mut R,
        pattern: PatternType,
        customer_id: &str,
        days: u32,
    ) -> CoreResult<Vec<Transaction>> {
        let days = i64::from(days);
        let base = self
            .now
            .checked_sub_signed(Duration::days(days))
            .ok_or_else(|| {
                CoreError::invalid_argument(format!(
                    "pattern window of {} days is out of range",
                    days
                ))
            })?;
        let count = match pattern {
            PatternType::Structuring => rng.gen_range(5..=15),
            PatternType::RapidMovement => rng.gen_range(3..=8),
            PatternType::Smurfing => rng.gen_range(10..=25),
        };

        let transactions: Vec<Transaction> = (0..count)
            .map(|i| {
                let mut tx = self.generate_transaction(rng, Some(customer_id), true);
                match pattern {
                    PatternType::Structuring => {
                        tx.amount = dist::uniform_amount(rng, 9_000, 9_999);
                        tx.transaction_date = base + Duration::days(rng.gen_range(0..=days));
                    }
                    PatternType::RapidMovement => {
                        tx.amount = dist::uniform_amount(rng, 50_000, 500_000);
                        let step: i64 = rng.gen_range(1..=6);
                        tx.transaction_date = base + Duration::hours(i as i64 * step);
                    }
                    PatternType::Smurfing => {
                        tx.amount = dist::uniform_amount(rng, 500, 3_000);
                        tx.transaction_date = base + Duration::days(rng.gen_range(0..=days));
                        tx.channel = pick(rng, &Channel::IN_PERSON);
                    }
                }
                let indicator = pattern.indicator();
                if !tx.has_indicator(indicator) {
                    tx.risk_indicators.push(indicator);
                }
                tx
            })
            .collect();

        debug!(
            pattern = %pattern,
            customer_id,
            count = transactions.len(),
            "Generated transaction pattern"
        );
        Ok(transactions)
    }

    /// Parse a pattern name and generate it.
    pub fn generate_named_pattern<R: Rng>(
        &self,
        rng: &mut R,
        pattern: &str,
        customer_id: &str,
        days: u32,
    ) -> CoreResult<Vec<Transaction>> {
        let pattern: PatternType = pattern.parse().map_err(|_| {
            CoreError::invalid_argument(format!("unknown pattern type: {}", pattern))
        })?;
        self.generate_transaction_pattern(rng, pattern, customer_id, days)
    }

    // ========================================================================
    // SAR
    // ========================================================================

    /// Build a SAR summarizing `transactions` for `customer_id`.
    pub fn generate_suspicious_activity_report<R: Rng>(
        &self,
        rng: &mut R,
        customer_id: &str,
        transactions: &[Transaction],
    ) -> CoreResult<SuspiciousActivityReport> {
        if transactions.is_empty() {
            return Err(CoreError::invalid_argument(
                "a SAR needs at least one transaction",
            ));
        }
        let faker = self.faker();

        let sar_id = ids::uuid(rng);
        let filing_date = dates::datetime_within_days(rng, self.now, SAR_FILING_WINDOW_DAYS)
            .date_naive();

        let filing_institution = FilingInstitution {
            name: pick(rng, &BANKS).to_string(),
            routing_number: ids::aba(rng),
            address: faker.address(rng),
            contact_person: faker.name(rng),
            phone: faker.phone_number(rng),
        };
        let suspect_information = self.suspect_info(rng);
        let suspicious_activity_type = pick(rng, &SuspiciousActivityType::ALL);
        let narrative_description = pick(rng, &SAR_NARRATIVES).to_string();

        let total_amount_involved: Decimal = transactions.iter().map(|t| t.amount).sum();
        let geographic_locations = geographic_locations(transactions);

        let sar = SuspiciousActivityReport {
            sar_id,
            filing_institution,
            customer_id: customer_id.to_string(),
            suspect_information,
            suspicious_activity_type,
            activity_period: ActivityPeriod::ending_on(filing_date),
            total_amount_involved,
            currency: Currency::Usd,
            narrative_description,
            geographic_locations,
            filing_date,
            filing_institution_contact: faker.name(rng),
            law_enforcement_notification: rng.gen_bool(0.5),
            corrective_action_taken: text::text(rng, 200),
            status: pick(rng, &SarStatus::ALL),
            related_transactions: transactions
                .iter()
                .map(|t| t.transaction_id.clone())
                .collect(),
            attachments: self.attachments(rng),
            created_timestamp: self.now,
        };

        debug!(
            sar_id = %sar.sar_id,
            transactions = transactions.len(),
            total = %sar.total_amount_involved,
            "Generated SAR"
        );
        Ok(sar)
    }

    fn suspect_info<R: Rng>(&self, rng: &mut R) -> SuspectInfo {
        let faker = self.faker();
        let account_count = rng.gen_range(1..=3);
        SuspectInfo {
            name: faker.name(rng),
            account_numbers: (0..account_count).map(|_| ids::bban(rng)).collect(),
            ssn_tin: ids::ssn(rng),
            date_of_birth: dates::date_of_birth(rng, self.now.date_naive(), 18, 80),
            address: faker.address(rng),
            phone: faker.phone_number(rng),
            email: faker.email(rng),
            occupation: faker.job(rng),
            relationship_to_institution: pick(rng, &InstitutionRelationship::ALL),
        }
    }

    fn attachments<R: Rng>(&self, rng: &mut R) -> Vec<SarAttachment> {
        let count = rng.gen_range(2..=5);
        (0..count)
            .map(|_| {
                let attachment_id = ids::uuid(rng);
                let attachment_type = pick(rng, &AttachmentType::ALL);
                let filename = format!(
                    "{}_{}.pdf",
                    attachment_type.to_string().to_lowercase(),
                    ids::uuid(rng)
                );
                SarAttachment {
                    attachment_id,
                    attachment_type,
                    filename,
                    file_size: rng.gen_range(100..=5000),
                    upload_date: dates::datetime_within_days(rng, self.now, SAR_FILING_WINDOW_DAYS),
                }
            })
            .collect()
    }

    // ========================================================================
    // Batches
    // ========================================================================

    /// Generate `count` transactions, `floor(count * suspicious_ratio)` of
    /// them suspicious, spread uniformly over `customer_ids` and shuffled.
    pub fn generate_batch_transactions<R: Rng>(
        &self,
        rng: &mut R,
        customer_ids: &[String],
        count: usize,
        suspicious_ratio: f64,
    ) -> CoreResult<Vec<Transaction>> {
        kycaml_core::ensure_ratio("suspicious_ratio", suspicious_ratio)?;
        if customer_ids.is_empty() && count > 0 {
            return Err(CoreError::invalid_argument(
                "customer_ids must not be empty",
            ));
        }

        let suspicious_count = (count as f64 * suspicious_ratio).floor() as usize;
        let normal_count = count - suspicious_count;

        let mut transactions = Vec::with_capacity(count);
        for suspicious in std::iter::repeat(false)
            .take(normal_count)
            .chain(std::iter::repeat(true).take(suspicious_count))
        {
            let customer_id = customer_ids.choose(rng).map(String::as_str);
            transactions.push(self.generate_transaction(rng, customer_id, suspicious));
        }
        transactions.shuffle(rng);

        info!(
            total = transactions.len(),
            suspicious = suspicious_count,
            normal = normal_count,
            customers = customer_ids.len(),
            "Generated transaction batch"
        );
        Ok(transactions)
    }
}

/// Sorted set union of originator and beneficiary countries.
pub fn geographic_locations(transactions: &[Transaction]) -> Vec<String> {
    transactions
        .iter()
        .flat_map(|t| t.party_countries())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use kycaml_core::RiskIndicator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rust_decimal_macros::dec;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap()
    }

    fn generator() -> AmlGenerator {
        AmlGenerator::default().with_now(now())
    }

    #[test]
    fn test_generate_transaction_defaults() {
        let mut rng = StdRng::seed_from_u64(1);
        let tx = generator().generate_transaction(&mut rng, None, false);

        assert_eq!(tx.customer_id.len(), 36);
        assert!(tx.amount > Decimal::ZERO);
        assert!(tx.transaction_date <= now());
        assert!(tx.transaction_date >= now() - Duration::days(90));
        assert!(tx.reference_number.starts_with("TXN-"));
        assert!(tx.originator.risk_attributes.is_none());
        assert!(tx.beneficiary.risk_attributes.is_none());
        assert!(!tx.compliance_flags.transaction_monitoring_alert);
        assert_eq!(tx.aml_screening.sanctions_screening.lists_checked.len(), 4);
    }

    #[test]
    fn test_generate_transaction_suspicious() {
        let mut rng = StdRng::seed_from_u64(2);
        let gen = generator();
        for _ in 0..100 {
            let tx = gen.generate_transaction(&mut rng, Some("CUST-1"), true);
            assert_eq!(tx.customer_id, "CUST-1");
            assert!((2..=5).contains(&tx.risk_indicators.len()));
            assert!(tx.aml_screening.sanctions_screening.match_score >= 60);
            assert!(tx.aml_screening.pep_screening.pep_category.is_some());
            assert!(tx.beneficiary.risk_attributes.is_some());
            assert!(tx.originator.risk_attributes.is_none());
            assert!(tx.is_flagged());
        }
    }

    #[test]
    fn test_intermediary_banks_count() {
        let mut rng = StdRng::seed_from_u64(3);
        let gen = generator();
        let mut with_banks = 0;
        for _ in 0..300 {
            let banks = gen.intermediary_banks(&mut rng);
            assert!(banks.len() <= 2);
            if !banks.is_empty() {
                with_banks += 1;
            }
        }
        assert!(with_banks > 40 && with_banks < 150, "with banks {}", with_banks);
    }

    #[test]
    fn test_structuring_pattern() {
        let mut rng = StdRng::seed_from_u64(4);
        let txs = generator().generate_transaction_pattern(
            &mut rng,
            PatternType::Structuring,
            "CUST-S",
            30,
        )
        .unwrap();
        assert!((5..=15).contains(&txs.len()));
        let base = now() - Duration::days(30);
        for tx in &txs {
            assert!(tx.amount >= dec!(9000) && tx.amount <= dec!(9999));
            assert!(tx.transaction_date >= base && tx.transaction_date <= now());
            assert!(tx.has_indicator(RiskIndicator::StructuringPattern));
            assert_eq!(
                tx.risk_indicators
                    .iter()
                    .filter(|i| **i == RiskIndicator::StructuringPattern)
                    .count(),
                1
            );
        }
    }

    #[test]
    fn test_rapid_movement_pattern_timing() {
        let mut rng = StdRng::seed_from_u64(5);
        let txs = generator().generate_transaction_pattern(
            &mut rng,
            PatternType::RapidMovement,
            "CUST-R",
            10,
        )
        .unwrap();
        assert!((3..=8).contains(&txs.len()));
        let base = now() - Duration::days(10);
        // First transaction is always at the base instant.
        assert_eq!(txs[0].transaction_date, base);
        for (i, tx) in txs.iter().enumerate() {
            assert!(tx.amount >= dec!(50000) && tx.amount <= dec!(500000));
            let hours = (tx.transaction_date - base).num_hours();
            assert!(hours >= i as i64 && hours <= 6 * i as i64);
            assert!(tx.has_indicator(RiskIndicator::RapidMovementOfFunds));
        }
    }

    #[test]
    fn test_smurfing_pattern_channels() {
        let mut rng = StdRng::seed_from_u64(6);
        let txs = generator()
            .generate_transaction_pattern(&mut rng, PatternType::Smurfing, "CUST-M", 30)
            .unwrap();
        assert!((10..=25).contains(&txs.len()));
        for tx in &txs {
            assert!(tx.amount >= dec!(500) && tx.amount <= dec!(3000));
            assert!(Channel::IN_PERSON.contains(&tx.channel));
            assert!(tx.has_indicator(RiskIndicator::SmurfingPattern));
        }
    }

    #[test]
    fn test_pattern_zero_days() {
        let mut rng = StdRng::seed_from_u64(7);
        let txs = generator().generate_transaction_pattern(
            &mut rng,
            PatternType::Structuring,
            "CUST-Z",
            0,
        )
        .unwrap();
        assert!(txs.iter().all(|t| t.transaction_date == now()));
    }

    #[test]
    fn test_pattern_window_out_of_range() {
        let mut rng = StdRng::seed_from_u64(17);
        let gen = generator();
        let err = gen
            .generate_transaction_pattern(&mut rng, PatternType::Structuring, "CUST-X", u32::MAX)
            .unwrap_err();
        assert!(err.is_invalid_argument());

        let err = gen
            .generate_named_pattern(&mut rng, "SMURFING", "CUST-X", 200_000_000)
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_named_pattern() {
        let mut rng = StdRng::seed_from_u64(8);
        let gen = generator();
        assert!(gen
            .generate_named_pattern(&mut rng, "smurfing", "C", 5)
            .is_ok());
        let err = gen
            .generate_named_pattern(&mut rng, "LAYERING", "C", 5)
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_sar_totals_and_locations() {
        let mut rng = StdRng::seed_from_u64(9);
        let gen = generator();
        let txs: Vec<Transaction> = (0..4)
            .map(|_| gen.generate_transaction(&mut rng, Some("CUST-SAR"), true))
            .collect();
        let sar = gen
            .generate_suspicious_activity_report(&mut rng, "CUST-SAR", &txs)
            .unwrap();

        let expected: Decimal = txs.iter().map(|t| t.amount).sum();
        assert_eq!(sar.total_amount_involved, expected);
        assert_eq!(sar.geographic_locations, geographic_locations(&txs));
        assert_eq!(sar.related_transactions.len(), 4);
        assert_eq!(sar.activity_period.days(), 90);
        assert_eq!(sar.activity_period.end_date, sar.filing_date);
        assert!(sar.filing_date <= now().date_naive());
        assert!((2..=5).contains(&sar.attachments.len()));
        assert!(sar.corrective_action_taken.len() <= 200);
        assert!((1..=3).contains(&sar.suspect_information.account_numbers.len()));
        for attachment in &sar.attachments {
            assert!((100..=5000).contains(&attachment.file_size));
            assert!(attachment.filename.ends_with(".pdf"));
        }
    }

    #[test]
    fn test_sar_rejects_empty_input() {
        let mut rng = StdRng::seed_from_u64(10);
        let err = generator()
            .generate_suspicious_activity_report(&mut rng, "C", &[])
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_batch_validation() {
        let mut rng = StdRng::seed_from_u64(11);
        let gen = generator();
        let ids = vec!["A".to_string()];
        assert!(gen.generate_batch_transactions(&mut rng, &ids, 10, 1.5).is_err());
        assert!(gen.generate_batch_transactions(&mut rng, &ids, 10, -0.1).is_err());
        assert!(gen.generate_batch_transactions(&mut rng, &[], 10, 0.1).is_err());
        assert!(gen
            .generate_batch_transactions(&mut rng, &[], 0, 0.1)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_seeded_runs_reproduce() {
        let gen = generator();
        let a = gen.generate_transaction(&mut StdRng::seed_from_u64(77), None, true);
        let b = gen.generate_transaction(&mut StdRng::seed_from_u64(77), None, true);
        assert_eq!(a, b);
    }
}
