//! Integration tests for the AML and KYC generators

use std::collections::{BTreeSet, HashSet};

use chrono::{TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use kycaml_core::{Currency, Customer, PatternType, RiskIndicator, Transaction};
use kycaml_generators::{AmlGenerator, KycGenerator, Locale, LocaleRegistry};

fn aml() -> AmlGenerator {
    AmlGenerator::new(LocaleRegistry::default())
        .with_now(Utc.with_ymd_and_hms(2026, 6, 1, 8, 0, 0).unwrap())
}

fn kyc() -> KycGenerator {
    KycGenerator::new(LocaleRegistry::default())
        .with_now(Utc.with_ymd_and_hms(2026, 6, 1, 8, 0, 0).unwrap())
}

fn customer_ids(rng: &mut StdRng, n: usize) -> Vec<String> {
    (0..n)
        .map(|_| kycaml_generators::faker::ids::uuid(rng))
        .collect()
}

#[test]
fn test_batch_500_at_015_splits_75_425() {
    let mut rng = StdRng::seed_from_u64(500);
    let ids = customer_ids(&mut rng, 50);
    let txs = aml()
        .generate_batch_transactions(&mut rng, &ids, 500, 0.15)
        .unwrap();

    assert_eq!(txs.len(), 500);
    let suspicious = txs.iter().filter(|t| t.is_flagged()).count();
    assert_eq!(suspicious, 75);
    assert_eq!(txs.len() - suspicious, 425);

    let known: HashSet<&str> = ids.iter().map(String::as_str).collect();
    assert!(txs.iter().all(|t| known.contains(t.customer_id.as_str())));
}

#[test]
fn test_every_transaction_valid_amount_and_currency() {
    let mut rng = StdRng::seed_from_u64(1);
    let ids = customer_ids(&mut rng, 10);
    let txs = aml()
        .generate_batch_transactions(&mut rng, &ids, 300, 0.3)
        .unwrap();
    for tx in &txs {
        assert!(tx.amount > Decimal::ZERO);
        assert!(Currency::ALL.contains(&tx.currency));
    }
}

#[test]
fn test_suspicious_indicators_from_catalog() {
    let mut rng = StdRng::seed_from_u64(2);
    let generator = aml();
    for _ in 0..200 {
        let tx = generator.generate_transaction(&mut rng, None, true);
        let count = tx.risk_indicators.len();
        assert!((2..=5).contains(&count));
        let distinct: HashSet<_> = tx.risk_indicators.iter().collect();
        assert_eq!(distinct.len(), count);
        assert!(tx
            .risk_indicators
            .iter()
            .all(|i| RiskIndicator::SUSPICIOUS_CATALOG.contains(i)));
    }
}

#[test]
fn test_structuring_batches() {
    let mut rng = StdRng::seed_from_u64(3);
    let generator = aml();
    for _ in 0..20 {
        let txs = generator
            .generate_transaction_pattern(&mut rng, PatternType::Structuring, "C-1", 30)
            .unwrap();
        assert!((5..=15).contains(&txs.len()));
        assert!(txs
            .iter()
            .all(|t| t.amount >= dec!(9000) && t.amount <= dec!(9999)));
    }
}

#[test]
fn test_rapid_movement_batches() {
    let mut rng = StdRng::seed_from_u64(4);
    let generator = aml();
    for _ in 0..20 {
        let txs = generator
            .generate_transaction_pattern(&mut rng, PatternType::RapidMovement, "C-2", 7)
            .unwrap();
        assert!((3..=8).contains(&txs.len()));
        assert!(txs
            .iter()
            .all(|t| t.amount >= dec!(50000) && t.amount <= dec!(500000)));
    }
}

#[test]
fn test_sar_from_flagged_batch() {
    let mut rng = StdRng::seed_from_u64(5);
    let generator = aml();
    let ids = customer_ids(&mut rng, 50);
    let txs = generator
        .generate_batch_transactions(&mut rng, &ids, 200, 0.15)
        .unwrap();
    let flagged: Vec<Transaction> = txs
        .into_iter()
        .filter(|t| !t.risk_indicators.is_empty())
        .take(5)
        .collect();
    assert!(!flagged.is_empty());

    let sar = generator
        .generate_suspicious_activity_report(&mut rng, &ids[0], &flagged)
        .unwrap();

    let total: Decimal = flagged.iter().map(|t| t.amount).sum();
    assert_eq!(sar.total_amount_involved, total);

    let union: BTreeSet<String> = flagged
        .iter()
        .flat_map(|t| {
            [
                t.originator.address.country.clone(),
                t.beneficiary.address.country.clone(),
            ]
        })
        .collect();
    let locations: BTreeSet<String> = sar.geographic_locations.iter().cloned().collect();
    assert_eq!(locations, union);
    assert_eq!(sar.geographic_locations.len(), union.len());
    assert_eq!(sar.currency, Currency::Usd);
}

#[test]
fn test_unknown_pattern_is_invalid() {
    let mut rng = StdRng::seed_from_u64(6);
    let err = aml()
        .generate_named_pattern(&mut rng, "LAYERING", "C-3", 30)
        .unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_batch_customers_100_at_08() {
    let mut rng = StdRng::seed_from_u64(7);
    let customers = kyc().generate_batch_customers(&mut rng, 100, 0.8).unwrap();
    let individuals = customers.iter().filter(|c| c.is_individual()).count();
    let businesses = customers.iter().filter(|c| c.is_business()).count();
    assert_eq!(individuals, 80);
    assert_eq!(businesses, 20);
}

#[test]
fn test_kyc_risk_scores_bounded() {
    let mut rng = StdRng::seed_from_u64(8);
    let customers = kyc().generate_batch_customers(&mut rng, 120, 0.5).unwrap();
    assert!(customers.iter().all(|c| c.risk_score() <= 100));
}

#[test]
fn test_unknown_locale_falls_back_to_us() {
    let mut rng = StdRng::seed_from_u64(9);
    let locale = Locale::from_code("jp");
    assert_eq!(locale, Locale::Us);
    let customer = kyc().generate_individual_customer(&mut rng, locale);
    match customer {
        Customer::Individual(c) => {
            assert_eq!(c.personal_info.nationality, "American");
            assert_eq!(c.contact_info.address.country, "US");
        }
        Customer::Business(_) => panic!("expected an individual"),
    }
}

#[test]
fn test_same_seed_same_dataset() {
    let generator = kyc();
    let a = generator
        .generate_batch_customers(&mut StdRng::seed_from_u64(10), 10, 0.5)
        .unwrap();
    let b = generator
        .generate_batch_customers(&mut StdRng::seed_from_u64(10), 10, 0.5)
        .unwrap();
    assert_eq!(a, b);
}

/// Walk two JSON values side by side: objects must carry identical keys
/// at every level and leaves the same JSON type. `null` matches anything,
/// which is how optional blocks serialize.
fn assert_same_shape(a: &serde_json::Value, b: &serde_json::Value, path: &str) {
    use serde_json::Value;
    match (a, b) {
        (Value::Null, _) | (_, Value::Null) => {}
        (Value::Object(x), Value::Object(y)) => {
            let keys_x: BTreeSet<&String> = x.keys().collect();
            let keys_y: BTreeSet<&String> = y.keys().collect();
            assert_eq!(keys_x, keys_y, "key sets differ at {}", path);
            for (key, value) in x {
                assert_same_shape(value, &y[key], &format!("{}.{}", path, key));
            }
        }
        (Value::Array(x), Value::Array(y)) => {
            if let (Some(first_x), Some(first_y)) = (x.first(), y.first()) {
                assert_same_shape(first_x, first_y, &format!("{}[0]", path));
            }
        }
        (Value::String(_), Value::String(_))
        | (Value::Number(_), Value::Number(_))
        | (Value::Bool(_), Value::Bool(_)) => {}
        _ => panic!("type differs at {}: {} vs {}", path, a, b),
    }
}

#[test]
fn test_suspicious_and_normal_share_shape() {
    let mut rng = StdRng::seed_from_u64(12);
    let generator = aml();
    for _ in 0..50 {
        let normal = generator.generate_transaction(&mut rng, Some("C-5"), false);
        let suspicious = generator.generate_transaction(&mut rng, Some("C-5"), true);
        let normal = serde_json::to_value(&normal).unwrap();
        let suspicious = serde_json::to_value(&suspicious).unwrap();

        assert_same_shape(&normal, &suspicious, "$");
        // Optional blocks are present as keys on both sides.
        for value in [&normal, &suspicious] {
            assert!(value["beneficiary"]
                .as_object()
                .unwrap()
                .contains_key("risk_attributes"));
            assert!(value["aml_screening"]["pep_screening"]
                .as_object()
                .unwrap()
                .contains_key("pep_category"));
        }
        assert!(normal["beneficiary"]["risk_attributes"].is_null());
        assert!(suspicious["beneficiary"]["risk_attributes"].is_object());
    }
}

#[test]
fn test_records_serialize_with_expected_keys() {
    let mut rng = StdRng::seed_from_u64(11);
    let tx = aml().generate_transaction(&mut rng, Some("C-4"), false);
    let value = serde_json::to_value(&tx).unwrap();
    assert_eq!(value["customer_id"], "C-4");
    assert!(value["beneficiary"]["risk_attributes"].is_null());
    assert!(value["amount"].is_string());

    let customer = kyc().generate_business_customer(&mut rng, Locale::De);
    let value = serde_json::to_value(&customer).unwrap();
    assert_eq!(value["customer_type"], "BUSINESS");
    assert_eq!(value["account_info"]["account_type"], "BUSINESS");
}
