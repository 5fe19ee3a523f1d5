//! Locale-independent identifiers: UUIDs, account and routing numbers,
//! SWIFT codes, SSNs and masked reference strings.
//!
//! Everything here draws from the caller's random stream so seeded runs
//! are reproducible.

use rand::Rng;
use super::pick;

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Replace `#` with a random digit and `?` with a random uppercase letter.
pub fn bothify<R: Rng + ?Sized>(rng: &mut R, mask: &str) -> String {
    mask.chars()
        .map(|c| match c {
            '#' => char::from(b'0' + rng.gen_range(0..10u8)),
            '?' => char::from(pick(rng, LETTERS)),
            other => other,
        })
        .collect()
}

/// Random (v4) UUID drawn from `rng`.
pub fn uuid<R: Rng + ?Sized>(rng: &mut R) -> String {
    let bytes: [u8; 16] = rng.gen();
    uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .to_string()
}

/// Basic bank account number: four letters followed by fourteen digits.
pub fn bban<R: Rng + ?Sized>(rng: &mut R) -> String {
    bothify(rng, "????##############")
}

/// ABA routing transit number with a valid check digit.
pub fn aba<R: Rng + ?Sized>(rng: &mut R) -> String {
    // Federal Reserve routing symbol: 01-12 (or 21-32 for thrifts).
    let prefix: u32 = if rng.gen_bool(0.5) {
        rng.gen_range(1..=12)
    } else {
        rng.gen_range(21..=32)
    };
    let mut digits: Vec<u32> = vec![prefix / 10, prefix % 10];
    for _ in 0..6 {
        digits.push(rng.gen_range(0..10));
    }
    digits.push(aba_check_digit(&digits));
    digits.iter().map(|d| char::from(b'0' + *d as u8)).collect()
}

fn aba_check_digit(first_eight: &[u32]) -> u32 {
    const WEIGHTS: [u32; 8] = [3, 7, 1, 3, 7, 1, 3, 7];
    let sum: u32 = first_eight
        .iter()
        .zip(WEIGHTS.iter())
        .map(|(d, w)| d * w)
        .sum();
    (10 - sum % 10) % 10
}

/// Whether a nine-digit string passes the ABA checksum.
pub fn is_valid_aba(routing: &str) -> bool {
    if routing.len() != 9 || !routing.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    let digits: Vec<u32> = routing.chars().filter_map(|c| c.to_digit(10)).collect();
    aba_check_digit(&digits[..8]) == digits[8]
}

/// BIC / SWIFT code, 8 or 11 characters.
pub fn swift<R: Rng + ?Sized>(rng: &mut R, country: &str) -> String {
    let bank = bothify(rng, "????");
    let location = bothify(rng, "?#");
    if rng.gen_bool(0.5) {
        format!("{}{}{}", bank, country, location)
    } else {
        let branch = bothify(rng, "###");
        format!("{}{}{}{}", bank, country, location, branch)
    }
}

/// US social security number (`AAA-GG-SSSS`), avoiding the reserved
/// 000, 666 and 9xx areas.
pub fn ssn<R: Rng + ?Sized>(rng: &mut R) -> String {
    let area = loop {
        let candidate = rng.gen_range(1..900);
        if candidate != 666 {
            break candidate;
        }
    };
    let group = rng.gen_range(1..100);
    let serial = rng.gen_range(1..10000);
    format!("{:03}-{:02}-{:04}", area, group, serial)
}

/// Vehicle-plate style document number.
pub fn license_plate<R: Rng + ?Sized>(rng: &mut R) -> String {
    const FORMATS: [&str; 3] = ["???-####", "###-???", "#??-###"];
    let mask = pick(rng, &FORMATS);
    bothify(rng, mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bothify() {
        let mut rng = StdRng::seed_from_u64(42);
        let reference = bothify(&mut rng, "TXN-####-????-####");
        assert_eq!(reference.len(), 18);
        assert!(reference.starts_with("TXN-"));
        let parts: Vec<&str> = reference.split('-').collect();
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert!(parts[2].chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_aba_checksum() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let routing = aba(&mut rng);
            assert_eq!(routing.len(), 9);
            assert!(is_valid_aba(&routing), "bad routing {}", routing);
        }
        // Well-known valid routing number.
        assert!(is_valid_aba("011000015"));
        assert!(!is_valid_aba("011000016"));
        assert!(!is_valid_aba("12345"));
    }

    #[test]
    fn test_ssn_format() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let value = ssn(&mut rng);
            assert_eq!(value.len(), 11);
            assert!(!value.starts_with("000"));
            assert!(!value.starts_with("666"));
            assert!(!value.starts_with('9'));
        }
    }

    #[test]
    fn test_uuid_is_seeded() {
        let a = uuid(&mut StdRng::seed_from_u64(9));
        let b = uuid(&mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
        let parsed = uuid::Uuid::parse_str(&a).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn test_swift_length() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let code = swift(&mut rng, "DE");
            assert!(code.len() == 8 || code.len() == 11);
            assert_eq!(&code[4..6], "DE");
        }
    }
}
