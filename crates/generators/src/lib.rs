//! # Kycaml Generators
//!
//! Randomized generators for synthetic compliance data:
//! - [`AmlGenerator`]: transactions, laundering patterns, SARs
//! - [`KycGenerator`]: individual and business customer profiles
//!
//! Both are pure functions of the caller's random source plus explicit
//! parameters. Seed a [`rand::rngs::StdRng`] to make a run reproducible.
//!
//! ```ignore
//! use kycaml_generators::AmlGenerator;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let generator = AmlGenerator::default();
//! let tx = generator.generate_transaction(&mut rng, None, true);
//! assert!(tx.is_flagged());
//! ```

pub mod aml;
pub mod catalog;
pub mod distributions;
pub mod faker;
pub mod kyc;

pub use aml::{geographic_locations, AmlGenerator};
pub use distributions::Profile;
pub use faker::{FakeDataProvider, Locale, LocaleRegistry, TableProvider};
pub use kyc::KycGenerator;
