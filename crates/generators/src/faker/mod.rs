//! Locale-aware fake data.
//!
//! [`FakeDataProvider`] is the seam the generators draw names, companies,
//! addresses and free text from. Each supported [`Locale`] has a
//! table-driven provider; a [`LocaleRegistry`] maps locales to providers
//! and is handed to the generators explicitly.

pub mod dates;
pub mod ids;
mod tables;
pub mod text;

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use strum_macros::{Display, EnumString};

use tables::LocaleTables;

/// Supported data locales.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumString, Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Us,
    Uk,
    De,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 4] = [Locale::Us, Locale::Uk, Locale::De, Locale::Fr];

    /// Locales business customers are drawn from.
    pub const BUSINESS: [Locale; 3] = [Locale::Us, Locale::Uk, Locale::De];

    /// Resolve a locale code, falling back to `us` for anything unknown.
    pub fn from_code(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::Us => "us",
            Locale::Uk => "uk",
            Locale::De => "de",
            Locale::Fr => "fr",
        }
    }

    /// ISO 3166 alpha-2 country of the locale.
    pub fn country_code(&self) -> &'static str {
        match self {
            Locale::Us => "US",
            Locale::Uk => "GB",
            Locale::De => "DE",
            Locale::Fr => "FR",
        }
    }

    pub fn nationality(&self) -> &'static str {
        match self {
            Locale::Us => "American",
            Locale::Uk => "British",
            Locale::De => "German",
            Locale::Fr => "French",
        }
    }
}

/// Source of realistic-looking personal and company data for one locale.
///
/// Methods take `&mut dyn RngCore` so providers stay object safe and the
/// caller keeps ownership of the random stream.
pub trait FakeDataProvider: Send + Sync {
    fn locale(&self) -> Locale;

    fn first_name(&self, rng: &mut dyn RngCore) -> String;

    fn last_name(&self, rng: &mut dyn RngCore) -> String;

    fn name(&self, rng: &mut dyn RngCore) -> String {
        let first = self.first_name(rng);
        let last = self.last_name(rng);
        format!("{} {}", first, last)
    }

    fn company(&self, rng: &mut dyn RngCore) -> String;

    fn street_address(&self, rng: &mut dyn RngCore) -> String;

    fn city(&self, rng: &mut dyn RngCore) -> String;

    /// State, county, Land or région depending on locale.
    fn state(&self, rng: &mut dyn RngCore) -> String;

    fn postcode(&self, rng: &mut dyn RngCore) -> String;

    fn phone_number(&self, rng: &mut dyn RngCore) -> String;

    fn email(&self, rng: &mut dyn RngCore) -> String;

    fn job(&self, rng: &mut dyn RngCore) -> String;

    /// Single-line postal address.
    fn address(&self, rng: &mut dyn RngCore) -> String {
        let street = self.street_address(rng);
        let city = self.city(rng);
        let postcode = self.postcode(rng);
        format!("{}, {} {}", street, postcode, city)
    }
}

/// Provider backed by static word tables.
pub struct TableProvider {
    locale: Locale,
    tables: &'static LocaleTables,
}

impl TableProvider {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            tables: tables::for_locale(locale),
        }
    }
}

/// Uniform draw from a fixed, non-empty catalog.
pub(crate) fn pick<R: Rng + ?Sized, T: Copy>(rng: &mut R, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}

impl FakeDataProvider for TableProvider {
    fn locale(&self) -> Locale {
        self.locale
    }

    fn first_name(&self, rng: &mut dyn RngCore) -> String {
        pick(rng, self.tables.first_names).to_string()
    }

    fn last_name(&self, rng: &mut dyn RngCore) -> String {
        pick(rng, self.tables.last_names).to_string()
    }

    fn company(&self, rng: &mut dyn RngCore) -> String {
        let last = pick(rng, self.tables.last_names);
        match rng.gen_range(0..3) {
            0 => {
                let other = pick(rng, self.tables.last_names);
                format!("{} {} {}", last, self.tables.company_joiner, other)
            }
            1 => {
                let suffix = pick(rng, self.tables.company_suffixes);
                format!("{} {}", last, suffix)
            }
            _ => {
                let a = pick(rng, self.tables.last_names);
                let b = pick(rng, self.tables.last_names);
                format!("{}, {} {} {}", last, a, self.tables.company_joiner, b)
            }
        }
    }

    fn street_address(&self, rng: &mut dyn RngCore) -> String {
        let number = rng.gen_range(1..=9999);
        let name = pick(rng, self.tables.street_names);
        let suffix = pick(rng, self.tables.street_suffixes);
        self.tables
            .street_format
            .replace("{number}", &number.to_string())
            .replace("{name}", name)
            .replace("{suffix}", suffix)
    }

    fn city(&self, rng: &mut dyn RngCore) -> String {
        pick(rng, self.tables.cities).to_string()
    }

    fn state(&self, rng: &mut dyn RngCore) -> String {
        pick(rng, self.tables.states).to_string()
    }

    fn postcode(&self, rng: &mut dyn RngCore) -> String {
        let mask = pick(rng, self.tables.postcode_formats);
        ids::bothify(rng, mask)
    }

    fn phone_number(&self, rng: &mut dyn RngCore) -> String {
        let mask = pick(rng, self.tables.phone_formats);
        ids::bothify(rng, mask)
    }

    fn email(&self, rng: &mut dyn RngCore) -> String {
        let first = pick(rng, self.tables.first_names);
        let last = pick(rng, self.tables.last_names);
        let domain = pick(rng, self.tables.email_domains);
        let local = format!("{}.{}", first, last)
            .to_lowercase()
            .chars()
            .map(ascii_fold)
            .filter(|c| c.is_ascii_alphanumeric() || *c == '.')
            .collect::<String>();
        format!("{}@{}", local, domain)
    }

    fn job(&self, rng: &mut dyn RngCore) -> String {
        pick(rng, self.tables.jobs).to_string()
    }
}

/// Strip the common Latin-1 accents so local parts stay ASCII.
fn ascii_fold(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ä' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'î' | 'ï' => 'i',
        'ô' | 'ö' => 'o',
        'ù' | 'û' | 'ü' => 'u',
        'ß' => 's',
        other => other,
    }
}

/// Explicit locale → provider mapping.
pub struct LocaleRegistry {
    providers: HashMap<Locale, Box<dyn FakeDataProvider>>,
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        let providers = Locale::ALL
            .iter()
            .map(|&locale| {
                (
                    locale,
                    Box::new(TableProvider::new(locale)) as Box<dyn FakeDataProvider>,
                )
            })
            .collect();
        Self { providers }
    }
}

impl LocaleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace (or add) the provider for one locale.
    pub fn with_provider(mut self, provider: Box<dyn FakeDataProvider>) -> Self {
        self.providers.insert(provider.locale(), provider);
        self
    }

    /// Provider for `locale`, falling back to the `us` provider.
    pub fn get(&self, locale: Locale) -> &dyn FakeDataProvider {
        self.providers
            .get(&locale)
            .or_else(|| self.providers.get(&Locale::Us))
            .map(|p| p.as_ref())
            .unwrap_or(&FALLBACK as &dyn FakeDataProvider)
    }

    /// Provider for a locale code (`"us"`, `"uk"`, ...).
    pub fn for_code(&self, code: &str) -> &dyn FakeDataProvider {
        self.get(Locale::from_code(code))
    }
}

impl fmt::Debug for LocaleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut locales: Vec<_> = self.providers.keys().map(|l| l.code()).collect();
        locales.sort();
        f.debug_struct("LocaleRegistry")
            .field("locales", &locales)
            .finish()
    }
}

static FALLBACK: TableProvider = TableProvider {
    locale: Locale::Us,
    tables: &tables::US,
};

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_locale_mapping() {
        assert_eq!(Locale::from_code("uk").country_code(), "GB");
        assert_eq!(Locale::from_code("de").nationality(), "German");
        assert_eq!(Locale::from_code("FR"), Locale::Fr);
        assert_eq!(Locale::from_code("jp"), Locale::Us);
        assert_eq!(Locale::from_code("").nationality(), "American");
    }

    #[test]
    fn test_pick_covers_catalog() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let locale = pick(&mut rng, &Locale::ALL);
            assert!(Locale::ALL.contains(&locale));
            seen.insert(locale);
        }
        assert_eq!(seen.len(), Locale::ALL.len());

        let dyn_rng: &mut dyn RngCore = &mut rng;
        assert_eq!(pick(dyn_rng, &["only"]), "only");
    }

    #[test]
    fn test_registry_covers_all_locales() {
        let registry = LocaleRegistry::new();
        for locale in Locale::ALL {
            assert_eq!(registry.get(locale).locale(), locale);
        }
        assert_eq!(registry.for_code("xx").locale(), Locale::Us);
    }

    #[test]
    fn test_provider_output() {
        let mut rng = StdRng::seed_from_u64(7);
        let registry = LocaleRegistry::new();

        for locale in Locale::ALL {
            let provider = registry.get(locale);
            assert!(!provider.name(&mut rng).is_empty());
            assert!(!provider.company(&mut rng).is_empty());
            assert!(!provider.street_address(&mut rng).contains('{'));

            let email = provider.email(&mut rng);
            assert!(email.contains('@'));
            assert!(email.is_ascii());

            let postcode = provider.postcode(&mut rng);
            assert!(!postcode.contains('#'));
        }
    }

    #[test]
    fn test_with_provider_override() {
        struct Fixed;
        impl FakeDataProvider for Fixed {
            fn locale(&self) -> Locale {
                Locale::Fr
            }
            fn first_name(&self, _: &mut dyn RngCore) -> String {
                "Jean".into()
            }
            fn last_name(&self, _: &mut dyn RngCore) -> String {
                "Dupont".into()
            }
            fn company(&self, _: &mut dyn RngCore) -> String {
                "Dupont SA".into()
            }
            fn street_address(&self, _: &mut dyn RngCore) -> String {
                "1 rue de la Paix".into()
            }
            fn city(&self, _: &mut dyn RngCore) -> String {
                "Paris".into()
            }
            fn state(&self, _: &mut dyn RngCore) -> String {
                "Île-de-France".into()
            }
            fn postcode(&self, _: &mut dyn RngCore) -> String {
                "75002".into()
            }
            fn phone_number(&self, _: &mut dyn RngCore) -> String {
                "01 23 45 67 89".into()
            }
            fn email(&self, _: &mut dyn RngCore) -> String {
                "jean@dupont.fr".into()
            }
            fn job(&self, _: &mut dyn RngCore) -> String {
                "Notaire".into()
            }
        }

        let registry = LocaleRegistry::new().with_provider(Box::new(Fixed));
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(registry.get(Locale::Fr).name(&mut rng), "Jean Dupont");
        assert_eq!(
            registry.get(Locale::Fr).address(&mut rng),
            "1 rue de la Paix, 75002 Paris"
        );
    }
}
