//! Fixed value sets the generators draw from.

/// Countries used for ordinary parties, intermediaries and ID issuers.
pub const STANDARD_COUNTRIES: [&str; 10] = ["US", "GB", "DE", "FR", "CA", "AU", "JP", "SG", "CH", "NL"];

/// FATF grey/black list style jurisdictions.
pub const HIGH_RISK_COUNTRIES: [&str; 18] = [
    "AF", "BY", "CF", "CG", "IR", "IQ", "KP", "LB", "LY", "MM", "NI", "SO", "SS", "SD", "SY", "VE",
    "YE", "ZW",
];

/// Issuing countries for customer identification documents.
pub const KYC_COUNTRIES: [&str; 8] = ["US", "GB", "DE", "FR", "CA", "AU", "JP", "SG"];

pub const BANKS: [&str; 10] = [
    "Chase Bank",
    "Bank of America",
    "Wells Fargo",
    "Citibank",
    "HSBC",
    "Deutsche Bank",
    "Barclays",
    "Credit Suisse",
    "UBS",
    "BNP Paribas",
];

/// Narrative templates for SAR filings.
pub const SAR_NARRATIVES: [&str; 5] = [
    "Customer engaged in multiple transactions just under the reporting threshold, indicating possible structuring activity.",
    "Rapid movement of large sums through multiple accounts with no apparent business purpose.",
    "Customer's transaction patterns are inconsistent with their stated occupation and income level.",
    "Multiple wire transfers to high-risk jurisdictions without clear business justification.",
    "Unusual cash deposits followed immediately by wire transfers to foreign accounts.",
];

/// Issuing authority written on non-certificate business documents.
pub const TAX_AUTHORITY: &str = "Tax Authority";
