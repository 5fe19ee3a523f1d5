//! # Customer Module
//!
//! KYC customer profiles. A [`Customer`] is a tagged union keyed by
//! `customer_type`:
//! - Individual: personal, contact and employment blocks
//! - Business: legal/registration info, signatories, beneficial owners
//!
//! Both variants carry identification documents, a risk assessment,
//! account info and the KYC workflow status.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::screening::ScreeningStatus;
use crate::transaction::Address;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum CustomerType {
    Individual,
    Business,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];
}

/// Identity documents accepted for individuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    // === Individual ===
    Passport,
    DriversLicense,
    NationalId,
    UtilityBill,
    BankStatement,

    // === Business only ===
    CertificateOfIncorporation,
    MemorandumOfAssociation,
    TaxCertificate,
}

impl DocumentType {
    /// Catalog sampled (2-4, without replacement) for individuals.
    pub const INDIVIDUAL: [DocumentType; 5] = [
        DocumentType::Passport,
        DocumentType::DriversLicense,
        DocumentType::NationalId,
        DocumentType::UtilityBill,
        DocumentType::BankStatement,
    ];

    /// Fixed document set every business customer carries.
    pub const BUSINESS: [DocumentType; 5] = [
        DocumentType::CertificateOfIncorporation,
        DocumentType::MemorandumOfAssociation,
        DocumentType::TaxCertificate,
        DocumentType::BankStatement,
        DocumentType::UtilityBill,
    ];

    pub fn is_certificate(&self) -> bool {
        matches!(
            self,
            DocumentType::CertificateOfIncorporation | DocumentType::TaxCertificate
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum VerificationStatus {
    Verified,
    Pending,
    Rejected,
    Expired,
}

impl VerificationStatus {
    pub const ALL: [VerificationStatus; 4] = [
        VerificationStatus::Verified,
        VerificationStatus::Pending,
        VerificationStatus::Rejected,
        VerificationStatus::Expired,
    ];

    /// Business documents are never reported as expired.
    pub const BUSINESS: [VerificationStatus; 3] = [
        VerificationStatus::Verified,
        VerificationStatus::Pending,
        VerificationStatus::Rejected,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentificationDocument {
    pub document_id: String,
    pub document_type: DocumentType,
    pub document_number: String,
    pub issuing_authority: String,
    pub issue_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub issuing_country: String,
    pub verification_status: VerificationStatus,
    pub file_path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
pub enum Gender {
    #[strum(serialize = "M")]
    #[serde(rename = "M")]
    Male,
    #[strum(serialize = "F")]
    #[serde(rename = "F")]
    Female,
    #[strum(serialize = "OTHER")]
    #[serde(rename = "OTHER")]
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}

impl MaritalStatus {
    pub const ALL: [MaritalStatus; 4] = [
        MaritalStatus::Single,
        MaritalStatus::Married,
        MaritalStatus::Divorced,
        MaritalStatus::Widowed,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentStatus {
    Employed,
    SelfEmployed,
    Unemployed,
    Retired,
    Student,
}

impl EmploymentStatus {
    pub const ALL: [EmploymentStatus; 5] = [
        EmploymentStatus::Employed,
        EmploymentStatus::SelfEmployed,
        EmploymentStatus::Unemployed,
        EmploymentStatus::Retired,
        EmploymentStatus::Student,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
pub enum Industry {
    Technology,
    Healthcare,
    Finance,
    Manufacturing,
    Retail,
    Education,
    Government,
}

impl Industry {
    pub const ALL: [Industry; 7] = [
        Industry::Technology,
        Industry::Healthcare,
        Industry::Finance,
        Industry::Manufacturing,
        Industry::Retail,
        Industry::Education,
        Industry::Government,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    Checking,
    Savings,
    Business,
    Investment,
}

impl AccountType {
    pub const ALL: [AccountType; 4] = [
        AccountType::Checking,
        AccountType::Savings,
        AccountType::Business,
        AccountType::Investment,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountPurpose {
    // === Individual ===
    PersonalBanking,
    BusinessBanking,
    Investment,
    Savings,

    // === Business ===
    BusinessOperations,
    Payroll,
    Treasury,
}

impl AccountPurpose {
    pub const INDIVIDUAL: [AccountPurpose; 4] = [
        AccountPurpose::PersonalBanking,
        AccountPurpose::BusinessBanking,
        AccountPurpose::Investment,
        AccountPurpose::Savings,
    ];

    pub const BUSINESS: [AccountPurpose; 4] = [
        AccountPurpose::BusinessOperations,
        AccountPurpose::Payroll,
        AccountPurpose::Investment,
        AccountPurpose::Treasury,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KycWorkflowStatus {
    Pending,
    InProgress,
    Approved,
    Rejected,
    RequiresAdditionalInfo,
}

impl KycWorkflowStatus {
    pub const ALL: [KycWorkflowStatus; 5] = [
        KycWorkflowStatus::Pending,
        KycWorkflowStatus::InProgress,
        KycWorkflowStatus::Approved,
        KycWorkflowStatus::Rejected,
        KycWorkflowStatus::RequiresAdditionalInfo,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusinessType {
    Corporation,
    #[strum(serialize = "LLC")]
    #[serde(rename = "LLC")]
    Llc,
    Partnership,
    SoleProprietorship,
}

impl BusinessType {
    pub const ALL: [BusinessType; 4] = [
        BusinessType::Corporation,
        BusinessType::Llc,
        BusinessType::Partnership,
        BusinessType::SoleProprietorship,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
pub enum SignatoryTitle {
    #[strum(serialize = "CEO")]
    #[serde(rename = "CEO")]
    Ceo,
    #[strum(serialize = "CFO")]
    #[serde(rename = "CFO")]
    Cfo,
    Director,
    Partner,
}

impl SignatoryTitle {
    pub const ALL: [SignatoryTitle; 4] = [
        SignatoryTitle::Ceo,
        SignatoryTitle::Cfo,
        SignatoryTitle::Director,
        SignatoryTitle::Partner,
    ];
}

// ============================================================================
// Shared blocks
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub account_type: AccountType,
    pub opening_balance: u64,
    pub monthly_transaction_limit: u64,
    pub purpose_of_account: AccountPurpose,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycStatus {
    pub status: KycWorkflowStatus,
    pub submission_date: NaiveDate,
    pub completion_date: Option<NaiveDate>,
    pub assigned_analyst: String,
    pub notes: Option<String>,
}

/// Risk assessment of an individual.
///
/// `risk_level` and `risk_score` are independent draws; a LOW level with
/// a score of 95 is a valid record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualRiskAssessment {
    pub risk_level: RiskLevel,
    /// 1..=100
    pub risk_score: u8,
    pub pep_status: bool,
    pub sanctions_check: ScreeningStatus,
    pub adverse_media: bool,
}

/// Risk assessment of a business, parallel to the individual one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessRiskAssessment {
    pub risk_level: RiskLevel,
    /// 1..=100
    pub risk_score: u8,
    pub high_risk_jurisdiction: bool,
    pub sanctions_check: ScreeningStatus,
    pub adverse_media: bool,
}

// ============================================================================
// Individual
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub nationality: String,
    pub place_of_birth: String,
    pub marital_status: MaritalStatus,
}

impl PersonalInfo {
    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) => format!("{} {} {}", self.first_name, middle, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone_primary: String,
    pub phone_secondary: Option<String>,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentInfo {
    pub employment_status: EmploymentStatus,
    pub employer_name: Option<String>,
    pub job_title: String,
    pub annual_income: u64,
    pub industry: Industry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualCustomer {
    pub customer_id: String,
    pub personal_info: PersonalInfo,
    pub contact_info: ContactInfo,
    pub employment_info: EmploymentInfo,
    pub identification_documents: Vec<IdentificationDocument>,
    pub risk_assessment: IndividualRiskAssessment,
    pub account_info: AccountInfo,
    pub kyc_status: KycStatus,
    pub created_timestamp: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

// ============================================================================
// Business
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub legal_name: String,
    pub trading_name: Option<String>,
    pub registration_number: String,
    pub tax_id: String,
    pub registration_date: NaiveDate,
    pub business_type: BusinessType,
    pub industry: Industry,
    pub nature_of_business: String,
    pub number_of_employees: u32,
    pub annual_revenue: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizedSignatory {
    pub name: String,
    pub title: SignatoryTitle,
    pub date_of_birth: NaiveDate,
    pub nationality: String,
    pub ownership_percentage: Option<u8>,
}

/// Beneficial owner. Percentages across owners are drawn independently
/// and are not normalised to 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeneficialOwner {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub nationality: String,
    pub ownership_percentage: u8,
    pub pep_status: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessCustomer {
    pub customer_id: String,
    pub business_info: BusinessInfo,
    pub registered_address: Address,
    pub operating_address: Address,
    pub authorized_signatories: Vec<AuthorizedSignatory>,
    pub beneficial_owners: Vec<BeneficialOwner>,
    pub identification_documents: Vec<IdentificationDocument>,
    pub risk_assessment: BusinessRiskAssessment,
    pub account_info: AccountInfo,
    pub kyc_status: KycStatus,
    pub created_timestamp: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl BusinessCustomer {
    pub fn has_pep_owner(&self) -> bool {
        self.beneficial_owners.iter().any(|o| o.pep_status)
    }
}

// ============================================================================
// Customer
// ============================================================================

/// KYC customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "customer_type", rename_all = "UPPERCASE")]
pub enum Customer {
    Individual(IndividualCustomer),
    Business(BusinessCustomer),
}

impl Customer {
    pub fn customer_id(&self) -> &str {
        match self {
            Customer::Individual(c) => &c.customer_id,
            Customer::Business(c) => &c.customer_id,
        }
    }

    pub fn customer_type(&self) -> CustomerType {
        match self {
            Customer::Individual(_) => CustomerType::Individual,
            Customer::Business(_) => CustomerType::Business,
        }
    }

    /// Full name for individuals, legal name for businesses.
    pub fn display_name(&self) -> String {
        match self {
            Customer::Individual(c) => c.personal_info.full_name(),
            Customer::Business(c) => c.business_info.legal_name.clone(),
        }
    }

    /// Country of the primary (contact or registered) address.
    pub fn country(&self) -> &str {
        match self {
            Customer::Individual(c) => &c.contact_info.address.country,
            Customer::Business(c) => &c.registered_address.country,
        }
    }

    pub fn risk_level(&self) -> RiskLevel {
        match self {
            Customer::Individual(c) => c.risk_assessment.risk_level,
            Customer::Business(c) => c.risk_assessment.risk_level,
        }
    }

    pub fn risk_score(&self) -> u8 {
        match self {
            Customer::Individual(c) => c.risk_assessment.risk_score,
            Customer::Business(c) => c.risk_assessment.risk_score,
        }
    }

    pub fn kyc_status(&self) -> &KycStatus {
        match self {
            Customer::Individual(c) => &c.kyc_status,
            Customer::Business(c) => &c.kyc_status,
        }
    }

    pub fn identification_documents(&self) -> &[IdentificationDocument] {
        match self {
            Customer::Individual(c) => &c.identification_documents,
            Customer::Business(c) => &c.identification_documents,
        }
    }

    pub fn is_individual(&self) -> bool {
        matches!(self, Customer::Individual(_))
    }

    pub fn is_business(&self) -> bool {
        matches!(self, Customer::Business(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_catalogs() {
        assert_eq!(DocumentType::INDIVIDUAL.len(), 5);
        assert_eq!(DocumentType::BUSINESS.len(), 5);
        assert!(DocumentType::CertificateOfIncorporation.is_certificate());
        assert!(DocumentType::TaxCertificate.is_certificate());
        assert!(!DocumentType::BankStatement.is_certificate());
        assert_eq!(
            DocumentType::MemorandumOfAssociation.to_string(),
            "MEMORANDUM_OF_ASSOCIATION"
        );
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"M\"");
        assert_eq!(serde_json::to_string(&BusinessType::Llc).unwrap(), "\"LLC\"");
        assert_eq!(serde_json::to_string(&SignatoryTitle::Ceo).unwrap(), "\"CEO\"");
        assert_eq!(
            serde_json::to_string(&Industry::Healthcare).unwrap(),
            "\"Healthcare\""
        );
        assert_eq!(
            KycWorkflowStatus::RequiresAdditionalInfo.to_string(),
            "REQUIRES_ADDITIONAL_INFO"
        );
    }

    #[test]
    fn test_full_name() {
        let mut info = PersonalInfo {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            middle_name: None,
            date_of_birth: NaiveDate::from_ymd_opt(1990, 12, 10).unwrap(),
            gender: Gender::Female,
            nationality: "British".to_string(),
            place_of_birth: "London".to_string(),
            marital_status: MaritalStatus::Married,
        };
        assert_eq!(info.full_name(), "Ada Lovelace");

        info.middle_name = Some("King".to_string());
        assert_eq!(info.full_name(), "Ada King Lovelace");
    }
}
