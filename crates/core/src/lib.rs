//! # Kycaml Core
//!
//! Record types for synthetic AML / KYC datasets.
//!
//! - [`Transaction`] with its parties, screening and compliance flags
//! - [`SuspiciousActivityReport`] aggregating flagged transactions
//! - [`Customer`] KYC profiles (individual or business)
//!
//! Every enumerated catalog the generators draw from is exposed as an
//! `ALL` (or more specific) constant on its enum.

pub mod customer;
pub mod error;
pub mod sar;
pub mod screening;
pub mod transaction;

pub use customer::{
    AccountInfo, AccountPurpose, AccountType, AuthorizedSignatory, BeneficialOwner,
    BusinessCustomer, BusinessInfo, BusinessRiskAssessment, BusinessType, ContactInfo, Customer,
    CustomerType, DocumentType, EmploymentInfo, EmploymentStatus, Gender, IdentificationDocument,
    IndividualCustomer, IndividualRiskAssessment, Industry, KycStatus, KycWorkflowStatus,
    MaritalStatus, PersonalInfo, RiskLevel, SignatoryTitle, VerificationStatus,
};
pub use error::{ensure_ratio, CoreError, CoreResult};
pub use sar::{
    ActivityPeriod, AttachmentType, FilingInstitution, InstitutionRelationship, SarAttachment,
    SarStatus, SuspectInfo, SuspiciousActivityReport, SuspiciousActivityType,
    ACTIVITY_PERIOD_DAYS,
};
pub use screening::{
    AdverseMediaScreening, AmlScreening, ComplianceFlags, MediaRiskCategory, PepCategory,
    PepScreening, RegulatoryReporting, RiskIndicator, SanctionsList, SanctionsScreening,
    ScreeningStatus,
};
pub use transaction::{
    Address, Channel, Currency, IntermediaryBank, Party, PartyIdType, PartyIdentification,
    PartyRiskAttributes, PartyRole, PatternType, ProcessingStatus, PurposeCode, Transaction,
    TransactionType,
};
pub use transaction::{ctr_threshold, structuring_floor};
