//! # KYC Generator
//!
//! Synthetic individual and business customer profiles.
//!
//! Names, addresses and phone numbers come from the locale's
//! [`FakeDataProvider`]; identification documents always use the `us`
//! provider regardless of the customer's locale.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use kycaml_core::{
    AccountInfo, AccountPurpose, AccountType, Address, AuthorizedSignatory, BeneficialOwner,
    BusinessCustomer, BusinessInfo, BusinessRiskAssessment, BusinessType, ContactInfo, CoreResult,
    Customer, DocumentType, EmploymentInfo, EmploymentStatus, Gender, IdentificationDocument,
    IndividualCustomer, IndividualRiskAssessment, Industry, KycStatus, KycWorkflowStatus,
    MaritalStatus, PersonalInfo, RiskLevel, ScreeningStatus, SignatoryTitle, VerificationStatus,
};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::catalog::{KYC_COUNTRIES, TAX_AUTHORITY};
use crate::distributions::rare_coin;
use crate::faker::{dates, ids, pick, text, FakeDataProvider, Locale, LocaleRegistry};

/// Generator for KYC customer data.
#[derive(Debug)]
pub struct KycGenerator {
    registry: LocaleRegistry,
    now: DateTime<Utc>,
}

impl Default for KycGenerator {
    fn default() -> Self {
        Self::new(LocaleRegistry::default())
    }
}

impl KycGenerator {
    pub fn new(registry: LocaleRegistry) -> Self {
        Self {
            registry,
            now: Utc::now(),
        }
    }

    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    fn address<R: Rng>(&self, rng: &mut R, faker: &dyn FakeDataProvider) -> Address {
        Address {
            street: faker.street_address(rng),
            city: faker.city(rng),
            state: faker.state(rng),
            country: faker.locale().country_code().to_string(),
            postal_code: faker.postcode(rng),
        }
    }

    // ========================================================================
    // Individuals
    // ========================================================================

    pub fn generate_individual_customer<R: Rng>(&self, rng: &mut R, locale: Locale) -> Customer {
        let faker = self.registry.get(locale);
        let today = self.today();

        let customer_id = ids::uuid(rng);
        let date_of_birth = dates::date_of_birth(rng, today, 18, 85);

        let personal_info = PersonalInfo {
            first_name: faker.first_name(rng),
            last_name: faker.last_name(rng),
            middle_name: rng.gen_bool(0.5).then(|| faker.first_name(rng)),
            date_of_birth,
            gender: pick(rng, &Gender::ALL),
            nationality: locale.nationality().to_string(),
            place_of_birth: faker.city(rng),
            marital_status: pick(rng, &MaritalStatus::ALL),
        };

        let contact_info = ContactInfo {
            email: faker.email(rng),
            phone_primary: faker.phone_number(rng),
            phone_secondary: rng.gen_bool(0.5).then(|| faker.phone_number(rng)),
            address: self.address(rng, faker),
        };

        let employment_info = EmploymentInfo {
            employment_status: pick(rng, &EmploymentStatus::ALL),
            employer_name: rng.gen_bool(2.0 / 3.0).then(|| faker.company(rng)),
            job_title: faker.job(rng),
            annual_income: rng.gen_range(25_000..=500_000),
            industry: pick(rng, &Industry::ALL),
        };

        let identification_documents = self.individual_documents(rng);

        let risk_assessment = IndividualRiskAssessment {
            risk_level: pick(rng, &RiskLevel::ALL),
            risk_score: rng.gen_range(1..=100),
            pep_status: rare_coin(rng, 0.05),
            sanctions_check: rare_screening(rng, 0.02),
            adverse_media: rare_coin(rng, 0.03),
        };

        let account_info = AccountInfo {
            account_type: pick(rng, &AccountType::ALL),
            opening_balance: rng.gen_range(100..=10_000),
            monthly_transaction_limit: rng.gen_range(5_000..=50_000),
            purpose_of_account: pick(rng, &AccountPurpose::INDIVIDUAL),
        };

        let kyc_status = self.kyc_status(rng, faker, 30, 20);

        let customer = IndividualCustomer {
            customer_id,
            personal_info,
            contact_info,
            employment_info,
            identification_documents,
            risk_assessment,
            account_info,
            kyc_status,
            created_timestamp: self.now,
            last_updated: self.now,
        };
        debug!(customer_id = %customer.customer_id, locale = %locale, "Generated individual customer");
        Customer::Individual(customer)
    }

    /// 2-4 distinct document types from the individual catalog.
    fn individual_documents<R: Rng>(&self, rng: &mut R) -> Vec<IdentificationDocument> {
        let faker = self.registry.get(Locale::Us);
        let today = self.today();
        let count = rng.gen_range(2..=4);
        let selected: Vec<DocumentType> = DocumentType::INDIVIDUAL
            .choose_multiple(rng, count)
            .copied()
            .collect();

        selected
            .into_iter()
            .map(|document_type| {
                let document_number = match document_type {
                    DocumentType::Passport => ids::ssn(rng),
                    _ => ids::license_plate(rng),
                };
                IdentificationDocument {
                    document_id: ids::uuid(rng),
                    document_type,
                    document_number,
                    issuing_authority: faker.company(rng),
                    issue_date: dates::date_between(
                        rng,
                        dates::years_before(today, 10),
                        dates::years_before(today, 1),
                    ),
                    expiry_date: Some(dates::date_between(
                        rng,
                        today,
                        dates::years_after(today, 10),
                    )),
                    issuing_country: pick(rng, &KYC_COUNTRIES).to_string(),
                    verification_status: pick(rng, &VerificationStatus::ALL),
                    file_path: format!(
                        "/documents/{}_{}.pdf",
                        document_type.to_string().to_lowercase(),
                        ids::uuid(rng)
                    ),
                }
            })
            .collect()
    }

    // ========================================================================
    // Businesses
    // ========================================================================

    pub fn generate_business_customer<R: Rng>(&self, rng: &mut R, locale: Locale) -> Customer {
        let faker = self.registry.get(locale);
        let today = self.today();

        let customer_id = ids::uuid(rng);
        let registration_date = dates::date_between(
            rng,
            dates::years_before(today, 10),
            dates::years_before(today, 1),
        );

        let business_info = BusinessInfo {
            legal_name: faker.company(rng),
            trading_name: rng.gen_bool(0.5).then(|| faker.company(rng)),
            registration_number: ids::ssn(rng).replace('-', ""),
            tax_id: ids::ssn(rng),
            registration_date,
            business_type: pick(rng, &BusinessType::ALL),
            industry: pick(rng, &Industry::ALL),
            nature_of_business: text::bs(rng),
            number_of_employees: rng.gen_range(1..=1000),
            annual_revenue: rng.gen_range(100_000..=50_000_000),
        };

        let registered_address = self.address(rng, faker);
        let operating_address = self.address(rng, faker);

        let signatory_count = rng.gen_range(1..=3);
        let authorized_signatories = (0..signatory_count)
            .map(|_| AuthorizedSignatory {
                name: faker.name(rng),
                title: pick(rng, &SignatoryTitle::ALL),
                date_of_birth: dates::date_of_birth(rng, today, 25, 70),
                nationality: locale.nationality().to_string(),
                ownership_percentage: rng.gen_bool(0.5).then(|| rng.gen_range(10..=100)),
            })
            .collect();

        // Owner percentages are drawn independently and need not sum to 100.
        let owner_count = rng.gen_range(1..=4);
        let beneficial_owners = (0..owner_count)
            .map(|_| BeneficialOwner {
                name: faker.name(rng),
                date_of_birth: dates::date_of_birth(rng, today, 25, 70),
                nationality: locale.nationality().to_string(),
                ownership_percentage: rng.gen_range(25..=100),
                pep_status: rare_coin(rng, 0.1),
            })
            .collect();

        let identification_documents = self.business_documents(rng);

        let risk_assessment = BusinessRiskAssessment {
            risk_level: pick(rng, &RiskLevel::ALL),
            risk_score: rng.gen_range(1..=100),
            high_risk_jurisdiction: rare_coin(rng, 0.1),
            sanctions_check: rare_screening(rng, 0.05),
            adverse_media: rare_coin(rng, 0.08),
        };

        let account_info = AccountInfo {
            account_type: AccountType::Business,
            opening_balance: rng.gen_range(10_000..=1_000_000),
            monthly_transaction_limit: rng.gen_range(100_000..=5_000_000),
            purpose_of_account: pick(rng, &AccountPurpose::BUSINESS),
        };

        let kyc_status = self.kyc_status(rng, faker, 60, 30);

        let customer = BusinessCustomer {
            customer_id,
            business_info,
            registered_address,
            operating_address,
            authorized_signatories,
            beneficial_owners,
            identification_documents,
            risk_assessment,
            account_info,
            kyc_status,
            created_timestamp: self.now,
            last_updated: self.now,
        };
        debug!(customer_id = %customer.customer_id, locale = %locale, "Generated business customer");
        Customer::Business(customer)
    }

    /// The fixed five-document business set, in catalog order.
    fn business_documents<R: Rng>(&self, rng: &mut R) -> Vec<IdentificationDocument> {
        let faker = self.registry.get(Locale::Us);
        let today = self.today();
        let issuing_countries = &KYC_COUNTRIES[..3];

        DocumentType::BUSINESS
            .iter()
            .map(|&document_type| {
                let issuing_authority = if document_type.is_certificate() {
                    faker.company(rng)
                } else {
                    TAX_AUTHORITY.to_string()
                };
                IdentificationDocument {
                    document_id: ids::uuid(rng),
                    document_type,
                    document_number: ids::ssn(rng).replace('-', ""),
                    issuing_authority,
                    issue_date: dates::date_between(
                        rng,
                        dates::years_before(today, 5),
                        dates::months_before(today, 1),
                    ),
                    expiry_date: rng
                        .gen_bool(0.5)
                        .then(|| dates::date_between(rng, today, dates::years_after(today, 5))),
                    issuing_country: pick(rng, issuing_countries).to_string(),
                    verification_status: pick(rng, &VerificationStatus::BUSINESS),
                    file_path: format!(
                        "/documents/business_{}_{}.pdf",
                        document_type.to_string().to_lowercase(),
                        ids::uuid(rng)
                    ),
                }
            })
            .collect()
    }

    fn kyc_status<R: Rng>(
        &self,
        rng: &mut R,
        faker: &dyn FakeDataProvider,
        submission_window: i64,
        completion_window: i64,
    ) -> KycStatus {
        let today = self.today();
        KycStatus {
            status: pick(rng, &KycWorkflowStatus::ALL),
            submission_date: dates::date_between(
                rng,
                today - Duration::days(submission_window),
                today,
            ),
            completion_date: rng.gen_bool(0.5).then(|| {
                dates::date_between(rng, today - Duration::days(completion_window), today)
            }),
            assigned_analyst: faker.name(rng),
            notes: rng.gen_bool(0.5).then(|| text::text(rng, 200)),
        }
    }

    // ========================================================================
    // Batches
    // ========================================================================

    /// `floor(count * individual_ratio)` individuals followed by businesses.
    pub fn generate_batch_customers<R: Rng>(
        &self,
        rng: &mut R,
        count: usize,
        individual_ratio: f64,
    ) -> CoreResult<Vec<Customer>> {
        kycaml_core::ensure_ratio("individual_ratio", individual_ratio)?;

        let individual_count = (count as f64 * individual_ratio).floor() as usize;
        let business_count = count - individual_count;

        let mut customers = Vec::with_capacity(count);
        for _ in 0..individual_count {
            let locale = pick(rng, &Locale::ALL);
            customers.push(self.generate_individual_customer(rng, locale));
        }
        for _ in 0..business_count {
            let locale = pick(rng, &Locale::BUSINESS);
            customers.push(self.generate_business_customer(rng, locale));
        }

        info!(
            total = customers.len(),
            individuals = individual_count,
            businesses = business_count,
            "Generated customer batch"
        );
        Ok(customers)
    }
}

/// With probability `p` one of CLEAR/PENDING/HIT, otherwise CLEAR.
fn rare_screening<R: Rng>(rng: &mut R, p: f64) -> ScreeningStatus {
    if rng.gen_bool(p) {
        pick(rng, &ScreeningStatus::ALL)
    } else {
        ScreeningStatus::Clear
    }
}
