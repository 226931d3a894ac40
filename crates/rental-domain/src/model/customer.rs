//! Customer records

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use rental_types::{RecordId, UNASSIGNED_ID};
use serde::{Deserialize, Serialize};

use super::date::{has_date_shape, Ymd};
use super::Validate;
use crate::record::Record;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern compiles")
});

/// Digits a phone number must contain once punctuation is stripped
pub const PHONE_DIGITS: usize = 10;

/// Shortest accepted driving license number
pub const MIN_LICENSE_LEN: usize = 5;

/// A renting customer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub license_number: String,
    /// `YYYY-MM-DD`
    pub license_expiry: String,
}

impl Customer {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        license_number: impl Into<String>,
        license_expiry: impl Into<String>,
    ) -> Self {
        Self {
            id: UNASSIGNED_ID,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: phone.into(),
            address: address.into(),
            license_number: license_number.into(),
            license_expiry: license_expiry.into(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// License has a well-formed expiry that is not before `today`.
    ///
    /// Compares year, then month, then day; no calendar arithmetic.
    pub fn is_license_valid_on(&self, today: NaiveDate) -> bool {
        if !has_date_shape(&self.license_expiry) {
            return false;
        }
        match Ymd::parse(&self.license_expiry) {
            Some(expiry) => expiry >= Ymd::from_naive(today),
            None => false,
        }
    }

    /// [`Customer::is_license_valid_on`] against the local date
    pub fn is_license_valid(&self) -> bool {
        self.is_license_valid_on(Local::now().date_naive())
    }

    /// Case-insensitive substring match on full name and email
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.full_name().to_lowercase().contains(&term) || self.email.to_lowercase().contains(&term)
    }

    /// `[id] First Last - email - License: Valid|Invalid`
    pub fn summary(&self) -> String {
        format!(
            "[{}] {} - {} - License: {}",
            self.id,
            self.full_name(),
            self.email,
            if self.is_license_valid() { "Valid" } else { "Invalid" }
        )
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Exactly ten digits once every non-digit character is ignored
pub fn is_valid_phone(phone: &str) -> bool {
    phone.chars().filter(|c| c.is_ascii_digit()).count() == PHONE_DIGITS
}

/// At least five characters, ASCII letters and digits only
pub fn is_valid_license_number(license_number: &str) -> bool {
    license_number.len() >= MIN_LICENSE_LEN
        && license_number.chars().all(|c| c.is_ascii_alphanumeric())
}

impl Validate for Customer {
    fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.first_name.is_empty() {
            errors.push("First name is required.".to_string());
        }
        if self.last_name.is_empty() {
            errors.push("Last name is required.".to_string());
        }
        if !is_valid_email(&self.email) {
            errors.push("Valid email is required.".to_string());
        }
        if !is_valid_phone(&self.phone) {
            errors.push("Valid phone number is required.".to_string());
        }
        if self.address.is_empty() {
            errors.push("Address is required.".to_string());
        }
        if !is_valid_license_number(&self.license_number) {
            errors.push("Valid license number is required.".to_string());
        }
        if self.license_expiry.is_empty() {
            errors.push("License expiry date is required.".to_string());
        }
        errors
    }
}

impl Record for Customer {
    const KIND: &'static str = "Customer";
    const FILE_NAME: &'static str = "customers.csv";
    const HEADER: &'static [&'static str] = &[
        "ID",
        "FirstName",
        "LastName",
        "Email",
        "Phone",
        "Address",
        "LicenseNumber",
        "LicenseExpiry",
    ];
    const MIN_FIELDS: usize = 8;

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.address.clone(),
            self.license_number.clone(),
            self.license_expiry.clone(),
        ]
    }

    fn from_fields(fields: &[&str]) -> Option<Self> {
        if fields.len() < Self::MIN_FIELDS {
            return None;
        }
        Some(Self {
            id: fields[0].trim().parse().ok()?,
            first_name: fields[1].to_string(),
            last_name: fields[2].to_string(),
            email: fields[3].to_string(),
            phone: fields[4].to_string(),
            address: fields[5].to_string(),
            license_number: fields[6].to_string(),
            license_expiry: fields[7].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{decode_line, encode_line, header_line};

    fn sample_customer() -> Customer {
        let mut customer = Customer::new(
            "Jane",
            "Doe",
            "jane.doe@example.com",
            "555-123-4567",
            "12 Main St",
            "DL12345",
            "2030-06-30",
        );
        customer.id = 3;
        customer
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_full_name() {
        assert_eq!(sample_customer().full_name(), "Jane Doe");
    }

    #[test]
    fn test_phone_digit_count() {
        assert!(is_valid_phone("555-123-4567"));
        assert!(is_valid_phone("(555) 123 4567"));
        assert!(!is_valid_phone("555-123-456"));
        assert!(!is_valid_phone("1-555-123-4567"));
    }

    #[test]
    fn test_license_number_rules() {
        assert!(!is_valid_license_number("AB12"));
        assert!(is_valid_license_number("AB123"));
        assert!(!is_valid_license_number("AB-123"));
        assert!(!is_valid_license_number(""));
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a.b+c@mail.example.org"));
        assert!(!is_valid_email("no-at-sign.example.com"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email(" user@example.com"));
    }

    #[test]
    fn test_validation_errors_in_field_order() {
        let customer = Customer::default();
        assert_eq!(
            customer.validation_errors(),
            vec![
                "First name is required.",
                "Last name is required.",
                "Valid email is required.",
                "Valid phone number is required.",
                "Address is required.",
                "Valid license number is required.",
                "License expiry date is required.",
            ]
        );
        assert!(sample_customer().is_valid());
    }

    #[test]
    fn test_license_validity_compares_year_month_day() {
        let mut customer = sample_customer();
        customer.license_expiry = "2025-06-15".to_string();
        assert!(customer.is_license_valid_on(day(2025, 6, 15)));
        assert!(customer.is_license_valid_on(day(2025, 6, 14)));
        assert!(!customer.is_license_valid_on(day(2025, 6, 16)));
        assert!(!customer.is_license_valid_on(day(2025, 7, 1)));
        assert!(!customer.is_license_valid_on(day(2026, 1, 1)));
        assert!(customer.is_license_valid_on(day(2024, 12, 31)));
    }

    #[test]
    fn test_malformed_expiry_is_never_valid() {
        let mut customer = sample_customer();
        customer.license_expiry = "2030/06/30".to_string();
        assert!(!customer.is_license_valid_on(day(2020, 1, 1)));
        customer.license_expiry = String::new();
        assert!(!customer.is_license_valid_on(day(2020, 1, 1)));
    }

    #[test]
    fn test_codec_line() {
        assert_eq!(
            header_line::<Customer>(),
            "ID,FirstName,LastName,Email,Phone,Address,LicenseNumber,LicenseExpiry"
        );
        let customer = sample_customer();
        let line = encode_line(&customer);
        assert_eq!(
            line,
            "3,Jane,Doe,jane.doe@example.com,555-123-4567,12 Main St,DL12345,2030-06-30"
        );
        assert_eq!(decode_line::<Customer>(&line), Some(customer));
    }

    #[test]
    fn test_comma_in_address_shifts_columns() {
        let mut customer = sample_customer();
        customer.address = "12 Main St, Apt 4".to_string();
        let decoded: Customer = decode_line(&encode_line(&customer)).unwrap();
        assert_eq!(decoded.address, "12 Main St");
        assert_eq!(decoded.license_number, " Apt 4");
        assert_eq!(decoded.license_expiry, "DL12345");
        assert_ne!(decoded, customer);
    }

    #[test]
    fn test_search_matches_name_or_email() {
        let customer = sample_customer();
        assert!(customer.matches_search("jane d"));
        assert!(customer.matches_search("EXAMPLE.COM"));
        assert!(!customer.matches_search("main st"));
    }
}
