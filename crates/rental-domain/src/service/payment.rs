//! Payment checks and receipt text
//!
//! There is no payment gateway: processing a payment only validates the
//! amount and returns what a receipt needs.

use chrono::NaiveDate;
use rental_types::{Error, RecordId, Result};
use serde::{Deserialize, Serialize};

/// Sales tax applied on top of a booking amount
pub const TAX_RATE: f64 = 0.08;

/// Largest single payment accepted
pub const MAX_PAYMENT: f64 = 10_000.0;

/// Amount must be positive and at most [`MAX_PAYMENT`]
pub fn validate_payment(amount: f64) -> bool {
    amount > 0.0 && amount <= MAX_PAYMENT
}

pub fn tax_for(amount: f64) -> f64 {
    amount * TAX_RATE
}

pub fn total_with_tax(amount: f64) -> f64 {
    amount + tax_for(amount)
}

/// An accepted payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    pub booking_id: RecordId,
    pub amount: f64,
    pub tax: f64,
    pub total: f64,
    pub method: String,
    pub date: NaiveDate,
}

impl PaymentConfirmation {
    /// Fixed-layout receipt block, amounts with two decimals
    pub fn receipt(&self) -> String {
        let mut receipt = String::new();
        receipt.push_str("=== PAYMENT RECEIPT ===\n");
        receipt.push_str(&format!("Booking ID: {}\n", self.booking_id));
        receipt.push_str(&format!("Base Amount: ${:.2}\n", self.amount));
        receipt.push_str(&format!("Tax ({:.0}%): ${:.2}\n", TAX_RATE * 100.0, self.tax));
        receipt.push_str(&format!("Total: ${:.2}\n", self.total));
        receipt.push_str(&format!("Payment Method: {}\n", self.method));
        receipt.push_str(&format!("Date: {}\n", self.date.format("%Y-%m-%d")));
        receipt.push_str("=========================\n");
        receipt
    }
}

/// Accept a payment of `amount` for a booking, or reject it
pub fn process_payment(
    booking_id: RecordId,
    amount: f64,
    method: &str,
    date: NaiveDate,
) -> Result<PaymentConfirmation> {
    if !validate_payment(amount) {
        return Err(Error::Payment(format!(
            "amount {:.2} must be greater than 0 and at most {:.2}",
            amount, MAX_PAYMENT
        )));
    }
    if method.trim().is_empty() {
        return Err(Error::Payment("payment method is required".to_string()));
    }

    Ok(PaymentConfirmation {
        booking_id,
        amount,
        tax: tax_for(amount),
        total: total_with_tax(amount),
        method: method.trim().to_string(),
        date,
    })
}
