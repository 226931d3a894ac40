//! Domain services

pub mod payment;
pub mod statistics;

pub use payment::{process_payment, total_with_tax, validate_payment, PaymentConfirmation, TAX_RATE};
pub use statistics::{BookingStats, FleetStats};
