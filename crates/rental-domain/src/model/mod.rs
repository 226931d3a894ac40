//! Domain model types

pub mod booking;
pub mod car;
pub mod customer;
pub mod date;

pub use booking::{Booking, BookingStatus};
pub use car::{Car, CarStatus, FuelType, Transmission};
pub use customer::Customer;

/// Field-level validation shared by every entity.
///
/// Validation is pure: it never looks at other stored records, so duplicate
/// plates, duplicate emails and overlapping bookings are not detected here.
pub trait Validate {
    /// One human-readable message per failing rule, in field order
    fn validation_errors(&self) -> Vec<String>;

    fn is_valid(&self) -> bool {
        self.validation_errors().is_empty()
    }

    /// All messages on one line, each followed by a space
    fn validation_summary(&self) -> String {
        self.validation_errors()
            .iter()
            .map(|msg| format!("{} ", msg))
            .collect()
    }
}
