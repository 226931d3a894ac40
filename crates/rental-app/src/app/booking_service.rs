//! Booking Service - Creating and Paying for Bookings
//!
//! Creating a booking:
//! 1. Look up the car
//! 2. Price the booking from the car's daily rate, or take the given cost
//! 3. Validate and store with status Active
//!
//! Paying for a booking takes its stored total cost as the base amount.

use chrono::NaiveDate;
use rental_domain::service::{process_payment, PaymentConfirmation};
use rental_domain::{Booking, Car, Record, RecordRepository};
use rental_types::{Error, RecordId, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::record_service::{add_validated, require};

/// Input for a new booking
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub customer_id: RecordId,
    pub car_id: RecordId,
    pub start_date: String,
    pub end_date: String,
    /// Used only when the car is not on file
    pub total_cost: Option<f64>,
    pub notes: String,
}

/// Turn a draft into a stored booking.
///
/// The total cost is `duration * daily_rate` when the car exists. When it
/// does not, the draft's own cost is used; with no cost either, the missing
/// car is reported. Customers are not looked up.
pub fn create_booking(
    bookings: &impl RecordRepository<Booking>,
    cars: &impl RecordRepository<Car>,
    draft: BookingDraft,
) -> Result<Booking> {
    let mut booking = Booking::new(
        draft.customer_id,
        draft.car_id,
        draft.start_date,
        draft.end_date,
        0.0,
    );
    booking.notes = draft.notes;

    booking.total_cost = match cars.find_by_id(draft.car_id)? {
        Some(car) => {
            let cost = booking.cost_for_rate(car.daily_rate);
            debug!(car_id = car.id, days = booking.duration(), cost, "priced booking from car rate");
            cost
        }
        None => draft.total_cost.ok_or(Error::NotFound {
            kind: Car::KIND,
            id: draft.car_id,
        })?,
    };

    let id = add_validated(bookings, booking.clone())?;
    booking.id = id;
    info!(id, customer_id = booking.customer_id, car_id = booking.car_id, "created booking");
    Ok(booking)
}

/// Accept payment of a stored booking's total cost
pub fn pay_booking(
    bookings: &impl RecordRepository<Booking>,
    booking_id: RecordId,
    method: &str,
    date: NaiveDate,
) -> Result<PaymentConfirmation> {
    let booking = require(bookings, booking_id)?;
    process_payment(booking.id, booking.total_cost, method, date)
}
