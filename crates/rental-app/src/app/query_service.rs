//! Query Service - Read-Only Views Over Stored Records
//!
//! Every view loads the full record set from its repository and filters or
//! aggregates in memory:
//! - Cars: search, availability, fleet statistics
//! - Customers: search, count
//! - Bookings: by customer, by car, active, statistics

use rental_domain::service::{BookingStats, FleetStats};
use rental_domain::{Booking, Car, Customer, RecordRepository};
use rental_types::{RecordId, Result};

// ============================================================================
// Car Queries
// ============================================================================

/// Cars whose make, model, color or plate contains `term`, ignoring case
pub fn search_cars(cars: &impl RecordRepository<Car>, term: &str) -> Result<Vec<Car>> {
    Ok(cars
        .find_all()?
        .into_iter()
        .filter(|car| car.matches_search(term))
        .collect())
}

/// Cars whose status is Available
pub fn available_cars(cars: &impl RecordRepository<Car>) -> Result<Vec<Car>> {
    Ok(cars
        .find_all()?
        .into_iter()
        .filter(Car::is_available)
        .collect())
}

pub fn fleet_stats(cars: &impl RecordRepository<Car>) -> Result<FleetStats> {
    Ok(FleetStats::from_cars(&cars.find_all()?))
}

// ============================================================================
// Customer Queries
// ============================================================================

/// Customers whose full name or email contains `term`, ignoring case
pub fn search_customers(
    customers: &impl RecordRepository<Customer>,
    term: &str,
) -> Result<Vec<Customer>> {
    Ok(customers
        .find_all()?
        .into_iter()
        .filter(|customer| customer.matches_search(term))
        .collect())
}

pub fn customer_count(customers: &impl RecordRepository<Customer>) -> Result<usize> {
    Ok(customers.find_all()?.len())
}

// ============================================================================
// Booking Queries
// ============================================================================

pub fn bookings_by_customer(
    bookings: &impl RecordRepository<Booking>,
    customer_id: RecordId,
) -> Result<Vec<Booking>> {
    Ok(bookings
        .find_all()?
        .into_iter()
        .filter(|booking| booking.customer_id == customer_id)
        .collect())
}

pub fn bookings_by_car(
    bookings: &impl RecordRepository<Booking>,
    car_id: RecordId,
) -> Result<Vec<Booking>> {
    Ok(bookings
        .find_all()?
        .into_iter()
        .filter(|booking| booking.car_id == car_id)
        .collect())
}

/// Bookings whose status is exactly "Active"
pub fn active_bookings(bookings: &impl RecordRepository<Booking>) -> Result<Vec<Booking>> {
    Ok(bookings
        .find_all()?
        .into_iter()
        .filter(Booking::is_active)
        .collect())
}

pub fn booking_stats(bookings: &impl RecordRepository<Booking>) -> Result<BookingStats> {
    Ok(BookingStats::from_bookings(&bookings.find_all()?))
}
