//! Aggregate statistics over loaded record sets

use serde::{Deserialize, Serialize};

use crate::model::{Booking, Car, CarStatus};

/// Fleet counts and average daily rate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetStats {
    pub total: usize,
    pub available: usize,
    pub rented: usize,
    pub maintenance: usize,
    pub retired: usize,
    /// Arithmetic mean of daily rates; `0.0` for an empty fleet
    pub average_daily_rate: f64,
}

impl FleetStats {
    pub fn from_cars(cars: &[Car]) -> Self {
        let count = |status: CarStatus| cars.iter().filter(|c| c.status == status).count();
        let average_daily_rate = if cars.is_empty() {
            0.0
        } else {
            cars.iter().map(|c| c.daily_rate).sum::<f64>() / cars.len() as f64
        };

        Self {
            total: cars.len(),
            available: count(CarStatus::Available),
            rented: count(CarStatus::Rented),
            maintenance: count(CarStatus::Maintenance),
            retired: count(CarStatus::Retired),
            average_daily_rate,
        }
    }
}

/// Booking counts by recognised status plus booked revenue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub cancelled: usize,
    /// Sum of total cost over bookings that are not cancelled
    pub revenue: f64,
}

impl BookingStats {
    pub fn from_bookings(bookings: &[Booking]) -> Self {
        Self {
            total: bookings.len(),
            active: bookings.iter().filter(|b| b.is_active()).count(),
            completed: bookings.iter().filter(|b| b.is_completed()).count(),
            cancelled: bookings.iter().filter(|b| b.is_cancelled()).count(),
            revenue: bookings
                .iter()
                .filter(|b| !b.is_cancelled())
                .map(|b| b.total_cost)
                .sum(),
        }
    }
}
