//! Store adapters for the persistence layer

use std::path::Path;

use rental_infra::persistence::{BookingStore, CarStore, CustomerStore, WriteMode};
use rental_types::Result;

use crate::config::Config;

/// Open the car store in the configured data directory
pub fn open_car_store(config: &Config) -> Result<CarStore> {
    open_car_store_at(&config.data_dir, config.write_mode())
}

/// Open the customer store in the configured data directory
pub fn open_customer_store(config: &Config) -> Result<CustomerStore> {
    open_customer_store_at(&config.data_dir, config.write_mode())
}

/// Open the booking store in the configured data directory
pub fn open_booking_store(config: &Config) -> Result<BookingStore> {
    open_booking_store_at(&config.data_dir, config.write_mode())
}

/// Open the car store at a custom directory
pub fn open_car_store_at(data_dir: &Path, write_mode: WriteMode) -> Result<CarStore> {
    Ok(CarStore::open(data_dir)?.with_write_mode(write_mode))
}

/// Open the customer store at a custom directory
pub fn open_customer_store_at(data_dir: &Path, write_mode: WriteMode) -> Result<CustomerStore> {
    Ok(CustomerStore::open(data_dir)?.with_write_mode(write_mode))
}

/// Open the booking store at a custom directory
pub fn open_booking_store_at(data_dir: &Path, write_mode: WriteMode) -> Result<BookingStore> {
    Ok(BookingStore::open(data_dir)?.with_write_mode(write_mode))
}
