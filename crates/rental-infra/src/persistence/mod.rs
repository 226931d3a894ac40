//! Persistence implementations
//!
//! This module provides the flat-file implementation of the repository trait.

mod flat_file_store;

pub use flat_file_store::{FlatFileStore, LoadReport, WriteMode};

use rental_domain::{Booking, Car, Customer};

pub type CarStore = FlatFileStore<Car>;
pub type CustomerStore = FlatFileStore<Customer>;
pub type BookingStore = FlatFileStore<Booking>;
