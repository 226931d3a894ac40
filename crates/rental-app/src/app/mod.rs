//! Application Layer
//!
//! This module provides the application layer that orchestrates between
//! the CLI and the domain/infrastructure layers.
//!
//! The app layer contains:
//! - `booking_service`: creating bookings and taking payment for them
//! - `query_service`: read-only views (search, filters, statistics)
//! - `record_service`: validated add/update and existence checks

pub mod booking_service;
pub mod query_service;
pub mod record_service;

// Re-export main types for convenience
pub use booking_service::{create_booking, pay_booking, BookingDraft};
pub use record_service::{add_validated, delete_existing, require, update_validated};
