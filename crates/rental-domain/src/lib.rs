//! Domain layer for the car rental record keeper
//!
//! Entities and their validation rules, the one-line record codec shared by
//! every backing file, the repository trait implemented by the persistence
//! layer, and the pure services (statistics, payments) built on top.

pub mod model;
pub mod record;
pub mod repository;
pub mod service;

pub use model::*;
pub use record::Record;
pub use repository::RecordRepository;
