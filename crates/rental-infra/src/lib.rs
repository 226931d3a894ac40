//! Infrastructure layer
//!
//! Concrete implementations of the domain repository trait on top of flat
//! files, and the routine that prepares a data directory.

pub mod bootstrap;
pub mod persistence;
