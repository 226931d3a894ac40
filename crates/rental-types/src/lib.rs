//! Core types for the car rental record keeper

mod error;

pub use error::*;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Identifier of a stored record.
///
/// Stored rows always carry an id of 1 or more; `0` marks a record that has
/// not been assigned an id yet.
pub type RecordId = u32;

/// Id carried by records that have not been stored yet
pub const UNASSIGNED_ID: RecordId = 0;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
