//! Fleet car records

use std::fmt;
use std::str::FromStr;

use rental_types::{RecordId, UNASSIGNED_ID};
use serde::{Deserialize, Serialize};

use super::Validate;
use crate::record::Record;

/// Oldest model year accepted
pub const MIN_YEAR: i32 = 1901;
/// Newest model year accepted
pub const MAX_YEAR: i32 = 2025;

/// Rental status of a car
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CarStatus {
    #[default]
    Available,
    Rented,
    Maintenance,
    Retired,
}

impl CarStatus {
    pub const ALL: [CarStatus; 4] = [
        CarStatus::Available,
        CarStatus::Rented,
        CarStatus::Maintenance,
        CarStatus::Retired,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CarStatus::Available => "Available",
            CarStatus::Rented => "Rented",
            CarStatus::Maintenance => "Maintenance",
            CarStatus::Retired => "Retired",
        }
    }

    /// Case-insensitive; unknown words read as `Available`
    pub fn from_label(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for CarStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown car status: {}", s))
    }
}

impl fmt::Display for CarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fuel type of a car
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    #[default]
    Gasoline,
    Diesel,
    Electric,
    Hybrid,
}

impl FuelType {
    pub const ALL: [FuelType; 4] = [
        FuelType::Gasoline,
        FuelType::Diesel,
        FuelType::Electric,
        FuelType::Hybrid,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Gasoline => "Gasoline",
            FuelType::Diesel => "Diesel",
            FuelType::Electric => "Electric",
            FuelType::Hybrid => "Hybrid",
        }
    }

    /// Case-insensitive; unknown words read as `Gasoline`
    pub fn from_label(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for FuelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|fuel| fuel.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown fuel type: {}", s))
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Gearbox of a car
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transmission {
    #[default]
    Manual,
    Automatic,
}

impl Transmission {
    pub const ALL: [Transmission; 2] = [Transmission::Manual, Transmission::Automatic];

    pub fn label(&self) -> &'static str {
        match self {
            Transmission::Manual => "Manual",
            Transmission::Automatic => "Automatic",
        }
    }

    /// Case-insensitive; unknown words read as `Manual`
    pub fn from_label(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for Transmission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown transmission: {}", s))
    }
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A car in the rental fleet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: RecordId,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub license_plate: String,
    /// Price per rental day
    pub daily_rate: f64,
    pub status: CarStatus,
    /// Odometer reading; only moves forward through [`Car::update_mileage`]
    pub mileage: u32,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub seats: u32,
}

impl Default for Car {
    fn default() -> Self {
        Self {
            id: UNASSIGNED_ID,
            make: String::new(),
            model: String::new(),
            year: 0,
            color: String::new(),
            license_plate: String::new(),
            daily_rate: 0.0,
            status: CarStatus::Available,
            mileage: 0,
            fuel_type: FuelType::Gasoline,
            transmission: Transmission::Manual,
            seats: 0,
        }
    }
}

impl Car {
    /// New unstored car: status Available, mileage 0
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        color: impl Into<String>,
        license_plate: impl Into<String>,
        daily_rate: f64,
        fuel_type: FuelType,
        transmission: Transmission,
        seats: u32,
    ) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
            color: color.into(),
            license_plate: license_plate.into(),
            daily_rate,
            fuel_type,
            transmission,
            seats,
            ..Self::default()
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == CarStatus::Available
    }

    /// Move the odometer forward. Lower readings are refused and `false` is returned.
    pub fn update_mileage(&mut self, new_mileage: u32) -> bool {
        if new_mileage >= self.mileage {
            self.mileage = new_mileage;
            true
        } else {
            false
        }
    }

    pub fn rental_cost(&self, days: i64) -> f64 {
        self.daily_rate * days as f64
    }

    /// Case-insensitive substring match on make, model, color and plate
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        [&self.make, &self.model, &self.color, &self.license_plate]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }

    /// `[id] year make model - Status - $rate/day`
    pub fn summary(&self) -> String {
        format!(
            "[{}] {} {} {} - {} - ${}/day",
            self.id, self.year, self.make, self.model, self.status, self.daily_rate
        )
    }
}

impl Validate for Car {
    fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.make.is_empty() {
            errors.push("Make is required.".to_string());
        }
        if self.model.is_empty() {
            errors.push("Model is required.".to_string());
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            errors.push(format!("Year must be between {} and {}.", MIN_YEAR, MAX_YEAR));
        }
        if self.color.is_empty() {
            errors.push("Color is required.".to_string());
        }
        if self.license_plate.is_empty() {
            errors.push("License plate is required.".to_string());
        }
        if self.daily_rate.is_nan() || self.daily_rate <= 0.0 {
            errors.push("Daily rate must be positive.".to_string());
        }
        if self.seats == 0 {
            errors.push("Seats must be positive.".to_string());
        }
        errors
    }
}

impl Record for Car {
    const KIND: &'static str = "Car";
    const FILE_NAME: &'static str = "cars.csv";
    const HEADER: &'static [&'static str] = &[
        "ID",
        "Make",
        "Model",
        "Year",
        "Color",
        "LicensePlate",
        "DailyRate",
        "Status",
        "Mileage",
        "FuelType",
        "Transmission",
        "Seats",
    ];
    const MIN_FIELDS: usize = 12;

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.make.clone(),
            self.model.clone(),
            self.year.to_string(),
            self.color.clone(),
            self.license_plate.clone(),
            self.daily_rate.to_string(),
            self.status.label().to_string(),
            self.mileage.to_string(),
            self.fuel_type.label().to_string(),
            self.transmission.label().to_string(),
            self.seats.to_string(),
        ]
    }

    fn from_fields(fields: &[&str]) -> Option<Self> {
        if fields.len() < Self::MIN_FIELDS {
            return None;
        }
        Some(Self {
            id: fields[0].trim().parse().ok()?,
            make: fields[1].to_string(),
            model: fields[2].to_string(),
            year: fields[3].trim().parse().ok()?,
            color: fields[4].to_string(),
            license_plate: fields[5].to_string(),
            daily_rate: fields[6].trim().parse().ok()?,
            status: CarStatus::from_label(fields[7]),
            mileage: fields[8].trim().parse().ok()?,
            fuel_type: FuelType::from_label(fields[9]),
            transmission: Transmission::from_label(fields[10]),
            seats: fields[11].trim().parse().ok()?,
        })
    }
}
