//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use rental_domain::{CarStatus, FuelType, Transmission};
use rental_types::{OutputFormat, RecordId};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "car-rental")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Record keeper for cars, customers and bookings of a car rental business")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory holding the record files. Uses config value if not specified.
    #[arg(long, short = 'd', global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the data directory and empty record files
    Init,

    /// Manage cars
    Car {
        #[command(subcommand)]
        action: CarCommands,
    },

    /// Manage customers
    Customer {
        #[command(subcommand)]
        action: CustomerCommands,
    },

    /// Manage bookings
    Booking {
        #[command(subcommand)]
        action: BookingCommands,
    },

    /// Take payment for a booking and print the receipt
    Receipt {
        /// Booking ID
        booking_id: RecordId,

        /// Payment method (e.g., "Cash", "Credit Card")
        #[arg(long, short = 'm', default_value = "Cash")]
        method: String,
    },

    /// Show record files, counts and skipped lines
    Info,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set data directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Enable/disable write-to-temp-then-rename saves
        #[arg(long)]
        set_atomic: Option<bool>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
pub enum CarCommands {
    /// Add a car to the fleet
    Add(NewCar),

    /// List all cars
    List,

    /// Show one car
    Show { id: RecordId },

    /// Search make, model, color and license plate
    Search { term: String },

    /// Change fields of a car; omitted fields keep their value
    Update(CarUpdate),

    /// Delete a car
    Delete {
        id: RecordId,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List cars that are available
    Available,

    /// Fleet statistics
    Stats,
}

#[derive(Args)]
pub struct NewCar {
    #[arg(long)]
    pub make: String,

    #[arg(long)]
    pub model: String,

    #[arg(long)]
    pub year: i32,

    #[arg(long)]
    pub color: String,

    #[arg(long)]
    pub plate: String,

    /// Daily rate
    #[arg(long)]
    pub rate: f64,

    #[arg(long, default_value_t = 0)]
    pub mileage: u32,

    /// Gasoline, Diesel, Electric or Hybrid
    #[arg(long, default_value = "Gasoline")]
    pub fuel: FuelType,

    /// Manual or Automatic
    #[arg(long, default_value = "Manual")]
    pub transmission: Transmission,

    #[arg(long)]
    pub seats: u32,
}

#[derive(Args)]
pub struct CarUpdate {
    pub id: RecordId,

    #[arg(long)]
    pub make: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub year: Option<i32>,

    #[arg(long)]
    pub color: Option<String>,

    #[arg(long)]
    pub plate: Option<String>,

    #[arg(long)]
    pub rate: Option<f64>,

    /// Available, Rented, Maintenance or Retired
    #[arg(long)]
    pub status: Option<CarStatus>,

    /// New odometer reading; may not be lower than the current one
    #[arg(long)]
    pub mileage: Option<u32>,

    #[arg(long)]
    pub fuel: Option<FuelType>,

    #[arg(long)]
    pub transmission: Option<Transmission>,

    #[arg(long)]
    pub seats: Option<u32>,
}

#[derive(Subcommand)]
pub enum CustomerCommands {
    /// Register a customer
    Add(NewCustomer),

    /// List all customers
    List,

    /// Show one customer
    Show { id: RecordId },

    /// Search full name and email
    Search { term: String },

    /// Change fields of a customer; omitted fields keep their value
    Update(CustomerUpdate),

    /// Delete a customer
    Delete {
        id: RecordId,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Args)]
pub struct NewCustomer {
    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: String,

    #[arg(long)]
    pub address: String,

    /// Driving license number
    #[arg(long)]
    pub license: String,

    /// License expiry date (YYYY-MM-DD)
    #[arg(long)]
    pub expiry: String,
}

#[derive(Args)]
pub struct CustomerUpdate {
    pub id: RecordId,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub license: Option<String>,

    #[arg(long)]
    pub expiry: Option<String>,
}

#[derive(Subcommand)]
pub enum BookingCommands {
    /// Book a car for a customer
    Add(NewBooking),

    /// List all bookings
    List,

    /// Show one booking
    Show { id: RecordId },

    /// Bookings of one customer
    ByCustomer { customer_id: RecordId },

    /// Bookings of one car
    ByCar { car_id: RecordId },

    /// Bookings with status Active
    Active,

    /// Change fields of a booking; omitted fields keep their value
    Update(BookingUpdate),

    /// Delete a booking
    Delete {
        id: RecordId,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Booking statistics
    Stats,
}

#[derive(Args)]
pub struct NewBooking {
    #[arg(long)]
    pub customer: RecordId,

    #[arg(long)]
    pub car: RecordId,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: String,

    /// End date (YYYY-MM-DD), after the start date
    #[arg(long)]
    pub end: String,

    /// Total cost, used only when the car is not on file
    #[arg(long)]
    pub cost: Option<f64>,

    #[arg(long, default_value = "")]
    pub notes: String,
}

#[derive(Args)]
pub struct BookingUpdate {
    pub id: RecordId,

    #[arg(long)]
    pub customer: Option<RecordId>,

    #[arg(long)]
    pub car: Option<RecordId>,

    #[arg(long)]
    pub start: Option<String>,

    #[arg(long)]
    pub end: Option<String>,

    #[arg(long)]
    pub cost: Option<f64>,

    /// Active, Completed, Cancelled or any other word
    #[arg(long)]
    pub status: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,
}
