//! Command handlers

use crate::cli::{
    BookingCommands, BookingUpdate, CarCommands, CarUpdate, Cli, Commands, CustomerCommands,
    CustomerUpdate,
};
use crate::output::{
    output_booking, output_booking_stats, output_bookings, output_car, output_cars,
    output_customer, output_customers, output_fleet_stats, output_info, output_receipt, FileInfo,
};
use chrono::Local;
use rental_app::app::query_service::{
    active_bookings, available_cars, booking_stats, bookings_by_car, bookings_by_customer,
    fleet_stats, search_cars, search_customers,
};
use rental_app::app::{
    add_validated, create_booking, delete_existing, pay_booking, require, update_validated,
    BookingDraft,
};
use rental_app::config::Config;
use rental_app::repository::{open_booking_store, open_car_store, open_customer_store};
use rental_domain::{Booking, Car, Customer, Record, RecordRepository};
use rental_infra::bootstrap::initialize_data_dir;
use rental_infra::persistence::FlatFileStore;
use rental_types::{Error, OutputFormat, RecordId, Result};
use std::path::PathBuf;
use tracing::debug;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref data_dir) = cli.data_dir {
        config.data_dir = data_dir.clone();
    }
    let output_format = cli.format.unwrap_or(config.output_format);
    debug!(
        data_dir = %config.data_dir.display(),
        format = %output_format,
        atomic_writes = config.atomic_writes,
        "resolved configuration"
    );

    match cli.command {
        Commands::Init => cmd_init(&config),
        Commands::Car { action } => cmd_car(&config, action, output_format),
        Commands::Customer { action } => cmd_customer(&config, action, output_format),
        Commands::Booking { action } => cmd_booking(&config, action, output_format),
        Commands::Receipt { booking_id, method } => {
            cmd_receipt(&config, booking_id, &method, output_format)
        }
        Commands::Info => cmd_info(&config, output_format),
        Commands::Config {
            show,
            set_data_dir,
            set_output,
            set_atomic,
            reset,
        } => cmd_config(show, set_data_dir, set_output, set_atomic, reset),
    }
}

fn cmd_init(config: &Config) -> Result<()> {
    let report = initialize_data_dir(&config.data_dir)?;

    if report.is_empty() {
        println!("Data directory already set up: {}", config.data_dir.display());
        return Ok(());
    }
    for dir in &report.created_dirs {
        println!("Created directory {}", dir.display());
    }
    for file in &report.created_files {
        println!("Created {}", file.display());
    }
    Ok(())
}

fn cmd_car(config: &Config, action: CarCommands, output_format: OutputFormat) -> Result<()> {
    let cars = open_car_store(config)?;

    match action {
        CarCommands::Add(new) => {
            let mut car = Car::new(
                new.make,
                new.model,
                new.year,
                new.color,
                new.plate,
                new.rate,
                new.fuel,
                new.transmission,
                new.seats,
            );
            car.mileage = new.mileage;
            let id = add_validated(&cars, car)?;
            println!("Car added with ID: {}", id);
        }
        CarCommands::List => output_cars(output_format, &cars.find_all()?)?,
        CarCommands::Show { id } => output_car(output_format, &require(&cars, id)?)?,
        CarCommands::Search { term } => {
            let found = search_cars(&cars, &term)?;
            if output_format == OutputFormat::Table {
                println!("Found {} car(s) matching: {}\n", found.len(), term);
            }
            output_cars(output_format, &found)?;
        }
        CarCommands::Update(update) => {
            let mut car = require(&cars, update.id)?;
            apply_car_update(&mut car, update)?;
            update_validated(&cars, &car)?;
            println!("Car {} updated.", car.id);
        }
        CarCommands::Delete { id, yes } => delete_record(&cars, id, yes)?,
        CarCommands::Available => output_cars(output_format, &available_cars(&cars)?)?,
        CarCommands::Stats => output_fleet_stats(output_format, &fleet_stats(&cars)?)?,
    }
    Ok(())
}

fn apply_car_update(car: &mut Car, update: CarUpdate) -> Result<()> {
    if let Some(make) = update.make {
        car.make = make;
    }
    if let Some(model) = update.model {
        car.model = model;
    }
    if let Some(year) = update.year {
        car.year = year;
    }
    if let Some(color) = update.color {
        car.color = color;
    }
    if let Some(plate) = update.plate {
        car.license_plate = plate;
    }
    if let Some(rate) = update.rate {
        car.daily_rate = rate;
    }
    if let Some(status) = update.status {
        car.status = status;
    }
    if let Some(mileage) = update.mileage {
        if !car.update_mileage(mileage) {
            return Err(Error::Validation {
                kind: Car::KIND,
                messages: vec![format!(
                    "Mileage cannot go below the current reading of {}.",
                    car.mileage
                )],
            });
        }
    }
    if let Some(fuel) = update.fuel {
        car.fuel_type = fuel;
    }
    if let Some(transmission) = update.transmission {
        car.transmission = transmission;
    }
    if let Some(seats) = update.seats {
        car.seats = seats;
    }
    Ok(())
}

fn cmd_customer(
    config: &Config,
    action: CustomerCommands,
    output_format: OutputFormat,
) -> Result<()> {
    let customers = open_customer_store(config)?;

    match action {
        CustomerCommands::Add(new) => {
            let customer = Customer::new(
                new.first_name,
                new.last_name,
                new.email,
                new.phone,
                new.address,
                new.license,
                new.expiry,
            );
            let id = add_validated(&customers, customer)?;
            println!("Customer added with ID: {}", id);
        }
        CustomerCommands::List => output_customers(output_format, &customers.find_all()?)?,
        CustomerCommands::Show { id } => {
            output_customer(output_format, &require(&customers, id)?)?
        }
        CustomerCommands::Search { term } => {
            let found = search_customers(&customers, &term)?;
            if output_format == OutputFormat::Table {
                println!("Found {} customer(s) matching: {}\n", found.len(), term);
            }
            output_customers(output_format, &found)?;
        }
        CustomerCommands::Update(update) => {
            let mut customer = require(&customers, update.id)?;
            apply_customer_update(&mut customer, update);
            update_validated(&customers, &customer)?;
            println!("Customer {} updated.", customer.id);
        }
        CustomerCommands::Delete { id, yes } => delete_record(&customers, id, yes)?,
    }
    Ok(())
}

fn apply_customer_update(customer: &mut Customer, update: CustomerUpdate) {
    if let Some(first_name) = update.first_name {
        customer.first_name = first_name;
    }
    if let Some(last_name) = update.last_name {
        customer.last_name = last_name;
    }
    if let Some(email) = update.email {
        customer.email = email;
    }
    if let Some(phone) = update.phone {
        customer.phone = phone;
    }
    if let Some(address) = update.address {
        customer.address = address;
    }
    if let Some(license) = update.license {
        customer.license_number = license;
    }
    if let Some(expiry) = update.expiry {
        customer.license_expiry = expiry;
    }
}

fn cmd_booking(
    config: &Config,
    action: BookingCommands,
    output_format: OutputFormat,
) -> Result<()> {
    let bookings = open_booking_store(config)?;

    match action {
        BookingCommands::Add(new) => {
            let cars = open_car_store(config)?;
            let draft = BookingDraft {
                customer_id: new.customer,
                car_id: new.car,
                start_date: new.start,
                end_date: new.end,
                total_cost: new.cost,
                notes: new.notes,
            };
            let booking = create_booking(&bookings, &cars, draft)?;
            println!(
                "Booking created with ID: {} ({} days, ${:.2})",
                booking.id,
                booking.duration(),
                booking.total_cost
            );
        }
        BookingCommands::List => output_bookings(output_format, &bookings.find_all()?)?,
        BookingCommands::Show { id } => output_booking(output_format, &require(&bookings, id)?)?,
        BookingCommands::ByCustomer { customer_id } => {
            output_bookings(output_format, &bookings_by_customer(&bookings, customer_id)?)?
        }
        BookingCommands::ByCar { car_id } => {
            output_bookings(output_format, &bookings_by_car(&bookings, car_id)?)?
        }
        BookingCommands::Active => output_bookings(output_format, &active_bookings(&bookings)?)?,
        BookingCommands::Update(update) => {
            let mut booking = require(&bookings, update.id)?;
            apply_booking_update(&mut booking, update);
            update_validated(&bookings, &booking)?;
            println!("Booking {} updated.", booking.id);
        }
        BookingCommands::Delete { id, yes } => delete_record(&bookings, id, yes)?,
        BookingCommands::Stats => output_booking_stats(output_format, &booking_stats(&bookings)?)?,
    }
    Ok(())
}

fn apply_booking_update(booking: &mut Booking, update: BookingUpdate) {
    if let Some(customer_id) = update.customer {
        booking.customer_id = customer_id;
    }
    if let Some(car_id) = update.car {
        booking.car_id = car_id;
    }
    if let Some(start) = update.start {
        booking.start_date = start;
    }
    if let Some(end) = update.end {
        booking.end_date = end;
    }
    if let Some(cost) = update.cost {
        booking.total_cost = cost;
    }
    if let Some(status) = update.status {
        booking.status = status;
    }
    if let Some(notes) = update.notes {
        booking.notes = notes;
    }
}

/// Delete after checking the record exists; nothing is removed without `--yes`
fn delete_record<R: Record>(
    repo: &impl RecordRepository<R>,
    id: RecordId,
    yes: bool,
) -> Result<()> {
    require(repo, id)?;

    if !yes {
        println!(
            "{} {} not deleted. Re-run with --yes to confirm.",
            R::KIND,
            id
        );
        return Ok(());
    }

    delete_existing(repo, id)?;
    println!("{} {} deleted.", R::KIND, id);
    Ok(())
}

fn cmd_receipt(
    config: &Config,
    booking_id: RecordId,
    method: &str,
    output_format: OutputFormat,
) -> Result<()> {
    let bookings = open_booking_store(config)?;
    let confirmation = pay_booking(&bookings, booking_id, method, Local::now().date_naive())?;
    output_receipt(output_format, &confirmation)
}

fn file_info<R: Record>(store: &FlatFileStore<R>) -> Result<FileInfo> {
    let report = store.load_report()?;
    Ok(FileInfo {
        kind: R::KIND,
        path: store.path().display().to_string(),
        exists: store.path().exists(),
        records: report.records.len(),
        dropped_lines: report.dropped,
        next_id: store.next_id(),
    })
}

fn cmd_info(config: &Config, output_format: OutputFormat) -> Result<()> {
    let files = vec![
        file_info(&open_car_store(config)?)?,
        file_info(&open_customer_store(config)?)?,
        file_info(&open_booking_store(config)?)?,
    ];
    output_info(output_format, &files)
}

fn cmd_config(
    show: bool,
    set_data_dir: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    set_atomic: Option<bool>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(data_dir) = set_data_dir {
        config.data_dir = data_dir;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(atomic_writes) = set_atomic {
        config.atomic_writes = atomic_writes;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rental_domain::{CarStatus, FuelType, Transmission};

    fn stored_car() -> Car {
        let mut car = Car::new(
            "Toyota",
            "Corolla",
            2020,
            "Blue",
            "ABC123",
            45.5,
            FuelType::Gasoline,
            Transmission::Automatic,
            5,
        );
        car.id = 3;
        car.mileage = 1000;
        car
    }

    fn car_update(id: RecordId) -> CarUpdate {
        CarUpdate {
            id,
            make: None,
            model: None,
            year: None,
            color: None,
            plate: None,
            rate: None,
            status: None,
            mileage: None,
            fuel: None,
            transmission: None,
            seats: None,
        }
    }

    #[test]
    fn test_car_update_keeps_omitted_fields() {
        let mut car = stored_car();
        let update = CarUpdate {
            color: Some("Green".to_string()),
            status: Some(CarStatus::Maintenance),
            mileage: Some(1500),
            ..car_update(3)
        };

        apply_car_update(&mut car, update).unwrap();
        assert_eq!(car.color, "Green");
        assert_eq!(car.status, CarStatus::Maintenance);
        assert_eq!(car.mileage, 1500);
        assert_eq!(car.make, "Toyota");
        assert_eq!(car.daily_rate, 45.5);
    }

    #[test]
    fn test_car_update_refuses_lower_mileage() {
        let mut car = stored_car();
        let update = CarUpdate {
            mileage: Some(900),
            ..car_update(3)
        };

        let err = apply_car_update(&mut car, update).unwrap_err();
        assert!(matches!(err, Error::Validation { kind: "Car", .. }));
        assert_eq!(car.mileage, 1000);
    }

    #[test]
    fn test_booking_update_sets_free_text_status() {
        let mut booking = Booking::new(1, 2, "2024-01-01", "2024-01-05", 100.0);
        let update = BookingUpdate {
            id: 1,
            customer: None,
            car: None,
            start: None,
            end: Some("2024-01-07".to_string()),
            cost: None,
            status: Some("On hold".to_string()),
            notes: None,
        };

        apply_booking_update(&mut booking, update);
        assert_eq!(booking.end_date, "2024-01-07");
        assert_eq!(booking.status, "On hold");
        assert_eq!(booking.total_cost, 100.0);
    }
}
