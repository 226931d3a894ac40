//! Output formatting module

use rental_domain::service::{BookingStats, FleetStats, PaymentConfirmation};
use rental_domain::{Booking, Car, Customer};
use rental_types::{OutputFormat, Result};
use serde::Serialize;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    println!("{}", content);
    Ok(())
}

pub fn output_cars(output_format: OutputFormat, cars: &[Car]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(cars);
    }

    if cars.is_empty() {
        println!("No cars found.");
        return Ok(());
    }

    println!(
        "{:<5}{:<15}{:<15}{:<8}{:<13}{:<12}",
        "ID", "Make", "Model", "Year", "Status", "Daily Rate"
    );
    println!("{}", "-".repeat(80));
    for car in cars {
        println!(
            "{:<5}{:<15}{:<15}{:<8}{:<13}{:<12.2}",
            car.id, car.make, car.model, car.year, car.status.label(), car.daily_rate
        );
    }
    Ok(())
}

pub fn output_car(output_format: OutputFormat, car: &Car) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(car);
    }

    println!("=== Car Details ===");
    println!("ID:            {}", car.id);
    println!("Make:          {}", car.make);
    println!("Model:         {}", car.model);
    println!("Year:          {}", car.year);
    println!("Color:         {}", car.color);
    println!("License Plate: {}", car.license_plate);
    println!("Daily Rate:    ${:.2}", car.daily_rate);
    println!("Status:        {}", car.status);
    println!("Mileage:       {} miles", car.mileage);
    println!("Fuel Type:     {}", car.fuel_type);
    println!("Transmission:  {}", car.transmission);
    println!("Seats:         {}", car.seats);
    Ok(())
}

pub fn output_customers(output_format: OutputFormat, customers: &[Customer]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(customers);
    }

    if customers.is_empty() {
        println!("No customers found.");
        return Ok(());
    }

    println!(
        "{:<5}{:<25}{:<30}{:<15}{:<10}",
        "ID", "Name", "Email", "Phone", "License"
    );
    println!("{}", "-".repeat(85));
    for customer in customers {
        println!(
            "{:<5}{:<25}{:<30}{:<15}{:<10}",
            customer.id,
            customer.full_name(),
            customer.email,
            customer.phone,
            if customer.is_license_valid() { "Valid" } else { "Invalid" }
        );
    }
    Ok(())
}

pub fn output_customer(output_format: OutputFormat, customer: &Customer) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(customer);
    }

    println!("=== Customer Details ===");
    println!("ID:             {}", customer.id);
    println!("Name:           {}", customer.full_name());
    println!("Email:          {}", customer.email);
    println!("Phone:          {}", customer.phone);
    println!("Address:        {}", customer.address);
    println!("License Number: {}", customer.license_number);
    println!(
        "License Expiry: {} ({})",
        customer.license_expiry,
        if customer.is_license_valid() { "Valid" } else { "Expired" }
    );
    Ok(())
}

pub fn output_bookings(output_format: OutputFormat, bookings: &[Booking]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(bookings);
    }

    if bookings.is_empty() {
        println!("No bookings found.");
        return Ok(());
    }

    println!(
        "{:<5}{:<10}{:<8}{:<12}{:<12}{:<12}{:<10}",
        "ID", "Customer", "Car", "Start", "End", "Total", "Status"
    );
    println!("{}", "-".repeat(80));
    for booking in bookings {
        println!(
            "{:<5}{:<10}{:<8}{:<12}{:<12}{:<12.2}{:<10}",
            booking.id,
            booking.customer_id,
            booking.car_id,
            booking.start_date,
            booking.end_date,
            booking.total_cost,
            booking.status
        );
    }
    Ok(())
}

pub fn output_booking(output_format: OutputFormat, booking: &Booking) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(booking);
    }

    println!("=== Booking Details ===");
    println!("ID:          {}", booking.id);
    println!("Customer ID: {}", booking.customer_id);
    println!("Car ID:      {}", booking.car_id);
    println!("Start Date:  {}", booking.start_date);
    println!("End Date:    {}", booking.end_date);
    println!("Duration:    {} days", booking.duration());
    println!("Total Cost:  ${:.2}", booking.total_cost);
    println!("Status:      {}", booking.status);
    if !booking.notes.is_empty() {
        println!("Notes:       {}", booking.notes);
    }
    Ok(())
}

pub fn output_fleet_stats(output_format: OutputFormat, stats: &FleetStats) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(stats);
    }

    println!("Fleet Statistics");
    println!("================");
    println!("Total Cars:         {}", stats.total);
    println!("Available Cars:     {}", stats.available);
    println!("Rented Cars:        {}", stats.rented);
    println!("Maintenance Cars:   {}", stats.maintenance);
    println!("Retired Cars:       {}", stats.retired);
    println!("Average Daily Rate: ${:.2}", stats.average_daily_rate);
    Ok(())
}

pub fn output_booking_stats(output_format: OutputFormat, stats: &BookingStats) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(stats);
    }

    println!("Booking Statistics");
    println!("==================");
    println!("Total Bookings:     {}", stats.total);
    println!("Active Bookings:    {}", stats.active);
    println!("Completed Bookings: {}", stats.completed);
    println!("Cancelled Bookings: {}", stats.cancelled);
    println!("Total Revenue:      ${:.2}", stats.revenue);
    Ok(())
}

pub fn output_receipt(output_format: OutputFormat, confirmation: &PaymentConfirmation) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(confirmation);
    }

    print!("{}", confirmation.receipt());
    Ok(())
}

/// One backing file as reported by `info`
#[derive(Debug, Serialize)]
pub struct FileInfo {
    pub kind: &'static str,
    pub path: String,
    pub exists: bool,
    pub records: usize,
    pub dropped_lines: usize,
    pub next_id: u32,
}

pub fn output_info(output_format: OutputFormat, files: &[FileInfo]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(files);
    }

    println!("Record Files");
    println!("============");
    for file in files {
        println!();
        println!("{}:", file.kind);
        println!("  Path:          {}", file.path);
        if !file.exists {
            println!("  (not created yet)");
            continue;
        }
        println!("  Records:       {}", file.records);
        println!("  Skipped lines: {}", file.dropped_lines);
        println!("  Next ID:       {}", file.next_id);
    }
    Ok(())
}
