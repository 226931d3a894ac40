//! Integration tests for the flat-file record store

use std::fs;
use std::path::Path;

use rental_domain::{Booking, Car, Customer, FuelType, RecordRepository, Transmission};
use rental_infra::persistence::{BookingStore, CarStore, CustomerStore, WriteMode};
use tempfile::tempdir;

const CAR_HEADER: &str =
    "ID,Make,Model,Year,Color,LicensePlate,DailyRate,Status,Mileage,FuelType,Transmission,Seats";
const CUSTOMER_HEADER: &str =
    "ID,FirstName,LastName,Email,Phone,Address,LicenseNumber,LicenseExpiry";
const BOOKING_HEADER: &str = "ID,CustomerID,CarID,StartDate,EndDate,TotalCost,Status,Notes";

fn corolla() -> Car {
    Car::new(
        "Toyota",
        "Corolla",
        2020,
        "Blue",
        "ABC123",
        45.5,
        FuelType::Gasoline,
        Transmission::Automatic,
        5,
    )
}

fn civic() -> Car {
    Car::new(
        "Honda",
        "Civic",
        2019,
        "Red",
        "XYZ789",
        50.0,
        FuelType::Hybrid,
        Transmission::Manual,
        5,
    )
}

fn customer(address: &str) -> Customer {
    Customer::new(
        "John",
        "Doe",
        "john@example.com",
        "555-123-4567",
        address,
        "DL12345",
        "2030-12-31",
    )
}

fn write_file(path: &Path, lines: &[&str]) {
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(path, content).unwrap();
}

#[test]
fn test_missing_file_reads_as_empty() {
    let dir = tempdir().unwrap();
    let store = CarStore::open(dir.path()).unwrap();

    let report = store.load_report().unwrap();
    assert!(report.records.is_empty());
    assert_eq!(report.dropped, 0);
    assert_eq!(store.next_id(), 1);
    assert!(store.find_by_id(1).unwrap().is_none());
    assert!(!store.path().exists());
}

#[test]
fn test_add_assigns_sequential_ids() {
    let dir = tempdir().unwrap();
    let store = CarStore::open(dir.path()).unwrap();

    assert_eq!(store.add(corolla()).unwrap(), 1);
    assert_eq!(store.add(civic()).unwrap(), 2);
    assert_eq!(store.add(corolla()).unwrap(), 3);

    let ids: Vec<_> = store.find_all().unwrap().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_add_writes_canonical_lines() {
    let dir = tempdir().unwrap();
    let store = CarStore::open(dir.path()).unwrap();
    store.add(corolla()).unwrap();
    store.add(civic()).unwrap();

    let content = fs::read_to_string(store.path()).unwrap();
    assert_eq!(
        content,
        format!(
            "{}\n1,Toyota,Corolla,2020,Blue,ABC123,45.5,Available,0,Gasoline,Automatic,5\n\
             2,Honda,Civic,2019,Red,XYZ789,50,Available,0,Hybrid,Manual,5\n",
            CAR_HEADER
        )
    );
}

#[test]
fn test_next_id_follows_max_stored_id() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cars.csv");
    write_file(
        &path,
        &[
            CAR_HEADER,
            "3,Toyota,Corolla,2020,Blue,AAA111,40,Available,0,Gasoline,Manual,5",
            "7,Honda,Civic,2019,Red,BBB222,50,Rented,100,Diesel,Automatic,5",
            "2,Ford,Focus,2018,Black,CCC333,35,Maintenance,500,Gasoline,Manual,5",
        ],
    );

    let store = CarStore::open(dir.path()).unwrap();
    assert_eq!(store.next_id(), 8);
    assert_eq!(store.add(corolla()).unwrap(), 8);

    let ids: Vec<_> = store.find_all().unwrap().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![3, 7, 2, 8]);
}

#[test]
fn test_next_id_recomputed_after_external_edit() {
    let dir = tempdir().unwrap();
    let store = CarStore::open(dir.path()).unwrap();
    store.add(corolla()).unwrap();

    let path = store.path().to_path_buf();
    let mut content = fs::read_to_string(&path).unwrap();
    content.push_str("41,Mazda,3,2021,White,MZD041,55,Available,0,Gasoline,Manual,5\n");
    fs::write(&path, content).unwrap();

    assert_eq!(store.add(civic()).unwrap(), 42);
}

#[test]
fn test_find_by_id() {
    let dir = tempdir().unwrap();
    let store = CarStore::open(dir.path()).unwrap();
    store.add(corolla()).unwrap();
    store.add(civic()).unwrap();

    let found = store.find_by_id(2).unwrap().unwrap();
    assert_eq!(found.make, "Honda");
    assert_eq!(found.daily_rate, 50.0);
    assert!(store.find_by_id(99).unwrap().is_none());
    assert!(store.find_by_id(0).unwrap().is_none());
}

#[test]
fn test_update_replaces_in_place() {
    let dir = tempdir().unwrap();
    let store = CarStore::open(dir.path()).unwrap();
    store.add(corolla()).unwrap();
    store.add(civic()).unwrap();
    store.add(corolla()).unwrap();

    let mut car = store.find_by_id(2).unwrap().unwrap();
    car.color = "Green".to_string();
    assert!(car.update_mileage(1200));
    assert!(store.update(&car).unwrap());

    let cars = store.find_all().unwrap();
    assert_eq!(cars.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(cars[1].color, "Green");
    assert_eq!(cars[1].mileage, 1200);
}

#[test]
fn test_update_missing_id_leaves_file_untouched() {
    let dir = tempdir().unwrap();
    let store = CarStore::open(dir.path()).unwrap();
    store.add(corolla()).unwrap();
    let before = fs::read(store.path()).unwrap();

    let mut ghost = civic();
    ghost.id = 99;
    assert!(!store.update(&ghost).unwrap());

    assert_eq!(fs::read(store.path()).unwrap(), before);
}

#[test]
fn test_delete_keeps_order_of_remaining_records() {
    let dir = tempdir().unwrap();
    let store = CarStore::open(dir.path()).unwrap();
    for _ in 0..4 {
        store.add(corolla()).unwrap();
    }

    assert!(store.delete(2).unwrap());
    let ids: Vec<_> = store.find_all().unwrap().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);

    let before = fs::read(store.path()).unwrap();
    assert!(!store.delete(2).unwrap());
    assert_eq!(fs::read(store.path()).unwrap(), before);
}

#[test]
fn test_deleting_highest_id_allows_reuse() {
    let dir = tempdir().unwrap();
    let store = CarStore::open(dir.path()).unwrap();
    store.add(corolla()).unwrap();
    store.add(civic()).unwrap();

    assert!(store.delete(2).unwrap());
    assert_eq!(store.add(civic()).unwrap(), 2);
}

#[test]
fn test_save_all_then_load_all_round_trips() {
    let dir = tempdir().unwrap();
    let store = BookingStore::open(dir.path()).unwrap();

    let mut first = Booking::new(1, 2, "2024-03-01", "2024-03-06", 227.5);
    first.id = 5;
    first.notes = "Airport pickup".to_string();
    let mut second = Booking::new(3, 1, "2024-04-10", "2024-04-12", 100.0);
    second.id = 9;
    second.status = "Completed".to_string();

    store.save_all(&[first.clone(), second.clone()]).unwrap();
    assert_eq!(store.load_all().unwrap(), vec![first, second]);
    assert_eq!(store.next_id(), 10);
}

#[test]
fn test_header_is_rewritten_on_save() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bookings.csv");
    write_file(
        &path,
        &["whatever was here", "1,1,1,2024-01-01,2024-01-03,90,Active,"],
    );

    let store = BookingStore::open(dir.path()).unwrap();
    assert_eq!(store.load_all().unwrap().len(), 1);
    store.add(Booking::new(2, 2, "2024-02-01", "2024-02-02", 40.0)).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().next(), Some(BOOKING_HEADER));
}

#[test]
fn test_malformed_lines_are_dropped_and_counted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cars.csv");
    write_file(
        &path,
        &[
            CAR_HEADER,
            "1,Toyota,Corolla,2020,Blue,AAA111,40,Available,0,Gasoline,Manual,5",
            "",
            "2,Honda,Civic",
            "x,Ford,Focus,2018,Black,CCC333,35,Available,0,Gasoline,Manual,5",
            "0,Kia,Rio,2018,Black,DDD444,35,Available,0,Gasoline,Manual,5",
            "5,Mazda,3,2021,White,EEE555,abc,Available,0,Gasoline,Manual,5",
            "6,Tesla,Model 3,2022,White,FFF666,90,Available,10,Electric,Automatic,5",
        ],
    );

    let store = CarStore::open(dir.path()).unwrap();
    let report = store.load_report().unwrap();

    assert_eq!(report.dropped, 4);
    let ids: Vec<_> = report.records.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 6]);
    assert_eq!(store.next_id(), 7);
}

#[test]
fn test_unknown_enum_words_fall_back_to_defaults() {
    let dir = tempdir().unwrap();
    write_file(
        &dir.path().join("cars.csv"),
        &[
            CAR_HEADER,
            "1,Toyota,Corolla,2020,Blue,AAA111,40,Sold,0,Steam,CVT,5",
        ],
    );

    let store = CarStore::open(dir.path()).unwrap();
    let car = store.find_by_id(1).unwrap().unwrap();
    assert!(car.is_available());
    assert_eq!(car.fuel_type, FuelType::Gasoline);
    assert_eq!(car.transmission, Transmission::Manual);
}

#[test]
fn test_comma_in_text_field_shifts_columns() {
    let dir = tempdir().unwrap();
    let store = CustomerStore::open(dir.path()).unwrap();
    store.add(customer("1 Main St, Apt 2")).unwrap();

    let content = fs::read_to_string(store.path()).unwrap();
    assert_eq!(
        content,
        format!(
            "{}\n1,John,Doe,john@example.com,555-123-4567,1 Main St, Apt 2,DL12345,2030-12-31\n",
            CUSTOMER_HEADER
        )
    );

    let loaded = store.find_by_id(1).unwrap().unwrap();
    assert_eq!(loaded.address, "1 Main St");
    assert_eq!(loaded.license_number, " Apt 2");
    assert_eq!(loaded.license_expiry, "DL12345");
}

#[test]
fn test_comma_in_notes_truncates_notes() {
    let dir = tempdir().unwrap();
    let store = BookingStore::open(dir.path()).unwrap();
    let mut booking = Booking::new(1, 1, "2024-01-01", "2024-01-04", 120.0);
    booking.notes = "child seat, GPS".to_string();
    store.add(booking).unwrap();

    let loaded = store.find_by_id(1).unwrap().unwrap();
    assert_eq!(loaded.notes, "child seat");
}

#[test]
fn test_booking_without_notes_column_loads() {
    let dir = tempdir().unwrap();
    write_file(
        &dir.path().join("bookings.csv"),
        &[BOOKING_HEADER, "4,2,3,2024-05-01,2024-05-03,80,Active"],
    );

    let store = BookingStore::open(dir.path()).unwrap();
    let booking = store.find_by_id(4).unwrap().unwrap();
    assert_eq!(booking.notes, "");
    assert_eq!(booking.total_cost, 80.0);
}

#[test]
fn test_truncate_mode_behaves_the_same() {
    let dir = tempdir().unwrap();
    let store = CarStore::open(dir.path())
        .unwrap()
        .with_write_mode(WriteMode::Truncate);
    assert_eq!(store.write_mode(), WriteMode::Truncate);

    store.add(corolla()).unwrap();
    store.add(civic()).unwrap();
    assert!(store.delete(1).unwrap());

    let cars = store.find_all().unwrap();
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].id, 2);
}

#[test]
fn test_atomic_write_leaves_no_temp_file() {
    let dir = tempdir().unwrap();
    let store = CarStore::open(dir.path()).unwrap();
    store.add(corolla()).unwrap();

    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["cars.csv".to_string()]);
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let store = CarStore::open(dir.path().join("absent")).unwrap();
    assert!(store.add(corolla()).is_err());
}
