//! # Seed Data Generator
//!
//! Populates the database with demo suppliers and sample bookings for
//! development.
//!
//! ## Usage
//! ```bash
//! # Seed with defaults
//! cargo run -p petpro-db --bin seed
//!
//! # Specify database path
//! cargo run -p petpro-db --bin seed -- --db ./data/petpro.db
//!
//! # Change the shared demo password
//! cargo run -p petpro-db --bin seed -- --password letmein
//! ```
//!
//! ## Generated Data
//! - One supplier account per entry in [`SUPPLIERS`], all sharing the demo
//!   password (printed at the end)
//! - A handful of pending bookings across every service type

use chrono::{Duration, Utc};
use std::env;
use uuid::Uuid;

use petpro_core::{Booking, BookingStatus, ServiceType, DEFAULT_CITY};
use petpro_db::{hash_password, Database, DbConfig, SupplierRecord};

/// Demo supplier accounts: (email, display name)
const SUPPLIERS: &[(&str, &str)] = &[
    ("meera@petpro.test", "Meera's Mobile Grooming"),
    ("rohan@petpro.test", "Rohan Pet Care"),
    ("tails@petpro.test", "Happy Tails Studio"),
];

/// Sample customers: (first, last, phone, address)
const CUSTOMERS: &[(&str, &str, &str, &str)] = &[
    ("Asha", "Rao", "9000000000", "12 MG Road"),
    ("Vikram", "Joshi", "9822011223", "48 Civil Lines"),
    ("Neha", "Kulkarni", "9765432109", "7 Ramdaspeth"),
    ("Imran", "Shaikh", "9890012345", "221 Dharampeth Main"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./petpro.db");
    let mut password = String::from("grooming123");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--password" | "-p" => {
                if i + 1 < args.len() {
                    password = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("PetPro Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>        Database file path (default: ./petpro.db)");
                println!("  -p, --password <PWD>   Demo supplier password (default: grooming123)");
                println!("  -h, --help             Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 PetPro Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!();

    // Connect to database
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing suppliers
    let existing = db.suppliers().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} suppliers", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    // Create suppliers
    println!();
    println!("Creating suppliers...");

    let password_hash = hash_password(&password)?;
    let now = Utc::now();

    let mut supplier_ids = Vec::new();
    for (email, name) in SUPPLIERS {
        let record = SupplierRecord {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: name.to_string(),
            password_hash: password_hash.clone(),
            is_active: true,
            created_at: now,
        };
        db.suppliers().insert(&record).await?;
        supplier_ids.push(record.id);
        println!("  {} ({})", name, email);
    }

    // Create sample bookings, one per service type per customer slot
    println!();
    println!("Creating sample bookings...");

    let mut created = 0;
    for (idx, (first, last, phone, address)) in CUSTOMERS.iter().enumerate() {
        let service = ServiceType::ALL[idx % ServiceType::ALL.len()];
        let booking = Booking {
            id: Uuid::new_v4().to_string(),
            service_type: service,
            customer_name: format!("{} {}", first, last),
            phone: phone.to_string(),
            address: address.to_string(),
            city: DEFAULT_CITY.to_string(),
            preferred_date: (now + Duration::days(idx as i64 + 1)).date_naive(),
            status: BookingStatus::Pending,
            supplier_id: None,
            created_at: now - Duration::minutes(idx as i64),
        };
        db.bookings().insert(&booking).await?;
        created += 1;
        println!("  {} for {}", service, booking.customer_name);
    }

    println!();
    println!("✓ Seeded {} suppliers and {} pending bookings", supplier_ids.len(), created);
    println!("  Demo password: {}", password);
    println!();
    println!("✓ Seed complete!");

    Ok(())
}
