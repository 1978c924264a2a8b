//! Hotel Booking Scenarios
//!
//! This example walks three bookings through the lifecycle and prints the
//! resulting ledger.
//!
//! Key concepts:
//! - Booking states (Idle -> RoomSelected -> BookingConfirmed -> Paid)
//! - Promo codes applied at payment
//! - Rejected requests leave the booking untouched
//!
//! Run with: RUST_LOG=info cargo run --example hotel_scenarios

use innkeeper::{BookingCommand, BookingEngine, Room};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut engine = BookingEngine::builder().build()?;

    let standard = Room::new(101, "standard", 5000.0);
    let deluxe = Room::new(201, "deluxe", 10000.0);

    println!("=== Scenario 1: Successful booking ===");
    let mut first = engine.open_booking(1001)?;
    engine.apply(&mut first, BookingCommand::SelectRoom(standard.clone()))?;
    engine.apply(&mut first, BookingCommand::ConfirmBooking)?;
    engine.apply(&mut first, BookingCommand::pay_with("LOYALTY10"))?;

    println!("\n=== Scenario 2: Cancellation before payment ===");
    let mut second = engine.open_booking(1002)?;
    engine.apply(&mut second, BookingCommand::SelectRoom(deluxe.clone()))?;
    engine.apply(&mut second, BookingCommand::Cancel)?;

    println!("\n=== Scenario 3: Change room ===");
    let mut third = engine.open_booking(1003)?;
    engine.apply(&mut third, BookingCommand::SelectRoom(standard))?;
    engine.apply(&mut third, BookingCommand::ChangeRoom(deluxe))?;
    engine.apply(&mut third, BookingCommand::ConfirmBooking)?;
    engine.apply(&mut third, BookingCommand::pay_with(""))?;

    println!("\n=== Rejected request ===");
    if let Err(err) = engine.apply(&mut first, BookingCommand::Cancel) {
        println!("Booking #{}: {}", first.id(), err);
    }

    println!("\n=== Booking History ===");
    for receipt in engine.ledger().receipts() {
        println!("{receipt}");
    }

    let report = engine.ledger().report();
    println!("\nRevenue: {:.0}", report.revenue());
    println!("{}", report.to_json()?);

    Ok(())
}
