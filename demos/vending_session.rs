//! Interactive-style session against a small vending machine.
//!
//! Drives the machine through a full day: selling out, a stuck-coin
//! refusal, maintenance, and a restock. The machine only returns
//! outcome values; printing them is this driver's job.
//!
//! Run with: cargo run --example vending_session

use vendstate::core::State;
use vendstate::machine::VendingMachine;

fn main() {
    let mut machine = VendingMachine::new(3);

    println!("{}", machine.insert_coin());
    println!("{}", machine.press_dispense());
    println!("{}", machine.insert_coin());
    println!("{}", machine.insert_coin()); // refused, coin already held
    println!("{}", machine.press_dispense());
    println!("{}", machine.press_dispense()); // refused, no coin
    println!("{}", machine.insert_coin());
    println!("{}", machine.press_dispense()); // last unit, sells out
    println!("{}", machine.insert_coin()); // refused, sold out
    println!("{}", machine.press_dispense()); // refused, sold out

    println!("{}", machine.start_maintenance());
    match machine.restock(5) {
        Ok(outcome) => println!("{outcome}"),
        Err(error) => println!("{error}"),
    }
    println!("{}", machine.finish_maintenance());
    match machine.restock(5) {
        Ok(outcome) => println!("{outcome}"),
        Err(error) => println!("{error}"),
    }

    println!();
    println!("Final state: {} with {} units", machine.state(), machine.stock());
    let path: Vec<&str> = machine
        .history()
        .get_path()
        .into_iter()
        .map(|state| state.name())
        .collect();
    println!("Path: {}", path.join(" -> "));
}
