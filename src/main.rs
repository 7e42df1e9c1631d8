pub mod coffee_machine;
pub mod console;
pub mod constants;
pub mod container;
pub mod drink;
pub mod errors;
pub mod outcome;
pub mod setup_reader;

use std::env;

use log::{error, LevelFilter};
use simple_logger::SimpleLogger;

use coffee_machine::CoffeeMachine;
use console::Console;
use setup_reader::read_machine_setup;

fn main() {
    if SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .is_err()
    {
        println!("Error setting the logger up");
        return;
    }

    let machine = match env::args().nth(1) {
        Some(path) => match read_machine_setup(path) {
            Ok((menu, capacities)) => CoffeeMachine::new(menu, capacities),
            Err(e) => {
                error!("[MAIN] Could not load the machine setup: {:?}", e);
                return;
            }
        },
        None => CoffeeMachine::with_default_setup(),
    };

    let mut console = Console::new(machine);
    console.attend_customer();
}
