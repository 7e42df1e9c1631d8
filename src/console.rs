//! Interfaz de consola de la maquina. Capa de presentacion, solo usa las
//! operaciones publicas de la maquina.
use std::io::BufRead;
use std::str::FromStr;

use log::{debug, error};
use rust_decimal::Decimal;

use crate::coffee_machine::CoffeeMachine;
use crate::errors::CoffeeMachineError;
use crate::outcome::OrderOutcome;

pub struct Console {
    machine: CoffeeMachine,
}

impl Console {
    pub fn new(machine: CoffeeMachine) -> Console {
        Console { machine }
    }

    /// Atiende los comandos de la entrada estandar hasta `exit` o fin de entrada.
    pub fn attend_customer(&mut self) {
        println!("{}", help_message());
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    error!("[CONSOLE] Error while reading the input: {}", e);
                    return;
                }
            };
            if !self.handle_command(line.trim()) {
                return;
            }
        }
    }

    fn handle_command(&mut self, command: &str) -> bool {
        debug!("[CONSOLE] Received command '{}'", command);
        let (action, argument) = split_command(command);
        match action {
            "" => {}
            "help" => println!("{}", help_message()),
            "menu" => println!("{}", self.menu_message()),
            "insert" => self.insert_money(argument),
            "order" => self.order_coffee(argument),
            "cancel" => self.cancel_entry(),
            "status" => println!("{}", self.machine.report_status()),
            "refill" => {
                self.machine.refill_resources();
                println!("Machine resources have been refilled.");
            }
            "exit" | "quit" => {
                println!("Have a nice day and hope to see you soon!");
                return false;
            }
            _ => println!("Unknown command, type 'help' to see the available ones."),
        }
        true
    }

    fn insert_money(&mut self, argument: &str) {
        let amount = match Decimal::from_str(argument) {
            Ok(amount) => amount,
            Err(_) => {
                println!("Invalid amount. Please enter a number.");
                return;
            }
        };
        match self.machine.insert_money(amount) {
            Ok(()) => println!(
                "Successfully inserted ${:.2}. Your credit is ${:.2}.",
                amount,
                self.machine.user_credit()
            ),
            Err(_) => println!("Please insert a valid amount."),
        }
    }

    fn order_coffee(&mut self, drink_name: &str) {
        match self.machine.order_coffee(drink_name) {
            Ok(outcome) => println!("{}", order_message(&outcome)),
            Err(CoffeeMachineError::UnknownDrink(name)) => println!(
                "There is no {} in the menu, type 'menu' to see the available drinks.",
                name
            ),
            Err(e) => error!("[CONSOLE] Error while processing the order: {:?}", e),
        }
    }

    fn cancel_entry(&mut self) {
        let returned = self.machine.cancel_entry();
        if returned > Decimal::ZERO {
            println!("Returned ${:.2}.", returned);
        } else {
            println!("No money in credit to return.");
        }
    }

    fn menu_message(&self) -> String {
        let mut drinks: Vec<_> = self.machine.menu().values().collect();
        drinks.sort_by(|a, b| a.name.cmp(&b.name));

        let mut message = String::from("The available drinks are:\n");
        for drink in drinks {
            message.push_str(&format!(
                "{} - ${:.2} (default sugar: {})\n",
                drink.name, drink.price, drink.default_sugar
            ));
        }
        message
    }
}

fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(' ') {
        Some((action, argument)) => (action, argument.trim()),
        None => (line, ""),
    }
}

fn order_message(outcome: &OrderOutcome) -> String {
    match outcome {
        OrderOutcome::PaymentShortfall {
            drink,
            price,
            missing,
        } => format!(
            "Your introduced money is insufficient for your current coffee selection.\n\
             {} price is ${:.2}.\n\
             You have to introduce ${:.2} more to get your {}, please.",
            drink, price, missing, drink
        ),
        OrderOutcome::NotAvailable {
            drink,
            ingredient,
            refunded,
        } => format!(
            "The selected coffee ({}) is currently not available, there is not enough {:?}.\n\
             We are sorry for the inconvenience, the transaction was canceled.\n\n\
             Here you have your money: ${:.2}",
            drink, ingredient, refunded
        ),
        OrderOutcome::Brewed { drink, change } => {
            let mut message = String::new();
            if *change > Decimal::ZERO {
                message.push_str(&format!("Here is your change: ${:.2}\n", change));
            }
            message.push_str(&format!(
                "Enjoy your {}!\nHave a nice day and hope to see you soon!",
                drink
            ));
            message
        }
    }
}

fn help_message() -> String {
    String::from(
        "Welcome! The available commands are:\n\
         menu              - list the available drinks\n\
         insert <amount>   - add money to your credit\n\
         order <drink>     - order a drink from the menu\n\
         cancel            - get your credit back\n\
         status            - show the machine resources and takings\n\
         refill            - refill the machine resources\n\
         exit              - leave",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drink::Ingredient;
    use rust_decimal_macros::dec;

    #[test]
    fn should_split_the_command_into_action_and_argument() {
        assert_eq!(("insert", "2.00"), split_command("insert 2.00"));
        assert_eq!(("order", "Espresso"), split_command("order  Espresso"));
        assert_eq!(("status", ""), split_command("status"));
    }

    #[test]
    fn should_report_the_price_and_the_missing_amount_on_shortfall() {
        let message = order_message(&OrderOutcome::PaymentShortfall {
            drink: String::from("Latte"),
            price: dec!(2.50),
            missing: dec!(1.50),
        });
        assert_eq!(true, message.contains("Latte price is $2.50."));
        assert_eq!(true, message.contains("introduce $1.50 more"));
    }

    #[test]
    fn should_report_the_refunded_money_when_not_available() {
        let message = order_message(&OrderOutcome::NotAvailable {
            drink: String::from("Cappuccino"),
            ingredient: Ingredient::Beans,
            refunded: dec!(3.00),
        });
        assert_eq!(true, message.contains("not enough Beans"));
        assert_eq!(true, message.contains("Here you have your money: $3.00"));
    }

    #[test]
    fn should_include_the_change_in_the_message_when_there_is_some() {
        let message = order_message(&OrderOutcome::Brewed {
            drink: String::from("Espresso"),
            change: dec!(0.20),
        });
        assert_eq!(true, message.contains("Here is your change: $0.20"));
        assert_eq!(true, message.contains("Enjoy your Espresso!"));
    }

    #[test]
    fn should_not_mention_the_change_on_exact_payment() {
        let message = order_message(&OrderOutcome::Brewed {
            drink: String::from("Espresso"),
            change: Decimal::ZERO,
        });
        assert_eq!(false, message.contains("change"));
        assert_eq!(true, message.contains("Enjoy your Espresso!"));
    }
}
