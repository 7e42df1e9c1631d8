//! Maquina expendedora de cafe. Procesa la transaccion de un usuario a la vez.
use std::collections::HashMap;

use log::{debug, info};
use rust_decimal::Decimal;

use crate::{
    constants::{BEANS_STORAGE, MILK_STORAGE, WATER_STORAGE},
    container::Container,
    drink::{default_menu, Drink, Ingredient, INGREDIENTS},
    errors::CoffeeMachineError,
    outcome::OrderOutcome,
};

/// Representa a la maquina expendedora.
/// Tiene el menu de bebidas, los contenedores de ingredientes, la
/// recaudacion de la maquina y el credito de la transaccion en curso.
pub struct CoffeeMachine {
    menu: HashMap<String, Drink>,
    containers: HashMap<Ingredient, Container>,
    machine_credit: Decimal,
    user_credit: Decimal,
}

impl CoffeeMachine {
    pub fn new(
        menu: HashMap<String, Drink>,
        max_resources: HashMap<Ingredient, u64>,
    ) -> CoffeeMachine {
        let mut containers = HashMap::new();
        for (ingredient, capacity) in max_resources {
            containers.insert(ingredient, Container::new(capacity));
        }

        CoffeeMachine {
            menu,
            containers,
            machine_credit: Decimal::ZERO,
            user_credit: Decimal::ZERO,
        }
    }

    pub fn with_default_setup() -> CoffeeMachine {
        let max_resources = HashMap::from([
            (Ingredient::Water, WATER_STORAGE),
            (Ingredient::Beans, BEANS_STORAGE),
            (Ingredient::Milk, MILK_STORAGE),
        ]);
        CoffeeMachine::new(default_menu(), max_resources)
    }

    /// Acredita dinero a la transaccion en curso. El monto debe ser positivo.
    pub fn insert_money(&mut self, amount: Decimal) -> Result<(), CoffeeMachineError> {
        if amount <= Decimal::ZERO {
            return Err(CoffeeMachineError::InvalidAmount);
        }
        self.user_credit += amount;
        debug!("[MACHINE] Credit increased to {}", self.user_credit);
        Ok(())
    }

    /// Procesa un pedido. Se valida primero el pago y despues los
    /// ingredientes, en ese orden.
    pub fn order_coffee(&mut self, drink_name: &str) -> Result<OrderOutcome, CoffeeMachineError> {
        let drink = self
            .menu
            .get(drink_name)
            .cloned()
            .ok_or_else(|| CoffeeMachineError::UnknownDrink(drink_name.to_string()))?;

        if self.user_credit < drink.price {
            let missing = drink.price - self.user_credit;
            info!(
                "[MACHINE] Not enough credit for {}, missing {}",
                drink.name, missing
            );
            return Ok(OrderOutcome::PaymentShortfall {
                drink: drink.name,
                price: drink.price,
                missing,
            });
        }

        if let Some(ingredient) = self.find_missing_ingredient(&drink)? {
            let refunded = self.user_credit;
            self.user_credit = Decimal::ZERO;
            info!(
                "[MACHINE] Canceled order of {}, not enough {:?}",
                drink.name, ingredient
            );
            return Ok(OrderOutcome::NotAvailable {
                drink: drink.name,
                ingredient,
                refunded,
            });
        }

        self.machine_credit += drink.price;
        self.brew_drink(&drink)?;
        let change = self.return_change(&drink);
        info!("[MACHINE] Brewed {}, change {}", drink.name, change);
        Ok(OrderOutcome::Brewed {
            drink: drink.name,
            change,
        })
    }

    /// Devuelve el credito de la transaccion en curso y lo deja en cero.
    pub fn cancel_entry(&mut self) -> Decimal {
        let returned = self.user_credit;
        self.user_credit = Decimal::ZERO;
        info!("[MACHINE] Entry canceled, returned {}", returned);
        returned
    }

    /// Rellena todos los contenedores a su capacidad maxima.
    pub fn refill_resources(&mut self) {
        for container in self.containers.values_mut() {
            container.refill();
        }
        info!("[MACHINE] Containers refilled");
    }

    /// Resumen del estado de los contenedores y la recaudacion.
    pub fn report_status(&self) -> String {
        let mut message = String::from("The available resources and their quantities are:\n");
        for ingredient in INGREDIENTS {
            if let Some(container) = self.containers.get(&ingredient) {
                message.push_str(&format!(
                    "{:?}: {} of {}\n",
                    ingredient, container.remaining, container.capacity
                ));
            }
        }
        message.push_str(&format!(
            "\nCurrent money in the machine is ${:.2}",
            self.machine_credit
        ));
        message
    }

    pub fn menu(&self) -> &HashMap<String, Drink> {
        &self.menu
    }

    pub fn user_credit(&self) -> Decimal {
        self.user_credit
    }

    pub fn machine_credit(&self) -> Decimal {
        self.machine_credit
    }

    pub fn remaining_of(&self, ingredient: Ingredient) -> Option<u64> {
        self.containers
            .get(&ingredient)
            .map(|container| container.remaining)
    }

    fn find_missing_ingredient(
        &self,
        drink: &Drink,
    ) -> Result<Option<Ingredient>, CoffeeMachineError> {
        for (ingredient, quantity_required) in &drink.recipe {
            let container = self
                .containers
                .get(ingredient)
                .ok_or(CoffeeMachineError::IngredientNotInMap)?;
            if !container.has_enough(*quantity_required) {
                return Ok(Some(*ingredient));
            }
        }
        Ok(None)
    }

    fn brew_drink(&mut self, drink: &Drink) -> Result<(), CoffeeMachineError> {
        for (ingredient, quantity_required) in &drink.recipe {
            let container = self
                .containers
                .get_mut(ingredient)
                .ok_or(CoffeeMachineError::IngredientNotInMap)?;
            debug!(
                "[MACHINE] Uses {} of {:?}, there is {}",
                quantity_required, ingredient, container.remaining
            );
            container.consume(*quantity_required);
        }
        Ok(())
    }

    // Solo debe llamarse despues de validar el pago.
    fn return_change(&mut self, drink: &Drink) -> Decimal {
        let change = self.user_credit - drink.price;
        self.user_credit = Decimal::ZERO;
        change
    }
}
