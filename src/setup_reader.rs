use log::{debug, error, info};
use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::drink::{Drink, Ingredient};
use crate::errors::CoffeeMachineError;

#[derive(Deserialize, Debug)]
struct JsonDrink {
    name: String,
    price: Decimal,
    water: u64,
    beans: u64,
    milk: u64,
    #[serde(default)]
    sugar: u32,
}

#[derive(Deserialize)]
struct JsonResources {
    water: u64,
    beans: u64,
    milk: u64,
}

#[derive(Deserialize)]
struct MachineSetup {
    resources: JsonResources,
    drinks: Vec<JsonDrink>,
}

fn read_setup_from_file<P: AsRef<Path>>(path: P) -> Result<MachineSetup, Box<dyn Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let setup: MachineSetup = serde_json::from_reader(reader)?;
    Ok(setup)
}

fn get_recipe_from_drink(json_drink: &JsonDrink) -> HashMap<Ingredient, u64> {
    HashMap::from([
        (Ingredient::Water, json_drink.water),
        (Ingredient::Beans, json_drink.beans),
        (Ingredient::Milk, json_drink.milk),
    ])
}

fn get_menu_from_setup(json_drinks: Vec<JsonDrink>) -> HashMap<String, Drink> {
    let mut menu = HashMap::new();
    for json_drink in json_drinks {
        let recipe = get_recipe_from_drink(&json_drink);
        let drink = Drink::new(&json_drink.name, json_drink.price, recipe, json_drink.sugar);
        debug!("[READER] Added drink {}", drink.name);
        menu.insert(drink.name.clone(), drink);
    }
    menu
}

fn get_capacities_from_setup(resources: &JsonResources) -> HashMap<Ingredient, u64> {
    HashMap::from([
        (Ingredient::Water, resources.water),
        (Ingredient::Beans, resources.beans),
        (Ingredient::Milk, resources.milk),
    ])
}

pub fn read_machine_setup<P: AsRef<Path>>(
    path: P,
) -> Result<(HashMap<String, Drink>, HashMap<Ingredient, u64>), CoffeeMachineError> {
    match read_setup_from_file(path) {
        Ok(setup) => {
            let capacities = get_capacities_from_setup(&setup.resources);
            let menu = get_menu_from_setup(setup.drinks);
            info!(
                "[READER] Machine setup loaded, {} drinks in the menu",
                menu.len()
            );
            Ok((menu, capacities))
        }
        Err(e) => {
            error!("[READER] Error while reading the setup file: {}", e);
            Err(CoffeeMachineError::FileReaderError)
        }
    }
}
