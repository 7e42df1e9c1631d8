use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const TOTAL_INGREDIENTS: usize = 3;

/// Orden fijo de los ingredientes para los reportes
pub const INGREDIENTS: [Ingredient; TOTAL_INGREDIENTS] =
    [Ingredient::Water, Ingredient::Beans, Ingredient::Milk];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ingredient {
    Water,
    Beans,
    Milk,
}

#[derive(Debug, Clone)]
pub struct Drink {
    pub name: String,
    pub price: Decimal,
    pub recipe: HashMap<Ingredient, u64>,
    pub default_sugar: u32,
}

impl Drink {
    pub fn new(
        name: &str,
        price: Decimal,
        recipe: HashMap<Ingredient, u64>,
        default_sugar: u32,
    ) -> Drink {
        Drink {
            name: name.to_string(),
            price,
            recipe,
            default_sugar,
        }
    }

    pub fn espresso() -> Drink {
        Drink::new(
            "Espresso",
            dec!(1.80),
            HashMap::from([
                (Ingredient::Water, 50),
                (Ingredient::Beans, 18),
                (Ingredient::Milk, 0),
            ]),
            0,
        )
    }

    pub fn latte() -> Drink {
        Drink::new(
            "Latte",
            dec!(2.50),
            HashMap::from([
                (Ingredient::Water, 40),
                (Ingredient::Beans, 18),
                (Ingredient::Milk, 150),
            ]),
            1,
        )
    }

    pub fn cappuccino() -> Drink {
        Drink::new(
            "Cappuccino",
            dec!(2.60),
            HashMap::from([
                (Ingredient::Water, 50),
                (Ingredient::Beans, 18),
                (Ingredient::Milk, 100),
            ]),
            1,
        )
    }
}

pub fn default_menu() -> HashMap<String, Drink> {
    let mut menu = HashMap::new();
    for drink in [Drink::espresso(), Drink::latte(), Drink::cappuccino()] {
        menu.insert(drink.name.clone(), drink);
    }
    menu
}
