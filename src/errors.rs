#[derive(Debug, PartialEq, Eq)]
pub enum CoffeeMachineError {
    InvalidAmount,
    UnknownDrink(String),
    IngredientNotInMap,
    FileReaderError,
}
