use rust_decimal::Decimal;

use crate::drink::Ingredient;

/// Resultado de un pedido. Cada llamada termina en exactamente una variante.
#[derive(Debug, PartialEq, Eq)]
pub enum OrderOutcome {
    /// La bebida fue preparada. `change` puede ser cero si se pago justo.
    Brewed { drink: String, change: Decimal },
    /// El credito no alcanza para el precio. La transaccion queda abierta.
    PaymentShortfall {
        drink: String,
        price: Decimal,
        missing: Decimal,
    },
    /// Falta un ingrediente. Se devuelve el credito y la transaccion se cierra.
    NotAvailable {
        drink: String,
        ingredient: Ingredient,
        refunded: Decimal,
    },
}
