pub struct Container {
    pub remaining: u64,
    pub capacity: u64,
}

impl Container {
    pub fn new(capacity: u64) -> Container {
        Container {
            remaining: capacity,
            capacity,
        }
    }

    pub fn has_enough(&self, quantity: u64) -> bool {
        quantity <= self.remaining
    }

    /// Descuenta la cantidad pedida. Se debe verificar antes con `has_enough`.
    pub fn consume(&mut self, quantity: u64) {
        self.remaining -= quantity;
    }

    pub fn refill(&mut self) {
        self.remaining = self.capacity;
    }
}
