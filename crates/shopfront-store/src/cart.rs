use rust_decimal::Decimal;
use shopfront_core::Product;

/// A position-keyed shopping cart.
///
/// Lines are plain product copies in insertion order. The same product may
/// appear any number of times, and removal addresses a line by its
/// position.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<Product>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, product: Product) {
        self.lines.push(product);
    }

    /// Removes the line at `position`, shifting later lines down.
    ///
    /// Returns `None` (and leaves the cart unchanged) when `position` is
    /// out of range.
    pub fn remove(&mut self, position: usize) -> Option<Product> {
        if position < self.lines.len() {
            Some(self.lines.remove(position))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all line prices.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(|line| line.price).sum()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.lines
    }
}
