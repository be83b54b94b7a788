use crate::domain::cart::{CartSnapshot, LineItem};
use std::sync::Mutex;

pub trait Cart: Send + Sync {
    fn snapshot(&self) -> CartSnapshot;
    fn clear(&self);
}

/// Fixed-rate tax in basis points, rounded half-up.
#[derive(Debug, Clone, Copy)]
pub struct TaxPolicy {
    pub rate_bp: i64,
}

impl TaxPolicy {
    /// 18% GST, the storefront's only tax rate.
    pub const GST: TaxPolicy = TaxPolicy { rate_bp: 1800 };

    pub fn tax_for(&self, subtotal_minor: i64) -> i64 {
        (subtotal_minor * self.rate_bp + 5_000) / 10_000
    }
}

pub struct InMemoryCart {
    currency: String,
    tax: TaxPolicy,
    items: Mutex<Vec<LineItem>>,
}

impl InMemoryCart {
    pub fn new(currency: &str, tax: TaxPolicy) -> Self {
        Self {
            currency: currency.to_string(),
            tax,
            items: Mutex::new(Vec::new()),
        }
    }

    fn locked(&self) -> std::sync::MutexGuard<'_, Vec<LineItem>> {
        self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Adding an item already in the cart bumps its quantity instead of
    /// duplicating the line.
    pub fn add_item(&self, item: LineItem) {
        let mut items = self.locked();
        match items.iter_mut().find(|i| i.product_id == item.product_id) {
            Some(existing) => existing.quantity += item.quantity,
            None => items.push(item),
        }
    }

    /// Quantity zero removes the line.
    pub fn set_quantity(&self, product_id: &str, quantity: u32) {
        let mut items = self.locked();
        if quantity == 0 {
            items.retain(|i| i.product_id != product_id);
        } else if let Some(item) = items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
        }
    }

    pub fn remove_item(&self, product_id: &str) {
        self.locked().retain(|i| i.product_id != product_id);
    }
}

impl Cart for InMemoryCart {
    fn snapshot(&self) -> CartSnapshot {
        let items = self.locked();
        let subtotal_minor: i64 = items
            .iter()
            .map(|i| i.unit_price_minor * i64::from(i.quantity))
            .sum();
        let tax_minor = self.tax.tax_for(subtotal_minor);

        CartSnapshot {
            line_items: items.clone(),
            currency: self.currency.clone(),
            subtotal_minor,
            tax_minor,
            grand_total_minor: subtotal_minor + tax_minor,
        }
    }

    fn clear(&self) {
        self.locked().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: &str, unit_price_minor: i64, quantity: u32) -> LineItem {
        LineItem {
            product_id: product_id.to_string(),
            name: product_id.to_string(),
            unit_price_minor,
            quantity,
        }
    }

    #[test]
    fn grand_total_is_subtotal_plus_tax() {
        let cart = InMemoryCart::new("INR", TaxPolicy::GST);
        cart.add_item(item("carving", 10_000, 1));

        let snapshot = cart.snapshot();
        assert_eq!(snapshot.subtotal_minor, 10_000);
        assert_eq!(snapshot.tax_minor, 1_800);
        assert_eq!(snapshot.grand_total_minor, 11_800);
    }

    #[test]
    fn tax_rounds_half_up() {
        let policy = TaxPolicy { rate_bp: 1800 };
        // 3 minor units at 18% = 0.54, rounds to 1
        assert_eq!(policy.tax_for(3), 1);
        // 2 minor units at 18% = 0.36, rounds to 0
        assert_eq!(policy.tax_for(2), 0);
        assert_eq!(policy.tax_for(0), 0);
    }

    #[test]
    fn adding_same_product_merges_quantity() {
        let cart = InMemoryCart::new("INR", TaxPolicy::GST);
        cart.add_item(item("bowl", 2_500, 1));
        cart.add_item(item("bowl", 2_500, 2));

        let snapshot = cart.snapshot();
        assert_eq!(snapshot.line_items.len(), 1);
        assert_eq!(snapshot.line_items[0].quantity, 3);
    }

    #[test]
    fn quantity_zero_removes_line() {
        let cart = InMemoryCart::new("INR", TaxPolicy::GST);
        cart.add_item(item("bowl", 2_500, 2));
        cart.set_quantity("bowl", 0);
        assert!(cart.snapshot().is_empty());
    }

    #[test]
    fn clear_empties_the_cart() {
        let cart = InMemoryCart::new("INR", TaxPolicy::GST);
        cart.add_item(item("bowl", 2_500, 2));
        cart.add_item(item("mask", 7_000, 1));
        cart.clear();

        let snapshot = cart.snapshot();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.grand_total_minor, 0);
    }
}
