use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: String,
    pub name: String,
    pub unit_price_minor: i64,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub line_items: Vec<LineItem>,
    pub currency: String,
    pub subtotal_minor: i64,
    pub tax_minor: i64,
    pub grand_total_minor: i64,
}

impl CartSnapshot {
    pub fn empty(currency: &str) -> Self {
        Self {
            line_items: Vec::new(),
            currency: currency.to_string(),
            subtotal_minor: 0,
            tax_minor: 0,
            grand_total_minor: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}
