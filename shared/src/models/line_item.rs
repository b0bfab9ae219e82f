//! Order Line Item Model

use serde::{Deserialize, Serialize};

/// A selected variant or add-on with an optional surcharge
///
/// A missing `price` counts as no surcharge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceModifier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl PriceModifier {
    pub fn priced(price: f64) -> Self {
        Self {
            name: None,
            price: Some(price),
        }
    }

    /// Surcharge, zero when unset
    pub fn surcharge(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }
}

/// One orderable unit of a cart: menu item price, quantity and selections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    /// Menu item this line refers to (catalog reference, informational)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_item_id: Option<String>,
    pub base_price: f64,
    pub quantity: i32,
    #[serde(default)]
    pub variants: Vec<PriceModifier>,
    #[serde(default)]
    pub addons: Vec<PriceModifier>,
}

impl OrderLineItem {
    pub fn new(base_price: f64, quantity: i32) -> Self {
        Self {
            menu_item_id: None,
            base_price,
            quantity,
            variants: vec![],
            addons: vec![],
        }
    }

    pub fn with_variant(mut self, variant: PriceModifier) -> Self {
        self.variants.push(variant);
        self
    }

    pub fn with_addon(mut self, addon: PriceModifier) -> Self {
        self.addons.push(addon);
        self
    }
}
