//! # Cart Snapshot Types
//!
//! Read-only cart state handed to the engine by the host platform for
//! each rate calculation. Coupon validity, discount math and tax
//! computation all happen upstream; the snapshot only carries their
//! results.

use crate::money::{Currency, Price};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A coupon applied to the cart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    /// Whether the platform considers the coupon currently valid
    pub valid: bool,

    /// Whether the coupon authorizes waiving shipping charges,
    /// independent of its monetary discount
    #[serde(default)]
    pub grants_free_shipping: bool,
}

impl Coupon {
    /// A valid coupon that grants free shipping
    pub fn free_shipping() -> Self {
        Self {
            valid: true,
            grants_free_shipping: true,
        }
    }

    /// A valid coupon with a discount only (no free shipping)
    pub fn discount_only() -> Self {
        Self {
            valid: true,
            grants_free_shipping: false,
        }
    }
}

/// A line in the cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product ID
    pub product_id: String,

    /// Quantity
    pub quantity: u32,

    /// Physical goods need shipping; virtual lines do not
    #[serde(default = "default_true")]
    pub requires_shipping: bool,
}

fn default_true() -> bool {
    true
}

impl CartItem {
    /// Create a shippable line item
    pub fn new(product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            requires_shipping: true,
        }
    }

    /// Create a virtual line item (downloads, services) that never ships
    pub fn virtual_item(product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            requires_shipping: false,
        }
    }
}

/// Immutable cart state captured by the platform at calculation time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartSnapshot {
    /// Cart currency (shared by all monetary fields)
    pub currency: Currency,

    /// Merchandise total before shipping
    pub contents_cost: Price,

    /// Tax lines, summed when prices include tax
    #[serde(default)]
    pub taxes: Vec<Price>,

    /// The platform's "prices include tax" setting at snapshot time
    #[serde(default)]
    pub prices_include_tax: bool,

    /// Applied coupons keyed by code
    #[serde(default)]
    pub coupons: HashMap<String, Coupon>,

    /// Line items
    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl CartSnapshot {
    /// Create an empty snapshot in the given currency
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            contents_cost: Price::zero(currency),
            taxes: Vec::new(),
            prices_include_tax: false,
            coupons: HashMap::new(),
            items: Vec::new(),
        }
    }

    /// Builder: set the merchandise total
    pub fn with_contents_cost(mut self, cost: Price) -> Self {
        self.contents_cost = cost;
        self
    }

    /// Builder: mark prices as tax inclusive
    pub fn with_tax_inclusive_prices(mut self) -> Self {
        self.prices_include_tax = true;
        self
    }

    /// Add a line item
    pub fn add_item(&mut self, item: CartItem) {
        self.items.push(item);
    }

    /// Add a tax line
    pub fn add_tax(&mut self, tax: Price) {
        self.taxes.push(tax);
    }

    /// Apply a coupon under the given code
    pub fn apply_coupon(&mut self, code: impl Into<String>, coupon: Coupon) {
        self.coupons.insert(code.into(), coupon);
    }

    /// Sum of all tax lines
    pub fn tax_total(&self) -> Price {
        let amount: i64 = self.taxes.iter().map(|t| t.amount).sum();
        Price::from_minor_units(amount, self.currency)
    }

    /// The cart total compared against free-shipping thresholds:
    /// contents cost plus tax when prices include tax
    pub fn qualifying_total(&self) -> Price {
        if self.prices_include_tax {
            Price::from_minor_units(
                self.contents_cost.amount + self.tax_total().amount,
                self.currency,
            )
        } else {
            self.contents_cost
        }
    }

    /// True if any applied coupon is valid and grants free shipping
    pub fn has_free_shipping_coupon(&self) -> bool {
        self.coupons
            .values()
            .any(|coupon| coupon.valid && coupon.grants_free_shipping)
    }

    /// Number of units in the cart that need physical shipping
    pub fn shippable_units(&self) -> u32 {
        self.items
            .iter()
            .filter(|item| item.requires_shipping)
            .map(|item| item.quantity)
            .sum()
    }

    /// Get total item count across all lines
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Check if the cart has no line items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualifying_total_excludes_tax_by_default() {
        let mut cart = CartSnapshot::new(Currency::USD)
            .with_contents_cost(Price::new(40.0, Currency::USD));
        cart.add_tax(Price::new(15.0, Currency::USD));

        assert_eq!(cart.qualifying_total().amount, 4000);
    }

    #[test]
    fn test_qualifying_total_with_tax_inclusive_prices() {
        let mut cart = CartSnapshot::new(Currency::USD)
            .with_contents_cost(Price::new(40.0, Currency::USD))
            .with_tax_inclusive_prices();
        cart.add_tax(Price::new(10.0, Currency::USD));
        cart.add_tax(Price::new(5.0, Currency::USD));

        assert_eq!(cart.tax_total().amount, 1500);
        assert_eq!(cart.qualifying_total().amount, 5500);
    }

    #[test]
    fn test_free_shipping_coupon_scan() {
        let mut cart = CartSnapshot::new(Currency::USD);
        assert!(!cart.has_free_shipping_coupon());

        cart.apply_coupon("TENOFF", Coupon::discount_only());
        assert!(!cart.has_free_shipping_coupon());

        cart.apply_coupon(
            "EXPIRED",
            Coupon {
                valid: false,
                grants_free_shipping: true,
            },
        );
        assert!(!cart.has_free_shipping_coupon());

        cart.apply_coupon("FREESHIP", Coupon::free_shipping());
        assert!(cart.has_free_shipping_coupon());
    }

    #[test]
    fn test_shippable_units() {
        let mut cart = CartSnapshot::new(Currency::USD);
        cart.add_item(CartItem::new("mug", 3));
        cart.add_item(CartItem::virtual_item("ebook", 2));

        assert_eq!(cart.shippable_units(), 3);
        assert_eq!(cart.item_count(), 5);
        assert!(!cart.is_empty());
    }

    #[test]
    fn test_snapshot_wire_shape() {
        let json = serde_json::json!({
            "currency": "usd",
            "contents_cost": { "amount": 4000, "currency": "usd" },
            "taxes": [{ "amount": 1500, "currency": "usd" }],
            "prices_include_tax": true,
            "coupons": {
                "FREESHIP": { "valid": true, "grants_free_shipping": true }
            },
            "items": [
                { "product_id": "mug", "quantity": 3 },
                { "product_id": "ebook", "quantity": 1, "requires_shipping": false }
            ]
        });

        let cart: CartSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(cart.qualifying_total().amount, 5500);
        assert!(cart.has_free_shipping_coupon());
        // requires_shipping defaults to true when the platform omits it
        assert_eq!(cart.shippable_units(), 3);
    }
}
