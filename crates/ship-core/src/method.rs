//! # Shipping Method Trait
//!
//! Core trait for shipping method implementations, plus the registry the
//! quote layer dispatches through.
//!
//! ## Design Pattern
//!
//! Each rate rule implements `ShippingMethod` and is registered under its
//! id, so methods can be added or swapped without changing the quote
//! layer.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │            ShippingMethod (trait)           │
//! │  ├── id()                                   │
//! │  ├── title()                                │
//! │  ├── enabled()                              │
//! │  └── calculate()                            │
//! └─────────────────────────────────────────────┘
//!                       ▲
//!             ┌─────────┴─────────┐
//!             │                   │
//!    ┌────────┴────────┐ ┌────────┴────────┐
//!    │LocalDeliveryFree│ │  FlatRate etc.  │
//!    │                 │ │    (future)     │
//!    └─────────────────┘ └─────────────────┘
//! ```

use crate::cart::CartSnapshot;
use crate::money::Price;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// A single shipping rate offered for a cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingRate {
    /// Id of the method that produced the rate
    pub id: String,

    /// Label shown to the shopper during checkout
    pub label: String,

    /// Cost of the rate; zero when shipping is free
    pub cost: Price,
}

impl ShippingRate {
    /// Create a new rate
    pub fn new(id: impl Into<String>, label: impl Into<String>, cost: Price) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            cost,
        }
    }

    /// Whether this rate waives the shipping charge
    pub fn is_free(&self) -> bool {
        self.cost.is_zero()
    }
}

/// Core trait for shipping method implementations.
///
/// Rate calculation is a pure, synchronous function of the configured
/// settings and the cart snapshot. Methods hold no mutable state, so a
/// single instance is safe to share across concurrent quote requests.
pub trait ShippingMethod: Send + Sync {
    /// Stable method identifier, used for registry lookup and stamped on
    /// every rate the method produces
    fn id(&self) -> &'static str;

    /// Display title shown during checkout
    fn title(&self) -> String;

    /// Whether the method is switched on in its settings
    fn enabled(&self) -> bool {
        true
    }

    /// Compute the rate offered for the given cart.
    ///
    /// Exactly one rate is returned per call; a waived fee comes back as
    /// a zero-cost rate, never as an absent one.
    fn calculate(&self, cart: &CartSnapshot) -> ShippingRate;
}

/// Type alias for a shared shipping method (dynamic dispatch)
pub type BoxedShippingMethod = Arc<dyn ShippingMethod>;

/// Registry of shipping methods keyed by id
#[derive(Clone)]
pub struct MethodRegistry {
    methods: HashMap<String, BoxedShippingMethod>,
    default_method: String,
}

impl MethodRegistry {
    /// Create a new registry with a default method id
    pub fn new(default_method: impl Into<String>) -> Self {
        Self {
            methods: HashMap::new(),
            default_method: default_method.into(),
        }
    }

    /// Register a shipping method
    pub fn register(&mut self, method: BoxedShippingMethod) {
        let id = method.id().to_string();
        self.methods.insert(id, method);
    }

    /// Register with builder pattern
    pub fn with_method(mut self, method: BoxedShippingMethod) -> Self {
        self.register(method);
        self
    }

    /// Get the default method
    pub fn default_method(&self) -> Option<&BoxedShippingMethod> {
        self.methods.get(&self.default_method)
    }

    /// Get a method by id
    pub fn get(&self, method_id: &str) -> Option<&BoxedShippingMethod> {
        self.methods.get(method_id)
    }

    /// Get a method or fall back to the default
    pub fn get_or_default(&self, method_id: Option<&str>) -> Option<&BoxedShippingMethod> {
        match method_id {
            Some(id) => self.get(id).or_else(|| self.default_method()),
            None => self.default_method(),
        }
    }

    /// List all registered method ids
    pub fn method_ids(&self) -> Vec<&str> {
        self.methods.keys().map(|s| s.as_str()).collect()
    }

    /// Check if a method is registered
    pub fn has_method(&self, method_id: &str) -> bool {
        self.methods.contains_key(method_id)
    }

    /// Iterate over all registered methods
    pub fn methods(&self) -> impl Iterator<Item = &BoxedShippingMethod> {
        self.methods.values()
    }

    /// Get number of registered methods
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl Default for MethodRegistry {
    fn default() -> Self {
        Self::new("local_delivery_free")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    struct FlatRate;

    impl ShippingMethod for FlatRate {
        fn id(&self) -> &'static str {
            "flat_rate"
        }

        fn title(&self) -> String {
            "Flat Rate".to_string()
        }

        fn calculate(&self, cart: &CartSnapshot) -> ShippingRate {
            ShippingRate::new(self.id(), self.title(), Price::new(7.0, cart.currency))
        }
    }

    #[test]
    fn test_rate_is_free() {
        let free = ShippingRate::new("m", "M", Price::zero(Currency::USD));
        assert!(free.is_free());

        let paid = ShippingRate::new("m", "M", Price::new(4.99, Currency::USD));
        assert!(!paid.is_free());
    }

    #[test]
    fn test_empty_registry() {
        let registry = MethodRegistry::default();

        assert!(registry.is_empty());
        assert!(registry.default_method().is_none());
        assert!(registry.get_or_default(Some("flat_rate")).is_none());
    }

    #[test]
    fn test_registry_lookup_and_fallback() {
        let registry = MethodRegistry::new("flat_rate").with_method(Arc::new(FlatRate));

        assert_eq!(registry.len(), 1);
        assert!(registry.has_method("flat_rate"));
        assert_eq!(registry.method_ids(), vec!["flat_rate"]);

        // Unknown ids fall back to the default method
        let method = registry.get_or_default(Some("unknown")).unwrap();
        assert_eq!(method.id(), "flat_rate");

        let cart = CartSnapshot::new(Currency::USD);
        let rate = method.calculate(&cart);
        assert_eq!(rate.cost.amount, 700);
    }
}
