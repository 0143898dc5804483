//! # ship-core
//!
//! Core types and rate rules for the curbside-rs shipping engine.
//!
//! This crate provides:
//! - `ShippingMethod` trait and `MethodRegistry` for rate dispatch
//! - `LocalDeliveryFree`, local delivery with a free-shipping waiver
//! - `CartSnapshot` and friends, the per-calculation cart input
//! - `DeliverySettings` and `ShippingConfig` for persisted configuration
//! - `ShippingError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use ship_core::{
//!     CartSnapshot, Currency, DeliverySettings, FeeType,
//!     FreeShippingRequirement, LocalDeliveryFree, Price, ShippingMethod,
//! };
//!
//! let settings = DeliverySettings::default()
//!     .enable()
//!     .with_fee(FeeType::Fixed, 4.99)
//!     .with_free_shipping(FreeShippingRequirement::MinAmount, 50.0);
//!
//! let cart = CartSnapshot::new(Currency::USD)
//!     .with_contents_cost(Price::new(60.0, Currency::USD));
//!
//! // 60.00 clears the 50.00 threshold, so the fee is waived
//! let rate = LocalDeliveryFree::new(settings).calculate(&cart);
//! assert!(rate.cost.is_zero());
//! ```

pub mod cart;
pub mod error;
pub mod local_delivery;
pub mod method;
pub mod money;
pub mod settings;

// Re-exports for convenience
pub use cart::{CartItem, CartSnapshot, Coupon};
pub use error::{ShippingError, ShippingResult};
pub use local_delivery::{LocalDeliveryFree, LOCAL_DELIVERY_FREE_ID};
pub use method::{BoxedShippingMethod, MethodRegistry, ShippingMethod, ShippingRate};
pub use money::{Currency, Price};
pub use settings::{
    Availability, DeliverySettings, FeeType, FreeShippingRequirement, ShippingConfig,
};
