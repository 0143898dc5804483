//! # Local Delivery Method
//!
//! Local delivery with a free-shipping option: the configured fee is
//! waived when the cart meets a minimum order amount, carries a valid
//! free-shipping coupon, or both/either, depending on the configured
//! requirement.

use crate::cart::CartSnapshot;
use crate::method::{ShippingMethod, ShippingRate};
use crate::money::Price;
use crate::settings::{DeliverySettings, FeeType, FreeShippingRequirement};

/// Method id registered with the platform and stamped on every rate
pub const LOCAL_DELIVERY_FREE_ID: &str = "local_delivery_free";

/// Local delivery with a free-shipping waiver
#[derive(Debug, Clone)]
pub struct LocalDeliveryFree {
    settings: DeliverySettings,
}

impl LocalDeliveryFree {
    /// Create the method from its persisted settings
    pub fn new(settings: DeliverySettings) -> Self {
        Self { settings }
    }

    /// Read access to the persisted settings
    pub fn settings(&self) -> &DeliverySettings {
        &self.settings
    }

    /// Decide whether the delivery fee is waived for this cart.
    ///
    /// Missing coupon or tax data count as "no coupon" / "no tax"; they
    /// never fail the calculation.
    pub fn is_free(&self, cart: &CartSnapshot) -> bool {
        let requires = self.settings.requires;

        let has_coupon = requires.considers_coupon() && cart.has_free_shipping_coupon();

        let has_met_min_amount = requires.considers_min_amount() && {
            let threshold = cart.currency.to_minor_units(self.settings.min_amount);
            cart.qualifying_total().amount >= threshold
        };

        match requires {
            FreeShippingRequirement::MinAmount => has_met_min_amount,
            FreeShippingRequirement::Coupon => has_coupon,
            FreeShippingRequirement::Both => has_met_min_amount && has_coupon,
            FreeShippingRequirement::Either => has_met_min_amount || has_coupon,
            FreeShippingRequirement::None | FreeShippingRequirement::Unrecognized => false,
        }
    }

    /// Compute the delivery fee, assuming it is not waived
    pub fn fee(&self, cart: &CartSnapshot) -> Price {
        match self.settings.fee_type {
            FeeType::Fixed => Price::new(self.settings.fee, cart.currency),
            FeeType::Percent => {
                // Single rounding point: where the decimal result becomes
                // a minor-unit amount.
                let amount = cart.contents_cost.amount as f64 * (self.settings.fee / 100.0);
                Price::from_minor_units(amount.round() as i64, cart.currency)
            }
            FeeType::PerItem => {
                let per_unit = cart.currency.to_minor_units(self.settings.fee);
                let amount = cart
                    .items
                    .iter()
                    .filter(|item| item.quantity > 0 && item.requires_shipping)
                    .map(|item| per_unit * i64::from(item.quantity))
                    .sum();
                Price::from_minor_units(amount, cart.currency)
            }
            FeeType::Unrecognized => Price::zero(cart.currency),
        }
    }
}

impl ShippingMethod for LocalDeliveryFree {
    fn id(&self) -> &'static str {
        LOCAL_DELIVERY_FREE_ID
    }

    fn title(&self) -> String {
        self.settings.title.clone()
    }

    fn enabled(&self) -> bool {
        self.settings.enabled
    }

    fn calculate(&self, cart: &CartSnapshot) -> ShippingRate {
        // The waiver check only runs when a requirement is configured
        let is_free = self.settings.requires.applies() && self.is_free(cart);

        let cost = if is_free {
            Price::zero(cart.currency)
        } else {
            self.fee(cart)
        };

        ShippingRate::new(self.id(), self.title(), cost)
    }
}
