//! # Delivery Method Settings
//!
//! Persisted configuration for shipping methods, loaded from
//! `config/shipping.toml`. Unknown enum values deserialize to
//! `Unrecognized` so a stale or hand-edited config degrades to
//! "no fee" / "not eligible" instead of failing to load.

use serde::{Deserialize, Serialize};

/// How the delivery fee is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeType {
    /// Flat amount per order
    Fixed,
    /// Percentage of the cart contents cost
    Percent,
    /// Flat amount per shippable unit
    PerItem,
    /// Any stored value not listed above; charges nothing
    #[serde(other)]
    Unrecognized,
}

impl Default for FeeType {
    fn default() -> Self {
        FeeType::Fixed
    }
}

/// What a cart must satisfy before the delivery fee is waived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreeShippingRequirement {
    /// Free shipping is never granted
    None,
    /// A valid coupon that grants free shipping
    Coupon,
    /// A minimum qualifying order amount
    MinAmount,
    /// A minimum order amount OR a coupon
    Either,
    /// A minimum order amount AND a coupon
    Both,
    /// Any stored value not listed above; never eligible
    #[serde(other)]
    Unrecognized,
}

impl Default for FreeShippingRequirement {
    fn default() -> Self {
        FreeShippingRequirement::None
    }
}

impl FreeShippingRequirement {
    /// True when the requirement consults cart coupons
    pub fn considers_coupon(&self) -> bool {
        matches!(
            self,
            FreeShippingRequirement::Coupon
                | FreeShippingRequirement::Either
                | FreeShippingRequirement::Both
        )
    }

    /// True when the requirement consults the qualifying total
    pub fn considers_min_amount(&self) -> bool {
        matches!(
            self,
            FreeShippingRequirement::MinAmount
                | FreeShippingRequirement::Either
                | FreeShippingRequirement::Both
        )
    }

    /// True when there is a waiver rule to evaluate at all
    pub fn applies(&self) -> bool {
        self.considers_coupon() || self.considers_min_amount()
    }
}

/// Where the method is offered; evaluated by the host platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    /// All allowed countries
    All,
    /// Specific countries only
    Specific,
}

impl Default for Availability {
    fn default() -> Self {
        Availability::All
    }
}

/// Persisted settings for the local delivery method.
///
/// `codes`, `availability` and `countries` are screening data for the
/// host platform (which matches postcodes, wildcards included, before a
/// method is ever quoted); the rate rules never read them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliverySettings {
    /// Whether the method is offered at all
    #[serde(default)]
    pub enabled: bool,

    /// Title shown to the shopper during checkout
    #[serde(default = "default_title")]
    pub title: String,

    /// How delivery charges are calculated
    #[serde(default)]
    pub fee_type: FeeType,

    /// A money amount for fixed/per-item fees, a percentage for percent
    /// fees. Zero disables the charge.
    #[serde(default)]
    pub fee: f64,

    /// What waives the fee, if anything
    #[serde(default)]
    pub requires: FreeShippingRequirement,

    /// Minimum order amount for the waiver (when `requires` uses one)
    #[serde(default)]
    pub min_amount: f64,

    /// Allowed zip/post codes, comma-style list. Accepts wildcards
    /// (`P*`) and positional patterns (`NG1___`); matched upstream.
    #[serde(default)]
    pub codes: Vec<String>,

    /// Method availability (all countries or a specific list)
    #[serde(default)]
    pub availability: Availability,

    /// Specific countries, when `availability` is `specific`
    #[serde(default)]
    pub countries: Vec<String>,
}

fn default_title() -> String {
    "Local Delivery".to_string()
}

impl Default for DeliverySettings {
    fn default() -> Self {
        Self {
            enabled: false,
            title: default_title(),
            fee_type: FeeType::default(),
            fee: 0.0,
            requires: FreeShippingRequirement::default(),
            min_amount: 0.0,
            codes: Vec::new(),
            availability: Availability::default(),
            countries: Vec::new(),
        }
    }
}

impl DeliverySettings {
    /// Builder: switch the method on
    pub fn enable(mut self) -> Self {
        self.enabled = true;
        self
    }

    /// Builder: set the checkout title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builder: set the fee model and amount
    pub fn with_fee(mut self, fee_type: FeeType, fee: f64) -> Self {
        self.fee_type = fee_type;
        self.fee = fee;
        self
    }

    /// Builder: set the free-shipping requirement and its threshold
    pub fn with_free_shipping(
        mut self,
        requires: FreeShippingRequirement,
        min_amount: f64,
    ) -> Self {
        self.requires = requires;
        self.min_amount = min_amount;
        self
    }
}

/// Top-level shipping configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShippingConfig {
    /// Settings for the local delivery method
    #[serde(default)]
    pub local_delivery: DeliverySettings,
}

impl ShippingConfig {
    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = DeliverySettings::default();

        assert!(!settings.enabled);
        assert_eq!(settings.title, "Local Delivery");
        assert_eq!(settings.fee_type, FeeType::Fixed);
        assert_eq!(settings.fee, 0.0);
        assert_eq!(settings.requires, FreeShippingRequirement::None);
        assert_eq!(settings.min_amount, 0.0);
        assert_eq!(settings.availability, Availability::All);
    }

    #[test]
    fn test_from_toml() {
        let config = ShippingConfig::from_toml(
            r#"
            [local_delivery]
            enabled = true
            title = "Same-Day Delivery"
            fee_type = "percent"
            fee = 5.0
            requires = "either"
            min_amount = 50.0
            codes = ["PE30", "P*", "NG1___"]
            availability = "specific"
            countries = ["GB"]
            "#,
        )
        .unwrap();

        let settings = config.local_delivery;
        assert!(settings.enabled);
        assert_eq!(settings.title, "Same-Day Delivery");
        assert_eq!(settings.fee_type, FeeType::Percent);
        assert_eq!(settings.requires, FreeShippingRequirement::Either);
        assert_eq!(settings.min_amount, 50.0);
        assert_eq!(settings.codes.len(), 3);
        assert_eq!(settings.availability, Availability::Specific);
        assert_eq!(settings.countries, vec!["GB".to_string()]);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config = ShippingConfig::from_toml("").unwrap();
        assert!(!config.local_delivery.enabled);
        assert_eq!(config.local_delivery.title, "Local Delivery");
    }

    #[test]
    fn test_unknown_stored_values_degrade_silently() {
        let config = ShippingConfig::from_toml(
            r#"
            [local_delivery]
            enabled = true
            fee_type = "by_weight"
            requires = "loyalty_tier"
            "#,
        )
        .unwrap();

        assert_eq!(config.local_delivery.fee_type, FeeType::Unrecognized);
        assert_eq!(
            config.local_delivery.requires,
            FreeShippingRequirement::Unrecognized
        );
        assert!(!config.local_delivery.requires.applies());
    }

    #[test]
    fn test_requirement_predicates() {
        use FreeShippingRequirement::*;

        assert!(Coupon.considers_coupon() && !Coupon.considers_min_amount());
        assert!(!MinAmount.considers_coupon() && MinAmount.considers_min_amount());
        assert!(Either.considers_coupon() && Either.considers_min_amount());
        assert!(Both.considers_coupon() && Both.considers_min_amount());
        assert!(!None.applies());
        assert!(!Unrecognized.applies());
    }
}
