//! # Application State
//!
//! Shared state for the Axum application: server configuration, the
//! loaded shipping settings, and the method registry built from them.

use ship_core::{
    BoxedShippingMethod, LocalDeliveryFree, MethodRegistry, ShippingConfig,
    LOCAL_DELIVERY_FREE_ID,
};
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Registered shipping methods
    pub methods: MethodRegistry,
    /// Loaded shipping settings
    pub shipping: ShippingConfig,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState from the environment and settings file
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();
        let shipping = load_shipping_config()?;
        let methods = build_registry(&shipping);

        Ok(Self {
            methods,
            shipping,
            config,
        })
    }

    /// Build a state from already-loaded settings (tests, embedding)
    pub fn with_shipping(shipping: ShippingConfig) -> Self {
        Self {
            methods: build_registry(&shipping),
            shipping,
            config: AppConfig::from_env(),
        }
    }
}

/// Register every enabled method from the loaded settings
fn build_registry(shipping: &ShippingConfig) -> MethodRegistry {
    let mut methods = MethodRegistry::new(LOCAL_DELIVERY_FREE_ID);

    if shipping.local_delivery.enabled {
        let local = LocalDeliveryFree::new(shipping.local_delivery.clone());
        methods.register(Arc::new(local) as BoxedShippingMethod);
    } else {
        tracing::info!("Local delivery is disabled in settings, not registering");
    }

    methods
}

/// Load shipping settings from config file
fn load_shipping_config() -> anyhow::Result<ShippingConfig> {
    // Try to load from config/shipping.toml
    let config_paths = [
        "config/shipping.toml",
        "../config/shipping.toml",
        "../../config/shipping.toml",
    ];

    for path in config_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            let config: ShippingConfig = toml::from_str(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path, e))?;
            tracing::info!("Loaded shipping settings from {}", path);
            return Ok(config);
        }
    }

    // Default settings leave every method disabled
    tracing::warn!("No shipping settings found, using defaults");
    Ok(ShippingConfig::default())
}
