//! # Curbside RS
//!
//! Shipping-rate quote service for local delivery with a free-shipping
//! option.
//!
//! ## Usage
//!
//! ```bash
//! # Optional overrides (defaults shown)
//! export HOST=127.0.0.1
//! export PORT=8080
//!
//! # Run the server (reads config/shipping.toml)
//! curbside
//! ```

use ship_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Print banner
    print_banner();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Shipping methods registered: {:?}", state.methods.method_ids());

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("🚚 Curbside starting on http://{}", addr);

    if !is_prod {
        info!("📝 Health: http://{}/health", addr);
        info!("📦 Quote: POST http://{}/api/v1/quote", addr);
        info!("🚛 Methods: GET http://{}/api/v1/methods", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  🚚 Curbside RS 🚚
  ━━━━━━━━━━━━━━━━━━━
  Local delivery rate engine
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
