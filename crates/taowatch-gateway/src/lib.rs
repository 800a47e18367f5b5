//! taowatch-gateway - upstream proxy for the subnet statistics API.
//!
//! The gateway holds the upstream endpoint and credential server-side and
//! exposes a single read route to clients:
//!
//! ```text
//! GET /api/subnets → 200 { "data": [SubnetRecord, ...], ... }
//!                  → 500 { "error": "Failed to fetch data." }
//! ```
//!
//! Every call re-queries upstream (no caching), and no failure detail or
//! credential ever reaches the caller; upstream errors are logged
//! server-side only.
//!
//! # Usage
//!
//! ```ignore
//! use taowatch_gateway::{run_server, GatewayConfig};
//!
//! let config = GatewayConfig {
//!     port: 5000,
//!     upstream_url: "https://api.example.com/subnets".into(),
//!     auth_token: std::env::var("TAOWATCH_API_AUTH")?,
//! };
//! run_server(config).await?;
//! ```

mod config;
mod error;
mod server;
mod upstream;

pub use config::GatewayConfig;
pub use error::{GatewayError, GatewayResult};
pub use server::{create_router, run_server, AppState};
pub use upstream::UpstreamClient;
