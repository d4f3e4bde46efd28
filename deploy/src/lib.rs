//! Deployment scaffolding for the product ledger and the store front.
//!
//! Deploys [`product::Product`] first, then [`simple_store::SimpleStore`]
//! pointing at it, waits the configured number of ledger confirmations after
//! each step and, outside development networks, submits both contracts for
//! explorer verification.

mod config;
mod deployment;
mod error;
mod verify;

pub use config::{DeployConfig, DEVELOPMENT_CHAINS};
pub use deployment::{deploy_all, Deployment, NamedAccounts, PRODUCT_URI};
pub use error::{DeployError, Result};
pub use verify::{TracingVerifier, Verifier};

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered by `RUST_LOG` (default `info`).
///
/// Safe to call more than once, later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
