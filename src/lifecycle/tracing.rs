//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the `tracing` subscriber for the whole application.
//!
//! ## Configuration
//!
//! The compact format hides the crate/module prefix (`with_target(false)`); actors identify
//! themselves with the `entity_type` field instead.
//!
//! - `RUST_LOG` wins when set
//! - otherwise the level from `[logging]` in the config file is used
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup with the loaded catalog size, shutdown
//! - **Catalog Operations**: create, delete and custom actions, with the article id
//! - **Persistence**: every save, and every skipped line or failed read/write
//! - **Flows**: one span per interactive operation
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Full payloads and per-request logs
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug`, adding an energy drink looks like:
//!
//! ```text
//! DEBUG add_product: add_product called draft=ProductDraft { category: "Energy drinks", name: "Zap", price: "2.50", description: "Citrus kick" }
//! DEBUG Create entity_type="Product" params=ProductDraft { .. }
//! INFO  Created entity_type="Product" id=10000 size=1
//! DEBUG Persisting new product id=10000
//! DEBUG Saved path=Products.txt bytes=40
//! INFO  Nutrient table set id=10000 table=Calories(kcal)=110, Fat(g)=0, Carbs(g)=27, Protein(g)=0, Caffeine(mg)=80
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `default_level` applies when `RUST_LOG` is unset or invalid.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn setup_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .try_init();
}
