//! # Pop Inventory
//!
//! A single-user inventory manager for a small shop catalog: accessories and food products
//! (energy drinks, protein bars, protein powders) with nutrient tables, kept in two flat text
//! files.
//!
//! ## Architecture
//!
//! The catalog is owned by one actor built on the [`actor_framework`] crate. Everything else
//! talks to it through a typed client, and the UI is a separate collaborator reached through
//! request messages with one-shot replies.
//!
//! ```text
//! menu ─▶ flows::Inventory ─▶ CatalogClient ─▶ ResourceActor<Product> ─▶ codec ─▶ files
//!              │                                        │
//!              └──────────── UiClient ◀─────────────────┘ (error reports)
//! ```
//!
//! ## Module Tour
//!
//! ### 1. The Data ([`model`])
//! [`Product`](model::Product) with its category variants, prices, nutrient tables and the
//! stock listing.
//!
//! ### 2. The File Format ([`codec`])
//! - Products file: `variantTag;articleId;name;price;description;stock`
//! - Nutrient tables file: `articleId;kcal;fat;carbs;protein[;caffeine]`
//!
//! ### 3. The Actor ([`catalog_actor`])
//! The [`ActorEntity`](actor_framework::ActorEntity) implementation for `Product`: gap-filling
//! id allocation, validation, stock and nutrient actions, load on start, save on commit.
//!
//! ### 4. The Interface ([`clients`])
//! [`CatalogClient`](clients::CatalogClient) wraps the generic `ResourceClient` and hands back
//! typed [`CatalogError`](catalog_actor::CatalogError)s.
//!
//! ### 5. The User ([`ui`], [`flows`])
//! The UI collaborator contract, a console collaborator, a scripted one for tests, and the
//! interactive flows that drive catalog and UI together.
//!
//! ### 6. The Orchestrator ([`lifecycle`], [`config`])
//! [`InventorySystem`](lifecycle::InventorySystem) starts and stops the actor; configuration
//! comes from an optional TOML file.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=debug cargo run
//! ```

pub mod catalog_actor;
pub mod clients;
pub mod codec;
pub mod config;
pub mod flows;
pub mod lifecycle;
pub mod model;
pub mod ui;
