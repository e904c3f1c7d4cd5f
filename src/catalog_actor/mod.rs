//! The catalog actor: one task that owns every product and is the sole writer of both catalog
//! files.

mod actions;
pub mod entity;
pub mod error;
pub mod input;
pub mod storage;

pub use actions::*;
pub use entity::next_article_id;
pub use error::*;
pub use storage::CatalogStorage;

use actor_framework::ResourceActor;

use crate::clients::CatalogClient;
use crate::config::Config;
use crate::model::Product;
use crate::ui::UiClient;

/// Dependencies handed to the catalog actor when it starts.
#[derive(Debug, Clone)]
pub struct CatalogContext {
    pub storage: CatalogStorage,
    pub min_article_id: u32,
    /// Where load and save problems are reported.
    pub ui: UiClient,
}

impl CatalogContext {
    pub fn from_config(config: &Config, ui: UiClient) -> Self {
        Self {
            storage: CatalogStorage::from_config(&config.storage),
            min_article_id: config.catalog.min_article_id,
            ui,
        }
    }
}

/// Creates a new catalog actor and its client.
pub fn new(channel_capacity: usize) -> (ResourceActor<Product>, CatalogClient) {
    let (actor, generic_client) = ResourceActor::new(channel_capacity);
    let client = CatalogClient::new(generic_client);
    (actor, client)
}
