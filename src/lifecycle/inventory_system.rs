use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::catalog_actor::{self, CatalogContext};
use crate::clients::CatalogClient;
use crate::config::Config;
use crate::flows::Inventory;
use crate::ui::UiClient;

/// Errors raised while stopping the system.
#[derive(Debug, thiserror::Error)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

/// The runtime orchestrator for the inventory.
///
/// `InventorySystem` is responsible for:
/// - **Lifecycle Management**: starting the catalog actor and stopping it again
/// - **Dependency Wiring**: handing the actor its storage and the UI client it reports to
///
/// # Example
///
/// ```ignore
/// let (ui, requests) = UiClient::new();
/// tokio::spawn(ui::serve(requests, ConsoleUi::stdio()));
///
/// let system = InventorySystem::start(&config, ui);
/// system.inventory.run_menu().await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct InventorySystem {
    /// Client for interacting with the catalog actor
    pub catalog: CatalogClient,

    /// Interactive flows over the catalog and the UI
    pub inventory: Inventory,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl InventorySystem {
    /// Spawns the catalog actor. It loads both catalog files before serving the first request.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(config: &Config, ui: UiClient) -> Self {
        let (actor, catalog) = catalog_actor::new(config.catalog.channel_capacity);
        let context = CatalogContext::from_config(config, ui.clone());
        let handle = tokio::spawn(actor.run(context));
        info!(
            products_file = %config.storage.products_file.display(),
            nutrient_tables_file = %config.storage.nutrient_tables_file.display(),
            "Inventory started"
        );

        let inventory = Inventory::new(catalog.clone(), ui, config.catalog.min_article_id);
        Self {
            catalog,
            inventory,
            handles: vec![handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the actor's channel; the actor finishes the requests already
    /// queued and exits its loop. Then every actor task is awaited.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down inventory...");
        drop(self.inventory);
        drop(self.catalog);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("Inventory shutdown complete.");
        Ok(())
    }
}
