use pop_inventory::config::load_config;
use pop_inventory::lifecycle::{setup_tracing, InventorySystem};
use pop_inventory::ui::{self, console::ConsoleUi, UiClient, UiError};
use tracing::{info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    setup_tracing(&config.logging.level);
    info!(?config, "Starting inventory");

    let (ui_client, requests) = UiClient::new();
    let console = tokio::spawn(ui::serve(requests, ConsoleUi::stdio()));

    let system = InventorySystem::start(&config, ui_client);
    match system.inventory.run_menu().await {
        Ok(()) => info!("Exit chosen"),
        Err(UiError::Abandoned) => info!("Input closed"),
        Err(e) => warn!(error = %e, "Menu stopped"),
    }

    system.shutdown().await?;
    // Resolves once the last UI client is gone
    console.await?;
    Ok(())
}
