//! # Inventory Flows
//!
//! The interactive operations behind the menu. A flow drives the catalog through
//! [`CatalogClient`] and the user through [`UiClient`]:
//!
//! ```text
//! add product:   choose category ─▶ next id ─▶ details prompt ─▶ create ─▶ nutrient prompt (food)
//! product info:  id prompt ─▶ find ─▶ display
//! stock:         id prompt ─▶ find ─▶ quantity prompt ─▶ adjust ─▶ listing
//! remove:        id prompt ─▶ remove ─▶ confirmation
//! ```
//!
//! Catalog errors end the flow and are reported through the UI; they are not returned. A flow
//! only fails when the UI does not answer a prompt ([`UiError`]).

use tracing::{debug, info, instrument, warn};

use crate::catalog_actor::input::parse_article_id;
use crate::catalog_actor::{CatalogError, StockDirection};
use crate::clients::CatalogClient;
use crate::model::{ArticleId, ProductDraft, STOCK_TITLE};
use crate::ui::{UiClient, UiError};

/// Prompt for article ids.
pub const ID_PROMPT: &str = "Enter product ID:";

/// Prompt for stock quantities.
pub const QUANTITY_PROMPT: &str = "Quantity: ";

/// Main menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddProduct,
    ListProducts,
    ProductInfo,
    IncreaseStock,
    DecreaseStock,
    RemoveProduct,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::AddProduct,
        MenuChoice::ListProducts,
        MenuChoice::ProductInfo,
        MenuChoice::IncreaseStock,
        MenuChoice::DecreaseStock,
        MenuChoice::RemoveProduct,
        MenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddProduct => "Add product",
            MenuChoice::ListProducts => "List products",
            MenuChoice::ProductInfo => "Product info",
            MenuChoice::IncreaseStock => "Increase stock",
            MenuChoice::DecreaseStock => "Decrease stock",
            MenuChoice::RemoveProduct => "Remove product",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Accepts the menu number or the label, ignoring case.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Ok(n) = input.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| Self::ALL.get(i)).copied();
        }
        Self::ALL
            .into_iter()
            .find(|choice| choice.label().eq_ignore_ascii_case(input))
    }

    /// The numbered menu followed by the prompt line.
    pub fn prompt() -> String {
        let mut text = String::new();
        for (n, choice) in Self::ALL.iter().enumerate() {
            text.push_str(&format!("{}) {}\n", n + 1, choice.label()));
        }
        text.push_str("Choose:");
        text
    }
}

#[derive(Clone)]
pub struct Inventory {
    catalog: CatalogClient,
    ui: UiClient,
    min_article_id: u32,
}

impl Inventory {
    pub fn new(catalog: CatalogClient, ui: UiClient, min_article_id: u32) -> Self {
        Self {
            catalog,
            ui,
            min_article_id,
        }
    }

    pub fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }

    /// Runs one menu choice. Returns `false` for [`MenuChoice::Exit`].
    pub async fn dispatch(&self, choice: MenuChoice) -> Result<bool, UiError> {
        match choice {
            MenuChoice::AddProduct => self.add_product().await?,
            MenuChoice::ListProducts => self.list_products().await?,
            MenuChoice::ProductInfo => self.product_info().await?,
            MenuChoice::IncreaseStock => self.increase_stock().await?,
            MenuChoice::DecreaseStock => self.decrease_stock().await?,
            MenuChoice::RemoveProduct => self.remove_product().await?,
            MenuChoice::Exit => return Ok(false),
        }
        Ok(true)
    }

    /// Shows the menu and runs choices until the user exits or stops answering.
    pub async fn run_menu(&self) -> Result<(), UiError> {
        loop {
            let answer = self.ui.prompt_input(MenuChoice::prompt()).await?;
            let Some(choice) = MenuChoice::parse(&answer) else {
                self.ui.report_error(format!("Unknown menu choice: {}", answer.trim()));
                continue;
            };
            debug!(?choice, "Menu");
            if !self.dispatch(choice).await? {
                return Ok(());
            }
        }
    }

    fn report(&self, error: CatalogError) {
        warn!(%error, "Flow failed");
        self.ui.report_error(error.to_string());
    }

    /// Shows id, name and stock of every product.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<(), UiError> {
        match self.catalog.list_all().await {
            Ok(listing) => self.ui.show_text(STOCK_TITLE, listing.to_string()),
            Err(e) => self.report(e),
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn add_product(&self) -> Result<(), UiError> {
        let category = self.ui.choose_category().await?;
        let id = match self.catalog.next_id().await {
            Ok(id) => id,
            Err(e) => {
                self.report(e);
                return Ok(());
            }
        };

        let details = self.ui.prompt_product_details(id).await?;
        let draft = ProductDraft {
            category,
            name: details.name,
            price: details.price,
            description: details.description,
        };
        let added = match self.catalog.add_product(draft).await {
            Ok(added) => added,
            Err(e) => {
                self.report(e);
                return Ok(());
            }
        };
        if added.id != id {
            // Another flow took the id while the details prompt was open
            debug!(shown = %id, assigned = %added.id, "Article id moved");
        }
        info!(id = %added.id, "Product added");

        if let Some(kind) = added.nutrients {
            let form = self.ui.prompt_nutrients(kind).await?;
            if let Err(e) = self.catalog.submit_nutrients(added.id, &form).await {
                self.report(e);
            }
        }
        Ok(())
    }

    /// Asks for an article id. `None` when the input was rejected (already reported).
    async fn prompt_article_id(&self) -> Result<Option<ArticleId>, UiError> {
        let text = self.ui.prompt_input(ID_PROMPT).await?;
        match parse_article_id(&text, self.min_article_id) {
            Ok(id) => Ok(Some(id)),
            Err(e) => {
                self.report(e);
                Ok(None)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn product_info(&self) -> Result<(), UiError> {
        let Some(id) = self.prompt_article_id().await? else {
            return Ok(());
        };
        match self.catalog.find_by_id(id).await {
            Ok(product) => self.ui.display_product(product),
            Err(e) => self.report(e),
        }
        Ok(())
    }

    pub async fn increase_stock(&self) -> Result<(), UiError> {
        self.adjust_stock(StockDirection::Increase).await
    }

    pub async fn decrease_stock(&self) -> Result<(), UiError> {
        self.adjust_stock(StockDirection::Decrease).await
    }

    #[instrument(skip(self))]
    async fn adjust_stock(&self, direction: StockDirection) -> Result<(), UiError> {
        let Some(id) = self.prompt_article_id().await? else {
            return Ok(());
        };
        if let Err(e) = self.catalog.find_by_id(id).await {
            self.report(e);
            return Ok(());
        }

        let quantity = self.ui.prompt_input(QUANTITY_PROMPT).await?;
        match self.catalog.adjust_stock(id, &quantity, direction).await {
            Ok(stock) => {
                info!(%id, stock, "Stock updated");
                self.list_products().await?;
            }
            Err(e) => self.report(e),
        }
        Ok(())
    }

    /// Removes a product. An id nobody carries still rewrites the files.
    #[instrument(skip(self))]
    pub async fn remove_product(&self) -> Result<(), UiError> {
        let Some(id) = self.prompt_article_id().await? else {
            return Ok(());
        };
        match self.catalog.remove_product(id).await {
            Ok(Some(product)) => self
                .ui
                .show_text("Product removed", format!("Article ID: {id} {}", product.name)),
            Ok(None) => debug!(%id, "Nothing to remove"),
            Err(e) => self.report(e),
        }
        Ok(())
    }
}
