//! Custom actions for the catalog actor.
//!
//! These are the operations on a single [`Product`](crate::model::Product) beyond create, get,
//! list and delete. They are handled by
//! [`ActorEntity::handle_action`](actor_framework::ActorEntity::handle_action), and a successful
//! action is persisted before the reply is sent.

use crate::model::{NutrientTable, NutrientValues};

/// Which way [`CatalogAction::AdjustStock`] moves the stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockDirection {
    Increase,
    Decrease,
}

/// Custom actions for Product entities.
#[derive(Debug, Clone)]
pub enum CatalogAction {
    /// Replaces the nutrient table of a food product.
    ///
    /// # Errors
    /// Fails for non-food products, and when the values don't fit the variant (caffeine is
    /// required for energy drinks and rejected for everything else).
    SetNutrientTable(NutrientValues),
    /// Moves stock by `quantity`.
    ///
    /// # Errors
    /// Fails for a zero quantity, and when decreasing by more than is in stock.
    AdjustStock {
        quantity: u32,
        direction: StockDirection,
    },
}

/// Results from CatalogActions - variants match 1:1 with CatalogAction
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogActionResult {
    /// The table now stored on the product.
    NutrientTable(NutrientTable),
    /// Stock level after the adjustment.
    Stock(u32),
}
