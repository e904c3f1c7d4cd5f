//! ActorEntity trait implementation for the Product domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation that lets the whole catalog be
//! managed by the generic [`ResourceActor`](actor_framework::ResourceActor):
//!
//! - ids are allocated by [`next_article_id`] (lowest free id from the configured minimum),
//! - the collection is loaded from the two catalog files when the actor starts,
//! - every committed change rewrites the file(s) it touched.

use actor_framework::{ActorEntity, Change};
use async_trait::async_trait;
use tracing::{debug, info};

use super::actions::{CatalogAction, CatalogActionResult, StockDirection};
use super::input::build_product;
use super::{CatalogContext, CatalogError};
use crate::model::{ArticleId, Product, ProductDraft};

/// Lowest id at or above `min` that no product in `store` carries.
///
/// Fills gaps left by removed products; with no gaps this is one past the highest id.
pub fn next_article_id(store: &[Product], min: u32) -> ArticleId {
    let mut used: Vec<u32> = store.iter().map(|p| p.id.0).filter(|id| *id >= min).collect();
    used.sort_unstable();

    let mut candidate = min;
    for id in used {
        if id > candidate {
            break;
        }
        if id == candidate {
            candidate = candidate.saturating_add(1);
        }
    }
    ArticleId(candidate)
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ArticleId;
    type Create = ProductDraft;
    type Action = CatalogAction;
    type ActionResult = CatalogActionResult;
    type Context = CatalogContext;
    type Error = CatalogError;

    fn id(&self) -> &ArticleId {
        &self.id
    }

    fn next_id(store: &[Self], ctx: &CatalogContext) -> ArticleId {
        next_article_id(store, ctx.min_article_id)
    }

    /// Validates the draft. Nothing is stored when this fails.
    fn from_create_params(id: ArticleId, draft: ProductDraft) -> Result<Self, CatalogError> {
        build_product(id, draft)
    }

    async fn load(ctx: &CatalogContext) -> Vec<Self> {
        ctx.storage.load(&ctx.ui).await
    }

    /// Persists what the change touched:
    /// - create and stock changes rewrite the products file,
    /// - nutrient table changes rewrite the nutrient tables file,
    /// - removals rewrite both, even when the id was absent.
    async fn on_commit(store: &[Self], change: Change<'_, Self>, ctx: &CatalogContext) {
        let storage = &ctx.storage;
        match change {
            Change::Created(id) => {
                debug!(%id, "Persisting new product");
                storage.save_products(store, &ctx.ui).await;
            }
            Change::Deleted { id, removed } => {
                debug!(%id, removed, "Persisting removal");
                storage.save_products(store, &ctx.ui).await;
                storage.save_nutrient_tables(store, &ctx.ui).await;
            }
            Change::Action {
                id,
                result: CatalogActionResult::NutrientTable(_),
            } => {
                debug!(%id, "Persisting nutrient table");
                storage.save_nutrient_tables(store, &ctx.ui).await;
            }
            Change::Action {
                id,
                result: CatalogActionResult::Stock(stock),
            } => {
                debug!(%id, stock, "Persisting stock");
                storage.save_products(store, &ctx.ui).await;
            }
        }
    }

    /// Handles custom actions for the Product entity.
    ///
    /// # Actions
    /// - `SetNutrientTable`: replaces the whole table, or leaves it untouched on error
    /// - `AdjustStock`: adds, or removes when enough is in stock
    async fn handle_action(
        &mut self,
        action: CatalogAction,
        _ctx: &CatalogContext,
    ) -> Result<CatalogActionResult, CatalogError> {
        match action {
            CatalogAction::SetNutrientTable(values) => {
                let id = self.id;
                let food = self.food_mut().ok_or(CatalogError::NotFoodProduct(id))?;
                let table = food.set_nutrients(&values.to_vec())?;
                info!(%id, table = %table, "Nutrient table set");
                Ok(CatalogActionResult::NutrientTable(table.clone()))
            }
            CatalogAction::AdjustStock {
                quantity,
                direction,
            } => {
                if quantity == 0 {
                    return Err(CatalogError::InvalidQuantity);
                }
                self.stock = match direction {
                    StockDirection::Increase => self
                        .stock
                        .checked_add(quantity)
                        .ok_or(CatalogError::InvalidQuantity)?,
                    StockDirection::Decrease => {
                        self.stock
                            .checked_sub(quantity)
                            .ok_or(CatalogError::NotEnoughStock {
                                requested: quantity,
                                available: self.stock,
                            })?
                    }
                };
                info!(id = %self.id, ?direction, quantity, stock = self.stock, "Stock adjusted");
                Ok(CatalogActionResult::Stock(self.stock))
            }
        }
    }
}
