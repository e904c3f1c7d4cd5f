use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::catalog_actor::input::{parse_nutrients, parse_quantity};
use crate::catalog_actor::{CatalogAction, CatalogActionResult, CatalogError, StockDirection};
use crate::model::{
    ArticleId, Category, FoodKind, NutrientTable, NutrientValues, Product, ProductDraft,
    StockListing,
};
use crate::ui::NutrientForm;

/// Outcome of adding a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewProduct {
    pub id: ArticleId,
    /// Set for food products: their nutrient table still has to be supplied.
    pub nutrients: Option<FoodKind>,
}

/// Client for interacting with the catalog actor.
///
/// Errors raised by the catalog come back as the original [`CatalogError`], not as strings.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Product>,
}

#[async_trait]
impl ActorClient<Product> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> CatalogError {
        if let Some(err) = e.entity_error::<CatalogError>() {
            return err.clone();
        }
        match e {
            FrameworkError::NotFound(id) => match id.parse() {
                Ok(n) => CatalogError::NotFound(ArticleId(n)),
                Err(_) => CatalogError::ActorCommunication(format!("Item not found: {id}")),
            },
            other => CatalogError::ActorCommunication(other.to_string()),
        }
    }
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    /// Validates and stores a new product with no stock.
    #[instrument(skip(self, draft))]
    pub async fn add_product(&self, draft: ProductDraft) -> Result<NewProduct, CatalogError> {
        debug!(?draft, "add_product called");
        let nutrients = Category::parse(&draft.category).and_then(Category::food_kind);
        let id = self.inner.create(draft).await.map_err(Self::map_error)?;
        Ok(NewProduct { id, nutrients })
    }

    /// The id the next added product will get.
    #[instrument(skip(self))]
    pub async fn next_id(&self) -> Result<ArticleId, CatalogError> {
        debug!("Sending request");
        self.inner.next_id().await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn set_nutrient_table(
        &self,
        id: ArticleId,
        values: NutrientValues,
    ) -> Result<NutrientTable, CatalogError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, CatalogAction::SetNutrientTable(values))
            .await
            .map_err(Self::map_error)?
        {
            CatalogActionResult::NutrientTable(table) => Ok(table),
            other => Err(unexpected(other)),
        }
    }

    /// Parses a nutrient form and stores the table. Nothing is sent if a value isn't an integer.
    pub async fn submit_nutrients(
        &self,
        id: ArticleId,
        form: &NutrientForm,
    ) -> Result<NutrientTable, CatalogError> {
        let values = parse_nutrients(form)?;
        self.set_nutrient_table(id, values).await
    }

    /// Parses `quantity` and moves the stock. Returns the new stock level.
    #[instrument(skip(self))]
    pub async fn adjust_stock(
        &self,
        id: ArticleId,
        quantity: &str,
        direction: StockDirection,
    ) -> Result<u32, CatalogError> {
        let quantity = parse_quantity(quantity)?;
        debug!(quantity, "Sending request");
        match self
            .inner
            .perform_action(
                id,
                CatalogAction::AdjustStock {
                    quantity,
                    direction,
                },
            )
            .await
            .map_err(Self::map_error)?
        {
            CatalogActionResult::Stock(stock) => Ok(stock),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: ArticleId) -> Result<Product, CatalogError> {
        self.get(id).await?.ok_or(CatalogError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<StockListing, CatalogError> {
        Ok(self.list().await?.iter().collect())
    }

    /// The food products, in catalog order.
    #[instrument(skip(self))]
    pub async fn food_products(&self) -> Result<Vec<Product>, CatalogError> {
        let mut products = self.list().await?;
        products.retain(Product::is_food);
        Ok(products)
    }

    /// Removes a product and its nutrient table. Removing an unknown id is not an error.
    #[instrument(skip(self))]
    pub async fn remove_product(&self, id: ArticleId) -> Result<Option<Product>, CatalogError> {
        self.delete(id).await
    }

    /// Rereads both catalog files. Returns how many products were loaded.
    #[instrument(skip(self))]
    pub async fn reload(&self) -> Result<usize, CatalogError> {
        debug!("Sending request");
        self.inner.reload().await.map_err(Self::map_error)
    }
}

fn unexpected(result: CatalogActionResult) -> CatalogError {
    CatalogError::ActorCommunication(format!("Unexpected action result: {result:?}"))
}
