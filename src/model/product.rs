//! Catalog records: the product entity, its category variants and value types.
//!
//! [`Product`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait in
//! [`crate::catalog_actor`], which covers creation from a [`ProductDraft`] and the custom
//! [`CatalogAction`](crate::catalog_actor::CatalogAction)s.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

use super::nutrients::{NutrientTable, TableSizeError};

/// Type-safe identifier for catalog articles.
///
/// Displays as the bare number, which is also how it is written to both catalog files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArticleId(pub u32);

impl From<u32> for ArticleId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed set of product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Accessory,
    EnergyDrink,
    ProteinBar,
    ProteinPowder,
}

/// Category dispatch table: variant, file tag, label shown to users.
static CATEGORIES: [(Category, &str, &str); 4] = [
    (Category::Accessory, "Accessory", "Accessories"),
    (Category::EnergyDrink, "EnergyDrink", "Energy drinks"),
    (Category::ProteinPowder, "ProteinPowder", "Protein powders"),
    (Category::ProteinBar, "ProteinBar", "Protein bars"),
];

impl Category {
    /// Every category, in the order they are offered to the user.
    pub const ALL: [Category; 4] = [
        Category::Accessory,
        Category::EnergyDrink,
        Category::ProteinPowder,
        Category::ProteinBar,
    ];

    fn entry(self) -> &'static (Category, &'static str, &'static str) {
        CATEGORIES
            .iter()
            .find(|(category, _, _)| *category == self)
            .unwrap_or(&CATEGORIES[0])
    }

    /// The variant tag written as the first field of a product line.
    pub fn tag(self) -> &'static str {
        self.entry().1
    }

    /// Human-facing name, as offered in category selection.
    pub fn label(self) -> &'static str {
        self.entry().2
    }

    /// Exact match on a file tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        CATEGORIES
            .iter()
            .find(|(_, t, _)| *t == tag)
            .map(|(category, _, _)| *category)
    }

    /// Lenient match for user input: accepts either a label or a tag, ignoring case and
    /// surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        CATEGORIES
            .iter()
            .find(|(_, tag, label)| tag.eq_ignore_ascii_case(input) || label.eq_ignore_ascii_case(input))
            .map(|(category, _, _)| *category)
    }

    /// The food variant for this category, or `None` for accessories.
    pub fn food_kind(self) -> Option<FoodKind> {
        match self {
            Category::Accessory => None,
            Category::EnergyDrink => Some(FoodKind::EnergyDrink),
            Category::ProteinBar => Some(FoodKind::ProteinBar),
            Category::ProteinPowder => Some(FoodKind::ProteinPowder),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The categories that carry a nutrient table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodKind {
    EnergyDrink,
    ProteinBar,
    ProteinPowder,
}

impl FoodKind {
    pub fn category(self) -> Category {
        match self {
            FoodKind::EnergyDrink => Category::EnergyDrink,
            FoodKind::ProteinBar => Category::ProteinBar,
            FoodKind::ProteinPowder => Category::ProteinPowder,
        }
    }

    /// Number of nutrient values a complete table holds for this kind.
    pub fn nutrient_count(self) -> usize {
        match self {
            FoodKind::EnergyDrink => 5,
            FoodKind::ProteinBar | FoodKind::ProteinPowder => 4,
        }
    }

    pub fn has_caffeine(self) -> bool {
        matches!(self, FoodKind::EnergyDrink)
    }
}

impl Display for FoodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category().tag())
    }
}

/// A non-negative, finite price.
///
/// Displays in canonical form: the shortest decimal that parses back to the same value, with a
/// trailing `.0` for whole amounts (`2.5`, `25.0`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> Result<Self, PriceError> {
        if !amount.is_finite() {
            return Err(PriceError::Invalid);
        }
        if amount < 0.0 {
            return Err(PriceError::Negative);
        }
        // Normalizes -0.0
        Ok(Self(amount + 0.0))
    }

    pub fn amount(self) -> f64 {
        self.0
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PriceError::Empty);
        }
        let amount: f64 = s.parse().map_err(|_| PriceError::Invalid)?;
        Self::new(amount)
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.0.to_string();
        if text.contains('.') {
            f.write_str(&text)
        } else {
            write!(f, "{text}.0")
        }
    }
}

/// Why a price input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PriceError {
    #[error("Product price can't be empty")]
    Empty,
    #[error("Invalid price format")]
    Invalid,
    #[error("Product price can't be negative")]
    Negative,
}

/// Food-specific state: the food variant and its nutrient table, once supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodProduct {
    kind: FoodKind,
    nutrient_table: Option<NutrientTable>,
}

impl FoodProduct {
    pub fn new(kind: FoodKind) -> Self {
        Self {
            kind,
            nutrient_table: None,
        }
    }

    pub fn kind(&self) -> FoodKind {
        self.kind
    }

    pub fn nutrient_table(&self) -> Option<&NutrientTable> {
        self.nutrient_table.as_ref()
    }

    /// Replaces the whole table from ordered values.
    ///
    /// The number of values must match [`FoodKind::nutrient_count`]; on mismatch the current
    /// table is left untouched.
    pub fn set_nutrients(&mut self, values: &[i32]) -> Result<&NutrientTable, TableSizeError> {
        let table = NutrientTable::new(self.kind, values)?;
        Ok(self.nutrient_table.insert(table))
    }
}

/// Variant-specific part of a product.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductKind {
    Accessory,
    Food(FoodProduct),
}

impl ProductKind {
    /// Constructs the empty variant for a category.
    pub fn new(category: Category) -> Self {
        match category.food_kind() {
            Some(kind) => ProductKind::Food(FoodProduct::new(kind)),
            None => ProductKind::Accessory,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            ProductKind::Accessory => Category::Accessory,
            ProductKind::Food(food) => food.kind().category(),
        }
    }
}

/// Represents one article in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ArticleId,
    pub name: String,
    pub price: Price,
    pub description: String,
    pub stock: u32,
    pub kind: ProductKind,
}

impl Product {
    /// Creates a new product of `category` with no stock.
    pub fn new(
        id: ArticleId,
        category: Category,
        name: impl Into<String>,
        price: Price,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            description: description.into(),
            stock: 0,
            kind: ProductKind::new(category),
        }
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    pub fn food(&self) -> Option<&FoodProduct> {
        match &self.kind {
            ProductKind::Food(food) => Some(food),
            ProductKind::Accessory => None,
        }
    }

    pub fn food_mut(&mut self) -> Option<&mut FoodProduct> {
        match &mut self.kind {
            ProductKind::Food(food) => Some(food),
            ProductKind::Accessory => None,
        }
    }

    pub fn is_food(&self) -> bool {
        self.food().is_some()
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{articleID={}, name={}, price={}, description={}, stock={}}}",
            self.id, self.name, self.price, self.description, self.stock
        )?;
        if let Some(table) = self.food().and_then(FoodProduct::nutrient_table) {
            write!(f, "\nNutrient table:")?;
            for (nutrient, amount) in table.entries() {
                write!(f, "\n  {nutrient}: {amount}")?;
            }
        }
        Ok(())
    }
}

/// Creation payload for a product, as typed by the user.
///
/// Everything is still text here. Validation happens when the catalog builds the product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductDraft {
    pub category: String,
    pub name: String,
    pub price: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_tags_and_labels() {
        assert_eq!(Category::EnergyDrink.tag(), "EnergyDrink");
        assert_eq!(Category::ProteinPowder.label(), "Protein powders");
        assert_eq!(Category::from_tag("ProteinBar"), Some(Category::ProteinBar));
        assert_eq!(Category::from_tag("Protein bars"), None);
        assert_eq!(Category::parse(" energy drinks "), Some(Category::EnergyDrink));
        assert_eq!(Category::parse("Accessory"), Some(Category::Accessory));
        assert_eq!(Category::parse("Vitamins"), None);
    }

    #[test]
    fn test_price_canonical_display() {
        assert_eq!("2.50".parse::<Price>().unwrap().to_string(), "2.5");
        assert_eq!("25".parse::<Price>().unwrap().to_string(), "25.0");
        assert_eq!("0.1".parse::<Price>().unwrap().to_string(), "0.1");
        assert_eq!("-0".parse::<Price>().unwrap().to_string(), "0.0");
    }

    #[test]
    fn test_price_rejections() {
        assert_eq!("".parse::<Price>(), Err(PriceError::Empty));
        assert_eq!("  ".parse::<Price>(), Err(PriceError::Empty));
        assert_eq!("abc".parse::<Price>(), Err(PriceError::Invalid));
        assert_eq!("NaN".parse::<Price>(), Err(PriceError::Invalid));
        assert_eq!("-1.5".parse::<Price>(), Err(PriceError::Negative));
    }

    #[test]
    fn test_kind_follows_category() {
        let bar = Product::new(
            ArticleId(10000),
            Category::ProteinBar,
            "Crunch",
            Price::new(1.5).unwrap(),
            "Peanut",
        );
        assert_eq!(bar.category(), Category::ProteinBar);
        assert_eq!(bar.stock, 0);
        assert!(bar.is_food());
        assert!(bar.food().unwrap().nutrient_table().is_none());

        let strap = Product::new(
            ArticleId(10001),
            Category::Accessory,
            "Strap",
            Price::default(),
            "Wrist",
        );
        assert!(!strap.is_food());
    }

    #[test]
    fn test_set_nutrients_keeps_table_on_size_mismatch() {
        let mut drink = FoodProduct::new(FoodKind::EnergyDrink);
        drink.set_nutrients(&[110, 0, 27, 0, 80]).unwrap();

        let err = drink.set_nutrients(&[1, 2, 3, 4]).unwrap_err();
        assert!(matches!(err, TableSizeError::Missing { expected: 5, found: 4, .. }));
        assert_eq!(drink.nutrient_table().unwrap().values(), vec![110, 0, 27, 0, 80]);
    }

    #[test]
    fn test_product_display_includes_nutrients() {
        let mut drink = Product::new(
            ArticleId(10002),
            Category::EnergyDrink,
            "Zap",
            "2.50".parse().unwrap(),
            "Citrus kick",
        );
        drink
            .food_mut()
            .unwrap()
            .set_nutrients(&[110, 0, 27, 0, 80])
            .unwrap();

        let rendered = drink.to_string();
        assert!(rendered.starts_with(
            "{articleID=10002, name=Zap, price=2.5, description=Citrus kick, stock=0}"
        ));
        assert!(rendered.ends_with("Caffeine(mg): 80"));
    }
}
