//! Parsing of user-typed values into catalog types.

use crate::codec::DELIMITER;
use crate::model::{ArticleId, Category, NutrientValues, Price, Product, ProductDraft};
use crate::ui::NutrientForm;

use super::CatalogError;

/// Validates a draft and builds the product it describes, with no stock.
///
/// Checks run in order: name, price, description, category.
pub fn build_product(id: ArticleId, draft: ProductDraft) -> Result<Product, CatalogError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(CatalogError::EmptyName);
    }
    if name.contains(DELIMITER) {
        return Err(CatalogError::Delimiter {
            field: "Product name",
        });
    }
    let price: Price = draft.price.parse()?;
    let description = draft.description.trim();
    if description.is_empty() {
        return Err(CatalogError::EmptyDescription);
    }
    if description.contains(DELIMITER) {
        return Err(CatalogError::Delimiter {
            field: "Product description",
        });
    }
    let category = Category::parse(&draft.category).ok_or(CatalogError::InvalidCategory)?;

    Ok(Product::new(id, category, name, price, description))
}

/// Parses a typed article id. Ids below `min` can't exist, so they are rejected up front.
pub fn parse_article_id(text: &str, min: u32) -> Result<ArticleId, CatalogError> {
    let id: i64 = text
        .trim()
        .parse()
        .map_err(|_| CatalogError::InvalidIdFormat)?;
    if id < i64::from(min) {
        return Err(CatalogError::IdTooLow);
    }
    u32::try_from(id)
        .map(ArticleId)
        .map_err(|_| CatalogError::InvalidIdFormat)
}

/// Parses a strictly positive quantity.
pub fn parse_quantity(text: &str) -> Result<u32, CatalogError> {
    match text.trim().parse::<u32>() {
        Ok(quantity) if quantity > 0 => Ok(quantity),
        _ => Err(CatalogError::InvalidQuantity),
    }
}

/// Parses every field of a nutrient form as an integer.
///
/// Whether caffeine belongs is decided by the product, not here.
pub fn parse_nutrients(form: &NutrientForm) -> Result<NutrientValues, CatalogError> {
    let int = |text: &str| {
        text.trim()
            .parse::<i32>()
            .map_err(|_| CatalogError::NumberFormat(text.to_string()))
    };
    Ok(NutrientValues {
        kcal: int(form.kcal.as_str())?,
        fat: int(form.fat.as_str())?,
        carbs: int(form.carbs.as_str())?,
        protein: int(form.protein.as_str())?,
        caffeine: form.caffeine.as_deref().map(int).transpose()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(category: &str, name: &str, price: &str, description: &str) -> ProductDraft {
        ProductDraft {
            category: category.to_string(),
            name: name.to_string(),
            price: price.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_build_product_trims_and_parses() {
        let product = build_product(
            ArticleId(10000),
            draft("Energy drinks", " Zap ", "2.50", "Citrus kick "),
        )
        .unwrap();
        assert_eq!(product.name, "Zap");
        assert_eq!(product.description, "Citrus kick");
        assert_eq!(product.price.to_string(), "2.5");
        assert_eq!(product.category(), Category::EnergyDrink);
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn test_build_product_validation_order() {
        let id = ArticleId(10000);
        assert_eq!(
            build_product(id, draft("Nope", " ", "", "")),
            Err(CatalogError::EmptyName)
        );
        assert_eq!(
            build_product(id, draft("Nope", "Zap", "", "")),
            Err(CatalogError::Price(crate::model::PriceError::Empty))
        );
        assert_eq!(
            build_product(id, draft("Nope", "Zap", "two", "")),
            Err(CatalogError::Price(crate::model::PriceError::Invalid))
        );
        assert_eq!(
            build_product(id, draft("Nope", "Zap", "2", "")),
            Err(CatalogError::EmptyDescription)
        );
        assert_eq!(
            build_product(id, draft("Nope", "Zap", "2", "Kick")),
            Err(CatalogError::InvalidCategory)
        );
        assert_eq!(
            build_product(id, draft("Accessories", "Zap;Pro", "2", "Kick")),
            Err(CatalogError::Delimiter {
                field: "Product name"
            })
        );
    }

    #[test]
    fn test_parse_article_id() {
        assert_eq!(parse_article_id(" 10004 ", 10000), Ok(ArticleId(10004)));
        assert_eq!(parse_article_id("9999", 10000), Err(CatalogError::IdTooLow));
        assert_eq!(parse_article_id("-3", 10000), Err(CatalogError::IdTooLow));
        assert_eq!(parse_article_id("ten", 10000), Err(CatalogError::InvalidIdFormat));
        assert_eq!(
            parse_article_id("99999999999", 10000),
            Err(CatalogError::InvalidIdFormat)
        );
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("5"), Ok(5));
        assert_eq!(parse_quantity("0"), Err(CatalogError::InvalidQuantity));
        assert_eq!(parse_quantity("-2"), Err(CatalogError::InvalidQuantity));
        assert_eq!(parse_quantity("lots"), Err(CatalogError::InvalidQuantity));
    }

    #[test]
    fn test_parse_nutrients() {
        let form = NutrientForm {
            kcal: "110".into(),
            fat: "0".into(),
            carbs: "27".into(),
            protein: "0".into(),
            caffeine: Some("80".into()),
        };
        assert_eq!(parse_nutrients(&form).unwrap().to_vec(), vec![110, 0, 27, 0, 80]);

        let form = NutrientForm {
            fat: "0.5".into(),
            ..form
        };
        assert_eq!(
            parse_nutrients(&form),
            Err(CatalogError::NumberFormat("0.5".into()))
        );
    }
}
