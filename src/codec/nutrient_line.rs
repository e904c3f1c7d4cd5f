//! Nutrient tables file lines: `articleId;kcal;fat;carbs;protein[;caffeine]`.

use tracing::debug;

use crate::model::{ArticleId, Product, TableSizeError};

use super::{CodecError, DELIMITER};

const MIN_FIELDS: usize = 5;
const MAX_FIELDS: usize = 6;

/// Writes the nutrient line for a food product, or `None` when there is no table to write.
pub fn encode_nutrients(product: &Product) -> Option<String> {
    let table = product.food()?.nutrient_table()?;
    let mut line = product.id.to_string();
    for value in table.values() {
        line.push(DELIMITER);
        line.push_str(&value.to_string());
    }
    Some(line)
}

/// Applies one line of the nutrient tables file to the matching food product in `products`.
///
/// The line never produces a record of its own. Returns the id whose table was replaced, or
/// `None` when no food product carries that id. A value count that does not fit the product's
/// variant is rejected and leaves the current table untouched.
pub fn decode_nutrient_line(
    line: &str,
    products: &mut [Product],
) -> Result<Option<ArticleId>, CodecError> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() < MIN_FIELDS {
        return Err(CodecError::MissingFields(line.to_string()));
    }
    if fields.len() > MAX_FIELDS {
        return Err(CodecError::TooManyFields(line.to_string()));
    }

    let id: u32 = fields[0]
        .trim()
        .parse()
        .map_err(|_| CodecError::NumberFormat(line.to_string()))?;
    let values = fields[1..]
        .iter()
        .map(|field| field.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| CodecError::NumberFormat(line.to_string()))?;

    let id = ArticleId(id);
    let Some(food) = products
        .iter_mut()
        .filter(|product| product.id == id)
        .find_map(Product::food_mut)
    else {
        debug!(%id, "Nutrient line for unknown food product");
        return Ok(None);
    };

    match food.set_nutrients(&values) {
        Ok(_) => Ok(Some(id)),
        Err(TableSizeError::Missing { .. }) => Err(CodecError::MissingFields(line.to_string())),
        Err(TableSizeError::TooMany { .. }) => Err(CodecError::TooManyFields(line.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_product;

    fn catalog() -> Vec<Product> {
        [
            "Accessory;10000;Shaker;9.95;Leakproof;1",
            "EnergyDrink;10001;Zap;2.5;Citrus kick;0",
            "ProteinBar;10002;Crunch;1.75;Peanut;8",
        ]
        .into_iter()
        .map(|line| decode_product(line).unwrap())
        .collect()
    }

    #[test]
    fn test_line_replaces_table() {
        let mut products = catalog();
        assert_eq!(
            decode_nutrient_line("10001;110;0;27;0;80", &mut products),
            Ok(Some(ArticleId(10001)))
        );
        assert_eq!(
            decode_nutrient_line("10001;120;1;28;0;75", &mut products),
            Ok(Some(ArticleId(10001)))
        );
        assert_eq!(
            encode_nutrients(&products[1]).as_deref(),
            Some("10001;120;1;28;0;75")
        );
    }

    #[test]
    fn test_field_count_must_fit_variant() {
        let mut products = catalog();
        decode_nutrient_line("10002;200;8;20;20", &mut products).unwrap();

        // A bar takes four values, a drink five
        assert_eq!(
            decode_nutrient_line("10002;1;2;3;4;5", &mut products),
            Err(CodecError::TooManyFields("10002;1;2;3;4;5".into()))
        );
        assert_eq!(
            decode_nutrient_line("10001;110;0;27;0", &mut products),
            Err(CodecError::MissingFields("10001;110;0;27;0".into()))
        );
        assert_eq!(
            decode_nutrient_line("10002;1;2;3", &mut products),
            Err(CodecError::MissingFields("10002;1;2;3".into()))
        );

        assert_eq!(
            products[2].food().unwrap().nutrient_table().unwrap().values(),
            vec![200, 8, 20, 20]
        );
        assert!(products[1].food().unwrap().nutrient_table().is_none());
    }

    #[test]
    fn test_unknown_and_non_food_ids_are_ignored() {
        let mut products = catalog();
        assert_eq!(decode_nutrient_line("19999;1;2;3;4", &mut products), Ok(None));
        assert_eq!(decode_nutrient_line("10000;1;2;3;4", &mut products), Ok(None));
        assert!(products.iter().all(|p| encode_nutrients(p).is_none()));
    }

    #[test]
    fn test_non_integer_values() {
        let mut products = catalog();
        assert_eq!(
            decode_nutrient_line("10002;200;8.5;20;20", &mut products),
            Err(CodecError::NumberFormat("10002;200;8.5;20;20".into()))
        );
        assert_eq!(
            decode_nutrient_line("x;200;8;20;20", &mut products),
            Err(CodecError::NumberFormat("x;200;8;20;20".into()))
        );
    }
}
