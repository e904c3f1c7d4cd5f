//! Line codec for the two catalog files.
//!
//! - Products file: `variantTag;articleId;name;price;description;stock`
//! - Nutrient tables file: `articleId;kcal;fat;carbs;protein[;caffeine]`
//!
//! Decode errors are per line. The file-level helpers collect them and keep going with the
//! remaining lines.

mod error;
mod nutrient_line;
mod product_line;

pub use error::CodecError;
pub use nutrient_line::{decode_nutrient_line, encode_nutrients};
pub use product_line::{decode_product, encode_product};

use crate::model::{ArticleId, Product};

/// Field separator used by both files.
pub const DELIMITER: char = ';';

/// Decodes a whole products file, in line order. Blank lines are skipped.
pub fn decode_products(text: &str) -> (Vec<Product>, Vec<CodecError>) {
    let mut products: Vec<Product> = Vec::new();
    let mut errors = Vec::new();

    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        match decode_product(line) {
            Ok(product) if products.iter().any(|p| p.id == product.id) => {
                errors.push(CodecError::DuplicateId {
                    id: product.id,
                    line: line.to_string(),
                });
            }
            Ok(product) => products.push(product),
            Err(e) => errors.push(e),
        }
    }

    (products, errors)
}

/// Applies a whole nutrient tables file to `products`.
///
/// Returns the decode errors; lines for unknown ids are not errors.
pub fn apply_nutrient_tables(text: &str, products: &mut [Product]) -> Vec<CodecError> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| decode_nutrient_line(line, products).err())
        .collect()
}

/// Writes the products file: one newline-terminated line per product, in collection order.
pub fn encode_products(products: &[Product]) -> String {
    products
        .iter()
        .map(|product| encode_product(product) + "\n")
        .collect()
}

/// Writes the nutrient tables file for every food product that has a table.
///
/// Also returns the ids of food products that were skipped because they have no table yet.
pub fn encode_nutrient_tables(products: &[Product]) -> (String, Vec<ArticleId>) {
    let mut text = String::new();
    let mut missing = Vec::new();

    for product in products.iter().filter(|p| p.is_food()) {
        match encode_nutrients(product) {
            Some(line) => {
                text.push_str(&line);
                text.push('\n');
            }
            None => missing.push(product.id),
        }
    }

    (text, missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PRODUCTS: &str = "\
Accessory;10000;Shaker;9.95;Leakproof;1
Vitamins;10001;C;1.0;Orange;1
EnergyDrink;10002;Zap;2.5;Citrus kick;0

ProteinBar;10003;Crunch;1.75;Peanut;8
ProteinBar;10003;Crunch again;1.75;Peanut;8
";

    #[test]
    fn test_decode_products_skips_bad_lines() {
        let (products, errors) = decode_products(PRODUCTS);
        let ids: Vec<u32> = products.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![10000, 10002, 10003]);
        assert_eq!(
            errors,
            vec![
                CodecError::UnknownClass("Vitamins".into()),
                CodecError::DuplicateId {
                    id: ArticleId(10003),
                    line: "ProteinBar;10003;Crunch again;1.75;Peanut;8".into(),
                },
            ]
        );
    }

    #[test]
    fn test_file_roundtrip_and_missing_tables() {
        let (mut products, _) = decode_products(PRODUCTS);
        let errors = apply_nutrient_tables("10002;110;0;27;0;80\n10003;1;2;3\n", &mut products);
        assert_eq!(errors, vec![CodecError::MissingFields("10003;1;2;3".into())]);

        assert_eq!(
            encode_products(&products),
            "Accessory;10000;Shaker;9.95;Leakproof;1\n\
             EnergyDrink;10002;Zap;2.5;Citrus kick;0\n\
             ProteinBar;10003;Crunch;1.75;Peanut;8\n"
        );

        let (text, missing) = encode_nutrient_tables(&products);
        assert_eq!(text, "10002;110;0;27;0;80\n");
        assert_eq!(missing, vec![ArticleId(10003)]);
    }
}
