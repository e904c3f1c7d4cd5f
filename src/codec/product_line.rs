//! Products file lines: `variantTag;articleId;name;price;description;stock`.

use crate::model::{ArticleId, Category, Price, Product};

use super::{CodecError, DELIMITER};

const PRODUCT_FIELDS: usize = 6;

/// Writes one product as a line, without the trailing newline.
pub fn encode_product(product: &Product) -> String {
    format!(
        "{tag}{d}{id}{d}{name}{d}{price}{d}{description}{d}{stock}",
        d = DELIMITER,
        tag = product.category().tag(),
        id = product.id,
        name = product.name,
        price = product.price,
        description = product.description,
        stock = product.stock,
    )
}

/// Builds a product from one line of the products file.
///
/// Food products come back without a nutrient table; tables live in the other file.
pub fn decode_product(line: &str) -> Result<Product, CodecError> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() < PRODUCT_FIELDS {
        return Err(CodecError::MissingFields(line.to_string()));
    }
    if fields.len() > PRODUCT_FIELDS {
        return Err(CodecError::TooManyFields(line.to_string()));
    }

    let category =
        Category::from_tag(fields[0]).ok_or_else(|| CodecError::UnknownClass(fields[0].to_string()))?;
    let number_format = |_| CodecError::NumberFormat(line.to_string());
    let id: u32 = fields[1].trim().parse().map_err(number_format)?;
    let price: Price = fields[3]
        .parse()
        .map_err(|_| CodecError::NumberFormat(line.to_string()))?;
    let stock: u32 = fields[5].trim().parse().map_err(number_format)?;

    let mut product = Product::new(ArticleId(id), category, fields[2], price, fields[4]);
    product.stock = stock;
    Ok(product)
}
