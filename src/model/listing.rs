use std::fmt;

use super::product::{ArticleId, Product};

/// Shown instead of an empty listing.
pub const EMPTY_CATALOG: &str = "No product information available";

/// Title of the stock listing.
pub const STOCK_TITLE: &str = "Current stock";

/// One line of the stock listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLine {
    pub id: ArticleId,
    pub name: String,
    pub stock: u32,
}

/// Id, name and stock of every product, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockListing {
    pub lines: Vec<StockLine>,
}

impl StockListing {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<'a> FromIterator<&'a Product> for StockListing {
    fn from_iter<I: IntoIterator<Item = &'a Product>>(products: I) -> Self {
        Self {
            lines: products
                .into_iter()
                .map(|p| StockLine {
                    id: p.id,
                    name: p.name.clone(),
                    stock: p.stock,
                })
                .collect(),
        }
    }
}

impl fmt::Display for StockListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lines.is_empty() {
            return f.write_str(EMPTY_CATALOG);
        }
        for (n, line) in self.lines.iter().enumerate() {
            if n > 0 {
                f.write_str("\n")?;
            }
            write!(f, "Article ID: {} {} stock: {}", line.id, line.name, line.stock)?;
        }
        Ok(())
    }
}
