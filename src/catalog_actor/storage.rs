//! Backing files for the catalog.
//!
//! The catalog actor is the only writer. Every save rewrites a whole file. Problems are reported
//! to the UI collaborator and never abort the operation that triggered them.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

use crate::codec::{self, CodecError};
use crate::config::StorageConfig;
use crate::model::Product;
use crate::ui::UiClient;

#[derive(Debug, Clone)]
pub struct CatalogStorage {
    products_file: PathBuf,
    nutrient_tables_file: PathBuf,
    atomic_writes: bool,
}

impl CatalogStorage {
    pub fn new(
        products_file: impl Into<PathBuf>,
        nutrient_tables_file: impl Into<PathBuf>,
        atomic_writes: bool,
    ) -> Self {
        Self {
            products_file: products_file.into(),
            nutrient_tables_file: nutrient_tables_file.into(),
            atomic_writes,
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(
            &config.products_file,
            &config.nutrient_tables_file,
            config.atomic_writes,
        )
    }

    pub fn products_file(&self) -> &Path {
        &self.products_file
    }

    pub fn nutrient_tables_file(&self) -> &Path {
        &self.nutrient_tables_file
    }

    /// Reads both files into a fresh collection.
    ///
    /// Bad lines are reported and skipped. A missing file counts as empty; any other read
    /// failure is reported and loading goes on with what was read so far.
    pub async fn load(&self, ui: &UiClient) -> Vec<Product> {
        let mut products = match read(&self.products_file).await {
            Ok(text) => {
                let (products, errors) = codec::decode_products(&text);
                report_decode_errors(&self.products_file, &errors, ui);
                products
            }
            Err(e) => {
                report_load_failure(&self.products_file, &e, ui);
                return Vec::new();
            }
        };

        match read(&self.nutrient_tables_file).await {
            Ok(text) => {
                let errors = codec::apply_nutrient_tables(&text, &mut products);
                report_decode_errors(&self.nutrient_tables_file, &errors, ui);
            }
            Err(e) => report_load_failure(&self.nutrient_tables_file, &e, ui),
        }

        info!(size = products.len(), "Catalog loaded");
        products
    }

    pub async fn save_products(&self, products: &[Product], ui: &UiClient) {
        let text = codec::encode_products(products);
        self.save(&self.products_file, &text, ui).await;
    }

    /// Writes a line for every food product with a table. Food products still waiting for their
    /// table are skipped and reported.
    pub async fn save_nutrient_tables(&self, products: &[Product], ui: &UiClient) {
        let (text, missing) = codec::encode_nutrient_tables(products);
        for id in missing {
            debug!(%id, "Skipping food product without nutrient table");
            ui.report_error(format!("No nutrient table found for article {id}"));
        }
        self.save(&self.nutrient_tables_file, &text, ui).await;
    }

    async fn save(&self, path: &Path, text: &str, ui: &UiClient) {
        match self.write(path, text).await {
            Ok(()) => debug!(path = %path.display(), bytes = text.len(), "Saved"),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Save failed");
                ui.report_error(format!("Couldn't save: {}: {e}", path.display()));
            }
        }
    }

    async fn write(&self, path: &Path, text: &str) -> io::Result<()> {
        if !self.atomic_writes {
            return fs::write(path, text).await;
        }
        let temp = temp_path(path);
        fs::write(&temp, text).await?;
        fs::rename(&temp, path).await
    }
}

async fn read(path: &Path) -> io::Result<String> {
    match fs::read_to_string(path).await {
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!(path = %path.display(), "No file yet, starting empty");
            Ok(String::new())
        }
        result => result,
    }
}

/// Sibling of `path` with `.tmp` appended to the file name.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn report_decode_errors(path: &Path, errors: &[CodecError], ui: &UiClient) {
    for error in errors {
        warn!(path = %path.display(), %error, "Skipping line");
        ui.report_error(error.to_string());
    }
}

fn report_load_failure(path: &Path, error: &io::Error, ui: &UiClient) {
    warn!(path = %path.display(), %error, "Load failed");
    ui.report_error(format!("Couldn't load: {}: {error}", path.display()));
}
