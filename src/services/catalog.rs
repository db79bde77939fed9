use crate::domain::product::Product;
use crate::domain::seller::Seller;
use crate::error::{FieldError, ReportError, Result};
use crate::services::delimited::{catalog_reader, is_blank, record_fields};
use indexmap::IndexMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reference data keyed by id. A repeated key replaces the earlier entry in place.
pub type Catalog<T> = IndexMap<String, T>;

/// Loads a `;` separated catalog, building one entry per non-blank line with
/// `parse` and keying it with `key`.
///
/// A missing file or a line `parse` rejects is fatal for the whole load.
pub fn load_catalog<T, F, K>(path: &Path, parse: F, key: K) -> Result<Catalog<T>>
where
    F: Fn(&[&str]) -> std::result::Result<T, FieldError>,
    K: Fn(&T) -> &str,
{
    if !path.exists() {
        return Err(ReportError::CatalogNotFound(path.to_path_buf()));
    }

    let mut reader = catalog_reader(BufReader::new(File::open(path)?));
    let mut catalog = Catalog::new();

    for result in reader.records() {
        let record = result?;
        if is_blank(&record) {
            continue;
        }

        let fields = record_fields(&record);
        let item = parse(fields.as_slice()).map_err(|source| ReportError::MalformedCatalogLine {
            path: path.to_path_buf(),
            line: record.position().map(|pos| pos.line()).unwrap_or(0),
            source,
        })?;
        catalog.insert(key(&item).to_string(), item);
    }

    log::info!("Loaded {} entries from {}", catalog.len(), path.display());
    Ok(catalog)
}

pub fn load_products(path: &Path) -> Result<Catalog<Product>> {
    load_catalog(path, Product::from_fields, Product::id)
}

pub fn load_sellers(path: &Path) -> Result<Catalog<Seller>> {
    load_catalog(path, Seller::from_fields, Seller::document_number)
}
