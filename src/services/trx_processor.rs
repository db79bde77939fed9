use crate::config::ReportConfig;
use crate::domain::product::Product;
use crate::domain::sale::{record_sale, QuantityError, SaleLine};
use crate::domain::seller::Seller;
use crate::domain::warning::{Warning, WarningLog};
use crate::error::Result;
use crate::services::catalog::Catalog;
use crate::services::delimited::split_fields;
use rust_decimal::Decimal;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Applies per-seller transaction files to the loaded catalogs.
pub struct SalesProcessor {
    products: Catalog<Product>,
    sellers: Catalog<Seller>,
    config: ReportConfig,
    warnings: WarningLog,
}

impl SalesProcessor {
    pub fn new(products: Catalog<Product>, sellers: Catalog<Seller>, config: ReportConfig) -> Self {
        let warnings = WarningLog::new(config.log_warnings);
        SalesProcessor {
            products,
            sellers,
            config,
            warnings,
        }
    }

    pub fn products(&self) -> &Catalog<Product> {
        &self.products
    }

    pub fn sellers(&self) -> &Catalog<Seller> {
        &self.sellers
    }

    #[allow(dead_code)]
    pub fn warnings(&self) -> &[Warning] {
        self.warnings.entries()
    }

    /// Every regular file under the configured root whose name starts with the
    /// transaction prefix, sorted by path.
    pub fn discover_files(&self) -> Result<Vec<PathBuf>> {
        let mut found = Vec::new();
        collect_files(&self.config.root, &self.config.transaction_prefix, &mut found)?;
        found.sort();
        Ok(found)
    }

    /// Discovers and processes every transaction file. Returns how many were seen.
    pub fn process_all(&mut self) -> Result<usize> {
        let files = self.discover_files()?;
        log::info!(
            "Found {} transaction files under {}",
            files.len(),
            self.config.root.display()
        );

        for path in &files {
            self.process_file(path);
        }

        if !self.warnings.is_empty() {
            log::info!("Finished with {} warnings", self.warnings.len());
        }
        Ok(files.len())
    }

    /// Processes one transaction file. Failures are recorded as warnings and
    /// never abort the run.
    pub fn process_file(&mut self, path: &Path) {
        let file = file_name(path);
        if let Err(e) = self.accumulate_file(path, &file) {
            self.warnings.push(Warning::FileFailed {
                file,
                reason: e.to_string(),
            });
        }
    }

    fn accumulate_file(&mut self, path: &Path, file: &str) -> Result<()> {
        let content = fs::read_to_string(path)?;
        let lines: Vec<&str> = content.lines().collect();

        let Some(header) = lines.first() else {
            self.warnings.push(Warning::EmptyFile {
                file: file.to_string(),
            });
            return Ok(());
        };

        let header = split_fields(header);
        if header.len() < 2 {
            self.warnings.push(Warning::InvalidHeader {
                file: file.to_string(),
            });
            return Ok(());
        }

        let document_number = header[1].trim();
        let Some(seller) = self.sellers.get_mut(document_number) else {
            self.warnings.push(Warning::SellerNotFound {
                file: file.to_string(),
                document_number: document_number.to_string(),
            });
            return Ok(());
        };

        for (index, raw) in lines.iter().enumerate().skip(1) {
            let line = index as u64 + 1;
            let fields = split_fields(raw);

            let Some(sale) = SaleLine::from_fields(&fields) else {
                continue;
            };
            let Some(product) = self.products.get_mut(sale.product_id) else {
                continue;
            };

            let quantity = match sale.parse_quantity() {
                Ok(quantity) => quantity,
                Err(QuantityError::Invalid) => {
                    self.warnings.push(Warning::InvalidQuantity {
                        file: file.to_string(),
                        line,
                    });
                    continue;
                }
                Err(QuantityError::Negative) => {
                    self.warnings.push(Warning::NegativeQuantity {
                        file: file.to_string(),
                        line,
                    });
                    continue;
                }
            };

            if product.unit_price < Decimal::ZERO {
                self.warnings.push(Warning::NegativePrice {
                    file: file.to_string(),
                    product: product.name.clone(),
                });
                continue;
            }

            if record_sale(seller, product, quantity).is_err() {
                self.warnings.push(Warning::AccumulatorOverflow {
                    file: file.to_string(),
                    line,
                });
            }
        }

        Ok(())
    }
}

fn collect_files(dir: &Path, prefix: &str, found: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            collect_files(&entry.path(), prefix, found)?;
            continue;
        }
        if !entry.file_name().to_string_lossy().starts_with(prefix) {
            continue;
        }

        // Links count when they point at a regular file, but are never descended.
        let is_regular = if file_type.is_symlink() {
            fs::metadata(entry.path()).map(|meta| meta.is_file()).unwrap_or(false)
        } else {
            file_type.is_file()
        };
        if is_regular {
            found.push(entry.path());
        }
    }
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
