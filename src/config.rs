use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub root: PathBuf,
    pub products_file: String,
    pub sellers_file: String,
    pub seller_report_file: String,
    pub product_report_file: String,
    pub transaction_prefix: String,
    pub log_warnings: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            root: PathBuf::from("."),
            products_file: "productos.csv".to_string(),
            sellers_file: "vendedores.csv".to_string(),
            seller_report_file: "reporte_vendedores.csv".to_string(),
            product_report_file: "reporte_productos.csv".to_string(),
            transaction_prefix: "vendedor_".to_string(),
            log_warnings: true,
        }
    }
}

impl ReportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn with_root<P: AsRef<Path>>(mut self, root: P) -> Self {
        self.root = root.as_ref().to_path_buf();
        self
    }

    #[allow(dead_code)]
    pub fn with_transaction_prefix(mut self, prefix: &str) -> Self {
        self.transaction_prefix = prefix.to_string();
        self
    }

    #[allow(dead_code)]
    pub fn with_log_warnings(mut self, log: bool) -> Self {
        self.log_warnings = log;
        self
    }

    pub fn products_path(&self) -> PathBuf {
        self.root.join(&self.products_file)
    }

    pub fn sellers_path(&self) -> PathBuf {
        self.root.join(&self.sellers_file)
    }

    pub fn seller_report_path(&self) -> PathBuf {
        self.root.join(&self.seller_report_file)
    }

    pub fn product_report_path(&self) -> PathBuf {
        self.root.join(&self.product_report_file)
    }
}
