use crate::config::ReportConfig;
use crate::domain::product::Product;
use crate::domain::seller::Seller;
use crate::domain::serialize_amount;
use crate::error::Result;
use crate::services::catalog::Catalog;
use crate::services::delimited::report_writer;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};

#[derive(Debug, Serialize)]
struct SellerRow {
    full_name: String,
    #[serde(serialize_with = "serialize_amount")]
    total_revenue: Decimal,
}

/// Sellers by total revenue, highest first. Ties keep catalog order.
pub fn rank_sellers(sellers: &Catalog<Seller>) -> Vec<&Seller> {
    let mut ranked: Vec<&Seller> = sellers.values().collect();
    ranked.sort_by(|a, b| b.total_revenue.cmp(&a.total_revenue));
    ranked
}

/// Products by units sold, highest first. Ties keep catalog order.
pub fn rank_products(products: &Catalog<Product>) -> Vec<&Product> {
    let mut ranked: Vec<&Product> = products.values().collect();
    ranked.sort_by(|a, b| b.units_sold.cmp(&a.units_sold));
    ranked
}

/// Writes `full name;revenue` per seller.
pub fn write_seller_report<W: Write>(sellers: &Catalog<Seller>, writer: W) -> Result<()> {
    let mut csv_writer = report_writer(writer);

    for seller in rank_sellers(sellers) {
        csv_writer.serialize(SellerRow {
            full_name: seller.full_name(),
            total_revenue: seller.total_revenue,
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Writes `name;unit price` per product. Units sold only decide the order.
pub fn write_product_report<W: Write>(products: &Catalog<Product>, writer: W) -> Result<()> {
    let mut csv_writer = report_writer(writer);

    for product in rank_products(products) {
        csv_writer.serialize(product)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Writes both reports under the configured root, replacing any previous ones.
pub fn generate_reports(
    config: &ReportConfig,
    products: &Catalog<Product>,
    sellers: &Catalog<Seller>,
) -> Result<()> {
    let seller_path = config.seller_report_path();
    write_seller_report(sellers, BufWriter::new(File::create(&seller_path)?))?;
    log::info!("Wrote {} sellers to {}", sellers.len(), seller_path.display());

    let product_path = config.product_report_path();
    write_product_report(products, BufWriter::new(File::create(&product_path)?))?;
    log::info!("Wrote {} products to {}", products.len(), product_path.display());

    Ok(())
}
