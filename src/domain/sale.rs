use crate::domain::product::Product;
use crate::domain::seller::Seller;
use rust_decimal::Decimal;

/// A data row of a transaction file, split but not yet validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleLine<'a> {
    pub product_id: &'a str,
    pub quantity: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityError {
    Invalid,
    Negative,
}

/// Adding a sale would overflow one of the accumulators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overflow;

impl<'a> SaleLine<'a> {
    /// Returns `None` for rows with fewer than two fields.
    pub fn from_fields(fields: &[&'a str]) -> Option<Self> {
        match fields {
            [product_id, quantity, ..] => Some(SaleLine {
                product_id: product_id.trim(),
                quantity: quantity.trim(),
            }),
            _ => None,
        }
    }

    pub fn parse_quantity(&self) -> Result<u32, QuantityError> {
        let quantity: i32 = self.quantity.parse().map_err(|_| QuantityError::Invalid)?;
        u32::try_from(quantity).map_err(|_| QuantityError::Negative)
    }
}

/// Credits `quantity` units of `product` to `seller`. Both accumulators move
/// together or not at all.
pub fn record_sale(seller: &mut Seller, product: &mut Product, quantity: u32) -> Result<Decimal, Overflow> {
    let amount = product
        .unit_price
        .checked_mul(Decimal::from(quantity))
        .ok_or(Overflow)?;
    let total_revenue = seller.total_revenue.checked_add(amount).ok_or(Overflow)?;
    let units_sold = product
        .units_sold
        .checked_add(u64::from(quantity))
        .ok_or(Overflow)?;

    seller.total_revenue = total_revenue;
    product.units_sold = units_sold;
    Ok(amount)
}
