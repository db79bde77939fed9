use crate::domain::serialize_amount;
use crate::error::FieldError;
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

/// A catalog product. Serializes as a report row: `name;unit_price`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    #[serde(skip)]
    pub id: String,
    pub name: String,
    #[serde(serialize_with = "serialize_amount")]
    pub unit_price: Decimal,
    #[serde(skip)]
    pub units_sold: u64,
}

impl Product {
    pub fn new(id: &str, name: &str, unit_price: Decimal) -> Self {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            unit_price,
            units_sold: 0,
        }
    }

    /// Builds a product from `[id, name, price]`. The price is taken as-is,
    /// negative values included.
    pub fn from_fields(fields: &[&str]) -> Result<Self, FieldError> {
        let id = field(fields, 0)?;
        let name = field(fields, 1)?;
        let raw_price = field(fields, 2)?;
        let invalid = || FieldError::InvalidNumber {
            value: raw_price.to_string(),
        };
        // Digit separators are not valid in a catalog price.
        if raw_price.contains('_') {
            return Err(invalid());
        }
        let unit_price = Decimal::from_str(raw_price).map_err(|_| invalid())?;
        Ok(Product::new(id, name, unit_price))
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

pub(crate) fn field<'a>(fields: &[&'a str], index: usize) -> Result<&'a str, FieldError> {
    fields
        .get(index)
        .map(|value| value.trim())
        .ok_or(FieldError::Missing { index })
}
