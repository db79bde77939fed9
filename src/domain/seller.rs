use crate::domain::product::field;
use crate::error::FieldError;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct Seller {
    pub document_type: String,
    pub document_number: String,
    pub first_names: String,
    pub last_names: String,
    pub total_revenue: Decimal,
}

impl Seller {
    pub fn new(document_type: &str, document_number: &str, first_names: &str, last_names: &str) -> Self {
        Seller {
            document_type: document_type.to_string(),
            document_number: document_number.to_string(),
            first_names: first_names.to_string(),
            last_names: last_names.to_string(),
            total_revenue: Decimal::ZERO,
        }
    }

    /// Builds a seller from `[document_type, document_number, first_names, last_names]`.
    pub fn from_fields(fields: &[&str]) -> Result<Self, FieldError> {
        Ok(Seller::new(
            field(fields, 0)?,
            field(fields, 1)?,
            field(fields, 2)?,
            field(fields, 3)?,
        ))
    }

    pub fn document_number(&self) -> &str {
        &self.document_number
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_names, self.last_names)
    }
}
