pub mod product;
pub mod sale;
pub mod seller;
pub mod warning;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serializer;

/// Fraction digits used for every amount written to a report.
pub const REPORT_DECIMALS: u32 = 2;

pub fn format_amount(value: &Decimal) -> String {
    let rounded =
        value.round_dp_with_strategy(REPORT_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

pub fn serialize_amount<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_amount(value))
}
