use csv::StringRecord;
use std::io::{Read, Write};

pub const DELIMITER: char = ';';

/// Splits a line on `;`, dropping trailing empty fields (`"P1;"` has one field).
pub fn split_fields(line: &str) -> Vec<&str> {
    drop_trailing_empty(line.split(DELIMITER).collect())
}

/// Fields of a catalog record, with the same trailing-empty rule as `split_fields`.
pub fn record_fields(record: &StringRecord) -> Vec<&str> {
    drop_trailing_empty(record.iter().collect())
}

/// True for a line that held nothing but whitespace.
pub fn is_blank(record: &StringRecord) -> bool {
    record.len() <= 1 && record.iter().all(|field| field.is_empty())
}

fn drop_trailing_empty(mut fields: Vec<&str>) -> Vec<&str> {
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}

/// Catalog reader: `;` separated, no header row, no quoting, fields trimmed,
/// rows may have any number of fields.
pub fn catalog_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(DELIMITER as u8)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

/// Report writer: `;` separated, `\n` terminated, no header row, never quoted.
pub fn report_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(DELIMITER as u8)
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer)
}
