pub mod catalog;
pub mod delimited;
pub mod report;
pub mod trx_processor;
