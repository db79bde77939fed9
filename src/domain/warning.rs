use std::fmt;

/// A non-fatal condition. The offending row or file is skipped and the run goes on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    EmptyFile { file: String },
    InvalidHeader { file: String },
    SellerNotFound { file: String, document_number: String },
    InvalidQuantity { file: String, line: u64 },
    NegativeQuantity { file: String, line: u64 },
    NegativePrice { file: String, product: String },
    AccumulatorOverflow { file: String, line: u64 },
    FileFailed { file: String, reason: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::EmptyFile { file } => write!(f, "Empty file - {}", file),
            Warning::InvalidHeader { file } => write!(f, "Invalid header - {}", file),
            Warning::SellerNotFound {
                file,
                document_number,
            } => write!(f, "Seller not found - {} (in {})", document_number, file),
            Warning::InvalidQuantity { file, line } => {
                write!(f, "Invalid quantity in file {} line {}", file, line)
            }
            Warning::NegativeQuantity { file, line } => {
                write!(f, "Negative quantity in file {} line {}", file, line)
            }
            Warning::NegativePrice { file, product } => {
                write!(f, "Negative price for product {} in file {}", product, file)
            }
            Warning::AccumulatorOverflow { file, line } => {
                write!(f, "Sale total overflows in file {} line {}", file, line)
            }
            Warning::FileFailed { file, reason } => {
                write!(f, "Error processing file {} - {}", file, reason)
            }
        }
    }
}

/// Records every warning of a run and optionally forwards it to the logger.
#[derive(Debug, Default)]
pub struct WarningLog {
    entries: Vec<Warning>,
    log_warnings: bool,
}

impl WarningLog {
    pub fn new(log_warnings: bool) -> Self {
        WarningLog {
            entries: Vec::new(),
            log_warnings,
        }
    }

    pub fn push(&mut self, warning: Warning) {
        if self.log_warnings {
            log::warn!("{}", warning);
        }
        self.entries.push(warning);
    }

    #[allow(dead_code)]
    pub fn entries(&self) -> &[Warning] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
