use std::fmt;
use std::path::PathBuf;

/// Why a single catalog line could not be turned into an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Missing { index: usize },
    InvalidNumber { value: String },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Missing { index } => write!(f, "missing field {}", index),
            FieldError::InvalidNumber { value } => write!(f, "invalid number '{}'", value),
        }
    }
}

impl std::error::Error for FieldError {}

#[derive(Debug)]
pub enum ReportError {
    CatalogNotFound(PathBuf),
    MalformedCatalogLine {
        path: PathBuf,
        line: u64,
        source: FieldError,
    },
    CsvError(csv::Error),
    IoError(std::io::Error),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::CatalogNotFound(path) => {
                write!(f, "Catalog file not found: {}", path.display())
            }
            ReportError::MalformedCatalogLine { path, line, source } => write!(
                f,
                "Malformed catalog line {} in {}: {}",
                line,
                path.display(),
                source
            ),
            ReportError::CsvError(e) => write!(f, "CSV error: {}", e),
            ReportError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::MalformedCatalogLine { source, .. } => Some(source),
            ReportError::CsvError(e) => Some(e),
            ReportError::IoError(e) => Some(e),
            ReportError::CatalogNotFound(_) => None,
        }
    }
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        ReportError::CsvError(err)
    }
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::IoError(err)
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
