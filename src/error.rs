use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while decoding a MAT-file payload.
#[derive(Debug, Error)]
pub enum ReadError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The payload is not a MAT-file 5 stream.
    #[error("invalid MAT-file header: {message}")]
    InvalidHeader { message: String },

    /// The payload ended inside an element.
    #[error("unexpected end of data at offset {offset}")]
    UnexpectedEof { offset: usize },

    /// A data element does not follow the format.
    #[error("malformed MAT element: {message}")]
    MalformedElement { message: String },

    /// A format feature this reader does not decode.
    #[error("unsupported MAT-file feature: {feature}")]
    Unsupported { feature: String },

    /// A compressed element could not be inflated.
    #[error("corrupt compressed element: {0}")]
    Inflate(std::io::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReadError {
    pub(crate) fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }

    pub(crate) fn malformed_element(message: impl Into<String>) -> Self {
        Self::MalformedElement {
            message: message.into(),
        }
    }

    pub(crate) fn unsupported(feature: impl Into<String>) -> Self {
        Self::Unsupported {
            feature: feature.into(),
        }
    }
}

/// Errors produced while converting a case file into normalized tables.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The case file could not be opened or decoded.
    #[error("reading case file: {0}")]
    FileRead(#[from] ReadError),

    /// Neither a case struct nor flat case tables were found.
    #[error("file does not contain a recognized MATPOWER case layout")]
    MalformedCaseStructure,

    /// A required case entry is absent.
    #[error("required case table '{table}' is missing")]
    MissingTable { table: &'static str },

    /// A case entry has the wrong type or shape.
    #[error("malformed case table '{table}': {message}")]
    MalformedTable {
        table: &'static str,
        message: String,
    },

    /// The downstream network builder rejected the normalized case.
    #[error("building network: {0}")]
    Network(anyhow::Error),
}

impl ConvertError {
    pub(crate) fn malformed_table(table: &'static str, message: impl Into<String>) -> Self {
        Self::MalformedTable {
            table,
            message: message.into(),
        }
    }
}
