//! PDF key errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("Invalid key encoding: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Key is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
    #[error("Missing parameter: {0}")]
    MissingParam(&'static str),
}

pub type Result<T> = std::result::Result<T, PdfError>;

pub(crate) fn invalid(field: &str, value: &str) -> PdfError {
    PdfError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    }
}
