// src/error.rs: crate-level error

use thiserror::Error;

use crate::base64::Base64Error;
use crate::convert::{FormatError, UnknownFormat};
use crate::qr::QrError;
use crate::regex_tester::RegexError;
use crate::url::UrlError;
use crate::xor::XorError;

/// Any failure a tool can report. Pages show the `Display` text as-is.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ToolError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    UnknownFormat(#[from] UnknownFormat),
    #[error(transparent)]
    Xor(#[from] XorError),
    #[error(transparent)]
    Regex(#[from] RegexError),
    #[error(transparent)]
    Url(#[from] UrlError),
    #[error(transparent)]
    Base64(#[from] Base64Error),
    #[error(transparent)]
    Qr(#[from] QrError),
}

pub type Result<T> = std::result::Result<T, ToolError>;
