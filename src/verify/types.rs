//! Verification check types

use serde::Serialize;

/// Verification check result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckItem {
    pub section: String,
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub recommendation: Option<String>,
}

/// Status of a verification check
///
/// `Warning` is a soft failure: it is reported but never counted as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}
