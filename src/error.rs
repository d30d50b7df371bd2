//! Error types

use thiserror::Error;

/// Failure to turn raw XML into a document
///
/// Field extraction never fails; only loading a malformed document does.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The document is not well-formed XML
    #[error("XML parsing failed: {0}")]
    Xml(#[from] roxmltree::Error),
}
