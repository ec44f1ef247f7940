//! Error types for the scanledger-core library.

use thiserror::Error;

/// Result type alias for scan session operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during barcode submission and scanner control.
#[derive(Error, Debug)]
pub enum Error {
    /// Submitted barcode was empty or whitespace-only.
    #[error("Please enter a valid barcode")]
    EmptyBarcode,

    /// The product database could not be reached or returned an unreadable body.
    #[error("Failed to fetch product information: {0}")]
    Network(String),

    /// The product database has no entry for the barcode.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A scanner adapter command failed.
    #[error("Scanner command failed: {0}")]
    Scanner(String),
}
