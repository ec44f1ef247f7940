//! Product lookup port (interface).

use crate::domain::ScannedItem;
use crate::error::Result;

/// Port for resolving barcodes against a product database.
///
/// This trait defines the interface for product resolution. Implementations
/// handle the transport details (HTTP catalog, fixture data, etc.) and return
/// a fully normalized item: every field already carries catalog data or its
/// designated fallback.
pub trait ProductLookup: Send + Sync {
    /// Resolve a single barcode.
    ///
    /// Exactly one resolution attempt is made per call; there is no retry
    /// and no caching. Errors:
    /// - [`Error::ProductNotFound`](crate::Error::ProductNotFound) when the
    ///   database has no entry for the barcode.
    /// - [`Error::Network`](crate::Error::Network) when the database cannot
    ///   be reached or responds with an unreadable body.
    fn lookup(
        &self,
        barcode: &str,
        scanner_id: &str,
    ) -> impl std::future::Future<Output = Result<ScannedItem>> + Send;
}
