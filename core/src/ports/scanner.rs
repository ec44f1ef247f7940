//! Scanner control port (interface).

use crate::domain::ActiveScanner;
use crate::error::Result;

/// Port for commanding the hardware scanner adapter.
///
/// This trait covers the command direction only. Events flowing the other
/// way (scans, device status) reach the engine as
/// [`ScannerEvent`](crate::domain::ScannerEvent)s, either through direct
/// submission calls or through the engine's event pump.
pub trait ScannerControl: Send + Sync {
    /// Enable or disable scanning on the attached hardware.
    fn set_enabled(&self, enabled: bool) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Enumerate the scanners the adapter currently sees.
    ///
    /// Returns the complete current list; callers replace any previous
    /// snapshot wholesale rather than merging.
    fn active_scanners(&self)
        -> impl std::future::Future<Output = Result<Vec<ActiveScanner>>> + Send;
}
