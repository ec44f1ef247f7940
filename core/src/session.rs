//! Scan session state.
//!
//! The session owns the ordered list of resolved scans and the last-known
//! scanner inventory. Both collections start empty, live only in memory,
//! and are discarded when the process exits.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;

use crate::domain::{ActiveScanner, ScannedItem};

/// In-memory scan session.
///
/// Holds the append-ordered item list (insertion order is display order),
/// the active-scanner inventory, and the last-known scanner enabled toggle.
/// Readers receive cloned snapshots; mutation goes through the operations
/// below. State is guarded so lookups completing on separate tasks can
/// append concurrently; locks cover single operations only, so items land
/// in completion order of their lookups.
pub struct ScanSession {
    items: RwLock<Vec<ScannedItem>>,
    active_scanners: RwLock<Vec<ActiveScanner>>,
    scanner_enabled: AtomicBool,
}

impl ScanSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            active_scanners: RwLock::new(Vec::new()),
            scanner_enabled: AtomicBool::new(false),
        }
    }

    // MARK: - Items

    /// Append a resolved item to the end of the list.
    ///
    /// No deduplication: scanning the same barcode twice yields two entries.
    pub fn add_item(&self, item: ScannedItem) {
        self.items.write().push(item);
    }

    /// Remove every item whose barcode matches.
    ///
    /// Removal is a filter, not a single-element delete; no-op when nothing
    /// matches.
    pub fn remove_item(&self, barcode: &str) {
        self.items.write().retain(|item| item.barcode != barcode);
    }

    /// Get a snapshot of all items, in insertion order.
    pub fn items(&self) -> Vec<ScannedItem> {
        self.items.read().clone()
    }

    /// Number of items currently in the session.
    pub fn item_count(&self) -> usize {
        self.items.read().len()
    }

    /// Check if any item with the given barcode is in the session.
    pub fn contains_barcode(&self, barcode: &str) -> bool {
        self.items.read().iter().any(|item| item.barcode == barcode)
    }

    // MARK: - Scanners

    /// Replace the active-scanner list wholesale.
    pub fn set_active_scanners(&self, scanners: Vec<ActiveScanner>) {
        *self.active_scanners.write() = scanners;
    }

    /// Get a snapshot of the last-known active scanners.
    pub fn active_scanners(&self) -> Vec<ActiveScanner> {
        self.active_scanners.read().clone()
    }

    /// Record the last-known scanner enabled toggle (display only).
    pub fn set_scanner_enabled(&self, enabled: bool) {
        self.scanner_enabled.store(enabled, Ordering::SeqCst);
    }

    /// Last-known scanner enabled state.
    pub fn is_scanner_enabled(&self) -> bool {
        self.scanner_enabled.load(Ordering::SeqCst)
    }
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new()
    }
}
