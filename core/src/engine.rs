//! ScanLedger Engine - Scan ingestion orchestration and notifications.
//!
//! This module provides the engine that drives barcode submissions through
//! product lookup into session state and queues user-facing notifications.
//! All business logic lives here, making the host UI a thin layer.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::domain::{ActiveScanner, ScannedItem, ScannerEvent, MANUAL_ENTRY_SCANNER_ID};
use crate::error::{Error, Result};
use crate::ports::{ProductLookup, ScannerControl};
use crate::session::ScanSession;

/// User-facing notification for a submission outcome.
///
/// Each submission produces exactly one notification; the host drains them
/// via [`ScanEngine::drain_notifications`] and renders [`message`](Self::message).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Lookup succeeded and the item was added to the session.
    ItemAdded { barcode: String, product_name: String },
    /// The product database has no entry for the barcode.
    ProductNotFound { barcode: String },
    /// The product database could not be reached.
    LookupFailed { barcode: String },
    /// Manual entry was empty after trimming.
    InvalidBarcode,
}

impl Notification {
    /// The user-visible message for this notification.
    pub fn message(&self) -> String {
        match self {
            Notification::ItemAdded {
                barcode,
                product_name,
            } => format!("Barcode: {} added. Product: {}", barcode, product_name),
            Notification::ProductNotFound { .. } => "Product not found".to_string(),
            Notification::LookupFailed { .. } => {
                "Failed to fetch product information".to_string()
            }
            Notification::InvalidBarcode => "Please enter a valid barcode".to_string(),
        }
    }

    /// Stable discriminator string for host-side dispatch.
    pub fn kind(&self) -> &'static str {
        match self {
            Notification::ItemAdded { .. } => "item_added",
            Notification::ProductNotFound { .. } => "product_not_found",
            Notification::LookupFailed { .. } => "lookup_failed",
            Notification::InvalidBarcode => "invalid_barcode",
        }
    }

    /// Whether this notification reports a successful submission.
    pub fn is_success(&self) -> bool {
        matches!(self, Notification::ItemAdded { .. })
    }
}

/// The main ScanLedger engine.
///
/// Generic over the product lookup and scanner control ports so hosts and
/// tests can inject their own implementations. Session state is injected at
/// construction; there is no ambient or global state.
///
/// # Usage Pattern
/// The host feeds scan events in (via [`submit_scan`](Self::submit_scan),
/// [`submit_manual`](Self::submit_manual), or the
/// [`process_events`](Self::process_events) pump), then reads session
/// snapshots and drains notifications after each turn of its event loop.
pub struct ScanEngine<L: ProductLookup, S: ScannerControl> {
    lookup: L,
    scanner: S,
    session: Arc<ScanSession>,
    pending_notifications: RwLock<Vec<Notification>>,
}

impl<L: ProductLookup, S: ScannerControl> ScanEngine<L, S> {
    /// Create an engine over the given ports and session.
    pub fn new(lookup: L, scanner: S, session: Arc<ScanSession>) -> Self {
        Self {
            lookup,
            scanner,
            session,
            pending_notifications: RwLock::new(Vec::new()),
        }
    }

    /// The session this engine mutates.
    pub fn session(&self) -> &Arc<ScanSession> {
        &self.session
    }

    // MARK: - Submission

    /// Resolve a scanned barcode and, on success, append it to the session.
    ///
    /// One lookup per call, no retry. A failed lookup leaves the session
    /// unchanged. Every outcome queues exactly one notification; the
    /// `Result` is also returned for callers that want it directly.
    pub async fn submit_scan(&self, barcode: &str, scanner_id: &str) -> Result<ScannedItem> {
        debug!(barcode, scanner_id, "submitting barcode");

        match self.lookup.lookup(barcode, scanner_id).await {
            Ok(item) => {
                self.session.add_item(item.clone());
                self.push_notification(Notification::ItemAdded {
                    barcode: item.barcode.clone(),
                    product_name: item.product_name.clone(),
                });
                info!(barcode, product_name = %item.product_name, "item added");
                Ok(item)
            }
            Err(Error::ProductNotFound(_)) => {
                warn!(barcode, "product not found");
                self.push_notification(Notification::ProductNotFound {
                    barcode: barcode.to_string(),
                });
                Err(Error::ProductNotFound(barcode.to_string()))
            }
            Err(err) => {
                warn!(barcode, error = %err, "lookup failed");
                self.push_notification(Notification::LookupFailed {
                    barcode: barcode.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Submit a manually typed barcode.
    ///
    /// The input is trimmed; an empty result fails with
    /// [`Error::EmptyBarcode`] before any network call. Otherwise the
    /// trimmed barcode goes through the regular scan path tagged
    /// [`MANUAL_ENTRY_SCANNER_ID`].
    pub async fn submit_manual(&self, input: &str) -> Result<ScannedItem> {
        let barcode = input.trim();
        if barcode.is_empty() {
            self.push_notification(Notification::InvalidBarcode);
            return Err(Error::EmptyBarcode);
        }

        self.submit_scan(barcode, MANUAL_ENTRY_SCANNER_ID).await
    }

    /// Handle a lifecycle/diagnostic event from the scanner adapter.
    ///
    /// These are logged only; no other action is taken.
    pub fn handle_scanner_event(&self, event: &str, scanner_id: &str) {
        debug!(event, scanner_id, "scanner event");
    }

    // MARK: - Scanner Control

    /// Enable or disable the hardware scanner and record the toggle.
    pub async fn set_scanner_enabled(&self, enabled: bool) -> Result<()> {
        self.scanner.set_enabled(enabled).await?;
        self.session.set_scanner_enabled(enabled);
        info!(enabled, "scanner toggled");
        Ok(())
    }

    /// Re-enumerate attached scanners and replace the session list.
    pub async fn refresh_scanners(&self) -> Result<Vec<ActiveScanner>> {
        let scanners = self.scanner.active_scanners().await?;
        self.session.set_active_scanners(scanners.clone());
        debug!(count = scanners.len(), "scanner list refreshed");
        Ok(scanners)
    }

    // MARK: - Notifications

    /// Get and clear pending notifications.
    pub fn drain_notifications(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.pending_notifications.write())
    }

    /// Check if there are pending notifications.
    pub fn has_pending_notifications(&self) -> bool {
        !self.pending_notifications.read().is_empty()
    }

    fn push_notification(&self, notification: Notification) {
        self.pending_notifications.write().push(notification);
    }

    // MARK: - Session Read-Through

    /// Snapshot of all session items, in insertion order.
    pub fn items(&self) -> Vec<ScannedItem> {
        self.session.items()
    }

    /// Remove every session item with the given barcode.
    pub fn remove_item(&self, barcode: &str) {
        self.session.remove_item(barcode);
    }

    /// Snapshot of the last-known active scanners.
    pub fn active_scanners(&self) -> Vec<ActiveScanner> {
        self.session.active_scanners()
    }

    /// Last-known scanner enabled state.
    pub fn is_scanner_enabled(&self) -> bool {
        self.session.is_scanner_enabled()
    }
}

impl<L, S> ScanEngine<L, S>
where
    L: ProductLookup + 'static,
    S: ScannerControl + 'static,
{
    /// Consume scanner events until the sending side closes.
    ///
    /// Each `Scan` event is resolved on its own task, so fast consecutive
    /// scans overlap and their items land in the session in completion
    /// order, not scan order. There is no in-flight cap and no cancellation;
    /// failures are absorbed into notifications by the per-scan path.
    pub async fn process_events(self: Arc<Self>, mut events: mpsc::Receiver<ScannerEvent>) {
        while let Some(event) = events.recv().await {
            match event {
                ScannerEvent::Scan {
                    barcode,
                    scanner_id,
                } => {
                    let engine = Arc::clone(&self);
                    tokio::spawn(async move {
                        let _ = engine.submit_scan(&barcode, &scanner_id).await;
                    });
                }
                ScannerEvent::Status { event, scanner_id } => {
                    self.handle_scanner_event(&event, &scanner_id);
                }
            }
        }
        debug!("scanner event channel closed");
    }
}
