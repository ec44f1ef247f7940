//! Scanner hardware domain models.

use serde::{Deserialize, Serialize};

// ============================================================================
// ActiveScanner
// ============================================================================

/// An attached barcode scanner as reported by the hardware adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveScanner {
    /// Adapter-assigned numeric device id.
    pub id: i32,
    /// Human-readable device name.
    pub name: String,
}

impl ActiveScanner {
    /// Create a new scanner entry.
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for ActiveScanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (id: {})", self.name, self.id)
    }
}

// ============================================================================
// ScannerEvent
// ============================================================================

/// Event emitted by the scanner adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScannerEvent {
    /// A barcode was read by a device.
    Scan {
        /// The decoded barcode text.
        barcode: String,
        /// Id of the device that read it.
        scanner_id: String,
    },
    /// Device lifecycle or diagnostic event (connected, torch toggled, ...).
    Status {
        /// Adapter-defined event name.
        event: String,
        /// Id of the device the event concerns.
        scanner_id: String,
    },
}

impl ScannerEvent {
    /// Id of the device this event originated from.
    pub fn scanner_id(&self) -> &str {
        match self {
            ScannerEvent::Scan { scanner_id, .. } => scanner_id,
            ScannerEvent::Status { scanner_id, .. } => scanner_id,
        }
    }
}
