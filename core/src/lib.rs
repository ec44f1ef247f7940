//! ScanLedger Core Library
//!
//! Barcode scan session engine for host UIs. Provides functionality to:
//! - Resolve scanned or manually typed barcodes against the Open Food Facts
//!   product database
//! - Normalize heterogeneous catalog responses into fixed-shape records
//!   (missing fields pinned to fallback values)
//! - Maintain an in-memory session of resolved scans with removal support
//! - Track the attached scanner inventory and enabled state
//! - Queue user-facing notifications for the host to drain
//!
//! # Architecture
//! This library follows hexagonal architecture (ports & adapters):
//! - `domain`: Pure data models (items, nutrition facts, scanner events)
//! - `ports`: Trait definitions (interfaces)
//! - `adapters`: External system implementations (HTTP catalog, driver bridge)
//! - `engine`: Scan ingestion orchestration over the ports
//!
//! Sessions are memory-only: nothing is cached or persisted, and a failed
//! lookup has no effect beyond its one notification.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod ports;
pub mod session;

// Re-export domain types (primary API)
pub use domain::{
    ActiveScanner, NutritionFacts, ScannedItem, ScannerEvent, MANUAL_ENTRY_SCANNER_ID,
};

// Re-export other commonly used types
pub use adapters::{OpenFoodFactsClient, ScannerBridge};
pub use config::LookupConfig;
pub use engine::{Notification, ScanEngine};
pub use error::{Error, Result};
pub use ports::{ProductLookup, ScannerControl};
pub use session::ScanSession;
