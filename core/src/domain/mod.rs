//! Domain layer - Pure business logic and data models.
//!
//! This module contains domain entities that represent core business concepts.
//! These types have no I/O dependencies and can be tested in isolation.

mod item;
mod scanner;

// Re-export all domain types
pub use item::{
    NutritionFacts, ScannedItem, MANUAL_ENTRY_SCANNER_ID, NOT_AVAILABLE, UNKNOWN_BRAND,
    UNKNOWN_INGREDIENTS, UNKNOWN_PRODUCT, UNKNOWN_QUANTITY,
};
pub use scanner::{ActiveScanner, ScannerEvent};
