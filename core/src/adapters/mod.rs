//! Adapters layer - External system implementations.
//!
//! This module contains implementations of the port traits defined in
//! `ports`: the Open Food Facts HTTP client and the channel bridge for
//! callback-style scanner drivers.

mod bridge;
mod openfoodfacts;

pub use bridge::{ScannerBridge, ScannerCommand};
pub use openfoodfacts::OpenFoodFactsClient;
