//! Ports layer - Trait definitions (interfaces).
//!
//! This module defines the interfaces that the engine uses to interact with
//! external systems. Implementations live in `adapters`.

mod lookup;
mod scanner;

pub use lookup::ProductLookup;
pub use scanner::ScannerControl;
