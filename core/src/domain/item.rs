//! Scanned product domain models.

use serde::{Deserialize, Serialize};

// ============================================================================
// Sentinels
// ============================================================================

/// Scanner id recorded for manually typed barcodes.
pub const MANUAL_ENTRY_SCANNER_ID: &str = "manual-entry";

/// Fallback product name when the catalog entry carries none.
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// Fallback brand when the catalog entry carries none.
pub const UNKNOWN_BRAND: &str = "Unknown Brand";

/// Fallback quantity when the catalog entry carries none.
pub const UNKNOWN_QUANTITY: &str = "Unknown Quantity";

/// Fallback ingredient list when the catalog entry carries none.
pub const UNKNOWN_INGREDIENTS: &str = "Unknown Ingredients";

/// Fallback for any nutriment the catalog entry does not report.
pub const NOT_AVAILABLE: &str = "Not available";

// ============================================================================
// NutritionFacts
// ============================================================================

/// Per-100g nutrition table, normalized to display strings.
///
/// The catalog reports nutriments as an open-ended mix of numbers and
/// strings; downstream consumers only render them, so every field is kept
/// as text and absent values are pinned to [`NOT_AVAILABLE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionFacts {
    /// Energy (kJ or kcal, as reported).
    pub energy: String,
    /// Total fat.
    pub fat: String,
    /// Saturated fat.
    pub saturated_fat: String,
    /// Carbohydrates.
    pub carbohydrates: String,
    /// Sugars.
    pub sugars: String,
    /// Dietary fiber.
    pub fiber: String,
    /// Proteins.
    pub proteins: String,
    /// Salt.
    pub salt: String,
}

impl Default for NutritionFacts {
    fn default() -> Self {
        Self {
            energy: NOT_AVAILABLE.to_string(),
            fat: NOT_AVAILABLE.to_string(),
            saturated_fat: NOT_AVAILABLE.to_string(),
            carbohydrates: NOT_AVAILABLE.to_string(),
            sugars: NOT_AVAILABLE.to_string(),
            fiber: NOT_AVAILABLE.to_string(),
            proteins: NOT_AVAILABLE.to_string(),
            salt: NOT_AVAILABLE.to_string(),
        }
    }
}

impl NutritionFacts {
    /// Check whether the catalog reported at least one nutriment.
    pub fn has_data(&self) -> bool {
        [
            &self.energy,
            &self.fat,
            &self.saturated_fat,
            &self.carbohydrates,
            &self.sugars,
            &self.fiber,
            &self.proteins,
            &self.salt,
        ]
        .iter()
        .any(|v| v.as_str() != NOT_AVAILABLE)
    }
}

// ============================================================================
// ScannedItem
// ============================================================================

/// A resolved barcode scan as it appears in the session list.
///
/// Every field downstream of normalization carries either catalog data or
/// its designated fallback; consumers never see empty strings. The one
/// exception is `product_image`, where `None` means the catalog reported
/// no image (hosts render their own placeholder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannedItem {
    /// The scanned barcode, exactly as submitted.
    pub barcode: String,
    /// Id of the originating scanner, or [`MANUAL_ENTRY_SCANNER_ID`].
    pub scanner_id: String,
    /// Product display name.
    pub product_name: String,
    /// Brand name.
    pub brand: String,
    /// Package quantity (e.g., "500 g").
    pub quantity: String,
    /// Ingredient list text.
    pub ingredients: String,
    /// Product image URL, if the catalog has one.
    #[serde(default)]
    pub product_image: Option<String>,
    /// Normalized nutrition table.
    pub nutritional_info: NutritionFacts,
}

impl ScannedItem {
    /// Create an item with every catalog field at its fallback value.
    pub fn unknown(barcode: impl Into<String>, scanner_id: impl Into<String>) -> Self {
        Self {
            barcode: barcode.into(),
            scanner_id: scanner_id.into(),
            product_name: UNKNOWN_PRODUCT.to_string(),
            brand: UNKNOWN_BRAND.to_string(),
            quantity: UNKNOWN_QUANTITY.to_string(),
            ingredients: UNKNOWN_INGREDIENTS.to_string(),
            product_image: None,
            nutritional_info: NutritionFacts::default(),
        }
    }

    /// Check whether this item was typed in rather than scanned.
    pub fn is_manual_entry(&self) -> bool {
        self.scanner_id == MANUAL_ENTRY_SCANNER_ID
    }

    /// Check whether the catalog reported an image for this product.
    pub fn has_image(&self) -> bool {
        self.product_image.is_some()
    }
}

impl std::fmt::Display for ScannedItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, scanner: {})",
            self.barcode, self.product_name, self.scanner_id
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
