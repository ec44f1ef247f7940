//! Open Food Facts product lookup adapter.
//!
//! Issues one `GET /api/v0/product/{barcode}.json` per lookup and
//! normalizes the response into a [`ScannedItem`]. The catalog's JSON is
//! heterogeneous (fields missing, empty, or typed as number-or-string);
//! normalization is a pure total conversion that pins every absent field
//! to its fallback value.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::LookupConfig;
use crate::domain::{
    NutritionFacts, ScannedItem, NOT_AVAILABLE, UNKNOWN_BRAND, UNKNOWN_INGREDIENTS,
    UNKNOWN_PRODUCT, UNKNOWN_QUANTITY,
};
use crate::error::{Error, Result};
use crate::ports::ProductLookup;

/// HTTP client for the Open Food Facts product database.
pub struct OpenFoodFactsClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenFoodFactsClient {
    /// Create a client from the given configuration.
    pub fn new(config: LookupConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::Network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            // The catalog path is appended per request; strip a trailing
            // slash so configured hosts with or without one behave the same.
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client with default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(LookupConfig::default())
    }

    fn product_url(&self, barcode: &str) -> String {
        format!("{}/api/v0/product/{}.json", self.base_url, barcode)
    }
}

impl ProductLookup for OpenFoodFactsClient {
    async fn lookup(&self, barcode: &str, scanner_id: &str) -> Result<ScannedItem> {
        let url = self.product_url(barcode);
        debug!(barcode, scanner_id, %url, "fetching product");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        // The catalog signals "not found" in the JSON body, not the HTTP
        // status code; an undecodable body is a transport-level failure.
        let body: LookupResponse = response
            .json()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        match body.product {
            Some(product) if body.status == 1 => Ok(product.into_item(barcode, scanner_id)),
            _ => {
                warn!(barcode, status = body.status, "no product in catalog");
                Err(Error::ProductNotFound(barcode.to_string()))
            }
        }
    }
}

// ============================================================================
// Catalog JSON Response Parsing
// ============================================================================

/// Response structure for `GET /api/v0/product/{barcode}.json`.
#[derive(Debug, Deserialize)]
pub struct LookupResponse {
    /// `1` for a hit; anything else means no product.
    #[serde(default)]
    pub status: i64,
    pub product: Option<ProductPayload>,
}

/// The `product` object of a catalog hit. All fields are optional upstream.
#[derive(Debug, Default, Deserialize)]
pub struct ProductPayload {
    pub product_name: Option<String>,
    pub brands: Option<String>,
    pub quantity: Option<String>,
    pub ingredients_text: Option<String>,
    pub image_url: Option<String>,
    pub nutriments: Option<NutrimentsPayload>,
}

/// The `nutriments` object; values arrive as JSON numbers or strings.
#[derive(Debug, Default, Deserialize)]
pub struct NutrimentsPayload {
    pub energy: Option<NutrimentValue>,
    pub fat: Option<NutrimentValue>,
    pub saturated_fat: Option<NutrimentValue>,
    pub carbohydrates: Option<NutrimentValue>,
    pub sugars: Option<NutrimentValue>,
    pub fiber: Option<NutrimentValue>,
    pub proteins: Option<NutrimentValue>,
    pub salt: Option<NutrimentValue>,
}

/// A single nutriment value in either of the catalog's encodings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum NutrimentValue {
    Number(f64),
    Text(String),
}

impl NutrimentValue {
    /// Render the value as display text; empty text counts as absent.
    fn into_display(self) -> Option<String> {
        match self {
            NutrimentValue::Number(n) if n.fract() == 0.0 => Some(format!("{}", n as i64)),
            NutrimentValue::Number(n) => Some(n.to_string()),
            NutrimentValue::Text(s) if s.is_empty() => None,
            NutrimentValue::Text(s) => Some(s),
        }
    }
}

/// Substitute the fallback when a field is absent or empty.
fn or_fallback(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => fallback.to_string(),
    }
}

impl ProductPayload {
    /// Convert the raw catalog payload into a fully populated item.
    ///
    /// Total over every combination of present/absent fields; never panics.
    pub fn into_item(self, barcode: &str, scanner_id: &str) -> ScannedItem {
        ScannedItem {
            barcode: barcode.to_string(),
            scanner_id: scanner_id.to_string(),
            product_name: or_fallback(self.product_name, UNKNOWN_PRODUCT),
            brand: or_fallback(self.brands, UNKNOWN_BRAND),
            quantity: or_fallback(self.quantity, UNKNOWN_QUANTITY),
            ingredients: or_fallback(self.ingredients_text, UNKNOWN_INGREDIENTS),
            product_image: self.image_url.filter(|url| !url.is_empty()),
            nutritional_info: self.nutriments.unwrap_or_default().into_facts(),
        }
    }
}

impl NutrimentsPayload {
    /// Convert raw nutriments into the normalized table.
    pub fn into_facts(self) -> NutritionFacts {
        fn display(value: Option<NutrimentValue>) -> String {
            value
                .and_then(NutrimentValue::into_display)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string())
        }

        NutritionFacts {
            energy: display(self.energy),
            fat: display(self.fat),
            saturated_fat: display(self.saturated_fat),
            carbohydrates: display(self.carbohydrates),
            sugars: display(self.sugars),
            fiber: display(self.fiber),
            proteins: display(self.proteins),
            salt: display(self.salt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn test_client(server: &MockServer) -> OpenFoodFactsClient {
        OpenFoodFactsClient::new(LookupConfig::new().with_base_url(server.base_url())).unwrap()
    }

    // ==================== Pure normalization ====================

    #[test]
    fn test_empty_payload_gets_all_fallbacks() {
        let item = ProductPayload::default().into_item("123", "scanner-1");

        assert_eq!(item.barcode, "123");
        assert_eq!(item.scanner_id, "scanner-1");
        assert_eq!(item.product_name, UNKNOWN_PRODUCT);
        assert_eq!(item.brand, UNKNOWN_BRAND);
        assert_eq!(item.quantity, UNKNOWN_QUANTITY);
        assert_eq!(item.ingredients, UNKNOWN_INGREDIENTS);
        assert_eq!(item.product_image, None);
        assert_eq!(item.nutritional_info, NutritionFacts::default());
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let payload = ProductPayload {
            product_name: Some(String::new()),
            brands: Some(String::new()),
            image_url: Some(String::new()),
            ..ProductPayload::default()
        };
        let item = payload.into_item("123", "scanner-1");

        assert_eq!(item.product_name, UNKNOWN_PRODUCT);
        assert_eq!(item.brand, UNKNOWN_BRAND);
        assert_eq!(item.product_image, None);
    }

    #[test]
    fn test_present_fields_pass_through() {
        let payload = ProductPayload {
            product_name: Some("Dark Chocolate".to_string()),
            brands: Some("Cocoa Co".to_string()),
            quantity: Some("100 g".to_string()),
            ingredients_text: Some("cocoa mass, sugar".to_string()),
            image_url: Some("https://images.example/123.jpg".to_string()),
            nutriments: None,
        };
        let item = payload.into_item("123", "scanner-1");

        assert_eq!(item.product_name, "Dark Chocolate");
        assert_eq!(item.brand, "Cocoa Co");
        assert_eq!(item.quantity, "100 g");
        assert_eq!(item.ingredients, "cocoa mass, sugar");
        assert_eq!(
            item.product_image.as_deref(),
            Some("https://images.example/123.jpg")
        );
    }

    #[test]
    fn test_nutriment_numbers_and_strings_normalize() {
        let payload: NutrimentsPayload = serde_json::from_value(json!({
            "energy": 250,
            "fat": "12.5",
            "saturated_fat": 7.2,
            "sugars": "",
        }))
        .unwrap();
        let facts = payload.into_facts();

        assert_eq!(facts.energy, "250");
        assert_eq!(facts.fat, "12.5");
        assert_eq!(facts.saturated_fat, "7.2");
        assert_eq!(facts.sugars, NOT_AVAILABLE);
        assert_eq!(facts.carbohydrates, NOT_AVAILABLE);
        assert_eq!(facts.fiber, NOT_AVAILABLE);
        assert_eq!(facts.proteins, NOT_AVAILABLE);
        assert_eq!(facts.salt, NOT_AVAILABLE);
    }

    // ==================== httpmock-based tests ====================

    #[tokio::test]
    async fn test_lookup_partial_product() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/v0/product/0123456789.json");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "status": 1,
                    "product": {
                        "product_name": "Cocoa",
                        "nutriments": { "energy": "250" },
                    },
                }));
        });

        let client = test_client(&server);
        let item = client.lookup("0123456789", "scanner-1").await.unwrap();
        mock.assert();

        assert_eq!(item.barcode, "0123456789");
        assert_eq!(item.product_name, "Cocoa");
        assert_eq!(item.brand, UNKNOWN_BRAND);
        assert_eq!(item.nutritional_info.energy, "250");
        assert_eq!(item.nutritional_info.fat, NOT_AVAILABLE);
    }

    #[tokio::test]
    async fn test_lookup_status_zero_is_not_found() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v0/product/000.json");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "status": 0 }));
        });

        let client = test_client(&server);
        let result = client.lookup("000", "scanner-1").await;
        assert!(matches!(result, Err(Error::ProductNotFound(b)) if b == "000"));
    }

    #[tokio::test]
    async fn test_lookup_success_status_without_product_is_not_found() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v0/product/111.json");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "status": 1 }));
        });

        let client = test_client(&server);
        let result = client.lookup("111", "scanner-1").await;
        assert!(matches!(result, Err(Error::ProductNotFound(_))));
    }

    #[tokio::test]
    async fn test_lookup_http_error_with_decodable_body_is_not_found() {
        // The catalog replies 404 with a valid JSON body; the body's status
        // field governs, so this is a not-found, not a network failure.
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v0/product/222.json");
            then.status(404)
                .header("content-type", "application/json")
                .json_body(json!({ "status": 0, "status_verbose": "product not found" }));
        });

        let client = test_client(&server);
        let result = client.lookup("222", "scanner-1").await;
        assert!(matches!(result, Err(Error::ProductNotFound(_))));
    }

    #[tokio::test]
    async fn test_lookup_malformed_body_is_network_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v0/product/333.json");
            then.status(200).body("<html>gateway timeout</html>");
        });

        let client = test_client(&server);
        let result = client.lookup("333", "scanner-1").await;
        assert!(matches!(result, Err(Error::Network(_))));
    }

    #[tokio::test]
    async fn test_lookup_unreachable_host_is_network_error() {
        let client = OpenFoodFactsClient::new(
            // Reserved TEST-NET-1 address, nothing listens there.
            LookupConfig::new()
                .with_base_url("http://192.0.2.1:9")
                .with_timeout(std::time::Duration::from_millis(200)),
        )
        .unwrap();

        let result = client.lookup("444", "scanner-1").await;
        assert!(matches!(result, Err(Error::Network(_))));
    }

    #[tokio::test]
    async fn test_barcode_is_forwarded_verbatim() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/v0/product/not-a-number.json");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "status": 0 }));
        });

        let client = test_client(&server);
        let _ = client.lookup("not-a-number", "scanner-1").await;
        mock.assert();
    }
}
