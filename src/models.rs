//! Frontend Models
//!
//! Data structures matching the bulk-create and location-search endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Part category offered in the row's select (from page config)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub label: String,
}

/// Stock location returned by the search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: u32,
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationSearchResponse {
    #[serde(default)]
    pub results: Vec<Location>,
}

/// One row of the bulk-create payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductItem {
    pub category_id: Option<u32>,
    pub name: String,
    pub description: String,
    pub ipn: String,
    pub quantity: i64,
    pub location_id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkCreateRequest {
    pub items: Vec<ProductItem>,
}

/// Part created by the server for a successful row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedPart {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub ipn: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Quantity booked in alongside the part, if a stock item was created
    #[serde(default, skip_serializing)]
    pub stocked: Option<i64>,
}

/// Stock item booked in for a created part
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StockItemInfo {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub location_id: Option<u32>,
}

/// Per-row outcome inside a successful batch response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub index: usize,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    /// Which required fields were present (`missing_required_fields` only)
    #[serde(default)]
    pub fields: BTreeMap<String, bool>,
    #[serde(default)]
    pub part: Option<CreatedPart>,
    #[serde(default)]
    pub stock_item: Option<StockItemInfo>,
}

impl ItemResult {
    /// Fields the server reported as missing, in name order
    pub fn missing_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(_, present)| !**present)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// The created part, annotated with the booked-in quantity
    pub fn created_part(&self) -> Option<CreatedPart> {
        let mut part = self.part.clone()?;
        part.stocked = self
            .stock_item
            .as_ref()
            .filter(|stock| stock.id.is_some())
            .map(|stock| stock.quantity);
        Some(part)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BulkCreateResponse {
    #[serde(default)]
    pub results: Vec<ItemResult>,
}

/// Body of a non-2xx response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_serializes_nulls() {
        let item = ProductItem {
            category_id: None,
            name: String::new(),
            description: String::new(),
            ipn: String::new(),
            quantity: 0,
            location_id: None,
        };
        let value = serde_json::to_value(BulkCreateRequest { items: vec![item] }).unwrap();
        assert_eq!(
            value,
            json!({ "items": [{
                "category_id": null,
                "name": "",
                "description": "",
                "ipn": "",
                "quantity": 0,
                "location_id": null
            }] })
        );
    }

    #[test]
    fn test_item_result_full_shape() {
        let body = json!({
            "index": 0,
            "success": true,
            "part": { "id": 12, "name": "Widget", "ipn": "W-1", "url": "/part/12/" },
            "stock_item": { "id": 40, "quantity": 5, "location_id": 3 }
        });
        let result: ItemResult = serde_json::from_value(body).unwrap();
        let part = result.created_part().unwrap();
        assert_eq!(part.id, 12);
        assert_eq!(part.ipn.as_deref(), Some("W-1"));
        assert_eq!(part.url.as_deref(), Some("/part/12/"));
        assert_eq!(part.stocked, Some(5));
    }

    #[test]
    fn test_stock_without_id_is_not_reported() {
        let body = json!({
            "index": 1,
            "success": true,
            "part": { "id": 3, "name": "Bolt", "ipn": "", "url": null },
            "stock_item": { "id": null, "quantity": 0, "location_id": null }
        });
        let result: ItemResult = serde_json::from_value(body).unwrap();
        assert_eq!(result.created_part().unwrap().stocked, None);
    }

    #[test]
    fn test_missing_fields() {
        let body = json!({
            "index": 2,
            "success": false,
            "error": "missing_required_fields",
            "fields": { "name": false, "category_id": false }
        });
        let result: ItemResult = serde_json::from_value(body).unwrap();
        assert_eq!(result.missing_fields(), vec!["category_id", "name"]);
        assert!(result.created_part().is_none());
    }
}
