//! Product Rows
//!
//! One in-progress product entry per table row.

use crate::form::location::LocationSearch;
use crate::models::ProductItem;

/// Opaque row handle used for keyed rendering and addressing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub(crate) u32);

/// Initial text of the quantity input
pub const DEFAULT_QUANTITY: &str = "0";

/// Editable fields of a row (location is edited through [`LocationSearch`])
#[derive(Debug, Clone, PartialEq)]
pub enum RowField {
    /// Raw select value, `""` for the placeholder option
    Category(String),
    Name(String),
    Description(String),
    Ipn(String),
    /// Raw number-input text
    Quantity(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowDraft {
    pub id: RowId,
    pub category_id: Option<u32>,
    pub name: String,
    pub description: String,
    pub ipn: String,
    pub quantity: String,
    pub location: LocationSearch,
}

impl RowDraft {
    pub fn new(id: RowId) -> Self {
        Self {
            id,
            category_id: None,
            name: String::new(),
            description: String::new(),
            ipn: String::new(),
            quantity: DEFAULT_QUANTITY.to_string(),
            location: LocationSearch::default(),
        }
    }

    pub fn apply(&mut self, field: RowField) {
        match field {
            RowField::Category(raw) => self.category_id = parse_id(&raw),
            RowField::Name(value) => self.name = value,
            RowField::Description(value) => self.description = value,
            RowField::Ipn(value) => self.ipn = value,
            RowField::Quantity(raw) => self.quantity = raw,
        }
    }

    /// Payload entry for this row
    pub fn to_item(&self) -> ProductItem {
        ProductItem {
            category_id: self.category_id,
            name: self.name.clone(),
            description: self.description.clone(),
            ipn: self.ipn.clone(),
            quantity: parse_quantity(&self.quantity),
            location_id: self.location.selected_id,
        }
    }
}

/// Select/hidden-field value to id; blank or non-numeric means none
pub fn parse_id(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Number-input text to quantity; blank or non-numeric means 0
pub fn parse_quantity(raw: &str) -> i64 {
    let raw = raw.trim();
    raw.parse::<i64>()
        .or_else(|_| raw.parse::<f64>().map(|q| q.trunc() as i64))
        .unwrap_or(0)
}
