//! Page Configuration
//!
//! Settings the server embeds into the page as `window.BULKPRODUCTS`.

use leptos::logging::{log, warn};
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::{UiError, UiResult};
use crate::models::Category;

/// Name of the global object holding the page configuration
pub const CONFIG_GLOBAL: &str = "BULKPRODUCTS";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageConfig {
    pub categories: Vec<Category>,
    /// Applied by the server to rows without a location (0 = none)
    pub default_location_id: u32,
    pub api_url: String,
    pub search_locations_url: String,
    /// Token used when the `csrftoken` cookie is absent
    pub csrf: String,
}

impl PageConfig {
    pub fn default_location(&self) -> Option<u32> {
        (self.default_location_id > 0).then_some(self.default_location_id)
    }

    pub fn fallback_csrf(&self) -> Option<&str> {
        Some(self.csrf.as_str()).filter(|token| !token.is_empty())
    }
}

/// Read the page configuration, falling back to defaults when the global
/// is missing or malformed.
pub fn load_page_config() -> PageConfig {
    match read_global() {
        Ok(config) => {
            log!(
                "[CONFIG] Loaded {} categories, api={}",
                config.categories.len(),
                config.api_url
            );
            config
        }
        Err(err) => {
            warn!("[CONFIG] {err}; using defaults");
            PageConfig::default()
        }
    }
}

fn read_global() -> UiResult<PageConfig> {
    let window = web_sys::window().ok_or_else(|| UiError::Config("no window".to_string()))?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| UiError::Config(format!("{e:?}")))?;

    if value.is_undefined() || value.is_null() {
        return Err(UiError::Config(format!("window.{CONFIG_GLOBAL} is not set")));
    }

    serde_wasm_bindgen::from_value(value).map_err(|e| UiError::Config(e.to_string()))
}
