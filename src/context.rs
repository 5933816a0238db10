//! Application Context
//!
//! Form store and page configuration provided via Leptos Context API.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::PageConfig;
use crate::form::BulkForm;

/// Type alias for the form store
pub type FormStore = Store<BulkForm>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct FormContext {
    pub store: FormStore,
    pub config: StoredValue<PageConfig>,
}

impl FormContext {
    pub fn new(config: PageConfig) -> Self {
        Self {
            store: Store::new(BulkForm::new()),
            config: StoredValue::new(config),
        }
    }

    pub fn api_url(&self) -> String {
        self.config.with_value(|c| c.api_url.clone())
    }

    pub fn search_locations_url(&self) -> String {
        self.config.with_value(|c| c.search_locations_url.clone())
    }
}

/// Get the form context
pub fn use_form_context() -> FormContext {
    expect_context::<FormContext>()
}
