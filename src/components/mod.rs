//! UI Components
//!
//! Leptos components rendering the bulk form.

mod alert_banner;
mod category_select;
mod created_parts_list;
mod location_picker;
mod product_row;
mod result_panel;

pub use alert_banner::AlertBanner;
pub use category_select::CategorySelect;
pub use created_parts_list::CreatedPartsList;
pub use location_picker::LocationPicker;
pub use product_row::ProductRow;
pub use result_panel::ResultPanel;
