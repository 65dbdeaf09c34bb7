//! UI Components
//!
//! Leptos components for the home page and the CreatePoint form.

mod home;
mod page_header;
mod contact_fieldset;
mod location_picker;
mod geography_selects;
mod items_grid;
mod create_point;

pub use home::Home;
pub use page_header::PageHeader;
pub use contact_fieldset::ContactFieldset;
pub use location_picker::LocationPicker;
pub use geography_selects::{UfSelect, CitySelect};
pub use items_grid::ItemsGrid;
pub use create_point::CreatePoint;
