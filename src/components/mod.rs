//! UI Components
//!
//! Leptos components of the item manager view.

mod health_badge;
mod item_list_view;
mod item_manager;
mod new_item_form;

pub use health_badge::HealthBadge;
pub use item_list_view::ItemListView;
pub use item_manager::ItemManager;
pub use new_item_form::NewItemForm;
