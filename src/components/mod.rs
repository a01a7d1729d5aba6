//! UI Components
//!
//! Leptos components for the shopping-list surface.

mod clear_list_button;
mod list_view;
mod refresh_button;
mod search_bar;

pub use clear_list_button::ClearListButton;
pub use list_view::ShoppingListView;
pub use refresh_button::RefreshButton;
pub use search_bar::SearchBar;
