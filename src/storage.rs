//! Local Persistence
//!
//! The shopping list lives under one `localStorage` key and is rewritten
//! wholesale after every mutation. Anything unreadable at startup is
//! treated as an empty list.

use crate::list::ShoppingList;
use crate::models::LineItem;

const STORAGE_KEY: &str = "shoppingList";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Decode a persisted payload, falling back to an empty list on any
/// malformed content.
pub fn parse_saved(raw: &str) -> Vec<LineItem> {
    serde_json::from_str(raw).unwrap_or_default()
}

/// Load the shopping list saved by a previous session.
///
/// Missing key, inaccessible storage, or corrupt JSON all yield an empty
/// list; startup never fails on persisted state.
pub fn load() -> ShoppingList {
    let items = local_storage()
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
        .map(|raw| parse_saved(&raw))
        .unwrap_or_default();
    ShoppingList::from_items(items)
}

/// Overwrite the persisted list with the current state.
pub fn save(list: &ShoppingList) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Ok(json) = serde_json::to_string(list.items()) {
        let _ = storage.set_item(STORAGE_KEY, &json);
    }
}
