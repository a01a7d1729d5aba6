//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every list
//! mutation goes through a helper here so the persisted copy is rewritten
//! immediately after the change; re-render follows from store reactivity.

use std::collections::BTreeMap;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::Catalog;
use crate::list::ShoppingList;
use crate::storage;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// Product catalog, seeded then merge-refreshed
    pub catalog: Catalog,
    /// The user's shopping list
    pub list: ShoppingList,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::seed(),
            list: storage::load(),
        }
    }
}

/// Apply a refresh outcome to the application state.
///
/// Success merges the new prices into the catalog and re-prices the list;
/// a failed refresh hands the error back with the state untouched.
pub fn apply_refresh(
    state: &mut AppState,
    outcome: Result<BTreeMap<String, f64>, String>,
) -> Result<(), String> {
    let prices = outcome?;
    state.catalog.merge(&prices);
    state.list.reprice(&state.catalog);
    Ok(())
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

fn persist(store: &AppStore) {
    storage::save(&store.list().read());
}

/// Add a product to the list (or bump its quantity), then persist
pub fn store_add_item(store: &AppStore, name: &str, price: f64) {
    store.list().write().add_or_increment(name, price);
    persist(store);
}

/// Adjust the quantity at `index` by `delta`, then persist
pub fn store_change_quantity(store: &AppStore, index: usize, delta: i32) {
    store.list().write().change_quantity(index, delta);
    persist(store);
}

/// Delete the item at `index`, then persist
pub fn store_remove_item(store: &AppStore, index: usize) {
    store.list().write().remove(index);
    persist(store);
}

/// Empty the whole list, then persist
pub fn store_clear_list(store: &AppStore) {
    store.list().write().clear();
    persist(store);
}

/// Apply a refresh outcome to the store; only a successful one is persisted
pub fn store_apply_refresh(
    store: &AppStore,
    outcome: Result<BTreeMap<String, f64>, String>,
) -> Result<(), String> {
    apply_refresh(&mut store.write(), outcome)?;
    persist(store);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_items() -> AppState {
        let mut state = AppState {
            catalog: Catalog::seed(),
            list: ShoppingList::default(),
        };
        state.list.add_or_increment("Хлеб белый", 40.0);
        state.list.add_or_increment("Самодельный пирог", 250.0);
        state
    }

    #[test]
    fn failed_refresh_leaves_state_untouched() {
        let mut state = state_with_items();
        let before = state.clone();

        let outcome = apply_refresh(&mut state, Err("fetch failed: timeout".to_string()));

        assert!(outcome.is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn successful_refresh_merges_and_reprices() {
        let mut state = state_with_items();

        let mut prices = BTreeMap::new();
        prices.insert("Хлеб белый".to_string(), 44.0);
        apply_refresh(&mut state, Ok(prices)).unwrap();

        assert_eq!(state.catalog.price_of("Хлеб белый"), Some(44.0));
        assert_eq!(state.list.items()[0].price, 44.0);
        // Not in the catalog, keeps its last known price.
        assert_eq!(state.list.items()[1].price, 250.0);
    }
}
