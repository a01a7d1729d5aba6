//! Shopping List App
//!
//! Root component: provides the store and lays out the search bar, the
//! list, the running total, and the refresh/clear controls.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ClearListButton, RefreshButton, SearchBar, ShoppingListView};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // Catalog seeded, list restored from the previous session.
    let store = Store::new(AppState::new());
    provide_context(store);

    let (notice, set_notice) = signal::<Option<String>>(None);

    view! {
        <div class="app-layout">
            <h1>"Список покупок"</h1>

            <SearchBar />

            <ShoppingListView />

            <p class="total-row">
                "Итого: "
                // Derived fresh from the list on every render, never cached.
                {move || format!("{:.2}₽", store.list().read().total())}
            </p>

            {move || notice.get().map(|text| view! {
                <p class="error-notice">{text}</p>
            })}

            <div class="toolbar">
                <RefreshButton set_notice=set_notice />
                <ClearListButton />
            </div>
        </div>
    }
}
