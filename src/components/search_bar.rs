//! Search Bar Component
//!
//! Text input with a suggestion panel over the product catalog. Clicking a
//! suggestion adds it to the list; the `+` button adds whatever was typed,
//! priced from the catalog when the name is known.

use leptos::prelude::*;

use crate::store::{
    store_add_item, use_app_store, AppStateStoreFields,
};

/// Catalog search input with a suggestion panel (up to 10 matches)
#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();
    let (query, set_query) = signal(String::new());

    // Recomputed on every keystroke; empty query means no panel at all.
    let suggestions = move || {
        let term = query.get();
        let term = term.trim();
        if term.is_empty() {
            return Vec::new();
        }
        store.catalog().read().search(term)
    };

    let add_and_reset = move |name: &str, price: f64| {
        store_add_item(&store, name, price);
        set_query.set(String::new());
    };

    // `+` or Enter: add the typed name verbatim, catalog price if known.
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let typed = query.get();
        let name = typed.trim();
        if name.is_empty() {
            return;
        }
        let price = store.catalog().read().price_of(name).unwrap_or(0.0);
        add_and_reset(name, price);
    };

    view! {
        <div class="search-wrapper">
            <form class="search-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Поиск продукта..."
                    autocomplete="off"
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <button type="submit" title="Добавить в список">"+"</button>
            </form>

            {move || {
                if query.get().trim().is_empty() {
                    return view! { <div></div> }.into_any();
                }
                let matches = suggestions();
                if matches.is_empty() {
                    view! {
                        <div class="search-results">
                            <div class="no-results">
                                "Продукт не найден. Нажмите +, чтобы добавить новый."
                            </div>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="search-results">
                            {matches.into_iter().map(|entry| {
                                let name = entry.name.clone();
                                let price = entry.price;
                                view! {
                                    <button
                                        type="button"
                                        class="search-result-item"
                                        on:click=move |_| add_and_reset(&name, price)
                                    >
                                        <span class="product-name">{entry.name}</span>
                                        <span class="product-price">{format!("{price}₽")}</span>
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
