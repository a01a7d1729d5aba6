//! Clear List Button Component
//!
//! Inline two-step confirmation for emptying the whole list.

use leptos::prelude::*;

use crate::store::{store_clear_list, use_app_store};

/// "Clear list" button that asks for confirmation before acting
#[component]
pub fn ClearListButton() -> impl IntoView {
    let store = use_app_store();
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                class="clear-btn"
                on:click=move |_| set_confirming.set(true)
            >
                "Очистить список"
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="clear-confirm">
                <span class="clear-confirm-text">"Очистить весь список?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |_| {
                        store_clear_list(&store);
                        set_confirming.set(false);
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |_| set_confirming.set(false)
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
