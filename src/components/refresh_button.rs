//! Refresh Prices Button Component
//!
//! Trigger for the one asynchronous operation in the app. Disabled while a
//! request is in flight so a second refresh cannot overlap the first.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::store::{store_apply_refresh, use_app_store};

/// "Refresh prices" trigger with an in-flight state
///
/// On failure the catalog and list are left untouched and a notice is
/// published through `set_notice`; the button always ends up enabled again.
#[component]
pub fn RefreshButton(set_notice: WriteSignal<Option<String>>) -> impl IntoView {
    let store = use_app_store();
    let (refreshing, set_refreshing) = signal(false);

    let on_refresh = move |_| {
        if refreshing.get() {
            return;
        }
        set_refreshing.set(true);
        set_notice.set(None);

        spawn_local(async move {
            if let Err(err) = store_apply_refresh(&store, api::fetch_prices().await) {
                web_sys::console::error_1(
                    &format!("Error updating prices: {err}").into(),
                );
                set_notice.set(Some(
                    "Ошибка при обновлении цен. Пожалуйста, попробуйте позже."
                        .to_string(),
                ));
            }
            set_refreshing.set(false);
        });
    };

    view! {
        <button
            class="refresh-btn"
            disabled=move || refreshing.get()
            on:click=on_refresh
        >
            {move || if refreshing.get() { "Обновление..." } else { "Обновить цены" }}
        </button>
    }
}
