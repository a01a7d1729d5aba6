//! Shopping List View Component
//!
//! Ordered rows with quantity controls, per-row delete, and line subtotals.

use leptos::prelude::*;

use crate::store::{
    store_change_quantity, store_remove_item, use_app_store, AppStateStoreFields,
};

/// The ordered list of line items with its controls
#[component]
pub fn ShoppingListView() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul class="product-list">
            {move || {
                store.list().read().items().iter().cloned().enumerate().map(|(index, item)| {
                    let quantity = item.quantity;
                    let subtotal = item.subtotal();
                    view! {
                        <li class="list-item">
                            <div class="item-info">
                                <span class="item-name">{item.name}</span>
                                <span class="item-price">
                                    {format!("{}₽ × {} = {}₽", item.price, quantity, subtotal)}
                                </span>
                            </div>
                            <div class="item-actions">
                                <div class="quantity-controls">
                                    <button
                                        class="quantity-btn"
                                        on:click=move |_| store_change_quantity(&store, index, -1)
                                    >
                                        "−"
                                    </button>
                                    <span>{quantity}</span>
                                    <button
                                        class="quantity-btn"
                                        on:click=move |_| store_change_quantity(&store, index, 1)
                                    >
                                        "+"
                                    </button>
                                </div>
                                <button
                                    class="delete-btn"
                                    on:click=move |_| store_remove_item(&store, index)
                                >
                                    "×"
                                </button>
                            </div>
                        </li>
                    }
                }).collect_view()
            }}
        </ul>
    }
}
