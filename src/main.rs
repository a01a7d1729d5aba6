#![allow(warnings)]
//! Shopping List Frontend Entry Point

mod api;
mod app;
mod catalog;
mod components;
mod list;
mod models;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
