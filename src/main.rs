#![allow(warnings)]
//! Chain Todo Frontend Entry Point

mod app;
mod chain;
mod components;
mod config;
mod context;
mod error;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
