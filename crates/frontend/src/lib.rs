//! WeeWoolies - Yew WASM Frontend
//!
//! This crate provides the web UI: the landing page with its placeholder
//! login, and the five module pages rendered inside the navigation shell.

mod app;
mod components;
mod context;
mod logging;
mod pages;

pub use app::{App, Route};

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    logging::init();
    yew::Renderer::<App>::new().render();
}
