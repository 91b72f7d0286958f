use log::{info, warn};
use yew::prelude::*;

mod config;
mod content;
mod error;
mod meta;
mod components;
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Only fails when a logger is already installed.
    let _ = console_log::init_with_level(config::log_level());

    match web_sys::window().and_then(|w| w.document()) {
        Some(document) => meta::apply_to_document(&document),
        None => warn!("no document, skipping metadata"),
    }

    info!("Starting {}", content::BRAND);
    yew::Renderer::<App>::new().render();
}
