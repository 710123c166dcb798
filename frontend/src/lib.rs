use log::info;

pub mod api;
pub mod components;
pub mod config;
mod pages;
pub mod router;
pub mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    info!("Starting MentorHub frontend (wasm)");

    // Resolve the API base URL early; requests await the same cached value.
    leptos::spawn_local(async move {
        let base_url = config::await_api_base_url().await;
        info!("Runtime config initialized (api: {})", base_url);
    });

    router::mount_app();
}
