pub mod app;
pub mod calendar_link;
pub mod catalog;
pub mod league;
pub mod selection;

#[cfg(feature = "ssr")]
pub mod server;

use wasm_bindgen::prelude::wasm_bindgen;

/// Browser entry point: hydrates `<App/>` over the page shell served by the `ssr` host.
#[wasm_bindgen]
pub fn hydrate() {
    #[cfg(feature = "hydrate")]
    {
        use crate::app::App;

        // Panics go to the browser console instead of an opaque "unreachable".
        console_error_panic_hook::set_once();

        _ = console_log::init_with_level(log::Level::Debug);

        leptos::mount::hydrate_body(App);
    }
}
