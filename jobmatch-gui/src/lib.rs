use cfg_if::cfg_if;

pub mod app;
pub mod error_template;
#[cfg(feature = "ssr")]
pub mod fileserv;
pub mod pages;
pub mod widget;

cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        #[wasm_bindgen]
        pub fn hydrate() {
            use app::*;

            console_error_panic_hook::set_once();
            _ = console_log::init_with_level(log::Level::Debug);
            leptos::mount_to_body(App);
        }
    }
}
