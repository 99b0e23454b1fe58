// src/main.rs
mod ui;

use gloo::console::log;
use ui::app::App;

fn main() {
    console_error_panic_hook::set_once();
    log!(format!("HexKit {} starting", env!("CARGO_PKG_VERSION")));

    match gloo::utils::document().get_element_by_id("app") {
        Some(root) => yew::Renderer::<App>::with_root(root).render(),
        None => yew::Renderer::<App>::new().render(),
    };
}
