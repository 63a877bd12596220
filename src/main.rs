use obsidian_landing::{config, greet, App};

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(config::get_log_level()) {
        gloo_console::error!("Failed to initialize logger:", e.to_string());
    }
    greet();
    yew::Renderer::<App>::new().render();
}
