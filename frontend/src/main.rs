use slot_frontend::{config, App};
use yew::Renderer;

fn main() {
    // Initialize the logger for WebAssembly
    wasm_logger::init(config::logger_config());

    Renderer::<App>::new().render();
}
