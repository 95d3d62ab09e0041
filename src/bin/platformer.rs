//! Single-screen platformer entry point

use macroquad::prelude::*;
use quadcade::platformer;

fn window_conf() -> Conf {
    platformer::window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    platformer::run().await;
}
