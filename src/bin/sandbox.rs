//! Tile-placement sandbox entry point

use macroquad::prelude::*;
use quadcade::sandbox;

fn window_conf() -> Conf {
    sandbox::window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    sandbox::run().await;
}
