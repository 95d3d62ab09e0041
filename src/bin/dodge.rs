//! Lane dodger entry point

use macroquad::prelude::*;
use quadcade::dodge;

fn window_conf() -> Conf {
    dodge::window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    dodge::run().await;
}
