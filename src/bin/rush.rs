//! Scrolling runner entry point

use macroquad::prelude::*;
use quadcade::rush;

fn window_conf() -> Conf {
    rush::window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    rush::run().await;
}
