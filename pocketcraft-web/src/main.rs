use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "Pocketcraft".to_owned(),
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    pocketcraft_web_lib::run().await;
}
