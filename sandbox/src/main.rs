use macroquad::prelude::*;

use tumble::control::{FrameInput, KeyMap};
use tumble::world::World;

mod assets;
mod config;
mod overlay;

use assets::Assets;
use config::SandboxConfig;
use overlay::Overlay;

const WIDTH: i32 = 800;
const HEIGHT: i32 = 600;

fn window_conf() -> Conf {
    Conf {
        window_title: "box sandbox".to_owned(),
        window_width: WIDTH,
        window_height: HEIGHT,
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = SandboxConfig::load("sandbox.json");
    let assets = Assets::load(&config);
    let keymap = KeyMap::sandbox_defaults();

    let mut world = World::new(Vec2::new(WIDTH as f32, HEIGHT as f32));
    config.apply(&mut world);
    world.reset(assets.body_texture);

    let mut overlay = Overlay::new(assets.label_font);

    loop {
        let input = FrameInput::poll(&keymap);
        if input.wants_quit() {
            break;
        }

        world.step(get_frame_time(), &input, assets.body_texture);
        if input.wheel != 0.0 {
            info!("bounciness {:.2}", world.collision.bounce_damping);
        }
        overlay.track(&world);

        clear_background(BLACK);
        for body in world.bodies.iter() {
            draw_texture_ex(
                body.visual,
                body.pos.x,
                body.pos.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(body.size),
                    ..Default::default()
                },
            );
        }
        overlay.draw(&world);

        next_frame().await;
    }
}
