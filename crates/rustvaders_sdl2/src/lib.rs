use anyhow::{Error, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use typed_builder::TypedBuilder;

use rustvaders_common::app::App;
use rustvaders_common::key::Key;

pub use sdl2;

/// Bytes per pixel of the RGB24 screen buffer handed to `App::update`.
const BYTES_PER_PIXEL: u32 = 3;

/// Window parameters the frontend needs before it can open a display.
#[derive(TypedBuilder)]
pub struct SdlInitInfo {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub title: String,
}

pub struct SdlContext;

impl SdlContext {
    /// Open a window and drive the app until it asks to exit or the window
    /// closes. Blocks for the lifetime of the window.
    pub fn run(init: SdlInitInfo, mut app: impl App) -> Result<()> {
        let SdlInitInfo {
            width,
            height,
            scale,
            title,
        } = init;

        let sdl = sdl2::init().map_err(Error::msg)?;
        let video = sdl.video().map_err(Error::msg)?;
        let window = video
            .window(&title, width * scale, height * scale)
            .position_centered()
            .build()?;
        log::debug!("opened {width}x{height} window at scale {scale}");
        let mut canvas = window.into_canvas().present_vsync().build()?;
        canvas
            .set_scale(scale as f32, scale as f32)
            .map_err(Error::msg)?;

        let creator = canvas.texture_creator();
        let mut texture =
            creator.create_texture_streaming(PixelFormatEnum::RGB24, width, height)?;

        let mut event_pump = sdl.event_pump().map_err(Error::msg)?;
        let mut screen = vec![0u8; (width * height * BYTES_PER_PIXEL) as usize];

        app.init();
        'running: loop {
            for event in event_pump.poll_iter() {
                match event {
                    Event::Quit { .. } => break 'running,
                    Event::KeyDown {
                        keycode: Some(keycode),
                        ..
                    } => app.handle_key_event(map_keycode(keycode), true),
                    Event::KeyUp {
                        keycode: Some(keycode),
                        ..
                    } => app.handle_key_event(map_keycode(keycode), false),
                    _ => {}
                }
            }

            if app.should_exit() {
                break;
            }

            app.update(&mut screen);
            texture.update(None, &screen, (width * BYTES_PER_PIXEL) as usize)?;
            canvas.copy(&texture, None, None).map_err(Error::msg)?;
            canvas.present();
        }

        app.exit();
        Ok(())
    }
}

pub fn map_keycode(keycode: Keycode) -> Key {
    match keycode {
        Keycode::Num1 => Key::Num1,
        Keycode::Num2 => Key::Num2,
        Keycode::A => Key::A,
        Keycode::C => Key::C,
        Keycode::D => Key::D,
        Keycode::J => Key::J,
        Keycode::K => Key::K,
        Keycode::L => Key::L,
        Keycode::P => Key::P,
        Keycode::S => Key::S,
        Keycode::T => Key::T,
        Keycode::Space => Key::Space,
        Keycode::Left => Key::Left,
        Keycode::Right => Key::Right,
        Keycode::Escape => Key::Escape,
        _ => Key::None,
    }
}
