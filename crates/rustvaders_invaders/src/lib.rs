pub mod app;
pub mod machine;
pub mod sound;

pub use app::InvadersApp;
pub use machine::{DipSettings, InvadersMachine};

/// Logical screen width in pixels. The monitor is mounted rotated, so the
/// upright picture is 224 wide by 256 tall.
pub const SCREEN_WIDTH: usize = 224;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 256;
/// Default integer scale factor for the SDL2 window.
pub const SCREEN_SCALE: u32 = 3;
