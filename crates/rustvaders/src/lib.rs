use anyhow::Result;
use rustvaders_common::app::App;
use rustvaders_invaders::InvadersApp;
use rustvaders_sdl2::{SdlContext, SdlInitInfo};

/// Boot the machine with the given ROM image and run it under SDL2 until
/// the window closes.
pub fn run(rom: &[u8]) -> Result<()> {
    let mut app = InvadersApp::default();
    app.machine.load_rom(rom);

    let init = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(app.scale())
        .title(app.title())
        .build();
    SdlContext::run(init, app)
}
