use anyhow::{Context, Result};

fn main() -> Result<()> {
    env_logger::init();

    let Some(rom_path) = std::env::args().nth(1) else {
        eprintln!(
            "No ROM path provided.\n\
             Usage: rustvaders path/to/invaders.rom"
        );
        std::process::exit(1);
    };

    log::info!("loading ROM '{rom_path}'");
    let rom =
        std::fs::read(&rom_path).with_context(|| format!("couldn't read ROM image {rom_path}"))?;

    rustvaders::run(&rom)
}
