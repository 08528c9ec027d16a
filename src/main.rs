use std::path::Path;

use crema::{Options, Viewer};

/// Usage: `crema [frames-dir] [options.toml]`
///
/// Both arguments are optional; a missing frames directory simply leaves
/// the flip-book background empty.
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let frames_dir = args.next();
    let options_path = args.next();

    let mut options = options_path.map_or_else(Options::default, |path| {
        Options::load(Path::new(&path)).unwrap_or_else(|e| {
            log::warn!("failed to load options from {path}: {e}; using defaults");
            Options::default()
        })
    });
    if let Some(dir) = frames_dir {
        options.playback.frames_dir = dir;
    }

    if let Err(e) = Viewer::builder()
        .with_options(options)
        .with_title("CoffeeOn")
        .build()
        .run()
    {
        log::error!("viewer exited with error: {e}");
        std::process::exit(1);
    }
}
