//! Binary entry point: read settings, start the log file, build the session
//! and drive the Ratatui event loop until the user exits.
use std::fs::{self, File};

use anyhow::{Context, Result};
use catworld::config::{data_dir, load_settings, Settings};
use catworld::{run_app, App, CatSession};
use simplelog::{ConfigBuilder, WriteLogger};

const LOG_FILE_NAME: &str = "catworld.log";

fn main() -> Result<()> {
    let settings = load_settings().context("failed to load configuration")?;
    init_logging(&settings);

    log::info!("CatWorld starting up");
    log::info!("settings: {}", settings.summary());
    let session = build_session(&settings)?;
    let mut app = App::new(session, settings.toast_duration);
    let result = run_app(&mut app);
    log::info!("CatWorld shutting down");
    result
}

/// The terminal owns stdout, so logs go to a file in the data directory. A
/// missing or unwritable directory just means no log file.
fn init_logging(settings: &Settings) {
    let Some(dir) = data_dir() else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(dir.join(LOG_FILE_NAME)) {
        let _ = WriteLogger::init(settings.log_level, log_config, log_file);
    }
}

fn build_session(settings: &Settings) -> Result<CatSession> {
    let session = settings
        .seed
        .map_or_else(CatSession::from_entropy, CatSession::with_seed)
        .context("built-in catalogs are invalid")?;
    Ok(session.with_volume(settings.volume))
}
