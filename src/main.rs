// Theme Gradients CLI
// Adds a derived gradientHeader to every JSON theme file in a directory

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};

use theme_gradients::services::ThemeGradientUpdater;

const DEFAULT_THEMES_DIR: &str = "src/themes";

struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = Local::now();
        let date = timestamp.format("%Y-%m-%d");
        let time = timestamp.format("%H:%M:%S");
        let target = record.target();
        let level = record.level();
        eprintln!("[{date}][{time}][{target}][{level}] {}", record.args());
    }

    fn flush(&self) {}
}

fn init_logger() -> Result<(), log::SetLoggerError> {
    log::set_boxed_logger(Box::new(StderrLogger {
        level: LevelFilter::Info,
    }))?;
    log::set_max_level(LevelFilter::Info);
    Ok(())
}

fn main() -> ExitCode {
    if init_logger().is_err() {
        eprintln!("Failed to install logger");
    }

    let themes_dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_THEMES_DIR));

    log::info!("Updating theme gradients in {:?}", themes_dir);

    let updater = ThemeGradientUpdater::new(themes_dir);
    match updater.update_all() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Theme update failed: {e}");
            ExitCode::FAILURE
        }
    }
}
