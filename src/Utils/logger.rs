//! Terminal (and optionally file) logging through `simplelog`.
use chrono::Local;
use log::info;
use simplelog::*;
use std::fs::File;
use std::io;
use std::path::PathBuf;

use crate::errors::ValidationError;

#[derive(Debug, Clone, PartialEq)]
pub struct LogSettings {
    pub level: LevelFilter,
    /// also write the log to a file
    pub to_file: bool,
    /// file name, `log_<date>_<time>.txt` when not given
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            level: LevelFilter::Info,
            to_file: false,
            file: None,
        }
    }
}

/// loglevel must be debug, info, warn, error or off (none)
pub fn parse_level(level: &str) -> Result<LevelFilter, ValidationError> {
    match level.trim().to_lowercase().as_str() {
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        "off" | "none" => Ok(LevelFilter::Off),
        other => Err(ValidationError::InvalidSetting {
            key: "loglevel".to_string(),
            message: format!("'{}', must be debug, info, warn, error or off", other),
        }),
    }
}

pub fn default_log_file_name() -> PathBuf {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    PathBuf::from(format!("log_{}.txt", date_and_time))
}

/// Installs the global logger. Returns `Ok(false)` when logging is off or a logger was
/// already installed (tests, repeated calls); only creating the log file can fail.
pub fn init_logger(settings: &LogSettings) -> io::Result<bool> {
    if settings.level == LevelFilter::Off {
        return Ok(false);
    }
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        settings.level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if settings.to_file {
        let name = settings.file.clone().unwrap_or_else(default_log_file_name);
        loggers.push(WriteLogger::new(
            settings.level,
            Config::default(),
            File::create(&name)?,
        ));
    }
    match CombinedLogger::init(loggers) {
        Ok(()) => {
            info!("Program started with loglevel: {}", settings.level);
            Ok(true)
        }
        Err(_) => Ok(false),
    }
}
