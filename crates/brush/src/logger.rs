//! Logger for Brush: timestamped lines on stderr, optionally mirrored to a file.

use anyhow::{Context, Result};
use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

pub struct BrushLogger {
    level: LevelFilter,
    file: Option<Mutex<File>>,
}

impl BrushLogger {
    /// Create a logger. When `log_file` is given it is created if needed and appended to.
    pub fn new(level: LevelFilter, log_file: Option<&Path>) -> Result<Self> {
        let file = match log_file {
            Some(path) => {
                if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                    std::fs::create_dir_all(dir).with_context(|| {
                        format!("Failed to create log directory: {}", dir.display())
                    })?;
                }
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("Failed to open log file: {}", path.display()))?;
                Some(Mutex::new(file))
            }
            None => None,
        };

        Ok(Self { level, file })
    }

    /// Install as the global logger.
    pub fn init(level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
        let logger = Self::new(level, log_file)?;

        log::set_boxed_logger(Box::new(logger))
            .map(|()| log::set_max_level(level))
            .map_err(|e| anyhow::anyhow!("Failed to set logger: {}", e))?;

        if let Some(path) = log_file {
            log::info!("Log file: {}", path.display());
        }
        Ok(())
    }

    fn write_line(&self, line: &str) {
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                // A failed log write must not take the UI down with it.
                let _ = writeln!(file, "{}", line);
                let _ = file.flush();
            }
        }
        eprintln!("{}", line);
    }
}

impl Log for BrushLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
            let line = format_line(&timestamp, record.level(), record.target(), record.args());
            self.write_line(&line);
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

fn format_line(timestamp: &str, level: Level, target: &str, message: &fmt::Arguments) -> String {
    format!("{} {} [{}] {}", timestamp, level, target, message)
}
