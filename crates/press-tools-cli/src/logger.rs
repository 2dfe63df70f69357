use chrono::Local;
use log::{Level, Metadata, Record};
use std::io::Write;

/// Timestamped logger writing to stderr, so stdout stays clean for results
pub struct CliLogger {
    level: Level,
}

impl CliLogger {
    /// `0` shows warnings, `1` adds info, `2` or more adds debug
    pub fn new(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::Warn,
            1 => Level::Info,
            _ => Level::Debug,
        };
        Self { level }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let max_level = self.level.to_level_filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl log::Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut stderr = std::io::stderr().lock();
            // Nowhere left to report a failed write to stderr
            let _ = writeln!(
                stderr,
                "{} {:<5} {}: {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
