use chrono::Utc;
use colored::Colorize;
use std::io::Write;

struct StderrLog;

impl log::Log for StderrLog {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = match record.level() {
            log::Level::Error => "ERROR".red(),
            log::Level::Warn => "WARN".yellow(),
            log::Level::Info => "INFO".green(),
            log::Level::Debug => "DEBUG".blue(),
            log::Level::Trace => "TRACE".dimmed(),
        };
        eprintln!(
            "{} {level} [{}] {}",
            Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Routes `log` records to stderr.
pub fn install_log_sink(max_level: log::LevelFilter) {
    static LOG_SINK: StderrLog = StderrLog;
    log::set_max_level(max_level);
    if let Err(e) = log::set_logger(&LOG_SINK) {
        eprintln!("Could not set log crate dispatcher {e:?}");
        log::set_max_level(log::LevelFilter::Off);
    }
}
