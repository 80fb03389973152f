use chrono::Local;
use log::{LevelFilter, Metadata, Record, SetLoggerError};

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_entry(&Local::now(), record));
        }
    }

    fn flush(&self) {}
}

fn format_entry<Tz: chrono::TimeZone>(time: &chrono::DateTime<Tz>, record: &Record) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{} {:<5} {}",
        time.format("%b %d %H:%M:%S"),
        record.level(),
        record.args()
    )
}
