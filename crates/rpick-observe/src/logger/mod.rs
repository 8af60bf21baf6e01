mod config;
mod error;
mod log;
mod object;

pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use object::{LoggerFormat, LoggerLevel, LoggerTimeZone};

/// Installs the global tracing subscriber described by `cfg`.
///
/// Local timestamps need the UTC offset, which is detected here; call this
/// before starting a multi-threaded runtime, otherwise timestamps fall back to UTC.
///
/// # Examples
/// ```rust
/// use rpick_observe::{LoggerConfig, init_logger};
///
/// init_logger(&LoggerConfig::default()).expect("logger");
/// tracing::info!("logger ready");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    let offset = cfg.tz.offset();
    match cfg.format {
        LoggerFormat::Text => log::logger_text(cfg, offset),
        LoggerFormat::Json => log::logger_json(cfg, offset),
    }
}
