mod format;
pub use format::LoggerFormat;

mod level;
pub use level::LoggerLevel;

mod rfc3339;
pub(crate) use rfc3339::LoggerRfc3339;

mod timezone;
pub use timezone::LoggerTimeZone;
