//! Country sets stored as fixed-width bitsets.
//!
//! A [`Countries`] value is encoded into a [`CountryBitset`] of four 64-bit
//! words and serialized as 32 big-endian bytes, suitable for a `BINARY(32)`
//! or BLOB column. Decoding reverses both steps.

use log::{LevelFilter, SetLoggerError};
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Root},
    encode::{pattern::PatternEncoder, Encode},
    filter::threshold::ThresholdFilter,
};
use std::{backtrace, env};

pub mod bitset;
pub mod constants;
pub mod countries;
pub mod country;
pub mod error;
pub mod traits;

pub use bitset::CountryBitset;
pub use countries::{random_countries, Countries};
pub use country::{domain_size, random_country, Country};
pub use error::{CodecError, Result};
pub use traits::FixedWidthColumn;

#[derive(Debug)]
struct BacktracePatternEncoder {
    pattern_encoder: PatternEncoder,
    is_backtrace_enabled: bool,
}

impl BacktracePatternEncoder {
    fn new(pattern: &str) -> Self {
        BacktracePatternEncoder {
            pattern_encoder: PatternEncoder::new(pattern),
            is_backtrace_enabled: env::var("RUST_BACKTRACE").is_ok()
                || env::var("RUST_LIB_BACKTRACE").is_ok(),
        }
    }
}

impl Encode for BacktracePatternEncoder {
    fn encode(
        &self,
        w: &mut dyn log4rs::encode::Write,
        record: &log::Record<'_>,
    ) -> anyhow::Result<()> {
        if record.level() == log::Level::Error && self.is_backtrace_enabled {
            let args = format_args!(
                "{}\nBacktrace:\n{}",
                record.args(),
                backtrace::Backtrace::capture()
            );
            let new_record = log::Record::builder()
                .args(args)
                .level(record.level())
                .target(record.target())
                .module_path(record.module_path())
                .file(record.file())
                .line(record.line())
                .build();
            self.pattern_encoder.encode(w, &new_record)?;
        } else {
            self.pattern_encoder.encode(w, record)?;
        }
        Ok(())
    }
}

/// Errors raised while installing the logger.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("could not open log file {path}: {source}")]
    File {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid logger configuration: {0}")]
    Config(#[from] log4rs::config::runtime::ConfigErrors),

    #[error("{0}")]
    SetLogger(#[from] SetLoggerError),
}

/// Installs a log4rs logger writing to stderr and, optionally, to a file.
///
/// Stderr only receives records at `log_level` or above.
pub fn initialize_logger(
    log_level: LevelFilter,
    file_path: Option<&str>,
) -> std::result::Result<(), LoggerError> {
    const LOGGING_PATTERN: &str = "{d} {l} {f}:{L} - {m}\n";

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(BacktracePatternEncoder::new(LOGGING_PATTERN)))
        .build();

    let mut config_builder = Config::builder().appender(
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(log_level)))
            .build("stderr", Box::new(stderr)),
    );
    let mut root = Root::builder().appender("stderr");

    if let Some(path) = file_path {
        // Pattern: https://docs.rs/log4rs/*/log4rs/encode/pattern/index.html
        let logfile = FileAppender::builder()
            .encoder(Box::new(BacktracePatternEncoder::new(LOGGING_PATTERN)))
            .build(path)
            .map_err(|source| LoggerError::File {
                path: path.to_string(),
                source,
            })?;

        config_builder =
            config_builder.appender(Appender::builder().build("logfile", Box::new(logfile)));
        root = root.appender("logfile");
    }

    let config = config_builder.build(root.build(log_level))?;
    let _handle = log4rs::init_config(config)?;

    Ok(())
}
