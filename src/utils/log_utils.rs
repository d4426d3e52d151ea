use crate::config::AppConfig;
use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const LOG_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%S%.fZ)(utc)}::{l}::{t} {m}{n}";

/// Routes the `log` facade through log4rs (console, plus an append-only
/// file when configured) and installs a plain fmt subscriber for the
/// `tracing` events emitted by the HTTP layer.
pub fn init_logging(config: &AppConfig) -> Result<()> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let mut builder =
        Config::builder().appender(Appender::builder().build("stdout", Box::new(stdout)));
    let mut root = Root::builder().appender("stdout");

    if let Some(path) = &config.log_file {
        let file = FileAppender::builder()
            .append(true)
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    let log_config = builder
        .build(root.build(config.log_level))
        .context("Invalid logging configuration")?;
    log4rs::init_config(log_config).context("Logger already initialized")?;

    // log is owned by log4rs, so the subscriber must not bridge it
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing_level(config.log_level))
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Tracing subscriber already initialized")?;

    Ok(())
}

fn tracing_level(level: LevelFilter) -> tracing::level_filters::LevelFilter {
    use tracing::level_filters::LevelFilter as Tracing;
    match level {
        LevelFilter::Off => Tracing::OFF,
        LevelFilter::Error => Tracing::ERROR,
        LevelFilter::Warn => Tracing::WARN,
        LevelFilter::Info => Tracing::INFO,
        LevelFilter::Debug => Tracing::DEBUG,
        LevelFilter::Trace => Tracing::TRACE,
    }
}
