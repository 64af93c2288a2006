// Path: crates/telemetry/src/init.rs
use std::fmt;
use std::str::FromStr;
use tracing_subscriber::{fmt as tfmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

/// Output encoding of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Human-readable, multi-field lines.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" | "text" => Ok(Self::Pretty),
            other => Err(anyhow::anyhow!("unknown log format '{}'", other)),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Pretty => f.write_str("pretty"),
        }
    }
}

/// Initializes the global `tracing` subscriber for structured JSON logging at `info`.
pub fn init_tracing() -> Result<(), anyhow::Error> {
    init_tracing_with(LogFormat::Json, "info")
}

/// Initializes the global subscriber. `RUST_LOG` overrides `default_directive`.
///
/// Records emitted through the `log` crate are forwarded into `tracing`.
/// Fails if a global subscriber is already installed.
pub fn init_tracing_with(format: LogFormat, default_directive: &str) -> Result<(), anyhow::Error> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let fmt_layer = match format {
        LogFormat::Json => tfmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_timer(tfmt::time::UtcTime::rfc_3339())
            .boxed(),
        LogFormat::Pretty => tfmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_timer(tfmt::time::UtcTime::rfc_3339())
            .boxed(),
    };
    let subscriber = Registry::default().with(filter).with(fmt_layer);
    tracing_log::LogTracer::init()?;
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
