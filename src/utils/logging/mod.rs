//! Logging utilities
//!
//! Builds the `tracing` subscriber. `RUST_LOG` takes precedence over the
//! configured level. Logs go to stderr so stdout carries only command output.

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{AccessError, Result};
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Install the global tracing subscriber described by `config`, writing to stderr
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    tracing::subscriber::set_global_default(subscriber(config, std::io::stderr))
        .map_err(|e| AccessError::config(format!("Failed to install tracing subscriber: {}", e)))
}

/// Build the subscriber described by `config` on top of `writer`
pub fn subscriber<W>(config: &LoggingConfig, writer: W) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_ansi(false)
        .with_writer(writer);

    match config.format {
        LogFormat::Json => Box::new(builder.json().finish()),
        LogFormat::Text => Box::new(builder.finish()),
    }
}

/// In-memory log sink shared between a subscriber and a test
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

#[cfg(test)]
impl CapturedLogs {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub(crate) fn subscriber(&self, level: &str) -> Box<dyn Subscriber + Send + Sync> {
        let config = LoggingConfig {
            level: level.to_string(),
            ..LoggingConfig::default()
        };
        let sink = self.clone();
        subscriber(&config, move || sink.clone())
    }
}

#[cfg(test)]
impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
