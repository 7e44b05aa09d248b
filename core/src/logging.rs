//! Log sinks for request activity.
//!
//! A `Request` writes its progress lines to a `Logger`. Unless the caller
//! installs one, lines go to `TracingLogger`, which emits them as `tracing`
//! events under the `translate_core` target.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

pub trait Logger: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => tracing::debug!(target: "translate_core", "{message}"),
            LogLevel::Info => tracing::info!(target: "translate_core", "{message}"),
            LogLevel::Warn => tracing::warn!(target: "translate_core", "{message}"),
            LogLevel::Error => tracing::error!(target: "translate_core", "{message}"),
        }
    }
}

impl<F> Logger for F
where
    F: Fn(LogLevel, &str) + Send + Sync,
{
    fn log(&self, level: LogLevel, message: &str) {
        self(level, message)
    }
}
