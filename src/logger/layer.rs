//! Routing `tracing` events into a [`Logger`]
//!
//! Installing the logger as a layer lets events emitted with the `tracing`
//! macros, including the dispatcher's own debug events, land in the same sinks
//! as direct calls:
//!
//! ```no_run
//! use restkit::logger::{Logger, LoggerConfig};
//! use tracing_subscriber::layer::SubscriberExt;
//!
//! # fn main() -> restkit::errors::Result<()> {
//! let logger = Logger::new(&LoggerConfig::from_env())?;
//! let subscriber = tracing_subscriber::registry().with(logger);
//! tracing::subscriber::set_global_default(subscriber).ok();
//! # Ok(())
//! # }
//! ```

use std::fmt;

use tracing::field::{Field as TracingField, Visit};
use tracing::{Event, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use super::field::Field;
use super::level::LogLevel;
use super::structured::Logger;
use super::StructuredLog;

const MESSAGE_FIELD: &str = "message";
const TARGET_KEY: &str = "target";

/// Collects an event's message and fields
#[derive(Default)]
struct EventVisitor {
    message: String,
    fields: Vec<Field>,
}

impl EventVisitor {
    fn push(&mut self, field: &TracingField, value: impl Into<serde_json::Value>) {
        self.fields.push(Field::new(field.name(), value));
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &TracingField, value: &dyn fmt::Debug) {
        let rendered = format!("{:?}", value);
        if field.name() == MESSAGE_FIELD {
            self.message = rendered;
        } else {
            self.push(field, rendered);
        }
    }

    fn record_str(&mut self, field: &TracingField, value: &str) {
        if field.name() == MESSAGE_FIELD {
            self.message = value.to_string();
        } else {
            self.push(field, value);
        }
    }

    fn record_i64(&mut self, field: &TracingField, value: i64) {
        self.push(field, value);
    }

    fn record_u64(&mut self, field: &TracingField, value: u64) {
        self.push(field, value);
    }

    fn record_f64(&mut self, field: &TracingField, value: f64) {
        self.push(field, value);
    }

    fn record_bool(&mut self, field: &TracingField, value: bool) {
        self.push(field, value);
    }

    fn record_error(&mut self, field: &TracingField, value: &(dyn std::error::Error + 'static)) {
        self.push(field, value.to_string());
    }
}

impl<S: Subscriber> Layer<S> for Logger {
    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        self.is_enabled(LogLevel::from_tracing(metadata.level()))
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = LogLevel::from_tracing(metadata.level());
        if !self.is_enabled(level) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        // An event's own `target` field takes precedence over the metadata.
        if !visitor.fields.iter().any(|f| f.key() == TARGET_KEY) {
            visitor.fields.push(Field::new(TARGET_KEY, metadata.target()));
        }

        self.log(level, &visitor.message, &visitor.fields);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::sink::MemorySink;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn test_tracing_events_become_records() {
        let out = MemorySink::new();
        let logger = Logger::from_sinks(LogLevel::Info, vec![out.sink("out")], Vec::new());
        let subscriber = tracing_subscriber::registry().with(logger);

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("filtered out");
            tracing::info!(user = "ada", attempts = 3, admin = false, "signed in");
            tracing::warn!(latency_ms = 812.5, "slow upstream");
        });

        let records = out.records();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0]["level"], "info");
        assert_eq!(records[0]["msg"], "signed in");
        assert_eq!(records[0]["user"], "ada");
        assert_eq!(records[0]["attempts"], 3);
        assert_eq!(records[0]["admin"], false);
        assert!(records[0]["target"].as_str().unwrap().starts_with("restkit"));

        assert_eq!(records[1]["level"], "warn");
        assert_eq!(records[1]["latency_ms"], 812.5);
    }

    #[test]
    fn test_event_target_field_is_kept() {
        let out = MemorySink::new();
        let logger = Logger::from_sinks(LogLevel::Info, vec![out.sink("out")], Vec::new());
        let subscriber = tracing_subscriber::registry().with(logger);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target = "billing-api", "routed");
        });

        let records = out.records();
        assert_eq!(records[0]["msg"], "routed");
        assert_eq!(records[0]["target"], "billing-api");
    }
}
