//! JSON logger writing to configured sinks

use std::fmt;
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value as JsonValue};

use super::config::LoggerConfig;
use super::field::Field;
use super::level::LogLevel;
use super::sink::SinkWriter;
use super::StructuredLog;
use crate::errors::Result;

const LEVEL_KEY: &str = "level";
const TIME_KEY: &str = "time";
const MESSAGE_KEY: &str = "msg";

struct Sinks {
    level: LogLevel,
    outputs: Vec<SinkWriter>,
    errors: Vec<SinkWriter>,
}

/// Leveled logger rendering one JSON object per line.
///
/// Cloning is cheap; clones and children share the same sinks.
#[derive(Clone)]
pub struct Logger {
    sinks: Arc<Sinks>,
    fields: Arc<Vec<Field>>,
}

impl Logger {
    /// Open the configured sinks and attach the initial fields
    pub fn new(config: &LoggerConfig) -> Result<Self> {
        let outputs = SinkWriter::open_all(&config.output_paths)?;
        let errors = SinkWriter::open_all(&config.error_output_paths)?;

        let fields = config
            .initial_fields
            .iter()
            .map(|(key, value)| Field::new(key.clone(), value.clone()));

        Ok(Self::from_sinks(config.level, outputs, errors).with_fields(fields))
    }

    /// Logger over already-opened sinks
    pub fn from_sinks(level: LogLevel, outputs: Vec<SinkWriter>, errors: Vec<SinkWriter>) -> Self {
        Self {
            sinks: Arc::new(Sinks {
                level,
                outputs,
                errors,
            }),
            fields: Arc::new(Vec::new()),
        }
    }

    pub fn level(&self) -> LogLevel {
        self.sinks.level
    }

    /// Child logger adding `fields` to every record. The parent is unchanged.
    pub fn with_fields<I>(&self, fields: I) -> Self
    where
        I: IntoIterator<Item = Field>,
    {
        let mut merged = Vec::clone(&self.fields);
        merged.extend(fields);

        Self {
            sinks: Arc::clone(&self.sinks),
            fields: Arc::new(merged),
        }
    }

    /// Render a record. Fields never replace `level`, `time` or `msg`; among
    /// fields, later ones win.
    fn encode(&self, level: LogLevel, msg: &str, fields: &[Field]) -> serde_json::Result<Vec<u8>> {
        let mut record = Map::new();
        record.insert(LEVEL_KEY.to_string(), JsonValue::from(level.as_str()));
        record.insert(TIME_KEY.to_string(), JsonValue::from(timestamp()));
        record.insert(MESSAGE_KEY.to_string(), JsonValue::from(msg));

        for f in self.fields.iter().chain(fields) {
            if matches!(f.key(), LEVEL_KEY | TIME_KEY | MESSAGE_KEY) {
                continue;
            }
            record.insert(f.key().to_string(), f.value().clone());
        }

        let mut line = serde_json::to_vec(&JsonValue::Object(record))?;
        line.push(b'\n');
        Ok(line)
    }

    fn write(&self, level: LogLevel, line: &[u8]) {
        let error_sinks: &[SinkWriter] = if level.is_error_class() {
            &self.sinks.errors
        } else {
            &[]
        };

        for sink in self.sinks.outputs.iter().chain(error_sinks) {
            if let Err(e) = sink.write_line(line) {
                self.report_write_error(sink.name(), &e);
            }
        }
    }

    /// Sink failures are reported on the error sinks, never to the caller
    fn report_write_error(&self, failed: &str, err: &dyn fmt::Display) {
        let note = format!("{} logger write error: sink {}: {}\n", timestamp(), failed, err);
        for sink in self.sinks.errors.iter().filter(|s| s.name() != failed) {
            // Nowhere left to report a failure of the error sink itself.
            let _ = sink.write_line(note.as_bytes());
        }
    }
}

impl StructuredLog for Logger {
    fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.sinks.level
    }

    fn log(&self, level: LogLevel, msg: &str, fields: &[Field]) {
        if !self.is_enabled(level) {
            return;
        }

        match self.encode(level, msg, fields) {
            Ok(line) => self.write(level, &line),
            Err(e) => self.report_write_error("encoder", &e),
        }
    }

    fn with_fields(&self, fields: Vec<Field>) -> Self {
        Logger::with_fields(self, fields)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.sinks.level)
            .field("outputs", &self.sinks.outputs)
            .field("errors", &self.sinks.errors)
            .field("fields", &self.fields)
            .finish()
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use crate::logger::field::field;
    use crate::logger::sink::MemorySink;

    fn capture(level: LogLevel) -> (Logger, MemorySink, MemorySink) {
        let out = MemorySink::new();
        let err = MemorySink::new();
        let logger = Logger::from_sinks(level, vec![out.sink("out")], vec![err.sink("err")]);
        (logger, out, err)
    }

    #[test]
    fn test_record_shape() {
        let (logger, out, _) = capture(LogLevel::Debug);
        logger.info("user created", &[field("user_id", 42)]);

        let records = out.records();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record["level"], "info");
        assert_eq!(record["msg"], "user created");
        assert_eq!(record["user_id"], 42);
        assert!(record["time"].as_str().unwrap().ends_with('Z'));

        let keys: Vec<&String> = record.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["level", "time", "msg", "user_id"]);
    }

    #[test]
    fn test_level_filtering() {
        let (logger, out, err) = capture(LogLevel::Warning);
        logger.debug("hidden", &[]);
        logger.info("hidden", &[]);
        logger.warning("shown", &[]);

        assert_eq!(out.records().len(), 1);
        assert_eq!(out.records()[0]["level"], "warn");
        assert!(err.is_empty());
    }

    #[test]
    fn test_error_goes_to_both_sinks() {
        let (logger, out, err) = capture(LogLevel::Info);
        let cause = io::Error::new(io::ErrorKind::Other, "connection reset");
        logger.error("payment failed", &cause, &[field("order", "A-17")]);

        for sink in [&out, &err] {
            let records = sink.records();
            assert_eq!(records.len(), 1);
            assert_eq!(records[0]["level"], "error");
            assert_eq!(records[0]["error"], "connection reset");
            assert_eq!(records[0]["order"], "A-17");
        }
    }

    #[test]
    fn test_reserved_keys_are_kept() {
        let (logger, out, _) = capture(LogLevel::Info);
        logger.info("real", &[field("msg", "spoofed"), field("level", "debug")]);
        let records = out.records();
        let record = &records[0];
        assert_eq!(record["msg"], "real");
        assert_eq!(record["level"], "info");
    }

    #[test]
    fn test_child_fields_do_not_leak_to_parent() {
        let (parent, out, _) = capture(LogLevel::Info);
        let child = parent.with_fields([field("request_id", "r-1")]);
        let grandchild = child.with_fields([field("step", 2)]);

        child.info("from child", &[]);
        parent.info("from parent", &[]);
        grandchild.info("from grandchild", &[field("request_id", "r-2")]);

        let records = out.records();
        assert_eq!(records[0]["request_id"], "r-1");
        assert!(records[1].get("request_id").is_none());
        assert_eq!(records[2]["request_id"], "r-2");
        assert_eq!(records[2]["step"], 2);
    }

    #[test]
    fn test_panic_and_fatal_return_escalation() {
        let (logger, out, err) = capture(LogLevel::Error);
        let cause = io::Error::new(io::ErrorKind::Other, "corrupt index");

        let escalation = logger.panic("cannot continue", &cause, &[]);
        assert!(matches!(escalation, crate::logger::Escalation::Panic { .. }));
        let escalation = logger.fatal("shutting down", &cause, &[]);
        assert_eq!(escalation.message(), "shutting down");

        let levels: Vec<JsonValue> = out.records().iter().map(|r| r["level"].clone()).collect();
        assert_eq!(levels, ["panic", "fatal"]);
        assert_eq!(err.records().len(), 2);
    }

    #[test]
    fn test_print_logs_at_info() {
        let (logger, out, _) = capture(LogLevel::Info);
        logger.print(format_args!("{} of {} done", 3, 5));
        assert_eq!(out.records()[0]["msg"], "3 of 5 done");
    }

    #[test]
    fn test_initial_fields_from_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("service.log");
        let config = LoggerConfig::new()
            .with_output_paths([path.to_str().unwrap()])
            .with_error_output_paths(Vec::<String>::new())
            .with_field("service", "billing");

        let logger = Logger::new(&config).unwrap();
        logger.info("started", &[]);

        let contents = std::fs::read_to_string(&path).unwrap();
        let record: JsonValue = serde_json::from_str(contents.trim()).unwrap();
        assert_eq!(record["service"], "billing");
        assert_eq!(record["msg"], "started");
    }
}
