//! Log sinks
//!
//! A sink is a named [`MakeWriter`]. Identifiers `stdout` and `stderr` map to
//! the console streams; anything else is a file path opened for appending.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriter};

use super::config::{STDERR, STDOUT};
use crate::errors::Result;

/// A named record destination
pub struct SinkWriter {
    name: String,
    make_writer: BoxMakeWriter,
}

impl SinkWriter {
    pub fn new<M>(name: impl Into<String>, make_writer: M) -> Self
    where
        M: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            make_writer: BoxMakeWriter::new(make_writer),
        }
    }

    /// Open a sink from its identifier
    pub fn open(identifier: &str) -> Result<Self> {
        let identifier = identifier.trim();
        let sink = match identifier {
            STDOUT => Self::new(STDOUT, io::stdout),
            STDERR => Self::new(STDERR, io::stderr),
            path => Self::new(path, FileSink::new(open_append(Path::new(path))?)),
        };
        Ok(sink)
    }

    /// Open every identifier, failing on the first that cannot be opened
    pub fn open_all(identifiers: &[String]) -> Result<Vec<Self>> {
        identifiers.iter().map(|id| Self::open(id)).collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Write one complete record and flush it
    pub(crate) fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut writer = self.make_writer.make_writer();
        writer.write_all(line)?;
        writer.flush()
    }
}

impl fmt::Debug for SinkWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkWriter").field("name", &self.name).finish()
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Append-mode file shared by every record written to one sink.
///
/// A writer that panicked mid-record leaves the lock poisoned; later records
/// still go through.
struct FileSink {
    file: Mutex<File>,
}

impl FileSink {
    fn new(file: File) -> Self {
        Self {
            file: Mutex::new(file),
        }
    }
}

struct FileWriter<'a>(MutexGuard<'a, File>);

impl Write for FileWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

impl<'a> MakeWriter<'a> for FileSink {
    type Writer = FileWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        FileWriter(self.file.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

/// In-memory sink, for capturing records in tests
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Written records parsed as JSON; lines that are not JSON are skipped
    pub fn records(&self) -> Vec<serde_json::Value> {
        self.contents()
            .lines()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Wrap as a named sink sharing this buffer
    pub fn sink(&self, name: impl Into<String>) -> SinkWriter {
        SinkWriter::new(name, self.clone())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Writer handed out by [`MemorySink`]
pub struct MemoryWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for MemorySink {
    type Writer = MemoryWriter;

    fn make_writer(&'a self) -> Self::Writer {
        MemoryWriter {
            buffer: Arc::clone(&self.buffer),
        }
    }
}
