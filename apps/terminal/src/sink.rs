//! # Invoice Sink
//!
//! The one external collaborator of the cart core: durable storage for
//! invoice text.
//!
//! ## Resource Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Invoice Sink Write                            │
//! │                                                                     │
//! │  download ──► format_invoice() ──► sink.write(text)                 │
//! │                                        │                            │
//! │                          open ── write fully ── flush ── close      │
//! │                                        │                            │
//! │                          Ok ─────► cart.reset()                     │
//! │                          Err ────► cart UNCHANGED, user retries     │
//! │                                                                     │
//! │  The write completes synchronously before control returns; the      │
//! │  file handle closes on every exit path, including failure.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The destination is a single fixed file, overwritten on every download.
//! There is no append mode and no per-session numbering.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Default invoice file name, resolved in the working directory.
pub const DEFAULT_INVOICE_FILE: &str = "invoice.txt";

/// Invoice persistence failures (permissions, disk full, ...).
#[derive(Debug, Error)]
pub enum SinkError {
    /// The destination could not be created or written.
    #[error("{path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Durable-storage destination for invoice text.
pub trait InvoiceSink {
    /// Persists the invoice text, replacing any previous invoice.
    ///
    /// Either the whole text is written or an error is returned; callers
    /// may assume nothing was kept on failure.
    fn write(&mut self, text: &str) -> Result<(), SinkError>;
}

// =============================================================================
// File Sink
// =============================================================================

/// Writes invoices to a fixed file path, truncating each time.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Creates a sink for the given destination path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSink { path: path.into() }
    }

    /// The destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_all(&self, text: &str) -> io::Result<()> {
        // File::create truncates, so each download replaces the previous
        // invoice; the handle closes when it drops, on every exit path
        let mut file = File::create(&self.path)?;
        file.write_all(text.as_bytes())?;
        file.flush()
    }
}

impl InvoiceSink for FileSink {
    fn write(&mut self, text: &str) -> Result<(), SinkError> {
        self.write_all(text).map_err(|source| SinkError::Write {
            path: self.path.display().to_string(),
            source,
        })?;
        debug!(path = %self.path.display(), bytes = text.len(), "invoice written");
        Ok(())
    }
}

// =============================================================================
// Test Sinks
// =============================================================================

/// In-memory sinks shared by command handler tests.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Records every write; never fails.
    #[derive(Debug, Default)]
    pub struct MemorySink {
        pub writes: Vec<String>,
    }

    impl InvoiceSink for MemorySink {
        fn write(&mut self, text: &str) -> Result<(), SinkError> {
            self.writes.push(text.to_string());
            Ok(())
        }
    }

    /// Fails every write, simulating a read-only destination.
    #[derive(Debug, Default)]
    pub struct FailingSink;

    impl InvoiceSink for FailingSink {
        fn write(&mut self, _text: &str) -> Result<(), SinkError> {
            Err(SinkError::Write {
                path: DEFAULT_INVOICE_FILE.to_string(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
            })
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_sink_writes_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invoice.txt");
        let mut sink = FileSink::new(&path);

        sink.write("Total: $8.0\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Total: $8.0\n");
    }

    #[test]
    fn test_file_sink_overwrites_previous_invoice() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invoice.txt");
        let mut sink = FileSink::new(&path);

        sink.write("first invoice, long enough to notice truncation\n")
            .unwrap();
        sink.write("second\n").unwrap();

        // No append, no leftovers from the longer first write
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second\n");
    }

    #[test]
    fn test_file_sink_reports_failure_with_path() {
        let dir = tempfile::tempdir().unwrap();
        // A directory component that does not exist makes create() fail
        let path = dir.path().join("missing").join("invoice.txt");
        let mut sink = FileSink::new(&path);

        let err = sink.write("text").unwrap_err();
        assert!(err.to_string().contains("invoice.txt"));
    }
}
