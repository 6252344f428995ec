//! Progress events emitted while paging through pull requests.
//!
//! Progress is purely informational: sinks swallow their own write failures
//! and never influence the traversal outcome.

use std::io::Write;

/// A structured progress event emitted by the traversal engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraversalEvent {
    /// The first request is about to be issued.
    Started,
    /// A page was fetched; `total` is the running pull request count.
    PageFetched {
        /// Pull requests seen so far, including this page.
        total: u64,
    },
    /// The running total exceeded the configured cap.
    LimitReached {
        /// Configured cap.
        max: u64,
        /// Pull requests seen when the cap triggered.
        total: u64,
    },
    /// The traversal stopped without error.
    Finished {
        /// Pages fetched.
        pages: u64,
        /// Pull requests seen.
        total: u64,
    },
}

/// A sink that can record progress events.
pub trait ProgressSink {
    /// Records a progress event.
    fn record(&mut self, event: &TraversalEvent);
}

/// Progress sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgressSink;

impl ProgressSink for NoopProgressSink {
    fn record(&mut self, _event: &TraversalEvent) {}
}

/// Renders progress as a single `paging: 100 200 ...` line.
///
/// When the cap triggers, a `hit max N` line follows.
#[derive(Debug)]
pub struct WriterProgressSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterProgressSink<W> {
    /// Wraps a writer, typically standard output.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn render(&mut self, event: &TraversalEvent) -> std::io::Result<()> {
        match event {
            TraversalEvent::Started => write!(self.writer, "paging:")?,
            TraversalEvent::PageFetched { total } => write!(self.writer, " {total}")?,
            TraversalEvent::LimitReached { max, .. } => {
                write!(self.writer, "\nhit max {max}")?;
            }
            TraversalEvent::Finished { .. } => writeln!(self.writer)?,
        }
        self.writer.flush()
    }
}

impl<W: Write> ProgressSink for WriterProgressSink<W> {
    fn record(&mut self, event: &TraversalEvent) {
        if let Err(error) = self.render(event) {
            tracing::trace!("failed to write progress: {error}");
        }
    }
}
