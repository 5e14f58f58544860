//! Capture of `tracing` output for assertions on verbose runs.
//!
//! Events are formatted without timestamps or colour into a shared in-memory
//! buffer. The subscriber is scoped to one closure, so tests running in
//! parallel never observe each other's output.
//!
//! # Examples
//!
//! ```
//! use structfill_test_helpers::trace;
//!
//! let ((), output) = trace::capture(|| tracing::info!(target: "demo", "hello"));
//! assert!(output.contents().contains("hello"));
//! ```

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Cloneable in-memory writer collecting formatted events.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    /// Everything written so far, decoded lossily as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }

    /// Written output split into lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Number of captured lines containing `needle`.
    #[must_use]
    pub fn count_matching(&self, needle: &str) -> usize {
        self.lines()
            .iter()
            .filter(|line| line.contains(needle))
            .count()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with a capturing subscriber installed for the current thread.
///
/// Returns the closure's result together with the captured output.
pub fn capture<F, R>(f: F) -> (R, SharedBuffer)
where
    F: FnOnce() -> R,
{
    let buffer = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .with_max_level(tracing::Level::TRACE)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer)
}
