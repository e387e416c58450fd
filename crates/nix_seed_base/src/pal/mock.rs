use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::{SeedError, SeedResult};

use super::traits::Pal;

/* 📖 # Why does MockPal record individual writes?

Tests care about two things: the exact text that reached stdout and how many writes it took
to get there. Keeping each write as its own entry answers both, `stdout_contents()` joins
them back together.
*/

/// In-memory PAL implementation for testing.
///
/// Clones share the same storage, so a test can keep one clone for inspection
/// while handing another to the code under test.
///
/// # Examples
///
/// ```
/// use nix_seed_base::{MockPal, Pal};
///
/// let mock = MockPal::new();
/// mock.write_stdout("Hello\n").unwrap();
/// assert_eq!(mock.stdout_contents(), "Hello\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockPal {
    writes: Arc<Mutex<Vec<String>>>,
    write_failure: Arc<Mutex<Option<io::ErrorKind>>>,
}

impl MockPal {
    /// Create a new MockPal with no recorded output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with an I/O error of the given kind.
    pub fn fail_writes(&self, kind: io::ErrorKind) {
        *self.write_failure.lock() = Some(kind);
    }

    /// Everything written to stdout so far.
    pub fn stdout_contents(&self) -> String {
        self.writes.lock().concat()
    }

    /// Number of successful stdout writes.
    pub fn write_count(&self) -> usize {
        self.writes.lock().len()
    }
}

impl Pal for MockPal {
    fn write_stdout(&self, text: &str) -> SeedResult<()> {
        if let Some(kind) = *self.write_failure.lock() {
            return Err(Box::new(
                SeedError::io(io::Error::new(kind, "simulated write failure"))
                    .context("Failed to write to stdout"),
            ));
        }
        self.writes.lock().push(text.to_string());
        Ok(())
    }
}
