use std::sync::Arc;

use crate::SeedResult;

/// Platform Abstraction Layer (PAL) trait providing access to process streams.
///
/// Two implementations are provided:
/// - `RealPal`: Writes to the real process stdout
/// - `MockPal`: Captures output in memory for testing
pub trait Pal: std::fmt::Debug + Send + Sync + 'static {
    /// Write `text` to standard output and flush it.
    ///
    /// The text is written as is, callers append their own line breaks.
    fn write_stdout(&self, text: &str) -> SeedResult<()>;
}

/// Handle to a PAL implementation, enabling shared ownership.
///
/// Internally wraps `Arc<dyn Pal>` for cheap cloning and thread-safe sharing.
///
/// # Examples
///
/// ```
/// use nix_seed_base::{MockPal, Pal, PalHandle};
///
/// let mock = MockPal::new();
/// let pal = PalHandle::new(mock.clone());
/// pal.write_stdout("hi\n").unwrap();
/// assert_eq!(mock.stdout_contents(), "hi\n");
/// ```
#[derive(Debug, Clone)]
pub struct PalHandle(Arc<dyn Pal>);

impl PalHandle {
    /// Create a new PalHandle from a Pal implementation.
    pub fn new(pal: impl Pal + 'static) -> Self {
        Self(Arc::new(pal))
    }
}

impl std::ops::Deref for PalHandle {
    type Target = dyn Pal;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
