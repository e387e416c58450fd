/* 📖 # Why have nix_seed_base as a separate library?

nix_seed_base holds what every other crate needs: the error type, tracing setup and the
platform abstraction for stdout. The greeter and the CLI both build on it without
depending on each other.
*/

pub mod error;
pub mod pal;
pub mod tracing;

// Re-export commonly used types for convenience
pub use error::{ErrorKind, ResultExt, SeedError, SeedResult};
pub use pal::{MockPal, Pal, PalHandle, RealPal};
