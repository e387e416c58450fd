use std::io::Write;

use tracing::{debug, instrument};

use crate::{ResultExt, SeedResult};

use super::traits::Pal;

/// Concrete PAL implementation backed by the process streams.
#[derive(Debug, Default)]
pub struct RealPal;

impl RealPal {
    /// Create a new RealPal.
    pub fn new() -> Self {
        Self
    }
}

impl Pal for RealPal {
    #[instrument(skip(self, text), fields(bytes = text.len()))]
    fn write_stdout(&self, text: &str) -> SeedResult<()> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(text.as_bytes())
            .context("Failed to write to stdout")?;
        stdout.flush().context("Failed to flush stdout")?;
        debug!("wrote to stdout");
        Ok(())
    }
}
