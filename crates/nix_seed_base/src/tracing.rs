use crate::error::SeedResult;
pub use tracing::instrument;
pub use tracing::{debug, error, info, trace, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/* 📖 # Why do log lines go to stderr?

Standard output carries the program's only product: the greeting line.
Any diagnostics, whatever `RUST_LOG` asks for, are written to stderr so the stdout contract
never changes. The env filter is attached to the fmt layer only, which keeps every span
visible to the ErrorLayer for span traces.
*/

pub fn init_tracing() -> SeedResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .with(ErrorLayer::default())
        .try_init()
        .map_err(|e| crate::err!("Failed to initialize tracing: {}", e))
}
