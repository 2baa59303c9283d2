// Brand story rewrite - replaces the story copy in BrandStorySection.tsx

pub mod content;
pub mod error;
pub mod file;
pub mod rewrite;

pub use error::{RewriteError, RewriteResult};
pub use rewrite::{rewrite_file, ContentPatch, RewriteOutcome};

use tracing::debug;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize logging on stderr.
///
/// Stdout carries only the confirmation line, so logs never go there.
/// `RUST_LOG` overrides the default `warn` filter.
pub fn init_logging() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // try_init: a second call (e.g. from tests) keeps the first subscriber
    let _ = fmt::Subscriber::builder()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();

    debug!("Initializing brand-story-rewrite v{}", version());
}
