//! Chronicle Host Library
//!
//! Serves the compiled browser bundle, the HTML shell for every client-side
//! route, and the browser-facing site settings. Articles never pass through
//! here; the browser talks to the article API directly.
//!
//! # Modules
//!
//! - [`server`] - Router and handlers
//!
//! # Example
//!
//! ```no_run
//! use chronicle_server::Config;
//!
//! let router = chronicle_server::server::create_router(&Config::default());
//! ```

pub mod server;

pub use chronicle_core::Config;

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
