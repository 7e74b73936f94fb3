//! Diagnostic logging setup

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber if `RUST_LOG` is set.
///
/// Without `RUST_LOG` no subscriber is installed and tracing events are
/// discarded, so stdout and stderr carry only the tool's own report lines.
pub fn init() {
    let Some(directives) = std::env::var_os("RUST_LOG") else {
        return;
    };
    if directives.is_empty() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A subscriber may already be installed when running under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
