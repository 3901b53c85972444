// src/logging.rs
// =============================================================================
// Sets up diagnostic logging.
//
// Logs go to stderr through `tracing`, never to stdout: stdout is where the
// word list goes when no --output file is given.
//
// RUST_LOG wins if it is set, e.g. RUST_LOG=word_crawler=trace,reqwest=debug
// =============================================================================

use tracing_subscriber::EnvFilter;

// Our own crate at info (or debug), everything else only at warn
fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("warn,{}={}", env!("CARGO_CRATE_NAME"), level)
}

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // try_init: a second call (e.g. from tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "warn,word_crawler=info");
        assert_eq!(default_directive(true), "warn,word_crawler=debug");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
