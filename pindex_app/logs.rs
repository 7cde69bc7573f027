use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Sets up console logging for applications embedding the repositories.
///
/// Log levels come from `RUST_LOG`. When it is not set, everything logs at
/// `info` and the pindex crates at `debug`. Calling this again after a global
/// subscriber is installed does nothing.
pub fn setup_logging() {
    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_thread_ids(true)
        .with_target(true);

    let default_filter = "info,pindex_db=debug,pindex_app=debug";

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("Global subscriber already installed, keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_logging_twice_does_not_panic() {
        setup_logging();
        setup_logging();
    }
}
