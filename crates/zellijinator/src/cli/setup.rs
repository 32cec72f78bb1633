//! Logging initialization with tracing

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// Logs go to stderr so they never mix with layouts or JSON on stdout.
/// `verbose` raises the default level from INFO to DEBUG. The default only
/// applies when `RUST_LOG` is unset or empty.
///
/// # Errors
/// Returns an error if a subscriber is already installed
pub fn init_tracing(verbose: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}

fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    }
}

/// `RUST_LOG` directives, falling back to the verbosity default.
fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default_level(verbose).into())
        .from_env_lossy()
}

/// Whether `ZELLIJINATOR_DEBUG` asks for generated layouts to be printed.
pub fn debug_layouts_enabled() -> bool {
    std::env::var("ZELLIJINATOR_DEBUG").is_ok_and(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    fn with_rust_log<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
        let saved = std::env::var_os("RUST_LOG");
        match value {
            Some(v) => std::env::set_var("RUST_LOG", v),
            None => std::env::remove_var("RUST_LOG"),
        }
        let out = f();
        match saved {
            Some(v) => std::env::set_var("RUST_LOG", v),
            None => std::env::remove_var("RUST_LOG"),
        }
        out
    }

    #[test]
    #[serial]
    fn test_rust_log_level_wins_over_default() {
        let filter = with_rust_log(Some("debug"), || env_filter(false));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let filter = with_rust_log(Some("warn"), || env_filter(true));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    #[serial]
    fn test_default_level_without_rust_log() {
        let quiet = with_rust_log(None, || env_filter(false));
        assert_eq!(quiet.max_level_hint(), Some(LevelFilter::INFO));

        let verbose = with_rust_log(None, || env_filter(true));
        assert_eq!(verbose.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    #[serial]
    fn test_debug_layouts_flag() {
        let saved = std::env::var_os("ZELLIJINATOR_DEBUG");

        std::env::set_var("ZELLIJINATOR_DEBUG", "1");
        assert!(debug_layouts_enabled());

        std::env::set_var("ZELLIJINATOR_DEBUG", "");
        assert!(!debug_layouts_enabled());

        std::env::remove_var("ZELLIJINATOR_DEBUG");
        assert!(!debug_layouts_enabled());

        if let Some(value) = saved {
            std::env::set_var("ZELLIJINATOR_DEBUG", value);
        }
    }
}
