use std::{env, path::PathBuf, sync::Once};

use dirs::home_dir;

const DEFAULT_DIR_NAME: &str = ".budget_insights";
const HOME_ENV: &str = "BUDGET_INSIGHTS_HOME";
const DEFAULT_FILTER: &str = "budget_insights=info";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
///
/// `RUST_LOG` directives are honoured; without a usable `RUST_LOG` the crate
/// logs at `info`. Events go to stderr so command output stays parseable.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = env_filter(env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());

        // A host application may already own the global subscriber.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

fn env_filter(directives: Option<&str>) -> tracing_subscriber::EnvFilter {
    use tracing_subscriber::EnvFilter;

    directives
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Returns the application data directory, defaulting to `~/.budget_insights`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}
