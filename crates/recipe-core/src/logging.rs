//! File logging through tracing
//!
//! The screen owns stdout, so every event goes to a daily rolling file under
//! the platform data directory. `RECIPE_LOG` takes an `EnvFilter` directive
//! string, e.g. `RECIPE_LOG=debug` or `RECIPE_LOG=recipe_app=trace,warn`.

use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "RECIPE_LOG";

/// Prefix of the rolling log files (a date suffix is appended per day)
pub const LOG_FILE_PREFIX: &str = "recipe.log";

const DEFAULT_FILTER: &str =
    "recipe=info,recipe_demo=info,recipe_core=info,recipe_app=info,recipe_tui=info,warn";

/// Install the global subscriber and return the directory logs are written to
pub fn init() -> Result<PathBuf> {
    let log_dir = log_directory(dirs::data_local_dir().as_deref());
    std::fs::create_dir_all(&log_dir)?;

    let appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!(log_dir = %log_dir.display(), "Recipe screen starting");
    Ok(log_dir)
}

/// `<base>/recipe-demo/logs`, relative to the working directory without a base
fn log_directory(base: Option<&Path>) -> PathBuf {
    base.unwrap_or_else(|| Path::new("."))
        .join("recipe-demo")
        .join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_under_data_dir() {
        let dir = log_directory(Some(Path::new("/home/cook/.local/share")));
        assert_eq!(dir, PathBuf::from("/home/cook/.local/share/recipe-demo/logs"));
    }

    #[test]
    fn test_log_directory_without_data_dir() {
        assert_eq!(log_directory(None), PathBuf::from("./recipe-demo/logs"));
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
