//! Environment variable loading.
//!
//! Only the host-level settings of the runner are read here; actions read
//! their own variables.

use crate::runner::{program_name, RunnerConfig, DEFAULT_APP_NAME, DEFAULT_LOG_LEVEL};
use std::env;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Program name shown in usage lines.
pub const APP_NAME_VAR: &str = "DIRECTOR_APP_NAME";

/// Tracing filter directive.
pub const LOG_VAR: &str = "DIRECTOR_LOG";

/// Path of the markdown dispatch log.
pub const DISPATCH_LOG_VAR: &str = "DIRECTOR_DISPATCH_LOG";

/// Loads environment variables from a .env file and the system environment.
#[derive(Debug, Clone)]
pub struct EnvironmentLoader {
    env_file: Option<PathBuf>,
}

impl EnvironmentLoader {
    /// Initialize the environment loader.
    ///
    /// # Arguments
    /// * `env_file` - Path to a .env file. Nothing is loaded when None.
    pub fn new(env_file: Option<&Path>) -> Self {
        if let Some(path) = env_file {
            if path.exists() {
                if let Err(e) = dotenv::from_path(path) {
                    warn!(path = %path.display(), error = %e, "Failed to load .env file");
                }
            } else {
                warn!(path = %path.display(), ".env file not found");
            }
        }

        Self {
            env_file: env_file.map(Path::to_path_buf),
        }
    }

    /// The .env file this loader was given.
    pub fn env_file(&self) -> Option<&Path> {
        self.env_file.as_deref()
    }

    /// Program name from `DIRECTOR_APP_NAME`.
    pub fn app_name(&self) -> Option<String> {
        non_empty(APP_NAME_VAR)
    }

    /// Tracing directive from `DIRECTOR_LOG`, `warn` when unset.
    pub fn log_level(&self) -> String {
        non_empty(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
    }

    /// Dispatch log path from `DIRECTOR_DISPATCH_LOG`.
    pub fn dispatch_log(&self) -> Option<PathBuf> {
        non_empty(DISPATCH_LOG_VAR).map(PathBuf::from)
    }

    /// Runner settings from the environment.
    ///
    /// Without `DIRECTOR_APP_NAME` the program name is taken from `argv0`,
    /// falling back to `myapp`.
    pub fn runner_config(&self, argv0: Option<&str>) -> RunnerConfig {
        let app_name = self.app_name().unwrap_or_else(|| match argv0 {
            Some(argv0) => program_name(argv0),
            None => DEFAULT_APP_NAME.to_string(),
        });

        RunnerConfig {
            app_name,
            log_level: self.log_level(),
            dispatch_log: self.dispatch_log(),
        }
    }
}

impl Default for EnvironmentLoader {
    fn default() -> Self {
        Self::new(None)
    }
}

fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
