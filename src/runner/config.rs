//! Runner settings.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Program name used in usage lines when none is known.
pub const DEFAULT_APP_NAME: &str = "myapp";

/// Tracing directive used when none is configured.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Settings for an [`ActionRunner`](super::ActionRunner).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Program name shown in usage lines.
    pub app_name: String,
    /// Tracing filter directive.
    pub log_level: String,
    /// Markdown dispatch log, disabled when unset.
    pub dispatch_log: Option<PathBuf>,
}

impl RunnerConfig {
    /// Config named after `argv[0]`'s file name.
    pub fn from_program(argv0: &str) -> Self {
        Self {
            app_name: program_name(argv0),
            ..Self::default()
        }
    }

    /// Set the program name.
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    /// Enable the dispatch log.
    pub fn with_dispatch_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.dispatch_log = Some(path.into());
        self
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            dispatch_log: None,
        }
    }
}

/// File name of `argv0`, or [`DEFAULT_APP_NAME`] when it has none.
pub fn program_name(argv0: &str) -> String {
    Path::new(argv0)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_APP_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunnerConfig::default();
        assert_eq!(config.app_name, "myapp");
        assert_eq!(config.log_level, "warn");
        assert!(config.dispatch_log.is_none());
    }

    #[test]
    fn test_program_name() {
        assert_eq!(program_name("/usr/local/bin/prog"), "prog");
        assert_eq!(program_name("prog"), "prog");
        assert_eq!(program_name(""), "myapp");
        assert_eq!(program_name("/"), "myapp");
    }

    #[test]
    fn test_from_program() {
        let config = RunnerConfig::from_program("./bin/tool").with_dispatch_log("/tmp/d.md");
        assert_eq!(config.app_name, "tool");
        assert_eq!(config.dispatch_log, Some(PathBuf::from("/tmp/d.md")));
    }

    #[test]
    fn test_serde_partial() {
        let config: RunnerConfig = serde_json::from_str(r#"{"app_name": "prog"}"#).unwrap();
        assert_eq!(config.app_name, "prog");
        assert_eq!(config.log_level, "warn");

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["dispatch_log"], serde_json::Value::Null);
    }
}
