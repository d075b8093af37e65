//! Path resolution for smartdo configuration and data files.
//!
//! All smartdo data is stored in `~/.smartdo/` (or `$SMARTDO_HOME`):
//! - `config.yaml` - Main configuration file
//! - `tasks.json` - The task list

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable that overrides the data directory.
pub const HOME_ENV: &str = "SMARTDO_HOME";

/// Paths to smartdo configuration and data files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// Root directory: `~/.smartdo/`
    pub root: PathBuf,
    /// Config file: `~/.smartdo/config.yaml`
    pub config_file: PathBuf,
    /// Default task file: `~/.smartdo/tasks.json`
    pub tasks_file: PathBuf,
}

impl Paths {
    /// Resolve paths from `$SMARTDO_HOME`, then `$HOME/.smartdo`, then `./.smartdo`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::resolve(std::env::var_os(HOME_ENV), std::env::var_os("HOME"))
    }

    fn resolve(smartdo_home: Option<OsString>, home: Option<OsString>) -> Self {
        let non_empty = |v: &OsString| !v.is_empty();

        if let Some(root) = smartdo_home.filter(non_empty) {
            return Self::with_root(PathBuf::from(root));
        }

        match home.filter(non_empty) {
            Some(home) => Self::with_root(PathBuf::from(home).join(".smartdo")),
            None => {
                tracing::warn!("HOME is not set, using ./.smartdo");
                Self::with_root(PathBuf::from(".smartdo"))
            },
        }
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            tasks_file: root.join("tasks.json"),
            root,
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::from_env()
    }
}
