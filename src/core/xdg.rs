//! XDG Base Directory support.
//!
//! Resolves the configuration directory for tandem following the
//! XDG Base Directory specification. The index itself is never
//! persisted, so only the config location is needed.

use std::env;
use std::fs;
use std::path::PathBuf;

/// XDG directory structure for tandem
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
}

impl XdgDirs {
    /// Create new XDG directory structure with proper resolution order
    ///
    /// Priority order (highest to lowest):
    /// 1. Explicit TANDEM_CONFIG_DIR env var
    /// 2. XDG_CONFIG_HOME environment variable
    /// 3. XDG default (~/.config/tandem)
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    /// Resolve config directory
    fn resolve_config_dir() -> PathBuf {
        if let Ok(dir) = env::var("TANDEM_CONFIG_DIR") {
            return PathBuf::from(dir);
        }

        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("tandem");
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("tandem")
    }

    /// Get config file path
    pub fn config_file(&self) -> PathBuf {
        // TANDEM_CONFIG_FILE is an explicit override
        if let Ok(file) = env::var("TANDEM_CONFIG_FILE") {
            return PathBuf::from(file);
        }

        self.config_dir.join("config.toml")
    }

    /// Ensure the config directory exists
    pub fn ensure_dirs_exist(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.config_dir)
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}
