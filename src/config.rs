//! Shell configuration persistence
//!
//! Stores shell preferences in `~/.config/atrium/config.yaml`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Shell configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Tab segment appended when opening a course sidebar
    /// (e.g., `/courses/view/7/modules`)
    #[serde(default = "default_course_landing_tab")]
    pub course_landing_tab: String,

    /// Route the shell returns to when the course sidebar closes
    #[serde(default = "default_courses_index")]
    pub courses_index: String,

    /// Whether to restore the previous panel layout on startup
    #[serde(default = "default_restore_session")]
    pub restore_session: bool,
}

fn default_course_landing_tab() -> String {
    "modules".to_string()
}

fn default_courses_index() -> String {
    "/courses".to_string()
}

fn default_restore_session() -> bool {
    true
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            course_landing_tab: default_course_landing_tab(),
            courses_index: default_courses_index(),
            restore_session: default_restore_session(),
        }
    }
}

impl ShellConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!("Config file not found at {}, using defaults", path.display());
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file()
            .context("No config directory available")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Derived URL for a course's landing tab
    pub fn course_landing_path(&self, course_id: &str) -> String {
        format!("/courses/view/{}/{}", course_id, self.course_landing_tab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.course_landing_tab, "modules");
        assert_eq!(config.courses_index, "/courses");
        assert!(config.restore_session);
    }

    #[test]
    fn test_course_landing_path() {
        let config = ShellConfig::default();
        assert_eq!(config.course_landing_path("7"), "/courses/view/7/modules");
    }

    #[test]
    fn test_partial_yaml_falls_back_to_field_defaults() {
        let config: ShellConfig = serde_yaml::from_str("courses_index: /catalog\n").unwrap();
        assert_eq!(config.courses_index, "/catalog");
        assert_eq!(config.course_landing_tab, "modules");
        assert!(config.restore_session);
    }
}
