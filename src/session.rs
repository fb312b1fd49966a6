//! Persistent session snapshots
//!
//! The console remembers which contextual panel was open between visits.
//! Snapshots are stored as JSON in `~/.config/atrium/session.json` and are
//! strictly best-effort: a missing, stale, or unreadable snapshot falls
//! back to the default layout.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{PanelLayout, Section, ShellModel};

/// Serializable snapshot of the panel coordinator state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Schema version for forward compatibility
    #[serde(default)]
    pub version: u32,
    /// Panel and rail state
    pub layout: PanelLayout,
    /// Active section at capture time
    pub section: Option<Section>,
}

impl SessionSnapshot {
    pub const CURRENT_VERSION: u32 = 1;

    /// Capture the persistable parts of a model
    pub fn capture(model: &ShellModel) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            layout: model.layout.clone(),
            section: model.section.clone(),
        }
    }

    /// Whether this snapshot would produce a consistent model
    ///
    /// Checks the layout invariants and that the recorded section agrees
    /// with the layout; a snapshot with a stale section would make route
    /// reconciliation misjudge "unchanged" locations after restore.
    pub fn is_consistent(&self) -> bool {
        let model = ShellModel {
            layout: self.layout.clone(),
            section: self.section.clone(),
            ..ShellModel::default()
        };
        model.is_consistent()
    }

    /// Load the snapshot from the default session file
    ///
    /// Returns `None` when no usable snapshot exists; the caller starts
    /// from the default layout.
    pub fn load() -> Option<Self> {
        let path = crate::config_paths::session_file()?;
        Self::load_from(&path)
    }

    /// Load a snapshot from an explicit path
    pub fn load_from(path: &Path) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        match serde_json::from_str::<Self>(&contents) {
            Ok(snapshot) if snapshot.is_consistent() => Some(snapshot),
            Ok(_) => {
                tracing::warn!("Session snapshot at {} is inconsistent, ignoring", path.display());
                None
            }
            Err(e) => {
                tracing::warn!("Failed to parse session snapshot at {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Save the snapshot to the default session file
    pub fn save(&self) -> Result<()> {
        let path =
            crate::config_paths::session_file().context("No config directory available")?;
        crate::config_paths::ensure_config_dir()?;
        self.save_to(&path)
    }

    /// Save the snapshot to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize session")?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write session to {}", path.display()))?;
        tracing::debug!("Saved session snapshot to {}", path.display());
        Ok(())
    }
}
