//! Shell model - the complete state of the panel coordinator
//!
//! This module contains all the state types following the Elm Architecture
//! pattern. The model is owned by a single [`crate::store::ShellStore`] per
//! UI session and mutated only through the update layer.

pub mod panels;
pub mod section;

pub use panels::{Panel, PanelKind, PanelLayout};
pub use section::Section;

use crate::config::ShellConfig;

/// The complete coordinator model
#[derive(Debug, Clone, PartialEq)]
pub struct ShellModel {
    /// Panel visibility and rail state
    pub layout: PanelLayout,
    /// Currently active section, derived from the route or set by intents
    pub section: Option<Section>,
    /// Shell configuration (landing tab, index route, session restore)
    pub config: ShellConfig,
}

impl ShellModel {
    /// Create a model in the initial default state: no section, all panels
    /// closed, rail expanded.
    pub fn new(config: ShellConfig) -> Self {
        Self {
            layout: PanelLayout::default(),
            section: None,
            config,
        }
    }

    /// Reset to the initial default state, keeping configuration
    pub fn reset(&mut self) {
        self.layout = PanelLayout::default();
        self.section = None;
    }

    /// Check the model invariants: the layout is internally consistent
    /// and the active section agrees with it (section kind matches the
    /// open panel, entity ids match, `None` section means all closed).
    ///
    /// A desynchronized section would poison route reconciliation: the
    /// "unchanged location" guard compares against `section`, so a stale
    /// value makes matching routes look like no-ops forever.
    pub fn is_consistent(&self) -> bool {
        if !self.layout.is_consistent() {
            return false;
        }
        match (&self.section, self.layout.open_kind()) {
            (None, None) => true,
            (Some(section), Some(kind)) => {
                section.kind() == kind
                    && section.entity_id() == self.layout.active_entity.as_deref()
            }
            _ => false,
        }
    }

    /// Debug-build invariant check, called after every transition
    pub(crate) fn debug_check(&self) {
        debug_assert!(
            self.is_consistent(),
            "shell model invariant violated: {:?}",
            self
        );
    }
}

impl Default for ShellModel {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}
