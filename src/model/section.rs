//! Section classification - "where" in the console the user currently is
//!
//! A section is derived from the navigation path by the location matcher,
//! or set directly by a panel intent. At most one section is active at a
//! time; `None` (as in `Option<Section>`) means a neutral area such as the
//! dashboard or a catalog list, with no contextual panel.

use serde::{Deserialize, Serialize};

use super::panels::PanelKind;

/// The mutually-exclusive classification of the current console area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    /// Administration area (`/admin...`)
    Admin,
    /// A specific group's area (`/groups/view/{id}...`)
    Group { id: String },
    /// A specific course's area (`/courses/view/{id}...`)
    Course { id: String },
}

impl Section {
    /// Which contextual panel this section shows
    pub fn kind(&self) -> PanelKind {
        match self {
            Section::Admin => PanelKind::Admin,
            Section::Group { .. } => PanelKind::Group,
            Section::Course { .. } => PanelKind::Course,
        }
    }

    /// The entity id carried by this section, if any
    ///
    /// Admin is app-wide and carries none; group and course sections carry
    /// the id captured from the route.
    pub fn entity_id(&self) -> Option<&str> {
        match self {
            Section::Admin => None,
            Section::Group { id } | Section::Course { id } => Some(id),
        }
    }

    pub fn group(id: impl Into<String>) -> Self {
        Section::Group { id: id.into() }
    }

    pub fn course(id: impl Into<String>) -> Self {
        Section::Course { id: id.into() }
    }
}
