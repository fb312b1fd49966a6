//! Panel layout state
//!
//! This module defines the core data structures for the contextual panel
//! system: the primary navigation rail plus three contextual panels
//! (admin, group, course). At most one contextual panel is open at any
//! instant, and the rail collapses to make room whenever one is.

use serde::{Deserialize, Serialize};

/// Unique identifier for a contextual panel
///
/// Panel kinds are used for persistence, intent dispatch, and layout
/// queries. Uses an enum for efficient comparison and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelKind {
    Admin,
    Group,
    Course,
}

impl PanelKind {
    /// All panel kinds for iteration
    pub const ALL: [PanelKind; 3] = [PanelKind::Admin, PanelKind::Group, PanelKind::Course];

    /// Get the display name for this panel
    pub fn display_name(&self) -> &'static str {
        match self {
            PanelKind::Admin => "Admin",
            PanelKind::Group => "Group",
            PanelKind::Course => "Course",
        }
    }

    /// Whether this panel is scoped to a specific entity
    ///
    /// The admin panel is app-wide; group and course panels always belong
    /// to one entity id.
    pub fn has_entity(&self) -> bool {
        !matches!(self, PanelKind::Admin)
    }
}

/// State for a single contextual panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    /// Which panel this is
    pub kind: PanelKind,
    /// Whether the panel is currently shown
    pub is_open: bool,
}

impl Panel {
    pub fn new(kind: PanelKind) -> Self {
        Self {
            kind,
            is_open: false,
        }
    }
}

/// Complete panel layout state
///
/// Invariants (validated by `is_consistent`, enforced by the update layer):
/// - at most one panel is open at any instant
/// - `rail_collapsed` is true exactly when some panel is open
/// - `active_entity` is present only while an entity-scoped panel is open
/// - `course_title` is present only while the course panel is open
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelLayout {
    pub admin: Panel,
    pub group: Panel,
    pub course: Panel,
    /// Primary navigation rail, collapsed while a contextual panel is open
    pub rail_collapsed: bool,
    /// Entity id (group or course) for the currently open panel
    pub active_entity: Option<String>,
    /// Human-readable course title, display-only auxiliary state
    pub course_title: Option<String>,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            admin: Panel::new(PanelKind::Admin),
            group: Panel::new(PanelKind::Group),
            course: Panel::new(PanelKind::Course),
            rail_collapsed: false,
            active_entity: None,
            course_title: None,
        }
    }
}

impl PanelLayout {
    /// Get panel by kind
    pub fn panel(&self, kind: PanelKind) -> &Panel {
        match kind {
            PanelKind::Admin => &self.admin,
            PanelKind::Group => &self.group,
            PanelKind::Course => &self.course,
        }
    }

    /// Get mutable panel by kind
    pub fn panel_mut(&mut self, kind: PanelKind) -> &mut Panel {
        match kind {
            PanelKind::Admin => &mut self.admin,
            PanelKind::Group => &mut self.group,
            PanelKind::Course => &mut self.course,
        }
    }

    /// Whether any contextual panel is open
    pub fn any_open(&self) -> bool {
        PanelKind::ALL.into_iter().any(|k| self.panel(k).is_open)
    }

    /// The currently open panel kind, if any
    pub fn open_kind(&self) -> Option<PanelKind> {
        PanelKind::ALL.into_iter().find(|&k| self.panel(k).is_open)
    }

    /// Open a panel exclusively
    ///
    /// Closes every sibling panel, collapses the rail, and replaces the
    /// active entity id with the one for this panel.
    pub fn open_panel(&mut self, kind: PanelKind, entity: Option<String>) {
        for k in PanelKind::ALL {
            self.panel_mut(k).is_open = k == kind;
        }
        self.rail_collapsed = true;
        self.active_entity = entity;
        if kind != PanelKind::Course {
            self.course_title = None;
        }
    }

    /// Close one panel
    ///
    /// If no panel remains open afterwards, the rail re-expands and the
    /// entity id is cleared. Closing a panel that is not open is a no-op.
    pub fn close_panel(&mut self, kind: PanelKind) {
        if !self.panel(kind).is_open {
            return;
        }
        self.panel_mut(kind).is_open = false;
        if kind == PanelKind::Course {
            self.course_title = None;
        }
        if !self.any_open() {
            self.rail_collapsed = false;
            self.active_entity = None;
        }
    }

    /// Close every panel and re-expand the rail
    pub fn close_all(&mut self) {
        for k in PanelKind::ALL {
            self.panel_mut(k).is_open = false;
        }
        self.rail_collapsed = false;
        self.active_entity = None;
        self.course_title = None;
    }

    /// Check the layout invariants
    pub fn is_consistent(&self) -> bool {
        let open_count = PanelKind::ALL
            .into_iter()
            .filter(|&k| self.panel(k).is_open)
            .count();
        if open_count > 1 {
            return false;
        }
        if self.rail_collapsed != (open_count == 1) {
            return false;
        }
        match self.open_kind() {
            Some(kind) if kind.has_entity() => {
                if self.active_entity.is_none() {
                    return false;
                }
            }
            Some(_) | None => {
                if self.active_entity.is_some() {
                    return false;
                }
            }
        }
        if self.course_title.is_some() && !self.course.is_open {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_all_closed() {
        let layout = PanelLayout::default();
        assert!(!layout.any_open());
        assert!(!layout.rail_collapsed);
        assert_eq!(layout.open_kind(), None);
        assert!(layout.is_consistent());
    }

    #[test]
    fn test_open_is_exclusive() {
        let mut layout = PanelLayout::default();
        layout.open_panel(PanelKind::Admin, None);
        layout.open_panel(PanelKind::Group, Some("42".into()));

        assert!(!layout.admin.is_open);
        assert!(layout.group.is_open);
        assert!(layout.rail_collapsed);
        assert_eq!(layout.active_entity.as_deref(), Some("42"));
        assert!(layout.is_consistent());
    }

    #[test]
    fn test_close_last_panel_expands_rail() {
        let mut layout = PanelLayout::default();
        layout.open_panel(PanelKind::Group, Some("42".into()));
        layout.close_panel(PanelKind::Group);

        assert!(!layout.any_open());
        assert!(!layout.rail_collapsed);
        assert_eq!(layout.active_entity, None);
        assert!(layout.is_consistent());
    }

    #[test]
    fn test_close_not_open_panel_is_noop() {
        let mut layout = PanelLayout::default();
        layout.open_panel(PanelKind::Admin, None);
        layout.close_panel(PanelKind::Course);

        assert!(layout.admin.is_open);
        assert!(layout.rail_collapsed);
        assert!(layout.is_consistent());
    }

    #[test]
    fn test_course_title_cleared_on_switch() {
        let mut layout = PanelLayout::default();
        layout.open_panel(PanelKind::Course, Some("7".into()));
        layout.course_title = Some("Intro to Biology".into());

        layout.open_panel(PanelKind::Admin, None);
        assert_eq!(layout.course_title, None);
        assert!(layout.is_consistent());
    }

    #[test]
    fn test_course_title_cleared_on_close() {
        let mut layout = PanelLayout::default();
        layout.open_panel(PanelKind::Course, Some("7".into()));
        layout.course_title = Some("Intro to Biology".into());

        layout.close_panel(PanelKind::Course);
        assert_eq!(layout.course_title, None);
        assert!(layout.is_consistent());
    }

    #[test]
    fn test_panel_kind_display_names() {
        assert_eq!(PanelKind::Admin.display_name(), "Admin");
        assert_eq!(PanelKind::Group.display_name(), "Group");
        assert_eq!(PanelKind::Course.display_name(), "Course");
    }

    #[test]
    fn test_entity_scoping() {
        assert!(!PanelKind::Admin.has_entity());
        assert!(PanelKind::Group.has_entity());
        assert!(PanelKind::Course.has_entity());
    }
}
