//! Shell store - session-scoped owner of the coordinator state
//!
//! One `ShellStore` exists per UI session and is the only mutation surface
//! for panel state. UI chrome drives it through the named intent methods;
//! the host router reports route changes through [`ShellStore::apply_location`]
//! and executes whatever [`Cmd`] comes back.
//!
//! Consumers that need to re-render subscribe for change notifications.
//! The source UI relied on framework reactivity for this; here it is an
//! explicit observer list, and dispatches that do not change the model
//! notify nobody.

use crate::commands::Cmd;
use crate::config::ShellConfig;
use crate::messages::{Msg, PanelMsg};
use crate::model::{PanelKind, Section, ShellModel};
use crate::session::SessionSnapshot;
use crate::update::update;

/// Handle returned by [`ShellStore::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&ShellModel)>;

/// The session-wide panel coordinator
pub struct ShellStore {
    model: ShellModel,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_listener_id: u64,
}

impl ShellStore {
    /// Create a store in the initial default state with default config
    pub fn new() -> Self {
        Self::with_config(ShellConfig::default())
    }

    /// Create a store with explicit configuration
    pub fn with_config(config: ShellConfig) -> Self {
        Self {
            model: ShellModel::new(config),
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// Read access to the current model
    pub fn model(&self) -> &ShellModel {
        &self.model
    }

    /// Dispatch a message through the update layer
    ///
    /// Returns the side effect for the host to execute. Subscribers are
    /// notified only when the dispatch actually changed the model.
    pub fn dispatch(&mut self, msg: Msg) -> Cmd {
        let before = self.model.clone();
        let cmd = update(&mut self.model, msg).unwrap_or_default();
        if self.model != before {
            self.notify();
        }
        cmd
    }

    fn notify(&mut self) {
        for (_, listener) in &mut self.listeners {
            listener(&self.model);
        }
    }

    // ========================================================================
    // Subscriptions
    // ========================================================================

    /// Register a change listener; called after every model change
    pub fn subscribe(&mut self, listener: impl FnMut(&ShellModel) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns false if the id was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    // ========================================================================
    // Intent API
    // ========================================================================

    /// Report a route change from the host router
    ///
    /// Never produces a navigation command; the returned [`Cmd`] is always
    /// empty and exists only for call-site uniformity.
    pub fn apply_location(&mut self, path: &str) -> Cmd {
        self.dispatch(Msg::location_changed(path))
    }

    pub fn open_admin_panel(&mut self) -> Cmd {
        self.dispatch(Msg::Panel(PanelMsg::OpenAdmin))
    }

    pub fn close_admin_panel(&mut self) -> Cmd {
        self.dispatch(Msg::Panel(PanelMsg::CloseAdmin))
    }

    pub fn toggle_admin_panel(&mut self) -> Cmd {
        self.dispatch(Msg::Panel(PanelMsg::ToggleAdmin))
    }

    pub fn open_group_panel(&mut self, group_id: &str) -> Cmd {
        self.dispatch(Msg::Panel(PanelMsg::OpenGroup {
            group_id: group_id.to_string(),
        }))
    }

    pub fn close_group_panel(&mut self) -> Cmd {
        self.dispatch(Msg::Panel(PanelMsg::CloseGroup))
    }

    pub fn toggle_group_panel(&mut self, group_id: &str) -> Cmd {
        self.dispatch(Msg::Panel(PanelMsg::ToggleGroup {
            group_id: group_id.to_string(),
        }))
    }

    /// Open the course sidebar
    ///
    /// Stores the display title and returns a navigation request to the
    /// course landing tab (`/courses/view/{id}/{landing_tab}`).
    pub fn open_course_sidebar(&mut self, course_id: &str, title: &str) -> Cmd {
        self.dispatch(Msg::open_course(course_id, title))
    }

    /// Close the course sidebar; returns a navigation request back to the
    /// course list.
    pub fn close_course_sidebar(&mut self) -> Cmd {
        self.dispatch(Msg::Panel(PanelMsg::CloseCourse))
    }

    // ========================================================================
    // Queries (consumed by layout chrome)
    // ========================================================================

    pub fn is_admin_open(&self) -> bool {
        self.model.layout.admin.is_open
    }

    pub fn is_group_open(&self) -> bool {
        self.model.layout.group.is_open
    }

    pub fn is_course_open(&self) -> bool {
        self.model.layout.course.is_open
    }

    pub fn is_rail_collapsed(&self) -> bool {
        self.model.layout.rail_collapsed
    }

    /// The currently open panel kind, if any
    pub fn open_panel(&self) -> Option<PanelKind> {
        self.model.layout.open_kind()
    }

    /// Entity id (group or course) for the open panel
    pub fn active_entity(&self) -> Option<&str> {
        self.model.layout.active_entity.as_deref()
    }

    /// Display title stored by the course sidebar
    pub fn course_title(&self) -> Option<&str> {
        self.model.layout.course_title.as_deref()
    }

    /// Currently active section
    pub fn section(&self) -> Option<&Section> {
        self.model.section.as_ref()
    }

    // ========================================================================
    // Session persistence
    // ========================================================================

    /// Snapshot the current layout for persistence
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(&self.model)
    }

    /// Restore a previously captured layout
    ///
    /// Snapshots that fail the model invariants - including a recorded
    /// section that disagrees with the layout - are discarded and the
    /// store stays in its current state.
    pub fn restore(&mut self, snapshot: SessionSnapshot) -> bool {
        let mut candidate = self.model.clone();
        candidate.layout = snapshot.layout;
        candidate.section = snapshot.section;
        if !candidate.is_consistent() {
            tracing::warn!("Discarding inconsistent session snapshot");
            return false;
        }
        if candidate != self.model {
            self.model = candidate;
            self.notify();
        }
        true
    }

    /// Reset to the initial default state (full-reload semantics),
    /// keeping configuration
    pub fn reset(&mut self) {
        let before = self.model.clone();
        self.model.reset();
        if self.model != before {
            self.notify();
        }
    }
}

impl Default for ShellStore {
    fn default() -> Self {
        Self::new()
    }
}
