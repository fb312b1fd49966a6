//! Update functions for the Elm-style architecture
//!
//! All transitions of the panel coordinator flow through these functions.
//! Every transition is synchronous, total, and runs to completion before
//! the next message is processed; the only side effects are the returned
//! navigation commands.
//!
//! Navigation commands are produced exclusively by the course intents.
//! Reacting to a location change never navigates, so a dispatch can never
//! feed back into itself.

use crate::commands::Cmd;
use crate::location::locate;
use crate::messages::{Msg, NavMsg, PanelMsg};
use crate::model::{PanelKind, Section, ShellModel};

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut ShellModel, msg: Msg) -> Option<Cmd> {
    let cmd = match msg {
        Msg::Nav(m) => update_nav(model, m),
        Msg::Panel(m) => update_panel(model, m),
    };

    model.debug_check();
    cmd
}

/// Handle navigation messages (route changes from the host router)
fn update_nav(model: &mut ShellModel, msg: NavMsg) -> Option<Cmd> {
    match msg {
        NavMsg::LocationChanged(path) => {
            let next = locate(&path);

            // Same kind and same entity id: nothing to do. Guards against
            // state churn when the route changes within a section
            // (e.g., switching course tabs).
            if next == model.section {
                tracing::trace!(%path, "location unchanged, skipping");
                return None;
            }

            match &next {
                Some(section) => {
                    let entity = section.entity_id().map(str::to_string);
                    model.layout.open_panel(section.kind(), entity);
                    // A route-driven course entry carries no display title
                    model.layout.course_title = None;
                }
                None => {
                    // Leaving a section for a neutral area closes
                    // everything and brings the rail back.
                    model.layout.close_all();
                }
            }

            tracing::debug!(%path, section = ?next, "section changed");
            model.section = next;
            None
        }
    }
}

/// Handle panel intents (user-driven open/close/toggle)
fn update_panel(model: &mut ShellModel, msg: PanelMsg) -> Option<Cmd> {
    match msg {
        PanelMsg::OpenAdmin => {
            open_section(model, Section::Admin, None);
            None
        }
        PanelMsg::CloseAdmin => {
            close_section(model, PanelKind::Admin);
            None
        }
        PanelMsg::ToggleAdmin => {
            if model.layout.admin.is_open {
                close_section(model, PanelKind::Admin);
            } else {
                open_section(model, Section::Admin, None);
            }
            None
        }

        PanelMsg::OpenGroup { group_id } => {
            open_section(model, Section::Group { id: group_id }, None);
            None
        }
        PanelMsg::CloseGroup => {
            close_section(model, PanelKind::Group);
            None
        }
        PanelMsg::ToggleGroup { group_id } => {
            let same_group = model.layout.group.is_open
                && model.layout.active_entity.as_deref() == Some(group_id.as_str());
            if same_group {
                close_section(model, PanelKind::Group);
            } else {
                // Toggling a different group switches over instead of closing
                open_section(model, Section::Group { id: group_id }, None);
            }
            None
        }

        PanelMsg::OpenCourse { course_id, title } => {
            let path = model.config.course_landing_path(&course_id);
            open_section(model, Section::Course { id: course_id }, Some(title));
            Some(Cmd::Navigate { path })
        }
        PanelMsg::CloseCourse => {
            close_section(model, PanelKind::Course);
            Some(Cmd::Navigate {
                path: model.config.courses_index.clone(),
            })
        }
    }
}

/// Exclusive open: one panel open, rail collapsed, section updated
fn open_section(model: &mut ShellModel, section: Section, title: Option<String>) {
    let kind = section.kind();
    let entity = section.entity_id().map(str::to_string);
    model.layout.open_panel(kind, entity);
    if kind == PanelKind::Course {
        model.layout.course_title = title;
    }
    tracing::debug!(panel = kind.display_name(), "panel opened");
    model.section = Some(section);
}

/// Close one panel; clears the section once nothing is open
fn close_section(model: &mut ShellModel, kind: PanelKind) {
    if !model.layout.panel(kind).is_open {
        return;
    }
    model.layout.close_panel(kind);
    if !model.layout.any_open() {
        model.section = None;
    }
    tracing::debug!(panel = kind.display_name(), "panel closed");
}
