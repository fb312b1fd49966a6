//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. Navigation events
//! come from the host router; panel intents come from UI chrome (nav
//! buttons, menu items, breadcrumbs).

/// Navigation events reported by the host router
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavMsg {
    /// The route changed; payload is the new path
    LocationChanged(String),
}

/// Panel intents - user-driven open/close/toggle requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelMsg {
    /// Open the admin panel (Admin section entry point)
    OpenAdmin,
    /// Close the admin panel
    CloseAdmin,
    /// Toggle the admin panel (sidebar button)
    ToggleAdmin,
    /// Open the group panel for a specific group
    OpenGroup { group_id: String },
    /// Close the group panel
    CloseGroup,
    /// Toggle the group panel; toggling a different group switches over
    ToggleGroup { group_id: String },
    /// Open the course sidebar; also navigates to the course landing tab
    /// and stores the display title
    OpenCourse { course_id: String, title: String },
    /// Close the course sidebar; also navigates back to the course list
    CloseCourse,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Navigation messages (route changes)
    Nav(NavMsg),
    /// Panel messages (user intents)
    Panel(PanelMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a location-changed message
    pub fn location_changed(path: impl Into<String>) -> Self {
        Msg::Nav(NavMsg::LocationChanged(path.into()))
    }

    /// Create an open-course message
    pub fn open_course(course_id: impl Into<String>, title: impl Into<String>) -> Self {
        Msg::Panel(PanelMsg::OpenCourse {
            course_id: course_id.into(),
            title: title.into(),
        })
    }
}
