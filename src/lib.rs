//! Atrium - contextual panel coordinator for an LMS admin console
//!
//! This crate implements the navigation shell of a learning-management
//! administration console as an Elm-architecture state machine: a single
//! [`store::ShellStore`] per UI session owns which contextual side panel
//! (admin, group, or course) is visible next to a collapsible primary
//! navigation rail. Route changes and user intents flow in as messages;
//! navigation requests for the host router flow out as commands.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod location;
pub mod messages;
pub mod model;
pub mod session;
pub mod store;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ShellConfig;
pub use messages::Msg;
pub use model::{PanelKind, PanelLayout, Section, ShellModel};
pub use store::{ShellStore, SubscriptionId};
