//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an
//! update. The coordinator never performs navigation itself; it returns
//! `Navigate` requests for the host router to execute. The router reports
//! the resulting route change back as a separate `LocationChanged` event,
//! never synchronously from inside a dispatch.

/// A side effect requested by the update layer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Ask the host router to navigate to a path
    Navigate { path: String },
    /// Execute multiple commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Whether this command carries no work
    pub fn is_none(&self) -> bool {
        match self {
            Cmd::None => true,
            Cmd::Navigate { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().all(Cmd::is_none),
        }
    }

    /// Collect every navigation path in this command, in order
    ///
    /// Convenience for hosts whose only side effect is routing.
    pub fn navigations(&self) -> Vec<&str> {
        let mut paths = Vec::new();
        self.collect_navigations(&mut paths);
        paths
    }

    fn collect_navigations<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Cmd::None => {}
            Cmd::Navigate { path } => out.push(path),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    cmd.collect_navigations(out);
                }
            }
        }
    }
}
