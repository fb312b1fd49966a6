//! Interactive inspector for the panel coordinator
//!
//! Plays the role of both UI chrome (issuing panel intents) and host
//! router (reporting route changes and executing navigation commands).
//! Navigation commands returned by a dispatch are executed afterwards as
//! separate events, exactly as a real router integration would.
//!
//! Commands:
//!   goto PATH               report a route change
//!   open admin              open the admin panel
//!   open group ID           open the group panel
//!   open course ID TITLE    open the course sidebar (navigates)
//!   close admin|group|course
//!   toggle admin            toggle the admin panel
//!   toggle group ID         toggle the group panel
//!   state                   print the current panel state
//!   reset                   reset to the initial default state
//!   quit                    exit

use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use clap::Parser;

use atrium::cli::CliArgs;
use atrium::commands::Cmd;
use atrium::config::ShellConfig;
use atrium::model::ShellModel;
use atrium::session::SessionSnapshot;
use atrium::store::ShellStore;

/// One parsed inspector command
#[derive(Debug, Clone)]
enum ReplCommand {
    Goto(String),
    OpenAdmin,
    OpenGroup(String),
    OpenCourse { id: String, title: String },
    CloseAdmin,
    CloseGroup,
    CloseCourse,
    ToggleAdmin,
    ToggleGroup(String),
    State,
    Reset,
    Help,
    Quit,
}

fn main() -> Result<()> {
    atrium::tracing::init();
    let args = CliArgs::parse();

    let config = ShellConfig::load();
    let restore = config.restore_session && !args.no_restore;
    let mut store = ShellStore::with_config(config);

    if restore {
        if let Some(snapshot) = SessionSnapshot::load() {
            if store.restore(snapshot) {
                tracing::info!("Restored previous session");
            }
        }
    }

    print_state(store.model());

    if let Some(script) = &args.replay {
        let contents = fs::read_to_string(script)?;
        for line in contents.lines() {
            if !run_line(&mut store, line)? {
                break;
            }
        }
    } else {
        let stdin = io::stdin();
        let mut out = io::stdout();
        loop {
            write!(out, "> ")?;
            out.flush()?;
            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break; // EOF
            }
            if !run_line(&mut store, &line)? {
                break;
            }
        }
    }

    if !args.no_save {
        if let Err(e) = store.snapshot().save() {
            tracing::warn!("Could not save session: {}", e);
        }
    }

    Ok(())
}

/// Parse and execute one input line; returns false when the session ends
fn run_line(store: &mut ShellStore, line: &str) -> Result<bool> {
    let command = match parse_command(line) {
        Ok(Some(command)) => command,
        Ok(None) => return Ok(true),
        Err(e) => {
            println!("error: {}", e);
            return Ok(true);
        }
    };

    let cmd = match command {
        ReplCommand::Goto(path) => store.apply_location(&path),
        ReplCommand::OpenAdmin => store.open_admin_panel(),
        ReplCommand::OpenGroup(id) => store.open_group_panel(&id),
        ReplCommand::OpenCourse { id, title } => store.open_course_sidebar(&id, &title),
        ReplCommand::CloseAdmin => store.close_admin_panel(),
        ReplCommand::CloseGroup => store.close_group_panel(),
        ReplCommand::CloseCourse => store.close_course_sidebar(),
        ReplCommand::ToggleAdmin => store.toggle_admin_panel(),
        ReplCommand::ToggleGroup(id) => store.toggle_group_panel(&id),
        ReplCommand::State => {
            print_state(store.model());
            return Ok(true);
        }
        ReplCommand::Reset => {
            store.reset();
            print_state(store.model());
            return Ok(true);
        }
        ReplCommand::Help => {
            print_help();
            return Ok(true);
        }
        ReplCommand::Quit => return Ok(false),
    };

    route(store, cmd);
    print_state(store.model());
    Ok(true)
}

/// Host-router role: execute navigation requests, then report the new
/// location back as its own event.
fn route(store: &mut ShellStore, cmd: Cmd) {
    for path in cmd.navigations() {
        println!("navigate -> {}", path);
        let path = path.to_string();
        let followup = store.apply_location(&path);
        // Location changes never navigate further
        debug_assert!(followup.is_none());
    }
}

fn parse_command(line: &str) -> Result<Option<ReplCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut words = line.split_whitespace();
    let head = words.next().unwrap_or_default();

    let command = match head {
        "goto" => {
            let Some(path) = words.next() else {
                bail!("usage: goto PATH");
            };
            ReplCommand::Goto(path.to_string())
        }
        "open" => match words.next() {
            Some("admin") => ReplCommand::OpenAdmin,
            Some("group") => {
                let Some(id) = words.next() else {
                    bail!("usage: open group ID");
                };
                ReplCommand::OpenGroup(id.to_string())
            }
            Some("course") => {
                let Some(id) = words.next() else {
                    bail!("usage: open course ID TITLE");
                };
                let title = words.collect::<Vec<_>>().join(" ");
                if title.is_empty() {
                    bail!("usage: open course ID TITLE");
                }
                ReplCommand::OpenCourse {
                    id: id.to_string(),
                    title,
                }
            }
            _ => bail!("usage: open admin|group|course ..."),
        },
        "close" => match words.next() {
            Some("admin") => ReplCommand::CloseAdmin,
            Some("group") => ReplCommand::CloseGroup,
            Some("course") => ReplCommand::CloseCourse,
            _ => bail!("usage: close admin|group|course"),
        },
        "toggle" => match words.next() {
            Some("admin") => ReplCommand::ToggleAdmin,
            Some("group") => {
                let Some(id) = words.next() else {
                    bail!("usage: toggle group ID");
                };
                ReplCommand::ToggleGroup(id.to_string())
            }
            _ => bail!("usage: toggle admin | toggle group ID"),
        },
        "state" => ReplCommand::State,
        "reset" => ReplCommand::Reset,
        "help" => ReplCommand::Help,
        "quit" | "exit" => ReplCommand::Quit,
        other => bail!("unknown command: {}", other),
    };

    Ok(Some(command))
}

fn print_state(model: &ShellModel) {
    let layout = &model.layout;
    let mark = |open: bool| if open { "open" } else { "closed" };
    println!(
        "rail: {} | admin: {} | group: {} | course: {}",
        if layout.rail_collapsed {
            "collapsed"
        } else {
            "expanded"
        },
        mark(layout.admin.is_open),
        mark(layout.group.is_open),
        mark(layout.course.is_open),
    );
    println!(
        "section: {:?} | entity: {:?} | title: {:?}",
        model.section, layout.active_entity, layout.course_title
    );
}

fn print_help() {
    println!("commands:");
    println!("  goto PATH");
    println!("  open admin | open group ID | open course ID TITLE");
    println!("  close admin|group|course");
    println!("  toggle admin | toggle group ID");
    println!("  state | reset | help | quit");
}
