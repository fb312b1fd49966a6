//! Panel coordinator integration tests
//!
//! Covers the mutual-exclusion and rail-coupling invariants, idempotent
//! location handling, and the navigation scenarios of the console shell.

use std::cell::RefCell;
use std::rc::Rc;

use atrium::commands::Cmd;
use atrium::model::{PanelKind, Section};
use atrium::store::ShellStore;

/// Rail collapse must track panel visibility in every reachable state
fn assert_invariants(store: &ShellStore) {
    assert!(store.model().layout.is_consistent());
    let any_open = store.is_admin_open() || store.is_group_open() || store.is_course_open();
    assert_eq!(store.is_rail_collapsed(), any_open);
}

#[test]
fn test_initial_state_all_closed() {
    let store = ShellStore::new();
    assert!(!store.is_admin_open());
    assert!(!store.is_group_open());
    assert!(!store.is_course_open());
    assert!(!store.is_rail_collapsed());
    assert_eq!(store.section(), None);
    assert_invariants(&store);
}

// ========================================================================
// Route-driven transitions
// ========================================================================

#[test]
fn test_admin_route_opens_admin_panel() {
    // Scenario: dashboard -> admin area
    let mut store = ShellStore::new();
    store.apply_location("/dashboard");
    let cmd = store.apply_location("/admin/users");

    assert!(cmd.is_none());
    assert!(store.is_admin_open());
    assert!(!store.is_group_open());
    assert!(!store.is_course_open());
    assert!(store.is_rail_collapsed());
    assert_eq!(store.section(), Some(&Section::Admin));
    assert_invariants(&store);
}

#[test]
fn test_group_route_switches_from_admin() {
    // Scenario: admin area -> a group's feed
    let mut store = ShellStore::new();
    store.apply_location("/admin/users");
    store.apply_location("/groups/view/42");

    assert!(store.is_group_open());
    assert!(!store.is_admin_open());
    assert_eq!(store.active_entity(), Some("42"));
    assert!(store.is_rail_collapsed());
    assert_invariants(&store);
}

#[test]
fn test_neutral_route_closes_everything() {
    // Scenario: a group's area -> dashboard
    let mut store = ShellStore::new();
    store.apply_location("/groups/view/42");
    store.apply_location("/dashboard");

    assert!(!store.is_admin_open());
    assert!(!store.is_group_open());
    assert!(!store.is_course_open());
    assert!(!store.is_rail_collapsed());
    assert_eq!(store.active_entity(), None);
    assert_eq!(store.section(), None);
    assert_invariants(&store);
}

#[test]
fn test_location_changes_never_navigate() {
    let mut store = ShellStore::new();
    let paths = [
        "/dashboard",
        "/admin/users",
        "/groups/view/42",
        "/courses/view/7/modules",
        "/courses",
        "/admin/courses/view/x",
        "/",
    ];
    for path in paths {
        let cmd = store.apply_location(path);
        assert!(cmd.is_none(), "location {} produced {:?}", path, cmd);
        assert_invariants(&store);
    }
}

#[test]
fn test_apply_location_is_idempotent() {
    let mut store = ShellStore::new();
    store.apply_location("/groups/view/42");
    let after_first = store.model().clone();

    store.apply_location("/groups/view/42");
    assert_eq!(store.model(), &after_first);
}

#[test]
fn test_course_tab_change_is_noop() {
    // Same course, different tab: same section, no transition
    let mut store = ShellStore::new();
    store.apply_location("/courses/view/7/modules");
    let after_first = store.model().clone();

    store.apply_location("/courses/view/7/assignments");
    assert_eq!(store.model(), &after_first);
}

#[test]
fn test_route_switch_between_entities_updates_id() {
    let mut store = ShellStore::new();
    store.apply_location("/groups/view/42");
    store.apply_location("/groups/view/9");

    assert!(store.is_group_open());
    assert_eq!(store.active_entity(), Some("9"));
    assert_invariants(&store);
}

#[test]
fn test_url_driven_course_entry_has_no_title() {
    let mut store = ShellStore::new();
    store.apply_location("/courses/view/7/modules");

    assert!(store.is_course_open());
    assert_eq!(store.active_entity(), Some("7"));
    assert_eq!(store.course_title(), None);
    assert_invariants(&store);
}

// ========================================================================
// Intent-driven transitions
// ========================================================================

#[test]
fn test_open_course_sidebar_navigates() {
    // Scenario: "open course sidebar" intent stores the title and asks
    // the router for the landing tab
    let mut store = ShellStore::new();
    let cmd = store.open_course_sidebar("7", "Intro to Biology");

    assert_eq!(
        cmd,
        Cmd::Navigate {
            path: "/courses/view/7/modules".into()
        }
    );
    assert!(store.is_course_open());
    assert_eq!(store.active_entity(), Some("7"));
    assert_eq!(store.course_title(), Some("Intro to Biology"));
    assert!(store.is_rail_collapsed());
    assert_invariants(&store);
}

#[test]
fn test_router_echo_after_open_course_is_noop() {
    // The host router executes the navigation and reports it back; the
    // echoed location must not disturb the state (or the stored title)
    let mut store = ShellStore::new();
    let cmd = store.open_course_sidebar("7", "Intro to Biology");
    let after_open = store.model().clone();

    for path in cmd.navigations() {
        let followup = store.apply_location(&path.to_string());
        assert!(followup.is_none());
    }
    assert_eq!(store.model(), &after_open);
    assert_eq!(store.course_title(), Some("Intro to Biology"));
}

#[test]
fn test_close_course_sidebar_navigates_to_index() {
    let mut store = ShellStore::new();
    store.open_course_sidebar("7", "Intro to Biology");
    let cmd = store.close_course_sidebar();

    assert_eq!(
        cmd,
        Cmd::Navigate {
            path: "/courses".into()
        }
    );
    assert!(!store.is_course_open());
    assert!(!store.is_rail_collapsed());
    assert_eq!(store.course_title(), None);
    assert_invariants(&store);
}

#[test]
fn test_admin_round_trip_restores_state() {
    let mut store = ShellStore::new();
    let before = store.model().layout.clone();

    store.open_admin_panel();
    assert!(store.is_admin_open());

    store.close_admin_panel();
    assert_eq!(store.model().layout, before);
    assert_eq!(store.section(), None);
}

#[test]
fn test_toggle_admin() {
    let mut store = ShellStore::new();

    store.toggle_admin_panel();
    assert!(store.is_admin_open());
    assert!(store.is_rail_collapsed());

    store.toggle_admin_panel();
    assert!(!store.is_admin_open());
    assert!(!store.is_rail_collapsed());
    assert_invariants(&store);
}

#[test]
fn test_toggle_group_switches_between_groups() {
    let mut store = ShellStore::new();

    store.toggle_group_panel("42");
    assert!(store.is_group_open());
    assert_eq!(store.active_entity(), Some("42"));

    // Different group: switch, not close
    store.toggle_group_panel("9");
    assert!(store.is_group_open());
    assert_eq!(store.active_entity(), Some("9"));

    // Same group again: close
    store.toggle_group_panel("9");
    assert!(!store.is_group_open());
    assert_eq!(store.active_entity(), None);
    assert_invariants(&store);
}

#[test]
fn test_mutual_exclusion_over_arbitrary_sequence() {
    let mut store = ShellStore::new();

    store.open_admin_panel();
    store.open_group_panel("42");
    store.apply_location("/courses/view/7/modules");
    store.open_course_sidebar("8", "Algebra II");
    store.apply_location("/admin");
    store.toggle_group_panel("5");

    let open_count = [
        store.is_admin_open(),
        store.is_group_open(),
        store.is_course_open(),
    ]
    .iter()
    .filter(|&&open| open)
    .count();
    assert!(open_count <= 1);
    assert_eq!(store.open_panel(), Some(PanelKind::Group));
    assert_invariants(&store);
}

#[test]
fn test_intent_open_sets_section() {
    let mut store = ShellStore::new();
    store.open_group_panel("42");
    assert_eq!(store.section(), Some(&Section::group("42")));

    store.open_admin_panel();
    assert_eq!(store.section(), Some(&Section::Admin));
}

#[test]
fn test_reset_restores_defaults() {
    // Full-reload semantics: back to no section, all closed, rail expanded
    let mut store = ShellStore::new();
    store.open_course_sidebar("7", "Intro to Biology");

    store.reset();
    assert!(!store.is_course_open());
    assert!(!store.is_rail_collapsed());
    assert_eq!(store.section(), None);
    assert_eq!(store.active_entity(), None);
    assert_eq!(store.course_title(), None);
    assert_invariants(&store);
}

// ========================================================================
// Subscriptions
// ========================================================================

#[test]
fn test_subscribers_notified_on_change_only() {
    let mut store = ShellStore::new();
    let notifications = Rc::new(RefCell::new(0u32));
    let seen = Rc::clone(&notifications);
    store.subscribe(move |_| *seen.borrow_mut() += 1);

    store.apply_location("/admin/users");
    assert_eq!(*notifications.borrow(), 1);

    // No-op dispatches stay silent
    store.apply_location("/admin/settings");
    assert_eq!(*notifications.borrow(), 1);

    store.apply_location("/dashboard");
    assert_eq!(*notifications.borrow(), 2);
}

#[test]
fn test_subscriber_sees_new_state() {
    let mut store = ShellStore::new();
    let observed = Rc::new(RefCell::new(false));
    let sink = Rc::clone(&observed);
    store.subscribe(move |model| {
        *sink.borrow_mut() = model.layout.admin.is_open;
    });

    store.open_admin_panel();
    assert!(*observed.borrow());
}

#[test]
fn test_unsubscribe_stops_notifications() {
    let mut store = ShellStore::new();
    let notifications = Rc::new(RefCell::new(0u32));
    let seen = Rc::clone(&notifications);
    let id = store.subscribe(move |_| *seen.borrow_mut() += 1);

    store.open_admin_panel();
    assert_eq!(*notifications.borrow(), 1);

    assert!(store.unsubscribe(id));
    store.close_admin_panel();
    assert_eq!(*notifications.borrow(), 1);

    // Second removal reports the id as gone
    assert!(!store.unsubscribe(id));
}
