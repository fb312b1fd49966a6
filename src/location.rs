//! Location matcher - maps navigation paths to sections
//!
//! Pure and total: every path resolves to `Some(Section)` or `None`, never
//! fails, and has no side effects. In particular the matcher never triggers
//! navigation itself; reacting to a location change must not synchronously
//! change the location again.
//!
//! Rule order matters. The admin prefix is checked before the group and
//! course rules, so `/admin/courses/view/x` stays in the admin section.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::Section;

/// Prefix for the administration area
const ADMIN_PREFIX: &str = "/admin";

static GROUP_ROUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/groups/view/([^/]+)").expect("group route pattern is valid")
});

static COURSE_ROUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/courses/view/([^/]+)").expect("course route pattern is valid")
});

/// Classify a navigation path into a section
///
/// First match wins:
/// 1. `/admin...` → [`Section::Admin`]
/// 2. `/groups/view/{id}...` → [`Section::Group`]
/// 3. `/courses/view/{id}...` → [`Section::Course`]
/// 4. anything else → `None`
pub fn locate(path: &str) -> Option<Section> {
    if path.starts_with(ADMIN_PREFIX) {
        return Some(Section::Admin);
    }
    if let Some(caps) = GROUP_ROUTE.captures(path) {
        return Some(Section::group(&caps[1]));
    }
    if let Some(caps) = COURSE_ROUTE.captures(path) {
        return Some(Section::course(&caps[1]));
    }
    None
}
