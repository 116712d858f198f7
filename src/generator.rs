//! Combination generation.
//!
//! Recursive skip-or-pick enumeration over the ordered per-course
//! selection groups. At each course the walk either skips the course
//! entirely or commits one of its valid selections, so the result set
//! covers every subset of course-selections — including the fully
//! skipped (empty) timetable.
//!
//! Two variants:
//! - **Strict**: a branch is cut as soon as the chosen selection would
//!   time-conflict with the accumulated sections. Every emitted
//!   timetable is pairwise conflict-free.
//! - **Conflict-tolerant**: no conflict check; branches are cut by a
//!   running unit total against `max_units` instead, and a timetable is
//!   emitted only when it reaches `min_units`. Overlapping alternatives
//!   survive as separate schedules for side-by-side comparison.
//!
//! Branching is exponential in the number of courses; bounding the
//! candidate pool is the caller's responsibility.

use tracing::debug;

use crate::conflict::has_conflict;
use crate::models::{Preferences, Schedule, Section};
use crate::ranking::filter_schedules;
use crate::selection::{course_selection_groups, Selection};

/// Generates ranked schedules from a candidate pool.
///
/// Top-level entry point: applies the `open_only` pre-filter, branches
/// to the strict or conflict-tolerant variant per
/// `preferences.show_overlapping`, then filters and ranks the results.
pub fn build_schedules(pool: &[Section], preferences: &Preferences) -> Vec<Schedule> {
    if let Err(errors) = crate::validation::validate_pool(pool) {
        for e in &errors {
            tracing::warn!(kind = ?e.kind, "candidate pool issue: {}", e.message);
        }
    }

    if preferences.show_overlapping {
        generate_with_overlaps(pool, preferences)
    } else {
        generate_all_combinations(pool, preferences)
    }
}

/// Strict variant: every returned schedule is internally conflict-free.
pub fn generate_all_combinations(pool: &[Section], preferences: &Preferences) -> Vec<Schedule> {
    let groups = course_selection_groups(pool, preferences.open_only);
    let raw = enumerate_strict(&groups);
    debug!(
        courses = groups.len(),
        raw = raw.len(),
        "strict enumeration complete"
    );
    filter_schedules(raw, preferences)
}

/// Conflict-tolerant variant: time overlaps are allowed, branches are
/// pruned by total units instead.
pub fn generate_with_overlaps(pool: &[Section], preferences: &Preferences) -> Vec<Schedule> {
    let groups = course_selection_groups(pool, preferences.open_only);
    let raw = enumerate_tolerant(&groups, preferences);
    debug!(
        courses = groups.len(),
        raw = raw.len(),
        "tolerant enumeration complete"
    );
    filter_schedules(raw, preferences)
}

/// Enumerates every conflict-free combination of selections.
///
/// Exposed for callers that want the raw section lists before unit and
/// rating filtering.
pub fn enumerate_strict(groups: &[Vec<Selection>]) -> Vec<Vec<Section>> {
    let mut out = Vec::new();
    let mut acc = Vec::new();
    walk_strict(groups, 0, &mut acc, &mut out);
    out
}

fn walk_strict(
    groups: &[Vec<Selection>],
    index: usize,
    acc: &mut Vec<Section>,
    out: &mut Vec<Vec<Section>>,
) {
    if index == groups.len() {
        out.push(acc.clone());
        return;
    }

    // Skip this course entirely.
    walk_strict(groups, index + 1, acc, out);

    // Or commit each selection that fits.
    for selection in &groups[index] {
        if has_conflict(acc, &selection.sections) {
            continue;
        }
        let held = acc.len();
        acc.extend(selection.sections.iter().cloned());
        walk_strict(groups, index + 1, acc, out);
        acc.truncate(held);
    }
}

/// Enumerates combinations without conflict checks, pruning on units.
pub fn enumerate_tolerant(
    groups: &[Vec<Selection>],
    preferences: &Preferences,
) -> Vec<Vec<Section>> {
    let mut out = Vec::new();
    let mut acc = Vec::new();
    let min_units = preferences.min_units.unwrap_or(0.0);
    walk_tolerant(
        groups,
        0,
        &mut acc,
        0.0,
        min_units,
        preferences.max_units,
        &mut out,
    );
    out
}

fn walk_tolerant(
    groups: &[Vec<Selection>],
    index: usize,
    acc: &mut Vec<Section>,
    units_so_far: f64,
    min_units: f64,
    max_units: Option<f64>,
    out: &mut Vec<Vec<Section>>,
) {
    if index == groups.len() {
        if units_so_far >= min_units {
            out.push(acc.clone());
        }
        return;
    }

    walk_tolerant(groups, index + 1, acc, units_so_far, min_units, max_units, out);

    for selection in &groups[index] {
        let next_units = units_so_far + selection.unit_value();
        if let Some(max) = max_units {
            if next_units > max {
                continue;
            }
        }
        let held = acc.len();
        acc.extend(selection.sections.iter().cloned());
        walk_tolerant(groups, index + 1, acc, next_units, min_units, max_units, out);
        acc.truncate(held);
    }
}
