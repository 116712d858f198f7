//! Course grouping and selection expansion.
//!
//! A *selection* is the smallest group of sections that satisfies one
//! course: a standalone section, or a lecture together with its paired
//! lab. Selections for the same course are mutually exclusive
//! alternatives; the generator later picks at most one per course.

use serde::{Deserialize, Serialize};

use crate::models::{parse_units, Section};

/// One way to satisfy a single course: one or more sections that must
/// be added to a schedule together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Sections consumed together (e.g. `[lecture]` or `[lecture, lab]`).
    pub sections: Vec<Section>,
}

impl Selection {
    /// Creates a selection from its sections.
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Total unit load of this selection.
    pub fn unit_value(&self) -> f64 {
        self.sections.iter().map(|s| parse_units(&s.units)).sum()
    }
}

/// Groups a flat candidate pool by course, preserving the order in
/// which courses first appear.
pub fn group_by_course(pool: &[Section]) -> Vec<Vec<Section>> {
    let mut groups: Vec<Vec<Section>> = Vec::new();
    for section in pool {
        match groups
            .iter_mut()
            .find(|g| g[0].course_id == section.course_id)
        {
            Some(group) => group.push(section.clone()),
            None => groups.push(vec![section.clone()]),
        }
    }
    groups
}

/// Expands one course's candidate sections into its valid selections.
///
/// - With `open_only`, non-open sections are dropped before pairing.
/// - A section with a `class_pair` yields the two-element selection
///   `[section, pair]` only when the pair is present in the group and
///   survives the filter. A lecture whose lab is absent or filtered
///   yields nothing rather than an invalid half-schedule.
/// - A section already consumed as someone's pair is not offered again.
/// - Pair-free sections are singleton selections.
///
/// An empty result means the course contributes nothing to generation.
pub fn valid_selections_for_course(course_sections: &[Section], open_only: bool) -> Vec<Selection> {
    let eligible: Vec<&Section> = course_sections
        .iter()
        .filter(|s| !open_only || s.is_open())
        .collect();

    let mut selections = Vec::new();
    let mut consumed: Vec<&str> = Vec::new();

    for section in &eligible {
        if consumed.contains(&section.class_number.as_str()) {
            continue;
        }
        match &section.class_pair {
            Some(pair_number) => {
                let pair = eligible
                    .iter()
                    .find(|s| s.class_number == *pair_number && s.class_number != section.class_number);
                if let Some(pair) = pair {
                    consumed.push(pair.class_number.as_str());
                    selections.push(Selection::new(vec![(*section).clone(), (*pair).clone()]));
                }
                // Pair missing or filtered: this section is not offered alone.
            }
            None => selections.push(Selection::new(vec![(*section).clone()])),
        }
    }

    selections
}

/// Builds the ordered per-course selection groups for a whole pool.
///
/// Courses whose every selection was filtered away are dropped here so
/// they never block generation of the remaining courses.
pub fn course_selection_groups(pool: &[Section], open_only: bool) -> Vec<Vec<Selection>> {
    group_by_course(pool)
        .iter()
        .map(|course| valid_selections_for_course(course, open_only))
        .filter(|selections| !selections.is_empty())
        .collect()
}
