//! Unit/rating filtering and final ordering.
//!
//! Reduces raw section lists to finished [`Schedule`]s: totals units,
//! aggregates the instructor rating once per course (a lecture+lab pair
//! must not count its course twice), rejects schedules outside the
//! preference bounds, and sorts what remains.
//!
//! Sort order: total units descending, then average rating descending.
//! The sort is stable, so equal keys keep enumeration order.

use std::cmp::Ordering;

use crate::models::{parse_units, Preferences, Schedule, Section};

/// Filters raw schedules against the preferences and ranks the rest.
pub fn filter_schedules(raw: Vec<Vec<Section>>, preferences: &Preferences) -> Vec<Schedule> {
    let mut schedules: Vec<Schedule> = raw
        .into_iter()
        .filter_map(|sections| evaluate(sections, preferences))
        .collect();

    schedules.sort_by(|a, b| {
        compare_desc(a.total_units(), b.total_units()).then_with(|| {
            compare_desc(
                a.average_rating.unwrap_or(f64::NEG_INFINITY),
                b.average_rating.unwrap_or(f64::NEG_INFINITY),
            )
        })
    });

    schedules
}

/// Totals one raw schedule and applies the bounds.
///
/// Every section contributes its unit value; only the first section
/// seen per course contributes its rating, and only rated courses are
/// counted toward the average's denominator.
fn evaluate(sections: Vec<Section>, preferences: &Preferences) -> Option<Schedule> {
    let mut unit_total = 0.0;
    let mut rating_total = 0.0;
    let mut rated_courses = 0u32;
    let mut seen_courses: Vec<&str> = Vec::new();

    for section in &sections {
        unit_total += parse_units(&section.units);
        if seen_courses.contains(&section.course_id.as_str()) {
            continue; // second half of a pair: units only, no rating
        }
        seen_courses.push(section.course_id.as_str());
        rating_total += section.rating;
        if section.is_rated() {
            rated_courses += 1;
        }
    }

    let average_rating = if rated_courses > 0 {
        Some(rating_total / f64::from(rated_courses))
    } else {
        None
    };

    if !preferences.units_in_bounds(unit_total) {
        return None;
    }
    if !preferences.rating_in_bounds(average_rating) {
        return None;
    }

    Some(Schedule::new(sections, average_rating))
}

/// Descending partial-order comparison, treating incomparable as equal.
fn compare_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
