//! Time-conflict detection between sections.
//!
//! Two meetings conflict iff they share at least one day AND their
//! [start, end) minute intervals overlap. Intervals are half-open:
//! a meeting ending at 10:00 does not conflict with one starting at
//! 10:00. Asynchronous meetings (missing or unparseable times) never
//! conflict with anything.
//!
//! All checks are pure functions over plain data; the "no conflict"
//! case is the normal path, not an error.

use crate::models::{Meeting, Section};

/// Whether adding `candidate` to `accumulated` introduces a time conflict.
///
/// Compares every meeting of every accumulated section against every
/// meeting of every candidate section; a single overlapping pair is a
/// conflict.
pub fn has_conflict(accumulated: &[Section], candidate: &[Section]) -> bool {
    accumulated
        .iter()
        .any(|held| candidate.iter().any(|cand| sections_overlap(held, cand)))
}

/// Whether any meeting of `a` overlaps any meeting of `b`.
pub fn sections_overlap(a: &Section, b: &Section) -> bool {
    a.meetings
        .iter()
        .any(|ma| b.meetings.iter().any(|mb| meetings_overlap(ma, mb)))
}

/// Whether two meeting patterns overlap on some shared day.
///
/// Overlap rule on minutes-of-day: `start_a < end_b && start_b < end_a`.
pub fn meetings_overlap(a: &Meeting, b: &Meeting) -> bool {
    let (Some(start_a), Some(end_a)) = (a.start_minutes(), a.end_minutes()) else {
        return false;
    };
    let (Some(start_b), Some(end_b)) = (b.start_minutes(), b.end_minutes()) else {
        return false;
    };
    if !a.days.iter().any(|d| b.days.contains(d)) {
        return false;
    }
    start_a < end_b && start_b < end_a
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Day;

    fn timed_section(id: &str, days: Vec<Day>, start: &str, end: &str) -> Section {
        Section::new("CSC101", id).with_meeting(Meeting::new(days, start, end))
    }

    #[test]
    fn test_overlap_same_day() {
        let a = timed_section("1", vec![Day::Mon], "09:00", "10:00");
        let b = timed_section("2", vec![Day::Mon], "09:30", "10:30");
        assert!(sections_overlap(&a, &b));
        assert!(has_conflict(&[a], &[b]));
    }

    #[test]
    fn test_disjoint_days_never_conflict() {
        let a = timed_section("1", vec![Day::Mon, Day::Wed], "09:00", "10:00");
        let b = timed_section("2", vec![Day::Tue, Day::Thu], "09:00", "10:00");
        assert!(!has_conflict(&[a], &[b]));
    }

    #[test]
    fn test_back_to_back_not_a_conflict() {
        let a = timed_section("1", vec![Day::Mon], "09:00", "10:00");
        let b = timed_section("2", vec![Day::Mon], "10:00", "11:00");
        assert!(!has_conflict(&[a], &[b]));
    }

    #[test]
    fn test_symmetry() {
        let a = timed_section("1", vec![Day::Fri], "13:00", "15:00");
        let b = timed_section("2", vec![Day::Fri], "14:00", "16:00");
        assert_eq!(
            has_conflict(std::slice::from_ref(&a), std::slice::from_ref(&b)),
            has_conflict(std::slice::from_ref(&b), std::slice::from_ref(&a)),
        );
        assert!(sections_overlap(&a, &b) && sections_overlap(&b, &a));
    }

    #[test]
    fn test_async_never_conflicts() {
        let a = Section::new("CSC101", "1").with_meeting(Meeting::asynchronous());
        let b = timed_section("2", vec![Day::Mon], "00:00", "23:59");
        assert!(!has_conflict(&[a.clone()], &[b.clone()]));
        assert!(!has_conflict(&[b], &[a]));
    }

    #[test]
    fn test_no_meetings_never_conflicts() {
        let a = Section::new("CSC101", "1"); // no meetings at all
        let b = timed_section("2", vec![Day::Mon], "09:00", "10:00");
        assert!(!has_conflict(&[a], &[b]));
    }

    #[test]
    fn test_malformed_time_treated_as_async() {
        let a = Section::new("CSC101", "1").with_meeting(Meeting::new(
            vec![Day::Mon],
            "nine",
            "10:00",
        ));
        let b = timed_section("2", vec![Day::Mon], "09:00", "10:00");
        assert!(!has_conflict(&[a], &[b]));
    }

    #[test]
    fn test_multi_meeting_sections() {
        // Section with two patterns; only the second collides.
        let a = Section::new("CSC101", "1")
            .with_meeting(Meeting::new(vec![Day::Mon], "08:00", "09:00"))
            .with_meeting(Meeting::new(vec![Day::Wed], "14:00", "16:00"));
        let b = timed_section("2", vec![Day::Wed], "15:00", "17:00");
        assert!(has_conflict(&[a], &[b]));
    }

    #[test]
    fn test_empty_accumulator_never_conflicts() {
        let b = timed_section("2", vec![Day::Mon], "09:00", "10:00");
        assert!(!has_conflict(&[], &[b]));
    }

    #[test]
    fn test_containment_is_overlap() {
        let a = timed_section("1", vec![Day::Tue], "09:00", "12:00");
        let b = timed_section("2", vec![Day::Tue], "10:00", "11:00");
        assert!(has_conflict(&[a], &[b]));
    }
}
