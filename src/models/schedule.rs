//! Schedule (output) model.
//!
//! A schedule is a finished weekly timetable: the union of the section
//! groups chosen for each course, plus the aggregate instructor rating
//! used for ranking. Schedules are produced, filtered, sorted, and
//! handed back immutably; the generator keeps no state between calls.

use serde::{Deserialize, Serialize};

use super::section::{parse_units, Section};

/// A completed timetable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Sections chosen, flattened across courses.
    pub sections: Vec<Section>,
    /// Mean instructor rating over courses with at least one rated
    /// instructor. `None` when no course in the schedule is rated.
    pub average_rating: Option<f64>,
}

impl Schedule {
    /// Creates a schedule from its parts.
    pub fn new(sections: Vec<Section>, average_rating: Option<f64>) -> Self {
        Self {
            sections,
            average_rating,
        }
    }

    /// Total unit load across all sections.
    pub fn total_units(&self) -> f64 {
        self.sections.iter().map(|s| parse_units(&s.units)).sum()
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Whether every course was skipped.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Whether a section with the given class number is included.
    pub fn contains(&self, class_number: &str) -> bool {
        self.sections.iter().any(|s| s.class_number == class_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Section;

    #[test]
    fn test_total_units() {
        let s = Schedule::new(
            vec![
                Section::new("CSC349", "1001").with_units("4"),
                Section::new("MATH142", "2200").with_units("2 - 4"),
            ],
            None,
        );
        assert_eq!(s.total_units(), 7.0); // 4 + midpoint(2,4)
        assert_eq!(s.section_count(), 2);
        assert!(!s.is_empty());
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::default();
        assert_eq!(s.total_units(), 0.0);
        assert!(s.is_empty());
        assert!(!s.contains("1001"));
    }

    #[test]
    fn test_contains() {
        let s = Schedule::new(vec![Section::new("CSC349", "1001")], Some(4.0));
        assert!(s.contains("1001"));
        assert!(!s.contains("9999"));
    }
}
