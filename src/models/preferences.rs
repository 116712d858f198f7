//! Generation preferences.
//!
//! Controls which candidate sections participate, which enumeration
//! variant runs, and which unit/rating bounds a finished schedule must
//! satisfy. All bounds are inclusive; an absent bound imposes no
//! constraint.

use serde::{Deserialize, Serialize};

/// Preferences for one generation call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Exclude non-open sections before generation.
    pub open_only: bool,
    /// Enumeration variant: `true` = conflict-tolerant with unit
    /// pruning (overlapping alternatives kept as separate schedules),
    /// `false` = strict no-conflict enumeration.
    pub show_overlapping: bool,
    /// Minimum total units (inclusive).
    pub min_units: Option<f64>,
    /// Maximum total units (inclusive).
    pub max_units: Option<f64>,
    /// Minimum average instructor rating (inclusive).
    pub min_instructor_rating: Option<f64>,
    /// Maximum average instructor rating (inclusive).
    pub max_instructor_rating: Option<f64>,
}

impl Preferences {
    /// Creates unconstrained preferences (strict variant, all sections).
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts generation to open sections.
    pub fn open_only(mut self) -> Self {
        self.open_only = true;
        self
    }

    /// Switches to the conflict-tolerant enumeration variant.
    pub fn show_overlapping(mut self) -> Self {
        self.show_overlapping = true;
        self
    }

    /// Sets inclusive total-unit bounds.
    pub fn with_unit_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_units = min;
        self.max_units = max;
        self
    }

    /// Sets inclusive average-rating bounds.
    pub fn with_rating_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_instructor_rating = min;
        self.max_instructor_rating = max;
        self
    }

    /// Whether any rating bound is set.
    pub fn has_rating_bound(&self) -> bool {
        self.min_instructor_rating.is_some() || self.max_instructor_rating.is_some()
    }

    /// Checks a total-unit value against the unit bounds.
    pub fn units_in_bounds(&self, units: f64) -> bool {
        if let Some(min) = self.min_units {
            if units < min {
                return false;
            }
        }
        if let Some(max) = self.max_units {
            if units > max {
                return false;
            }
        }
        true
    }

    /// Checks an average rating against the rating bounds.
    ///
    /// `None` (no rated course in the schedule) fails any bound that is
    /// set — an unrated schedule cannot demonstrate it meets a rating
    /// requirement.
    pub fn rating_in_bounds(&self, average: Option<f64>) -> bool {
        if !self.has_rating_bound() {
            return true;
        }
        let Some(avg) = average else {
            return false;
        };
        if let Some(min) = self.min_instructor_rating {
            if avg < min {
                return false;
            }
        }
        if let Some(max) = self.max_instructor_rating {
            if avg > max {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_unconstrained() {
        let p = Preferences::new();
        assert!(!p.open_only);
        assert!(!p.show_overlapping);
        assert!(p.units_in_bounds(0.0));
        assert!(p.units_in_bounds(100.0));
        assert!(p.rating_in_bounds(None));
    }

    #[test]
    fn test_unit_bounds_inclusive() {
        let p = Preferences::new().with_unit_bounds(Some(12.0), Some(16.0));
        assert!(p.units_in_bounds(12.0));
        assert!(p.units_in_bounds(16.0));
        assert!(!p.units_in_bounds(11.5));
        assert!(!p.units_in_bounds(16.5));
    }

    #[test]
    fn test_rating_bounds_inclusive() {
        let p = Preferences::new().with_rating_bounds(Some(3.0), None);
        assert!(p.rating_in_bounds(Some(3.0)));
        assert!(p.rating_in_bounds(Some(4.2)));
        assert!(!p.rating_in_bounds(Some(2.9)));
    }

    #[test]
    fn test_unrated_fails_rating_bound() {
        let p = Preferences::new().with_rating_bounds(Some(1.0), None);
        assert!(!p.rating_in_bounds(None));

        let unbounded = Preferences::new();
        assert!(unbounded.rating_in_bounds(None));
    }

    #[test]
    fn test_builder_flags() {
        let p = Preferences::new().open_only().show_overlapping();
        assert!(p.open_only);
        assert!(p.show_overlapping);
    }
}
