//! Candidate-pool integrity checks.
//!
//! Detects structural problems in the section pool before generation:
//! - Duplicate class numbers
//! - `class_pair` references to sections that are not in the pool
//! - Pairs that cross course boundaries
//! - Timed meetings whose clock strings do not parse
//!
//! The generator itself is total and tolerates all of these (bad data
//! degrades results rather than aborting), so validation is advisory:
//! the entry point logs findings and proceeds, and callers may check
//! explicitly before accepting user input.

use std::collections::HashSet;

use crate::models::{parse_clock_minutes, Section};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two sections share a class number.
    DuplicateClassNumber,
    /// A `class_pair` points at a section not in the pool.
    UnknownPairReference,
    /// A `class_pair` points at a section of a different course.
    CrossCoursePair,
    /// A meeting has a time string that does not parse as `"HH:MM"`.
    MalformedMeetingTime,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a candidate pool.
///
/// Returns `Ok(())` if all checks pass, `Err(errors)` with every
/// detected issue otherwise.
pub fn validate_pool(pool: &[Section]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut class_numbers = HashSet::new();
    for section in pool {
        if !class_numbers.insert(section.class_number.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateClassNumber,
                format!("Duplicate class number: {}", section.class_number),
            ));
        }
    }

    for section in pool {
        if let Some(pair) = &section.class_pair {
            match pool.iter().find(|s| s.class_number == *pair) {
                None => errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownPairReference,
                    format!(
                        "Section {} pairs with unknown section {}",
                        section.class_number, pair
                    ),
                )),
                Some(paired) if paired.course_id != section.course_id => {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::CrossCoursePair,
                        format!(
                            "Section {} ({}) pairs with {} of a different course ({})",
                            section.class_number, section.course_id, pair, paired.course_id
                        ),
                    ))
                }
                Some(_) => {}
            }
        }

        for meeting in &section.meetings {
            for time in [&meeting.start_time, &meeting.end_time].into_iter().flatten() {
                if parse_clock_minutes(time).is_none() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::MalformedMeetingTime,
                        format!(
                            "Section {} has unparseable meeting time '{}'",
                            section.class_number, time
                        ),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Meeting};

    fn section(course: &str, id: &str) -> Section {
        Section::new(course, id).with_units("4")
    }

    #[test]
    fn test_valid_pool() {
        let pool = vec![
            section("CSC357", "10").with_pair("11"),
            section("CSC357", "11"),
            section("MATH142", "20")
                .with_meeting(Meeting::new(vec![Day::Mon], "09:00", "10:00")),
        ];
        assert!(validate_pool(&pool).is_ok());
    }

    #[test]
    fn test_duplicate_class_number() {
        let pool = vec![section("A", "1"), section("B", "1")];
        let errors = validate_pool(&pool).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateClassNumber));
    }

    #[test]
    fn test_unknown_pair_reference() {
        let pool = vec![section("A", "1").with_pair("99")];
        let errors = validate_pool(&pool).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownPairReference));
    }

    #[test]
    fn test_cross_course_pair() {
        let pool = vec![section("A", "1").with_pair("2"), section("B", "2")];
        let errors = validate_pool(&pool).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::CrossCoursePair));
    }

    #[test]
    fn test_malformed_meeting_time() {
        let pool = vec![
            section("A", "1").with_meeting(Meeting::new(vec![Day::Mon], "9am", "10:00")),
        ];
        let errors = validate_pool(&pool).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MalformedMeetingTime));
    }

    #[test]
    fn test_async_meeting_is_fine() {
        let pool = vec![section("A", "1").with_meeting(Meeting::asynchronous())];
        assert!(validate_pool(&pool).is_ok());
    }

    #[test]
    fn test_multiple_errors_accumulate() {
        let pool = vec![
            section("A", "1"),
            section("A", "1").with_pair("99"),
        ];
        let errors = validate_pool(&pool).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
