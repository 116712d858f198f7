//! Course timetable combination generator.
//!
//! Given a student's candidate course sections (possibly several
//! alternatives per course, including linked lecture/lab pairs) and a
//! preferences object, enumerates valid weekly timetables, detects
//! time conflicts, applies unit and instructor-rating filters, and
//! returns schedules ranked by total units then average rating.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Section`, `Meeting`, `Preferences`,
//!   `Schedule`
//! - **`selection`**: Per-course selection expansion (lecture/lab
//!   pairing, open-only filtering)
//! - **`conflict`**: Day/time overlap detection
//! - **`generator`**: Strict and conflict-tolerant skip-or-pick
//!   enumeration; top-level [`build_schedules`] entry point
//! - **`ranking`**: Unit/rating filtering and final ordering
//! - **`grouping`**: Transitive overlap clustering for calendar display
//! - **`validation`**: Candidate-pool integrity checks (duplicate class
//!   numbers, dangling pair references, malformed times)
//!
//! # Example
//!
//! ```
//! use course_timetable::models::{Day, Meeting, Preferences, Section};
//! use course_timetable::build_schedules;
//!
//! let pool = vec![
//!     Section::new("CSC349", "1001")
//!         .with_units("4")
//!         .with_rating(3.8)
//!         .with_meeting(Meeting::new(vec![Day::Mon, Day::Wed], "09:10", "10:00")),
//!     Section::new("MATH142", "2200")
//!         .with_units("4")
//!         .with_meeting(Meeting::new(vec![Day::Tue, Day::Thu], "10:10", "11:00")),
//! ];
//!
//! let schedules = build_schedules(&pool, &Preferences::new());
//! // Largest conflict-free timetable ranks first.
//! assert_eq!(schedules[0].section_count(), 2);
//! ```
//!
//! The generator is synchronous, stateless, and pure: inputs are never
//! mutated and nothing persists between calls. Enumeration branches
//! per course (skip or pick), so callers should bound the candidate
//! pool size.

pub mod conflict;
pub mod generator;
pub mod grouping;
pub mod models;
pub mod ranking;
pub mod selection;
pub mod validation;

pub use conflict::has_conflict;
pub use generator::{build_schedules, generate_all_combinations, generate_with_overlaps};
pub use models::{parse_units, Preferences, Schedule, Section};
pub use ranking::filter_schedules;
pub use selection::{valid_selections_for_course, Selection};
