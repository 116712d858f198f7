//! Timetabling domain models.
//!
//! Core data types for the combination generator: candidate sections
//! with their weekly meeting patterns, the preferences object steering
//! a generation call, and the finished schedule handed back to callers.
//!
//! All types are plain serde-serializable values; the generator never
//! mutates its inputs.

mod preferences;
mod schedule;
mod section;

pub use preferences::Preferences;
pub use schedule::Schedule;
pub use section::{parse_units, Day, EnrollmentStatus, Meeting, Section};

pub(crate) use section::parse_clock_minutes;
