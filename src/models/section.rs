//! Course section model.
//!
//! A section is the smallest selectable unit of a timetable: one concrete
//! offering of a course (a lecture, a lab, ...) with its weekly meeting
//! pattern, unit load, enrollment state, and instructor rating.
//!
//! # Time Model
//! Meeting times are `"HH:MM"` clock strings as delivered by the upstream
//! catalog. They are parsed to minutes-of-day on demand; a meeting with
//! missing or unparseable times is asynchronous and never occupies a
//! calendar slot.

use serde::{Deserialize, Serialize};

/// Day of the week a meeting occurs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

/// Enrollment state of a section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrollmentStatus {
    /// Seats available.
    #[default]
    Open,
    /// No seats; enrollment closed.
    Closed,
    /// Full, but a waitlist is accepting.
    Waitlist,
}

/// A weekly meeting pattern: a set of days plus a clock-time range.
///
/// `start_time`/`end_time` of `None` (or a string that does not parse as
/// `"HH:MM"`) marks the meeting asynchronous.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    /// Days this pattern repeats on.
    pub days: Vec<Day>,
    /// Start clock time, `"HH:MM"`. `None` = asynchronous.
    pub start_time: Option<String>,
    /// End clock time, `"HH:MM"`. `None` = asynchronous.
    pub end_time: Option<String>,
}

impl Meeting {
    /// Creates a timed meeting pattern.
    pub fn new(days: Vec<Day>, start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            days,
            start_time: Some(start_time.into()),
            end_time: Some(end_time.into()),
        }
    }

    /// Creates an asynchronous (non-meeting) pattern.
    pub fn asynchronous() -> Self {
        Self::default()
    }

    /// Start time in minutes-of-day, if present and well-formed.
    pub fn start_minutes(&self) -> Option<u32> {
        self.start_time.as_deref().and_then(parse_clock_minutes)
    }

    /// End time in minutes-of-day, if present and well-formed.
    pub fn end_minutes(&self) -> Option<u32> {
        self.end_time.as_deref().and_then(parse_clock_minutes)
    }

    /// Whether this pattern occupies calendar time at all.
    ///
    /// Requires at least one day and a parseable start and end.
    pub fn is_timed(&self) -> bool {
        !self.days.is_empty() && self.start_minutes().is_some() && self.end_minutes().is_some()
    }
}

/// A candidate course section.
///
/// Belongs to exactly one course (`course_id`); `class_number` is unique
/// within the candidate pool. A section may name a companion section
/// (`class_pair`) that must be co-selected, e.g. a lab tied to a lecture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Course identifier (e.g. "CSC349").
    pub course_id: String,
    /// Pool-unique section identifier.
    pub class_number: String,
    /// Instructional component (e.g. "LEC", "LAB").
    pub component: String,
    /// Unit load, either a single value ("4") or a range ("2 - 4").
    pub units: String,
    /// Enrollment state.
    pub enrollment_status: EnrollmentStatus,
    /// Weekly meeting patterns. Empty = fully asynchronous.
    pub meetings: Vec<Meeting>,
    /// Instructor rating (0.0 = unrated).
    pub rating: f64,
    /// `class_number` of a companion section that must be co-selected.
    pub class_pair: Option<String>,
}

impl Section {
    /// Creates a new section.
    pub fn new(course_id: impl Into<String>, class_number: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            class_number: class_number.into(),
            component: String::new(),
            units: String::new(),
            enrollment_status: EnrollmentStatus::Open,
            meetings: Vec::new(),
            rating: 0.0,
            class_pair: None,
        }
    }

    /// Sets the instructional component.
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = component.into();
        self
    }

    /// Sets the unit specification.
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    /// Sets the enrollment status.
    pub fn with_status(mut self, status: EnrollmentStatus) -> Self {
        self.enrollment_status = status;
        self
    }

    /// Adds a meeting pattern.
    pub fn with_meeting(mut self, meeting: Meeting) -> Self {
        self.meetings.push(meeting);
        self
    }

    /// Sets the instructor rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Links a companion section by class number.
    pub fn with_pair(mut self, class_number: impl Into<String>) -> Self {
        self.class_pair = Some(class_number.into());
        self
    }

    /// Numeric unit value of this section (see [`parse_units`]).
    pub fn unit_value(&self) -> f64 {
        parse_units(&self.units)
    }

    /// Whether this section is open for enrollment.
    pub fn is_open(&self) -> bool {
        self.enrollment_status == EnrollmentStatus::Open
    }

    /// Whether this section has at least one rated instructor.
    pub fn is_rated(&self) -> bool {
        self.rating > 0.0
    }
}

/// Parses a unit specification into a numeric value.
///
/// - Empty/blank → 0.
/// - A range like `"2 - 4"` → midpoint (3).
/// - A single value like `"4"` → 4.
///
/// Unparseable tokens contribute 0; malformed upstream data degrades
/// ranking quality, it never aborts generation.
pub fn parse_units(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }
    if let Some((lo, hi)) = raw.split_once('-') {
        let lo = lo.trim().parse::<f64>().unwrap_or(0.0);
        let hi = hi.trim().parse::<f64>().unwrap_or(0.0);
        return (lo + hi) / 2.0;
    }
    raw.parse::<f64>().unwrap_or(0.0)
}

/// Parses `"HH:MM"` into minutes-of-day.
///
/// Returns `None` for anything that is not two `:`-separated integers
/// within clock range.
pub(crate) fn parse_clock_minutes(raw: &str) -> Option<u32> {
    let (h, m) = raw.trim().split_once(':')?;
    let h: u32 = h.trim().parse().ok()?;
    let m: u32 = m.trim().parse().ok()?;
    if h > 23 || m > 59 {
        return None;
    }
    Some(h * 60 + m)
}
