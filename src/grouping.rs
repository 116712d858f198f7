//! Overlap clustering for calendar display.
//!
//! Partitions a flat event list into groups of transitively
//! time-overlapping events so a renderer can lay overlapping meetings
//! side by side. Purely presentational; the generator and ranker never
//! consult this module.

use serde::{Deserialize, Serialize};

use crate::models::{Day, Section};

/// A single rendered calendar cell: one day, one minute range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Label shown in the cell (class number of the source section).
    pub label: String,
    /// Day of week.
    pub day: Day,
    /// Start, minutes-of-day.
    pub start_min: u32,
    /// End, minutes-of-day (exclusive).
    pub end_min: u32,
}

impl CalendarEvent {
    /// Creates an event.
    pub fn new(label: impl Into<String>, day: Day, start_min: u32, end_min: u32) -> Self {
        Self {
            label: label.into(),
            day,
            start_min,
            end_min,
        }
    }

    /// Whether two events overlap (same day, half-open ranges).
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day && self.start_min < other.end_min && other.start_min < self.end_min
    }
}

/// Flattens a schedule's sections into per-day calendar events.
///
/// Asynchronous meetings produce no events. A meeting spanning several
/// days produces one event per day.
pub fn events_from_sections(sections: &[Section]) -> Vec<CalendarEvent> {
    let mut events = Vec::new();
    for section in sections {
        for meeting in &section.meetings {
            let (Some(start), Some(end)) = (meeting.start_minutes(), meeting.end_minutes()) else {
                continue;
            };
            for &day in &meeting.days {
                events.push(CalendarEvent::new(&section.class_number, day, start, end));
            }
        }
    }
    events
}

/// Groups events into transitive overlap clusters.
///
/// Within a cluster every member is connected to every other through a
/// chain of pairwise overlaps; events in different clusters never
/// overlap. Clusters are ordered by day then start time, events within
/// a cluster by start time.
pub fn group_overlapping(events: &[CalendarEvent]) -> Vec<Vec<CalendarEvent>> {
    let mut sorted: Vec<CalendarEvent> = events.to_vec();
    sorted.sort_by(|a, b| {
        day_index(a.day)
            .cmp(&day_index(b.day))
            .then(a.start_min.cmp(&b.start_min))
            .then(a.end_min.cmp(&b.end_min))
    });

    let mut clusters: Vec<Vec<CalendarEvent>> = Vec::new();
    let mut current: Vec<CalendarEvent> = Vec::new();
    let mut current_day: Option<Day> = None;
    let mut current_end = 0u32;

    for event in sorted {
        let chained =
            current_day == Some(event.day) && event.start_min < current_end && !current.is_empty();
        if chained {
            current_end = current_end.max(event.end_min);
            current.push(event);
        } else {
            if !current.is_empty() {
                clusters.push(std::mem::take(&mut current));
            }
            current_day = Some(event.day);
            current_end = event.end_min;
            current.push(event);
        }
    }
    if !current.is_empty() {
        clusters.push(current);
    }

    clusters
}

fn day_index(day: Day) -> u8 {
    match day {
        Day::Mon => 0,
        Day::Tue => 1,
        Day::Wed => 2,
        Day::Thu => 3,
        Day::Fri => 4,
        Day::Sat => 5,
        Day::Sun => 6,
    }
}
