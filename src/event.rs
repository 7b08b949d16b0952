use crate::time::TimeRange;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An already-scheduled commitment on the day: a time range and the
/// attendees bound to it. Caller-supplied and never mutated here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Event {
    pub when: TimeRange,
    pub attendees: HashSet<String>,
}

impl Event {
    /// Constructs a new Event occupying `when` for the given attendees.
    ///
    /// # Examples
    /// ```
    /// use zeitfenster::event::Event;
    /// use zeitfenster::time::TimeRange;
    ///
    /// let standup = Event::new(TimeRange::new(540, 555), vec!["alice", "bob"]);
    ///
    /// assert!(standup.attendees.contains("alice"));
    /// ```
    pub fn new<I>(when: TimeRange, attendees: I) -> Event
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Event {
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }
}

pub trait Relevance<'a> {
    fn relevant_to(self, attendees: &HashSet<String>) -> Vec<&'a Event>;
}

impl<'a, T> Relevance<'a> for T
where
    T: Iterator<Item = &'a Event>,
{
    /// Keeps the events that share at least one attendee with the given
    /// set. Sharing a single attendee is enough to make an event a
    /// conflict; it does not matter who else attends it. (The stricter
    /// reading, keeping only events whose attendees are all in the set,
    /// would let a meeting double-book someone just because they also
    /// have outside commitments.) Events with no attendee in common do
    /// not block availability no matter when they happen.
    ///
    /// # Examples
    /// ```
    /// use zeitfenster::event::{Event, Relevance};
    /// use zeitfenster::time::TimeRange;
    ///
    /// let events = vec![
    ///     Event::new(TimeRange::new(0, 60), vec!["alice", "carol"]),
    ///     Event::new(TimeRange::new(60, 120), vec!["zed"]),
    /// ];
    /// let attendees = vec!["alice".to_string()].into_iter().collect();
    ///
    /// let relevant = events.iter().relevant_to(&attendees);
    ///
    /// assert_eq!(relevant.len(), 1);
    /// assert_eq!(relevant[0].when, TimeRange::new(0, 60));
    /// ```
    fn relevant_to(self, attendees: &HashSet<String>) -> Vec<&'a Event> {
        self.filter(|event| !event.attendees.is_disjoint(attendees))
            .collect_vec()
    }
}
