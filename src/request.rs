use crate::event::{Event, Relevance};
use crate::time::{Available, TimeMerge, TimeRange, MINUTES_IN_DAY, WHOLE_DAY};
use itertools::Itertools;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A meeting to be placed: who must attend, who should if possible,
/// and for how many minutes.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MeetingRequest {
    #[serde(rename = "mandatoryAttendees")]
    pub mandatory_attendees: HashSet<String>,
    #[serde(rename = "optionalAttendees")]
    pub optional_attendees: HashSet<String>,
    pub duration: u16,
}

impl MeetingRequest {
    pub fn new<I, J>(mandatory_attendees: I, optional_attendees: J, duration: u16) -> MeetingRequest
    where
        I: IntoIterator,
        I::Item: Into<String>,
        J: IntoIterator,
        J::Item: Into<String>,
    {
        MeetingRequest {
            mandatory_attendees: mandatory_attendees.into_iter().map(Into::into).collect(),
            optional_attendees: optional_attendees.into_iter().map(Into::into).collect(),
            duration,
        }
    }

    /// Computes the TimeRanges in which this meeting can be held, given
    /// the day's scheduled events.
    ///
    /// The result is sorted ascending, pairwise disjoint, and every
    /// range is at least `duration` minutes long. If a slot exists that
    /// also suits the optional attendees it is preferred; otherwise the
    /// result guarantees only the mandatory attendees are free. A
    /// request with no mandatory attendees treats the optional set as
    /// mandatory instead.
    ///
    /// Never fails: every combination of well-formed inputs has a
    /// defined result, with the empty list meaning "no slot exists".
    ///
    /// # Examples
    /// ```
    /// use zeitfenster::event::Event;
    /// use zeitfenster::request::MeetingRequest;
    /// use zeitfenster::time::TimeRange;
    ///
    /// let events = vec![Event::new(TimeRange::new(60, 120), vec!["alice"])];
    /// let request = MeetingRequest::new(vec!["alice"], Vec::<String>::new(), 30);
    ///
    /// assert_eq!(
    ///     request.resolve(&events),
    ///     vec![TimeRange::new(0, 60), TimeRange::new(120, 1440)]
    /// );
    /// ```
    ///
    /// A slot that works for everyone wins over a longer mandatory-only
    /// one:
    /// ```
    /// use zeitfenster::event::Event;
    /// use zeitfenster::request::MeetingRequest;
    /// use zeitfenster::time::TimeRange;
    ///
    /// let events = vec![
    ///     Event::new(TimeRange::new(0, 60), vec!["alice"]),
    ///     Event::new(TimeRange::new(120, 180), vec!["alice"]),
    ///     Event::new(TimeRange::new(60, 90), vec!["bob"]),
    /// ];
    /// let request = MeetingRequest::new(vec!["alice"], vec!["bob"], 30);
    ///
    /// // Alice alone is free in [60, 120) too, but Bob isn't.
    /// assert_eq!(request.resolve(&events), vec![TimeRange::new(180, 1440)]);
    /// ```
    pub fn resolve(&self, events: &[Event]) -> Vec<TimeRange> {
        if self.duration > MINUTES_IN_DAY {
            return vec![];
        }

        if events.is_empty() {
            return vec![WHOLE_DAY];
        }

        if self.mandatory_attendees.is_empty() {
            if self.optional_attendees.is_empty() {
                return vec![WHOLE_DAY];
            }

            debug!("no mandatory attendees; treating the optional attendees as mandatory");
            let promoted = MeetingRequest {
                mandatory_attendees: self.optional_attendees.clone(),
                optional_attendees: HashSet::new(),
                duration: self.duration,
            };
            return promoted.resolve(events);
        }

        let mandatory_free = free_times(events, &self.mandatory_attendees, self.duration);

        if !self.optional_attendees.is_empty() {
            // One reentrant pass with everyone required. Its optional set
            // is empty, so the recursion stops there.
            let combined = MeetingRequest {
                mandatory_attendees: self
                    .mandatory_attendees
                    .union(&self.optional_attendees)
                    .cloned()
                    .collect(),
                optional_attendees: HashSet::new(),
                duration: self.duration,
            };
            let combined_free = combined.resolve(events);

            if !combined_free.is_empty() {
                let preferred = mandatory_free
                    .iter()
                    .copied()
                    .filter(|&slot| combined_free.iter().any(|&c| c.contains(slot)))
                    .collect_vec();

                if !preferred.is_empty() {
                    debug!(
                        "{} of {} mandatory slots also fit the optional attendees",
                        preferred.len(),
                        mandatory_free.len()
                    );
                    return preferred;
                }
            }

            debug!("no slot fits the optional attendees; falling back to mandatory only");
        }

        mandatory_free
    }
}

/// Free TimeRanges of at least `duration` minutes for one attendee set:
/// filter the events down to the relevant ones, merge their ranges into
/// disjoint busy blocks, and take the gaps.
fn free_times(events: &[Event], attendees: &HashSet<String>, duration: u16) -> Vec<TimeRange> {
    let relevant = events.iter().relevant_to(attendees);
    trace!(
        "{} of {} events involve the requested attendees",
        relevant.len(),
        events.len()
    );

    if relevant.is_empty() {
        return vec![WHOLE_DAY];
    }

    let busy = relevant
        .iter()
        .map(|event| event.when)
        .sorted_unstable()
        .collect_vec();

    busy.iter().time_merge().iter().available_times(duration)
}

/// Operation form of [`MeetingRequest::resolve`].
pub fn resolve(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    request.resolve(events)
}
