//! Listing aggregation for the venue index and the detail pages.
//!
//! - [`group_by_area`] builds the "venues by city" index, annotating each
//!   venue with its number of upcoming shows.
//! - [`split_shows`] partitions a venue's or artist's shows into past and
//!   upcoming relative to a reference instant.
//!
//! A show is *upcoming* iff its start time is strictly after `now`; a show
//! starting exactly at `now` is past.

use std::collections::{BTreeMap, HashMap};

use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Past / upcoming split
// ---------------------------------------------------------------------------

/// Anything with a start time that can be bucketed into past/upcoming.
pub trait Scheduled {
    fn start_time(&self) -> Timestamp;
}

/// Whether a show starting at `start_time` is still upcoming at `now`.
pub fn is_upcoming(start_time: &Timestamp, now: &Timestamp) -> bool {
    start_time > now
}

/// Shows of one venue or artist, partitioned around a reference instant.
#[derive(Debug, Clone)]
pub struct ShowSplit<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

impl<T> ShowSplit<T> {
    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }

    /// Convert every show in both buckets, keeping the partition.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> ShowSplit<U> {
        ShowSplit {
            past: self.past.into_iter().map(&mut f).collect(),
            upcoming: self.upcoming.into_iter().map(&mut f).collect(),
        }
    }
}

/// Partition `shows` into past and upcoming. Input order is kept in both
/// buckets.
pub fn split_shows<T: Scheduled>(shows: Vec<T>, now: &Timestamp) -> ShowSplit<T> {
    let (upcoming, past): (Vec<T>, Vec<T>) = shows
        .into_iter()
        .partition(|show| is_upcoming(&show.start_time(), now));
    ShowSplit { past, upcoming }
}

// ---------------------------------------------------------------------------
// Grouping by area
// ---------------------------------------------------------------------------

/// The minimal venue projection the area index needs.
#[derive(Debug, Clone)]
pub struct VenueLocation {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
}

/// A venue entry inside an [`Area`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaVenue {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// All venues sharing one (state, city) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<AreaVenue>,
}

/// Group venues by distinct (state, city).
///
/// Areas are ordered by state then city; venues inside an area by name then
/// id. Venues missing from `upcoming_counts` get a count of zero.
pub fn group_by_area(
    venues: Vec<VenueLocation>,
    upcoming_counts: &HashMap<DbId, i64>,
) -> Vec<Area> {
    let mut areas: BTreeMap<(String, String), Vec<AreaVenue>> = BTreeMap::new();

    for venue in venues {
        let num_upcoming_shows = upcoming_counts.get(&venue.id).copied().unwrap_or(0);
        areas
            .entry((venue.state, venue.city))
            .or_default()
            .push(AreaVenue {
                id: venue.id,
                name: venue.name,
                num_upcoming_shows,
            });
    }

    areas
        .into_iter()
        .map(|((state, city), mut venues)| {
            venues.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
            Area {
                city,
                state,
                venues,
            }
        })
        .collect()
}
