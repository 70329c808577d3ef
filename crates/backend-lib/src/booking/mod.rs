// ============================
// roombooker-backend-lib/src/booking/mod.rs
// ============================
//! In-memory booking store with range-overlap querying.

pub mod timeparse;

use crate::error::AppError;
use crate::metrics::BOOKING_CREATED;
use chrono::{DateTime, Utc};
use metrics::counter;
use parking_lot::RwLock;
use roombooker_common::{Booking, BookingTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Whether `create` rejects a slot that overlaps an existing booking in
/// the same room. `Allow` keeps overlap detection as a read-time query
/// capability only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapPolicy {
    Reject,
    Allow,
}

/// Concurrent-safe mapping from room ID to its insertion-ordered
/// bookings. One lock per store instance; the store's lifetime is scoped
/// to the owning service, not the process.
pub struct BookingStore {
    rooms: RwLock<HashMap<String, Vec<Booking>>>,
    policy: OverlapPolicy,
}

/// Half-open interval overlap: `[s1,e1)` and `[s2,e2)` overlap iff
/// `s1 < e2 && s2 < e1`.
fn overlaps(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    other_start: DateTime<Utc>,
    other_end: DateTime<Utc>,
) -> bool {
    start < other_end && other_start < end
}

impl BookingStore {
    pub fn new(policy: OverlapPolicy) -> Self {
        Self {
            rooms: RwLock::new(HashMap::new()),
            policy,
        }
    }

    /// Create a booking and append it to the room's sequence.
    ///
    /// The overlap check and the append run under one write lock, so two
    /// concurrent creates for the same room can neither lose an update
    /// nor both pass the check.
    pub fn create(
        &self,
        room_id: &str,
        title: &str,
        start: BookingTime,
        end: BookingTime,
        owner_user_id: &str,
    ) -> Result<Booking, AppError> {
        if let (Some(s), Some(e)) = (start.instant(), end.instant()) {
            if s >= e {
                return Err(AppError::Validation(
                    "start must be before end".to_string(),
                ));
            }
        }

        let mut rooms = self.rooms.write();
        let sequence = rooms.entry(room_id.to_string()).or_default();

        self.check_overlap(sequence, &start, &end, None)?;

        let booking = Booking {
            id: Uuid::new_v4().to_string(),
            room_id: room_id.to_string(),
            title: title.to_string(),
            start,
            end,
            owner_user_id: owner_user_id.to_string(),
        };
        sequence.push(booking.clone());

        counter!(BOOKING_CREATED).increment(1);
        Ok(booking)
    }

    /// Every booking for the room whose interval overlaps `[from, to)`.
    ///
    /// Both bounds absent returns the room's bookings unfiltered,
    /// including ones with raw (not time-filterable) timestamps; when a
    /// bound is present, raw-timestamped bookings cannot be compared and
    /// are skipped. A room with no bookings yields an empty list.
    pub fn query_range(
        &self,
        room_id: &str,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Vec<Booking> {
        let rooms = self.rooms.read();
        let Some(sequence) = rooms.get(room_id) else {
            return Vec::new();
        };

        if from.is_none() && to.is_none() {
            return sequence.clone();
        }

        sequence
            .iter()
            .filter(|b| {
                let (Some(start), Some(end)) = (b.start.instant(), b.end.instant()) else {
                    return false;
                };
                to.is_none_or(|t| start < t) && from.is_none_or(|f| end > f)
            })
            .cloned()
            .collect()
    }

    /// Fetch a booking by its globally unique ID
    pub fn get(&self, booking_id: &str) -> Option<Booking> {
        let rooms = self.rooms.read();
        rooms
            .values()
            .flat_map(|seq| seq.iter())
            .find(|b| b.id == booking_id)
            .cloned()
    }

    /// Replace a booking's mutable fields, keeping id, room, and owner.
    ///
    /// The replacement re-runs the overlap policy against the room's
    /// other bookings.
    pub fn replace(
        &self,
        booking_id: &str,
        title: &str,
        start: BookingTime,
        end: BookingTime,
    ) -> Result<Option<Booking>, AppError> {
        if let (Some(s), Some(e)) = (start.instant(), end.instant()) {
            if s >= e {
                return Err(AppError::Validation(
                    "start must be before end".to_string(),
                ));
            }
        }

        let mut rooms = self.rooms.write();
        for sequence in rooms.values_mut() {
            let Some(index) = sequence.iter().position(|b| b.id == booking_id) else {
                continue;
            };

            self.check_overlap(sequence, &start, &end, Some(booking_id))?;

            let booking = &mut sequence[index];
            booking.title = title.to_string();
            booking.start = start;
            booking.end = end;
            return Ok(Some(booking.clone()));
        }
        Ok(None)
    }

    /// Remove a booking by ID, returning the removed record
    pub fn remove(&self, booking_id: &str) -> Option<Booking> {
        let mut rooms = self.rooms.write();
        for sequence in rooms.values_mut() {
            if let Some(index) = sequence.iter().position(|b| b.id == booking_id) {
                return Some(sequence.remove(index));
            }
        }
        None
    }

    /// Apply the overlap policy to a candidate slot. Bookings without
    /// filterable times are exempt on either side of the comparison.
    fn check_overlap(
        &self,
        sequence: &[Booking],
        start: &BookingTime,
        end: &BookingTime,
        exclude_id: Option<&str>,
    ) -> Result<(), AppError> {
        if self.policy == OverlapPolicy::Allow {
            return Ok(());
        }
        let (Some(s), Some(e)) = (start.instant(), end.instant()) else {
            return Ok(());
        };

        for existing in sequence {
            if exclude_id.is_some_and(|id| existing.id == id) {
                continue;
            }
            let (Some(os), Some(oe)) = (existing.start.instant(), existing.end.instant()) else {
                continue;
            };
            if overlaps(s, e, os, oe) {
                return Err(AppError::BookingConflict);
            }
        }
        Ok(())
    }
}
