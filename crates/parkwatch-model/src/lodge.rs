//! Lodges: bookable accommodation inside a park.
//!
//! A [`Lodge`] keeps a back-reference to its park by [`ParkId`] only. The
//! park owns the lodge once it has been registered with
//! [`Park::add_lodge`].
//!
//! [`Park::add_lodge`]: crate::park::Park::add_lodge

use parkwatch_types::{Coordinates, LodgeId, ParkId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// An accommodation unit with a finite room inventory.
///
/// `available_rooms` is stored, not derived: it is decremented by
/// bookings independently of `capacity`, and `0 <= available_rooms <=
/// capacity` always holds.
///
/// Deserialization enforces the same bound, so a stored record with more
/// free rooms than capacity is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LodgeRecord")]
pub struct Lodge {
    /// Unique identifier.
    id: LodgeId,
    /// Display name.
    pub name: String,
    /// Back-reference to the owning park.
    park_id: ParkId,
    /// Total number of rooms.
    capacity: u32,
    /// Nightly room rate.
    pub price_per_night: Decimal,
    /// Rooms not currently booked, never above `capacity`.
    available_rooms: u32,
    /// Own position, if the lodge has one distinct from its park.
    pub location: Option<Coordinates>,
}

/// Unchecked serialized form of a [`Lodge`].
#[derive(Deserialize)]
struct LodgeRecord {
    id: LodgeId,
    name: String,
    park_id: ParkId,
    capacity: u32,
    price_per_night: Decimal,
    available_rooms: u32,
    location: Option<Coordinates>,
}

impl TryFrom<LodgeRecord> for Lodge {
    type Error = ModelError;

    fn try_from(record: LodgeRecord) -> Result<Self, Self::Error> {
        if record.available_rooms > record.capacity {
            return Err(ModelError::InvalidArgument {
                field: "available_rooms",
                reason: format!(
                    "{} free rooms exceed capacity {}",
                    record.available_rooms, record.capacity
                ),
            });
        }
        Ok(Self {
            id: record.id,
            name: record.name,
            park_id: record.park_id,
            capacity: record.capacity,
            price_per_night: record.price_per_night,
            available_rooms: record.available_rooms,
            location: record.location,
        })
    }
}

impl Lodge {
    /// Create a lodge for the park `park_id` with every room available.
    ///
    /// The lodge is not part of the park until passed to
    /// [`Park::add_lodge`](crate::park::Park::add_lodge).
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidArgument`] if `capacity` is negative or
    /// does not fit in a `u32`.
    pub fn new(
        name: impl Into<String>,
        park_id: ParkId,
        capacity: i64,
        price_per_night: Decimal,
        location: Option<Coordinates>,
    ) -> Result<Self, ModelError> {
        let capacity = u32::try_from(capacity).map_err(|_err| ModelError::InvalidArgument {
            field: "capacity",
            reason: format!("must be a non-negative room count, got {capacity}"),
        })?;
        Ok(Self {
            id: LodgeId::new(),
            name: name.into(),
            park_id,
            capacity,
            price_per_night,
            available_rooms: capacity,
            location,
        })
    }

    /// Unique lodge identifier.
    pub const fn id(&self) -> LodgeId {
        self.id
    }

    /// The park this lodge belongs to.
    pub const fn park_id(&self) -> ParkId {
        self.park_id
    }

    /// Total number of rooms.
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Rooms not currently booked.
    pub const fn available_rooms(&self) -> u32 {
        self.available_rooms
    }

    /// The lodge's own location, or `park_location` if it has none.
    ///
    /// `park_location` must be the current location of the owning park;
    /// outside this crate the lookup goes through
    /// [`Park::lodge_location`](crate::park::Park::lodge_location).
    pub(crate) fn resolve_location(&self, park_location: Coordinates) -> Coordinates {
        self.location.unwrap_or(park_location)
    }

    /// Book one room.
    ///
    /// Returns `false`, leaving the inventory untouched, when no rooms are
    /// left.
    pub fn book_room(&mut self) -> bool {
        let Some(remaining) = self.available_rooms.checked_sub(1) else {
            tracing::debug!(lodge = %self.id, name = %self.name, "no rooms available");
            return false;
        };
        self.available_rooms = remaining;
        tracing::debug!(lodge = %self.id, remaining, "room booked");
        true
    }

    /// Return one booked room to the inventory.
    ///
    /// Returns `false` when every room is already free.
    pub fn release_room(&mut self) -> bool {
        if self.available_rooms >= self.capacity {
            return false;
        }
        self.available_rooms = self.available_rooms.saturating_add(1);
        tracing::debug!(lodge = %self.id, remaining = self.available_rooms, "room released");
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn lodge(capacity: i64) -> Result<Lodge, ModelError> {
        Lodge::new("Pine Ridge", ParkId::new(), capacity, dec!(120.00), None)
    }

    #[test]
    fn new_lodge_has_all_rooms_free() {
        let l = lodge(10).unwrap();
        assert_eq!(l.capacity(), 10);
        assert_eq!(l.available_rooms(), 10);
    }

    #[test]
    fn negative_capacity_is_invalid_argument() {
        assert!(matches!(
            lodge(-1),
            Err(ModelError::InvalidArgument { field: "capacity", .. })
        ));
    }

    #[test]
    fn oversized_capacity_is_invalid_argument() {
        assert!(lodge(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn booking_exhausts_inventory_without_going_negative() {
        let mut l = lodge(3).unwrap();
        for _ in 0..3 {
            assert!(l.book_room());
        }
        assert_eq!(l.available_rooms(), 0);
        assert!(!l.book_room());
        assert!(!l.book_room());
        assert_eq!(l.available_rooms(), 0);
    }

    #[test]
    fn zero_capacity_lodge_never_books() {
        let mut l = lodge(0).unwrap();
        assert!(!l.book_room());
        assert_eq!(l.available_rooms(), 0);
    }

    #[test]
    fn release_never_exceeds_capacity() {
        let mut l = lodge(2).unwrap();
        assert!(!l.release_room());
        assert!(l.book_room());
        assert!(l.release_room());
        assert_eq!(l.available_rooms(), 2);
        assert!(!l.release_room());
    }

    #[test]
    fn own_location_wins_over_park_location() {
        let park_loc = Coordinates::new(44.6, -110.5);
        let own = Coordinates::new(44.7, -110.4);
        let mut l = lodge(5).unwrap();
        assert_eq!(l.resolve_location(park_loc), park_loc);
        l.location = Some(own);
        assert_eq!(l.resolve_location(park_loc), own);
    }

    #[test]
    fn available_rooms_is_serialized() {
        let mut l = lodge(4).unwrap();
        assert!(l.book_room());
        let json = serde_json::to_value(&l).unwrap();
        assert_eq!(json["available_rooms"], 3);
        assert_eq!(json["capacity"], 4);
        assert_eq!(json["price_per_night"], "120.00");

        let restored: Lodge = serde_json::from_value(json).unwrap();
        assert_eq!(restored, l);
    }

    #[test]
    fn record_with_more_free_rooms_than_capacity_is_rejected() {
        let mut json = serde_json::to_value(lodge(2).unwrap()).unwrap();
        json["available_rooms"] = serde_json::json!(5);
        let err = serde_json::from_value::<Lodge>(json).unwrap_err();
        assert!(err.to_string().contains("available_rooms"), "{err}");
    }
}
