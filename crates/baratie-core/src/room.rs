//! # Room
//!
//! A single hotel room and its occupancy state machine.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │        check_in(guest)                                                  │
//! │   ┌────────┐ ──────────────────────► ┌──────────┐                      │
//! │   │ Vacant │                         │ Occupied │                      │
//! │   └────────┘ ◄────────────────────── └──────────┘                      │
//! │        ▲           check_out() → BillBreakdown                          │
//! │        │                                                                │
//! │     initial                                                             │
//! │                                                                         │
//! │   check_in  while Occupied → RoomError::AlreadyOccupied                 │
//! │   check_out while Vacant   → RoomError::NotOccupied                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The occupant is the only mutable part of a room; number, class and
//! nightly price are fixed at construction.

use serde::{Deserialize, Serialize};

use crate::billing::BillBreakdown;
use crate::error::{RoomError, RoomResult};
use crate::guest::Guest;
use crate::money::Money;
use crate::types::{RoomNumber, RoomType};

/// Guest details shown on the room status board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestSummary {
    pub name: String,
    pub age: i64,
    pub phone: String,
    pub nights: i64,
    pub price_per_night: Money,
}

/// Read-only view of a room for the status board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomStatus {
    pub number: RoomNumber,
    pub room_type: RoomType,
    pub price_per_night: Money,
    pub occupied: bool,
    pub guest: Option<GuestSummary>,
}

/// A hotel room. `occupant.is_some()` is exactly "the room is occupied".
///
/// Serialize-only: a `Guest` can only be built through validation.
#[derive(Debug, Clone, Serialize)]
pub struct Room {
    number: RoomNumber,
    room_type: RoomType,
    occupant: Option<Guest>,
}

impl Room {
    /// Creates a vacant room.
    pub fn new(number: RoomNumber, room_type: RoomType) -> Self {
        Room {
            number,
            room_type,
            occupant: None,
        }
    }

    pub fn number(&self) -> RoomNumber {
        self.number
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn price_per_night(&self) -> Money {
        self.room_type.price_per_night()
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn guest(&self) -> Option<&Guest> {
        self.occupant.as_ref()
    }

    pub fn guest_mut(&mut self) -> Option<&mut Guest> {
        self.occupant.as_mut()
    }

    /// Moves `guest` into a vacant room.
    ///
    /// On `AlreadyOccupied` the current occupant is left untouched and the
    /// rejected guest is dropped.
    pub fn check_in(&mut self, guest: Guest) -> RoomResult<()> {
        if self.occupant.is_some() {
            return Err(RoomError::AlreadyOccupied { room: self.number });
        }
        self.occupant = Some(guest);
        Ok(())
    }

    /// Bills the occupant, removes them, and returns the room to vacant.
    ///
    /// The bill is built before the occupant is released.
    pub fn check_out(&mut self) -> RoomResult<BillBreakdown> {
        let guest = self
            .occupant
            .as_ref()
            .ok_or(RoomError::NotOccupied { room: self.number })?;
        let bill = BillBreakdown::for_stay(self.number, self.room_type, guest);
        self.occupant = None;
        Ok(bill)
    }

    /// Snapshot for the status board. Does not mutate.
    pub fn status(&self) -> RoomStatus {
        RoomStatus {
            number: self.number,
            room_type: self.room_type,
            price_per_night: self.price_per_night(),
            occupied: self.is_occupied(),
            guest: self.occupant.as_ref().map(|guest| GuestSummary {
                name: guest.name().to_string(),
                age: guest.age(),
                phone: guest.phone().to_string(),
                nights: guest.nights(),
                price_per_night: self.price_per_night(),
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guest::GuestDetails;
    use crate::types::{FoodCategory, FoodItem};

    fn guest(name: &str, nights: i64) -> Guest {
        Guest::new(GuestDetails::new(name, 25, "555-0100", nights)).unwrap()
    }

    #[test]
    fn test_new_room_is_vacant() {
        let room = Room::new(101, RoomType::NonAc);
        assert!(!room.is_occupied());
        assert!(room.guest().is_none());
        assert_eq!(room.price_per_night(), Money::from_rupees(500));
    }

    #[test]
    fn test_check_in_occupies_room() {
        let mut room = Room::new(201, RoomType::Ac);
        room.check_in(guest("Nami", 2)).unwrap();

        assert!(room.is_occupied());
        assert_eq!(room.guest().map(Guest::name), Some("Nami"));
    }

    #[test]
    fn test_check_in_on_occupied_room_keeps_existing_guest() {
        let mut room = Room::new(201, RoomType::Ac);
        room.check_in(guest("Nami", 2)).unwrap();

        let err = room.check_in(guest("Buggy", 5)).unwrap_err();
        assert_eq!(err, RoomError::AlreadyOccupied { room: 201 });
        assert_eq!(room.guest().map(Guest::name), Some("Nami"));
        assert_eq!(room.guest().map(Guest::nights), Some(2));
    }

    #[test]
    fn test_check_out_on_vacant_room_fails_without_mutation() {
        let mut room = Room::new(102, RoomType::NonAc);
        let err = room.check_out().unwrap_err();
        assert_eq!(err, RoomError::NotOccupied { room: 102 });
        assert!(!room.is_occupied());
    }

    #[test]
    fn test_check_out_bills_and_vacates() {
        let mut room = Room::new(201, RoomType::Ac);
        room.check_in(guest("Sanji", 3)).unwrap();
        let occupant = room.guest_mut().unwrap();
        occupant.add_food_item(FoodItem::new(
            "Butter Chicken",
            Money::from_rupees(400),
            FoodCategory::MainCourse,
        ));
        occupant.add_food_item(FoodItem::new(
            "Gulab Jamun",
            Money::from_rupees(150),
            FoodCategory::Dessert,
        ));

        let bill = room.check_out().unwrap();
        assert_eq!(bill.room_base, Money::from_rupees(3000));
        assert_eq!(bill.room_tax, Money::from_rupees(540));
        assert_eq!(bill.food_base, Money::from_rupees(550));
        assert_eq!(bill.food_tax, Money::from_rupees(99));
        assert_eq!(bill.total, Money::from_rupees(4189));

        assert!(!room.is_occupied());
        assert!(room.guest().is_none());
    }

    #[test]
    fn test_check_in_after_check_out_has_no_residual_state() {
        let mut room = Room::new(105, RoomType::NonAc);
        room.check_in(guest("Brook", 4)).unwrap();
        room.guest_mut().unwrap().add_food_item(FoodItem::new(
            "Tea/Coffee",
            Money::from_rupees(20),
            FoodCategory::Beverage,
        ));
        room.check_out().unwrap();

        room.check_in(guest("Jinbe", 1)).unwrap();
        let occupant = room.guest().unwrap();
        assert_eq!(occupant.name(), "Jinbe");
        assert!(occupant.ordered_items().is_empty());

        let bill = room.check_out().unwrap();
        assert!(!bill.has_food());
        assert_eq!(bill.total, Money::from_rupees(590));
    }

    #[test]
    fn test_longest_stay_bills_without_overflow() {
        let mut room = Room::new(205, RoomType::Ac);
        room.check_in(guest("Laboon", crate::MAX_NIGHTS)).unwrap();

        let bill = room.check_out().unwrap();
        assert_eq!(bill.room_base, Money::from_rupees(365_000));
        assert_eq!(bill.room_tax, Money::from_rupees(65_700));
        assert!(!room.is_occupied());
    }

    #[test]
    fn test_status_reflects_occupancy() {
        let mut room = Room::new(104, RoomType::NonAc);
        let vacant = room.status();
        assert!(!vacant.occupied);
        assert!(vacant.guest.is_none());

        room.check_in(guest("Chopper", 2)).unwrap();
        let occupied = room.status();
        assert!(occupied.occupied);
        let summary = occupied.guest.unwrap();
        assert_eq!(summary.name, "Chopper");
        assert_eq!(summary.nights, 2);
        assert_eq!(summary.price_per_night, Money::from_rupees(500));
    }
}
