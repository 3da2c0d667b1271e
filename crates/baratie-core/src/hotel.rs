//! # Hotel Registry
//!
//! Owns the fixed room pool, the restaurant menu and the operator accounts.
//! Every front-desk operation goes through here.
//!
//! ## Room Pool
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Non-AC (Rs.500/night)    101  102  103  104  105                       │
//! │  AC     (Rs.1000/night)   201  202  203  204  205                       │
//! │                                                                         │
//! │  Listing order is always construction order: 101..105, then 201..205. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Room Allocation
//! `find_available_room` picks **uniformly at random** among vacant rooms of
//! the requested class. The random source is injected, so a seeded
//! registry allocates deterministically.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use crate::billing::BillBreakdown;
use crate::catalog::{FoodCatalog, MenuSection};
use crate::error::{CheckInError, CheckOutError, OrderError};
use crate::guest::{Guest, GuestDetails};
use crate::room::{Room, RoomStatus};
use crate::types::{FoodCategory, FoodItem, RoomNumber, RoomType};
use crate::{
    AC_FIRST_ROOM, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME, NON_AC_FIRST_ROOM,
    ROOMS_PER_TYPE,
};

// =============================================================================
// Credentials
// =============================================================================

/// An operator account. Plain-text comparison; there is no real security here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }

    fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Credentials::new(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Serializable picture of every room, occupant and food order.
///
/// Output only; there is no load path.
#[derive(Debug, Clone, Serialize)]
pub struct HotelSnapshot {
    pub rooms: Vec<Room>,
}

// =============================================================================
// Hotel Registry
// =============================================================================

/// The hotel. Rooms are created once and never added or removed.
#[derive(Debug)]
pub struct HotelRegistry<R = StdRng> {
    rooms: Vec<Room>,
    catalog: FoodCatalog,
    accounts: Vec<Credentials>,
    rng: R,
}

impl HotelRegistry<StdRng> {
    /// Standard hotel with an entropy-seeded allocator.
    pub fn new() -> Self {
        HotelRegistry::with_rng(StdRng::from_entropy())
    }

    /// Standard hotel whose room allocation is reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        HotelRegistry::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for HotelRegistry<StdRng> {
    fn default() -> Self {
        HotelRegistry::new()
    }
}

impl<R: Rng> HotelRegistry<R> {
    /// Standard room pool, default menu and the default admin account,
    /// allocating rooms with `rng`.
    pub fn with_rng(rng: R) -> Self {
        let non_ac = (0..ROOMS_PER_TYPE).map(|i| Room::new(NON_AC_FIRST_ROOM + i, RoomType::NonAc));
        let ac = (0..ROOMS_PER_TYPE).map(|i| Room::new(AC_FIRST_ROOM + i, RoomType::Ac));

        HotelRegistry {
            rooms: non_ac.chain(ac).collect(),
            catalog: FoodCatalog::default(),
            accounts: vec![Credentials::default()],
            rng,
        }
    }

    /// Replaces the operator accounts.
    pub fn with_credentials(mut self, accounts: Vec<Credentials>) -> Self {
        self.accounts = accounts;
        self
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Exact-match check against the configured accounts.
    ///
    /// Rejected attempts are logged without the username: operators do type
    /// passwords into the wrong field.
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        let ok = self
            .accounts
            .iter()
            .any(|account| account.matches(username, password));
        if ok {
            debug!(username = %username, "operator login accepted");
        } else {
            debug!("operator login rejected");
        }
        ok
    }

    /// Status of every room, in construction order.
    pub fn list_all_rooms(&self) -> Vec<RoomStatus> {
        self.rooms.iter().map(Room::status).collect()
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn find_room_by_number(&self, number: RoomNumber) -> Option<&Room> {
        self.rooms.iter().find(|room| room.number() == number)
    }

    fn find_room_by_number_mut(&mut self, number: RoomNumber) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.number() == number)
    }

    /// A random vacant room of `room_type`, or `None` if all are taken.
    pub fn find_available_room(&mut self, room_type: RoomType) -> Option<&Room> {
        let candidates: Vec<&Room> = self
            .rooms
            .iter()
            .filter(|room| room.room_type() == room_type && !room.is_occupied())
            .collect();
        let picked = candidates.choose(&mut self.rng).copied();
        debug!(
            room_type = %room_type,
            vacant = candidates.len(),
            picked = ?picked.map(Room::number),
            "room allocation"
        );
        picked
    }

    /// The full menu, grouped by category, 1-indexed within each group.
    pub fn list_menu(&self) -> Vec<MenuSection<'_>> {
        self.catalog.sections()
    }

    pub fn snapshot(&self) -> HotelSnapshot {
        HotelSnapshot {
            rooms: self.rooms.clone(),
        }
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Validates `details` and checks the guest into room `number`.
    ///
    /// Checked in this order: room exists, guest details valid, room vacant.
    /// Nothing changes on failure.
    pub fn check_in(
        &mut self,
        number: RoomNumber,
        details: GuestDetails,
    ) -> Result<RoomNumber, CheckInError> {
        if self.find_room_by_number(number).is_none() {
            return Err(CheckInError::RoomNotFound(number));
        }
        let guest = Guest::new(details)?;
        let nights = guest.nights();

        let room = self
            .find_room_by_number_mut(number)
            .ok_or(CheckInError::RoomNotFound(number))?;
        room.check_in(guest)?;

        info!(room = number, room_type = %room.room_type(), nights, "guest checked in");
        Ok(number)
    }

    /// Adds item `item_index` (1-based) of `category` to the order of the
    /// guest in room `number` and returns the item.
    pub fn order_food(
        &mut self,
        number: RoomNumber,
        category: FoodCategory,
        item_index: usize,
    ) -> Result<FoodItem, OrderError> {
        let room = self
            .rooms
            .iter_mut()
            .find(|room| room.number() == number)
            .ok_or(OrderError::RoomNotFound(number))?;
        let guest = room.guest_mut().ok_or(OrderError::RoomVacant(number))?;

        let item = self
            .catalog
            .lookup(category, item_index)
            .cloned()
            .ok_or(OrderError::ItemIndexOutOfRange { index: item_index })?;
        guest.add_food_item(item.clone());

        info!(
            room = number,
            item = %item.name(),
            price = %item.price(),
            "food ordered"
        );
        Ok(item)
    }

    /// Bills and removes the guest in room `number`.
    pub fn check_out(&mut self, number: RoomNumber) -> Result<BillBreakdown, CheckOutError> {
        let room = self
            .find_room_by_number_mut(number)
            .ok_or(CheckOutError::RoomNotFound(number))?;
        let bill = room.check_out()?;

        info!(
            room = number,
            invoice = %bill.invoice_id,
            total = %bill.total,
            "guest checked out"
        );
        Ok(bill)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
