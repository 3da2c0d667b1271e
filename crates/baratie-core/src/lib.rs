//! # baratie-core: Front-Desk Business Logic for Hotel Baratie
//!
//! Rooms, guests, food orders and billing, as plain data and pure
//! operations. Nothing in this crate reads from or writes to the console.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Hotel Baratie Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               front-desk (operator console)                     │   │
//! │  │   Login ──► Room Status ──► Check In ──► Order ──► Check Out   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ method calls                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ baratie-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────────┐  │   │
//! │  │   │ catalog  │  │  guest   │  │   room   │  │    hotel     │  │   │
//! │  │   │ FoodItem │─►│  Guest   │─►│   Room   │─►│HotelRegistry │  │   │
//! │  │   └──────────┘  └──────────┘  │ billing  │  └──────────────┘  │   │
//! │  │                               └──────────┘                     │   │
//! │  │   money • types • validation • error                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - `Money` in integer paise
//! - [`types`] - `RoomType`, `FoodCategory`, `FoodItem`, `TaxRate`
//! - [`validation`] - guest input rules
//! - [`error`] - typed errors for every operation
//! - [`catalog`] - the restaurant menu
//! - [`guest`] - a guest and their food order
//! - [`room`] - the Vacant/Occupied state machine
//! - [`billing`] - bill computation at check-out
//! - [`hotel`] - the room pool and all front-desk operations
//!
//! ## Example Usage
//!
//! ```rust
//! use baratie_core::{FoodCategory, GuestDetails, HotelRegistry, Money, RoomType};
//!
//! let mut hotel = HotelRegistry::seeded(7);
//! assert!(hotel.authenticate("admin", "admin123"));
//!
//! let room = hotel.find_available_room(RoomType::Ac).unwrap().number();
//! hotel
//!     .check_in(room, GuestDetails::new("Zeff", 60, "555-0001", 3))
//!     .unwrap();
//! hotel.order_food(room, FoodCategory::MainCourse, 1).unwrap(); // Rs.400
//! hotel.order_food(room, FoodCategory::Dessert, 1).unwrap(); // Rs.150
//!
//! let bill = hotel.check_out(room).unwrap();
//! assert_eq!(bill.total, Money::from_rupees(4189));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod billing;
pub mod catalog;
pub mod error;
pub mod guest;
pub mod hotel;
pub mod money;
pub mod room;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use billing::{BillBreakdown, BillTotals};
pub use catalog::{FoodCatalog, MenuSection};
pub use error::{CheckInError, CheckOutError, OrderError, RoomError, ValidationError};
pub use guest::{Guest, GuestDetails};
pub use hotel::{Credentials, HotelRegistry, HotelSnapshot};
pub use money::Money;
pub use room::{GuestSummary, Room, RoomStatus};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Youngest age allowed to check in.
pub const MIN_GUEST_AGE: i64 = 18;

/// Longest stay the desk will book.
pub const MAX_NIGHTS: i64 = 365;

/// Rooms of each class in the pool.
pub const ROOMS_PER_TYPE: u16 = 5;

/// Non-AC rooms are numbered from here (101-105).
pub const NON_AC_FIRST_ROOM: RoomNumber = 101;

/// AC rooms are numbered from here (201-205).
pub const AC_FIRST_ROOM: RoomNumber = 201;

/// The single operator account seeded at startup.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
