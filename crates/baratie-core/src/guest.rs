//! # Guest
//!
//! A checked-in guest: identity, length of stay, and the running food order.
//!
//! Identity fields are fixed when the guest is created; only the food order
//! grows during the stay. A `Guest` is owned by the `Room` it occupies and is
//! dropped at check-out.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::FoodItem;
use crate::validation::{
    validate_guest_age, validate_guest_name, validate_nights, validate_phone, ValidationResult,
};

/// Raw check-in form input, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestDetails {
    pub name: String,
    pub age: i64,
    pub phone: String,
    pub nights: i64,
}

impl GuestDetails {
    pub fn new(name: impl Into<String>, age: i64, phone: impl Into<String>, nights: i64) -> Self {
        GuestDetails {
            name: name.into(),
            age,
            phone: phone.into(),
            nights,
        }
    }
}

/// A guest staying in a room.
///
/// ## Invariants
/// - `name` and `phone` are non-empty (trimmed)
/// - `age >= 18`, `nights >= 1`
/// - `ordered_items` keeps insertion order, duplicates included
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guest {
    name: String,
    age: i64,
    phone: String,
    nights: i64,
    ordered_items: Vec<FoodItem>,
    checked_in_at: DateTime<Utc>,
}

impl Guest {
    /// Validates `details` and creates a guest with an empty food order.
    ///
    /// Fields are checked in form order: name, age, phone, nights.
    pub fn new(details: GuestDetails) -> ValidationResult<Self> {
        let name = validate_guest_name(&details.name)?;
        validate_guest_age(details.age)?;
        let phone = validate_phone(&details.phone)?;
        validate_nights(details.nights)?;

        Ok(Guest {
            name,
            age: details.age,
            phone,
            nights: details.nights,
            ordered_items: Vec::new(),
            checked_in_at: Utc::now(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn nights(&self) -> i64 {
        self.nights
    }

    pub fn checked_in_at(&self) -> DateTime<Utc> {
        self.checked_in_at
    }

    /// Food ordered so far, oldest first.
    pub fn ordered_items(&self) -> &[FoodItem] {
        &self.ordered_items
    }

    /// Appends an item to the order. Catalog membership is the caller's concern.
    pub fn add_food_item(&mut self, item: FoodItem) {
        self.ordered_items.push(item);
    }

    /// Sum of the prices of everything ordered, before tax.
    pub fn food_subtotal(&self) -> Money {
        self.ordered_items.iter().map(FoodItem::price).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
