//! # Domain Types
//!
//! Shared vocabulary for rooms, food and tax.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    RoomType     │   │  FoodCategory   │   │    FoodItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  NonAc  Rs.500  │   │  Starter        │   │  name           │       │
//! │  │  Ac    Rs.1000  │   │  MainCourse     │   │  price (Money)  │       │
//! │  └─────────────────┘   │  Dessert        │   │  category       │       │
//! │                        │  Beverage       │   └─────────────────┘       │
//! │  ┌─────────────────┐   └─────────────────┘                             │
//! │  │    TaxRate      │                                                    │
//! │  │  1800 bps = 18% │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::OrderError;
use crate::money::Money;

/// Human-facing room number (101-105, 201-205).
pub type RoomNumber = u16;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 1800 bps = 18%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

/// GST applied separately to the room subtotal and the food subtotal.
pub const GST_RATE: TaxRate = TaxRate::from_bps(1800);

// =============================================================================
// Room Type
// =============================================================================

/// Room class. The only difference between classes is the nightly price
/// and the label shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    NonAc,
    Ac,
}

/// Nightly price per room class.
const ROOM_PRICE_TABLE: [(RoomType, Money); 2] = [
    (RoomType::NonAc, Money::from_rupees(500)),
    (RoomType::Ac, Money::from_rupees(1000)),
];

impl RoomType {
    /// Looks up the nightly price in the price table.
    pub fn price_per_night(&self) -> Money {
        ROOM_PRICE_TABLE
            .iter()
            .find(|(room_type, _)| room_type == self)
            .map(|(_, price)| *price)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoomType::NonAc => "Non-AC",
            RoomType::Ac => "AC",
        }
    }

    /// Maps the check-in menu choice: 1 is AC, 2 is Non-AC.
    pub fn from_menu_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(RoomType::Ac),
            2 => Some(RoomType::NonAc),
            _ => None,
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Food Category
// =============================================================================

/// Menu section a food item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    Starter,
    MainCourse,
    Dessert,
    Beverage,
}

impl FoodCategory {
    /// Menu display order.
    pub const ALL: [FoodCategory; 4] = [
        FoodCategory::Starter,
        FoodCategory::MainCourse,
        FoodCategory::Dessert,
        FoodCategory::Beverage,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FoodCategory::Starter => "Starter",
            FoodCategory::MainCourse => "Main Course",
            FoodCategory::Dessert => "Dessert",
            FoodCategory::Beverage => "Beverage",
        }
    }

    /// Section heading used when the menu is printed.
    pub fn heading(&self) -> &'static str {
        match self {
            FoodCategory::Starter => "Starters",
            FoodCategory::MainCourse => "Main Course",
            FoodCategory::Dessert => "Desserts",
            FoodCategory::Beverage => "Beverages",
        }
    }

    /// Maps the order menu choice (1-4) to a category.
    pub fn from_menu_choice(choice: u32) -> Result<Self, OrderError> {
        match choice {
            1..=4 => Ok(Self::ALL[(choice - 1) as usize]),
            other => Err(OrderError::InvalidCategory(other.to_string())),
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Food Item
// =============================================================================

/// A dish or drink on the restaurant menu.
///
/// Created once when the catalog is built and never mutated; guests hold
/// copies of the items they order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    name: String,
    price: Money,
    category: FoodCategory,
}

impl FoodItem {
    pub fn new(name: impl Into<String>, price: Money, category: FoodCategory) -> Self {
        FoodItem {
            name: name.into(),
            price,
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn category(&self) -> FoodCategory {
        self.category
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gst_rate() {
        assert_eq!(GST_RATE.bps(), 1800);
        assert!((GST_RATE.percentage() - 18.0).abs() < 0.001);
    }

    #[test]
    fn test_room_prices_from_table() {
        assert_eq!(RoomType::NonAc.price_per_night(), Money::from_rupees(500));
        assert_eq!(RoomType::Ac.price_per_night(), Money::from_rupees(1000));
    }

    #[test]
    fn test_room_type_menu_choice() {
        assert_eq!(RoomType::Ac.to_string(), "AC");
        assert_eq!(RoomType::NonAc.to_string(), "Non-AC");

        assert_eq!(RoomType::from_menu_choice(1), Some(RoomType::Ac));
        assert_eq!(RoomType::from_menu_choice(2), Some(RoomType::NonAc));
        assert_eq!(RoomType::from_menu_choice(3), None);
    }

    #[test]
    fn test_food_category_menu_choice() {
        assert_eq!(FoodCategory::from_menu_choice(1), Ok(FoodCategory::Starter));
        assert_eq!(FoodCategory::from_menu_choice(4), Ok(FoodCategory::Beverage));
        assert_eq!(
            FoodCategory::from_menu_choice(0),
            Err(OrderError::InvalidCategory("0".to_string()))
        );
        assert!(FoodCategory::from_menu_choice(5).is_err());
    }

    #[test]
    fn test_food_category_labels() {
        assert_eq!(FoodCategory::MainCourse.to_string(), "Main Course");
        assert_eq!(FoodCategory::Dessert.heading(), "Desserts");
    }
}
