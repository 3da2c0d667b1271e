//! # Billing
//!
//! Pure bill computation for a finished stay.
//!
//! ## Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  room_base = price_per_night × nights                                   │
//! │  room_tax  = room_base × 18%          ◄── taxed on its own              │
//! │  food_base = Σ item.price                                               │
//! │  food_tax  = food_base × 18%          ◄── taxed on its own              │
//! │  total     = room_base + room_tax + food_base + food_tax                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Room and food are two separate tax lines. Each is rounded to the paisa
//! independently, so the total can differ by a paisa from taxing the sum.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::guest::Guest;
use crate::money::Money;
use crate::types::{FoodItem, RoomNumber, RoomType, GST_RATE};

/// Itemized bill produced at check-out. Display is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillBreakdown {
    pub invoice_id: Uuid,
    pub room_number: RoomNumber,
    pub room_type: RoomType,
    pub guest_name: String,
    pub nights: i64,
    pub checked_in_at: DateTime<Utc>,
    pub price_per_night: Money,
    pub room_base: Money,
    pub room_tax: Money,
    pub food_items: Vec<FoodItem>,
    pub food_base: Money,
    pub food_tax: Money,
    pub total: Money,
    pub issued_at: DateTime<Utc>,
}

/// The five figures of a bill, without the header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillTotals {
    pub room_base: Money,
    pub room_tax: Money,
    pub food_base: Money,
    pub food_tax: Money,
    pub total: Money,
}

impl BillTotals {
    /// Applies the billing formula.
    pub fn compute(price_per_night: Money, nights: i64, food: &[FoodItem]) -> Self {
        let room_base = price_per_night.multiply_nights(nights);
        let room_tax = room_base.calculate_tax(GST_RATE);
        let food_base: Money = food.iter().map(FoodItem::price).sum();
        let food_tax = food_base.calculate_tax(GST_RATE);

        BillTotals {
            room_base,
            room_tax,
            food_base,
            food_tax,
            total: room_base + room_tax + food_base + food_tax,
        }
    }
}

impl BillBreakdown {
    /// Bills `guest` for a stay in room `room_number` of class `room_type`.
    pub fn for_stay(room_number: RoomNumber, room_type: RoomType, guest: &Guest) -> Self {
        let price_per_night = room_type.price_per_night();
        let totals = BillTotals::compute(price_per_night, guest.nights(), guest.ordered_items());

        BillBreakdown {
            invoice_id: Uuid::new_v4(),
            room_number,
            room_type,
            guest_name: guest.name().to_string(),
            nights: guest.nights(),
            checked_in_at: guest.checked_in_at(),
            price_per_night,
            room_base: totals.room_base,
            room_tax: totals.room_tax,
            food_items: guest.ordered_items().to_vec(),
            food_base: totals.food_base,
            food_tax: totals.food_tax,
            total: totals.total,
            issued_at: Utc::now(),
        }
    }

    pub fn has_food(&self) -> bool {
        !self.food_items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guest::GuestDetails;
    use crate::types::FoodCategory;

    fn rupees(r: i64) -> Money {
        Money::from_rupees(r)
    }

    #[test]
    fn test_three_nights_ac_with_food() {
        let food = [
            FoodItem::new("Butter Chicken", rupees(400), FoodCategory::MainCourse),
            FoodItem::new("Gulab Jamun", rupees(150), FoodCategory::Dessert),
        ];
        let totals = BillTotals::compute(rupees(1000), 3, &food);

        assert_eq!(totals.room_base, rupees(3000));
        assert_eq!(totals.room_tax, rupees(540));
        assert_eq!(totals.food_base, rupees(550));
        assert_eq!(totals.food_tax, rupees(99));
        assert_eq!(totals.total, rupees(4189));
        assert_eq!(totals.total.to_string(), "Rs.4189.00");
    }

    #[test]
    fn test_empty_food_order() {
        let totals = BillTotals::compute(rupees(500), 2, &[]);
        assert!(totals.food_base.is_zero());
        assert!(totals.food_tax.is_zero());
        assert_eq!(totals.total, totals.room_base + totals.room_tax);
        assert_eq!(totals.total, rupees(1180));
    }

    #[test]
    fn test_room_and_food_taxed_separately() {
        // 25 paise of food: 4.5 → 5 paise on its own line.
        let food = [FoodItem::new("Mint", Money::from_paise(25), FoodCategory::Dessert)];
        let totals = BillTotals::compute(rupees(500), 1, &food);

        assert_eq!(totals.room_tax, rupees(90));
        assert_eq!(totals.food_tax, Money::from_paise(5));
        assert_eq!(totals.total, Money::from_paise(50000 + 9000 + 25 + 5));
    }

    #[test]
    fn test_for_stay_copies_header_and_items() {
        let mut guest = Guest::new(GuestDetails::new("Franky", 36, "555-0199", 3)).unwrap();
        guest.add_food_item(FoodItem::new("Cold Drink", rupees(70), FoodCategory::Beverage));
        guest.add_food_item(FoodItem::new("Cold Drink", rupees(70), FoodCategory::Beverage));

        let bill = BillBreakdown::for_stay(203, RoomType::Ac, &guest);

        assert_eq!(bill.room_number, 203);
        assert_eq!(bill.guest_name, "Franky");
        assert_eq!(bill.nights, 3);
        assert_eq!(bill.price_per_night, rupees(1000));
        assert_eq!(bill.food_items.len(), 2);
        assert!(bill.has_food());
        assert_eq!(bill.food_base, rupees(140));
        assert_eq!(bill.checked_in_at, guest.checked_in_at());
        assert!(bill.issued_at >= bill.checked_in_at);

        let totals = BillTotals::compute(rupees(1000), 3, guest.ordered_items());
        assert_eq!(bill.total, totals.total);
    }
}
