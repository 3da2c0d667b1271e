//! # Food Catalog
//!
//! The restaurant menu: a fixed list of [`FoodItem`]s seeded at construction.
//!
//! Items are addressed by category plus a **1-based** index within that
//! category, matching the numbers printed next to each dish.
//!
//! ```text
//! Starters:                 lookup(Starter, 2) → Chicken Tikka
//! 1. Veg Spring Rolls
//! 2. Chicken Tikka          lookup(Starter, 4) → None
//! 3. Paneer Tikka
//! ```

use serde::Serialize;

use crate::money::Money;
use crate::types::{FoodCategory, FoodItem};

/// Default menu: (name, price in rupees, category).
const DEFAULT_MENU: &[(&str, i64, FoodCategory)] = &[
    ("Veg Spring Rolls", 200, FoodCategory::Starter),
    ("Chicken Tikka", 300, FoodCategory::Starter),
    ("Paneer Tikka", 250, FoodCategory::Starter),
    ("Butter Chicken", 400, FoodCategory::MainCourse),
    ("Paneer Butter Masala", 350, FoodCategory::MainCourse),
    ("Veg Biryani", 300, FoodCategory::MainCourse),
    ("Gulab Jamun", 150, FoodCategory::Dessert),
    ("Ice Cream", 100, FoodCategory::Dessert),
    ("Rasmalai", 200, FoodCategory::Dessert),
    ("Mineral Water", 50, FoodCategory::Beverage),
    ("Cold Drink", 70, FoodCategory::Beverage),
    ("Tea/Coffee", 20, FoodCategory::Beverage),
];

/// One category of the menu with its items numbered from 1.
#[derive(Debug, Clone, Serialize)]
pub struct MenuSection<'a> {
    pub category: FoodCategory,
    pub items: Vec<(usize, &'a FoodItem)>,
}

/// The restaurant menu.
#[derive(Debug, Clone)]
pub struct FoodCatalog {
    items: Vec<FoodItem>,
}

impl FoodCatalog {
    /// Builds a catalog from an explicit item list. Listing order within a
    /// category follows the order of `items`.
    pub fn new(items: Vec<FoodItem>) -> Self {
        FoodCatalog { items }
    }

    /// Items in `category`, numbered from 1, in catalog order.
    ///
    /// The iterator is lazy and recomputed on every call.
    pub fn list_by_category(
        &self,
        category: FoodCategory,
    ) -> impl Iterator<Item = (usize, &FoodItem)> + '_ {
        self.items
            .iter()
            .filter(move |item| item.category() == category)
            .enumerate()
            .map(|(i, item)| (i + 1, item))
    }

    /// Returns the item at 1-based `index` within `category`.
    ///
    /// `None` when the index is 0, past the end, or the category is empty.
    pub fn lookup(&self, category: FoodCategory, index: usize) -> Option<&FoodItem> {
        if index == 0 {
            return None;
        }
        self.list_by_category(category)
            .nth(index - 1)
            .map(|(_, item)| item)
    }

    /// The whole menu grouped by category in display order.
    pub fn sections(&self) -> Vec<MenuSection<'_>> {
        FoodCategory::ALL
            .iter()
            .map(|&category| MenuSection {
                category,
                items: self.list_by_category(category).collect(),
            })
            .collect()
    }
}

impl Default for FoodCatalog {
    /// Three starters, three main courses, three desserts, three beverages.
    fn default() -> Self {
        FoodCatalog::new(
            DEFAULT_MENU
                .iter()
                .map(|&(name, rupees, category)| {
                    FoodItem::new(name, Money::from_rupees(rupees), category)
                })
                .collect(),
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
