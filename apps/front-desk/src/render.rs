//! # Text Rendering
//!
//! Turns core snapshots into the text the operator sees. Pure functions:
//! they build strings and never touch stdout.

use std::fmt::Write;

use baratie_core::{BillBreakdown, MenuSection, RoomStatus, GST_RATE};

/// Timestamp format for the stay dates on a bill.
const STAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// One line of the room status board.
pub fn room_status_line(status: &RoomStatus) -> String {
    match &status.guest {
        Some(guest) => format!(
            "Room {} ({}): Occupied by {} | Age: {} | Phone: {} | Nights: {} | Price: {}/night",
            status.number,
            status.room_type,
            guest.name,
            guest.age,
            guest.phone,
            guest.nights,
            guest.price_per_night
        ),
        None => format!(
            "Room {} ({}): Available - Price: {}/night",
            status.number, status.room_type, status.price_per_night
        ),
    }
}

pub fn room_board(rooms: &[RoomStatus]) -> String {
    let mut out = String::from("\nHotel Room Status:\n==================\n");
    for status in rooms {
        out.push_str(&room_status_line(status));
        out.push('\n');
    }
    out
}

pub fn menu(sections: &[MenuSection<'_>]) -> String {
    let mut out = String::from("\nRestaurant Menu\n===============\n");
    for section in sections {
        let _ = writeln!(out, "\n{}:", section.category.heading());
        for (index, item) in &section.items {
            let _ = writeln!(out, "{}. {} - {}", index, item.name(), item.price());
        }
    }
    out
}

/// The itemized bill printed at check-out. The food block is omitted when
/// nothing was ordered.
pub fn bill(bill: &BillBreakdown) -> String {
    let rate = GST_RATE.percentage();
    let mut out = String::new();

    let _ = writeln!(out, "\nBILL DETAILS");
    let _ = writeln!(out, "============");
    let _ = writeln!(out, "Invoice: {}", bill.invoice_id);
    let _ = writeln!(out, "Room Number: {} ({})", bill.room_number, bill.room_type);
    let _ = writeln!(out, "Guest Name: {}", bill.guest_name);
    let _ = writeln!(out, "Checked In: {}", bill.checked_in_at.format(STAY_TIME_FORMAT));
    let _ = writeln!(out, "Checked Out: {}", bill.issued_at.format(STAY_TIME_FORMAT));
    let _ = writeln!(out, "Number of Nights: {}", bill.nights);
    let _ = writeln!(out, "Room Price per Night: {}", bill.price_per_night);
    let _ = writeln!(out, "Room Base Amount: {}", bill.room_base);
    let _ = writeln!(out, "Room Tax Amount ({rate}%): {}", bill.room_tax);

    if bill.has_food() {
        let _ = writeln!(out, "\nFood Orders:");
        for item in &bill.food_items {
            let _ = writeln!(out, "{} - {}", item.name(), item.price());
        }
        let _ = writeln!(out, "Food Base Amount: {}", bill.food_base);
        let _ = writeln!(out, "Food Tax Amount ({rate}%): {}", bill.food_tax);
    }

    let _ = writeln!(out, "\nTotal Amount: {}", bill.total);
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use baratie_core::{FoodCategory, GuestDetails, HotelRegistry};

    #[test]
    fn test_vacant_status_line() {
        let hotel = HotelRegistry::seeded(1);
        let rooms = hotel.list_all_rooms();
        assert_eq!(
            room_status_line(&rooms[0]),
            "Room 101 (Non-AC): Available - Price: Rs.500.00/night"
        );
        assert_eq!(
            room_status_line(&rooms[5]),
            "Room 201 (AC): Available - Price: Rs.1000.00/night"
        );
    }

    #[test]
    fn test_occupied_status_line() {
        let mut hotel = HotelRegistry::seeded(1);
        hotel
            .check_in(202, GuestDetails::new("Nico Robin", 30, "555-0142", 4))
            .unwrap();
        let status = hotel.find_room_by_number(202).unwrap().status();
        assert_eq!(
            room_status_line(&status),
            "Room 202 (AC): Occupied by Nico Robin | Age: 30 | Phone: 555-0142 | Nights: 4 | Price: Rs.1000.00/night"
        );
    }

    #[test]
    fn test_room_board_lists_every_room() {
        let hotel = HotelRegistry::seeded(1);
        let board = room_board(&hotel.list_all_rooms());
        assert_eq!(board.lines().filter(|l| l.starts_with("Room ")).count(), 10);
        assert!(board.find("Room 105").unwrap() < board.find("Room 201").unwrap());
    }

    #[test]
    fn test_menu_text() {
        let hotel = HotelRegistry::seeded(1);
        let text = menu(&hotel.list_menu());
        assert!(text.contains("\nStarters:\n1. Veg Spring Rolls - Rs.200.00\n"));
        assert!(text.contains("\nBeverages:\n1. Mineral Water - Rs.50.00\n"));
        assert!(text.contains("3. Tea/Coffee - Rs.20.00"));
    }

    #[test]
    fn test_bill_with_food() {
        let mut hotel = HotelRegistry::seeded(1);
        hotel
            .check_in(201, GuestDetails::new("Sanji", 21, "555-0103", 3))
            .unwrap();
        hotel.order_food(201, FoodCategory::MainCourse, 1).unwrap();
        hotel.order_food(201, FoodCategory::Dessert, 1).unwrap();
        let breakdown = hotel.check_out(201).unwrap();
        let text = bill(&breakdown);

        assert!(text.contains("Guest Name: Sanji"));
        assert!(text.contains(&format!(
            "Checked In: {}\n",
            breakdown.checked_in_at.format("%Y-%m-%d %H:%M UTC")
        )));
        assert!(text.contains("Checked Out: "));
        assert!(text.contains("Room Base Amount: Rs.3000.00"));
        assert!(text.contains("Room Tax Amount (18%): Rs.540.00"));
        assert!(text.contains("Butter Chicken - Rs.400.00"));
        assert!(text.contains("Food Base Amount: Rs.550.00"));
        assert!(text.contains("Food Tax Amount (18%): Rs.99.00"));
        assert!(text.contains("Total Amount: Rs.4189.00"));
    }

    #[test]
    fn test_bill_without_food_omits_food_block() {
        let mut hotel = HotelRegistry::seeded(1);
        hotel
            .check_in(101, GuestDetails::new("Zoro", 21, "555-0102", 2))
            .unwrap();
        let text = bill(&hotel.check_out(101).unwrap());

        assert!(!text.contains("Food Orders:"));
        assert!(!text.contains("Food Tax"));
        assert!(text.contains("Total Amount: Rs.1180.00"));
    }
}
