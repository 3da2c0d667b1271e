//! # Operator Session
//!
//! The interactive front-desk loop: login, then the main menu until the
//! operator exits or input ends.
//!
//! ## Menu Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Welcome banner                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Login loop ── authenticate() false ──► "Invalid username or password" │
//! │       │ true                                                            │
//! │       ▼                                                                 │
//! │  Main Menu ◄──────────────────────────────────────────────┐            │
//! │   1. Display Room Status ─► list_all_rooms()               │            │
//! │   2. Check In Guest ──────► find_available_room + check_in │            │
//! │   3. Order Food ──────────► list_menu + order_food (loop)  │            │
//! │   4. Check Out Guest ─────► check_out → printed bill       │            │
//! │   5. Exit                                                  │            │
//! │       └────────────────────────────────────────────────────┘            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Generic over `BufRead`/`Write` so tests can script a whole shift.

use std::io::{BufRead, Write};
use std::str::FromStr;

use baratie_core::validation::{
    validate_guest_age, validate_guest_name, validate_nights, validate_phone,
};
use baratie_core::{FoodCategory, GuestDetails, HotelRegistry, Room, RoomNumber, RoomType};
use rand::Rng;
use tracing::{info, warn};

/// What the operator typed at a room-number prompt.
enum RoomEntry {
    Number(RoomNumber),
    /// A valid integer that cannot be a room number.
    OutOfRange(i64),
}

use crate::error::{SessionError, SessionResult};
use crate::render;

/// Main-menu choice that finishes a food order.
const FINISH_ORDERING: u32 = 5;

pub struct Session<'h, R, I, O> {
    hotel: &'h mut HotelRegistry<R>,
    hotel_name: String,
    input: I,
    output: O,
}

impl<'h, R, I, O> Session<'h, R, I, O>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    pub fn new(hotel: &'h mut HotelRegistry<R>, hotel_name: impl Into<String>, input: I, output: O) -> Self {
        Session {
            hotel,
            hotel_name: hotel_name.into(),
            input,
            output,
        }
    }

    /// Runs the session to completion. End of input is a normal exit.
    pub fn run(&mut self) -> SessionResult<()> {
        match self.run_until_exit() {
            Err(SessionError::EndOfInput) => {
                info!("input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn run_until_exit(&mut self) -> SessionResult<()> {
        writeln!(self.output, "Welcome to {}", self.hotel_name)?;
        writeln!(self.output, "=================================")?;

        self.login()?;

        loop {
            writeln!(self.output, "\nMain Menu")?;
            writeln!(self.output, "1. Display Room Status")?;
            writeln!(self.output, "2. Check In Guest")?;
            writeln!(self.output, "3. Order Food")?;
            writeln!(self.output, "4. Check Out Guest")?;
            writeln!(self.output, "5. Exit")?;

            match self.prompt_number::<u32>("Enter your choice: ")? {
                1 => self.display_rooms()?,
                2 => self.check_in_guest()?,
                3 => self.order_food()?,
                4 => self.check_out_guest()?,
                5 => {
                    writeln!(
                        self.output,
                        "Thank you for using the {} front desk. Goodbye!",
                        self.hotel_name
                    )?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice! Please try again.")?,
            }
        }
    }

    // -------------------------------------------------------------------------
    // Menu actions
    // -------------------------------------------------------------------------

    fn login(&mut self) -> SessionResult<()> {
        loop {
            let username = self.prompt("\nUsername: ")?;
            let password = self.prompt("Password: ")?;

            if self.hotel.authenticate(&username, &password) {
                info!(username = %username, "operator logged in");
                return Ok(());
            }
            warn!("rejected login");
            writeln!(self.output, "Invalid username or password. Please try again.")?;
        }
    }

    fn display_rooms(&mut self) -> SessionResult<()> {
        let board = render::room_board(&self.hotel.list_all_rooms());
        write!(self.output, "{}", board)?;
        Ok(())
    }

    fn check_in_guest(&mut self) -> SessionResult<()> {
        writeln!(self.output, "\nSelect Room Type:")?;
        writeln!(
            self.output,
            "1. AC Room ({} per night)",
            RoomType::Ac.price_per_night()
        )?;
        writeln!(
            self.output,
            "2. Non-AC Room ({} per night)",
            RoomType::NonAc.price_per_night()
        )?;

        let choice = self.prompt_number::<u32>("Enter choice (1/2): ")?;
        let Some(room_type) = RoomType::from_menu_choice(choice) else {
            writeln!(self.output, "Invalid room type choice!")?;
            return Ok(());
        };

        let Some(room_number) = self.hotel.find_available_room(room_type).map(Room::number) else {
            writeln!(self.output, "No available {} rooms!", room_type)?;
            return Ok(());
        };

        writeln!(self.output, "\nEnter guest details:")?;

        // Each field is checked as soon as it is typed, so the operator
        // hears about a bad value before filling in the rest.
        let name = self.prompt("Name: ")?;
        if let Err(err) = validate_guest_name(&name) {
            writeln!(self.output, "{}", err)?;
            return Ok(());
        }

        let age = self.prompt_number::<i64>("Age: ")?;
        if let Err(err) = validate_guest_age(age) {
            writeln!(self.output, "{}", err)?;
            return Ok(());
        }

        let phone = self.prompt("Phone Number: ")?;
        if let Err(err) = validate_phone(&phone) {
            writeln!(self.output, "{}", err)?;
            return Ok(());
        }

        let nights = self.prompt_number::<i64>("Number of Nights: ")?;
        if let Err(err) = validate_nights(nights) {
            writeln!(self.output, "{}", err)?;
            return Ok(());
        }

        match self
            .hotel
            .check_in(room_number, GuestDetails::new(name, age, phone, nights))
        {
            Ok(number) => {
                writeln!(self.output, "\nCheck-in successful!")?;
                writeln!(self.output, "Allocated Room: {}", number)?;
            }
            Err(err) => writeln!(self.output, "Error during check-in: {}", err)?,
        }
        Ok(())
    }

    fn order_food(&mut self) -> SessionResult<()> {
        let room_number = match self.prompt_room("Enter room number to order food: ")? {
            RoomEntry::Number(number) => number,
            RoomEntry::OutOfRange(raw) => {
                writeln!(self.output, "Room {} not found!", raw)?;
                return Ok(());
            }
        };

        match self.hotel.find_room_by_number(room_number) {
            None => {
                writeln!(self.output, "Room {} not found!", room_number)?;
                return Ok(());
            }
            Some(room) if !room.is_occupied() => {
                writeln!(self.output, "Room {} is not occupied!", room_number)?;
                return Ok(());
            }
            Some(_) => {}
        }

        let menu = render::menu(&self.hotel.list_menu());
        write!(self.output, "{}", menu)?;

        loop {
            writeln!(self.output, "\nOrder Menu:")?;
            for (i, category) in FoodCategory::ALL.iter().enumerate() {
                writeln!(self.output, "{}. Order {}", i + 1, category)?;
            }
            writeln!(self.output, "{}. Finish Ordering", FINISH_ORDERING)?;

            let choice = self.prompt_number::<u32>("Enter your choice: ")?;
            if choice == FINISH_ORDERING {
                return Ok(());
            }

            let category = match FoodCategory::from_menu_choice(choice) {
                Ok(category) => category,
                Err(err) => {
                    writeln!(self.output, "{}", err)?;
                    continue;
                }
            };

            let index = self.prompt_number::<usize>("Enter item number: ")?;
            match self.hotel.order_food(room_number, category, index) {
                Ok(item) => writeln!(
                    self.output,
                    "{} added to order - {}",
                    item.name(),
                    item.price()
                )?,
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
    }

    fn check_out_guest(&mut self) -> SessionResult<()> {
        let room_number = match self.prompt_room("Enter room number to check out: ")? {
            RoomEntry::Number(number) => number,
            RoomEntry::OutOfRange(raw) => {
                writeln!(self.output, "Room {} not found!", raw)?;
                return Ok(());
            }
        };

        match self.hotel.check_out(room_number) {
            Ok(bill) => {
                write!(self.output, "{}", render::bill(&bill))?;
                writeln!(self.output, "Check-out successful!")?;
            }
            Err(err) => writeln!(self.output, "{}", err)?,
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Input helpers
    // -------------------------------------------------------------------------

    /// Prints `label`, reads one line, and returns it trimmed.
    fn prompt(&mut self, label: &str) -> SessionResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    /// Reads any integer, so `-1` or `70000` reach the "not found" path
    /// instead of being re-prompted.
    fn prompt_room(&mut self, label: &str) -> SessionResult<RoomEntry> {
        let raw = self.prompt_number::<i64>(label)?;
        Ok(RoomNumber::try_from(raw)
            .map(RoomEntry::Number)
            .unwrap_or(RoomEntry::OutOfRange(raw)))
    }

    /// Prompts until the line parses as `T`.
    fn prompt_number<T: FromStr>(&mut self, label: &str) -> SessionResult<T> {
        loop {
            let raw = self.prompt(label)?;
            match raw.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Please enter a valid number.")?,
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
