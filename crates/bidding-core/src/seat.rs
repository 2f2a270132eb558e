//! Seats around the bridge table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four positions at the table, in clockwise order from North.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Seat {
    North,
    East,
    South,
    West,
}

impl Seat {
    /// All seats in table order (index 0..3)
    pub const ALL: [Seat; 4] = [Seat::North, Seat::East, Seat::South, Seat::West];

    /// Get the seat for a table index, wrapping past West
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// Position of this seat in table order
    pub fn index(&self) -> usize {
        match self {
            Seat::North => 0,
            Seat::East => 1,
            Seat::South => 2,
            Seat::West => 3,
        }
    }

    /// Name used in headings, e.g. "North"
    pub fn name(&self) -> &'static str {
        match self {
            Seat::North => "North",
            Seat::East => "East",
            Seat::South => "South",
            Seat::West => "West",
        }
    }

    /// One-letter abbreviation
    pub fn short_name(&self) -> &'static str {
        match self {
            Seat::North => "N",
            Seat::East => "E",
            Seat::South => "S",
            Seat::West => "W",
        }
    }

    /// Parse a seat from its name or abbreviation, case-insensitively
    pub fn parse(input: &str) -> Option<Seat> {
        match input.trim().to_ascii_lowercase().as_str() {
            "n" | "north" => Some(Seat::North),
            "e" | "east" => Some(Seat::East),
            "s" | "south" => Some(Seat::South),
            "w" | "west" => Some(Seat::West),
            _ => None,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
