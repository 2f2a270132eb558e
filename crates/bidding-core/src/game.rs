//! Game snapshots and the response envelopes of the tutor API.
//!
//! The server is authoritative for everything in here. The client never
//! edits a [`GameState`]; it replaces it wholesale after each fetch.

use crate::bid::Bid;
use crate::hand::Hand;
use crate::seat::Seat;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bidding systems offered in the settings menu
pub const BIDDING_SYSTEMS: [&str; 4] = [
    "2/1 Game Forcing",
    "Standard American",
    "Precision",
    "Acol",
];

pub const DEFAULT_BIDDING_SYSTEM: &str = BIDDING_SYSTEMS[0];

/// Number of trailing bids shown under "Recent Bids"
pub const RECENT_BID_COUNT: usize = 6;

/// Who bids for the seats the user is not sitting in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingMode {
    /// User sits South, the server bids for everyone else
    #[default]
    Single,
    /// User bids for all four seats
    Multi,
}

impl TrainingMode {
    pub const ALL: [TrainingMode; 2] = [TrainingMode::Single, TrainingMode::Multi];

    /// Query-string value
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainingMode::Single => "single",
            TrainingMode::Multi => "multi",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrainingMode::Single => "Single Hand",
            TrainingMode::Multi => "Multi Hand",
        }
    }

    /// Explanation shown under the settings
    pub fn description(&self) -> &'static str {
        match self {
            TrainingMode::Single => {
                "In Single Hand mode, you play as South while the computer handles other players' bids automatically."
            }
            TrainingMode::Multi => {
                "In Multi Hand mode, you control all players' bids manually for complete practice."
            }
        }
    }

    pub fn parse(input: &str) -> Option<TrainingMode> {
        match input.trim().to_ascii_lowercase().as_str() {
            "single" | "s" => Some(TrainingMode::Single),
            "multi" | "m" => Some(TrainingMode::Multi),
            _ => None,
        }
    }
}

impl fmt::Display for TrainingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server-authoritative snapshot of the current deal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    #[serde(default)]
    pub training_mode: TrainingMode,
    pub dealer: Seat,
    pub dealer_index: usize,
    pub user_seat: Seat,
    pub user_seat_index: usize,
    pub current_bidder_index: usize,
    pub bidding_finished: bool,
    pub bidding_system: String,
    pub current_hand: Hand,
    #[serde(default)]
    pub all_hands: Vec<Hand>,
    #[serde(default)]
    pub bidding_history: Vec<Bid>,
    /// Rows of four cells (North, East, South, West); empty string = no call
    #[serde(default)]
    pub bidding_table: Vec<Vec<String>>,
}

impl GameState {
    /// Seat whose turn it is
    pub fn current_bidder(&self) -> Seat {
        Seat::from_index(self.current_bidder_index)
    }

    /// Whether the user may bid right now
    pub fn is_user_turn(&self) -> bool {
        self.current_bidder_index == self.user_seat_index
    }

    /// The trailing bids shown under "Recent Bids"
    pub fn recent_bids(&self) -> &[Bid] {
        let start = self.bidding_history.len().saturating_sub(RECENT_BID_COUNT);
        &self.bidding_history[start..]
    }

    /// Hand dealt to a seat. Hands without a player fall back to seat order.
    pub fn hand_for(&self, seat: Seat) -> Option<&Hand> {
        self.all_hands
            .iter()
            .find(|h| h.player == Some(seat))
            .or_else(|| {
                self.all_hands
                    .get(seat.index())
                    .filter(|h| h.player.is_none())
            })
    }
}

/// A completed auction from the deal history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub dealer: Seat,
    #[serde(default)]
    pub bidding_system: Option<String>,
    /// Auction without the closing passes
    #[serde(default)]
    pub bids: Vec<Bid>,
    #[serde(default)]
    pub final_bid: String,
}

impl Deal {
    pub fn bidding_system_name(&self) -> &str {
        self.bidding_system.as_deref().unwrap_or("Unknown")
    }
}

/// Reply to `POST /new-deal`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Reply to `POST /make-bid`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bidding_finished: Option<bool>,
}

/// Reply to `GET /past-deals`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastDeals {
    #[serde(default)]
    pub deals: Vec<Deal>,
}

/// Reply to `GET /advice/:handIndex`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    pub advice: String,
}
