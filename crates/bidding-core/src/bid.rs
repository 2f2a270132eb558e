//! Bids: historical entries from the server and outbound bid requests.

use crate::cards::Strain;
use crate::game::TrainingMode;
use crate::seat::Seat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest and highest contract level
pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 7;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BidRequestError {
    #[error("Bid level must be between 1 and 7, got {0}")]
    InvalidLevel(u8),
}

/// Kind of call made at the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BidType {
    Standard,
    Pass,
    Double,
    Redouble,
}

/// One entry of the bidding history.
///
/// Past-deal listings only carry `player` and `displayText`, so every field
/// falls back to its default when missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bid {
    pub player: Option<Seat>,
    pub level: u8,
    pub suit: Option<Strain>,
    pub bid_type: Option<BidType>,
    pub is_pass: bool,
    pub is_double: bool,
    pub is_redouble: bool,
    /// Server-rendered text such as "1♥", "Pass" or "Double"
    pub display_text: String,
}

impl Bid {
    /// A contract bid such as 1♥
    pub fn contract(player: Seat, level: u8, strain: Strain) -> Self {
        Self {
            player: Some(player),
            level,
            suit: Some(strain),
            bid_type: Some(BidType::Standard),
            display_text: format!("{}{}", level, strain.symbol()),
            ..Self::default()
        }
    }

    pub fn pass(player: Seat) -> Self {
        Self {
            player: Some(player),
            bid_type: Some(BidType::Pass),
            is_pass: true,
            display_text: "Pass".to_string(),
            ..Self::default()
        }
    }

    pub fn double(player: Seat) -> Self {
        Self {
            player: Some(player),
            bid_type: Some(BidType::Double),
            is_double: true,
            display_text: "Double".to_string(),
            ..Self::default()
        }
    }

    pub fn redouble(player: Seat) -> Self {
        Self {
            player: Some(player),
            bid_type: Some(BidType::Redouble),
            is_redouble: true,
            display_text: "Redouble".to_string(),
            ..Self::default()
        }
    }

    /// Name of the seat that made the call, or "?" when the server omitted it
    pub fn player_name(&self) -> &'static str {
        self.player.map(|p| p.name()).unwrap_or("?")
    }
}

/// A bid the user wants to make. Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suit: Option<Strain>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redouble: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_mode: Option<TrainingMode>,
}

impl BidRequest {
    /// A contract bid at the given level and strain
    pub fn contract(level: u8, strain: Strain) -> Result<Self, BidRequestError> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            return Err(BidRequestError::InvalidLevel(level));
        }
        Ok(Self {
            level: Some(level),
            suit: Some(strain),
            ..Self::default()
        })
    }

    pub fn pass() -> Self {
        Self {
            pass: Some(true),
            ..Self::default()
        }
    }

    pub fn double() -> Self {
        Self {
            double: Some(true),
            ..Self::default()
        }
    }

    pub fn redouble() -> Self {
        Self {
            redouble: Some(true),
            ..Self::default()
        }
    }

    /// Attach the training mode the server should use for automatic bids
    pub fn with_training_mode(mut self, mode: TrainingMode) -> Self {
        self.training_mode = Some(mode);
        self
    }

    /// Short human description, e.g. "1♥" or "Pass"
    pub fn describe(&self) -> String {
        if self.pass == Some(true) {
            "Pass".to_string()
        } else if self.double == Some(true) {
            "Double".to_string()
        } else if self.redouble == Some(true) {
            "Redouble".to_string()
        } else {
            match (self.level, self.suit) {
                (Some(level), Some(strain)) => format!("{}{}", level, strain.symbol()),
                _ => "Unknown".to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_contract_request_rejects_bad_level() {
        assert_eq!(
            BidRequest::contract(0, Strain::Clubs),
            Err(BidRequestError::InvalidLevel(0))
        );
        assert_eq!(
            BidRequest::contract(8, Strain::Notrump),
            Err(BidRequestError::InvalidLevel(8))
        );
        assert!(BidRequest::contract(7, Strain::Notrump).is_ok());
    }

    #[test]
    fn test_request_omits_unset_fields() {
        let request = BidRequest::contract(1, Strain::Hearts)
            .unwrap()
            .with_training_mode(TrainingMode::Single);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"level": 1, "suit": "HEARTS", "trainingMode": "single"})
        );

        assert_eq!(
            serde_json::to_value(BidRequest::pass()).unwrap(),
            json!({"pass": true})
        );
        assert_eq!(
            serde_json::to_value(BidRequest::redouble().with_training_mode(TrainingMode::Multi))
                .unwrap(),
            json!({"redouble": true, "trainingMode": "multi"})
        );
    }

    #[test]
    fn test_describe() {
        assert_eq!(BidRequest::contract(3, Strain::Notrump).unwrap().describe(), "3NT");
        assert_eq!(BidRequest::double().describe(), "Double");
        assert_eq!(BidRequest::default().describe(), "Unknown");
    }

    #[test]
    fn test_history_entry_decodes() {
        let bid: Bid = serde_json::from_value(json!({
            "player": "EAST",
            "level": 0,
            "suit": null,
            "bidType": "PASS",
            "isPass": true,
            "isDouble": false,
            "isRedouble": false,
            "displayText": "Pass"
        }))
        .unwrap();
        assert_eq!(bid, Bid::pass(Seat::East));
    }

    #[test]
    fn test_past_deal_entry_decodes_with_defaults() {
        let bid: Bid =
            serde_json::from_value(json!({"player": "NORTH", "displayText": "2♠"})).unwrap();
        assert_eq!(bid.player, Some(Seat::North));
        assert_eq!(bid.display_text, "2♠");
        assert!(!bid.is_pass);
        assert_eq!(bid.bid_type, None);
    }
}
