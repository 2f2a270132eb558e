//! Client error types.

use std::fmt;
use thiserror::Error;

/// The API call that failed, used to phrase the error message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchGameState,
    StartNewDeal,
    MakeBid,
    FetchPastDeals,
    FetchAdvice,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Operation::FetchGameState => "fetch game state",
            Operation::StartNewDeal => "start new deal",
            Operation::MakeBid => "make bid",
            Operation::FetchPastDeals => "fetch past deals",
            Operation::FetchAdvice => "fetch advice",
        };
        f.write_str(text)
    }
}

/// Any failure talking to the tutor server.
///
/// Callers do not branch on the variant; the store only keeps the
/// `Display` text for the error panel.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to {operation}: {source}")]
    Request {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to {operation}: server returned {status}")]
    Status { operation: Operation, status: u16 },

    #[error("Failed to {operation}: invalid response ({source})")]
    Decode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },
}
