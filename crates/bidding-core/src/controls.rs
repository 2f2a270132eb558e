//! Which calls the bidding controls offer.
//!
//! Only the tail of the history is consulted; legality beyond that is the
//! server's job.

use crate::bid::Bid;
use crate::game::GameState;

/// Double is offered iff the last call was not a pass
pub fn can_double(history: &[Bid]) -> bool {
    history.last().is_some_and(|bid| !bid.is_pass)
}

/// Redouble is offered iff the last call was a double
pub fn can_redouble(history: &[Bid]) -> bool {
    history.last().is_some_and(|bid| bid.is_double)
}

/// State of the bidding panel for one snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiddingControls {
    /// Auction is over, no panel is shown
    Hidden,
    /// Someone else is on lead to bid
    Waiting,
    /// The user may bid; contract bids and pass are always offered
    Open { can_double: bool, can_redouble: bool },
}

impl BiddingControls {
    pub fn for_state(state: &GameState) -> Self {
        if state.bidding_finished {
            BiddingControls::Hidden
        } else if !state.is_user_turn() {
            BiddingControls::Waiting
        } else {
            BiddingControls::Open {
                can_double: can_double(&state.bidding_history),
                can_redouble: can_redouble(&state.bidding_history),
            }
        }
    }

    pub fn accepts_bids(&self) -> bool {
        matches!(self, BiddingControls::Open { .. })
    }

    pub fn double_enabled(&self) -> bool {
        matches!(self, BiddingControls::Open { can_double: true, .. })
    }

    pub fn redouble_enabled(&self) -> bool {
        matches!(
            self,
            BiddingControls::Open {
                can_redouble: true,
                ..
            }
        )
    }
}
