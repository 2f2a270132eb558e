//! Applying commands to the store.
//!
//! This is where the terminal client mirrors the button states of the
//! bidding panel: calls that would be disabled are refused locally and never
//! reach the server.

use crate::api::BridgeApi;
use crate::command::{Command, HELP};
use crate::store::{GameStore, View};
use crate::view::render_all_hands;
use bidding_core::{BidRequest, BiddingControls, Palette};

/// What the caller should show after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State may have changed; redraw the screen
    Render,
    /// Print a message and leave the screen as it is
    Message(String),
    Quit,
}

pub async fn execute<A: BridgeApi>(
    store: &mut GameStore<A>,
    command: Command,
    palette: Palette,
) -> Outcome {
    match command {
        Command::Help => return Outcome::Message(HELP.to_string()),
        Command::Quit => return Outcome::Quit,
        Command::Retry => {
            store.retry().await;
            return Outcome::Render;
        }
        _ => {}
    }

    // The error panel only offers retry
    if store.error().is_some() {
        return Outcome::Message("Type 'retry' to reload before continuing.".to_string());
    }

    match command {
        Command::ShowGame => {
            store.show_view(View::Game).await;
            Outcome::Render
        }
        Command::ShowPastDeals => {
            store.show_view(View::PastDeals).await;
            Outcome::Render
        }
        _ if store.view() != View::Game => {
            Outcome::Message("Switch to the current game first ('game').".to_string())
        }
        Command::Bid(request) => match refusal(store.controls(), &request) {
            Some(reason) => Outcome::Message(reason.to_string()),
            None => {
                store.make_bid(request).await;
                Outcome::Render
            }
        },
        Command::NewDeal => {
            store.new_deal().await;
            Outcome::Render
        }
        Command::SetSystem(system) => {
            store.change_bidding_system(system).await;
            Outcome::Render
        }
        Command::SetMode(mode) => {
            store.change_training_mode(mode).await;
            Outcome::Render
        }
        Command::Advice(hand_index) => {
            store.fetch_advice(hand_index).await;
            Outcome::Render
        }
        Command::ShowHands => match store.state() {
            Some(state) => Outcome::Message(render_all_hands(state, palette)),
            None => Outcome::Message("No game loaded.".to_string()),
        },
        Command::Help | Command::Quit | Command::Retry => Outcome::Render,
    }
}

/// Why the bidding panel would not offer this call, if it would not
fn refusal(controls: Option<BiddingControls>, request: &BidRequest) -> Option<&'static str> {
    match controls {
        None => Some("No game loaded."),
        Some(BiddingControls::Hidden) => {
            Some("Bidding is complete. Start a new deal with 'new'.")
        }
        Some(controls) if !controls.accepts_bids() => Some("Waiting for other players..."),
        Some(controls) => {
            if request.double == Some(true) && !controls.double_enabled() {
                Some("Double is not available: the last call was a pass.")
            } else if request.redouble == Some(true) && !controls.redouble_enabled() {
                Some("Redouble is only available after a double.")
            } else {
                None
            }
        }
    }
}
