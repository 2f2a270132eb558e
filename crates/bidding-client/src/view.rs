//! Screens rendered from the store.

use crate::api::BridgeApi;
use crate::store::{GameStore, View};
use bidding_core::display::{
    render_bidding_controls, render_bidding_table, render_game_settings, render_hand,
    render_past_deals,
};
use bidding_core::{BiddingControls, GameState, Palette, Seat};

pub const TITLE: &str = "Bridge Bidding Tutor";

const RULE: &str = "------------------------------------------------------------";

/// The whole screen for the store's current flags
pub fn render<A: BridgeApi>(store: &GameStore<A>, palette: Palette) -> String {
    if store.is_loading() {
        return format!("Loading {}...", TITLE);
    }
    if let Some(error) = store.error() {
        return render_error(error);
    }

    let mut sections = vec![render_header(store.view())];
    match store.view() {
        View::Game => {
            if let Some(state) = store.state() {
                sections.push(render_game(store, state, palette));
            }
        }
        View::PastDeals => sections.push(render_past_deals_screen(store, palette)),
    }
    let separator = format!("\n{}\n", RULE);
    sections.join(separator.as_str())
}

/// Generic error panel with the retry hint
pub fn render_error(message: &str) -> String {
    format!("Error\n{}\n\nType 'retry' to try again.", message)
}

fn render_header(view: View) -> String {
    let (game, deals) = match view {
        View::Game => ("[Current Game]", "Past Deals"),
        View::PastDeals => ("Current Game", "[Past Deals]"),
    };
    format!("{}    {}  {}", TITLE, game, deals)
}

fn render_game<A: BridgeApi>(store: &GameStore<A>, state: &GameState, palette: Palette) -> String {
    let mut sections = vec![
        render_game_settings(store.training_mode(), store.bidding_system()),
        render_hand(&state.current_hand, state.is_user_turn(), palette),
    ];

    let controls = BiddingControls::for_state(state);
    if controls != BiddingControls::Hidden {
        sections.push(render_bidding_controls(
            controls,
            &state.bidding_system,
            palette,
        ));
    }

    sections.push(render_bidding_table(state, palette));

    if let Some(advice) = store.advice() {
        sections.push(format!("Advice\n  {}", advice));
    }
    sections.join("\n\n")
}

fn render_past_deals_screen<A: BridgeApi>(store: &GameStore<A>, palette: Palette) -> String {
    let panel = store.past_deals();
    if panel.loading {
        "Loading past deals...".to_string()
    } else if let Some(error) = &panel.error {
        render_error(error)
    } else {
        render_past_deals(&panel.deals, palette)
    }
}

/// All four hands in seat order, for reviewing a finished auction
pub fn render_all_hands(state: &GameState, palette: Palette) -> String {
    let hands: Vec<String> = Seat::ALL
        .iter()
        .filter_map(|seat| state.hand_for(*seat))
        .map(|hand| {
            let hand_text = render_hand(hand, false, palette);
            format!("{}\n  Distribution: {}", hand_text, hand.distribution())
        })
        .collect();
    if hands.is_empty() {
        return "No hands available".to_string();
    }
    hands.join("\n\n")
}
