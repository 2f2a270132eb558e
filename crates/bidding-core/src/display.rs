//! Text rendering for hands, auctions and the deal history.
//!
//! Everything here is a pure function of its inputs and returns plain
//! lines joined with `\n`. Red suit symbols are optionally wrapped in ANSI
//! color codes by a [`Palette`].

use crate::bid::{Bid, MAX_LEVEL, MIN_LEVEL};
use crate::cards::{Strain, Suit};
use crate::controls::BiddingControls;
use crate::game::{Deal, GameState, TrainingMode, BIDDING_SYSTEMS};
use crate::hand::Hand;
use crate::seat::Seat;

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";
const CELL_WIDTH: usize = 10;

/// Whether suit symbols get terminal colors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Palette {
    pub color: bool,
}

impl Palette {
    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn ansi() -> Self {
        Self { color: true }
    }

    /// Color the red suit symbols (♥ ♦) inside a piece of text
    pub fn highlight_suits(&self, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            if ch == '♥' || ch == '♦' {
                out.push_str(RED);
                out.push(ch);
                out.push_str(RESET);
            } else {
                out.push(ch);
            }
        }
        out
    }

    fn suit(&self, suit: Suit) -> String {
        self.highlight_suits(suit.symbol())
    }
}

/// Space-joined ranks, or "-" for a void
pub fn format_cards(ranks: &[String]) -> String {
    if ranks.is_empty() {
        "-".to_string()
    } else {
        ranks.join(" ")
    }
}

/// A hand laid out one suit per line, spades first
pub fn render_hand(hand: &Hand, is_current_player: bool, palette: Palette) -> String {
    let mut lines = vec![format!(
        "{}'s Hand    HCP: {}",
        hand.player_name(),
        hand.high_card_points
    )];

    for suit in Suit::DISPLAY_ORDER {
        let ranks = hand.ranks_in(suit);
        lines.push(format!(
            "  {} {} ({})",
            palette.suit(suit),
            format_cards(ranks),
            ranks.len()
        ));
    }

    if is_current_player {
        lines.push("  >> Your Turn <<".to_string());
    }
    lines.join("\n")
}

/// Dealer line, status line, the four-column table and recent bids
pub fn render_bidding_table(state: &GameState, palette: Palette) -> String {
    let mut lines = vec![format!("Dealer: {}", state.dealer)];
    if state.bidding_finished {
        lines.push("Bidding Complete".to_string());
    } else {
        lines.push(format!("Current Bidder: {}", state.current_bidder()));
    }

    lines.push(String::new());
    lines.push("Bidding History".to_string());
    lines.push(
        Seat::ALL
            .iter()
            .map(|s| pad(s.name()))
            .collect::<String>()
            .trim_end()
            .to_string(),
    );
    for round in &state.bidding_table {
        let row: String = round
            .iter()
            .map(|cell| if cell.is_empty() { pad("-") } else { pad(cell) })
            .collect();
        lines.push(palette.highlight_suits(row.trim_end()));
    }

    let recent = state.recent_bids();
    if !recent.is_empty() {
        lines.push(String::new());
        lines.push("Recent Bids".to_string());
        for bid in recent {
            lines.push(format!(
                "  {}: {}",
                bid.player_name(),
                palette.highlight_suits(&bid.display_text)
            ));
        }
    }
    lines.join("\n")
}

/// The bidding panel for the user's seat
pub fn render_bidding_controls(
    controls: BiddingControls,
    bidding_system: &str,
    palette: Palette,
) -> String {
    match controls {
        BiddingControls::Hidden => String::new(),
        BiddingControls::Waiting => "Waiting for other players...".to_string(),
        BiddingControls::Open {
            can_double,
            can_redouble,
        } => {
            let strains = Strain::ALL
                .iter()
                .map(|s| palette.highlight_suits(s.symbol()))
                .collect::<Vec<_>>()
                .join(" ");
            let mut actions = vec!["bid <level> <strain>", "pass"];
            if can_double {
                actions.push("double");
            }
            if can_redouble {
                actions.push("redouble");
            }
            [
                "Make Your Bid".to_string(),
                format!("  Levels: {}-{}   Strains: {}", MIN_LEVEL, MAX_LEVEL, strains),
                format!("  Actions: {}", actions.join(" | ")),
                format!("  Current bidding system: {}", bidding_system),
            ]
            .join("\n")
        }
    }
}

/// Training mode and bidding system selection with the mode explanation
pub fn render_game_settings(mode: TrainingMode, bidding_system: &str) -> String {
    let mut lines = vec![
        "Game Settings".to_string(),
        format!("  Training Mode: {} ({})", mode.label(), mode),
        format!("  Bidding System: {}", bidding_system),
        "  Available modes:".to_string(),
    ];
    for option in TrainingMode::ALL {
        let marker = if option == mode { "*" } else { " " };
        lines.push(format!("   {} {} ({})", marker, option.label(), option));
    }
    lines.push("  Available systems:".to_string());
    for (i, system) in BIDDING_SYSTEMS.iter().enumerate() {
        let marker = if *system == bidding_system { "*" } else { " " };
        lines.push(format!("   {} {}. {}", marker, i + 1, system));
    }
    lines.push(String::new());
    lines.push("Training Mode Info".to_string());
    lines.push(format!("  {}", mode.description()));
    lines.join("\n")
}

/// A bid as it appears in a sequence: "North: 1♥"
pub fn render_bid(bid: &Bid, palette: Palette) -> String {
    format!(
        "{}: {}",
        bid.player_name(),
        palette.highlight_suits(&bid.display_text)
    )
}

/// The deal history table with its summary, or the empty state
pub fn render_past_deals(deals: &[Deal], palette: Palette) -> String {
    if deals.is_empty() {
        return [
            "No Past Deals",
            "Complete some bidding sessions to see your deal history here.",
        ]
        .join("\n");
    }

    let mut lines = vec![
        "Past Deals".to_string(),
        "Review your completed bidding sessions".to_string(),
        String::new(),
    ];
    for (i, deal) in deals.iter().enumerate() {
        lines.push(format!(
            "#{:<3} Dealer: {:<6} Contract: {:<8} System: {}",
            i + 1,
            deal.dealer.name(),
            deal.final_bid,
            deal.bidding_system_name()
        ));
        if !deal.bids.is_empty() {
            let sequence = deal
                .bids
                .iter()
                .map(|b| render_bid(b, Palette::plain()))
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("      {}", sequence));
        }
    }

    let most_recent = deals
        .last()
        .map(Deal::bidding_system_name)
        .unwrap_or("N/A");
    lines.push(String::new());
    lines.push(format!("Total Deals: {}", deals.len()));
    lines.push(format!("Most Recent System: {}", most_recent));

    palette.highlight_suits(&lines.join("\n"))
}

fn pad(text: &str) -> String {
    format!("{:<width$}", text, width = CELL_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_cards() {
        assert_eq!(format_cards(&[]), "-");
        let ranks = vec!["A".to_string(), "10".to_string(), "3".to_string()];
        assert_eq!(format_cards(&ranks), "A 10 3");
    }

    #[test]
    fn test_highlight_suits() {
        assert_eq!(Palette::plain().highlight_suits("1♥"), "1♥");
        assert_eq!(
            Palette::ansi().highlight_suits("1♥ 2♠"),
            format!("1{}♥{} 2♠", RED, RESET)
        );
    }

    #[test]
    fn test_render_hand_with_void() {
        let hand = Hand::from_cards(
            Seat::South,
            vec![
                Card::new(Suit::Spades, Rank::Ace),
                Card::new(Suit::Spades, Rank::Queen),
                Card::new(Suit::Hearts, Rank::Four),
            ],
        );
        let text = render_hand(&hand, true, Palette::plain());
        assert_eq!(
            text,
            [
                "South's Hand    HCP: 6",
                "  ♠ A Q (2)",
                "  ♥ 4 (1)",
                "  ♦ - (0)",
                "  ♣ - (0)",
                "  >> Your Turn <<",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_controls_list_only_enabled_actions() {
        let text = render_bidding_controls(
            BiddingControls::Open {
                can_double: true,
                can_redouble: false,
            },
            "Acol",
            Palette::plain(),
        );
        assert!(text.contains("pass | double"));
        assert!(!text.contains("redouble"));
        assert!(text.contains("Current bidding system: Acol"));

        let waiting = render_bidding_controls(BiddingControls::Waiting, "Acol", Palette::plain());
        assert_eq!(waiting, "Waiting for other players...");
    }

    #[test]
    fn test_settings_marks_selected_system() {
        let text = render_game_settings(TrainingMode::Multi, "Precision");
        assert!(text.contains("* 3. Precision"));
        assert!(text.contains("    Single Hand (single)"));
        assert!(text.contains("* Multi Hand (multi)"));
        assert!(text.contains("Multi Hand"));
        assert!(text.contains(TrainingMode::Multi.description()));
    }

    #[test]
    fn test_empty_past_deals() {
        let text = render_past_deals(&[], Palette::plain());
        assert!(text.starts_with("No Past Deals"));
    }

    #[test]
    fn test_past_deals_summary() {
        let deals = vec![
            Deal {
                dealer: Seat::North,
                bidding_system: Some("Acol".to_string()),
                bids: vec![Bid::contract(Seat::North, 1, Strain::Notrump)],
                final_bid: "1NT".to_string(),
            },
            Deal {
                dealer: Seat::East,
                bidding_system: Some("Precision".to_string()),
                bids: vec![],
                final_bid: "All Pass".to_string(),
            },
        ];
        let text = render_past_deals(&deals, Palette::plain());
        assert!(text.contains("North: 1NT"));
        assert!(text.contains("Total Deals: 2"));
        assert!(text.ends_with("Most Recent System: Precision"));
    }
}
