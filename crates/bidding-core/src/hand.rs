//! A player's hand as delivered by the server.

use crate::cards::{Card, Suit};
use crate::seat::Seat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Thirteen cards grouped by suit, with the server's HCP count.
///
/// `cards` and `ranks` carry the same holding; `ranks` is the pre-sorted
/// list of rank short names the server renders for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hand {
    pub player: Option<Seat>,
    pub cards: BTreeMap<Suit, Vec<Card>>,
    pub ranks: BTreeMap<Suit, Vec<String>>,
    pub high_card_points: u32,
}

impl Hand {
    /// Build a hand from loose cards, filling every derived field the way
    /// the server does (ranks sorted high to low, HCP counted)
    pub fn from_cards(player: Seat, cards: impl IntoIterator<Item = Card>) -> Self {
        let mut by_suit: BTreeMap<Suit, Vec<Card>> = BTreeMap::new();
        for card in cards {
            by_suit.entry(card.suit).or_default().push(card);
        }
        for holding in by_suit.values_mut() {
            holding.sort_by(|a, b| b.rank.cmp(&a.rank));
        }

        let ranks: BTreeMap<Suit, Vec<String>> = by_suit
            .iter()
            .map(|(suit, holding)| {
                let names: Vec<String> = holding
                    .iter()
                    .map(|c| c.rank.short_name().to_string())
                    .collect();
                (*suit, names)
            })
            .collect();

        let mut hand = Self {
            player: Some(player),
            cards: by_suit,
            ranks,
            high_card_points: 0,
        };
        hand.high_card_points = hand.computed_high_card_points();
        hand
    }

    /// Rank names held in a suit, empty when void
    pub fn ranks_in(&self, suit: Suit) -> &[String] {
        self.ranks.get(&suit).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of cards held in a suit
    pub fn length(&self, suit: Suit) -> usize {
        match self.ranks.get(&suit) {
            Some(ranks) => ranks.len(),
            None => self.cards.get(&suit).map(Vec::len).unwrap_or(0),
        }
    }

    /// HCP recomputed from the cards
    pub fn computed_high_card_points(&self) -> u32 {
        self.cards
            .values()
            .flatten()
            .map(|c| c.rank.high_card_points())
            .sum()
    }

    /// Suit lengths in spade-heart-diamond-club order, e.g. "5-3-3-2"
    pub fn distribution(&self) -> String {
        Suit::DISPLAY_ORDER
            .iter()
            .map(|s| self.length(*s).to_string())
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Name of the seat holding these cards
    pub fn player_name(&self) -> &'static str {
        self.player.map(|p| p.name()).unwrap_or("Unknown")
    }
}
