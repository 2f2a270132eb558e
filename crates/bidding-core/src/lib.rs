//! Bridge Bidding Tutor - client-side model
//!
//! This crate holds everything the tutor client knows about the game
//! without talking to the server:
//! - Wire types mirroring the server's JSON snapshots
//! - The bidding-controls predicates (when double/redouble are offered)
//! - Text formatting of hands, auctions and the deal history
//!
//! # Modules
//!
//! - [`seat`]: Table positions
//! - [`cards`]: Suits, strains, ranks and cards
//! - [`bid`]: Auction entries and outbound bid requests
//! - [`hand`]: A dealt hand with HCP and distribution
//! - [`game`]: Game snapshots, past deals and API response envelopes
//! - [`controls`]: Which calls the bidding panel offers
//! - [`display`]: Plain-text renderers

pub mod bid;
pub mod cards;
pub mod controls;
pub mod display;
pub mod game;
pub mod hand;
pub mod seat;

// Re-export commonly used types
pub use bid::{Bid, BidRequest, BidRequestError, BidType};
pub use cards::{Card, Rank, Strain, Suit};
pub use controls::{can_double, can_redouble, BiddingControls};
pub use display::{format_cards, Palette};
pub use game::{
    ActionResponse, Advice, BidResponse, Deal, GameState, PastDeals, TrainingMode,
    BIDDING_SYSTEMS, DEFAULT_BIDDING_SYSTEM,
};
pub use hand::Hand;
pub use seat::Seat;
