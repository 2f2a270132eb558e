//! The client's single source of view state.
//!
//! [`GameStore`] keeps the last `GameState` snapshot from the server along
//! with the loading, error and view flags. Every user action goes through
//! one API call and, when it succeeds, a full re-fetch; the snapshot is only
//! ever replaced, never patched. Operations take `&mut self`, so a second
//! action cannot start while one is in flight.

use crate::api::BridgeApi;
use bidding_core::{BidRequest, BiddingControls, Deal, GameState, TrainingMode};
use tracing::{debug, info, warn};

/// Which screen is shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Game,
    PastDeals,
}

/// State of the past-deals screen, which loads independently of the game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PastDealsPanel {
    pub loading: bool,
    pub error: Option<String>,
    pub deals: Vec<Deal>,
}

pub struct GameStore<A> {
    api: A,
    state: Option<GameState>,
    loading: bool,
    error: Option<String>,
    view: View,
    training_mode: TrainingMode,
    bidding_system: String,
    past_deals: PastDealsPanel,
    advice: Option<String>,
}

impl<A: BridgeApi> GameStore<A> {
    /// A store that has not fetched anything yet; it starts out loading
    pub fn new(api: A, training_mode: TrainingMode, bidding_system: impl Into<String>) -> Self {
        Self {
            api,
            state: None,
            loading: true,
            error: None,
            view: View::Game,
            training_mode,
            bidding_system: bidding_system.into(),
            past_deals: PastDealsPanel::default(),
            advice: None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn training_mode(&self) -> TrainingMode {
        self.training_mode
    }

    pub fn bidding_system(&self) -> &str {
        &self.bidding_system
    }

    pub fn past_deals(&self) -> &PastDealsPanel {
        &self.past_deals
    }

    pub fn advice(&self) -> Option<&str> {
        self.advice.as_deref()
    }

    /// Bidding panel for the current snapshot, `None` before the first load
    pub fn controls(&self) -> Option<BiddingControls> {
        self.state.as_ref().map(BiddingControls::for_state)
    }

    /// Fetch a fresh snapshot with the selected system and mode
    pub async fn load_game_state(&mut self) {
        self.loading = true;
        debug!(
            "Loading game state (system: {}, mode: {})",
            self.bidding_system, self.training_mode
        );

        let result = self
            .api
            .game_state(Some(&self.bidding_system), Some(self.training_mode))
            .await;
        match result {
            Ok(state) => {
                self.replace_state(state);
                self.error = None;
            }
            Err(e) => {
                warn!("Loading game state failed: {}", e);
                self.error = Some(e.to_string());
            }
        }

        self.loading = false;
    }

    /// Ask the server for a new deal, then reload
    pub async fn new_deal(&mut self) {
        info!("Starting new deal ({})", self.training_mode);
        let result = self.api.new_deal(Some(self.training_mode)).await;
        match result {
            Ok(resp) if resp.success => self.load_game_state().await,
            Ok(resp) => {
                warn!("New deal rejected: {}", resp.message);
                self.error = Some(resp.message);
            }
            Err(e) => {
                warn!("New deal failed: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }

    /// Submit a bid with the selected training mode; reload if it was accepted
    pub async fn make_bid(&mut self, request: BidRequest) {
        let request = request.with_training_mode(self.training_mode);
        info!("Making bid {}", request.describe());

        let result = self.api.make_bid(&request).await;
        match result {
            Ok(resp) if resp.success => {
                if resp.bidding_finished == Some(true) {
                    info!("Bidding finished");
                }
                self.load_game_state().await;
            }
            Ok(resp) => {
                warn!("Bid {} rejected: {}", request.describe(), resp.message);
                self.error = Some(resp.message);
            }
            Err(e) => {
                warn!("Making bid failed: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }

    /// Switch bidding system and fetch once with it
    pub async fn change_bidding_system(&mut self, system: impl Into<String>) {
        self.bidding_system = system.into();
        info!("Bidding system changed to {}", self.bidding_system);

        let result = self
            .api
            .game_state(Some(&self.bidding_system), Some(self.training_mode))
            .await;
        match result {
            Ok(state) => self.replace_state(state),
            Err(e) => {
                warn!("Updating bidding system failed: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }

    /// Switch training mode and fetch once with it
    pub async fn change_training_mode(&mut self, mode: TrainingMode) {
        self.training_mode = mode;
        info!("Training mode changed to {}", mode);

        let result = self
            .api
            .game_state(Some(&self.bidding_system), Some(self.training_mode))
            .await;
        match result {
            Ok(state) => self.replace_state(state),
            Err(e) => {
                warn!("Updating training mode failed: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }

    /// Change screens; the past-deals screen fetches its list on entry
    pub async fn show_view(&mut self, view: View) {
        self.view = view;
        if view == View::PastDeals {
            self.load_past_deals().await;
        }
    }

    pub async fn load_past_deals(&mut self) {
        self.past_deals.loading = true;

        let result = self.api.past_deals().await;
        match result {
            Ok(resp) => {
                debug!("Loaded {} past deals", resp.deals.len());
                self.past_deals.deals = resp.deals;
                self.past_deals.error = None;
            }
            Err(e) => {
                warn!("Loading past deals failed: {}", e);
                self.past_deals.error = Some(e.to_string());
            }
        }

        self.past_deals.loading = false;
    }

    /// Throw away whatever the active screen shows and fetch it again
    pub async fn retry(&mut self) {
        if self.view == View::PastDeals && self.error.is_none() {
            self.load_past_deals().await;
        } else {
            self.load_game_state().await;
        }
    }

    /// Ask for advice on one of the four hands
    pub async fn fetch_advice(&mut self, hand_index: usize) {
        let result = self.api.advice(hand_index).await;
        match result {
            Ok(resp) => self.advice = Some(resp.advice),
            Err(e) => {
                warn!("Fetching advice failed: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }

    fn replace_state(&mut self, state: GameState) {
        self.state = Some(state);
        self.advice = None;
    }
}
