//! HTTP façade over the tutor server's `/api` endpoints.

use crate::error::{ApiError, Operation};
use async_trait::async_trait;
use bidding_core::{
    ActionResponse, Advice, BidRequest, BidResponse, GameState, PastDeals, TrainingMode,
};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// The calls the client can make. Implementations hold no game state.
#[async_trait]
pub trait BridgeApi: Send + Sync {
    /// `GET /game-state?biddingSystem&trainingMode`
    async fn game_state(
        &self,
        bidding_system: Option<&str>,
        training_mode: Option<TrainingMode>,
    ) -> Result<GameState, ApiError>;

    /// `POST /new-deal?trainingMode`
    async fn new_deal(
        &self,
        training_mode: Option<TrainingMode>,
    ) -> Result<ActionResponse, ApiError>;

    /// `POST /make-bid` with the request as JSON body
    async fn make_bid(&self, request: &BidRequest) -> Result<BidResponse, ApiError>;

    /// `GET /past-deals`
    async fn past_deals(&self) -> Result<PastDeals, ApiError>;

    /// `GET /advice/:handIndex`
    async fn advice(&self, hand_index: usize) -> Result<Advice, ApiError>;
}

/// Query pairs for a game-state fetch; unset values are left out
pub fn game_state_query(
    bidding_system: Option<&str>,
    training_mode: Option<TrainingMode>,
) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(system) = bidding_system.filter(|s| !s.is_empty()) {
        params.push(("biddingSystem", system.to_string()));
    }
    if let Some(mode) = training_mode {
        params.push(("trainingMode", mode.as_str().to_string()));
    }
    params
}

/// [`BridgeApi`] backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// `base_url` points at the `/api` root, e.g. `http://localhost:8080/api`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path below the API root
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Send a request and decode a 2xx JSON body; anything else is an error
    async fn send<T: DeserializeOwned>(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|source| ApiError::Request { operation, source })?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} returned HTTP {}", operation, status);
            return Err(ApiError::Status {
                operation,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| ApiError::Request { operation, source })?;
        debug!("{} response: {}", operation, body);

        serde_json::from_str(&body).map_err(|source| ApiError::Decode { operation, source })
    }
}

#[async_trait]
impl BridgeApi for HttpApi {
    async fn game_state(
        &self,
        bidding_system: Option<&str>,
        training_mode: Option<TrainingMode>,
    ) -> Result<GameState, ApiError> {
        let query = game_state_query(bidding_system, training_mode);
        let request = self.client.get(self.endpoint("game-state")).query(&query);
        self.send(Operation::FetchGameState, request).await
    }

    async fn new_deal(
        &self,
        training_mode: Option<TrainingMode>,
    ) -> Result<ActionResponse, ApiError> {
        let query = game_state_query(None, training_mode);
        let request = self.client.post(self.endpoint("new-deal")).query(&query);
        self.send(Operation::StartNewDeal, request).await
    }

    async fn make_bid(&self, bid: &BidRequest) -> Result<BidResponse, ApiError> {
        let request = self.client.post(self.endpoint("make-bid")).json(bid);
        self.send(Operation::MakeBid, request).await
    }

    async fn past_deals(&self) -> Result<PastDeals, ApiError> {
        let request = self.client.get(self.endpoint("past-deals"));
        self.send(Operation::FetchPastDeals, request).await
    }

    async fn advice(&self, hand_index: usize) -> Result<Advice, ApiError> {
        let request = self
            .client
            .get(self.endpoint(&format!("advice/{}", hand_index)));
        self.send(Operation::FetchAdvice, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_endpoint_joins_paths() {
        let api = HttpApi::new("http://localhost:8080/api/");
        assert_eq!(api.base_url(), "http://localhost:8080/api");
        assert_eq!(
            api.endpoint("game-state"),
            "http://localhost:8080/api/game-state"
        );
        assert_eq!(
            api.endpoint("/advice/2"),
            "http://localhost:8080/api/advice/2"
        );
    }

    #[test]
    fn test_query_skips_unset_values() {
        assert!(game_state_query(None, None).is_empty());
        assert!(game_state_query(Some(""), None).is_empty());
        assert_eq!(
            game_state_query(Some("Acol"), Some(TrainingMode::Multi)),
            vec![
                ("biddingSystem", "Acol".to_string()),
                ("trainingMode", "multi".to_string()),
            ]
        );
    }
}
