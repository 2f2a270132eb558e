//! Tests for the HTTP client against a throwaway TCP stub.
//!
//! Each stub accepts one connection, records the request line and body, and
//! answers with a canned status and JSON body.

use bidding_client::{ApiError, BridgeApi, HttpApi, Operation};
use bidding_core::{BidRequest, Seat, Strain, TrainingMode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

struct Captured {
    request_line: String,
    body: String,
}

/// Start a stub that serves a single response; returns the API base URL
async fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let captured = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        captured
    });

    (format!("http://{}/api", addr), handle)
}

async fn read_request(socket: &mut TcpStream) -> Captured {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before headers were read");
        buf.extend_from_slice(&chunk[..n]);

        let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let content_length = head
            .lines()
            .find_map(|line| {
                let lower = line.to_ascii_lowercase();
                lower
                    .strip_prefix("content-length:")
                    .and_then(|v| v.trim().parse::<usize>().ok())
            })
            .unwrap_or(0);

        let body_start = header_end + 4;
        while buf.len() < body_start + content_length {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        return Captured {
            request_line: head.lines().next().unwrap_or_default().to_string(),
            body: String::from_utf8_lossy(&buf[body_start..]).to_string(),
        };
    }
}

const GAME_STATE: &str = r#"{
    "trainingMode": "multi",
    "dealer": "WEST",
    "dealerIndex": 3,
    "userSeat": "SOUTH",
    "userSeatIndex": 2,
    "currentBidderIndex": 3,
    "biddingFinished": false,
    "biddingSystem": "Acol",
    "currentHand": {"player": "WEST", "cards": {}, "ranks": {}, "highCardPoints": 0},
    "allHands": [],
    "biddingHistory": [],
    "biddingTable": []
}"#;

#[tokio::test]
async fn test_game_state_sends_query_and_decodes() {
    let (base, server) = serve_once(200, GAME_STATE).await;
    let api = HttpApi::new(base);

    let state = api
        .game_state(Some("Acol"), Some(TrainingMode::Multi))
        .await
        .unwrap();
    let captured = server.await.unwrap();

    assert_eq!(
        captured.request_line,
        "GET /api/game-state?biddingSystem=Acol&trainingMode=multi HTTP/1.1"
    );
    assert_eq!(state.dealer, Seat::West);
    assert_eq!(state.bidding_system, "Acol");
    assert!(!state.is_user_turn());
}

#[tokio::test]
async fn test_game_state_without_parameters() {
    let (base, server) = serve_once(200, GAME_STATE).await;
    let api = HttpApi::new(base);

    api.game_state(None, None).await.unwrap();
    let captured = server.await.unwrap();

    assert_eq!(captured.request_line, "GET /api/game-state HTTP/1.1");
}

#[tokio::test]
async fn test_new_deal_posts_training_mode() {
    let (base, server) = serve_once(200, r#"{"success": true, "message": "New deal started"}"#).await;
    let api = HttpApi::new(base);

    let resp = api.new_deal(Some(TrainingMode::Single)).await.unwrap();
    let captured = server.await.unwrap();

    assert_eq!(
        captured.request_line,
        "POST /api/new-deal?trainingMode=single HTTP/1.1"
    );
    assert!(resp.success);
    assert_eq!(resp.message, "New deal started");
}

#[tokio::test]
async fn test_make_bid_posts_json_body() {
    let (base, server) = serve_once(
        200,
        r#"{"success": true, "message": "Bid made successfully", "biddingFinished": true}"#,
    )
    .await;
    let api = HttpApi::new(base);

    let request = BidRequest::contract(2, Strain::Spades)
        .unwrap()
        .with_training_mode(TrainingMode::Multi);
    let resp = api.make_bid(&request).await.unwrap();
    let captured = server.await.unwrap();

    assert_eq!(captured.request_line, "POST /api/make-bid HTTP/1.1");
    let body: Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(
        body,
        json!({"level": 2, "suit": "SPADES", "trainingMode": "multi"})
    );
    assert_eq!(resp.bidding_finished, Some(true));
}

#[tokio::test]
async fn test_advice_path() {
    let (base, server) = serve_once(200, r#"{"advice": "Open 1NT"}"#).await;
    let api = HttpApi::new(base);

    let advice = api.advice(2).await.unwrap();
    let captured = server.await.unwrap();

    assert_eq!(captured.request_line, "GET /api/advice/2 HTTP/1.1");
    assert_eq!(advice.advice, "Open 1NT");
}

#[tokio::test]
async fn test_non_success_status_is_failure() {
    let (base, server) = serve_once(500, r#"{"error": "boom"}"#).await;
    let api = HttpApi::new(base);

    let err = api.past_deals().await.unwrap_err();
    server.await.unwrap();

    assert!(matches!(
        err,
        ApiError::Status {
            operation: Operation::FetchPastDeals,
            status: 500
        }
    ));
    assert_eq!(
        err.to_string(),
        "Failed to fetch past deals: server returned 500"
    );
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let (base, server) = serve_once(200, r#"{"deals": "not a list"}"#).await;
    let api = HttpApi::new(base);

    let err = api.past_deals().await.unwrap_err();
    server.await.unwrap();

    assert!(matches!(err, ApiError::Decode { .. }));
}

#[tokio::test]
async fn test_unreachable_server_is_request_error() {
    // Grab a free port and close it again
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpApi::new(format!("http://{}/api", addr));
    let err = api.game_state(None, None).await.unwrap_err();

    assert!(matches!(
        err,
        ApiError::Request {
            operation: Operation::FetchGameState,
            ..
        }
    ));
}
