//! Bridge Bidding Tutor terminal client.
//!
//! The server owns the auction; this crate only mirrors it:
//! - [`api`]: HTTP calls to the tutor's `/api` endpoints
//! - [`store`]: the single current snapshot plus loading/error/view flags
//! - [`command`]: typed commands turned into user intents
//! - [`session`]: applying a command to the store
//! - [`view`]: text screens rendered from the store
//! - [`config`]: command-line and environment settings

pub mod api;
pub mod command;
pub mod config;
pub mod error;
pub mod session;
pub mod store;
pub mod view;

pub use api::{BridgeApi, HttpApi};
pub use command::{Command, CommandError};
pub use config::{Args, ClientConfig};
pub use error::{ApiError, Operation};
pub use session::{execute, Outcome};
pub use store::{GameStore, PastDealsPanel, View};
