//! MandaZap client - Dioxus application
//!
//! Dashboard for managing WhatsApp messaging instances: authenticate, create
//! and pair instances, browse contacts and message history, send messages.
//! All protocol work happens in the remote backend; this crate is the
//! presentation and state-synchronization layer on top of its REST API and
//! WebSocket event stream. Builds for web (WASM) and desktop.

pub mod api_client;
pub mod auth_session;
pub mod logging;
pub mod storage;

pub mod components;
pub mod hooks;
pub mod routes;
pub mod socket;
pub mod stores;
pub mod utils;
pub mod views;

pub use api_client::ApiClient;
pub use auth_session::{AuthContext, AuthProvider};
pub use routes::Route;
pub use socket::SocketManager;
