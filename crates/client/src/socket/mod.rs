//! Real-time event stream from the backend.
//!
//! One WebSocket per authenticated session, receive-only. Incoming frames
//! are parsed as [`mandazap_shared::ServerEvent`] and folded straight into
//! the global stores; components read the stores, never the socket.
//!
//! ```text
//!   SocketManager ── owns ──> SocketConnection (wasm / native impl)
//!        │                           │ on_event
//!        │                           ▼
//!        │                   stores::{QR_CODES, CONNECTION_STATUS,
//!        │                            RECENT_MESSAGES}
//!        ▼                           ▲
//!   SOCKET_STATE              components read
//! ```

mod connection;
mod manager;

pub use connection::{ConnectionState, ReconnectConfig, SocketConnection};
pub use manager::{SocketManager, SOCKET_STATE};
