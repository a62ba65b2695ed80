//! Shared data models for the MandaZap dashboard client.
//!
//! Everything in here mirrors the wire format of the MandaZap backend: the
//! REST resource records, the request/response bodies, and the real-time
//! events pushed over the WebSocket.

pub mod error;
pub mod events;
pub mod models;

pub use error::{try_error_message, ApiError};
pub use events::ServerEvent;
pub use models::{
    ActionResponse, AuthResponse, Contact, CreateInstanceRequest, InstanceStatus, LoginRequest,
    Media, Message, RegisterRequest, SendMessageRequest, User, WhatsAppInstance,
};
