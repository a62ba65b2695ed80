//! Global stores for application state.

pub mod realtime;

pub use realtime::{
    clear_all, clear_recent_messages, live_status, merge_with_history, push_recent_message,
    recent_messages, remove_qr_code, set_connection_status, set_qr_code, total_unread,
    unread_count, CONNECTION_STATUS, QR_CODES, RECENT_MESSAGES,
};
