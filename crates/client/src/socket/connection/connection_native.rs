//! Desktop WebSocket implementation using tokio-tungstenite.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures_util::StreamExt;
use mandazap_shared::ServerEvent;
use tokio::sync::Notify;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use super::{ConnectionState, ReconnectConfig};

/// A managed, receive-only WebSocket connection to the backend event stream.
///
/// State changes and parsed events are reported through callbacks; the
/// connection itself holds no UI state.
pub struct SocketConnection {
    /// Set once `shutdown` is called
    closed: Arc<AtomicBool>,
    /// Wakes the read loop so it can observe `closed`
    notify: Arc<Notify>,
    on_state: Arc<dyn Fn(ConnectionState) + Send + Sync>,
}

impl SocketConnection {
    /// Open a connection and keep it alive until `shutdown`
    pub fn new(
        url: impl Into<String>,
        on_event: impl Fn(ServerEvent) + Send + Sync + 'static,
        on_state: impl Fn(ConnectionState) + Send + Sync + 'static,
    ) -> Self {
        let closed = Arc::new(AtomicBool::new(false));
        let notify = Arc::new(Notify::new());
        let on_state: Arc<dyn Fn(ConnectionState) + Send + Sync> = Arc::new(on_state);

        let connection = Self {
            closed: closed.clone(),
            notify: notify.clone(),
            on_state: on_state.clone(),
        };

        start_connection_loop(
            url.into(),
            Arc::new(on_event),
            on_state,
            ReconnectConfig::default(),
            closed,
            notify,
        );

        connection
    }

    /// Close the socket and stop the reconnect loop (logout)
    pub fn shutdown(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.notify.notify_waiters();
        (self.on_state)(ConnectionState::Disconnected);
    }
}

/// Run the connection loop in a background tokio task
fn start_connection_loop(
    url: String,
    on_event: Arc<dyn Fn(ServerEvent) + Send + Sync>,
    on_state: Arc<dyn Fn(ConnectionState) + Send + Sync>,
    reconnect_config: ReconnectConfig,
    closed: Arc<AtomicBool>,
    notify: Arc<Notify>,
) {
    tokio::spawn(async move {
        let mut attempt = 0u32;

        loop {
            if closed.load(Ordering::SeqCst) {
                break;
            }

            if attempt == 0 {
                on_state(ConnectionState::Connecting);
            } else {
                on_state(ConnectionState::Reconnecting { attempt });
            }

            match connect_async(&url).await {
                Ok((ws_stream, _response)) => {
                    on_state(ConnectionState::Connected);
                    attempt = 0;
                    crate::log_info!("Socket connected");

                    let (_write, mut read) = ws_stream.split();

                    loop {
                        tokio::select! {
                            _ = notify.notified() => break,
                            frame = read.next() => match frame {
                                Some(Ok(Message::Text(text))) => {
                                    match serde_json::from_str::<ServerEvent>(&text) {
                                        Ok(event) => on_event(event),
                                        // Unknown events are dropped, never fatal.
                                        Err(e) => crate::log_debug!("Dropping unparseable frame: {e}"),
                                    }
                                }
                                Some(Ok(Message::Close(_))) | None => break,
                                Some(Ok(_)) => {
                                    // Ignore binary, ping, pong.
                                }
                                Some(Err(e)) => {
                                    crate::log_error!("Socket read error: {e}");
                                    break;
                                }
                            },
                        }
                    }

                    crate::log_info!("Socket closed");
                    on_state(ConnectionState::Disconnected);
                }
                Err(e) => {
                    crate::log_error!("Socket error: {e}");

                    if reconnect_config.max_attempts > 0 && attempt >= reconnect_config.max_attempts
                    {
                        on_state(ConnectionState::Failed {
                            reason: format!(
                                "Max reconnect attempts ({}) exceeded",
                                reconnect_config.max_attempts
                            ),
                        });
                        break;
                    }

                    let delay = reconnect_config.delay_for_attempt(attempt);
                    crate::log_info!("Reconnecting in {delay}ms (attempt {})", attempt + 1);
                    tokio::time::sleep(std::time::Duration::from_millis(delay as u64)).await;
                    attempt += 1;
                }
            }
        }
    });
}
