//! Browser WebSocket implementation using `web_sys`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures_util::StreamExt;
use mandazap_shared::ServerEvent;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys;

use super::{ConnectionState, ReconnectConfig};

/// A managed, receive-only WebSocket connection to the backend event stream.
///
/// State changes and parsed events are reported through callbacks; the
/// connection itself holds no UI state.
pub struct SocketConnection {
    /// Set once `shutdown` is called; the loop exits on its next wakeup
    closed: Rc<Cell<bool>>,
    /// The live socket, if any, so `shutdown` can close it
    active: Rc<RefCell<Option<web_sys::WebSocket>>>,
    on_state: Rc<dyn Fn(ConnectionState)>,
}

impl SocketConnection {
    /// Open a connection and keep it alive until `shutdown`
    pub fn new(
        url: impl Into<String>,
        on_event: impl Fn(ServerEvent) + 'static,
        on_state: impl Fn(ConnectionState) + 'static,
    ) -> Self {
        let closed = Rc::new(Cell::new(false));
        let active = Rc::new(RefCell::new(None));
        let on_state: Rc<dyn Fn(ConnectionState)> = Rc::new(on_state);

        let connection = Self {
            closed: closed.clone(),
            active: active.clone(),
            on_state: on_state.clone(),
        };

        start_connection_loop(
            url.into(),
            Rc::new(on_event),
            on_state,
            ReconnectConfig::default(),
            closed,
            active,
        );

        connection
    }

    /// Close the socket and stop the reconnect loop (logout)
    pub fn shutdown(&self) {
        self.closed.set(true);
        if let Some(ws) = self.active.borrow_mut().take() {
            let _ = ws.close();
        }
        (self.on_state)(ConnectionState::Disconnected);
    }
}

fn start_connection_loop(
    url: String,
    on_event: Rc<dyn Fn(ServerEvent)>,
    on_state: Rc<dyn Fn(ConnectionState)>,
    reconnect_config: ReconnectConfig,
    closed: Rc<Cell<bool>>,
    active: Rc<RefCell<Option<web_sys::WebSocket>>>,
) {
    spawn_local(async move {
        let mut attempt = 0u32;

        loop {
            if closed.get() {
                break;
            }

            if attempt == 0 {
                on_state(ConnectionState::Connecting);
            } else {
                on_state(ConnectionState::Reconnecting { attempt });
            }

            match connect_websocket(&url, on_event.clone()).await {
                Ok(ws) => {
                    on_state(ConnectionState::Connected);
                    attempt = 0;
                    crate::log_info!("Socket connected");

                    // Channel to signal when the connection closes
                    let (close_tx, mut close_rx) = futures_channel::mpsc::unbounded::<()>();
                    let onclose_callback = Closure::wrap(Box::new(move |_: web_sys::CloseEvent| {
                        let _ = close_tx.unbounded_send(());
                    })
                        as Box<dyn FnMut(web_sys::CloseEvent)>);
                    ws.set_onclose(Some(onclose_callback.as_ref().unchecked_ref()));
                    onclose_callback.forget();

                    *active.borrow_mut() = Some(ws);

                    // Wait for the connection to close
                    close_rx.next().await;
                    active.borrow_mut().take();
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
                    gloo_timers::future::TimeoutFuture::new(delay).await;
                    attempt += 1;
                }
            }
        }
    });
}

/// Establish a WebSocket and wire the message handler; the caller owns the
/// close lifecycle.
async fn connect_websocket(
    url: &str,
    on_event: Rc<dyn Fn(ServerEvent)>,
) -> Result<web_sys::WebSocket, String> {
    use web_sys::{CloseEvent, MessageEvent, WebSocket};

    let ws = WebSocket::new(url).map_err(|e| format!("Failed to create WebSocket: {e:?}"))?;

    let is_open = Rc::new(Cell::new(false));
    let error_reason = Rc::new(RefCell::new(None::<String>));

    let is_open_clone = is_open.clone();
    let onopen_callback = Closure::wrap(Box::new(move |_: web_sys::Event| {
        is_open_clone.set(true);
    }) as Box<dyn FnMut(web_sys::Event)>);
    ws.set_onopen(Some(onopen_callback.as_ref().unchecked_ref()));
    onopen_callback.forget();

    let error_reason_close = error_reason.clone();
    let onclose_callback = Closure::wrap(Box::new(move |e: CloseEvent| {
        let reason = if e.reason().is_empty() {
            format!("Code {}", e.code())
        } else {
            e.reason()
        };
        *error_reason_close.borrow_mut() = Some(reason);
    }) as Box<dyn FnMut(CloseEvent)>);
    ws.set_onclose(Some(onclose_callback.as_ref().unchecked_ref()));
    onclose_callback.forget();

    let error_reason_err = error_reason.clone();
    let onerror_callback = Closure::wrap(Box::new(move |_: web_sys::ErrorEvent| {
        *error_reason_err.borrow_mut() = Some("WebSocket error".to_string());
    }) as Box<dyn FnMut(web_sys::ErrorEvent)>);
    ws.set_onerror(Some(onerror_callback.as_ref().unchecked_ref()));
    onerror_callback.forget();

    let onmessage_callback = Closure::wrap(Box::new(move |e: MessageEvent| {
        if let Ok(text) = e.data().dyn_into::<js_sys::JsString>() {
            let text: String = text.into();
            match serde_json::from_str::<ServerEvent>(&text) {
                Ok(event) => on_event(event),
                // Unknown events are dropped, never fatal.
                Err(e) => crate::log_debug!("Dropping unparseable frame: {e}"),
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);
    ws.set_onmessage(Some(onmessage_callback.as_ref().unchecked_ref()));
    onmessage_callback.forget();

    // Wait for the connection to open (5 second timeout)
    for _ in 0..500 {
        if is_open.get() {
            return Ok(ws);
        }
        if let Some(reason) = error_reason.borrow().clone() {
            return Err(reason);
        }
        // Yield to allow callbacks to fire
        gloo_timers::future::TimeoutFuture::new(10).await;
    }

    Err("Connection timeout".to_string())
}
