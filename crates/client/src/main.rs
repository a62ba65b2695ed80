//! MandaZap client - Main entry point
//!
//! Dashboard for WhatsApp messaging instances. Supports both web (WASM) and
//! desktop platforms.

#![allow(non_snake_case)]

use dioxus::prelude::*;
use mandazap_client::{auth_session::AuthProvider, routes::Route, socket::SocketManager};

// Assets
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    // Initialize tracing for desktop
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("mandazap_client=debug")),
            )
            .init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            SocketManager {
                Router::<Route> {}
            }
        }
    }
}
