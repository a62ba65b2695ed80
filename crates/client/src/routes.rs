//! Application routing configuration.

use dioxus::prelude::*;

use crate::views::{Dashboard, Login};

// Router configuration
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    // The dashboard is the whole app; it bounces to /login when there is no
    // session, and /login bounces back once there is one.
    #[route("/")]
    Dashboard {},

    #[route("/login")]
    Login {},
}
