//! Status pill shown on each instance card.

use dioxus::prelude::*;
use mandazap_shared::InstanceStatus;

#[component]
pub fn StatusBadge(status: InstanceStatus) -> Element {
    let (color, icon_path, text) = match status {
        InstanceStatus::Connected => (
            "bg-green-100 text-green-800",
            // check circle
            "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
            "Conectado",
        ),
        InstanceStatus::Connecting => (
            "bg-yellow-100 text-yellow-800",
            // clock
            "M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z",
            "Conectando",
        ),
        InstanceStatus::Disconnected => (
            "bg-red-100 text-red-800",
            // x circle
            "M10 14l2-2m0 0l2-2m-2 2l-2-2m2 2l2 2m7-2a9 9 0 11-18 0 9 9 0 0118 0z",
            "Desconectado",
        ),
        InstanceStatus::Unknown => (
            "bg-gray-100 text-gray-800",
            "M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z",
            "Desconhecido",
        ),
    };

    rsx! {
        span { class: "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {color}",
            svg {
                class: "w-3 h-3 mr-1",
                fill: "none",
                stroke: "currentColor",
                view_box: "0 0 24 24",
                path {
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    stroke_width: "2",
                    d: "{icon_path}",
                }
            }
            "{text}"
        }
    }
}
