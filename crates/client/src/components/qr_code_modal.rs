//! Modal showing the pairing QR code for an instance.

use dioxus::prelude::*;

#[component]
pub fn QrCodeModal(qr_code: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "fixed inset-0 bg-black/50 flex items-center justify-center p-4 z-50",
            div { class: "bg-white rounded-2xl p-6 max-w-sm w-full",
                div { class: "text-center",
                    div { class: "flex items-center justify-between mb-4",
                        div { class: "flex items-center gap-2",
                            svg {
                                class: "w-6 h-6 text-green-600",
                                fill: "none",
                                stroke: "currentColor",
                                view_box: "0 0 24 24",
                                path {
                                    stroke_linecap: "round",
                                    stroke_linejoin: "round",
                                    stroke_width: "2",
                                    d: "M12 4v1m6 11h2m-6 0h-2v4m0-11v3m0 0h.01M12 12h4.01M16 20h4M4 12h4m12 0h.01M5 8h2a1 1 0 001-1V5a1 1 0 00-1-1H5a1 1 0 00-1 1v2a1 1 0 001 1zm12 0h2a1 1 0 001-1V5a1 1 0 00-1-1h-2a1 1 0 00-1 1v2a1 1 0 001 1zM5 20h2a1 1 0 001-1v-2a1 1 0 00-1-1H5a1 1 0 00-1 1v2a1 1 0 001 1z",
                                }
                            }
                            h3 { class: "text-lg font-semibold", "Escaneie o QR Code" }
                        }
                        CloseButton { on_close }
                    }

                    p { class: "text-gray-600 text-sm mb-4",
                        "Use o WhatsApp do seu celular para escanear este código"
                    }

                    div { class: "bg-white border-2 border-gray-200 rounded-lg p-4 mb-4",
                        img { class: "w-full", src: "{qr_code}", alt: "QR Code" }
                    }
                }
            }
        }
    }
}

/// Shared close ("X") button for the modal headers.
#[component]
pub fn CloseButton(on_close: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "cursor-pointer text-sm text-gray-500 hover:text-gray-700 transition-colors",
            onclick: move |_| on_close.call(()),
            svg {
                class: "w-6 h-6",
                fill: "none",
                stroke: "currentColor",
                view_box: "0 0 24 24",
                path {
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    stroke_width: "2",
                    d: "M6 18L18 6M6 6l12 12",
                }
            }
        }
    }
}
