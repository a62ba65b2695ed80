//! UI components: the instance card and its modals.

pub mod contacts_modal;
pub mod create_instance_modal;
pub mod instance_card;
pub mod messages_modal;
pub mod qr_code_modal;
pub mod send_message_modal;
pub mod status_badge;
pub mod ui;

pub use contacts_modal::ContactsModal;
pub use create_instance_modal::CreateInstanceModal;
pub use instance_card::InstanceCard;
pub use messages_modal::MessagesModal;
pub use qr_code_modal::QrCodeModal;
pub use send_message_modal::SendMessageModal;
pub use status_badge::StatusBadge;
