//! Typed entities for the gateway's payloads.
//!
//! Every entity carries an extension bag (`extra`): keys the server sends
//! that are not modeled yet are preserved under their original names and
//! serialized back out via `#[serde(flatten)]`. Entities are built through
//! [`crate::coerce::FromRecord`], not through derived deserialization — the
//! derive rejects mismatched field types, while the gateway calls for
//! per-field degradation.

mod accounts;
mod attachments;
mod contacts;
mod devices;
mod general;
mod groups;
mod identities;
mod messages;
mod profiles;
mod receipts;
mod search;
mod stickers;

pub use accounts::{AccountDetails, AccountRegistration, AccountVerification};
pub use attachments::Attachment;
pub use contacts::Contact;
pub use devices::{Device, DeviceType, LinkedDevice};
pub use general::{About, Configuration, LoggingConfig};
pub use groups::{Group, GroupInfo, GroupMember, GroupRole};
pub use identities::{Identity, TrustLevel};
pub use messages::{Message, MessageAttachment, MessageMention, MessageQuote, MessageType, Reaction};
pub use profiles::Profile;
pub use receipts::{Receipt, ReceiptType};
pub use search::SearchResults;
pub use stickers::{Sticker, StickerPack};
