//! Domain entities, errors, ports and use-case implementations.
//!
//! Everything in this module is transport agnostic: the HTTP adapter maps
//! domain outcomes onto statuses and the response envelope, and outbound
//! adapters implement the ports.

mod auth;
mod error;
mod inventory;
mod item;
pub mod ports;
mod user;

pub use self::auth::AuthToken;
pub use self::error::{Error, ErrorCode};
pub use self::inventory::InventoryServiceImpl;
pub use self::item::{Item, ItemChanges, ItemDraft, STATUS_READY, STATUS_SOLD};
pub use self::user::User;

/// Convenient result alias for code returning the domain [`Error`].
pub type ApiResult<T> = Result<T, Error>;
