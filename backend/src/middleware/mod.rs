//! Actix middleware: authentication gate and request logging.

mod auth_gate;
mod request_log;

pub use self::auth_gate::{AuthGate, Principal};
pub use self::request_log::RequestLog;
