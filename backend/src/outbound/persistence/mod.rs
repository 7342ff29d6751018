//! In-memory persistence adapters.
//!
//! Process-local stores behind the persistence ports. They implement the full
//! port contracts, identity and timestamp stamping included, and back both
//! the test suites and single-process deployments where durability is not
//! required.

mod items;
mod sessions;
mod users;

pub use self::items::InMemoryItemRepository;
pub use self::sessions::InMemorySessionStore;
pub use self::users::InMemoryUserDirectory;
