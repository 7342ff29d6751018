//! Domain ports and supporting types for the hexagonal boundary.

mod file_store;
mod inventory_service;
mod item_repository;
mod session_store;
mod token_verifier;
mod user_directory;

#[cfg(test)]
pub use file_store::MockFileStore;
pub use file_store::{FileStore, FileStoreError, FileUpload};
pub use inventory_service::{InventoryError, InventoryService, ListFilter};
#[cfg(test)]
pub use item_repository::MockItemRepository;
pub use item_repository::{ItemRepository, ItemRepositoryError};
#[cfg(test)]
pub use session_store::MockSessionStore;
pub use session_store::{SessionStore, SessionStoreError};
#[cfg(test)]
pub use token_verifier::MockTokenVerifier;
pub use token_verifier::TokenVerifier;
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::{UserDirectory, UserDirectoryError};
