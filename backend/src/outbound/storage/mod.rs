//! File storage adapters.

mod disk;

pub use self::disk::DiskFileStore;
