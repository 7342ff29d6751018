//! Inventory stock backend.
//!
//! A token-gated HTTP service for tracking physical stock ("barang"): each
//! authenticated user uploads items with metadata and an optional photo,
//! lists and filters them, edits them, and flips them between `READY` and
//! `SOLD`. Photos live on local disk and are served statically under
//! `/uploads`.
//!
//! The crate follows a hexagonal layout: `domain` holds entities, ports and
//! the use-case implementation; `inbound::http` adapts them to actix-web;
//! `outbound` provides the persistence, storage and token adapters;
//! `middleware` carries the authentication gate every protected request
//! passes through.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

pub use doc::ApiDoc;
