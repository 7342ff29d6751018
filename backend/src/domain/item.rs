//! Inventory item ("Barang") entity and write models.
//!
//! Serialisation keeps the wire names clients already depend on
//! (`namaBarang`, `kategori`, `tanggalMasuk`, `foto`, …). The owning user is
//! never serialised.
//!
//! ## Invariants
//! - `id`, `created_at` and `owner_id` are assigned on first persistence and
//!   never change afterwards.
//! - A non-`None` `photo` names a file that exists under the storage root
//!   (eventually consistent; see the service documentation for the failure
//!   windows).

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Conventional status of an item that is in stock.
pub const STATUS_READY: &str = "READY";
/// Conventional status of an item that has been sold.
pub const STATUS_SOLD: &str = "SOLD";

/// One inventory unit.
///
/// `status` is deliberately a free-form string: `READY` and `SOLD` are
/// conventions, and callers may store other values verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Uuid,
    #[serde(rename = "namaBarang")]
    pub name: String,
    #[serde(rename = "kategori")]
    pub category: String,
    #[serde(rename = "deskripsi")]
    pub description: Option<String>,
    #[serde(rename = "tanggalMasuk")]
    pub intake_at: NaiveDateTime,
    /// Stored filename of the photo (never a path), if one was uploaded.
    #[serde(rename = "foto")]
    pub photo: Option<String>,
    pub status: String,
    /// Owning user; not part of the JSON representation.
    #[serde(skip)]
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating an item. Identity, timestamps, and the
/// default status are stamped by the persistence layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub intake_at: NaiveDateTime,
    /// Defaults to [`STATUS_READY`] when absent.
    pub status: Option<String>,
    pub owner_id: Uuid,
}

/// Text fields overwritten by an update. The photo is handled separately and
/// the owner is never reassigned.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemChanges {
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub intake_at: NaiveDateTime,
}
