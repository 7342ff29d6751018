//! Handlers for the `/api/barang` endpoints.
//!
//! Every handler answers with the [`ApiResponse`] envelope. Writes go through
//! the [`InventoryService`] port; the authenticated user arrives through the
//! [`Principal`] extractor filled in by the authentication gate.

use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::text::Text;
use actix_multipart::form::MultipartForm;
use actix_web::{delete, get, patch, post, put, web, HttpResponse};
use chrono::NaiveDateTime;
use tracing::error;
use uuid::Uuid;

use crate::domain::ports::{FileUpload, InventoryError, ListFilter};
use crate::domain::{ApiResult, Error, Item, ItemChanges, ItemDraft};
use crate::middleware::Principal;

use super::response::ApiResponse;
use super::state::HttpState;

/// Multipart payload shared by create and update.
#[derive(Debug, MultipartForm)]
pub struct ItemForm {
    #[multipart(rename = "namaBarang")]
    nama_barang: Text<String>,
    kategori: Text<String>,
    deskripsi: Option<Text<String>>,
    #[multipart(rename = "tanggalMasuk")]
    tanggal_masuk: Text<String>,
    file: Option<TempFile>,
}

/// Optional list filters. A status filter wins over a category filter.
#[derive(Debug, serde::Deserialize)]
pub struct ListQuery {
    status: Option<String>,
    kategori: Option<String>,
}

impl From<ListQuery> for ListFilter {
    fn from(query: ListQuery) -> Self {
        Self {
            status: query.status,
            category: query.kategori,
        }
    }
}

fn parse_intake(raw: &str) -> ApiResult<NaiveDateTime> {
    raw.parse::<NaiveDateTime>()
        .map_err(|_| Error::invalid_request("tanggalMasuk must be an ISO-8601 date-time"))
}

/// Read the uploaded file into memory. A missing part and a zero-byte part
/// both count as "no photo".
async fn read_upload(file: Option<TempFile>) -> ApiResult<Option<FileUpload>> {
    let Some(file) = file else {
        return Ok(None);
    };
    if file.size == 0 {
        return Ok(None);
    }
    let bytes = tokio::fs::read(file.file.path()).await.map_err(|err| {
        error!(error = %err, "reading uploaded file failed");
        Error::io_failure("uploaded file could not be read")
    })?;
    Ok(Some(FileUpload {
        bytes,
        original_name: file.file_name,
    }))
}

/// Strip any double quotes, then surrounding whitespace. Clients send the
/// status either as a bare word or as a JSON string literal.
fn clean_status(raw: &[u8]) -> ApiResult<String> {
    let text = std::str::from_utf8(raw)
        .map_err(|_| Error::invalid_request("status must be UTF-8 text"))?;
    let cleaned = text.replace('"', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Err(Error::invalid_request("status must not be empty"));
    }
    Ok(cleaned.to_owned())
}

/// Map a use-case failure on a write path. Detail goes to the log; the
/// client sees a stable message.
fn write_failure(err: InventoryError) -> Error {
    match err {
        InventoryError::Repository { message } => {
            error!(%message, "inventory persistence failed");
            Error::invalid_request("item could not be saved")
        }
        InventoryError::Storage { message } => {
            error!(%message, "photo storage failed");
            Error::io_failure("photo could not be stored")
        }
    }
}

fn read_failure(err: InventoryError) -> Error {
    error!(error = %err, "inventory lookup failed");
    Error::internal("inventory is unavailable")
}

#[utoipa::path(
    get,
    context_path = "/api/barang",
    params(
        ("status" = Option<String>, Query, description = "Only items with this status"),
        ("kategori" = Option<String>, Query, description = "Only items in this category"),
    ),
    responses(
        (status = 200, description = "Items owned by the caller, newest intake first", body = [Item]),
        (status = 401, description = "Missing or invalid token"),
    ),
    tag = "barang"
)]
#[get("")]
pub async fn list(
    state: web::Data<HttpState>,
    principal: Principal,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    let filter = ListFilter::from(query.into_inner());
    let items = state
        .inventory
        .list(principal.user().id, &filter)
        .await
        .map_err(read_failure)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("items fetched", items)))
}

#[utoipa::path(
    post,
    context_path = "/api/barang",
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "The stored item", body = Item),
        (status = 400, description = "Malformed field"),
        (status = 401, description = "Missing or invalid token"),
    ),
    tag = "barang"
)]
#[post("")]
pub async fn create(
    state: web::Data<HttpState>,
    principal: Principal,
    form: MultipartForm<ItemForm>,
) -> ApiResult<HttpResponse> {
    let form = form.into_inner();
    let intake_at = parse_intake(&form.tanggal_masuk)?;
    let photo = read_upload(form.file).await?;

    let draft = ItemDraft {
        name: form.nama_barang.into_inner(),
        category: form.kategori.into_inner(),
        description: form.deskripsi.map(Text::into_inner),
        intake_at,
        status: None,
        owner_id: principal.user().id,
    };

    let item = state
        .inventory
        .create(draft, photo)
        .await
        .map_err(write_failure)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("item created", item)))
}

#[utoipa::path(
    put,
    context_path = "/api/barang",
    params(("id" = Uuid, Path, description = "Item identifier")),
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "The updated item", body = Item),
        (status = 404, description = "Unknown item"),
    ),
    tag = "barang"
)]
#[put("/{id}")]
pub async fn update(
    state: web::Data<HttpState>,
    _principal: Principal,
    id: web::Path<Uuid>,
    form: MultipartForm<ItemForm>,
) -> ApiResult<HttpResponse> {
    let form = form.into_inner();
    let intake_at = parse_intake(&form.tanggal_masuk)?;
    let photo = read_upload(form.file).await?;

    let changes = ItemChanges {
        name: form.nama_barang.into_inner(),
        category: form.kategori.into_inner(),
        description: form.deskripsi.map(Text::into_inner),
        intake_at,
    };

    let item = state
        .inventory
        .update(id.into_inner(), changes, photo)
        .await
        .map_err(write_failure)?
        .ok_or_else(|| Error::not_found("item not found"))?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("item updated", item)))
}

#[utoipa::path(
    patch,
    context_path = "/api/barang",
    params(("id" = Uuid, Path, description = "Item identifier")),
    request_body(content = String, content_type = "text/plain", description = "New status, optionally quoted"),
    responses(
        (status = 200, description = "The item with its new status", body = Item),
        (status = 400, description = "Empty status"),
        (status = 404, description = "Unknown item"),
    ),
    tag = "barang"
)]
#[patch("/{id}/status")]
pub async fn update_status(
    state: web::Data<HttpState>,
    _principal: Principal,
    id: web::Path<Uuid>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let status = clean_status(&body)?;
    let item = state
        .inventory
        .update_status(id.into_inner(), &status)
        .await
        .map_err(write_failure)?
        .ok_or_else(|| Error::not_found("item not found"))?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("item status updated", item)))
}

#[utoipa::path(
    delete,
    context_path = "/api/barang",
    params(("id" = Uuid, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "Deleted, or already absent"),
        (status = 401, description = "Missing or invalid token"),
    ),
    tag = "barang"
)]
#[delete("/{id}")]
pub async fn remove(
    state: web::Data<HttpState>,
    _principal: Principal,
    id: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    state
        .inventory
        .delete(id.into_inner())
        .await
        .map_err(|err| {
            error!(error = %err, "item deletion failed");
            Error::internal("item could not be deleted")
        })?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success("item deleted", ())))
}
