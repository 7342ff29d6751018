//! HTTP adapter: routes, handlers, envelope, and error mapping.

use actix_multipart::form::MultipartFormConfig;
use actix_web::web;

use crate::domain::Error;

mod error;
pub mod items;
pub mod response;
mod state;

pub use self::state::HttpState;

/// Register the `/api/barang` routes.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/barang")
            .service(items::list)
            .service(items::create)
            .service(items::update)
            .service(items::update_status)
            .service(items::remove),
    );
}

/// Extractor configuration turning framework-level rejections into the
/// envelope instead of actix's plain-text defaults.
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(MultipartFormConfig::default().error_handler(|err, _req| {
        Error::invalid_request(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|_err, _req| {
        Error::invalid_request("identifier must be a UUID").into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        Error::invalid_request(err.to_string()).into()
    }));
}
