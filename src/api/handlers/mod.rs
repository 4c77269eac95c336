use actix_web::error::BlockingError;
use actix_web::HttpResponse;
use log::error;

use crate::utils::error::AppError;

pub mod captures;
pub mod traffic;

/// JSON error body with a status code matching the error kind
pub fn error_response(err: &AppError) -> HttpResponse {
    let body = serde_json::json!({
        "status": "error",
        "message": err.to_string()
    });

    match err {
        AppError::NotInitialized => HttpResponse::ServiceUnavailable().json(body),
        AppError::DirectoryNotFound(_) => HttpResponse::NotFound().json(body),
        AppError::InvalidQuery(_) => HttpResponse::BadRequest().json(body),
        AppError::IoError(_) => HttpResponse::InternalServerError().json(body),
    }
}

/// Response for a blocking task that never produced a result
pub fn blocking_error_response(err: BlockingError) -> HttpResponse {
    error!("Blocking task failed: {}", err);
    HttpResponse::InternalServerError().json(serde_json::json!({
        "status": "error",
        "message": "Background task failed"
    }))
}
