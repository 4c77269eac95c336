use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use log::info;

use crate::api::handlers::{blocking_error_response, error_response};
use crate::api::AppState;
use crate::capture::catalog;

/// List capture files with their processing status
pub async fn list_captures(state: web::Data<AppState>) -> impl Responder {
    let dir = state.config.traffic_dir.clone();

    match web::block(move || catalog::list_captures(&dir, Utc::now())).await {
        Ok(Ok(captures)) => {
            info!("Returning {} captures", captures.len());
            HttpResponse::Ok().json(captures)
        }
        Ok(Err(e)) => error_response(&e),
        Err(e) => blocking_error_response(e),
    }
}
