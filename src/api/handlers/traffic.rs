use actix_web::{web, HttpResponse, Responder};
use chrono::{DateTime, NaiveDate, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::api::handlers::{blocking_error_response, error_response};
use crate::api::AppState;
use crate::models::stats::DailyTrafficStats;
use crate::utils::error::{AppError, AppResult};

/// Query parameters for a date range
#[derive(Deserialize)]
pub struct RangeQuery {
    /// First day, inclusive
    from: NaiveDate,

    /// Last day, inclusive
    to: NaiveDate,
}

/// Query parameters for the busiest days
#[derive(Deserialize)]
pub struct TopQuery {
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize { 5 }

/// Response for index status
#[derive(Serialize, Deserialize)]
pub struct IndexStatusResponse {
    pub initialized: bool,
    pub days: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub built_at: Option<DateTime<Utc>>,
}

fn stats_response(result: AppResult<Vec<DailyTrafficStats>>) -> HttpResponse {
    match result {
        Ok(days) => HttpResponse::Ok().json(days),
        Err(e) => {
            warn!("Traffic query failed: {}", e);
            error_response(&e)
        }
    }
}

/// Daily totals for the last N indexed days
pub async fn last_days(state: web::Data<AppState>, path: web::Path<u32>) -> impl Responder {
    let days = path.into_inner();
    if days == 0 {
        return error_response(&AppError::InvalidQuery("days must be at least 1".to_string()));
    }

    stats_response(state.traffic.last_days(days))
}

/// Daily totals between two dates
pub async fn range(state: web::Data<AppState>, query: web::Query<RangeQuery>) -> impl Responder {
    stats_response(state.traffic.between(query.from, query.to))
}

/// Days with the highest combined volume
pub async fn top(state: web::Data<AppState>, query: web::Query<TopQuery>) -> impl Responder {
    stats_response(state.traffic.top_days(query.limit))
}

/// Rescan the traffic directory and replace the index
pub async fn rebuild(state: web::Data<AppState>) -> impl Responder {
    let worker_state = state.clone();

    match web::block(move || worker_state.traffic.rebuild()).await {
        Ok(Ok(snapshot)) => {
            info!("Traffic index rebuilt on request");
            HttpResponse::Ok().json(serde_json::json!({
                "status": "success",
                "days": snapshot.index.len(),
                "built_at": snapshot.built_at
            }))
        }
        Ok(Err(e)) => error_response(&e),
        Err(e) => blocking_error_response(e),
    }
}

/// Whether the index is available and what it covers
pub async fn status(state: web::Data<AppState>) -> impl Responder {
    let response = match state.traffic.snapshot() {
        Ok(snapshot) => IndexStatusResponse {
            initialized: true,
            days: snapshot.index.len(),
            first_date: snapshot.index.first_date(),
            last_date: snapshot.index.last_date(),
            built_at: Some(snapshot.built_at),
        },
        Err(_) => IndexStatusResponse {
            initialized: false,
            days: 0,
            first_date: None,
            last_date: None,
            built_at: None,
        },
    };

    HttpResponse::Ok().json(response)
}
