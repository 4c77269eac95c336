use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use crate::api::handlers::{
    captures::list_captures,
    traffic::{last_days, range, rebuild, status, top},
};

/// Root endpoint to provide information about the API
async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "name": "VPN Traffic API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Capture processing status and daily traffic totals for a VPN gateway",
        "endpoints": [
            {
                "path": "/api/captures",
                "method": "GET",
                "description": "List capture files with their report status"
            },
            {
                "path": "/api/traffic/last/{days}",
                "method": "GET",
                "description": "Daily totals for the last N indexed days"
            },
            {
                "path": "/api/traffic/range",
                "method": "GET",
                "description": "Daily totals between ?from= and ?to= (YYYY-MM-DD, inclusive)"
            },
            {
                "path": "/api/traffic/top",
                "method": "GET",
                "description": "Busiest days by combined input and output (?limit=, default 5)"
            },
            {
                "path": "/api/traffic/status",
                "method": "GET",
                "description": "Get status of the traffic index"
            },
            {
                "path": "/api/traffic/rebuild",
                "method": "POST",
                "description": "Rescan the traffic directory and replace the index"
            }
        ]
    }))
}

/// Configure API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Root endpoint
        .route("/", web::get().to(index))
        .service(
            web::scope("/api")
                // Capture files
                .service(
                    web::scope("/captures")
                        .route("", web::get().to(list_captures))
                )
                // Daily traffic index
                .service(
                    web::scope("/traffic")
                        .route("/last/{days}", web::get().to(last_days))
                        .route("/range", web::get().to(range))
                        .route("/top", web::get().to(top))
                        .route("/status", web::get().to(status))
                        .route("/rebuild", web::post().to(rebuild))
                )
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_rt::test]
    async fn test_index_lists_endpoints() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get().uri("/").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let endpoints = body["endpoints"].as_array().unwrap();
        assert_eq!(endpoints.len(), 6);
        assert!(endpoints.iter().any(|e| e["path"] == "/api/captures"));
    }
}
