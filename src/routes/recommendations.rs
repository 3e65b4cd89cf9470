use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{profile, Recommender};
use crate::models::{ErrorResponse, HealthResponse, SpaceProfileInput};
use crate::services::CatalogStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub recommender: Recommender,
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/api/recommendations", web::post().to(build_recommendations));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_entries: state.catalog.entry_count(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommendations endpoint
///
/// POST /api/recommendations
///
/// Request body:
/// ```json
/// {
///   "length": 4,
///   "width": 3,
///   "height": 3,
///   "type": "tiny_house",
///   "occupants": "solo",
///   "zones": ["sleep", "work"],
///   "mobility": "mobile",
///   "loft": true
/// }
/// ```
async fn build_recommendations(
    state: web::Data<AppState>,
    req: web::Json<SpaceProfileInput>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommendations request: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid space profile".to_string(),
            details: serde_json::to_value(&errors).ok(),
        });
    }

    let profile = match profile::normalize(&req) {
        Ok(profile) => profile,
        Err(e) => {
            tracing::info!("Rejected space profile: {}", e);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid space profile".to_string(),
                details: serde_json::to_value(&e.issues).ok(),
            });
        }
    };

    let response = state.recommender.recommend(&profile);

    tracing::info!(
        "Returning {} layouts and {} furniture items for a {:.1} m2 {:?}",
        response.stats.layout_count,
        response.stats.furniture_count,
        response.area,
        profile.space_type,
    );

    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    fn create_test_state() -> AppState {
        let catalog = Arc::new(CatalogStore::load_default().expect("embedded catalog parses"));
        AppState {
            recommender: Recommender::new(catalog.clone()),
            catalog,
        }
    }

    #[actix_web::test]
    async fn test_recommendations_round_trip() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/recommendations")
            .set_json(serde_json::json!({
                "length": 4,
                "width": 3,
                "height": 3,
                "type": "tiny_house",
                "occupants": "solo",
                "zones": ["sleep", "work"],
                "mobility": "mobile",
                "loft": true
            }))
            .to_request();

        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["area"], serde_json::json!(12.0));
        assert!(body["layouts"].as_array().is_some_and(|l| !l.is_empty()));
        assert_eq!(
            body["stats"]["layoutCount"],
            serde_json::json!(body["layouts"].as_array().unwrap().len())
        );
    }

    #[actix_web::test]
    async fn test_rejects_empty_zones() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/recommendations")
            .set_json(serde_json::json!({
                "length": 4,
                "width": 3,
                "height": 3,
                "type": "tiny_house",
                "occupants": "solo",
                "zones": []
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert!(body["catalogEntries"].as_u64().unwrap() > 0);
    }
}
