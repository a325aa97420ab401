use actix_web::{web, HttpResponse, Responder};
use crate::core::{DashboardStats, EventFilter, Recommender};
use crate::i18n;
use crate::models::{
    BrowseEventsQuery, BrowseEventsResponse, DashboardResponse, ErrorResponse, HealthResponse,
    Language, TranslationResponse,
};
use crate::analytics::AnalyticsReport;
use crate::services::{Catalog, CommunityHub, Preferences};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub community: CommunityHub,
    pub preferences: Preferences,
    pub analytics: Arc<AnalyticsReport>,
    pub recommender: Recommender,
}

/// Configure event, dashboard and translation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/events", web::get().to(browse_events))
        .route("/events/recommended", web::get().to(recommended_events))
        .route("/events/{id}/feedback", web::get().to(event_feedback))
        .route("/dashboard", web::get().to(dashboard))
        .route("/translations/{lang}/{key}", web::get().to(translate));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Browse events endpoint
///
/// GET /api/v1/events?search=react&type=workshop&level=advanced&sort=match
///
/// All query parameters are optional. `sort` is one of `match`, `probability`
/// or `date`.
async fn browse_events(
    state: web::Data<AppState>,
    query: web::Query<BrowseEventsQuery>,
) -> impl Responder {
    let query = query.into_inner();
    let user = state.catalog.current_user();

    let filter = EventFilter {
        search: query.search,
        event_type: query.event_type,
        level: query.level,
    };

    let events = state
        .recommender
        .browse(user, state.catalog.events(), &filter, query.sort);
    let insights = state.recommender.insights(&events);

    tracing::info!(
        "Returning {} events for user {} (sort: {:?})",
        events.len(),
        user.id,
        query.sort
    );

    HttpResponse::Ok().json(BrowseEventsResponse {
        total_results: events.len(),
        events,
        insights,
    })
}

/// Recommended events endpoint
///
/// GET /api/v1/events/recommended
async fn recommended_events(state: web::Data<AppState>) -> impl Responder {
    let events = state
        .recommender
        .recommended(state.catalog.current_user(), state.catalog.events());

    HttpResponse::Ok().json(events)
}

/// Feedback left for an event
///
/// GET /api/v1/events/{id}/feedback
async fn event_feedback(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let event_id = path.into_inner();

    if let Err(e) = state.catalog.event(&event_id) {
        return HttpResponse::NotFound().json(ErrorResponse {
            error: "Event not found".to_string(),
            message: e.to_string(),
            status_code: 404,
        });
    }

    HttpResponse::Ok().json(state.catalog.feedback_for(&event_id))
}

/// Dashboard overview endpoint
///
/// GET /api/v1/dashboard
async fn dashboard(state: web::Data<AppState>) -> impl Responder {
    let user = state.preferences.apply(state.catalog.current_user()).await;
    let events = state.catalog.events();
    let today = chrono::Utc::now().date_naive();

    HttpResponse::Ok().json(DashboardResponse {
        stats: DashboardStats::for_user(&user, state.analytics.network_connections()),
        upcoming: state.recommender.upcoming(&user, events, today),
        recommended: state.recommender.recommended(&user, events),
        user,
    })
}

/// Translation lookup endpoint
///
/// GET /api/v1/translations/{lang}/{key}
///
/// Unknown keys echo back the key; unknown languages are rejected.
async fn translate(path: web::Path<(String, String)>) -> impl Responder {
    let (lang, key) = path.into_inner();

    let language: Language = match lang.parse() {
        Ok(language) => language,
        Err(e) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid language".to_string(),
                message: format!("{}", e),
                status_code: 400,
            });
        }
    };

    let text = i18n::translate(language, &key).to_string();
    HttpResponse::Ok().json(TranslationResponse { key, text })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
