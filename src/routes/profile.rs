use actix_web::{web, HttpResponse, Responder};
use crate::models::UpdateLanguageRequest;
use crate::routes::events::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/profile", web::get().to(get_profile))
        .route("/profile/language", web::put().to(update_language))
        .route("/analytics", web::get().to(analytics));
}

/// Current user profile with preferences applied
///
/// GET /api/v1/profile
async fn get_profile(state: web::Data<AppState>) -> impl Responder {
    let user = state.preferences.apply(state.catalog.current_user()).await;
    HttpResponse::Ok().json(user)
}

/// Change the UI language of the current user
///
/// PUT /api/v1/profile/language
///
/// Request body:
/// ```json
/// { "language": "en|ta" }
/// ```
async fn update_language(
    state: web::Data<AppState>,
    req: web::Json<UpdateLanguageRequest>,
) -> impl Responder {
    state.preferences.set_language(req.language).await;

    let user = state.preferences.apply(state.catalog.current_user()).await;
    HttpResponse::Ok().json(user)
}

/// Analytics series and highlights
///
/// GET /api/v1/analytics
async fn analytics(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.analytics.as_ref())
}
