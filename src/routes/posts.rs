use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::compose_post;
use crate::models::{ErrorResponse, GeneratePostRequest};
use crate::routes::events::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/posts/generate", web::post().to(generate_post));
}

/// Generate post endpoint
///
/// POST /api/v1/posts/generate
///
/// Request body:
/// ```json
/// {
///   "eventId": "string",
///   "experience": "string",
///   "tone": "professional|casual|enthusiastic"
/// }
/// ```
async fn generate_post(
    state: web::Data<AppState>,
    req: web::Json<GeneratePostRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    if req.experience.trim().is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: "Experience must not be blank".to_string(),
            status_code: 400,
        });
    }

    let event = match state.catalog.event(&req.event_id) {
        Ok(event) => event,
        Err(e) => {
            tracing::info!("Post requested for unknown event {}", req.event_id);
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Event not found".to_string(),
                message: e.to_string(),
                status_code: 404,
            });
        }
    };

    let post = compose_post(event, &req.experience, req.tone);

    tracing::debug!(
        "Generated {:?} post for event {} with {} hashtags",
        req.tone,
        event.id,
        post.hashtags.len()
    );

    HttpResponse::Ok().json(post)
}
