use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{AddCommentRequest, ErrorResponse, ListFilesQuery, ShareFileRequest};
use crate::routes::events::AppState;
use crate::services::{CommunityError, FileUpload};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/community/files", web::get().to(list_files))
        .route("/community/files", web::post().to(share_file))
        .route("/community/files/{id}/comments", web::post().to(add_comment));
}

fn community_error_response(err: CommunityError) -> HttpResponse {
    match err {
        CommunityError::FileNotFound(_) => HttpResponse::NotFound().json(ErrorResponse {
            error: "File not found".to_string(),
            message: err.to_string(),
            status_code: 404,
        }),
        CommunityError::EmptyComment | CommunityError::EmptyName => {
            HttpResponse::BadRequest().json(ErrorResponse {
                error: "Validation failed".to_string(),
                message: err.to_string(),
                status_code: 400,
            })
        }
    }
}

/// List shared files
///
/// GET /api/v1/community/files?tab=all|presentations|photos|certificates
async fn list_files(
    state: web::Data<AppState>,
    query: web::Query<ListFilesQuery>,
) -> impl Responder {
    let files = state.community.list(query.tab).await;
    HttpResponse::Ok().json(files)
}

/// Share a file with the community
///
/// POST /api/v1/community/files
///
/// Request body:
/// ```json
/// {
///   "name": "slides.pdf",
///   "mimeType": "application/pdf",
///   "url": "string",
///   "eventId": "string"
/// }
/// ```
async fn share_file(
    state: web::Data<AppState>,
    req: web::Json<ShareFileRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let upload = FileUpload {
        name: req.name,
        mime_type: req.mime_type,
        url: req.url,
        event_id: req.event_id,
    };

    match state
        .community
        .share(state.catalog.current_user(), upload)
        .await
    {
        Ok(file) => HttpResponse::Created().json(file),
        Err(e) => community_error_response(e),
    }
}

/// Comment on a shared file
///
/// POST /api/v1/community/files/{id}/comments
async fn add_comment(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<AddCommentRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let file_id = path.into_inner();

    match state
        .community
        .add_comment(&file_id, state.catalog.current_user(), &req.content)
        .await
    {
        Ok(comment) => HttpResponse::Created().json(comment),
        Err(e) => {
            tracing::info!("Comment on file {} rejected: {}", file_id, e);
            community_error_response(e)
        }
    }
}
