// Route exports
pub mod community;
pub mod events;
pub mod posts;
pub mod profile;

use actix_web::web;

pub use events::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(events::configure)
            .configure(posts::configure)
            .configure(community::configure)
            .configure(profile::configure),
    );
}
