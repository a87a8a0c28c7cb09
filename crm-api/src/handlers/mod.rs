pub mod activities;
pub mod contacts;
pub mod metrics;
pub mod users;

use actix_web::{get, web, HttpResponse, Responder};
use std::sync::Arc;

use crate::database::Database;
use crate::errors::ApiError;

#[get("/health")]
async fn health(db: web::Data<Arc<Database>>) -> impl Responder {
    let contacts = db.contacts.lock().await.len();

    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "contacts": contacts
    }))
}

/// Registers every route plus the extractor configs that turn malformed bodies and
/// query strings into structured validation errors.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default().error_handler(|err, _req| ApiError::from(err).into()),
    )
    .app_data(
        web::QueryConfig::default().error_handler(|err, _req| ApiError::from(err).into()),
    )
    .service(health)
    .route("/api/metrics", web::get().to(metrics::get_metrics))
    .route("/api/contacts", web::get().to(contacts::list_contacts))
    .route("/api/contacts", web::post().to(contacts::create_contact))
    .route("/api/contacts/{id}", web::get().to(contacts::get_contact))
    .route("/api/contacts/{id}", web::put().to(contacts::update_contact))
    .route("/api/contacts/{id}", web::delete().to(contacts::delete_contact))
    .route("/api/activities", web::get().to(activities::list_activities))
    .route("/api/activities", web::post().to(activities::create_activity))
    .route("/api/users", web::post().to(users::create_user))
    .route("/api/users/{id}", web::get().to(users::get_user));
}
