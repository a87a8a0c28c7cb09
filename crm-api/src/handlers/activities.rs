use actix_web::{web, HttpResponse};
use shared_types::{ActivityFilters, CreateActivityRequest, ValidationIssue};
use std::sync::Arc;
use tracing::{info, warn};

use crate::database::activities as activities_db;
use crate::database::contacts as contacts_db;
use crate::database::Database;
use crate::errors::{ensure_valid, ApiResult};
use crate::helpers::validation;

pub async fn list_activities(
    db: web::Data<Arc<Database>>,
    query: web::Query<ActivityFilters>,
) -> ApiResult<HttpResponse> {
    let activities = activities_db::list_activities(&db, &query).await;

    Ok(HttpResponse::Ok().json(activities))
}

pub async fn create_activity(
    db: web::Data<Arc<Database>>,
    request: web::Json<CreateActivityRequest>,
) -> ApiResult<HttpResponse> {
    let request = request.into_inner();

    let mut issues = validation::validate_new_activity(&request);
    if !request.contact_id.trim().is_empty()
        && contacts_db::get_contact(&db, &request.contact_id)
            .await
            .is_none()
    {
        issues.push(ValidationIssue::new("contactId", "Contact does not exist"));
    }
    if !issues.is_empty() {
        warn!("Rejected activity creation: {:?}", issues);
    }
    ensure_valid(issues)?;

    let activity = activities_db::create_activity(&db, request).await;
    info!(
        "Created activity {} for contact {}",
        activity.id, activity.contact_id
    );

    Ok(HttpResponse::Created().json(activity))
}
