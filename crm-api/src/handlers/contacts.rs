use actix_web::{web, HttpResponse};
use shared_types::{
    ContactFilters, CreateContactRequest, MessageResponse, UpdateContactRequest, ValidationIssue,
};
use std::sync::Arc;
use tracing::{info, warn};

use crate::database::contacts as contacts_db;
use crate::database::Database;
use crate::errors::{ensure_valid, ApiError, ApiResult};
use crate::helpers::validation;

pub async fn list_contacts(
    db: web::Data<Arc<Database>>,
    query: web::Query<ContactFilters>,
) -> ApiResult<HttpResponse> {
    let contacts = contacts_db::list_contacts(&db, &query).await;

    Ok(HttpResponse::Ok().json(contacts))
}

pub async fn get_contact(
    db: web::Data<Arc<Database>>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let contact_id = path.into_inner();

    let contact = contacts_db::get_contact(&db, &contact_id)
        .await
        .ok_or_else(|| ApiError::not_found("Contact"))?;

    Ok(HttpResponse::Ok().json(contact))
}

pub async fn create_contact(
    db: web::Data<Arc<Database>>,
    request: web::Json<CreateContactRequest>,
) -> ApiResult<HttpResponse> {
    let request = request.into_inner();

    let mut issues = validation::validate_new_contact(&request);
    if contacts_db::get_contact_by_email(&db, &request.email)
        .await
        .is_some()
    {
        issues.push(email_taken());
    }
    if !issues.is_empty() {
        warn!("Rejected contact creation: {:?}", issues);
    }
    ensure_valid(issues)?;

    let contact = contacts_db::create_contact(&db, request).await;
    info!("Created contact {}", contact.id);

    Ok(HttpResponse::Created().json(contact))
}

pub async fn update_contact(
    db: web::Data<Arc<Database>>,
    path: web::Path<String>,
    request: web::Json<UpdateContactRequest>,
) -> ApiResult<HttpResponse> {
    let contact_id = path.into_inner();
    let request = request.into_inner();

    let mut issues = validation::validate_contact_update(&request);
    if let Some(Some(email)) = &request.email {
        let owner = contacts_db::get_contact_by_email(&db, email).await;
        if owner.is_some_and(|other| other.id != contact_id) {
            issues.push(email_taken());
        }
    }
    if !issues.is_empty() {
        warn!("Rejected update of contact {}: {:?}", contact_id, issues);
    }
    ensure_valid(issues)?;

    let contact = contacts_db::update_contact(&db, &contact_id, request)
        .await
        .ok_or_else(|| ApiError::not_found("Contact"))?;
    info!("Updated contact {}", contact.id);

    Ok(HttpResponse::Ok().json(contact))
}

pub async fn delete_contact(
    db: web::Data<Arc<Database>>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let contact_id = path.into_inner();

    if !contacts_db::delete_contact(&db, &contact_id).await {
        return Err(ApiError::not_found("Contact"));
    }
    info!("Deleted contact {}", contact_id);

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Contact deleted successfully".to_string(),
    }))
}

fn email_taken() -> ValidationIssue {
    ValidationIssue::new("email", "A contact with this email already exists")
}
