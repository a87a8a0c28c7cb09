use regex::Regex;
use shared_types::{
    CreateActivityRequest, CreateContactRequest, CreateUserRequest, UpdateContactRequest,
    ValidationIssue,
};
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
});

pub fn validate_new_contact(request: &CreateContactRequest) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    check_required(&mut issues, "name", &request.name);
    check_email(&mut issues, &request.email);
    if let Some(status) = &request.status {
        check_required(&mut issues, "status", status);
    }

    issues
}

/// Same rules as creation, applied only to the fields present in the update.
pub fn validate_contact_update(request: &UpdateContactRequest) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    match &request.name {
        Some(Some(name)) => check_required(&mut issues, "name", name),
        Some(None) => issues.push(not_nullable("name")),
        None => {}
    }
    match &request.email {
        Some(Some(email)) => check_email(&mut issues, email),
        Some(None) => issues.push(not_nullable("email")),
        None => {}
    }
    match &request.status {
        Some(Some(status)) => check_required(&mut issues, "status", status),
        Some(None) => issues.push(not_nullable("status")),
        None => {}
    }

    issues
}

pub fn validate_new_activity(request: &CreateActivityRequest) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    check_required(&mut issues, "contactId", &request.contact_id);
    check_required(&mut issues, "type", &request.activity_type);
    check_required(&mut issues, "title", &request.title);

    issues
}

pub fn validate_new_user(request: &CreateUserRequest) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    check_required(&mut issues, "username", &request.username);
    check_required(&mut issues, "password", &request.password);

    issues
}

fn check_required(issues: &mut Vec<ValidationIssue>, field: &str, value: &str) {
    if value.trim().is_empty() {
        issues.push(ValidationIssue::new(field, format!("{field} is required")));
    }
}

fn check_email(issues: &mut Vec<ValidationIssue>, email: &str) {
    if email.trim().is_empty() {
        issues.push(ValidationIssue::new("email", "email is required"));
    } else if !EMAIL_REGEX.is_match(email) {
        issues.push(ValidationIssue::new("email", "Invalid email address"));
    }
}

fn not_nullable(field: &str) -> ValidationIssue {
    ValidationIssue::new(field, format!("{field} cannot be null"))
}
