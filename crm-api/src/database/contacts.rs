use crate::database::{new_id, Database};
use chrono::Utc;
use shared_types::{
    Contact, ContactFilters, CreateContactRequest, UpdateContactRequest, DEFAULT_CONTACT_STATUS,
};
use std::cmp::Ordering;
use tracing::debug;

/// Lists contacts matching every given filter, most recently updated first.
pub async fn list_contacts(db: &Database, filters: &ContactFilters) -> Vec<Contact> {
    let search = filters.search_term().map(str::to_lowercase);
    let company = filters.company_filter();
    let status = filters.status_filter();

    let mut contacts: Vec<Contact> = {
        let contacts = db.contacts.lock().await;
        contacts
            .values()
            .filter(|c| search.as_deref().map_or(true, |term| matches_search(c, term)))
            .filter(|c| company.map_or(true, |company| c.company.as_deref() == Some(company)))
            .filter(|c| status.map_or(true, |status| c.status == status))
            .cloned()
            .collect()
    };

    contacts.sort_by(newest_update_first);
    contacts
}

/// `term` must already be lowercased.
fn matches_search(contact: &Contact, term: &str) -> bool {
    contact.name.to_lowercase().contains(term)
        || contact.email.to_lowercase().contains(term)
        || contact
            .company
            .as_deref()
            .is_some_and(|company| company.to_lowercase().contains(term))
}

fn newest_update_first(a: &Contact, b: &Contact) -> Ordering {
    b.updated_at
        .cmp(&a.updated_at)
        .then_with(|| b.created_at.cmp(&a.created_at))
        .then_with(|| a.id.cmp(&b.id))
}

pub async fn get_contact(db: &Database, id: &str) -> Option<Contact> {
    db.contacts.lock().await.get(id).cloned()
}

pub async fn get_contact_by_email(db: &Database, email: &str) -> Option<Contact> {
    let contacts = db.contacts.lock().await;
    contacts.values().find(|c| c.email == email).cloned()
}

pub async fn create_contact(db: &Database, request: CreateContactRequest) -> Contact {
    let now = Utc::now();
    let contact = Contact {
        id: new_id(),
        name: request.name,
        email: request.email,
        phone: request.phone,
        company: request.company,
        title: request.title,
        status: request
            .status
            .unwrap_or_else(|| DEFAULT_CONTACT_STATUS.to_string()),
        notes: request.notes,
        created_at: now,
        updated_at: now,
    };

    db.contacts
        .lock()
        .await
        .insert(contact.id.clone(), contact.clone());
    contact
}

/// Overwrites only the fields present in `changes`. Returns `None` for an unknown id.
///
/// Required fields sent as `null` are ignored here; the handler rejects them first.
pub async fn update_contact(
    db: &Database,
    id: &str,
    changes: UpdateContactRequest,
) -> Option<Contact> {
    let mut contacts = db.contacts.lock().await;
    let contact = contacts.get_mut(id)?;

    if let Some(Some(name)) = changes.name {
        contact.name = name;
    }
    if let Some(Some(email)) = changes.email {
        contact.email = email;
    }
    if let Some(Some(status)) = changes.status {
        contact.status = status;
    }
    if let Some(phone) = changes.phone {
        contact.phone = phone;
    }
    if let Some(company) = changes.company {
        contact.company = company;
    }
    if let Some(title) = changes.title {
        contact.title = title;
    }
    if let Some(notes) = changes.notes {
        contact.notes = notes;
    }

    // never move backwards, even if the wall clock does
    contact.updated_at = Utc::now().max(contact.updated_at);

    Some(contact.clone())
}

/// Removes a contact together with all of its activities.
pub async fn delete_contact(db: &Database, id: &str) -> bool {
    let mut contacts = db.contacts.lock().await;
    let mut activities = db.activities.lock().await;

    if contacts.remove(id).is_none() {
        return false;
    }

    let before = activities.len();
    activities.retain(|_, activity| activity.contact_id != id);
    debug!(
        "Deleted contact {} and {} of its activities",
        id,
        before - activities.len()
    );

    true
}
