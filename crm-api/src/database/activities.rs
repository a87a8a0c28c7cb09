use crate::database::{new_id, Database};
use chrono::Utc;
use shared_types::{Activity, ActivityFilters, CreateActivityRequest};

/// Lists activities, newest first, optionally restricted to one contact.
pub async fn list_activities(db: &Database, filters: &ActivityFilters) -> Vec<Activity> {
    let contact_id = filters.contact_filter();

    let mut activities: Vec<Activity> = {
        let activities = db.activities.lock().await;
        activities
            .values()
            .filter(|a| contact_id.map_or(true, |id| a.contact_id == id))
            .cloned()
            .collect()
    };

    activities.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
    activities
}

/// Stores a new activity. The contact reference is checked by the caller.
pub async fn create_activity(db: &Database, request: CreateActivityRequest) -> Activity {
    let activity = Activity {
        id: new_id(),
        contact_id: request.contact_id,
        activity_type: request.activity_type,
        title: request.title,
        description: request.description,
        scheduled_at: request.scheduled_at,
        completed_at: request.completed_at,
        created_at: Utc::now(),
    };

    db.activities
        .lock()
        .await
        .insert(activity.id.clone(), activity.clone());
    activity
}
