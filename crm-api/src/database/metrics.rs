use crate::database::Database;
use chrono::{DateTime, Local, TimeZone};
use shared_types::{Activity, Contact, DashboardMetrics};

const PROSPECT_STATUS: &str = "prospect";
const ACTIVE_STATUS: &str = "active";

pub async fn get_metrics(db: &Database) -> DashboardMetrics {
    let contacts = db.contacts.lock().await;
    let activities = db.activities.lock().await;

    compute_metrics(contacts.values(), activities.values(), Local::now())
}

/// Aggregates the dashboard numbers. "Today" is the calendar day of `now` in its own
/// time zone, i.e. `[midnight, next midnight)`.
pub fn compute_metrics<'a, Tz: TimeZone>(
    contacts: impl IntoIterator<Item = &'a Contact>,
    activities: impl IntoIterator<Item = &'a Activity>,
    now: DateTime<Tz>,
) -> DashboardMetrics {
    let mut total_contacts = 0;
    let mut active_leads = 0;
    let mut active_contacts = 0;

    for contact in contacts {
        total_contacts += 1;
        match contact.status.as_str() {
            PROSPECT_STATUS => active_leads += 1,
            ACTIVE_STATUS => active_contacts += 1,
            _ => {}
        }
    }

    let zone = now.timezone();
    let today = now.date_naive();
    let today_activities = activities
        .into_iter()
        .filter(|a| a.created_at.with_timezone(&zone).date_naive() == today)
        .count();

    DashboardMetrics {
        total_contacts,
        active_leads,
        today_activities,
        conversion_rate: conversion_rate(active_contacts, total_contacts),
    }
}

fn conversion_rate(active: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (active as f64 / total as f64 * 1000.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{activities, contacts};
    use chrono::{Duration, FixedOffset, NaiveDate, Utc};
    use shared_types::{CreateActivityRequest, CreateContactRequest};

    fn contact_with_status(status: &str) -> Contact {
        let now = Utc::now();
        Contact {
            id: status.to_string(),
            name: "Someone".to_string(),
            email: "someone@example.com".to_string(),
            phone: None,
            company: None,
            title: None,
            status: status.to_string(),
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn activity_created_at<Tz: TimeZone>(created_at: DateTime<Tz>) -> Activity {
        Activity {
            id: "a1".to_string(),
            contact_id: "c1".to_string(),
            activity_type: "call".to_string(),
            title: "Call".to_string(),
            description: None,
            scheduled_at: None,
            completed_at: None,
            created_at: created_at.with_timezone(&Utc),
        }
    }

    #[tokio::test]
    async fn test_empty_database_reports_zeroes() {
        let db = Database::new();
        let metrics = get_metrics(&db).await;

        assert_eq!(metrics, DashboardMetrics::default());
        assert_eq!(metrics.conversion_rate, 0.0);
    }

    #[tokio::test]
    async fn test_status_counts_and_conversion_rate() {
        let db = Database::new();
        for (i, status) in ["prospect", "prospect", "active", "active"].iter().enumerate() {
            let request = CreateContactRequest {
                name: format!("Contact {i}"),
                email: format!("contact{i}@example.com"),
                status: Some(status.to_string()),
                ..Default::default()
            };
            contacts::create_contact(&db, request).await;
        }

        let metrics = get_metrics(&db).await;
        assert_eq!(metrics.total_contacts, 4);
        assert_eq!(metrics.active_leads, 2);
        assert_eq!(metrics.conversion_rate, 50.0);
    }

    #[tokio::test]
    async fn test_new_activity_counts_as_today() {
        let db = Database::new();
        let request = CreateActivityRequest {
            contact_id: "c1".to_string(),
            activity_type: "email".to_string(),
            title: "Sent pricing".to_string(),
            ..Default::default()
        };
        activities::create_activity(&db, request).await;

        assert_eq!(get_metrics(&db).await.today_activities, 1);
    }

    #[test]
    fn test_conversion_rate_rounds_to_one_decimal() {
        let contacts = vec![
            contact_with_status("active"),
            contact_with_status("prospect"),
            contact_with_status("lost"),
        ];
        let metrics = compute_metrics(&contacts, [], Utc::now());

        assert_eq!(metrics.total_contacts, 3);
        assert_eq!(metrics.active_leads, 1);
        assert_eq!(metrics.conversion_rate, 33.3);
    }

    #[test]
    fn test_today_window_is_half_open_at_local_midnight() {
        let zone = FixedOffset::east_opt(2 * 3600).unwrap();
        let midnight = zone
            .from_local_datetime(
                &NaiveDate::from_ymd_opt(2026, 3, 10)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
            )
            .unwrap();
        let now = midnight + Duration::hours(15);

        let activities = vec![
            activity_created_at(midnight),
            activity_created_at(midnight - Duration::seconds(1)),
            activity_created_at(midnight + Duration::days(1) - Duration::seconds(1)),
            activity_created_at(midnight + Duration::days(1)),
        ];
        let metrics = compute_metrics([], &activities, now);

        assert_eq!(metrics.today_activities, 2);
    }

    #[test]
    fn test_today_window_uses_local_time() {
        let now = Local::now();
        let midnight = Local
            .from_local_datetime(&now.date_naive().and_hms_opt(0, 0, 0).unwrap())
            .earliest()
            .unwrap();
        let yesterday_end = midnight - Duration::seconds(1);

        let counted = compute_metrics([], &[activity_created_at(midnight)], now);
        assert_eq!(counted.today_activities, 1);

        let skipped = compute_metrics([], &[activity_created_at(yesterday_end)], now);
        assert_eq!(skipped.today_activities, 0);
    }
}
