pub mod activities;
pub mod contacts;
pub mod metrics;
pub mod users;

use shared_types::{Activity, Contact, User};
use std::collections::HashMap;
use tokio::sync::Mutex;

/// One entity family, keyed by id.
pub type Collection<T> = Mutex<HashMap<String, T>>;

/// In-memory store owning every CRM entity for the lifetime of the process.
///
/// Each family has its own lock. Operations spanning two families (cascade delete,
/// metrics) always lock `contacts` before `activities`.
#[derive(Default)]
pub struct Database {
    pub(crate) users: Collection<User>,
    pub(crate) contacts: Collection<Contact>,
    pub(crate) activities: Collection<Activity>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }
}

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
