use crate::database::{new_id, Database};
use shared_types::{CreateUserRequest, User};

pub async fn get_user(db: &Database, id: &str) -> Option<User> {
    db.users.lock().await.get(id).cloned()
}

pub async fn get_user_by_username(db: &Database, username: &str) -> Option<User> {
    let users = db.users.lock().await;
    users.values().find(|u| u.username == username).cloned()
}

/// Stores a new user. Username uniqueness is checked by the caller.
pub async fn create_user(db: &Database, request: CreateUserRequest) -> User {
    let user = User {
        id: new_id(),
        username: request.username,
        password: request.password,
    };

    db.users.lock().await.insert(user.id.clone(), user.clone());
    user
}
