//! User collection operations.
//!
//! There is no HTTP surface for users; they exist as the advisory targets of
//! `createdBy` fields and as activity actors, seeded at startup.

use chrono::Utc;

use crate::models::{NewUser, User};

use super::MemStore;

impl MemStore {
    pub fn get_user(&self, id: i32) -> Option<User> {
        self.read().users.get(&id).cloned()
    }

    pub fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.read()
            .users
            .values()
            .find(|u| u.username == username)
            .cloned()
    }

    pub fn create_user(&self, input: NewUser) -> User {
        let mut inner = self.write();
        let user = User {
            id: inner.user_ids.next(),
            username: input.username,
            password: input.password,
            email: input.email,
            name: input.name,
            role: input.role.unwrap_or_else(|| "qa_engineer".to_string()),
            created_at: Utc::now(),
        };
        inner.users.insert(user.id, user.clone());
        user
    }
}
