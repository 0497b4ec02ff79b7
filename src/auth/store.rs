use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    Free,
    Premium,
    Pro,
}

/// A registered account. The argon2 hash never leaves the process.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub email: String, // stored lowercased
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub subscription: SubscriptionTier,
    pub daily_uploads: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl User {
    pub fn new(email: String, password_hash: String, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            name,
            subscription: SubscriptionTier::Free,
            daily_uploads: 0,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("email already registered")]
pub struct EmailTaken;

/// Account persistence seam. Lookups treat email case-insensitively; `insert`
/// is the uniqueness point and must be atomic with respect to concurrent
/// registrations of the same email.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, user: User) -> Result<(), EmailTaken>;
    async fn find_by_email(&self, email: &str) -> Option<User>;
    async fn get(&self, id: Uuid) -> Option<User>;
    /// Bump the owner's daily upload counter. No reset cadence exists yet.
    async fn record_upload(&self, id: Uuid);
}

#[derive(Default)]
pub struct InMemoryUserStore {
    inner: RwLock<UserTable>,
}

#[derive(Default)]
struct UserTable {
    by_id: HashMap<Uuid, User>,
    by_email: HashMap<String, Uuid>,
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, user: User) -> Result<(), EmailTaken> {
        let email_key = user.email.to_lowercase();
        let mut table = self.inner.write().await;
        // Check-and-insert under one write lock: two racing registrations of
        // the same email see exactly one success.
        if table.by_email.contains_key(&email_key) {
            return Err(EmailTaken);
        }
        table.by_email.insert(email_key, user.id);
        table.by_id.insert(user.id, user);
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Option<User> {
        let table = self.inner.read().await;
        let id = table.by_email.get(&email.to_lowercase())?;
        table.by_id.get(id).cloned()
    }

    async fn get(&self, id: Uuid) -> Option<User> {
        self.inner.read().await.by_id.get(&id).cloned()
    }

    async fn record_upload(&self, id: Uuid) {
        let mut table = self.inner.write().await;
        if let Some(user) = table.by_id.get_mut(&id) {
            user.daily_uploads += 1;
        }
    }
}
