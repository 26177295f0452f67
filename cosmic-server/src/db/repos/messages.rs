//! Contact-page inquiries

use cosmic_core::models::{MessageStatus, NewContactMessage};
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::{DbError, ADMIN_LIST_CAP};

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub status: String,
    pub created_at: String,
}

pub struct MessageRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MessageRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, message: &NewContactMessage) -> Result<i64, DbError> {
        let id = sqlx::query(
            r#"
            INSERT INTO contact_messages (name, email, phone, subject, message)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.phone)
        .bind(&message.subject)
        .bind(&message.message)
        .execute(self.pool)
        .await?
        .last_insert_rowid();

        Ok(id)
    }

    /// Most recent inquiries first, at most [`ADMIN_LIST_CAP`] rows.
    pub async fn list_recent(&self) -> Result<Vec<ContactMessage>, DbError> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            r#"
            SELECT id, name, email, phone, subject, message, status, created_at
            FROM contact_messages
            ORDER BY created_at DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(ADMIN_LIST_CAP)
        .fetch_all(self.pool)
        .await?;

        Ok(messages)
    }

    pub async fn set_status(&self, id: i64, status: MessageStatus) -> Result<(), DbError> {
        let affected = sqlx::query("UPDATE contact_messages SET status = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(id)
            .execute(self.pool)
            .await?
            .rows_affected();

        if affected == 0 {
            return Err(DbError::not_found("message", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::test_support::seeded_pool;
    use crate::db::BusinessInfoRepo;
    use cosmic_core::models::{ContactDraft, DEFAULT_SUBJECT};

    fn draft(name: &str, email: &str, message: &str) -> ContactDraft {
        ContactDraft {
            name: Some(name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn fresh_seed_then_contact_message() {
        let pool = seeded_pool().await;

        let info = BusinessInfoRepo::new(&pool).get().await.unwrap();
        assert_eq!(info.business_name.as_deref(), Some("Cosmic Astrology"));
        assert_eq!(info.email_address.as_deref(), Some("info@cosmicastrology.com"));

        let repo = MessageRepo::new(&pool);
        let new = draft("A", "a@x.com", "hi").normalize().unwrap();
        let id = repo.create(&new).await.unwrap();
        assert!(id >= 1);

        let listed = repo.list_recent().await.unwrap();
        let row = listed.iter().find(|m| m.id == id).expect("message listed");
        assert_eq!(row.status, "new");
        assert_eq!(row.subject.as_deref(), Some(DEFAULT_SUBJECT));
        assert_eq!(row.phone.as_deref(), Some(""));
        assert_eq!(row.message, "hi");
    }

    #[tokio::test]
    async fn status_update_and_missing_id() {
        let pool = seeded_pool().await;
        let repo = MessageRepo::new(&pool);
        let id = repo
            .create(&draft("B", "b@x.com", "call me").normalize().unwrap())
            .await
            .unwrap();

        repo.set_status(id, MessageStatus::Replied).await.unwrap();
        assert_eq!(repo.list_recent().await.unwrap()[0].status, "replied");

        let err = repo.set_status(999, MessageStatus::Read).await.unwrap_err();
        assert_eq!(err.to_string(), "message 999 not found");
    }
}
