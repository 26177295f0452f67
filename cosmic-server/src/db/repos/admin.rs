//! The single admin account
//!
//! Argon2 hashing and verification run on the blocking pool.

use sqlx::SqlitePool;
use tokio::task;

use super::DbError;
use crate::auth::{hash_password, verify_password};

pub struct AdminRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AdminRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn exists(&self) -> Result<bool, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM admin_users")
            .fetch_one(self.pool)
            .await?;
        Ok(count > 0)
    }

    /// Store a fresh hash for the account, creating it if needed.
    pub async fn set_credentials(&self, username: &str, password: &str) -> Result<(), DbError> {
        let password = password.to_owned();
        let password_hash = task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| DbError::Credential(format!("hash task failed: {e}")))?
            .map_err(|e| DbError::Credential(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO admin_users (id, username, password_hash)
            VALUES (1, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                username = excluded.username,
                password_hash = excluded.password_hash
            "#,
        )
        .bind(username)
        .bind(&password_hash)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Whether `password` matches the stored admin hash.
    pub async fn verify(&self, password: &str) -> Result<bool, DbError> {
        let hashes: Vec<(String,)> = sqlx::query_as("SELECT password_hash FROM admin_users")
            .fetch_all(self.pool)
            .await?;

        if hashes.is_empty() {
            tracing::warn!("login attempted with no admin account seeded");
            return Ok(false);
        }

        let password = password.to_owned();
        task::spawn_blocking(move || {
            hashes
                .iter()
                .any(|(hash,)| verify_password(&password, hash))
        })
        .await
        .map_err(|e| DbError::Credential(format!("verify task failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::test_support::seeded_pool;

    #[tokio::test]
    async fn set_then_verify() {
        let pool = seeded_pool().await;
        let repo = AdminRepo::new(&pool);

        assert!(!repo.exists().await.unwrap());
        assert!(!repo.verify("Admin@12").await.unwrap());

        repo.set_credentials("admin", "Admin@12").await.unwrap();
        assert!(repo.exists().await.unwrap());
        assert!(repo.verify("Admin@12").await.unwrap());
        assert!(!repo.verify("admin@12").await.unwrap());
    }

    #[tokio::test]
    async fn reset_replaces_the_hash() {
        let pool = seeded_pool().await;
        let repo = AdminRepo::new(&pool);

        repo.set_credentials("admin", "old-secret").await.unwrap();
        repo.set_credentials("admin", "new-secret").await.unwrap();

        assert!(repo.verify("new-secret").await.unwrap());
        assert!(!repo.verify("old-secret").await.unwrap());

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM admin_users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn stored_hash_is_salted_phc() {
        let pool = seeded_pool().await;
        AdminRepo::new(&pool).set_credentials("admin", "Admin@12").await.unwrap();

        let (hash,): (String,) = sqlx::query_as("SELECT password_hash FROM admin_users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("Admin@12"));
    }
}
