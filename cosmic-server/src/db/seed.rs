//! First-start rows: the admin account and both singletons
//!
//! Every insert is `INSERT OR IGNORE` on a fixed id, so seeding an
//! existing database leaves its rows untouched.

use cosmic_core::config::AdminSection;
use cosmic_core::models::{encode_services, DEFAULT_SERVICES};
use sqlx::SqlitePool;

use super::repos::{AdminRepo, DbError};

pub const SEED_BUSINESS_NAME: &str = "Cosmic Astrology";
pub const SEED_EMAIL: &str = "info@cosmicastrology.com";
pub const SEED_WHATSAPP: &str = "+91 98765 43210";

/// Seed everything a fresh database needs.
pub async fn run(pool: &SqlitePool, admin: &AdminSection) -> Result<(), DbError> {
    seed_admin(pool, admin).await?;
    seed_singletons(pool).await?;
    Ok(())
}

/// Create the admin account unless one exists.
pub async fn seed_admin(pool: &SqlitePool, admin: &AdminSection) -> Result<(), DbError> {
    let repo = AdminRepo::new(pool);
    if repo.exists().await? {
        return Ok(());
    }

    if admin.password == cosmic_core::config::DEFAULT_ADMIN_PASSWORD {
        tracing::warn!("ADMIN_PASSWORD not set. Seeding the default admin password. Set ADMIN_PASSWORD in production.");
    }

    repo.set_credentials(&admin.username, &admin.password).await?;
    tracing::info!(username = %admin.username, "seeded admin account");
    Ok(())
}

/// Create the business-info and chatbot-config rows.
pub async fn seed_singletons(pool: &SqlitePool) -> Result<(), DbError> {
    let inserted = sqlx::query(
        r#"
        INSERT OR IGNORE INTO business_info (id, business_name, email_address, whatsapp_number)
        VALUES (1, ?, ?, ?)
        "#,
    )
    .bind(SEED_BUSINESS_NAME)
    .bind(SEED_EMAIL)
    .bind(SEED_WHATSAPP)
    .execute(pool)
    .await?
    .rows_affected();

    if inserted > 0 {
        tracing::info!("seeded business info");
    }

    let inserted = sqlx::query("INSERT OR IGNORE INTO chatbot_config (id, services) VALUES (1, ?)")
        .bind(encode_services(&DEFAULT_SERVICES))
        .execute(pool)
        .await?
        .rows_affected();

    if inserted > 0 {
        tracing::info!("seeded chatbot config");
    }

    Ok(())
}
