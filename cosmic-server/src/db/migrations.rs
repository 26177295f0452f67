//! Schema for the eight record types
//!
//! Every statement is `CREATE TABLE IF NOT EXISTS`, so running the
//! migrations on each startup is safe.

use sqlx::SqlitePool;

const SCHEMA: [(&str, &str); 8] = [
    (
        "hero_slides",
        r#"
        CREATE TABLE IF NOT EXISTS hero_slides (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT,
            image TEXT NOT NULL,
            display_order INTEGER NOT NULL DEFAULT 0,
            is_active BOOLEAN NOT NULL DEFAULT 1,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ),
    (
        "gallery_slides",
        r#"
        CREATE TABLE IF NOT EXISTS gallery_slides (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            image TEXT NOT NULL,
            display_order INTEGER NOT NULL DEFAULT 0,
            is_active BOOLEAN NOT NULL DEFAULT 1,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ),
    (
        "business_info",
        r#"
        CREATE TABLE IF NOT EXISTS business_info (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            business_name TEXT,
            email_address TEXT,
            whatsapp_number TEXT,
            business_address TEXT,
            google_maps_url TEXT,
            google_review_url TEXT,
            facebook_url TEXT,
            instagram_url TEXT,
            twitter_url TEXT,
            youtube_url TEXT,
            linkedin_url TEXT,
            hours_weekday TEXT,
            hours_sunday TEXT,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ),
    (
        "chatbot_config",
        r#"
        CREATE TABLE IF NOT EXISTS chatbot_config (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            services TEXT,
            google_maps_url TEXT,
            google_review_url TEXT,
            facebook_url TEXT,
            instagram_url TEXT,
            twitter_url TEXT,
            youtube_url TEXT,
            linkedin_url TEXT,
            hours_weekday TEXT,
            hours_sunday TEXT,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ),
    (
        "bookings",
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            phone TEXT NOT NULL,
            email TEXT,
            dob TEXT,
            service TEXT NOT NULL,
            booking_date DATE NOT NULL,
            booking_time TIME NOT NULL,
            status TEXT NOT NULL DEFAULT 'pending',
            notes TEXT,
            source TEXT NOT NULL DEFAULT 'Website',
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ),
    (
        "contact_messages",
        r#"
        CREATE TABLE IF NOT EXISTS contact_messages (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT,
            subject TEXT,
            message TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'new',
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ),
    (
        "testimonials",
        r#"
        CREATE TABLE IF NOT EXISTS testimonials (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            rating INTEGER NOT NULL DEFAULT 5,
            review_text TEXT NOT NULL,
            google_account_url TEXT,
            google_place_id TEXT,
            is_selected BOOLEAN NOT NULL DEFAULT 0,
            display_order INTEGER NOT NULL DEFAULT 0,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ),
    (
        "admin_users",
        r#"
        CREATE TABLE IF NOT EXISTS admin_users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT UNIQUE NOT NULL,
            password_hash TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ),
];

/// Create all tables that do not exist yet.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running schema migrations...");

    for (table, ddl) in SCHEMA {
        sqlx::query(ddl).execute(pool).await?;
        tracing::debug!(table, "table ready");
    }

    tracing::info!("Schema migrations complete");
    Ok(())
}
