//! User profile rows.

use identity::UserData;
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Fetch application-side profile data for a user.
pub async fn user_data_by_id(pool: &PgPool, user_id: Uuid) -> Result<Option<UserData>, sqlx::Error> {
    let row = sqlx::query("SELECT id, display_name, photo_url, onboarded FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|r| UserData {
        id: r.get::<Uuid, _>("id").to_string(),
        display_name: r.get("display_name"),
        photo_url: r.get("photo_url"),
        onboarded: r.get("onboarded"),
    }))
}

/// Insert or update a user by email and return its id.
///
/// An existing display name is kept when `display_name` is `None`.
pub async fn upsert_user_by_email(
    pool: &PgPool,
    email: &str,
    display_name: Option<&str>,
) -> Result<Uuid, sqlx::Error> {
    let row = sqlx::query(
        r"INSERT INTO users (id, email, display_name)
          VALUES ($1, $2, $3)
          ON CONFLICT (email) DO UPDATE
              SET display_name = COALESCE(EXCLUDED.display_name, users.display_name)
          RETURNING id",
    )
    .bind(Uuid::new_v4())
    .bind(email)
    .bind(display_name)
    .fetch_one(pool)
    .await?;
    Ok(row.get("id"))
}

/// Normalize an email address for lookup. Returns `None` for obviously
/// invalid input.
pub(crate) fn normalize_email(raw: &str) -> Option<String> {
    let email = raw.trim().to_ascii_lowercase();
    let (local, domain) = email.split_once('@')?;
    if local.is_empty() || domain.is_empty() || !domain.contains('.') || email.contains(char::is_whitespace) {
        return None;
    }
    Some(email)
}
