//! Organization and membership rows.

use identity::{Membership, MembershipRole, Organization};
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Look up `user_id`'s membership in `organization_uuid`, joined with the
/// organization row.
pub async fn membership(
    pool: &PgPool,
    user_id: Uuid,
    organization_uuid: Uuid,
) -> Result<Option<Membership>, sqlx::Error> {
    let row = sqlx::query(
        r"SELECT o.uuid, o.name, o.logo_url, m.role
          FROM memberships m
          JOIN organizations o ON o.uuid = m.organization_uuid
          WHERE m.user_id = $1 AND m.organization_uuid = $2",
    )
    .bind(user_id)
    .bind(organization_uuid)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| Membership {
        organization: Organization {
            uuid: r.get::<Uuid, _>("uuid").to_string(),
            name: r.get("name"),
            logo_url: r.get("logo_url"),
        },
        role: MembershipRole::parse(r.get::<&str, _>("role")),
    }))
}

/// Create an organization owned by `owner_id` and return its uuid.
pub async fn create_owned(pool: &PgPool, owner_id: Uuid, name: &str) -> Result<Uuid, sqlx::Error> {
    let organization_uuid = Uuid::new_v4();
    let mut tx = pool.begin().await?;
    sqlx::query("INSERT INTO organizations (uuid, name) VALUES ($1, $2)")
        .bind(organization_uuid)
        .bind(name)
        .execute(&mut *tx)
        .await?;
    sqlx::query("INSERT INTO memberships (user_id, organization_uuid, role) VALUES ($1, $2, 'owner')")
        .bind(owner_id)
        .bind(organization_uuid)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(organization_uuid)
}
