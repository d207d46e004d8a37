use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl User {
    /// Insert a new user row. The password is stored exactly as received;
    /// username uniqueness is not enforced by the schema.
    pub async fn create(
        db: &PgPool,
        id: Uuid,
        username: &str,
        password: &str,
    ) -> sqlx::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, password)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(id)
        .bind(username)
        .bind(password)
        .execute(db)
        .await?;
        Ok(())
    }

    /// Find a user matching the exact username and password pair.
    pub async fn find_by_credentials(
        db: &PgPool,
        username: &str,
        password: &str,
    ) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password, created_at, updated_at
            FROM users
            WHERE username = $1 AND password = $2
            LIMIT 1
            "#,
        )
        .bind(username)
        .bind(password)
        .fetch_optional(db)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_never_serialized() {
        let user = User {
            id: Uuid::new_v4(),
            username: "alice".into(),
            password: "secret".into(),
            created_at: OffsetDateTime::now_utc(),
            updated_at: OffsetDateTime::now_utc(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("alice"));
        assert!(!json.contains("secret"));
        assert!(!json.contains("password"));
    }
}
