use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// A meal row. `meal_date` is kept as the string the client sent;
/// `created_at`/`updated_at` are store-managed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Meal {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub meal_date: String,
    pub on_diet: bool,
    pub user_id: Uuid,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Meal {
    pub async fn insert(
        db: &PgPool,
        id: Uuid,
        user_id: Uuid,
        name: &str,
        description: &str,
        meal_date: &str,
        on_diet: bool,
    ) -> sqlx::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO meals (id, name, description, meal_date, on_diet, user_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(meal_date)
        .bind(on_diet)
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(())
    }

    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> sqlx::Result<Vec<Meal>> {
        sqlx::query_as::<_, Meal>(
            r#"
            SELECT id, name, description, meal_date, on_diet, user_id, created_at, updated_at
            FROM meals
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }

    /// A meal owned by another user is indistinguishable from a missing one.
    pub async fn find_by_id(db: &PgPool, user_id: Uuid, id: Uuid) -> sqlx::Result<Option<Meal>> {
        sqlx::query_as::<_, Meal>(
            r#"
            SELECT id, name, description, meal_date, on_diet, user_id, created_at, updated_at
            FROM meals
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await
    }

    /// Returns the number of rows matched; zero when the id does not exist
    /// or belongs to another user.
    pub async fn update(
        db: &PgPool,
        user_id: Uuid,
        id: Uuid,
        name: &str,
        description: &str,
        meal_date: &str,
        on_diet: bool,
    ) -> sqlx::Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE meals
            SET name = $1, description = $2, meal_date = $3, on_diet = $4, updated_at = now()
            WHERE id = $5 AND user_id = $6
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(meal_date)
        .bind(on_diet)
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }

    /// Returns the number of rows deleted, with the same zero-row semantics
    /// as [`Meal::update`].
    pub async fn delete(db: &PgPool, user_id: Uuid, id: Uuid) -> sqlx::Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM meals
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }
}
