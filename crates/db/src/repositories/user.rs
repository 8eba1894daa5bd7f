use crate::models::DbUser;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn create_user(pool: &Pool<Postgres>, name_kor: &str) -> Result<DbUser> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (name_kor)
        VALUES ($1)
        RETURNING user_id, name_kor
        "#,
    )
    .bind(name_kor)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

pub async fn get_user_by_id(pool: &Pool<Postgres>, id: i32) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT user_id, name_kor
        FROM users
        WHERE user_id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
