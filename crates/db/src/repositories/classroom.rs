use crate::models::DbClassroom;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn create_classroom(
    pool: &Pool<Postgres>,
    name: &str,
    classroom_type: &str,
    is_active: bool,
) -> Result<DbClassroom> {
    let classroom = sqlx::query_as::<_, DbClassroom>(
        r#"
        INSERT INTO classrooms (name, classroom_type, is_active)
        VALUES ($1, $2, $3)
        RETURNING classroom_id, name, classroom_type, is_active
        "#,
    )
    .bind(name)
    .bind(classroom_type)
    .bind(is_active)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Classroom created: id={}", classroom.classroom_id);
    Ok(classroom)
}

pub async fn get_classroom_by_id(pool: &Pool<Postgres>, id: i32) -> Result<Option<DbClassroom>> {
    let classroom = sqlx::query_as::<_, DbClassroom>(
        r#"
        SELECT classroom_id, name, classroom_type, is_active
        FROM classrooms
        WHERE classroom_id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if classroom.is_none() {
        tracing::debug!("Classroom not found: id={}", id);
    }

    Ok(classroom)
}
