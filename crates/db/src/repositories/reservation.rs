use crate::models::DbReservation;
use chrono::NaiveDateTime;
use eyre::{Result, eyre};
use sqlx::{Pool, Postgres};

/// Reservation columns joined with the classroom and user they reference.
const SELECT_RESERVATION: &str = r#"
    SELECT r.reservation_id,
           c.classroom_id,
           c.name AS classroom_name,
           c.classroom_type,
           c.is_active AS classroom_is_active,
           u.user_id,
           u.name_kor AS user_name_kor,
           r.start_at,
           r.end_at
    FROM reservations r
    LEFT JOIN classrooms c ON c.classroom_id = r.classroom_id
    LEFT JOIN users u ON u.user_id = r.user_id
"#;

/// Reservations whose start lies in `[start, end]`.
pub async fn find_by_date_range(
    pool: &Pool<Postgres>,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<Vec<DbReservation>> {
    let sql = format!(
        "{} WHERE r.start_at BETWEEN $1 AND $2 ORDER BY r.start_at ASC",
        SELECT_RESERVATION
    );

    let reservations = sqlx::query_as::<_, DbReservation>(&sql)
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await?;

    Ok(reservations)
}

/// Reservations held by `user_id` whose start lies in `[start, end)`.
pub async fn find_by_user_and_date(
    pool: &Pool<Postgres>,
    user_id: i32,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<Vec<DbReservation>> {
    let sql = format!(
        "{} WHERE r.user_id = $1 AND r.start_at >= $2 AND r.start_at < $3",
        SELECT_RESERVATION
    );

    let reservations = sqlx::query_as::<_, DbReservation>(&sql)
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await?;

    Ok(reservations)
}

/// Reservations on `classroom_id` overlapping `[start, end)`.
pub async fn find_conflicting_reservations(
    pool: &Pool<Postgres>,
    classroom_id: i32,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<Vec<DbReservation>> {
    let sql = format!(
        "{} WHERE r.classroom_id = $1 AND r.start_at < $3 AND $2 < r.end_at",
        SELECT_RESERVATION
    );

    let reservations = sqlx::query_as::<_, DbReservation>(&sql)
        .bind(classroom_id)
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await?;

    Ok(reservations)
}

pub async fn get_reservation_by_id(
    pool: &Pool<Postgres>,
    id: i32,
) -> Result<Option<DbReservation>> {
    let sql = format!("{} WHERE r.reservation_id = $1", SELECT_RESERVATION);

    let reservation = sqlx::query_as::<_, DbReservation>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(reservation)
}

pub async fn create_reservation(
    pool: &Pool<Postgres>,
    classroom_id: i32,
    user_id: i32,
    start_at: NaiveDateTime,
    end_at: NaiveDateTime,
) -> Result<DbReservation> {
    tracing::debug!(
        "Creating reservation: classroom={}, user={}, {} - {}",
        classroom_id,
        user_id,
        start_at,
        end_at
    );

    let id = sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO reservations (classroom_id, user_id, start_at, end_at)
        VALUES ($1, $2, $3, $4)
        RETURNING reservation_id
        "#,
    )
    .bind(classroom_id)
    .bind(user_id)
    .bind(start_at)
    .bind(end_at)
    .fetch_one(pool)
    .await?;

    get_reservation_by_id(pool, id)
        .await?
        .ok_or_else(|| eyre!("Reservation {} vanished right after insert", id))
}

pub async fn delete_reservation(pool: &Pool<Postgres>, id: i32) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM reservations
        WHERE reservation_id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    tracing::debug!("Reservation deleted: id={}", id);
    Ok(())
}
