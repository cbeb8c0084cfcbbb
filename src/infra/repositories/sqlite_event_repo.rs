use crate::domain::{models::event::Event, ports::EventRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub(crate) fn bucket_column(status: &str) -> &'static str {
    match status {
        "accepted" => "accepted_count",
        "declined" => "declined_count",
        "maybe" => "maybe_count",
        _ => "pending_count",
    }
}

pub struct SqliteEventRepo {
    pool: SqlitePool,
}

impl SqliteEventRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for SqliteEventRepo {
    async fn create(&self, event: &Event) -> Result<Event, AppError> {
        sqlx::query_as::<_, Event>(
            "INSERT INTO events (id, user_id, title, description, date, location, max_guests, status, guest_count, accepted_count, pending_count, declined_count, maybe_count, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
            .bind(&event.id)
            .bind(&event.user_id)
            .bind(&event.title)
            .bind(&event.description)
            .bind(event.date)
            .bind(&event.location)
            .bind(event.max_guests)
            .bind(&event.status)
            .bind(event.guest_count)
            .bind(event.accepted_count)
            .bind(event.pending_count)
            .bind(event.declined_count)
            .bind(event.maybe_count)
            .bind(event.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, user_id: &str, id: &str) -> Result<Option<Event>, AppError> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE user_id = ? AND id = ?")
            .bind(user_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_public(&self, id: &str) -> Result<Option<Event>, AppError> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, user_id: &str) -> Result<Vec<Event>, AppError> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE user_id = ? ORDER BY date ASC")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, event: &Event) -> Result<Event, AppError> {
        sqlx::query_as::<_, Event>(
            "UPDATE events SET title=?, description=?, date=?, location=?, max_guests=?, status=? WHERE id=? AND user_id=? RETURNING *"
        )
            .bind(&event.title)
            .bind(&event.description)
            .bind(event.date)
            .bind(&event.location)
            .bind(event.max_guests)
            .bind(&event.status)
            .bind(&event.id)
            .bind(&event.user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, user_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM events WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Event not found".into()));
        }
        Ok(())
    }

    async fn adjust_counts(&self, event_id: &str, status: &str, delta: i32) -> Result<(), AppError> {
        let bucket = bucket_column(status);
        // One atomic UPDATE, so concurrent adjustments cannot lose
        // increments; MAX clamps every counter at zero.
        let sql = format!(
            "UPDATE events SET guest_count = MAX(guest_count + ?1, 0), {bucket} = MAX({bucket} + ?1, 0) WHERE id = ?2"
        );
        let result = sqlx::query(&sql)
            .bind(delta)
            .bind(event_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Event not found".into()));
        }
        Ok(())
    }
}
