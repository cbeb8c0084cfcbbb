use crate::domain::{
    models::{contact::Contact, guest::Guest, token::REASON_ALREADY_USED},
    ports::GuestRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Postgres, Transaction};

const INSERT_GUEST: &str =
    "INSERT INTO guests (id, event_id, contact_id, companion_of_guest_id, status, first_name, last_name, email, phone, dietary_restrictions, plus_one_type, plus_one_first_name, plus_one_last_name, plus_one_dietary_restrictions, event_specific_notes, invited_at, responded_at)
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
     RETURNING *";

pub struct PostgresGuestRepo {
    pool: PgPool,
}

impl PostgresGuestRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert_guest(tx: &mut Transaction<'_, Postgres>, guest: &Guest) -> Result<Guest, AppError> {
        sqlx::query_as::<_, Guest>(INSERT_GUEST)
            .bind(&guest.id)
            .bind(&guest.event_id)
            .bind(&guest.contact_id)
            .bind(&guest.companion_of_guest_id)
            .bind(&guest.status)
            .bind(&guest.first_name)
            .bind(&guest.last_name)
            .bind(&guest.email)
            .bind(&guest.phone)
            .bind(&guest.dietary_restrictions)
            .bind(&guest.plus_one_type)
            .bind(&guest.plus_one_first_name)
            .bind(&guest.plus_one_last_name)
            .bind(&guest.plus_one_dietary_restrictions)
            .bind(&guest.event_specific_notes)
            .bind(guest.invited_at)
            .bind(guest.responded_at)
            .fetch_one(&mut **tx)
            .await
            .map_err(AppError::Database)
    }
}

#[async_trait]
impl GuestRepository for PostgresGuestRepo {
    async fn create(&self, guest: &Guest) -> Result<Guest, AppError> {
        self.create_with_companion(guest, None).await
    }

    async fn create_with_companion(&self, primary: &Guest, companion: Option<&Guest>) -> Result<Guest, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        let created = Self::insert_guest(&mut tx, primary).await?;
        if let Some(companion) = companion {
            Self::insert_guest(&mut tx, companion).await?;
        }
        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Guest>, AppError> {
        sqlx::query_as::<_, Guest>("SELECT * FROM guests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_event_and_contact(&self, event_id: &str, contact_id: &str) -> Result<Option<Guest>, AppError> {
        sqlx::query_as::<_, Guest>("SELECT * FROM guests WHERE event_id = $1 AND contact_id = $2")
            .bind(event_id)
            .bind(contact_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_companion(&self, primary_guest_id: &str) -> Result<Option<Guest>, AppError> {
        sqlx::query_as::<_, Guest>("SELECT * FROM guests WHERE companion_of_guest_id = $1")
            .bind(primary_guest_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Guest>, AppError> {
        sqlx::query_as::<_, Guest>("SELECT * FROM guests WHERE event_id = $1 ORDER BY invited_at DESC")
            .bind(event_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, guest: &Guest) -> Result<Guest, AppError> {
        sqlx::query_as::<_, Guest>(
            "UPDATE guests SET status=$1, first_name=$2, last_name=$3, email=$4, phone=$5, dietary_restrictions=$6, plus_one_type=$7, plus_one_first_name=$8, plus_one_last_name=$9, plus_one_dietary_restrictions=$10, event_specific_notes=$11, responded_at=$12
             WHERE id=$13
             RETURNING *"
        )
            .bind(&guest.status)
            .bind(&guest.first_name)
            .bind(&guest.last_name)
            .bind(&guest.email)
            .bind(&guest.phone)
            .bind(&guest.dietary_restrictions)
            .bind(&guest.plus_one_type)
            .bind(&guest.plus_one_first_name)
            .bind(&guest.plus_one_last_name)
            .bind(&guest.plus_one_dietary_restrictions)
            .bind(&guest.event_specific_notes)
            .bind(guest.responded_at)
            .bind(&guest.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete_with_companion(&self, id: &str) -> Result<Vec<Guest>, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // Companions go first: deleting the primary fires the FK cascade,
        // which would remove them before RETURNING could report them.
        let mut deleted = sqlx::query_as::<_, Guest>("DELETE FROM guests WHERE companion_of_guest_id = $1 RETURNING *")
            .bind(id)
            .fetch_all(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        let primary = sqlx::query_as::<_, Guest>("DELETE FROM guests WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_all(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        if primary.is_empty() {
            return Err(AppError::NotFound("Guest not found".into()));
        }
        deleted.extend(primary);

        tx.commit().await.map_err(AppError::Database)?;
        Ok(deleted)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM guests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Guest not found".into()));
        }
        Ok(())
    }

    async fn apply_response(&self, guest: &Guest, contact: Option<&Contact>, token: &str) -> Result<Guest, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let burned = sqlx::query("UPDATE rsvp_tokens SET is_used = TRUE, used_at = $1 WHERE token = $2 AND is_used = FALSE")
            .bind(Utc::now())
            .bind(token)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        if burned.rows_affected() == 0 {
            return Err(AppError::TokenInvalid(REASON_ALREADY_USED.to_string()));
        }

        let updated = sqlx::query_as::<_, Guest>(
            "UPDATE guests SET status=$1, responded_at=$2, plus_one_type=$3, plus_one_first_name=$4, plus_one_last_name=$5, plus_one_dietary_restrictions=$6, event_specific_notes=$7, dietary_restrictions=$8
             WHERE id=$9
             RETURNING *"
        )
            .bind(&guest.status)
            .bind(guest.responded_at)
            .bind(&guest.plus_one_type)
            .bind(&guest.plus_one_first_name)
            .bind(&guest.plus_one_last_name)
            .bind(&guest.plus_one_dietary_restrictions)
            .bind(&guest.event_specific_notes)
            .bind(&guest.dietary_restrictions)
            .bind(&guest.id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        if let Some(contact) = contact {
            sqlx::query("UPDATE contacts SET dietary_restrictions = $1, notes = $2 WHERE id = $3")
                .bind(&contact.dietary_restrictions)
                .bind(&contact.notes)
                .bind(&contact.id)
                .execute(&mut *tx)
                .await
                .map_err(AppError::Database)?;
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(updated)
    }
}
