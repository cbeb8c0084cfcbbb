use crate::domain::{models::contact::Contact, ports::ContactRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteContactRepo {
    pool: SqlitePool,
}

impl SqliteContactRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for SqliteContactRepo {
    async fn create(&self, contact: &Contact) -> Result<Contact, AppError> {
        sqlx::query_as::<_, Contact>(
            "INSERT INTO contacts (id, user_id, first_name, last_name, email, phone, dietary_restrictions, notes, tags, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
            .bind(&contact.id)
            .bind(&contact.user_id)
            .bind(&contact.first_name)
            .bind(&contact.last_name)
            .bind(&contact.email)
            .bind(&contact.phone)
            .bind(&contact.dietary_restrictions)
            .bind(&contact.notes)
            .bind(&contact.tags)
            .bind(contact.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, user_id: &str, id: &str) -> Result<Option<Contact>, AppError> {
        sqlx::query_as::<_, Contact>("SELECT * FROM contacts WHERE user_id = ? AND id = ?")
            .bind(user_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, user_id: &str) -> Result<Vec<Contact>, AppError> {
        sqlx::query_as::<_, Contact>("SELECT * FROM contacts WHERE user_id = ? ORDER BY last_name, first_name")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, contact: &Contact) -> Result<Contact, AppError> {
        sqlx::query_as::<_, Contact>(
            "UPDATE contacts SET first_name=?, last_name=?, email=?, phone=?, dietary_restrictions=?, notes=?, tags=? WHERE id=? AND user_id=? RETURNING *"
        )
            .bind(&contact.first_name)
            .bind(&contact.last_name)
            .bind(&contact.email)
            .bind(&contact.phone)
            .bind(&contact.dietary_restrictions)
            .bind(&contact.notes)
            .bind(&contact.tags)
            .bind(&contact.id)
            .bind(&contact.user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, user_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Contact not found".into()));
        }
        Ok(())
    }
}
