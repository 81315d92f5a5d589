//! Postgres-backed conversation store.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::{PgPool, PgPoolOptions};
use uuid::Uuid;

use crate::error::{ChatError, Result};

use super::{ConversationStore, Message, MessageRole, Session};

/// Conversation store over a shared Postgres pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect a process-wide pool.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(std::time::Duration::from_secs(5))
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    /// Create the two tables if they do not exist yet. Messages cascade with
    /// their session.
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS sessions (
                id UUID PRIMARY KEY,
                title TEXT NOT NULL,
                user_id TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL,
                updated_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS messages (
                id UUID PRIMARY KEY,
                session_id UUID NOT NULL REFERENCES sessions(id) ON DELETE CASCADE,
                role TEXT NOT NULL,
                content TEXT NOT NULL,
                file_id TEXT,
                run_id TEXT,
                metadata JSONB,
                created_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_messages_session_created \
             ON messages (session_id, created_at)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    id: Uuid,
    title: String,
    user_id: String,
    created_at: chrono::DateTime<Utc>,
    updated_at: chrono::DateTime<Utc>,
}

impl From<SessionRow> for Session {
    fn from(row: SessionRow) -> Self {
        Session {
            id: row.id,
            title: row.title,
            user_id: row.user_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct MessageRow {
    id: Uuid,
    session_id: Uuid,
    role: String,
    content: String,
    file_id: Option<String>,
    run_id: Option<String>,
    metadata: Option<serde_json::Value>,
    created_at: chrono::DateTime<Utc>,
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Message {
            id: row.id,
            session_id: row.session_id,
            role: row.role,
            content: row.content,
            file_id: row.file_id,
            run_id: row.run_id,
            metadata: row.metadata,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl ConversationStore for PgStore {
    async fn create_session(&self, title: &str, user_id: &str) -> Result<Session> {
        let now = Utc::now();
        let row: SessionRow = sqlx::query_as(
            "INSERT INTO sessions (id, title, user_id, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $4) \
             RETURNING id, title, user_id, created_at, updated_at",
        )
        .bind(Uuid::new_v4())
        .bind(title)
        .bind(user_id)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn list_sessions(&self, user_id: Option<&str>) -> Result<Vec<Session>> {
        let rows: Vec<SessionRow> = match user_id {
            Some(user_id) => {
                sqlx::query_as(
                    "SELECT id, title, user_id, created_at, updated_at FROM sessions \
                     WHERE user_id = $1 ORDER BY created_at",
                )
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as(
                    "SELECT id, title, user_id, created_at, updated_at FROM sessions \
                     ORDER BY created_at",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_session(&self, id: Uuid) -> Result<Option<Session>> {
        let row: Option<SessionRow> = sqlx::query_as(
            "SELECT id, title, user_id, created_at, updated_at FROM sessions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Into::into))
    }

    async fn append_message(
        &self,
        session_id: Uuid,
        role: MessageRole,
        content: &str,
    ) -> Result<Message> {
        let now = Utc::now();

        // Touching updated_at doubles as the existence check.
        let touched = sqlx::query("UPDATE sessions SET updated_at = $1 WHERE id = $2")
            .bind(now)
            .bind(session_id)
            .execute(&self.pool)
            .await?;
        if touched.rows_affected() == 0 {
            return Err(ChatError::SessionNotFound(session_id));
        }

        let row: MessageRow = sqlx::query_as(
            "INSERT INTO messages (id, session_id, role, content, created_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, session_id, role, content, file_id, run_id, metadata, created_at",
        )
        .bind(Uuid::new_v4())
        .bind(session_id)
        .bind(role.to_string())
        .bind(content)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn transcript(&self, session_id: Uuid) -> Result<Vec<Message>> {
        let rows: Vec<MessageRow> = sqlx::query_as(
            "SELECT id, session_id, role, content, file_id, run_id, metadata, created_at \
             FROM messages WHERE session_id = $1 ORDER BY created_at",
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
