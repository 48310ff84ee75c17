//! PostgreSQL implementation of ConversationLog.
//!
//! Table: `messages (id, sender, content, is_error, created_at)`.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::conversation::{ConversationTurn, Exchange, Sender};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, TurnId};
use crate::ports::ConversationLog;

/// PostgreSQL-backed conversation log.
#[derive(Clone)]
pub struct PostgresConversationLog {
    pool: PgPool,
}

impl PostgresConversationLog {
    /// Creates a new PostgresConversationLog.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConversationLog for PostgresConversationLog {
    async fn recent(&self, limit: usize) -> Result<Vec<ConversationTurn>, DomainError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let rows = sqlx::query(
            r#"
            SELECT id, sender, content, is_error, created_at
            FROM messages
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::data_unavailable(format!("Failed to fetch messages: {}", e)))?;

        let mut turns = rows
            .iter()
            .map(row_to_turn)
            .collect::<Result<Vec<_>, _>>()?;
        turns.reverse();
        Ok(turns)
    }

    async fn append_exchange(&self, exchange: &Exchange) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::persistence(format!("Failed to start transaction: {}", e))
        })?;

        for turn in exchange.turns() {
            sqlx::query(
                r#"
                INSERT INTO messages (id, sender, content, is_error, created_at)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(turn.id.as_uuid())
            .bind(turn.sender.as_str())
            .bind(&turn.content)
            .bind(turn.is_error)
            .bind(turn.created_at.as_datetime())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::persistence(format!("Failed to insert message: {}", e)))?;
        }

        tx.commit().await.map_err(|e| {
            DomainError::persistence(format!("Failed to commit transaction: {}", e))
        })?;

        Ok(())
    }
}

fn row_to_turn(row: &PgRow) -> Result<ConversationTurn, DomainError> {
    let get_err = |name: &str, e: sqlx::Error| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", name, e),
        )
    };

    let id: uuid::Uuid = row.try_get("id").map_err(|e| get_err("id", e))?;
    let sender: String = row.try_get("sender").map_err(|e| get_err("sender", e))?;
    let content: String = row.try_get("content").map_err(|e| get_err("content", e))?;
    let is_error: Option<bool> = row.try_get("is_error").map_err(|e| get_err("is_error", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| get_err("created_at", e))?;

    turn_from_columns(id, &sender, content, is_error, created_at)
}

/// Rows written before `is_error` existed carry NULL there.
fn turn_from_columns(
    id: uuid::Uuid,
    sender: &str,
    content: String,
    is_error: Option<bool>,
    created_at: chrono::DateTime<chrono::Utc>,
) -> Result<ConversationTurn, DomainError> {
    let sender = sender.parse::<Sender>().map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Corrupt message {}: {}", id, e),
        )
    })?;

    Ok(ConversationTurn {
        id: TurnId::from_uuid(id),
        sender,
        content,
        created_at: Timestamp::from_datetime(created_at),
        is_error: is_error.unwrap_or(false),
    })
}
