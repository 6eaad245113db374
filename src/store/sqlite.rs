/**
 * SQLite implementation of the chat store.
 *
 * Uses sqlx with the `sqlite` feature. Migrations are embedded at compile
 * time via `sqlx::migrate!` (resolved relative to the crate root) and run
 * automatically in [`SqliteStore::connect`].
 *
 * IDs and timestamps are stored as TEXT (UUID string / RFC 3339) and
 * converted at this boundary. The runtime-verified `sqlx::query` form is
 * used so no database needs to exist at compile time.
 */

use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use uuid::Uuid;

use super::{ChatStore, ConversationTurn, Role, StoreError, User, DEFAULT_SYSTEM_ROLE};

/// SQLite-backed user and conversation store.
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (or create) the SQLite database at `url` and run pending
    /// migrations.
    ///
    /// `url` should be a sqlx-compatible SQLite URL, e.g.
    /// `"sqlite://chatbot.db?mode=rwc"`.
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let pool = SqlitePool::connect(url).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    /// In-memory store for tests. A single pooled connection keeps the
    /// database alive for the lifetime of the pool.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }
}

fn decode<T, E>(value: Result<T, E>) -> Result<T, sqlx::Error>
where
    E: std::error::Error + Send + Sync + 'static,
{
    value.map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

fn user_from_row(row: &SqliteRow) -> Result<User, sqlx::Error> {
    Ok(User {
        id: decode(row.get::<String, _>("id").parse::<Uuid>())?,
        name: row.get("name"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        system_role: row.get("system_role"),
        created_at: decode(row.get::<String, _>("created_at").parse::<DateTime<Utc>>())?,
    })
}

fn turn_from_row(row: &SqliteRow) -> Result<ConversationTurn, sqlx::Error> {
    let role: String = row.get("role");
    Ok(ConversationTurn {
        id: decode(row.get::<String, _>("id").parse::<Uuid>())?,
        user_id: decode(row.get::<String, _>("user_id").parse::<Uuid>())?,
        role: Role::from_str(&role)
            .ok_or_else(|| sqlx::Error::Decode(format!("unknown role: {role}").into()))?,
        content: row.get("content"),
        timestamp: decode(row.get::<String, _>("timestamp").parse::<DateTime<Utc>>())?,
    })
}

impl ChatStore for SqliteStore {
    async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
        system_role: Option<&str>,
    ) -> Result<User, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let system_role = system_role.unwrap_or(DEFAULT_SYSTEM_ROLE);

        sqlx::query(
            "INSERT INTO users (id, name, email, password_hash, system_role, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(id.to_string())
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(system_role)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::DuplicateEmail,
            _ => StoreError::Database(e),
        })?;

        Ok(User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            system_role: system_role.to_string(),
            created_at: now,
        })
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query(
            "SELECT id, name, email, password_hash, system_role, created_at \
             FROM users WHERE email = ?1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose().map_err(Into::into)
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let row = sqlx::query(
            "SELECT id, name, email, password_hash, system_role, created_at \
             FROM users WHERE id = ?1",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose().map_err(Into::into)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, name, email, password_hash, system_role, created_at \
             FROM users ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| user_from_row(row).map_err(Into::into))
            .collect()
    }

    async fn update_system_role(&self, user_id: Uuid, system_role: &str) -> Result<(), StoreError> {
        sqlx::query("UPDATE users SET system_role = ?1 WHERE id = ?2")
            .bind(system_role)
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn append_turn(
        &self,
        user_id: Uuid,
        role: Role,
        content: &str,
    ) -> Result<ConversationTurn, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO conversations (id, user_id, role, content, timestamp) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(id.to_string())
        .bind(user_id.to_string())
        .bind(role.as_str())
        .bind(content)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(ConversationTurn {
            id,
            user_id,
            role,
            content: content.to_string(),
            timestamp: now,
        })
    }

    async fn list_turns(&self, user_id: Uuid) -> Result<Vec<ConversationTurn>, StoreError> {
        // rowid order is insertion order.
        let rows = sqlx::query(
            "SELECT id, user_id, role, content, timestamp \
             FROM conversations WHERE user_id = ?1 ORDER BY rowid",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| turn_from_row(row).map_err(Into::into))
            .collect()
    }
}
