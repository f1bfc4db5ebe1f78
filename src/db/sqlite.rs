use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};
use uuid::Uuid;

use super::model::*;
use super::repo::*;

type MovieRow = (String, String, String, Option<i64>);

pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    pub async fn new(db_url: &str) -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str(db_url)?.create_if_missing(true);

        // Every connection to an in-memory database sees its own database,
        // so such a pool must hold on to exactly one connection.
        let pool = if is_memory_url(db_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(5)
                .connect_with(options)
                .await?
        };

        let repo = Self { pool };

        repo.init_schema().await?;

        info!("Database initialized at {}", db_url);

        Ok(repo)
    }

    async fn init_schema(&self) -> DbResult<()> {
        let schema = include_str!("schema.sql");
        sqlx::query(schema).execute(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn is_memory_url(db_url: &str) -> bool {
    db_url.contains(":memory:") || db_url.contains("mode=memory")
}

/// Ids are 32 lowercase hex digits. Anything else cannot name a record and
/// is reported as an error rather than as "not found".
fn check_id(id: &str) -> DbResult<()> {
    let valid = id.len() == 32
        && id
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
    if valid {
        Ok(())
    } else {
        Err(DbError::InvalidId(id.to_string()))
    }
}

fn row_to_movie(row: MovieRow) -> DbResult<Movie> {
    Ok(Movie {
        id: row.0,
        title: row.1,
        actors: serde_json::from_str(&row.2)?,
        release_year: row.3,
    })
}

#[async_trait]
impl MovieRepo for SqliteRepository {
    async fn insert_movie(&self, fields: &MovieFields) -> DbResult<Movie> {
        let id = Uuid::new_v4().simple().to_string();
        let actors = serde_json::to_string(&fields.actors)?;

        sqlx::query(
            "INSERT INTO movies (id, title, actors, release_year, created)
            VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&fields.title)
        .bind(&actors)
        .bind(fields.release_year)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        debug!(id = %id, title = %fields.title, "inserted movie");

        Ok(Movie::from_fields(id, fields.clone()))
    }

    async fn list_movies(&self) -> DbResult<Vec<Movie>> {
        let rows = sqlx::query_as::<_, MovieRow>(
            "SELECT id, title, actors, release_year FROM movies ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_movie).collect()
    }

    async fn replace_movie(&self, id: &str, fields: &MovieFields) -> DbResult<u64> {
        check_id(id)?;
        let actors = serde_json::to_string(&fields.actors)?;

        // The second half of the WHERE clause skips rows that already hold
        // these values, so rows_affected() counts modified rows only.
        let result = sqlx::query(
            "UPDATE movies SET title = ?, actors = ?, release_year = ?
            WHERE id = ?
            AND (title IS NOT ? OR actors IS NOT ? OR release_year IS NOT ?)",
        )
        .bind(&fields.title)
        .bind(&actors)
        .bind(fields.release_year)
        .bind(id)
        .bind(&fields.title)
        .bind(&actors)
        .bind(fields.release_year)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_movie(&self, id: &str) -> DbResult<u64> {
        check_id(id)?;

        let result = sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
