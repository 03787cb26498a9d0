//! SQLite Station Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite};

use super::DbPool;
use crate::application::ports::{RepositoryError, StationRepositoryPort};
use crate::domain::station::{Station, StationId, StationName};

/// SQLite Station Repository
pub struct SqliteStationRepository {
    pool: DbPool,
}

impl SqliteStationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct StationRow {
    id: i64,
    name: String,
    created_at: String,
    updated_at: String,
}

impl TryFrom<StationRow> for Station {
    type Error = RepositoryError;

    fn try_from(row: StationRow) -> Result<Self, Self::Error> {
        Ok(Station::restore(
            StationId::new(row.id),
            StationName::new(row.name).map_err(|e| RepositoryError::Corrupted(e.to_string()))?,
            parse_timestamp(&row.created_at)?,
            parse_timestamp(&row.updated_at)?,
        ))
    }
}

pub(super) fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| RepositoryError::SerializationError(e.to_string()))
}

#[async_trait]
impl StationRepositoryPort for SqliteStationRepository {
    async fn insert(&self, name: StationName) -> Result<Station, RepositoryError> {
        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO stations (name, created_at, updated_at) VALUES (?, ?, ?)",
        )
        .bind(name.as_str())
        .bind(now.to_rfc3339())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(Station::restore(
            StationId::new(result.last_insert_rowid()),
            name,
            now,
            now,
        ))
    }

    async fn update(&self, station: &Station) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE stations SET name = ?, updated_at = ? WHERE id = ?")
            .bind(station.name().as_str())
            .bind(station.updated_at().to_rfc3339())
            .bind(station.id().value())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound {
                resource_type: "Station",
                id: station.id().value(),
            });
        }

        Ok(())
    }

    async fn find_by_id(&self, id: StationId) -> Result<Option<Station>, RepositoryError> {
        let row: Option<StationRow> = sqlx::query_as(
            "SELECT id, name, created_at, updated_at FROM stations WHERE id = ?",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(Station::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Station>, RepositoryError> {
        let rows: Vec<StationRow> =
            sqlx::query_as("SELECT id, name, created_at, updated_at FROM stations ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Station::try_from).collect()
    }

    async fn delete(&self, id: StationId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM stations WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_by_ids(&self, ids: &[StationId]) -> Result<Vec<Station>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT id, name, created_at, updated_at FROM stations WHERE id IN (");
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(id.value());
        }
        separated.push_unseparated(") ORDER BY id");

        let rows: Vec<StationRow> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Station::try_from).collect()
    }
}
