//! SQLite Line Repository
//!
//! 线路存于 lines，区间链按 section_order 存于 sections。
//! 每次保存在同一事务内整体重写区间链。

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{FromRow, Sqlite, Transaction};
use std::collections::HashMap;

use super::station_repo::parse_timestamp;
use super::DbPool;
use crate::application::ports::{LineRepositoryPort, RepositoryError};
use crate::domain::line::{
    Distance, Line, LineColor, LineDefinition, LineId, LineName, Section, Sections,
};
use crate::domain::station::StationId;

/// SQLite Line Repository
pub struct SqliteLineRepository {
    pool: DbPool,
}

impl SqliteLineRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct LineRow {
    id: i64,
    name: String,
    color: String,
    up_station_id: i64,
    down_station_id: i64,
    distance: i64,
    created_at: String,
    updated_at: String,
}

#[derive(FromRow)]
struct SectionRow {
    line_id: i64,
    up_station_id: i64,
    down_station_id: i64,
    distance: i64,
}

impl TryFrom<SectionRow> for Section {
    type Error = RepositoryError;

    fn try_from(row: SectionRow) -> Result<Self, Self::Error> {
        Ok(Section::new(
            StationId::new(row.up_station_id),
            StationId::new(row.down_station_id),
            corrupted(Distance::new(row.distance))?,
        ))
    }
}

fn corrupted<T>(result: Result<T, &'static str>) -> Result<T, RepositoryError> {
    result.map_err(|e| RepositoryError::Corrupted(e.to_string()))
}

/// 把线路行和它按顺序排列的区间行组装为聚合
fn assemble(row: LineRow, sections: Vec<SectionRow>) -> Result<Line, RepositoryError> {
    let definition = corrupted(LineDefinition::new(
        corrupted(LineName::new(row.name))?,
        corrupted(LineColor::new(row.color))?,
        StationId::new(row.up_station_id),
        StationId::new(row.down_station_id),
        corrupted(Distance::new(row.distance))?,
    ))?;

    let sections = sections
        .into_iter()
        .map(Section::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let sections = Sections::restore(sections).map_err(|e| {
        RepositoryError::Corrupted(format!("line {}: {}", row.id, e))
    })?;

    Ok(Line::restore(
        LineId::new(row.id),
        definition,
        sections,
        parse_timestamp(&row.created_at)?,
        parse_timestamp(&row.updated_at)?,
    ))
}

/// 在事务内重写线路的全部区间
async fn write_sections(
    tx: &mut Transaction<'_, Sqlite>,
    line_id: LineId,
    sections: &Sections,
) -> Result<(), RepositoryError> {
    sqlx::query("DELETE FROM sections WHERE line_id = ?")
        .bind(line_id.value())
        .execute(&mut **tx)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

    for (order, section) in sections.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO sections (line_id, up_station_id, down_station_id, distance, section_order)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(line_id.value())
        .bind(section.up_station_id().value())
        .bind(section.down_station_id().value())
        .bind(section.distance().value())
        .bind(order as i64)
        .execute(&mut **tx)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;
    }

    Ok(())
}

const SELECT_LINE: &str = "SELECT id, name, color, up_station_id, down_station_id, distance, created_at, updated_at FROM lines";

#[async_trait]
impl LineRepositoryPort for SqliteLineRepository {
    async fn insert(&self, definition: LineDefinition) -> Result<Line, RepositoryError> {
        let now = Utc::now();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let result = sqlx::query(
            r#"
            INSERT INTO lines (name, color, up_station_id, down_station_id, distance, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(definition.name.as_str())
        .bind(definition.color.as_str())
        .bind(definition.up_station_id.value())
        .bind(definition.down_station_id.value())
        .bind(definition.distance.value())
        .bind(now.to_rfc3339())
        .bind(now.to_rfc3339())
        .execute(&mut *tx)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let id = LineId::new(result.last_insert_rowid());
        let sections = Sections::new(definition.first_section());
        write_sections(&mut tx, id, &sections).await?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(Line::restore(id, definition, sections, now, now))
    }

    async fn save(&self, line: &Line) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let result = sqlx::query("UPDATE lines SET name = ?, color = ?, updated_at = ? WHERE id = ?")
            .bind(line.name().as_str())
            .bind(line.color().as_str())
            .bind(line.updated_at().to_rfc3339())
            .bind(line.id().value())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        // 事务未提交即丢弃，自动回滚
        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound {
                resource_type: "Line",
                id: line.id().value(),
            });
        }

        write_sections(&mut tx, line.id(), line.sections()).await?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_by_id(&self, id: LineId) -> Result<Option<Line>, RepositoryError> {
        let row: Option<LineRow> = sqlx::query_as(&format!("{} WHERE id = ?", SELECT_LINE))
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let sections: Vec<SectionRow> = sqlx::query_as(
            r#"
            SELECT line_id, up_station_id, down_station_id, distance
            FROM sections
            WHERE line_id = ?
            ORDER BY section_order
            "#,
        )
        .bind(id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        assemble(row, sections).map(Some)
    }

    async fn find_all(&self) -> Result<Vec<Line>, RepositoryError> {
        let rows: Vec<LineRow> = sqlx::query_as(&format!("{} ORDER BY id", SELECT_LINE))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let section_rows: Vec<SectionRow> = sqlx::query_as(
            r#"
            SELECT line_id, up_station_id, down_station_id, distance
            FROM sections
            ORDER BY line_id, section_order
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let mut by_line: HashMap<i64, Vec<SectionRow>> = HashMap::new();
        for section in section_rows {
            by_line.entry(section.line_id).or_default().push(section);
        }

        rows.into_iter()
            .map(|row| {
                let sections = by_line.remove(&row.id).unwrap_or_default();
                assemble(row, sections)
            })
            .collect()
    }

    async fn delete(&self, id: LineId) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        sqlx::query("DELETE FROM sections WHERE line_id = ?")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        sqlx::query("DELETE FROM lines WHERE id = ?")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
