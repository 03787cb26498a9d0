//! In-Memory Line Repository

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::application::ports::{LineRepositoryPort, RepositoryError};
use crate::domain::line::{Line, LineDefinition, LineId};

/// 内存线路仓储，线路连同区间链整体保存
pub struct InMemoryLineRepository {
    lines: DashMap<LineId, Line>,
    next_id: AtomicI64,
}

impl InMemoryLineRepository {
    pub fn new() -> Self {
        Self {
            lines: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryLineRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LineRepositoryPort for InMemoryLineRepository {
    async fn insert(&self, definition: LineDefinition) -> Result<Line, RepositoryError> {
        let id = LineId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let line = Line::create(id, definition);
        self.lines.insert(id, line.clone());
        tracing::debug!(line_id = %id, "Line stored in memory");
        Ok(line)
    }

    async fn save(&self, line: &Line) -> Result<(), RepositoryError> {
        let mut stored = self.lines.get_mut(&line.id()).ok_or(RepositoryError::NotFound {
            resource_type: "Line",
            id: line.id().value(),
        })?;
        *stored = line.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: LineId) -> Result<Option<Line>, RepositoryError> {
        Ok(self.lines.get(&id).map(|l| l.value().clone()))
    }

    async fn find_all(&self) -> Result<Vec<Line>, RepositoryError> {
        let mut lines: Vec<Line> = self.lines.iter().map(|l| l.value().clone()).collect();
        lines.sort_by_key(|l| l.id());
        Ok(lines)
    }

    async fn delete(&self, id: LineId) -> Result<(), RepositoryError> {
        self.lines.remove(&id);
        Ok(())
    }
}
