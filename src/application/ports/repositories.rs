//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite、内存）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::line::{Line, LineDefinition, LineId};
use crate::domain::station::{Station, StationId, StationName};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{resource_type} not found: {id}")]
    NotFound { resource_type: &'static str, id: i64 },

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// 存储中的数据违反了领域不变量
    #[error("Corrupted data: {0}")]
    Corrupted(String),
}

// ============================================================================
// Station Repository
// ============================================================================

/// Station Repository Port
#[async_trait]
pub trait StationRepositoryPort: Send + Sync {
    /// 保存新车站，由存储分配 id
    async fn insert(&self, name: StationName) -> Result<Station, RepositoryError>;

    /// 更新车站
    async fn update(&self, station: &Station) -> Result<(), RepositoryError>;

    /// 根据 ID 查找车站
    async fn find_by_id(&self, id: StationId) -> Result<Option<Station>, RepositoryError>;

    /// 获取所有车站
    async fn find_all(&self) -> Result<Vec<Station>, RepositoryError>;

    /// 删除车站（不检查是否被区间引用）
    async fn delete(&self, id: StationId) -> Result<(), RepositoryError>;

    /// 批量查找车站，不存在的 id 直接跳过
    async fn find_by_ids(&self, ids: &[StationId]) -> Result<Vec<Station>, RepositoryError> {
        // 默认实现：逐个查询
        let mut stations = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(station) = self.find_by_id(*id).await? {
                stations.push(station);
            }
        }
        Ok(stations)
    }
}

// ============================================================================
// Line Repository
// ============================================================================

/// Line Repository Port
///
/// 线路与其区间作为一个整体读写
#[async_trait]
pub trait LineRepositoryPort: Send + Sync {
    /// 创建线路及其第一个区间，由存储分配 id
    async fn insert(&self, definition: LineDefinition) -> Result<Line, RepositoryError>;

    /// 保存线路属性并整体重写区间，在一个事务内完成
    async fn save(&self, line: &Line) -> Result<(), RepositoryError>;

    /// 根据 ID 查找线路（区间按顺序加载）
    async fn find_by_id(&self, id: LineId) -> Result<Option<Line>, RepositoryError>;

    /// 获取所有线路
    async fn find_all(&self) -> Result<Vec<Line>, RepositoryError>;

    /// 删除线路及其区间
    async fn delete(&self, id: LineId) -> Result<(), RepositoryError>;
}
