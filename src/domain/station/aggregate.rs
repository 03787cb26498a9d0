//! Station Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{StationId, StationName};

/// Station 聚合根
///
/// 不变量:
/// - 创建后只有名称可以修改
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    id: StationId,
    name: StationName,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Station {
    /// 创建新车站
    pub fn new(id: StationId, name: StationName) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            created_at: now,
            updated_at: now,
        }
    }

    /// 从存储中还原
    pub fn restore(
        id: StationId,
        name: StationName,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            created_at,
            updated_at,
        }
    }

    /// 更新车站名称
    pub fn rename(&mut self, name: StationName) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    // Getters
    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn name(&self) -> &StationName {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
