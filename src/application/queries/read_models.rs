//! Read Models - 查询侧响应模型
//!
//! 区间和线路只保存车站 id，车站名称在这里通过车站仓储解析

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::application::error::ApplicationError;
use crate::application::ports::StationRepositoryPort;
use crate::domain::line::{Line, Section};
use crate::domain::station::{Station, StationId};

/// 车站响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationResponse {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Station> for StationResponse {
    fn from(station: &Station) -> Self {
        Self {
            id: station.id().value(),
            name: station.name().as_str().to_string(),
            created_at: station.created_at(),
            updated_at: station.updated_at(),
        }
    }
}

/// 线路响应，stations 为创建时的上行起点和下行终点
#[derive(Debug, Clone)]
pub struct LineResponse {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub stations: Vec<StationResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 区间响应
#[derive(Debug, Clone)]
pub struct SectionResponse {
    pub up_station: StationResponse,
    pub down_station: StationResponse,
    pub distance: i64,
}

/// 按 id 批量加载的车站目录
pub struct StationDirectory {
    stations: HashMap<StationId, StationResponse>,
}

impl StationDirectory {
    pub async fn load(
        station_repo: &dyn StationRepositoryPort,
        ids: impl IntoIterator<Item = StationId>,
    ) -> Result<Self, ApplicationError> {
        let mut ids: Vec<StationId> = ids.into_iter().collect();
        ids.sort();
        ids.dedup();

        let stations = station_repo.find_by_ids(&ids).await?;

        Ok(Self {
            stations: stations
                .iter()
                .map(|station| (station.id(), StationResponse::from(station)))
                .collect(),
        })
    }

    /// 车站已被删除时返回 NotFound
    pub fn get(&self, id: StationId) -> Result<StationResponse, ApplicationError> {
        self.stations
            .get(&id)
            .cloned()
            .ok_or_else(|| ApplicationError::not_found("Station", id.value()))
    }

    pub fn line_response(&self, line: &Line) -> Result<LineResponse, ApplicationError> {
        Ok(LineResponse {
            id: line.id().value(),
            name: line.name().as_str().to_string(),
            color: line.color().as_str().to_string(),
            stations: vec![
                self.get(line.up_station_id())?,
                self.get(line.down_station_id())?,
            ],
            created_at: line.created_at(),
            updated_at: line.updated_at(),
        })
    }

    pub fn section_response(&self, section: &Section) -> Result<SectionResponse, ApplicationError> {
        Ok(SectionResponse {
            up_station: self.get(section.up_station_id())?,
            down_station: self.get(section.down_station_id())?,
            distance: section.distance().value(),
        })
    }
}

/// 线路响应所需的车站 id
pub fn line_station_ids(line: &Line) -> [StationId; 2] {
    [line.up_station_id(), line.down_station_id()]
}
