//! Line Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Distance, LineColor, LineId, LineName, Section, SectionError, Sections};
use crate::domain::station::StationId;

/// 创建线路时给定的属性
///
/// 起终点和距离同时构成区间链的第一个区间
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDefinition {
    pub name: LineName,
    pub color: LineColor,
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: Distance,
}

impl LineDefinition {
    pub fn new(
        name: LineName,
        color: LineColor,
        up_station_id: StationId,
        down_station_id: StationId,
        distance: Distance,
    ) -> Result<Self, &'static str> {
        if up_station_id == down_station_id {
            return Err("상행역과 하행역은 같을 수 없습니다");
        }
        Ok(Self {
            name,
            color,
            up_station_id,
            down_station_id,
            distance,
        })
    }

    /// 线路的第一个区间
    pub fn first_section(&self) -> Section {
        Section::new(self.up_station_id, self.down_station_id, self.distance)
    }
}

/// Line 聚合根
///
/// 不变量:
/// - 区间链只属于这一条线路，且永不为空
/// - up_station_id / down_station_id 记录创建时的起终点，不随区间变化
/// - 当前下行终点站由区间链的最后一个区间决定
#[derive(Debug, Clone, Serialize)]
pub struct Line {
    id: LineId,
    name: LineName,
    color: LineColor,
    up_station_id: StationId,
    down_station_id: StationId,
    distance: Distance,
    sections: Sections,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Line {
    /// 创建新线路，并以起终点作为第一个区间
    pub fn create(id: LineId, definition: LineDefinition) -> Self {
        let now = Utc::now();
        let sections = Sections::new(definition.first_section());
        Self {
            id,
            name: definition.name,
            color: definition.color,
            up_station_id: definition.up_station_id,
            down_station_id: definition.down_station_id,
            distance: definition.distance,
            sections,
            created_at: now,
            updated_at: now,
        }
    }

    /// 从存储中还原
    pub fn restore(
        id: LineId,
        definition: LineDefinition,
        sections: Sections,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: definition.name,
            color: definition.color,
            up_station_id: definition.up_station_id,
            down_station_id: definition.down_station_id,
            distance: definition.distance,
            sections,
            created_at,
            updated_at,
        }
    }

    /// 在下行终点追加区间
    pub fn add_section(&mut self, section: Section) -> Result<(), SectionError> {
        self.sections.append(section)?;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// 移除以 `station_id` 为下行终点的末端区间
    pub fn remove_section(&mut self, station_id: StationId) -> Result<Section, SectionError> {
        let removed = self.sections.remove(station_id)?;
        self.updated_at = Utc::now();
        Ok(removed)
    }

    pub fn rename(&mut self, name: LineName) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    pub fn recolor(&mut self, color: LineColor) {
        self.color = color;
        self.updated_at = Utc::now();
    }

    // Getters
    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn name(&self) -> &LineName {
        &self.name
    }

    pub fn color(&self) -> &LineColor {
        &self.color
    }

    pub fn up_station_id(&self) -> StationId {
        self.up_station_id
    }

    pub fn down_station_id(&self) -> StationId {
        self.down_station_id
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    pub fn terminal_down_station_id(&self) -> StationId {
        self.sections.terminal_down_station_id()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
