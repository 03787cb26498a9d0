//! Line Context - 区间链
//!
//! 一条线路的区间按顺序首尾相接: 每个区间的下行站是下一个区间的上行站。
//! 下行终点站始终由最后一个区间推导，不单独保存。

use serde::Serialize;

use super::{Section, SectionError};
use crate::domain::station::StationId;

/// 区间链
///
/// 不变量:
/// - 至少包含一个区间
/// - 只能在末端追加，只能移除末端
/// - 区间在 Vec 中的位置即其顺序号
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sections {
    sections: Vec<Section>,
}

impl Sections {
    /// 以第一个区间创建区间链
    pub fn new(first: Section) -> Self {
        Self {
            sections: vec![first],
        }
    }

    /// 从按顺序排列的区间还原
    pub fn restore(sections: Vec<Section>) -> Result<Self, &'static str> {
        if sections.is_empty() {
            return Err("노선에는 최소 하나의 구간이 필요합니다");
        }
        let connected = sections
            .windows(2)
            .all(|pair| pair[0].down_station_id() == pair[1].up_station_id());
        if !connected {
            return Err("구간이 하나의 경로로 연결되어 있지 않습니다");
        }
        Ok(Self { sections })
    }

    /// 在末端追加区间
    ///
    /// 校验顺序（第一个失败的规则生效）:
    /// 1. 下行站不能是线路上已有的车站（任一区间的下行站或起点站）
    /// 2. 上行站不能是任何已有区间的上行站
    /// 3. 上行站必须等于当前下行终点站
    pub fn append(&mut self, candidate: Section) -> Result<(), SectionError> {
        let down = candidate.down_station_id();
        if self.contains_station(down) {
            return Err(SectionError::DownStationNotValid(down));
        }

        let up = candidate.up_station_id();
        if self.sections.iter().any(|s| s.up_station_id() == up) {
            return Err(SectionError::UpStationNotValid);
        }

        if self.terminal_down_station_id() != up {
            return Err(SectionError::UpStationNotValid);
        }

        self.sections.push(candidate);
        Ok(())
    }

    /// 移除末端区间，`station_id` 必须是当前下行终点站
    pub fn remove(&mut self, station_id: StationId) -> Result<Section, SectionError> {
        if self.sections.len() <= 1 {
            return Err(SectionError::CannotRemoveLastSection);
        }
        if self.terminal_down_station_id() != station_id {
            return Err(SectionError::IsNotTerminalStation(station_id));
        }
        match self.sections.pop() {
            Some(removed) => Ok(removed),
            None => Err(SectionError::CannotRemoveLastSection),
        }
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn first(&self) -> &Section {
        &self.sections[0]
    }

    pub fn tail(&self) -> &Section {
        &self.sections[self.sections.len() - 1]
    }

    /// 当前下行终点站
    pub fn terminal_down_station_id(&self) -> StationId {
        self.tail().down_station_id()
    }

    /// 按顺序遍历区间（可 clone 后重复遍历）
    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    /// 沿线路从上行起点到下行终点的车站 id
    pub fn station_ids(&self) -> impl Iterator<Item = StationId> + Clone + '_ {
        std::iter::once(self.first().up_station_id())
            .chain(self.sections.iter().map(Section::down_station_id))
    }

    /// 车站是否已经在线路上
    pub fn contains_station(&self, station_id: StationId) -> bool {
        self.station_ids().any(|id| id == station_id)
    }

    /// 所有区间距离之和
    #[cfg(test)]
    pub fn total_distance(&self) -> i64 {
        self.sections.iter().map(|s| s.distance().value()).sum()
    }
}

impl<'a> IntoIterator for &'a Sections {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
