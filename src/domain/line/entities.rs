//! Line Context - Entities

use serde::{Deserialize, Serialize};

use super::Distance;
use crate::domain::station::StationId;

/// 区间 - 一条线路上相邻两站之间的一段
///
/// 区间只持有车站 id；所属线路由拥有它的 Line 决定，不反向引用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    up_station_id: StationId,
    down_station_id: StationId,
    distance: Distance,
}

impl Section {
    pub fn new(up_station_id: StationId, down_station_id: StationId, distance: Distance) -> Self {
        Self {
            up_station_id,
            down_station_id,
            distance,
        }
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
}
