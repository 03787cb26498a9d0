//! Station Queries

use crate::domain::station::StationId;

/// 获取车站详情查询
#[derive(Debug, Clone)]
pub struct GetStation {
    pub station_id: StationId,
}

/// 列出所有车站查询
#[derive(Debug, Clone)]
pub struct ListStations;
