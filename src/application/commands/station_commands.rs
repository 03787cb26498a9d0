//! Station Commands

use crate::domain::station::StationId;

/// 创建车站命令
#[derive(Debug, Clone)]
pub struct CreateStation {
    pub name: String,
}

/// 修改车站名称命令
#[derive(Debug, Clone)]
pub struct RenameStation {
    pub station_id: StationId,
    pub name: String,
}

/// 删除车站命令
#[derive(Debug, Clone)]
pub struct DeleteStation {
    pub station_id: StationId,
}
