//! Line Commands

use crate::domain::line::LineId;
use crate::domain::station::StationId;

/// 创建线路命令，起终点构成第一个区间
#[derive(Debug, Clone)]
pub struct CreateLine {
    pub name: String,
    pub color: String,
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: i64,
}

/// 修改线路名称和颜色命令
#[derive(Debug, Clone)]
pub struct UpdateLine {
    pub line_id: LineId,
    pub name: String,
    pub color: String,
}

/// 删除线路命令
#[derive(Debug, Clone)]
pub struct DeleteLine {
    pub line_id: LineId,
}
