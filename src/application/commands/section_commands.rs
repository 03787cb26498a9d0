//! Section Commands

use crate::domain::line::LineId;
use crate::domain::station::StationId;

/// 在线路下行终点追加区间命令
#[derive(Debug, Clone)]
pub struct AddSection {
    pub line_id: LineId,
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: i64,
}

/// 移除线路末端区间命令
#[derive(Debug, Clone)]
pub struct RemoveSection {
    pub line_id: LineId,
    pub station_id: StationId,
}
