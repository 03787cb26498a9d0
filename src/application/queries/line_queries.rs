//! Line Queries

use crate::domain::line::LineId;

/// 获取线路详情查询
#[derive(Debug, Clone)]
pub struct GetLine {
    pub line_id: LineId,
}

/// 列出所有线路查询
#[derive(Debug, Clone)]
pub struct ListLines;

/// 按顺序获取线路的区间
#[derive(Debug, Clone)]
pub struct GetLineSections {
    pub line_id: LineId,
}
