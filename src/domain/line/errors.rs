//! Line Context - Errors
//!
//! 区间链校验失败的分类，消息即为对外返回的本地化文本

use thiserror::Error;

use crate::domain::station::StationId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionError {
    /// 新区间的下行站已经是某个区间的下行站
    #[error("이미 등록되어 있는 역(id:{0})은 새로운 하행종점역으로 등록할 수 없습니다.")]
    DownStationNotValid(StationId),

    /// 新区间的上行站重复，或不是当前下行终点站
    #[error("기존 하행종점역이 반드시 상행역으로 등록되어야 합니다")]
    UpStationNotValid,

    /// 要移除的站不是当前下行终点站
    #[error("지금 제거하는 역(id:{0})은 하행종점역이 아닙니다.")]
    IsNotTerminalStation(StationId),

    /// 只剩一个区间
    #[error("마지막 구간은 제거가 불가능 합니다.")]
    CannotRemoveLastSection,
}
