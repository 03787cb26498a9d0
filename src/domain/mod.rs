//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Station Context: 车站登记
//! - Line Context: 线路与区间链 (Section Chain)

pub mod line;
pub mod station;
