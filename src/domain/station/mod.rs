//! Station Context - 车站限界上下文
//!
//! 职责:
//! - 车站标识与名称
//! - 车站只被区间按 id 引用，不被嵌入

mod aggregate;
mod value_objects;

pub use aggregate::Station;
pub use value_objects::{StationId, StationName};
