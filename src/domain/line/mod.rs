//! Line Context - 线路限界上下文
//!
//! 职责:
//! - Line 聚合管理
//! - 区间链 (Sections) 不变量维护: 只能在末端追加、只能移除末端
//! - 区间校验错误分类

mod aggregate;
mod entities;
mod errors;
mod sections;
mod value_objects;

pub use aggregate::{Line, LineDefinition};
pub use entities::Section;
pub use errors::SectionError;
pub use sections::Sections;
pub use value_objects::{Distance, LineColor, LineId, LineName};
