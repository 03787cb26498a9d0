//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod line_handlers;
mod section_handlers;
mod station_handlers;

pub use line_handlers::*;
pub use section_handlers::*;
pub use station_handlers::*;
