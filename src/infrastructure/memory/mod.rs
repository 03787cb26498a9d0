//! In-Memory Implementations - 内存实现
//!
//! 基于 DashMap 的仓储实现，用于测试和 `memory` 存储后端

mod line_repo;
mod station_repo;

pub use line_repo::InMemoryLineRepository;
pub use station_repo::InMemoryStationRepository;
