//! Subway - 地铁线路管理服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Station Context: 车站
//! - Line Context: 线路及其区间链（只能在下行终点追加或移除）
//!
//! 应用层 (application/):
//! - Ports: 端口定义（StationRepository, LineRepository）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: 仓储内存实现
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
