//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（StationRepository、LineRepository）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Station commands
    CreateStation,
    DeleteStation,
    RenameStation,
    // Line commands
    CreateLine,
    DeleteLine,
    UpdateLine,
    // Section commands
    AddSection,
    RemoveSection,
    // Handlers
    handlers::{
        AddSectionHandler, CreateLineHandler, CreateStationHandler, DeleteLineHandler,
        DeleteStationHandler, RemoveSectionHandler, RenameStationHandler, UpdateLineHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{LineRepositoryPort, RepositoryError, StationRepositoryPort};

pub use queries::{
    // Station queries
    GetStation,
    ListStations,
    // Line queries
    GetLine,
    GetLineSections,
    ListLines,
    // Read models
    LineResponse,
    SectionResponse,
    StationResponse,
    // Handlers
    handlers::{
        GetLineHandler, GetLineSectionsHandler, GetStationHandler, ListLinesHandler,
        ListStationsHandler,
    },
};
