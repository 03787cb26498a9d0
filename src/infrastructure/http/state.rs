//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    AddSectionHandler, CreateLineHandler, CreateStationHandler, DeleteLineHandler,
    DeleteStationHandler, RemoveSectionHandler, RenameStationHandler, UpdateLineHandler,
    // Query handlers
    GetLineHandler, GetLineSectionsHandler, GetStationHandler, ListLinesHandler,
    ListStationsHandler,
    // Ports
    LineRepositoryPort, StationRepositoryPort,
};

/// 应用状态
///
/// 仓储以 trait object 注入，SQLite 与内存实现可互换
pub struct AppState {
    // ========== Ports ==========
    pub line_repo: Arc<dyn LineRepositoryPort>,
    pub station_repo: Arc<dyn StationRepositoryPort>,

    // ========== Command Handlers ==========
    pub create_station_handler: CreateStationHandler,
    pub rename_station_handler: RenameStationHandler,
    pub delete_station_handler: DeleteStationHandler,
    pub create_line_handler: CreateLineHandler,
    pub update_line_handler: UpdateLineHandler,
    pub delete_line_handler: DeleteLineHandler,
    pub add_section_handler: AddSectionHandler,
    pub remove_section_handler: RemoveSectionHandler,

    // ========== Query Handlers ==========
    pub get_station_handler: GetStationHandler,
    pub list_stations_handler: ListStationsHandler,
    pub get_line_handler: GetLineHandler,
    pub list_lines_handler: ListLinesHandler,
    pub get_line_sections_handler: GetLineSectionsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        line_repo: Arc<dyn LineRepositoryPort>,
        station_repo: Arc<dyn StationRepositoryPort>,
    ) -> Self {
        Self {
            // Ports
            line_repo: line_repo.clone(),
            station_repo: station_repo.clone(),

            // Command handlers
            create_station_handler: CreateStationHandler::new(station_repo.clone()),
            rename_station_handler: RenameStationHandler::new(station_repo.clone()),
            delete_station_handler: DeleteStationHandler::new(station_repo.clone()),
            create_line_handler: CreateLineHandler::new(line_repo.clone(), station_repo.clone()),
            update_line_handler: UpdateLineHandler::new(line_repo.clone(), station_repo.clone()),
            delete_line_handler: DeleteLineHandler::new(line_repo.clone()),
            add_section_handler: AddSectionHandler::new(line_repo.clone(), station_repo.clone()),
            remove_section_handler: RemoveSectionHandler::new(line_repo.clone()),

            // Query handlers
            get_station_handler: GetStationHandler::new(station_repo.clone()),
            list_stations_handler: ListStationsHandler::new(station_repo.clone()),
            get_line_handler: GetLineHandler::new(line_repo.clone(), station_repo.clone()),
            list_lines_handler: ListLinesHandler::new(line_repo.clone(), station_repo.clone()),
            get_line_sections_handler: GetLineSectionsHandler::new(line_repo, station_repo),
        }
    }
}
