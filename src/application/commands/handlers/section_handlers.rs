//! Section Command Handlers
//!
//! 加载线路聚合，调用区间链操作，整体保存。校验失败时不会写入任何数据。

use std::sync::Arc;

use crate::application::commands::{AddSection, RemoveSection};
use crate::application::error::ApplicationError;
use crate::application::ports::{LineRepositoryPort, StationRepositoryPort};
use crate::application::queries::{SectionResponse, StationDirectory};
use crate::domain::line::{Distance, Section, SectionError};

// ============================================================================
// AddSection
// ============================================================================

/// AddSection Handler
pub struct AddSectionHandler {
    line_repo: Arc<dyn LineRepositoryPort>,
    station_repo: Arc<dyn StationRepositoryPort>,
}

impl AddSectionHandler {
    pub fn new(
        line_repo: Arc<dyn LineRepositoryPort>,
        station_repo: Arc<dyn StationRepositoryPort>,
    ) -> Self {
        Self {
            line_repo,
            station_repo,
        }
    }

    pub async fn handle(&self, command: AddSection) -> Result<SectionResponse, ApplicationError> {
        let line_id = command.line_id;

        let mut line = self
            .line_repo
            .find_by_id(line_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Line", line_id.value()))?;

        let distance = Distance::new(command.distance).map_err(ApplicationError::validation)?;

        // 上行站不存在视为上行站无效，下行站同理
        let directory = StationDirectory::load(
            self.station_repo.as_ref(),
            [command.up_station_id, command.down_station_id],
        )
        .await?;
        directory
            .get(command.up_station_id)
            .map_err(|_| SectionError::UpStationNotValid)?;
        directory
            .get(command.down_station_id)
            .map_err(|_| SectionError::DownStationNotValid(command.down_station_id))?;

        let section = Section::new(command.up_station_id, command.down_station_id, distance);
        line.add_section(section)?;

        self.line_repo.save(&line).await?;

        tracing::info!(
            line_id = %line_id,
            up_station_id = %command.up_station_id,
            down_station_id = %command.down_station_id,
            sections = line.sections().section_count(),
            "Section added"
        );

        directory.section_response(&section)
    }
}

// ============================================================================
// RemoveSection
// ============================================================================

/// RemoveSection Handler - 只能移除下行终点区间
pub struct RemoveSectionHandler {
    line_repo: Arc<dyn LineRepositoryPort>,
}

impl RemoveSectionHandler {
    pub fn new(line_repo: Arc<dyn LineRepositoryPort>) -> Self {
        Self { line_repo }
    }

    pub async fn handle(&self, command: RemoveSection) -> Result<(), ApplicationError> {
        let line_id = command.line_id;

        let mut line = self
            .line_repo
            .find_by_id(line_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Line", line_id.value()))?;

        let removed = line.remove_section(command.station_id)?;

        self.line_repo.save(&line).await?;

        tracing::info!(
            line_id = %line_id,
            up_station_id = %removed.up_station_id(),
            down_station_id = %removed.down_station_id(),
            sections = line.sections().section_count(),
            "Section removed"
        );

        Ok(())
    }
}
