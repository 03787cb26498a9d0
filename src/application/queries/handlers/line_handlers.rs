//! Line Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{LineRepositoryPort, StationRepositoryPort};
use crate::application::queries::{
    line_station_ids, GetLine, GetLineSections, LineResponse, ListLines, SectionResponse,
    StationDirectory,
};

/// GetLine Handler
pub struct GetLineHandler {
    line_repo: Arc<dyn LineRepositoryPort>,
    station_repo: Arc<dyn StationRepositoryPort>,
}

impl GetLineHandler {
    pub fn new(
        line_repo: Arc<dyn LineRepositoryPort>,
        station_repo: Arc<dyn StationRepositoryPort>,
    ) -> Self {
        Self {
            line_repo,
            station_repo,
        }
    }

    pub async fn handle(&self, query: GetLine) -> Result<LineResponse, ApplicationError> {
        let line = self
            .line_repo
            .find_by_id(query.line_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Line", query.line_id.value()))?;

        let directory =
            StationDirectory::load(self.station_repo.as_ref(), line_station_ids(&line)).await?;
        directory.line_response(&line)
    }
}

/// ListLines Handler
pub struct ListLinesHandler {
    line_repo: Arc<dyn LineRepositoryPort>,
    station_repo: Arc<dyn StationRepositoryPort>,
}

impl ListLinesHandler {
    pub fn new(
        line_repo: Arc<dyn LineRepositoryPort>,
        station_repo: Arc<dyn StationRepositoryPort>,
    ) -> Self {
        Self {
            line_repo,
            station_repo,
        }
    }

    pub async fn handle(&self, _query: ListLines) -> Result<Vec<LineResponse>, ApplicationError> {
        let lines = self.line_repo.find_all().await?;

        let directory = StationDirectory::load(
            self.station_repo.as_ref(),
            lines.iter().flat_map(line_station_ids),
        )
        .await?;

        // 某条线路的起终点车站已被删除时只跳过这一条
        let mut responses = Vec::with_capacity(lines.len());
        for line in &lines {
            match directory.line_response(line) {
                Ok(response) => responses.push(response),
                Err(ApplicationError::NotFound { resource_type, id }) => {
                    tracing::warn!(
                        line_id = %line.id(),
                        resource_type,
                        id,
                        "Line skipped from listing, endpoint station missing"
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Ok(responses)
    }
}

/// GetLineSections Handler - 按区间顺序返回上下行车站
pub struct GetLineSectionsHandler {
    line_repo: Arc<dyn LineRepositoryPort>,
    station_repo: Arc<dyn StationRepositoryPort>,
}

impl GetLineSectionsHandler {
    pub fn new(
        line_repo: Arc<dyn LineRepositoryPort>,
        station_repo: Arc<dyn StationRepositoryPort>,
    ) -> Self {
        Self {
            line_repo,
            station_repo,
        }
    }

    pub async fn handle(
        &self,
        query: GetLineSections,
    ) -> Result<Vec<SectionResponse>, ApplicationError> {
        let line = self
            .line_repo
            .find_by_id(query.line_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Line", query.line_id.value()))?;

        let sections = line.sections();
        let directory =
            StationDirectory::load(self.station_repo.as_ref(), sections.station_ids()).await?;

        sections
            .iter()
            .map(|section| directory.section_response(section))
            .collect()
    }
}
