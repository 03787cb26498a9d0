//! Line Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateLine, DeleteLine, UpdateLine};
use crate::application::error::ApplicationError;
use crate::application::ports::{LineRepositoryPort, StationRepositoryPort};
use crate::application::queries::{line_station_ids, LineResponse, StationDirectory};
use crate::domain::line::{Distance, LineColor, LineDefinition, LineName};

// ============================================================================
// CreateLine
// ============================================================================

/// CreateLine Handler
pub struct CreateLineHandler {
    line_repo: Arc<dyn LineRepositoryPort>,
    station_repo: Arc<dyn StationRepositoryPort>,
}

impl CreateLineHandler {
    pub fn new(
        line_repo: Arc<dyn LineRepositoryPort>,
        station_repo: Arc<dyn StationRepositoryPort>,
    ) -> Self {
        Self {
            line_repo,
            station_repo,
        }
    }

    pub async fn handle(&self, command: CreateLine) -> Result<LineResponse, ApplicationError> {
        let definition = LineDefinition::new(
            LineName::new(command.name).map_err(ApplicationError::validation)?,
            LineColor::new(command.color).map_err(ApplicationError::validation)?,
            command.up_station_id,
            command.down_station_id,
            Distance::new(command.distance).map_err(ApplicationError::validation)?,
        )
        .map_err(ApplicationError::validation)?;

        // 起终点车站必须存在
        let directory = StationDirectory::load(
            self.station_repo.as_ref(),
            [definition.up_station_id, definition.down_station_id],
        )
        .await?;
        directory.get(definition.up_station_id)?;
        directory.get(definition.down_station_id)?;

        let line = self.line_repo.insert(definition).await?;

        tracing::info!(
            line_id = %line.id(),
            name = %line.name(),
            up_station_id = %line.up_station_id(),
            down_station_id = %line.down_station_id(),
            "Line created"
        );

        directory.line_response(&line)
    }
}

// ============================================================================
// UpdateLine
// ============================================================================

/// UpdateLine Handler - 修改名称和颜色
pub struct UpdateLineHandler {
    line_repo: Arc<dyn LineRepositoryPort>,
    station_repo: Arc<dyn StationRepositoryPort>,
}

impl UpdateLineHandler {
    pub fn new(
        line_repo: Arc<dyn LineRepositoryPort>,
        station_repo: Arc<dyn StationRepositoryPort>,
    ) -> Self {
        Self {
            line_repo,
            station_repo,
        }
    }

    pub async fn handle(&self, command: UpdateLine) -> Result<LineResponse, ApplicationError> {
        let line_id = command.line_id;

        let mut line = self
            .line_repo
            .find_by_id(line_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Line", line_id.value()))?;

        let name = LineName::new(command.name).map_err(ApplicationError::validation)?;
        let color = LineColor::new(command.color).map_err(ApplicationError::validation)?;
        line.rename(name);
        line.recolor(color);

        // 先组装响应，车站缺失时不落库
        let directory =
            StationDirectory::load(self.station_repo.as_ref(), line_station_ids(&line)).await?;
        let response = directory.line_response(&line)?;

        self.line_repo.save(&line).await?;

        tracing::info!(
            line_id = %line_id,
            name = %line.name(),
            color = %line.color(),
            "Line updated"
        );

        Ok(response)
    }
}

// ============================================================================
// DeleteLine
// ============================================================================

/// DeleteLine Handler - 线路不存在时同样视为成功
pub struct DeleteLineHandler {
    line_repo: Arc<dyn LineRepositoryPort>,
}

impl DeleteLineHandler {
    pub fn new(line_repo: Arc<dyn LineRepositoryPort>) -> Self {
        Self { line_repo }
    }

    pub async fn handle(&self, command: DeleteLine) -> Result<(), ApplicationError> {
        self.line_repo.delete(command.line_id).await?;

        tracing::info!(line_id = %command.line_id, "Line deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::line::LineId;
    use crate::domain::station::{StationId, StationName};
    use crate::infrastructure::memory::{InMemoryLineRepository, InMemoryStationRepository};

    async fn repos() -> (Arc<InMemoryLineRepository>, Arc<InMemoryStationRepository>) {
        let station_repo = Arc::new(InMemoryStationRepository::new());
        for name in ["강남역", "역삼역"] {
            station_repo
                .insert(StationName::new(name).unwrap())
                .await
                .unwrap();
        }
        (Arc::new(InMemoryLineRepository::new()), station_repo)
    }

    fn create_command(up: i64, down: i64, distance: i64) -> CreateLine {
        CreateLine {
            name: "신분당선".to_string(),
            color: "bg-red-600".to_string(),
            up_station_id: StationId::new(up),
            down_station_id: StationId::new(down),
            distance,
        }
    }

    #[tokio::test]
    async fn test_create_line() {
        let (line_repo, station_repo) = repos().await;
        let handler = CreateLineHandler::new(line_repo.clone(), station_repo);

        let response = handler.handle(create_command(1, 2, 10)).await.unwrap();

        assert_eq!(response.name, "신분당선");
        assert_eq!(response.stations.len(), 2);
        assert_eq!(response.stations[0].name, "강남역");

        let line = line_repo
            .find_by_id(LineId::new(response.id))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(line.sections().section_count(), 1);
    }

    #[tokio::test]
    async fn test_create_line_with_unknown_station() {
        let (line_repo, station_repo) = repos().await;
        let handler = CreateLineHandler::new(line_repo.clone(), station_repo);

        let err = handler.handle(create_command(1, 9, 10)).await.unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::NotFound {
                resource_type: "Station",
                id: 9
            }
        ));
        assert!(line_repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_line_rejects_invalid_values() {
        let (line_repo, station_repo) = repos().await;
        let handler = CreateLineHandler::new(line_repo, station_repo);

        let zero_distance = handler.handle(create_command(1, 2, 0)).await.unwrap_err();
        assert!(matches!(zero_distance, ApplicationError::ValidationError(_)));

        let same_endpoints = handler.handle(create_command(1, 1, 10)).await.unwrap_err();
        assert!(matches!(same_endpoints, ApplicationError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_update_line() {
        let (line_repo, station_repo) = repos().await;
        let created = CreateLineHandler::new(line_repo.clone(), station_repo.clone())
            .handle(create_command(1, 2, 10))
            .await
            .unwrap();

        let handler = UpdateLineHandler::new(line_repo.clone(), station_repo);
        let response = handler
            .handle(UpdateLine {
                line_id: LineId::new(created.id),
                name: "다른분당선".to_string(),
                color: "bg-blue-600".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.name, "다른분당선");
        assert_eq!(response.color, "bg-blue-600");
    }

    #[tokio::test]
    async fn test_update_line_with_deleted_station_is_not_saved() {
        let (line_repo, station_repo) = repos().await;
        let created = CreateLineHandler::new(line_repo.clone(), station_repo.clone())
            .handle(create_command(1, 2, 10))
            .await
            .unwrap();
        station_repo.delete(StationId::new(2)).await.unwrap();

        let handler = UpdateLineHandler::new(line_repo.clone(), station_repo);
        let err = handler
            .handle(UpdateLine {
                line_id: LineId::new(created.id),
                name: "다른분당선".to_string(),
                color: "bg-blue-600".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::NotFound {
                resource_type: "Station",
                id: 2
            }
        ));

        let stored = line_repo
            .find_by_id(LineId::new(created.id))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.name().as_str(), "신분당선");
        assert_eq!(stored.color().as_str(), "bg-red-600");
    }

    #[tokio::test]
    async fn test_update_missing_line() {
        let (line_repo, station_repo) = repos().await;
        let handler = UpdateLineHandler::new(line_repo, station_repo);

        let err = handler
            .handle(UpdateLine {
                line_id: LineId::new(5),
                name: "다른분당선".to_string(),
                color: "bg-blue-600".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::NotFound { id: 5, .. }));
    }

    #[tokio::test]
    async fn test_delete_line() {
        let (line_repo, station_repo) = repos().await;
        let created = CreateLineHandler::new(line_repo.clone(), station_repo)
            .handle(create_command(1, 2, 10))
            .await
            .unwrap();

        DeleteLineHandler::new(line_repo.clone())
            .handle(DeleteLine {
                line_id: LineId::new(created.id),
            })
            .await
            .unwrap();

        assert!(line_repo
            .find_by_id(LineId::new(created.id))
            .await
            .unwrap()
            .is_none());
    }
}
