//! Station Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateStation, DeleteStation, RenameStation};
use crate::application::error::ApplicationError;
use crate::application::ports::StationRepositoryPort;
use crate::application::queries::StationResponse;
use crate::domain::station::StationName;

// ============================================================================
// CreateStation
// ============================================================================

/// CreateStation Handler
pub struct CreateStationHandler {
    station_repo: Arc<dyn StationRepositoryPort>,
}

impl CreateStationHandler {
    pub fn new(station_repo: Arc<dyn StationRepositoryPort>) -> Self {
        Self { station_repo }
    }

    pub async fn handle(&self, command: CreateStation) -> Result<StationResponse, ApplicationError> {
        let name = StationName::new(command.name).map_err(ApplicationError::validation)?;

        let station = self.station_repo.insert(name).await?;

        tracing::info!(
            station_id = %station.id(),
            name = %station.name(),
            "Station created"
        );

        Ok(StationResponse::from(&station))
    }
}

// ============================================================================
// RenameStation
// ============================================================================

/// RenameStation Handler
pub struct RenameStationHandler {
    station_repo: Arc<dyn StationRepositoryPort>,
}

impl RenameStationHandler {
    pub fn new(station_repo: Arc<dyn StationRepositoryPort>) -> Self {
        Self { station_repo }
    }

    pub async fn handle(&self, command: RenameStation) -> Result<StationResponse, ApplicationError> {
        let station_id = command.station_id;

        let mut station = self
            .station_repo
            .find_by_id(station_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Station", station_id.value()))?;

        let name = StationName::new(command.name).map_err(ApplicationError::validation)?;
        station.rename(name);
        self.station_repo.update(&station).await?;

        tracing::info!(station_id = %station_id, name = %station.name(), "Station renamed");

        Ok(StationResponse::from(&station))
    }
}

// ============================================================================
// DeleteStation
// ============================================================================

/// DeleteStation Handler
///
/// 不检查车站是否仍被某条线路的区间引用
pub struct DeleteStationHandler {
    station_repo: Arc<dyn StationRepositoryPort>,
}

impl DeleteStationHandler {
    pub fn new(station_repo: Arc<dyn StationRepositoryPort>) -> Self {
        Self { station_repo }
    }

    pub async fn handle(&self, command: DeleteStation) -> Result<(), ApplicationError> {
        self.station_repo.delete(command.station_id).await?;

        tracing::info!(station_id = %command.station_id, "Station deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::station::StationId;
    use crate::infrastructure::memory::InMemoryStationRepository;

    #[tokio::test]
    async fn test_create_station() {
        let repo = Arc::new(InMemoryStationRepository::new());
        let handler = CreateStationHandler::new(repo.clone());

        let response = handler
            .handle(CreateStation {
                name: "강남역".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.name, "강남역");
        let stored = repo.find_by_id(StationId::new(response.id)).await.unwrap();
        assert!(stored.is_some());
    }

    #[tokio::test]
    async fn test_create_station_rejects_blank_name() {
        let handler = CreateStationHandler::new(Arc::new(InMemoryStationRepository::new()));

        let err = handler
            .handle(CreateStation {
                name: " ".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_rename_station() {
        let repo = Arc::new(InMemoryStationRepository::new());
        let station = repo.insert(StationName::new("강남역").unwrap()).await.unwrap();

        let handler = RenameStationHandler::new(repo.clone());
        handler
            .handle(RenameStation {
                station_id: station.id(),
                name: "역삼역".to_string(),
            })
            .await
            .unwrap();

        let stored = repo.find_by_id(station.id()).await.unwrap().unwrap();
        assert_eq!(stored.name().as_str(), "역삼역");
    }

    #[tokio::test]
    async fn test_rename_missing_station() {
        let handler = RenameStationHandler::new(Arc::new(InMemoryStationRepository::new()));

        let err = handler
            .handle(RenameStation {
                station_id: StationId::new(3),
                name: "역삼역".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::NotFound { id: 3, .. }));
    }

    #[tokio::test]
    async fn test_delete_station_is_permissive() {
        let repo = Arc::new(InMemoryStationRepository::new());
        let handler = DeleteStationHandler::new(repo.clone());

        // 不存在的车站也直接成功
        handler
            .handle(DeleteStation {
                station_id: StationId::new(7),
            })
            .await
            .unwrap();
    }
}
