//! Station Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::StationRepositoryPort;
use crate::application::queries::{GetStation, ListStations, StationResponse};

/// GetStation Handler
pub struct GetStationHandler {
    station_repo: Arc<dyn StationRepositoryPort>,
}

impl GetStationHandler {
    pub fn new(station_repo: Arc<dyn StationRepositoryPort>) -> Self {
        Self { station_repo }
    }

    pub async fn handle(&self, query: GetStation) -> Result<StationResponse, ApplicationError> {
        let station = self
            .station_repo
            .find_by_id(query.station_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Station", query.station_id.value()))?;

        Ok(StationResponse::from(&station))
    }
}

/// ListStations Handler
pub struct ListStationsHandler {
    station_repo: Arc<dyn StationRepositoryPort>,
}

impl ListStationsHandler {
    pub fn new(station_repo: Arc<dyn StationRepositoryPort>) -> Self {
        Self { station_repo }
    }

    pub async fn handle(&self, _query: ListStations) -> Result<Vec<StationResponse>, ApplicationError> {
        let stations = self.station_repo.find_all().await?;
        Ok(stations.iter().map(StationResponse::from).collect())
    }
}
