//! In-Memory Station Repository

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::application::ports::{RepositoryError, StationRepositoryPort};
use crate::domain::station::{Station, StationId, StationName};

/// 内存车站仓储
pub struct InMemoryStationRepository {
    stations: DashMap<StationId, Station>,
    next_id: AtomicI64,
}

impl InMemoryStationRepository {
    pub fn new() -> Self {
        Self {
            stations: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryStationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StationRepositoryPort for InMemoryStationRepository {
    async fn insert(&self, name: StationName) -> Result<Station, RepositoryError> {
        let id = StationId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let station = Station::new(id, name);
        self.stations.insert(id, station.clone());
        tracing::debug!(station_id = %id, "Station stored in memory");
        Ok(station)
    }

    async fn update(&self, station: &Station) -> Result<(), RepositoryError> {
        let mut stored = self
            .stations
            .get_mut(&station.id())
            .ok_or(RepositoryError::NotFound {
                resource_type: "Station",
                id: station.id().value(),
            })?;
        *stored = station.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: StationId) -> Result<Option<Station>, RepositoryError> {
        Ok(self.stations.get(&id).map(|s| s.value().clone()))
    }

    async fn find_all(&self) -> Result<Vec<Station>, RepositoryError> {
        let mut stations: Vec<Station> = self.stations.iter().map(|s| s.value().clone()).collect();
        stations.sort_by_key(|s| s.id());
        Ok(stations)
    }

    async fn delete(&self, id: StationId) -> Result<(), RepositoryError> {
        self.stations.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let repo = InMemoryStationRepository::new();

        let first = repo.insert(StationName::new("강남역").unwrap()).await.unwrap();
        let second = repo.insert(StationName::new("역삼역").unwrap()).await.unwrap();

        assert_eq!(first.id(), StationId::new(1));
        assert_eq!(second.id(), StationId::new(2));
        let names: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(names, vec!["강남역", "역삼역"]);
    }

    #[tokio::test]
    async fn test_update_missing_station() {
        let repo = InMemoryStationRepository::new();
        let station = Station::new(StationId::new(9), StationName::new("강남역").unwrap());

        assert!(matches!(
            repo.update(&station).await,
            Err(RepositoryError::NotFound { id: 9, .. })
        ));
    }
}
