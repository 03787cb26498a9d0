//! Station HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::application::{
    CreateStation, DeleteStation, GetStation, ListStations, RenameStation,
};
use crate::domain::station::StationId;
use crate::infrastructure::http::dto::{StationDto, StationRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 创建车站
pub async fn create_station(
    State(state): State<Arc<AppState>>,
    body: Result<Json<StationRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;

    let station = state
        .create_station_handler
        .handle(CreateStation { name: request.name })
        .await?;

    let location = format!("/stations/{}", station.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(StationDto::from(station)),
    ))
}

/// 列出所有车站
pub async fn list_stations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StationDto>>, ApiError> {
    let stations = state.list_stations_handler.handle(ListStations).await?;
    Ok(Json(stations.into_iter().map(StationDto::from).collect()))
}

/// 获取车站
pub async fn get_station(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<StationDto>, ApiError> {
    let Path(id) = path?;

    let station = state
        .get_station_handler
        .handle(GetStation {
            station_id: StationId::new(id),
        })
        .await?;

    Ok(Json(station.into()))
}

/// 修改车站名称
pub async fn update_station(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<StationRequest>, JsonRejection>,
) -> Result<Json<StationDto>, ApiError> {
    let Path(id) = path?;
    let Json(request) = body?;

    let station = state
        .rename_station_handler
        .handle(RenameStation {
            station_id: StationId::new(id),
            name: request.name,
        })
        .await?;

    Ok(Json(station.into()))
}

/// 删除车站
pub async fn delete_station(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;

    state
        .delete_station_handler
        .handle(DeleteStation {
            station_id: StationId::new(id),
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::infrastructure::http::test_support::TestApp;
    use axum::http::{header, StatusCode};

    #[tokio::test]
    async fn test_create_and_get_station() {
        let app = TestApp::new();

        let created = app.post("/stations", r#"{"name": "강남역"}"#).await;
        assert_eq!(created.status, StatusCode::CREATED);
        assert_eq!(created.headers[header::LOCATION], "/stations/1");

        let fetched = app.get("/stations/1").await;
        assert_eq!(fetched.status, StatusCode::OK);
        let json = fetched.json();
        assert_eq!(json["name"], "강남역");
        assert!(json["modifiedAt"].is_string());
    }

    #[tokio::test]
    async fn test_list_stations_in_id_order() {
        let app = TestApp::seeded().await;

        let response = app.get("/stations").await;

        let json = response.json();
        let stations = json.as_array().unwrap();
        assert_eq!(stations.len(), 7);
        assert_eq!(stations[0]["name"], "교대역");
        assert_eq!(stations[6]["name"], "사당역");
    }

    #[tokio::test]
    async fn test_rename_station() {
        let app = TestApp::seeded().await;

        let response = app.patch("/stations/6", r#"{"name": "신논현역"}"#).await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(app.get("/stations/6").await.json()["name"], "신논현역");
    }

    #[tokio::test]
    async fn test_missing_station() {
        let app = TestApp::new();

        let response = app.get("/stations/3").await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body, "해당 id:3 로 data 를 찾을 수 없습니다.");
    }

    #[tokio::test]
    async fn test_blank_name_is_bad_request() {
        let app = TestApp::new();

        let response = app.post("/stations", r#"{"name": ""}"#).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert!(response.body.starts_with("잘못된 요청입니다."));
    }

    #[tokio::test]
    async fn test_delete_station() {
        let app = TestApp::seeded().await;

        let response = app.delete("/stations/1").await;

        assert_eq!(response.status, StatusCode::NO_CONTENT);
        assert_eq!(app.get("/stations/1").await.status, StatusCode::BAD_REQUEST);
    }
}
