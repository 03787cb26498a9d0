//! Line HTTP Handlers

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

use crate::application::{CreateLine, DeleteLine, GetLine, ListLines, UpdateLine};
use crate::domain::line::LineId;
use crate::domain::station::StationId;
use crate::infrastructure::http::dto::{CreateLineRequest, LineDto, UpdateLineRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 创建线路
pub async fn create_line(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateLineRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;

    let command = CreateLine {
        name: request.name,
        color: request.color,
        up_station_id: StationId::new(request.up_station_id),
        down_station_id: StationId::new(request.down_station_id),
        distance: request.distance,
    };
    let line = state.create_line_handler.handle(command).await?;

    let location = format!("/lines/{}", line.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(LineDto::from(line)),
    ))
}

/// 列出所有线路
pub async fn list_lines(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LineDto>>, ApiError> {
    let lines = state.list_lines_handler.handle(ListLines).await?;
    Ok(Json(lines.into_iter().map(LineDto::from).collect()))
}

/// 获取线路
pub async fn get_line(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<LineDto>, ApiError> {
    let Path(id) = path?;

    let line = state
        .get_line_handler
        .handle(GetLine {
            line_id: LineId::new(id),
        })
        .await?;

    Ok(Json(line.into()))
}

/// 修改线路名称和颜色
pub async fn update_line(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateLineRequest>, JsonRejection>,
) -> Result<Json<LineDto>, ApiError> {
    let Path(id) = path?;
    let Json(request) = body?;

    let line = state
        .update_line_handler
        .handle(UpdateLine {
            line_id: LineId::new(id),
            name: request.name,
            color: request.color,
        })
        .await?;

    Ok(Json(line.into()))
}

/// 删除线路
pub async fn delete_line(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;

    state
        .delete_line_handler
        .handle(DeleteLine {
            line_id: LineId::new(id),
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::application::LineRepositoryPort;
    use crate::domain::line::LineId;
    use crate::infrastructure::http::test_support::TestApp;
    use axum::http::{header, StatusCode};

    const NEW_LINE: &str = r#"{
        "name": "신분당선",
        "color": "bg-red-600",
        "upStationId": 1,
        "downStationId": 2,
        "distance": 10
    }"#;

    #[tokio::test]
    async fn test_create_line() {
        let app = TestApp::seeded().await;

        let response = app.post("/lines", NEW_LINE).await;

        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(response.headers[header::LOCATION], "/lines/4");
        let json = response.json();
        assert_eq!(json["name"], "신분당선");
        assert_eq!(json["stations"][0]["name"], "교대역");
        assert_eq!(json["stations"][1]["name"], "역삼역");

        let sections = app.get("/lines/4/sections").await.json();
        assert_eq!(sections.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_line_with_unknown_station() {
        let app = TestApp::seeded().await;

        let response = app
            .post(
                "/lines",
                r#"{"name": "신분당선", "color": "bg-red-600", "upStationId": 1, "downStationId": 99, "distance": 10}"#,
            )
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body, "해당 id:99 로 data 를 찾을 수 없습니다.");
    }

    #[tokio::test]
    async fn test_create_line_with_missing_field() {
        let app = TestApp::seeded().await;

        let response = app
            .post("/lines", r#"{"name": "신분당선", "color": "bg-red-600"}"#)
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert!(response.body.starts_with("잘못된 요청입니다."));
    }

    #[tokio::test]
    async fn test_get_line_keeps_creation_endpoints() {
        let app = TestApp::seeded().await;

        // 线路 2 的区间为 4-5-7，返回创建时的起终点 4-5
        let json = app.get("/lines/2").await.json();

        assert_eq!(json["stations"][0]["name"], "수서역");
        assert_eq!(json["stations"][1]["name"], "서울역");
    }

    #[tokio::test]
    async fn test_list_lines() {
        let app = TestApp::seeded().await;

        let json = app.get("/lines").await.json();

        let names: Vec<_> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|line| line["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["1호선", "2호선", "3호선"]);
    }

    #[tokio::test]
    async fn test_update_line() {
        let app = TestApp::seeded().await;

        let response = app
            .patch("/lines/1", r#"{"name": "분당선", "color": "bg-yellow-600"}"#)
            .await;

        assert_eq!(response.status, StatusCode::OK);
        let json = app.get("/lines/1").await.json();
        assert_eq!(json["name"], "분당선");
        assert_eq!(json["color"], "bg-yellow-600");
    }

    #[tokio::test]
    async fn test_update_line_after_station_deleted() {
        let app = TestApp::seeded().await;
        assert_eq!(app.delete("/stations/6").await.status, StatusCode::NO_CONTENT);

        let response = app
            .patch("/lines/3", r#"{"name": "분당선", "color": "bg-yellow-600"}"#)
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body, "해당 id:6 로 data 를 찾을 수 없습니다.");

        let stored = app
            .line_repo
            .find_by_id(LineId::new(3))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.name().as_str(), "3호선");
    }

    #[tokio::test]
    async fn test_list_lines_after_station_deleted() {
        let app = TestApp::seeded().await;
        app.delete("/stations/6").await;

        let response = app.get("/lines").await;

        assert_eq!(response.status, StatusCode::OK);
        let ids: Vec<i64> = response
            .json()
            .as_array()
            .unwrap()
            .iter()
            .map(|line| line["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_missing_line() {
        let app = TestApp::seeded().await;

        let response = app.get("/lines/42").await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body, "해당 id:42 로 data 를 찾을 수 없습니다.");
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_bad_request() {
        let app = TestApp::seeded().await;

        let response = app.get("/lines/abc").await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_line() {
        let app = TestApp::seeded().await;

        assert_eq!(app.delete("/lines/3").await.status, StatusCode::NO_CONTENT);
        assert_eq!(app.get("/lines/3").await.status, StatusCode::BAD_REQUEST);
        assert_eq!(app.delete("/lines/3").await.status, StatusCode::NO_CONTENT);
    }
}
