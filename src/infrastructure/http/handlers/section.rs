//! Section HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{AddSection, GetLineSections, RemoveSection};
use crate::domain::line::LineId;
use crate::domain::station::StationId;
use crate::infrastructure::http::dto::{CreateSectionRequest, RemoveSectionQuery, SectionDto};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 在下行终点追加区间
pub async fn add_section(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<CreateSectionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SectionDto>), ApiError> {
    let Path(line_id) = path?;
    let Json(request) = body?;

    let command = AddSection {
        line_id: LineId::new(line_id),
        up_station_id: StationId::new(request.up_station_id),
        down_station_id: StationId::new(request.down_station_id),
        distance: request.distance,
    };
    let section = state.add_section_handler.handle(command).await?;

    Ok((StatusCode::CREATED, Json(section.into())))
}

/// 按顺序列出线路的区间
pub async fn list_sections(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<SectionDto>>, ApiError> {
    let Path(line_id) = path?;

    let sections = state
        .get_line_sections_handler
        .handle(GetLineSections {
            line_id: LineId::new(line_id),
        })
        .await?;

    Ok(Json(sections.into_iter().map(SectionDto::from).collect()))
}

/// 移除下行终点区间
pub async fn remove_section(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<RemoveSectionQuery>, QueryRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(line_id) = path?;
    let Query(query) = query?;

    state
        .remove_section_handler
        .handle(RemoveSection {
            line_id: LineId::new(line_id),
            station_id: StationId::new(query.station_id),
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
