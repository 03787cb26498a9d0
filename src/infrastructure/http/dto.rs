//! Data Transfer Objects
//!
//! JSON 字段使用 camelCase

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::application::{LineResponse, SectionResponse, StationResponse};

/// 数字 id 和距离同时接受 JSON 数字与数字字符串（如 `"5"`）
fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(i64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

// ============================================================================
// Station DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct StationRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationDto {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<StationResponse> for StationDto {
    fn from(station: StationResponse) -> Self {
        Self {
            id: station.id,
            name: station.name,
            created_at: station.created_at,
            modified_at: station.updated_at,
        }
    }
}

/// 线路、区间中引用的车站
#[derive(Debug, Serialize)]
pub struct StationRefDto {
    pub id: i64,
    pub name: String,
}

impl From<StationResponse> for StationRefDto {
    fn from(station: StationResponse) -> Self {
        Self {
            id: station.id,
            name: station.name,
        }
    }
}

// ============================================================================
// Line DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLineRequest {
    pub name: String,
    pub color: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub up_station_id: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub down_station_id: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub distance: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateLineRequest {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDto {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub stations: Vec<StationRefDto>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<LineResponse> for LineDto {
    fn from(line: LineResponse) -> Self {
        Self {
            id: line.id,
            name: line.name,
            color: line.color,
            stations: line.stations.into_iter().map(StationRefDto::from).collect(),
            created_at: line.created_at,
            modified_at: line.updated_at,
        }
    }
}

// ============================================================================
// Section DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSectionRequest {
    #[serde(deserialize_with = "lenient_i64")]
    pub up_station_id: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub down_station_id: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub distance: i64,
}

/// `DELETE /lines/{id}/sections?stationId=`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveSectionQuery {
    pub station_id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDto {
    pub up_station: StationRefDto,
    pub down_station: StationRefDto,
    pub distance: i64,
}

impl From<SectionResponse> for SectionDto {
    fn from(section: SectionResponse) -> Self {
        Self {
            up_station: section.up_station.into(),
            down_station: section.down_station.into(),
            distance: section.distance,
        }
    }
}
