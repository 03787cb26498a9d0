//! 路由测试工具：内存仓储 + `tower::ServiceExt::oneshot`

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use std::sync::Arc;
use tower::util::ServiceExt;

use super::{create_routes, AppState};
use crate::application::{LineRepositoryPort, StationRepositoryPort};
use crate::domain::line::{Distance, LineColor, LineDefinition, LineName, Section};
use crate::domain::station::{StationId, StationName};
use crate::infrastructure::memory::{InMemoryLineRepository, InMemoryStationRepository};

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

pub struct TestApp {
    router: Router,
    pub line_repo: Arc<InMemoryLineRepository>,
    pub station_repo: Arc<InMemoryStationRepository>,
}

/// 车站 1..=7
const STATIONS: [&str; 7] = [
    "교대역", "역삼역", "선릉역", "수서역", "서울역", "강남역", "사당역",
];

/// 线路 1: 3-4-5，线路 2: 4-5-7，线路 3: 6-7
const LINES: [(&str, &[(i64, i64)]); 3] = [
    ("1호선", &[(3, 4), (4, 5)]),
    ("2호선", &[(4, 5), (5, 7)]),
    ("3호선", &[(6, 7)]),
];

impl TestApp {
    pub fn new() -> Self {
        let line_repo = Arc::new(InMemoryLineRepository::new());
        let station_repo = Arc::new(InMemoryStationRepository::new());
        let state = AppState::new(line_repo.clone(), station_repo.clone());
        Self {
            router: create_routes().with_state(Arc::new(state)),
            line_repo,
            station_repo,
        }
    }

    /// 预置车站和三条线路
    pub async fn seeded() -> Self {
        let app = Self::new();

        for name in STATIONS {
            app.station_repo
                .insert(StationName::new(name).unwrap())
                .await
                .unwrap();
        }

        for (name, chain) in LINES {
            let (up, down) = chain[0];
            let mut line = app
                .line_repo
                .insert(
                    LineDefinition::new(
                        LineName::new(name).unwrap(),
                        LineColor::new("bg-red-600").unwrap(),
                        StationId::new(up),
                        StationId::new(down),
                        Distance::new(10).unwrap(),
                    )
                    .unwrap(),
                )
                .await
                .unwrap();
            for &(up, down) in &chain[1..] {
                line.add_section(Section::new(
                    StationId::new(up),
                    StationId::new(down),
                    Distance::new(10).unwrap(),
                ))
                .unwrap();
            }
            app.line_repo.save(&line).await.unwrap();
        }

        app
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, json: &str) -> TestResponse {
        self.request(Method::POST, uri, Some(json)).await
    }

    pub async fn patch(&self, uri: &str, json: &str) -> TestResponse {
        self.request(Method::PATCH, uri, Some(json)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None).await
    }
}
