//! HTTP Routes
//!
//! API Endpoints:
//! - /ping                         GET     健康检查
//! - /stations                     GET     列出所有车站
//! - /stations                     POST    创建车站
//! - /stations/{id}                GET     获取车站
//! - /stations/{id}                PATCH   修改车站名称
//! - /stations/{id}                DELETE  删除车站
//! - /lines                        GET     列出所有线路
//! - /lines                        POST    创建线路（同时创建第一个区间）
//! - /lines/{id}                   GET     获取线路
//! - /lines/{id}                   PATCH   修改线路名称和颜色
//! - /lines/{id}                   DELETE  删除线路
//! - /lines/{id}/sections          GET     按顺序列出区间
//! - /lines/{id}/sections          POST    在下行终点追加区间
//! - /lines/{id}/sections?stationId=  DELETE  移除下行终点区间

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(station_routes())
        .merge(line_routes())
}

/// Station 路由
fn station_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/stations",
            get(handlers::list_stations).post(handlers::create_station),
        )
        .route(
            "/stations/:id",
            get(handlers::get_station)
                .patch(handlers::update_station)
                .delete(handlers::delete_station),
        )
}

/// Line 与 Section 路由
fn line_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/lines", get(handlers::list_lines).post(handlers::create_line))
        .route(
            "/lines/:id",
            get(handlers::get_line)
                .patch(handlers::update_line)
                .delete(handlers::delete_line),
        )
        .route(
            "/lines/:id/sections",
            get(handlers::list_sections)
                .post(handlers::add_section)
                .delete(handlers::remove_section),
        )
}
