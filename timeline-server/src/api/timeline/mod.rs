//! Timeline API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/timeline/config | GET | 布局常量、小时刻度、网格宽度 |
//! | /api/timeline/layout | POST | 计算每张桌台的预订条位置和轨道 |
//! | /api/timeline/slot | GET | 点击位置 (px) 换算为 15 分钟对齐的时间 |
//! | /api/timeline/availability | POST | 查询可用桌台并推荐一张 |
//! | /api/timeline/assign | POST | 自动分配桌台，无可用时 409 |
//! | /api/timeline/preferences | GET/PUT | 视图偏好 (列表/时间轴、日期、楼层) |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub use handler::{
    AvailabilityRequest, AvailabilityResponse, ConfigResponse, LayoutRequest, SlotQuery,
    SlotResponse,
};

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/timeline", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/config", get(handler::config))
        .route("/layout", post(handler::layout))
        .route("/slot", get(handler::slot))
        .route("/availability", post(handler::availability))
        .route("/assign", post(handler::assign))
        .route(
            "/preferences",
            get(handler::get_preferences).put(handler::update_preferences),
        )
}
