//! Timeline API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::Local;
use crab_timeline::{
    AvailabilityQuery, TimelineConfig, TimelineLayout, ViewPreferences, available_tables,
    suggest_table,
};
use serde::{Deserialize, Serialize};
use shared::models::{DiningTable, Reservation};

use crate::core::ServerState;
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};

/// GET /api/timeline/config 响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    #[serde(flatten)]
    pub config: TimelineConfig,
    pub hour_labels: Vec<String>,
    pub grid_width: f64,
    pub timeline_width: f64,
    /// "现在" 标记的位置，营业时间外为 null
    pub current_time_position: Option<f64>,
}

/// GET /api/timeline/config - 时间轴布局常量
pub async fn config(State(state): State<ServerState>) -> ApiResponse<ConfigResponse> {
    let config = state.timeline.as_ref();
    ApiResponse::success(ConfigResponse {
        hour_labels: config.hour_labels(),
        grid_width: config.grid_width(),
        timeline_width: config.timeline_width(),
        current_time_position: config.current_time_position(Local::now().time()),
        config: config.clone(),
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRequest {
    #[serde(default)]
    pub tables: Vec<DiningTable>,
    #[serde(default)]
    pub reservations: Vec<Reservation>,
    /// 只显示某一楼层，缺省为全部
    #[serde(default)]
    pub floor: Option<i32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResponse {
    #[serde(flatten)]
    pub layout: TimelineLayout,
    pub total_height: f64,
}

/// POST /api/timeline/layout - 计算预订条位置与轨道
///
/// 不会因数据问题失败：无法解析的时间按 0 分钟处理并记录警告。
pub async fn layout(
    State(state): State<ServerState>,
    Json(payload): Json<LayoutRequest>,
) -> ApiResponse<LayoutResponse> {
    let layout = TimelineLayout::build(
        &state.timeline,
        &payload.tables,
        &payload.reservations,
        payload.floor,
    );
    ApiResponse::success(LayoutResponse {
        total_height: layout.total_height(),
        layout,
    })
}

#[derive(Debug, Deserialize)]
pub struct SlotQuery {
    /// 相对网格左侧的像素偏移
    pub x: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SlotResponse {
    pub time: String,
}

/// GET /api/timeline/slot?x= - 点击位置换算为时间
pub async fn slot(
    State(state): State<ServerState>,
    Query(query): Query<SlotQuery>,
) -> ApiResponse<SlotResponse> {
    ApiResponse::success(SlotResponse {
        time: state.timeline.pixel_to_time(query.x),
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRequest {
    #[serde(default)]
    pub tables: Vec<DiningTable>,
    #[serde(default)]
    pub reservations: Vec<Reservation>,
    pub query: AvailabilityQuery,
    /// 自动分配时优先考虑的桌台
    #[serde(default)]
    pub preferred_table_id: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub available: Vec<DiningTable>,
    pub suggested: Option<DiningTable>,
}

/// 指定的优先桌台必须存在于请求的桌台列表中
fn check_preferred(payload: &AvailabilityRequest) -> AppResult<()> {
    match payload.preferred_table_id {
        Some(id) if !payload.tables.iter().any(|t| t.table_id == id) => {
            Err(AppError::new(ErrorCode::TableNotFound).with_detail("table_id", id))
        }
        _ => Ok(()),
    }
}

/// POST /api/timeline/availability - 查询可用桌台
pub async fn availability(
    Json(payload): Json<AvailabilityRequest>,
) -> AppResult<ApiResponse<AvailabilityResponse>> {
    check_preferred(&payload)?;
    let available = available_tables(&payload.tables, &payload.reservations, &payload.query)?;
    let suggested = suggest_table(
        &available,
        payload.query.party_size,
        payload.preferred_table_id,
    )
    .cloned();

    Ok(ApiResponse::success(AvailabilityResponse {
        available: available.into_iter().cloned().collect(),
        suggested,
    }))
}

/// POST /api/timeline/assign - 自动分配桌台
///
/// 无可用桌台时返回 409 (NoTableAvailable)。
pub async fn assign(Json(payload): Json<AvailabilityRequest>) -> AppResult<ApiResponse<DiningTable>> {
    check_preferred(&payload)?;
    let available = available_tables(&payload.tables, &payload.reservations, &payload.query)?;
    let table = suggest_table(
        &available,
        payload.query.party_size,
        payload.preferred_table_id,
    )
    .cloned()
    .ok_or_else(|| {
        AppError::new(ErrorCode::NoTableAvailable)
            .with_detail("time", payload.query.time.clone())
            .with_detail("party_size", payload.query.party_size)
    })?;

    tracing::info!(
        table_id = table.table_id,
        time = %payload.query.time,
        party_size = payload.query.party_size,
        "Table auto-assigned"
    );

    Ok(ApiResponse::success(table))
}

/// GET /api/timeline/preferences - 当前视图偏好
pub async fn get_preferences(State(state): State<ServerState>) -> ApiResponse<ViewPreferences> {
    ApiResponse::success(state.preferences.read().clone())
}

/// PUT /api/timeline/preferences - 保存视图偏好
pub async fn update_preferences(
    State(state): State<ServerState>,
    Json(payload): Json<ViewPreferences>,
) -> AppResult<ApiResponse<ViewPreferences>> {
    // 持有写锁完成落盘，内存与文件保持一致
    let mut current = state.preferences.write();
    payload.save(&state.preferences_path)?;
    *current = payload.clone();
    drop(current);

    tracing::info!(
        view_mode = ?payload.view_mode,
        date = %payload.selected_date,
        floor = ?payload.selected_floor,
        "View preferences updated"
    );

    Ok(ApiResponse::success(payload))
}
