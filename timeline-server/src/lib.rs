//! Timeline Server - 预订时间轴布局服务
//!
//! # 架构概述
//!
//! 为预订甘特图视图提供 HTTP 接口，布局计算全部由 `crab-timeline` 完成：
//!
//! - **布局** (`api/timeline`): 预订条像素位置、轨道分配、行高
//! - **可用桌台** (`api/timeline`): 按人数/楼层/区域筛选并推荐桌台
//! - **视图偏好** (`api/timeline`): 列表/时间轴切换、日期、楼层，持久化到工作目录
//!
//! # 模块结构
//!
//! ```text
//! timeline-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志等工具
//! ```

pub mod api;
pub mod core;
pub mod utils;

// Re-export 公共类型
pub use api::build_app;
pub use core::{Config, Server, ServerError, ServerState};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger_with_file};

/// 设置运行环境
///
/// 加载 `.env`，创建工作目录并初始化日志 (生产环境使用 JSON 格式)。
pub fn setup_environment() -> anyhow::Result<()> {
    // .env 可选
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    std::fs::create_dir_all(&config.work_dir)?;

    let log_dir = config.log_dir();
    let log_dir = log_dir.to_string_lossy();
    init_logger_with_file(
        &config.log_level,
        config.is_production(),
        config.log_to_file.then_some(&*log_dir),
    )?;

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ______           __
  / ____/________ _/ /_
 / /   / ___/ __ `/ __ \
/ /___/ /  / /_/ / /_/ /
\____/_/   \__,_/_.___/
  ______  _                 ___
 /_  __/ (_)___ ___  ___   / (_)___  ___
  / /   / / __ `__ \/ _ \ / / / __ \/ _ \
 / /   / / / / / / /  __// / / / / /  __/
/_/   /_/_/ /_/ /_/\___//_/_/_/ /_/\___/
    "#
    );
}
