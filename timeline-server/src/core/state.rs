use std::path::PathBuf;
use std::sync::Arc;

use crab_timeline::{TimelineConfig, ViewPreferences};
use parking_lot::RwLock;

use crate::core::Config;

/// 服务器状态 - 所有处理器共享
///
/// 使用 Arc 实现浅拷贝，克隆成本极低。
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 服务器配置 (不可变) |
/// | timeline | 时间轴布局常量 |
/// | preferences | 当前视图偏好 (读多写少) |
/// | preferences_path | 视图偏好持久化文件 |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub timeline: Arc<TimelineConfig>,
    pub preferences: Arc<RwLock<ViewPreferences>>,
    pub preferences_path: PathBuf,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 读取已保存的视图偏好；文件损坏时回退到默认值并记录警告。
    pub fn initialize(config: &Config) -> Self {
        let preferences_path = config.preferences_path();
        let preferences = match ViewPreferences::load(&preferences_path) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(
                    path = %preferences_path.display(),
                    error = %e,
                    "Failed to load view preferences, using defaults"
                );
                ViewPreferences::default()
            }
        };

        Self {
            config: config.clone(),
            timeline: Arc::new(config.timeline.clone()),
            preferences: Arc::new(RwLock::new(preferences)),
            preferences_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crab_timeline::ViewMode;

    #[test]
    fn test_initialize_with_corrupt_preferences() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("preferences.json"), "garbage").unwrap();

        let config = Config::with_overrides(dir.path().to_string_lossy(), 0);
        let state = ServerState::initialize(&config);
        assert_eq!(state.preferences.read().view_mode, ViewMode::Timeline);
    }
}
