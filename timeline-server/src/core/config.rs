use std::path::PathBuf;

use crab_timeline::TimelineConfig;

/// 服务器配置 - 时间轴服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./work_dir | 工作目录 (日志、视图偏好) |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_TO_FILE | false | 是否写入滚动日志文件 |
/// | TIMELINE_* | 见 [`TimelineConfig`] | 时间轴布局常量 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/timeline HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储日志和视图偏好
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
    /// 是否写入文件日志
    pub log_to_file: bool,
    /// 时间轴布局常量
    pub timeline: TimelineConfig,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./work_dir".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_to_file: std::env::var("LOG_TO_FILE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            timeline: TimelineConfig::from_env(),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 视图偏好文件路径
    pub fn preferences_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("preferences.json")
    }

    /// 日志目录
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_overrides() {
        let config = Config::with_overrides("/tmp/timeline-test", 4321);
        assert_eq!(config.http_port, 4321);
        assert_eq!(
            config.preferences_path(),
            PathBuf::from("/tmp/timeline-test/preferences.json")
        );
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/timeline-test/logs"));
    }

    #[test]
    fn test_environment_flags() {
        let mut config = Config::with_overrides("/tmp", 3000);
        config.environment = "production".into();
        assert!(config.is_production());
        config.environment = "staging".into();
        assert!(!config.is_production());
    }
}
