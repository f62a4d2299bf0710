use thiserror::Error;

/// 服务器启动/运行错误
///
/// 请求级错误使用 [`shared::error::AppError`]，这里只覆盖进程级故障。
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("端口绑定失败: {0}")]
    Bind(#[source] std::io::Error),

    #[error("HTTP 服务异常: {0}")]
    Serve(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
