use thiserror::Error;

use crate::models::ExamType;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 浏览器相关错误
    #[error("浏览器错误: {0}")]
    Browser(#[from] BrowserError),
    /// 登录会话错误（致命）
    #[error("会话错误: {0}")]
    Session(#[from] SessionError),
    /// 页面内容提取错误
    #[error("提取错误: {0}")]
    Extraction(#[from] ExtractionError),
    /// 存储错误
    #[error("存储错误: {0}")]
    Storage(#[from] StorageError),
}

/// 浏览器相关错误
#[derive(Debug, Error)]
pub enum BrowserError {
    /// 启动浏览器失败
    #[error("启动浏览器失败: {source}")]
    LaunchFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 浏览器配置失败
    #[error("浏览器配置失败: {message}")]
    ConfigurationFailed { message: String },
    /// 导航失败
    #[error("导航到 {url} 失败: {source}")]
    NavigationFailed {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 页面元素不存在
    #[error("页面元素不存在: {selector}")]
    ElementNotFound { selector: String },
    /// 执行脚本失败
    #[error("执行脚本失败: {source}")]
    ScriptExecutionFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// 登录会话错误
#[derive(Debug, Error)]
pub enum SessionError {
    /// 登录后仍停留在登录页
    #[error("登录失败，当前页面: {url}")]
    LoginFailed { url: String },
}

/// 页面内容提取错误
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// 页面脚本返回了意外的数据结构
    #[error("页面返回数据结构异常 ({exam_type}): {source}")]
    UnexpectedShape {
        exam_type: ExamType,
        source: serde_json::Error,
    },
    /// 答案页脚本返回了意外的数据结构
    #[error("答案页返回数据结构异常: {source}")]
    UnexpectedAnswerShape { source: serde_json::Error },
}

/// 存储错误
#[derive(Debug, Error)]
pub enum StorageError {
    /// 创建目录失败
    #[error("创建目录失败 ({path}): {source}")]
    CreateDirFailed {
        path: String,
        source: std::io::Error,
    },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        source: std::io::Error,
    },
    /// 删除文件失败
    #[error("删除文件失败 ({path}): {source}")]
    DeleteFailed {
        path: String,
        source: std::io::Error,
    },
    /// JSON 序列化/解析失败
    #[error("JSON 处理失败 ({path}): {source}")]
    JsonFailed {
        path: String,
        source: serde_json::Error,
    },
}

// ========== 从常见错误类型转换 ==========

impl From<chromiumoxide::error::CdpError> for AppError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        AppError::Browser(BrowserError::ScriptExecutionFailed {
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建导航失败错误
    pub fn navigation_failed(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Browser(BrowserError::NavigationFailed {
            url: url.into(),
            source: Box::new(source),
        })
    }

    /// 创建浏览器启动失败错误
    pub fn browser_launch_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::Browser(BrowserError::LaunchFailed {
            source: Box::new(source),
        })
    }

    /// 是否为致命错误（需要终止整个运行）
    pub fn is_fatal(&self) -> bool {
        matches!(self, AppError::Session(_))
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
