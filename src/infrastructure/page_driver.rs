//! 页面自动化能力接口
//!
//! 上层（services / workflow）只通过这个 trait 操作页面，
//! 不直接接触 chromiumoxide，测试时可用脚本化的假页面替换。

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::error::AppResult;

/// 页面自动化能力
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// 导航到指定地址并等待加载完成
    async fn navigate(&self, url: &str) -> AppResult<()>;

    /// 等待当前导航 / 网络请求稳定
    async fn wait_for_settle(&self) -> AppResult<()>;

    /// 当前页面地址
    async fn current_url(&self) -> AppResult<String>;

    /// 当前页面 HTML
    async fn content(&self) -> AppResult<String>;

    /// 执行 JS 并返回 JSON 结果
    async fn eval(&self, js_code: &str) -> AppResult<JsonValue>;

    /// 向输入框填入文本
    async fn fill(&self, selector: &str, value: &str) -> AppResult<()>;

    /// 点击元素；元素不存在时返回 `Ok(false)`
    async fn click(&self, selector: &str) -> AppResult<bool>;
}
