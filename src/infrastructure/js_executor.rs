//! JS 执行器 - 基础设施层
//!
//! 持有唯一的 page 资源，只暴露页面操作能力

use async_trait::async_trait;
use chromiumoxide::Page;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::error::{AppError, AppResult, BrowserError};
use crate::infrastructure::PageDriver;

/// JS 执行器
///
/// 职责：
/// - 持有唯一的 Page 资源
/// - 实现 `PageDriver`
/// - 不认识 ExamRecord / Question
/// - 不处理业务流程
pub struct JsExecutor {
    page: Page,
}

impl JsExecutor {
    /// 创建新的 JS 执行器
    pub fn new(page: Page) -> Self {
        Self { page }
    }
}

#[async_trait]
impl PageDriver for JsExecutor {
    async fn navigate(&self, url: &str) -> AppResult<()> {
        debug!("导航到: {}", url);
        self.page
            .goto(url)
            .await
            .map_err(|e| AppError::navigation_failed(url, e))?;
        self.page
            .wait_for_navigation()
            .await
            .map_err(|e| AppError::navigation_failed(url, e))?;
        Ok(())
    }

    async fn wait_for_settle(&self) -> AppResult<()> {
        self.page.wait_for_navigation().await?;
        Ok(())
    }

    async fn current_url(&self) -> AppResult<String> {
        Ok(self.page.url().await?.unwrap_or_default())
    }

    async fn content(&self) -> AppResult<String> {
        Ok(self.page.content().await?)
    }

    /// 执行 JS 代码并返回 JSON 结果
    async fn eval(&self, js_code: &str) -> AppResult<JsonValue> {
        let result = self.page.evaluate(js_code.to_string()).await?;
        let json_value = result
            .into_value()
            .map_err(|e| BrowserError::ScriptExecutionFailed {
                source: Box::new(e),
            })?;
        Ok(json_value)
    }

    async fn fill(&self, selector: &str, value: &str) -> AppResult<()> {
        let element = self.page.find_element(selector).await.map_err(|_| {
            BrowserError::ElementNotFound {
                selector: selector.to_string(),
            }
        })?;
        element.click().await?;
        element.type_str(value).await?;
        Ok(())
    }

    async fn click(&self, selector: &str) -> AppResult<bool> {
        let elements = self.page.find_elements(selector).await?;
        match elements.first() {
            Some(element) => {
                element.click().await?;
                Ok(true)
            }
            None => {
                debug!("未找到可点击元素: {}", selector);
                Ok(false)
            }
        }
    }
}
