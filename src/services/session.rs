//! 登录会话 - 业务能力层

use tracing::{error, info};

use crate::config::Config;
use crate::error::{AppResult, SessionError};
use crate::infrastructure::PageDriver;
use crate::services::page_classifier::LOGIN_PATH;

pub const USERNAME_SELECTOR: &str = "#user_name";
pub const PASSWORD_SELECTOR: &str = "#password";
pub const LOGIN_BUTTON_SELECTOR: &str = "button.btn-primary";

/// 登录控制器
pub struct SessionController<'a> {
    config: &'a Config,
}

impl<'a> SessionController<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// 登录站点
    ///
    /// 提交后 URL 仍包含登录路径即视为失败，返回 `SessionError::LoginFailed`。
    pub async fn login(&self, page: &dyn PageDriver) -> AppResult<()> {
        let login_url = self.config.login_url();
        info!("🔐 正在登录: {}", login_url);

        page.navigate(&login_url).await?;
        page.fill(USERNAME_SELECTOR, &self.config.username).await?;
        page.fill(PASSWORD_SELECTOR, &self.config.password).await?;
        page.click(LOGIN_BUTTON_SELECTOR).await?;
        page.wait_for_settle().await?;

        let url = page.current_url().await?;
        if url.contains(LOGIN_PATH) {
            error!("❌ 登录失败");
            return Err(SessionError::LoginFailed { url }.into());
        }

        info!("✓ 登录成功");
        Ok(())
    }
}
