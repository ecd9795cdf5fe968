//! 测试用的脚本化假页面
//!
//! 按 URL 注册页面内容和页面脚本的返回值，模拟登录跳转和交卷跳转。

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value as JsonValue};

use vstep_scraper::config::Config;
use vstep_scraper::error::{AppResult, BrowserError};
use vstep_scraper::infrastructure::PageDriver;
use vstep_scraper::services::answer_revealer::{ANSWERS_SCRIPT, SELECT_SCRIPT, SUBMIT_SELECTOR};
use vstep_scraper::services::session::LOGIN_BUTTON_SELECTOR;

pub const BASE_URL: &str = "https://vstep.test";

/// 测试配置：假站点地址、有账号、无等待
pub fn test_config(output_dir: &std::path::Path) -> Config {
    Config {
        base_url: BASE_URL.to_string(),
        username: "student".to_string(),
        password: "secret".to_string(),
        output_dir: output_dir.display().to_string(),
        ..Config::default()
    }
    .without_delays()
}

/// 单个假页面
#[derive(Debug, Clone, Default)]
pub struct MockExamPage {
    /// 页面 HTML
    pub content: String,
    /// 导航后实际停留的地址（模拟重定向）
    pub redirect_to: Option<String>,
    /// 提取脚本的返回值
    pub extraction: JsonValue,
    /// 是否有交卷按钮
    pub has_submit: bool,
    /// 结果页答案脚本的返回值；为 `None` 时交卷不会跳转
    pub results: Option<JsonValue>,
    /// 交卷后前几次读取 URL 仍停留在做题页（模拟慢跳转）
    pub results_lag: usize,
}

impl MockExamPage {
    pub fn new(extraction: JsonValue) -> Self {
        Self {
            content: "<html><body>exam</body></html>".to_string(),
            extraction,
            ..Self::default()
        }
    }

    pub fn with_results(mut self, results: JsonValue) -> Self {
        self.has_submit = true;
        self.results = Some(results);
        self
    }

    /// 交卷后要读取 `lag` 次 URL 之后才跳转到结果页
    pub fn with_slow_results(mut self, results: JsonValue, lag: usize) -> Self {
        self.results_lag = lag;
        self.with_results(results)
    }

    pub fn with_submit_but_no_results(mut self) -> Self {
        self.has_submit = true;
        self.results = None;
        self
    }

    pub fn redirected_to(mut self, url: &str) -> Self {
        self.redirect_to = Some(url.to_string());
        self
    }

    pub fn with_content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }
}

#[derive(Debug, Default)]
struct State {
    current_url: String,
    /// 当前所在假页面的注册地址
    current_page: Option<String>,
    /// (剩余读取次数, 结果页地址)
    pending_results: Option<(usize, String)>,
    visited: Vec<String>,
    fills: Vec<(String, String)>,
}

/// 脚本化的 `PageDriver`
pub struct MockPage {
    pages: HashMap<String, MockExamPage>,
    login_succeeds: bool,
    /// 对这些地址的提取脚本直接报错
    broken: Vec<String>,
    state: Mutex<State>,
}

impl MockPage {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            login_succeeds: true,
            broken: Vec::new(),
            state: Mutex::new(State::default()),
        }
    }

    pub fn with_page(mut self, url: &str, page: MockExamPage) -> Self {
        self.pages.insert(url.to_string(), page);
        self
    }

    pub fn with_broken_page(mut self, url: &str) -> Self {
        self.broken.push(url.to_string());
        self
    }

    pub fn rejecting_login(mut self) -> Self {
        self.login_succeeds = false;
        self
    }

    /// 依次访问过的地址
    pub fn visited(&self) -> Vec<String> {
        self.state.lock().unwrap().visited.clone()
    }

    pub fn fills(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().fills.clone()
    }

    fn current_page(&self) -> Option<MockExamPage> {
        let state = self.state.lock().unwrap();
        state
            .current_page
            .as_ref()
            .and_then(|url| self.pages.get(url))
            .cloned()
    }
}

/// 任何题型的原始结构都能从这个值反序列化出"空页面"
fn empty_extraction() -> JsonValue {
    json!({ "title": "", "audio_url": null, "blocks": [], "passages": [], "cards": [] })
}

#[async_trait]
impl PageDriver for MockPage {
    async fn navigate(&self, url: &str) -> AppResult<()> {
        let mut state = self.state.lock().unwrap();
        state.visited.push(url.to_string());
        state.current_page = Some(url.to_string());
        state.pending_results = None;
        state.current_url = self
            .pages
            .get(url)
            .and_then(|page| page.redirect_to.clone())
            .unwrap_or_else(|| url.to_string());
        Ok(())
    }

    async fn wait_for_settle(&self) -> AppResult<()> {
        Ok(())
    }

    async fn current_url(&self) -> AppResult<String> {
        let mut state = self.state.lock().unwrap();
        if let Some((remaining, target)) = state.pending_results.take() {
            if remaining == 0 {
                state.current_url = target;
            } else {
                state.pending_results = Some((remaining - 1, target));
            }
        }
        Ok(state.current_url.clone())
    }

    async fn content(&self) -> AppResult<String> {
        Ok(self
            .current_page()
            .map(|page| page.content)
            .unwrap_or_default())
    }

    async fn eval(&self, js_code: &str) -> AppResult<JsonValue> {
        let page = self.current_page();

        if js_code == SELECT_SCRIPT {
            return Ok(json!(1));
        }
        if js_code == ANSWERS_SCRIPT {
            return Ok(page
                .and_then(|p| p.results)
                .unwrap_or_else(|| json!({ "answers": [] })));
        }

        let current = self.state.lock().unwrap().current_page.clone();
        if current.map_or(false, |url| self.broken.contains(&url)) {
            return Err(BrowserError::ElementNotFound {
                selector: "script".to_string(),
            }
            .into());
        }

        Ok(page
            .map(|p| p.extraction)
            .filter(|v| !v.is_null())
            .unwrap_or_else(empty_extraction))
    }

    async fn fill(&self, selector: &str, value: &str) -> AppResult<()> {
        self.state
            .lock()
            .unwrap()
            .fills
            .push((selector.to_string(), value.to_string()));
        Ok(())
    }

    async fn click(&self, selector: &str) -> AppResult<bool> {
        if selector == LOGIN_BUTTON_SELECTOR {
            if self.login_succeeds {
                self.state.lock().unwrap().current_url = format!("{}/", BASE_URL);
            }
            return Ok(true);
        }

        if selector == SUBMIT_SELECTOR {
            let Some(page) = self.current_page() else {
                return Ok(false);
            };
            if !page.has_submit {
                return Ok(false);
            }
            if page.results.is_some() {
                let mut state = self.state.lock().unwrap();
                let target = format!("{}/ket-qua", state.current_url);
                if page.results_lag == 0 {
                    state.current_url = target;
                } else {
                    state.pending_results = Some((page.results_lag, target));
                }
            }
            return Ok(true);
        }

        Ok(false)
    }
}
