use std::time::Duration;

use tracing::warn;

/// 程序配置
///
/// 启动时从环境变量构建一次，之后只读，按引用传入各层。
#[derive(Clone, Debug)]
pub struct Config {
    /// 站点根地址
    pub base_url: String,
    /// 登录用户名
    pub username: String,
    /// 登录密码
    pub password: String,
    /// 输出根目录
    pub output_dir: String,
    /// 是否无头运行
    pub headless: bool,
    /// 浏览器可执行文件路径（为空时由 chromiumoxide 自动查找）
    pub chrome_executable: Option<String>,
    /// 每个试卷处理后的间隔（毫秒）
    pub pacing_delay_ms: u64,
    /// 选中选项后的等待（毫秒）
    pub select_settle_ms: u64,
    /// 交卷后的等待（毫秒）
    pub submit_settle_ms: u64,
    /// 交卷后等待跳转到结果页的最长时间（毫秒）
    pub results_wait_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://luyenthivstep.vn".to_string(),
            username: String::new(),
            password: String::new(),
            output_dir: "data".to_string(),
            headless: true,
            chrome_executable: None,
            pacing_delay_ms: 500,
            select_settle_ms: 300,
            submit_settle_ms: 500,
            results_wait_ms: 5000,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            base_url: std::env::var("VSTEP_BASE_URL").unwrap_or(default.base_url),
            username: std::env::var("VSTEP_USERNAME").unwrap_or(default.username),
            password: std::env::var("VSTEP_PASSWORD").unwrap_or(default.password),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or(default.output_dir),
            headless: default.headless,
            chrome_executable: std::env::var("CHROME_EXECUTABLE").ok().filter(|v| !v.is_empty()),
            pacing_delay_ms: env_or("PACING_DELAY_MS", default.pacing_delay_ms),
            select_settle_ms: env_or("SELECT_SETTLE_MS", default.select_settle_ms),
            submit_settle_ms: env_or("SUBMIT_SETTLE_MS", default.submit_settle_ms),
            results_wait_ms: env_or("RESULTS_WAIT_MS", default.results_wait_ms),
        }
    }

    /// 设置是否无头运行
    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// 缺少账号密码只告警，不阻止启动（登录时会失败）
    pub fn warn_if_incomplete(&self) -> bool {
        let complete = self.has_credentials();
        if !complete {
            warn!("⚠️ 未设置 VSTEP_USERNAME / VSTEP_PASSWORD，请先配置环境变量");
        }
        complete
    }

    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    /// 登录页地址
    pub fn login_url(&self) -> String {
        format!("{}/dang-nhap", self.base_url.trim_end_matches('/'))
    }

    pub fn pacing_delay(&self) -> Duration {
        Duration::from_millis(self.pacing_delay_ms)
    }

    pub fn select_settle(&self) -> Duration {
        Duration::from_millis(self.select_settle_ms)
    }

    pub fn submit_settle(&self) -> Duration {
        Duration::from_millis(self.submit_settle_ms)
    }

    pub fn results_wait(&self) -> Duration {
        Duration::from_millis(self.results_wait_ms)
    }

    /// 测试用：所有等待时间为 0
    pub fn without_delays(mut self) -> Self {
        self.pacing_delay_ms = 0;
        self.select_settle_ms = 0;
        self.submit_settle_ms = 0;
        self.results_wait_ms = 0;
        self
    }
}

/// 读取数字型环境变量，缺失或无法解析时使用默认值
fn env_or(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
