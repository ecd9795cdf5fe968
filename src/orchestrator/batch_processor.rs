//! 批量处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责资源管理和题型调度。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：启动浏览器、创建 JsExecutor
//! 2. **登录**：整个运行只登录一次，失败即终止
//! 3. **顺序抓取**：按题型依次调用 `exam_processor`
//! 4. **重复清理**：可选，每个题型抓取完成后执行
//! 5. **资源释放**：`shutdown()` 关闭浏览器，无论运行成功、失败还是被 Ctrl-C 中断都要调用
//! 6. **全局统计**：汇总所有题型的处理结果
//!
//! 站点同一时间只允许一个做题会话，因此所有题型共用一个页面、严格顺序执行。

use std::future::Future;
use std::ops::RangeInclusive;

use anyhow::Result;
use tracing::{error, info, warn};

use crate::browser::{self, BrowserSession};
use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::{JsExecutor, PageDriver};
use crate::models::ExamType;
use crate::orchestrator::exam_processor::{process_exam_type, BatchStats};
use crate::services::{DuplicateReducer, ExamStore, SessionController};
use crate::utils::logging::{log_startup, print_final_stats};

/// 一次运行的参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    /// 要处理的题型（按顺序）
    pub exam_types: Vec<ExamType>,
    /// ID 闭区间
    pub ids: RangeInclusive<u32>,
    /// 抓取后是否清理重复记录
    pub cleanup: bool,
}

/// 单个题型的运行结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamTypeSummary {
    pub exam_type: ExamType,
    pub stats: BatchStats,
    /// 未执行清理时为 `None`
    pub removed: Option<usize>,
}

/// 整次运行的结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub exam_types: Vec<ExamTypeSummary>,
}

impl RunSummary {
    pub fn total_succeeded(&self) -> usize {
        self.exam_types.iter().map(|s| s.stats.succeeded).sum()
    }

    pub fn total_attempted(&self) -> usize {
        self.exam_types.iter().map(|s| s.stats.attempted).sum()
    }
}

/// 登录并依次抓取请求中的所有题型
///
/// 只有登录失败会返回错误；单份试卷的失败在 `process_exam_type` 内部消化。
pub async fn scrape_all(
    page: &dyn PageDriver,
    store: &ExamStore,
    config: &Config,
    request: &RunRequest,
) -> AppResult<RunSummary> {
    SessionController::new(config).login(page).await?;

    let mut summary = RunSummary::default();
    for &exam_type in &request.exam_types {
        let stats = process_exam_type(page, store, config, exam_type, request.ids.clone()).await;

        let removed = if request.cleanup {
            match DuplicateReducer::new(store).reduce(exam_type).await {
                Ok(report) => Some(report.removed),
                Err(e) => {
                    error!("❌ {} 重复清理失败: {}", exam_type, e);
                    None
                }
            }
        } else {
            None
        };

        summary.exam_types.push(ExamTypeSummary {
            exam_type,
            stats,
            removed,
        });
    }

    Ok(summary)
}

/// 只清理已保存记录中的重复项，不启动浏览器
pub async fn dedup_only(store: &ExamStore, exam_types: &[ExamType]) -> AppResult<usize> {
    let mut removed = 0;
    for &exam_type in exam_types {
        removed += DuplicateReducer::new(store).reduce(exam_type).await?.removed;
    }
    Ok(removed)
}

/// 运行 `work`，直到它完成或 `interrupt` 先触发
///
/// 被中断时返回 `None`，`work` 在此处被丢弃，调用方随后负责释放浏览器。
pub async fn run_until_interrupted<W, I>(work: W, interrupt: I) -> Option<W::Output>
where
    W: Future,
    I: Future<Output = ()>,
{
    tokio::select! {
        output = work => Some(output),
        _ = interrupt => {
            warn!("⚠️ 收到中断信号，停止抓取");
            None
        }
    }
}

/// 等待 Ctrl-C；无法注册信号处理时永不触发
pub async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("无法监听 Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

/// 应用主结构
pub struct App {
    config: Config,
    session: BrowserSession,
    executor: JsExecutor,
    store: ExamStore,
}

impl App {
    /// 初始化应用：启动浏览器
    pub async fn initialize(config: Config) -> Result<Self> {
        config.warn_if_incomplete();

        let session = browser::launch_browser(&config).await?;

        // 创建 JsExecutor（持有 page）
        let executor = JsExecutor::new(session.page.clone());
        let store = ExamStore::new(&config.output_dir);

        Ok(Self {
            config,
            session,
            executor,
            store,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self, request: &RunRequest) -> Result<RunSummary> {
        log_startup(&self.config, request);

        let summary = scrape_all(&self.executor, &self.store, &self.config, request)
            .await
            .map_err(|e| {
                error!("❌ 运行终止: {}", e);
                e
            })?;

        print_final_stats(&summary, &self.config);
        Ok(summary)
    }

    /// 关闭浏览器
    pub async fn shutdown(self) {
        info!("正在关闭浏览器...");
        self.session.close().await;
    }
}
