//! 试卷处理流程 - 流程层
//!
//! 核心职责：定义"一份试卷"的完整处理流程
//!
//! 流程顺序：
//! 1. 导航到做题页 → 判断页面是否有效
//! 2. 提取内容
//! 3. 交卷获取答案（仅听力 / 阅读）
//! 4. 组装输出记录

use std::fmt;

use tracing::{info, warn};

use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::PageDriver;
use crate::models::ExamRecord;
use crate::services::{AnswerRevealer, ExtractionEngine, PageClassifier, RecordAssembler};
use crate::utils::text::truncate_text;
use crate::workflow::exam_ctx::ExamCtx;

/// 跳过原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// 被重定向或为 VIP 内容
    InvalidPage,
    /// 页面没有可提取的内容
    NoContent,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::InvalidPage => write!(f, "页面无效"),
            SkipReason::NoContent => write!(f, "没有可提取的内容"),
        }
    }
}

/// 试卷处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessResult {
    /// 处理成功
    Success(Box<ExamRecord>),
    /// 跳过
    Skipped(SkipReason),
}

/// 试卷处理流程
///
/// - 编排单份试卷的处理流程
/// - 不持有任何资源（page）
/// - 只依赖业务能力（services）
pub struct ExamFlow<'a> {
    answer_revealer: AnswerRevealer<'a>,
}

impl<'a> ExamFlow<'a> {
    /// 创建新的试卷处理流程
    pub fn new(config: &'a Config) -> Self {
        Self {
            answer_revealer: AnswerRevealer::new(config),
        }
    }

    pub async fn run(&self, page: &dyn PageDriver, ctx: &ExamCtx) -> AppResult<ProcessResult> {
        info!("{} 🔍 开始抓取", ctx);
        page.navigate(&ctx.exam_url).await?;

        // ========== 1. 页面有效性 ==========
        let current_url = page.current_url().await?;
        let content = page.content().await?;
        if !PageClassifier::is_valid_page(&current_url, &content) {
            warn!("{} ⚠️ 跳过: 页面无效 ({})", ctx, current_url);
            return Ok(ProcessResult::Skipped(SkipReason::InvalidPage));
        }

        // ========== 2. 提取内容 ==========
        let Some(mut extracted) = ExtractionEngine::extract(page, ctx.exam_type).await? else {
            warn!("{} ⚠️ 跳过: 没有可提取的内容", ctx);
            return Ok(ProcessResult::Skipped(SkipReason::NoContent));
        };

        // ========== 3. 交卷获取答案 ==========
        if ctx.exam_type.reveals_answers() {
            match self.answer_revealer.reveal(page).await? {
                Some(answers) => extracted.body.apply_answers(&answers),
                None => info!("{} 未获取到答案，正确答案留空", ctx),
            }
        }

        // ========== 4. 组装记录 ==========
        let record =
            RecordAssembler::assemble(ctx.exam_type, ctx.exam_id, &ctx.exam_url, extracted);
        info!("{} ✓ 抓取完成: {}", ctx, truncate_text(&record.title, 60));

        Ok(ProcessResult::Success(Box::new(record)))
    }
}
