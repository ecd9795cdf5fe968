//! 单题型批量处理器 - 编排层
//!
//! ## 职责
//!
//! 对一种题型按 ID 区间（闭区间）顺序抓取：
//! 导航 → 判断 → 提取 → 交卷 → 组装 → 保存。
//!
//! 单份试卷的任何错误或跳过都只记录日志，继续下一个 ID；
//! 每个 ID 处理完后固定等待一段时间，避免请求过快。

use std::ops::RangeInclusive;

use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::infrastructure::PageDriver;
use crate::models::ExamType;
use crate::services::ExamStore;
use crate::utils::logging::{log_exam_type_complete, log_exam_type_start};
use crate::workflow::{ExamCtx, ExamFlow, ProcessResult};

/// 单题型统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub succeeded: usize,
    pub skipped: usize,
    pub failed: usize,
    pub attempted: usize,
}

/// 抓取一种题型的全部 ID
pub async fn process_exam_type(
    page: &dyn PageDriver,
    store: &ExamStore,
    config: &Config,
    exam_type: ExamType,
    ids: RangeInclusive<u32>,
) -> BatchStats {
    log_exam_type_start(exam_type, *ids.start(), *ids.end());

    let flow = ExamFlow::new(config);
    let mut stats = BatchStats::default();

    for exam_id in ids {
        stats.attempted += 1;
        let ctx = ExamCtx::new(exam_type, exam_id, &config.base_url);

        match flow.run(page, &ctx).await {
            Ok(ProcessResult::Success(record)) => match store.save(&record).await {
                Ok(_) => stats.succeeded += 1,
                Err(e) => {
                    error!("{} ❌ 保存失败: {}", ctx, e);
                    stats.failed += 1;
                }
            },
            Ok(ProcessResult::Skipped(reason)) => {
                info!("{} 已跳过: {}", ctx, reason);
                stats.skipped += 1;
            }
            Err(e) => {
                error!("{} ❌ 抓取出错: {}", ctx, e);
                stats.failed += 1;
            }
        }

        sleep(config.pacing_delay()).await;
    }

    if stats.attempted == 0 {
        warn!("⚠️ {} 的 ID 区间为空，未处理任何试卷", exam_type);
    }
    log_exam_type_complete(exam_type, &stats);

    stats
}
