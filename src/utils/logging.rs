/// 日志工具模块
///
/// 提供日志初始化和格式化输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::models::ExamType;
use crate::orchestrator::{BatchStats, RunRequest, RunSummary};

/// 初始化 tracing 日志
///
/// 默认级别为 info，可用 `RUST_LOG` 覆盖。重复调用不会报错。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config, request: &RunRequest) {
    let types: Vec<&str> = request.exam_types.iter().map(|t| t.name()).collect();
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - VSTEP 试卷抓取");
    info!("🌐 站点: {}", config.base_url);
    info!("📚 题型: {}", types.join(", "));
    info!(
        "🔢 ID 区间: {}-{}",
        request.ids.start(),
        request.ids.end()
    );
    info!("📁 输出目录: {}", config.output_dir);
    info!("🧹 重复清理: {}", if request.cleanup { "开启" } else { "关闭" });
    info!("{}", "=".repeat(60));
}

/// 记录题型开始信息
pub fn log_exam_type_start(exam_type: ExamType, start: u32, end: u32) {
    info!("\n{}", "=".repeat(60));
    info!("📦 开始抓取 {} 试卷", exam_type);
    info!("📄 ID 区间: {}-{}", start, end);
    info!("{}", "=".repeat(60));
}

/// 记录题型完成信息
pub fn log_exam_type_complete(exam_type: ExamType, stats: &BatchStats) {
    info!("\n{}", "─".repeat(60));
    info!(
        "✓ {} 完成: 成功 {}/{}，跳过 {}，失败 {}",
        exam_type, stats.succeeded, stats.attempted, stats.skipped, stats.failed
    );
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
pub fn print_final_stats(summary: &RunSummary, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    for entry in &summary.exam_types {
        match entry.removed {
            Some(removed) => info!(
                "{:<10} ✅ {}/{}  🗑️ 删除重复 {}",
                entry.exam_type.name(),
                entry.stats.succeeded,
                entry.stats.attempted,
                removed
            ),
            None => info!(
                "{:<10} ✅ {}/{}",
                entry.exam_type.name(),
                entry.stats.succeeded,
                entry.stats.attempted
            ),
        }
    }
    info!("{}", "=".repeat(60));
    info!(
        "✅ 合计成功: {}/{}",
        summary.total_succeeded(),
        summary.total_attempted()
    );
    info!("\n数据已保存至: {}", config.output_dir);
}
