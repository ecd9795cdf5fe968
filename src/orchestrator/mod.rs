//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量处理器
//! - 管理应用生命周期（初始化、运行、关闭浏览器）
//! - 登录一次，失败即终止整个运行
//! - 依次处理请求中的题型，可选执行重复清理
//! - 输出全局统计信息
//!
//! ### `exam_processor` - 单题型处理器
//! - 遍历 ID 区间
//! - 创建并复用 ExamFlow
//! - 保存记录
//! - 每个 ID 之后固定间隔
//! - 输出单题型的统计信息
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<ExamType>)
//!     ↓
//! exam_processor (处理 ID 区间)
//!     ↓
//! workflow::ExamFlow (处理单份试卷)
//!     ↓
//! services (能力层：classify / extract / reveal / assemble / store)
//!     ↓
//! infrastructure (基础设施：PageDriver / JsExecutor)
//! ```

pub mod batch_processor;
pub mod exam_processor;

// 重新导出主要类型
pub use batch_processor::{
    ctrl_c, dedup_only, run_until_interrupted, scrape_all, App, ExamTypeSummary, RunRequest,
    RunSummary,
};
pub use exam_processor::{process_exam_type, BatchStats};
