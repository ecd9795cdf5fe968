//! # VSTEP Scraper
//!
//! 一个用于抓取 VSTEP 练习站点试卷的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（Page），只暴露能力
//! - `PageDriver` - 页面自动化能力（导航、读取、执行脚本、填写、点击）
//! - `JsExecutor` - 唯一的 page owner，基于 chromiumoxide 实现 `PageDriver`
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单份试卷
//! - `SessionController` - 登录能力
//! - `PageClassifier` - 判断页面是否重定向 / VIP
//! - `ExtractionEngine` - 四种题型的内容提取
//! - `AnswerRevealer` - 交卷并读取正确答案
//! - `RecordAssembler` - 组装输出记录
//! - `ExamStore` / `DuplicateReducer` - 保存记录、清理重复
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一份试卷"的完整处理流程
//! - `ExamCtx` - 上下文封装（exam_type + exam_id + url）
//! - `ExamFlow` - 流程编排（classify → extract → reveal → assemble）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 管理浏览器资源，登录并依次处理题型
//! - `orchestrator/exam_processor` - 单题型处理器，遍历 ID 区间
//!
//! ## 模块结构

pub mod browser;
pub mod cli;
pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use browser::{launch_browser, BrowserSession};
pub use cli::Cli;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{JsExecutor, PageDriver};
pub use models::{ExamBody, ExamRecord, ExamType};
pub use orchestrator::{App, RunRequest, RunSummary};
pub use workflow::{ExamCtx, ExamFlow, ProcessResult};
