//! 命令行参数

use clap::{Parser, ValueEnum};

use crate::models::ExamType;
use crate::orchestrator::RunRequest;

/// 命令行题型选项，`all` 表示四种题型依次抓取
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliExamType {
    Listening,
    Reading,
    Writing,
    Speaking,
    All,
}

impl CliExamType {
    /// 展开为实际要处理的题型（固定顺序）
    pub fn expand(self) -> Vec<ExamType> {
        match self {
            CliExamType::Listening => vec![ExamType::Listening],
            CliExamType::Reading => vec![ExamType::Reading],
            CliExamType::Writing => vec![ExamType::Writing],
            CliExamType::Speaking => vec![ExamType::Speaking],
            CliExamType::All => ExamType::ALL.to_vec(),
        }
    }
}

/// VSTEP 练习题抓取工具
#[derive(Debug, Parser)]
#[command(name = "vstep_scraper", version, about)]
pub struct Cli {
    /// 要抓取的题型
    #[arg(long = "type", value_enum)]
    pub exam_type: CliExamType,

    /// 起始 ID（包含）
    #[arg(long, default_value_t = 1)]
    pub start: u32,

    /// 结束 ID（包含）
    #[arg(long, default_value_t = 100)]
    pub end: u32,

    /// 显示浏览器窗口
    #[arg(long)]
    pub visible: bool,

    /// 抓取完成后清理重复试卷
    #[arg(long)]
    pub cleanup: bool,

    /// 只清理已保存的重复试卷，不启动浏览器
    #[arg(long)]
    pub dedup_only: bool,
}

impl Cli {
    pub fn exam_types(&self) -> Vec<ExamType> {
        self.exam_type.expand()
    }

    pub fn run_request(&self) -> RunRequest {
        RunRequest {
            exam_types: self.exam_types(),
            ids: self.start..=self.end,
            cleanup: self.cleanup,
        }
    }
}
