//! 内容提取 - 业务能力层
//!
//! 每种题型一个子模块：页面脚本只收集原始文本（`models::raw`），
//! 解析、过滤、编号都在 Rust 端完成，便于脱离浏览器测试。
//!
//! 提取结果为 `None` 表示页面没有可用内容，调用方应跳过该试卷。

pub mod listening;
pub mod options;
pub mod reading;
pub mod speaking;
pub mod writing;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{AppResult, ExtractionError};
use crate::infrastructure::PageDriver;
use crate::models::{ExamBody, ExamType};

/// 单页提取结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedExam {
    pub title: String,
    pub body: ExamBody,
}

/// 内容提取引擎（按题型分派）
pub struct ExtractionEngine;

impl ExtractionEngine {
    /// 提取当前页面内容
    ///
    /// # 返回
    /// - `Ok(Some(..))`: 提取成功
    /// - `Ok(None)`: 页面没有题目 / 任务 / 部分
    /// - `Err(..)`: 页面脚本失败或返回结构异常
    pub async fn extract(
        page: &dyn PageDriver,
        exam_type: ExamType,
    ) -> AppResult<Option<ExtractedExam>> {
        let extracted = match exam_type {
            ExamType::Listening => {
                let raw = evaluate_raw(page, listening::SCRIPT, exam_type).await?;
                listening::parse(raw)
            }
            ExamType::Reading => {
                let raw = evaluate_raw(page, reading::SCRIPT, exam_type).await?;
                reading::parse(raw)
            }
            ExamType::Writing => {
                let raw = evaluate_raw(page, writing::SCRIPT, exam_type).await?;
                writing::parse(raw)
            }
            ExamType::Speaking => {
                let raw = evaluate_raw(page, speaking::SCRIPT, exam_type).await?;
                speaking::parse(raw)
            }
        };
        Ok(extracted)
    }
}

/// 执行页面脚本并在边界处校验为强类型结构
async fn evaluate_raw<T: DeserializeOwned>(
    page: &dyn PageDriver,
    script: &str,
    exam_type: ExamType,
) -> AppResult<T> {
    let value = page.eval(script).await?;
    debug!("{} 页面脚本返回: {}", exam_type, value);
    let raw = serde_json::from_value(value)
        .map_err(|source| ExtractionError::UnexpectedShape { exam_type, source })?;
    Ok(raw)
}
