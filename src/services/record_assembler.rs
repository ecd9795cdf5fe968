//! 输出记录组装

use chrono::{Local, NaiveDateTime, Timelike};

use crate::models::{ExamRecord, ExamType};
use crate::services::extraction::ExtractedExam;

/// 组装最终输出记录（纯合并，不做额外校验）
pub struct RecordAssembler;

impl RecordAssembler {
    /// 使用当前本地时间（精确到秒）组装
    pub fn assemble(
        exam_type: ExamType,
        exam_id: u32,
        source_url: &str,
        extracted: ExtractedExam,
    ) -> ExamRecord {
        let now = Local::now().naive_local();
        let scraped_at = now.with_nanosecond(0).unwrap_or(now);
        Self::assemble_at(exam_type, exam_id, source_url, extracted, scraped_at)
    }

    pub fn assemble_at(
        exam_type: ExamType,
        exam_id: u32,
        source_url: &str,
        extracted: ExtractedExam,
        scraped_at: NaiveDateTime,
    ) -> ExamRecord {
        ExamRecord {
            exam_type,
            exam_id: exam_id.to_string(),
            title: extracted.title,
            source_url: source_url.to_string(),
            scraped_at,
            body: extracted.body,
        }
    }
}
