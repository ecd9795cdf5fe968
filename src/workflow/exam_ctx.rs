//! 试卷处理上下文
//!
//! 封装"我正在处理哪种题型的哪一份试卷"这一信息

use std::fmt::Display;

use crate::models::ExamType;

/// 试卷处理上下文
#[derive(Debug, Clone)]
pub struct ExamCtx {
    /// 题型
    pub exam_type: ExamType,

    /// 试卷 ID
    pub exam_id: u32,

    /// 做题页地址
    pub exam_url: String,
}

impl ExamCtx {
    /// 创建新的试卷上下文
    pub fn new(exam_type: ExamType, exam_id: u32, base_url: &str) -> Self {
        Self {
            exam_type,
            exam_id,
            exam_url: exam_type.exam_url(base_url, exam_id),
        }
    }
}

impl Display for ExamCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} #{}]", self.exam_type, self.exam_id)
    }
}
