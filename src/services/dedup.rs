//! 重复试卷清理
//!
//! 站点上不同 ID 经常指向同一套题。按 ID 数字升序遍历已保存的记录，
//! 用各题型的内容指纹判重，保留最早的 ID，删除之后出现的重复记录。

use std::collections::HashSet;

use tracing::{info, warn};

use crate::error::AppResult;
use crate::models::{ExamBody, ExamRecord, ExamType};
use crate::services::storage::ExamStore;
use crate::utils::text::take_chars;

/// 听力只比较前几道题
const LISTENING_FINGERPRINT_QUESTIONS: usize = 3;
/// 阅读文章 / 写作题目比较的前缀长度
const PROMPT_PREFIX_CHARS: usize = 200;
/// 口语说明比较的前缀长度
const INSTRUCTION_PREFIX_CHARS: usize = 100;

/// 清理结果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DedupReport {
    pub scanned: usize,
    pub removed: usize,
}

/// 计算记录的内容指纹（不持久化，只用于本次判重）
pub fn fingerprint(record: &ExamRecord) -> String {
    match &record.body {
        ExamBody::Listening { questions, .. } => {
            let head = &questions[..questions.len().min(LISTENING_FINGERPRINT_QUESTIONS)];
            format!("{:?}", head)
        }
        ExamBody::Reading { passages } => {
            let prefixes: Vec<String> = passages
                .iter()
                .map(|p| take_chars(&p.content, PROMPT_PREFIX_CHARS))
                .collect();
            format!("{:?}", prefixes)
        }
        ExamBody::Writing { tasks } => {
            let prefixes: Vec<String> = tasks
                .iter()
                .map(|t| take_chars(&t.prompt, PROMPT_PREFIX_CHARS))
                .collect();
            format!("{:?}", prefixes)
        }
        ExamBody::Speaking { parts } => {
            let keys: Vec<String> = parts
                .iter()
                .map(|p| {
                    format!(
                        "{}{}",
                        p.topic.as_deref().unwrap_or_default(),
                        take_chars(&p.instructions, INSTRUCTION_PREFIX_CHARS)
                    )
                })
                .collect();
            format!("{:?}", keys)
        }
    }
}

/// 重复记录清理器
pub struct DuplicateReducer<'a> {
    store: &'a ExamStore,
}

impl<'a> DuplicateReducer<'a> {
    pub fn new(store: &'a ExamStore) -> Self {
        Self { store }
    }

    /// 清理某一题型的重复记录
    ///
    /// 无法读取的文件保留原样并记录警告。
    pub async fn reduce(&self, exam_type: ExamType) -> AppResult<DedupReport> {
        let stored = self.store.list(exam_type).await?;
        let mut seen = HashSet::new();
        let mut report = DedupReport::default();

        for entry in stored {
            let record = match self.store.load(&entry.path).await {
                Ok(record) => record,
                Err(e) => {
                    warn!("跳过无法读取的记录 {}: {}", entry.path.display(), e);
                    continue;
                }
            };
            report.scanned += 1;

            if !seen.insert(fingerprint(&record)) {
                self.store.delete(&entry.path).await?;
                info!("🗑️ 删除重复的 {} #{}", exam_type, entry.exam_id);
                report.removed += 1;
            }
        }

        info!(
            "已删除 {} 份重复的 {} 试卷 (共检查 {} 份)",
            report.removed, exam_type, report.scanned
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OptionLetter, Passage, Question, SpeakingPart};
    use chrono::NaiveDate;

    fn record(body: ExamBody) -> ExamRecord {
        ExamRecord {
            exam_type: body.exam_type(),
            exam_id: "1".to_string(),
            title: "title".to_string(),
            source_url: "https://luyenthivstep.vn".to_string(),
            scraped_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .unwrap(),
            body,
        }
    }

    fn question(number: u32, text: &str) -> Question {
        Question {
            question_number: number,
            options: [(OptionLetter::A, text.to_string())].into_iter().collect(),
            correct_answer: None,
        }
    }

    #[test]
    fn listening_fingerprint_only_looks_at_first_three_questions() {
        let base: Vec<Question> = (1..=3).map(|n| question(n, "same")).collect();
        let mut longer = base.clone();
        longer.push(question(4, "different tail"));

        let a = record(ExamBody::Listening {
            audio_url: Some("a.mp3".to_string()),
            questions: base,
        });
        let b = record(ExamBody::Listening {
            audio_url: Some("b.mp3".to_string()),
            questions: longer,
        });
        assert_eq!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn reading_fingerprint_uses_passage_prefixes_in_order() {
        let passage = |content: String| Passage {
            passage_number: 1,
            content,
            questions: vec![question(1, "x")],
        };
        let shared = "p".repeat(PROMPT_PREFIX_CHARS);

        let a = record(ExamBody::Reading {
            passages: vec![passage(format!("{}tail one", shared)), passage("second".into())],
        });
        let b = record(ExamBody::Reading {
            passages: vec![passage(format!("{}tail two", shared)), passage("second".into())],
        });
        let swapped = record(ExamBody::Reading {
            passages: vec![passage("second".into()), passage(format!("{}tail one", shared))],
        });

        assert_eq!(fingerprint(&a), fingerprint(&b));
        assert_ne!(fingerprint(&a), fingerprint(&swapped));
    }

    #[test]
    fn speaking_fingerprint_combines_topic_and_instructions() {
        let part = |topic: Option<&str>| SpeakingPart {
            part_number: 1,
            topic: topic.map(str::to_string),
            instructions: "Talk about it for two minutes please.".to_string(),
            follow_up_questions: vec![],
            speaking_time: None,
        };
        let a = record(ExamBody::Speaking {
            parts: vec![part(Some("Travel"))],
        });
        let b = record(ExamBody::Speaking {
            parts: vec![part(Some("Food"))],
        });
        assert_ne!(fingerprint(&a), fingerprint(&b));
    }
}
