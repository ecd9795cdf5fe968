//! 写作页提取

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{ExamBody, RawCardPage, Task};
use crate::services::extraction::ExtractedExam;

/// 字数要求，例如 "250 words" 或越南语的 "150 từ"（站点有时以错误编码输出）
static WORD_LIMIT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\s*(?:words|từ|t\u{e1}\u{bb}\u{ab})").expect("valid word limit regex")
});

/// 收集每个 `.card` 的正文
pub const SCRIPT: &str = r#"
    () => {
        const cards = Array.from(document.querySelectorAll('.card')).map(card => {
            const body = card.querySelector('.card-body');
            return body ? body.innerText : null;
        });
        return { title: document.title, cards };
    }
"#;

/// 第一个字数要求
pub fn parse_word_limit(text: &str) -> Option<u32> {
    WORD_LIMIT_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// 解析写作页；空卡片跳过（`task_number` 保留卡片位置），没有任务时返回 `None`
pub fn parse(raw: RawCardPage) -> Option<ExtractedExam> {
    let tasks: Vec<Task> = (1u32..)
        .zip(raw.cards.iter())
        .filter_map(|(task_number, card)| {
            let text = card.as_deref()?;
            let prompt = text.trim();
            if prompt.is_empty() {
                return None;
            }
            Some(Task {
                task_number,
                prompt: prompt.to_string(),
                word_limit: parse_word_limit(text),
            })
        })
        .collect();

    if tasks.is_empty() {
        return None;
    }

    Some(ExtractedExam {
        title: raw.title,
        body: ExamBody::Writing { tasks },
    })
}
