//! 阅读页提取

use crate::models::{ExamBody, Passage, RawReadingPage};
use crate::services::extraction::options::block_to_question;
use crate::services::extraction::ExtractedExam;
use crate::utils::text::take_chars;

/// 文章正文最多保留的字符数
pub const MAX_PASSAGE_CHARS: usize = 3000;

/// 收集每个文章容器的正文和其中题块的选项文本
pub const SCRIPT: &str = r#"
    () => {
        const optionsOf = block => Array.from(block.querySelectorAll('.form-check, label'))
            .map(opt => (opt.innerText || '').trim());

        const passages = Array.from(document.querySelectorAll('.card, .passage')).map(card => {
            const body = card.querySelector('.card-body');
            return {
                body: body ? body.innerText : null,
                blocks: Array.from(card.querySelectorAll('.question-block'))
                    .map(block => ({ options: optionsOf(block) }))
            };
        });

        return { title: document.title, passages };
    }
"#;

/// 解析阅读页
///
/// - 没有题目的文章容器丢弃，`passage_number` 保留容器在页面上的位置
/// - 题号在所有保留的文章之间连续编号
/// - 全部文章都没有题目时返回 `None`
pub fn parse(raw: RawReadingPage) -> Option<ExtractedExam> {
    let mut next_number = 1u32;
    let mut passages = Vec::new();

    for (passage_number, raw_passage) in (1u32..).zip(raw.passages.iter()) {
        let mut questions: Vec<_> = raw_passage
            .blocks
            .iter()
            .filter_map(block_to_question)
            .collect();
        if questions.is_empty() {
            continue;
        }

        for question in questions.iter_mut() {
            question.question_number = next_number;
            next_number += 1;
        }

        let content = raw_passage
            .body
            .as_deref()
            .map(|body| take_chars(body.trim(), MAX_PASSAGE_CHARS))
            .unwrap_or_default();

        passages.push(Passage {
            passage_number,
            content,
            questions,
        });
    }

    if passages.is_empty() {
        return None;
    }

    Some(ExtractedExam {
        title: raw.title,
        body: ExamBody::Reading { passages },
    })
}
