//! 选项文本解析（听力 / 阅读共用）

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{OptionLetter, Question, RawQuestionBlock};

/// 选项格式: `A. 文本` / `B) 文本` / `C: 文本` / `D 文本`
static OPTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-D])[.):\s]\s*(.+)").expect("valid option regex"));

/// 解析单个选项元素的文本
pub fn parse_option(text: &str) -> Option<(OptionLetter, String)> {
    let caps = OPTION_PATTERN.captures(text.trim())?;
    let letter = caps
        .get(1)
        .and_then(|m| m.as_str().chars().next())
        .and_then(OptionLetter::from_char)?;
    let body = caps.get(2)?.as_str().trim().to_string();
    Some((letter, body))
}

/// 解析一个题块的全部选项，同一字母后出现的覆盖先出现的
pub fn parse_block(block: &RawQuestionBlock) -> BTreeMap<OptionLetter, String> {
    block
        .options
        .iter()
        .filter_map(|text| parse_option(text))
        .collect()
}

/// 把题块转换为题目；没有任何可识别选项的题块丢弃
///
/// 返回的题目尚未编号（`question_number` 为 0），由调用方按出现顺序编号。
pub fn block_to_question(block: &RawQuestionBlock) -> Option<Question> {
    let options = parse_block(block);
    if options.is_empty() {
        return None;
    }
    Some(Question {
        question_number: 0,
        options,
        correct_answer: None,
    })
}
