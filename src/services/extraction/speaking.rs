//! 口语页提取
//!
//! 口语卡片里混有录音控件的文案（麦克风 / 开始 / 停止 / 交卷 / 计时器），
//! 需要先清理再作为说明文字保存。站点文案同时存在正常编码和错误编码两种形式。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{ExamBody, RawCardPage, SpeakingPart};
use crate::services::extraction::ExtractedExam;

/// 说明文字短于等于该长度且没有话题时，视为非题目卡片
const MIN_INSTRUCTION_CHARS: usize = 20;

/// 录音控件文案：(字面文本, 是否连同行尾一起删除)
const UI_CHROME: [(&str, bool); 12] = [
    // 错误编码形式（站点实际下发）
    ("\u{f0}\u{178}\u{17d}\u{a4} Ghi \u{c3}\u{a2}m c\u{c3}\u{a2}u tr\u{e1}\u{ba}\u{a3} l\u{e1}\u{bb}i:", false),
    ("\u{e2}\u{b1} Th\u{e1}\u{bb}i gian ghi \u{c3}\u{a2}m", true),
    ("\u{e2}\u{ba} B\u{e1}\u{ba}\u{af}t \u{c4}\u{2018}\u{e1}\u{ba}\u{a7}u ghi \u{c3}\u{a2}m", false),
    ("\u{e2}\u{b9} D\u{e1}\u{bb}\u{ab}ng ghi \u{c3}\u{a2}m", false),
    ("\u{f0}\u{178}\u{201c}\u{a4} N\u{e1}\u{bb}\u{2122}p b\u{c3}\u{a0}i", false),
    ("\u{e2}\u{b1} --:--", false),
    // 正常编码形式
    ("🎤 Ghi âm câu trả lời:", false),
    ("⏱ Thời gian ghi âm", true),
    ("⏺ Bắt đầu ghi âm", false),
    ("⏹ Dừng ghi âm", false),
    ("📤 Nộp bài", false),
    ("⏱ --:--", false),
];

static UI_CHROME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    UI_CHROME
        .iter()
        .map(|(literal, to_line_end)| {
            let suffix = if *to_line_end { ".*" } else { "" };
            Regex::new(&format!("{}{}", regex::escape(literal), suffix))
                .expect("valid ui chrome regex")
        })
        .collect()
});

static EXTRA_BLANK_LINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("valid blank line regex"));

static TOPIC_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Topic:\s*(.+?)(?:\n|$)").expect("valid topic regex"));

/// 录音时长，例如 "2 phút"
static SPEAKING_TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\s*(?:phút|ph\u{c3}\u{ba}t)").expect("valid speaking time regex")
});

/// "Follow-up questions:" 与下一个录音标记（或文本结尾）之间的内容，
/// 标记前的麦克风图标不计入追问
static FOLLOW_UP_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?is)Follow-up questions?:(.*?)(?:(?:(?:🎤|\u{f0}\u{178}\u{17d}\u{a4})\s*)?Ghi (?:âm|\u{c3}\u{a2}m)|$)",
    )
    .expect("valid follow-up regex")
});

static FOLLOW_UP_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\.\s+[^\d]+").expect("valid follow-up item regex"));

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

/// 删除录音控件文案并把连续 3 个及以上换行压缩为 2 个
pub fn clean_instructions(text: &str) -> String {
    let mut cleaned = text.to_string();
    for pattern in UI_CHROME_PATTERNS.iter() {
        cleaned = pattern.replace_all(&cleaned, "").into_owned();
    }
    EXTRA_BLANK_LINES
        .replace_all(&cleaned, "\n\n")
        .trim()
        .to_string()
}

/// 第一行 "Topic: ..." 的内容
pub fn parse_topic(text: &str) -> Option<String> {
    let topic = TOPIC_PATTERN.captures(text)?.get(1)?.as_str().trim();
    if topic.is_empty() {
        None
    } else {
        Some(topic.to_string())
    }
}

/// 录音时长（分钟）
pub fn parse_speaking_time(text: &str) -> Option<u32> {
    SPEAKING_TIME_PATTERN
        .captures(text)?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}

/// 追问列表，每项形如 "1. ..."
pub fn parse_follow_up_questions(text: &str) -> Vec<String> {
    let Some(section) = FOLLOW_UP_SECTION
        .captures(text)
        .and_then(|caps| caps.get(1))
    else {
        return Vec::new();
    };

    FOLLOW_UP_ITEM
        .find_iter(section.as_str())
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

/// 解析单张卡片；说明文字过短且没有话题时返回 `None`
pub fn parse_part(part_number: u32, text: &str) -> Option<SpeakingPart> {
    let instructions = clean_instructions(text);
    let topic = parse_topic(text);

    if instructions.chars().count() <= MIN_INSTRUCTION_CHARS && topic.is_none() {
        return None;
    }

    Some(SpeakingPart {
        part_number,
        topic,
        instructions,
        follow_up_questions: parse_follow_up_questions(text),
        speaking_time: parse_speaking_time(text),
    })
}

/// 解析口语页；没有有效部分时返回 `None`
pub fn parse(raw: RawCardPage) -> Option<ExtractedExam> {
    let parts: Vec<SpeakingPart> = (1u32..)
        .zip(raw.cards.iter())
        .filter_map(|(part_number, card)| parse_part(part_number, card.as_deref()?))
        .collect();

    if parts.is_empty() {
        return None;
    }

    Some(ExtractedExam {
        title: raw.title,
        body: ExamBody::Speaking { parts },
    })
}
