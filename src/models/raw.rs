//! 页面脚本返回的原始数据结构
//!
//! 页面端只负责收集 innerText，解析全部在 Rust 端完成。
//! 结构不符时 `serde_json::from_value` 直接报错，由调用方按单题失败处理。

use serde::Deserialize;

/// 单个 `.question-block` 内每个选项元素的文本
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawQuestionBlock {
    pub options: Vec<String>,
}

/// 听力页
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawListeningPage {
    pub title: String,
    pub audio_url: Option<String>,
    pub blocks: Vec<RawQuestionBlock>,
}

/// 阅读页中的一个文章容器
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawPassage {
    pub body: Option<String>,
    pub blocks: Vec<RawQuestionBlock>,
}

/// 阅读页
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawReadingPage {
    pub title: String,
    pub passages: Vec<RawPassage>,
}

/// 写作 / 口语页：每个 `.card` 的 `.card-body` 文本
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawCardPage {
    pub title: String,
    pub cards: Vec<Option<String>>,
}

/// 交卷后结果页：每个题块的 `span.text-success` 文本
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawAnswerPage {
    pub answers: Vec<Option<String>>,
}
