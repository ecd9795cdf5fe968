//! 答案获取服务 - 业务能力层
//!
//! 听力 / 阅读页面本身不显示答案：每题随便选一个选项后交卷，
//! 站点跳转到结果页，结果页中每个题块用 `span.text-success` 标出正确选项。

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{AppResult, ExtractionError};
use crate::infrastructure::PageDriver;
use crate::models::{AnswerKey, OptionLetter, RawAnswerPage};

/// 结果页 URL 标记
pub const RESULTS_MARKER: &str = "ket-qua";

/// 交卷按钮
pub const SUBMIT_SELECTOR: &str = ".btn-submit";

/// 等待结果页时检查 URL 的间隔
const RESULTS_POLL_INTERVAL: Duration = Duration::from_millis(200);

static LEADING_LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-D])").expect("valid answer letter regex"));

/// 每个题块选中第一个单选框，并屏蔽交卷确认框
pub const SELECT_SCRIPT: &str = r#"
    () => {
        let selected = 0;
        document.querySelectorAll('.question-block').forEach(block => {
            const radio = block.querySelector('input[type="radio"]');
            if (radio) {
                radio.click();
                selected += 1;
            }
        });
        window.confirm = () => true;
        return selected;
    }
"#;

/// 读取结果页每个题块的正确答案文本
pub const ANSWERS_SCRIPT: &str = r#"
    () => {
        const answers = Array.from(document.querySelectorAll('.question-block')).map(block => {
            const success = block.querySelector('span.text-success');
            return success ? success.innerText : null;
        });
        return { answers };
    }
"#;

/// 答案获取服务
pub struct AnswerRevealer<'a> {
    config: &'a Config,
}

impl<'a> AnswerRevealer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// 交卷并读取正确答案
    ///
    /// # 返回
    /// - `Ok(Some(key))`: 进入了结果页，key 以题块位置（从 1 开始）为题号
    /// - `Ok(None)`: 没有进入结果页，属于降级结果而非错误
    pub async fn reveal(&self, page: &dyn PageDriver) -> AppResult<Option<AnswerKey>> {
        let selected = page.eval(SELECT_SCRIPT).await?;
        debug!("已选中 {} 个题块的选项", selected);
        sleep(self.config.select_settle()).await;

        // 没有交卷按钮时不等待跳转，只检查一次
        let budget = if page.click(SUBMIT_SELECTOR).await? {
            page.wait_for_settle().await?;
            sleep(self.config.submit_settle()).await;
            self.config.results_wait()
        } else {
            debug!("页面没有交卷按钮");
            Duration::ZERO
        };

        if !wait_for_results(page, budget).await? {
            return Ok(None);
        }

        let value = page.eval(ANSWERS_SCRIPT).await?;
        let raw: RawAnswerPage = serde_json::from_value(value)
            .map_err(|source| ExtractionError::UnexpectedAnswerShape { source })?;
        let key = build_answer_key(&raw);
        info!("✓ 结果页获取到 {} 个正确答案", key.len());

        Ok(Some(key))
    }
}

/// 交卷后的跳转可能晚于导航等待返回，在 `budget` 内反复检查 URL
async fn wait_for_results(page: &dyn PageDriver, budget: Duration) -> AppResult<bool> {
    let deadline = Instant::now() + budget;
    loop {
        let current_url = page.current_url().await?;
        if current_url.contains(RESULTS_MARKER) {
            return Ok(true);
        }
        if Instant::now() >= deadline {
            warn!("⚠️ 交卷后未进入结果页，答案留空: {}", current_url);
            return Ok(false);
        }
        sleep(RESULTS_POLL_INTERVAL).await;
    }
}

/// 从 "B. some text" 这样的文本中取出开头的选项字母
pub fn parse_answer_letter(text: &str) -> Option<OptionLetter> {
    let caps = LEADING_LETTER.captures(text.trim())?;
    caps.get(1)
        .and_then(|m| m.as_str().chars().next())
        .and_then(OptionLetter::from_char)
}

/// 按题块位置（从 1 开始）建立答案表，没有答案的题块不出现在表中
pub fn build_answer_key(raw: &RawAnswerPage) -> AnswerKey {
    (1u32..)
        .zip(raw.answers.iter())
        .filter_map(|(number, text)| {
            let letter = parse_answer_letter(text.as_deref()?)?;
            Some((number, letter))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_letter_is_the_answer() {
        assert_eq!(parse_answer_letter("B. some text"), Some(OptionLetter::B));
        assert_eq!(parse_answer_letter("  D) last one"), Some(OptionLetter::D));
        assert_eq!(parse_answer_letter("Đáp án: A"), None);
        // 只看开头的字母，不在文本中查找
        assert_eq!(parse_answer_letter("Correct answer: A"), Some(OptionLetter::C));
        assert_eq!(parse_answer_letter("E. out of range"), None);
    }

    #[test]
    fn answer_key_uses_block_positions() {
        let raw = RawAnswerPage {
            answers: vec![
                Some("A. first".to_string()),
                None,
                Some("no letter".to_string()),
                Some("C. fourth".to_string()),
            ],
        };
        let key = build_answer_key(&raw);
        assert_eq!(key.len(), 2);
        assert_eq!(key.get(&1), Some(&OptionLetter::A));
        assert_eq!(key.get(&2), None);
        assert_eq!(key.get(&4), Some(&OptionLetter::C));
    }
}
