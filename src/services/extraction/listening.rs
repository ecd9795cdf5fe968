//! 听力页提取

use crate::models::{ExamBody, RawListeningPage};
use crate::services::extraction::options::block_to_question;
use crate::services::extraction::ExtractedExam;

/// 收集标题、音频地址以及每个题块的选项文本
pub const SCRIPT: &str = r#"
    () => {
        const audio = document.querySelector('audio source, audio');
        let audioUrl = null;
        if (audio) {
            const nested = audio.querySelector('source');
            audioUrl = audio.src || (nested ? nested.src : null) || null;
        }

        const blocks = Array.from(document.querySelectorAll('.question-block')).map(block => ({
            options: Array.from(block.querySelectorAll('.form-check, label'))
                .map(opt => (opt.innerText || '').trim())
        }));

        return { title: document.title, audio_url: audioUrl, blocks };
    }
"#;

/// 解析听力页；没有任何题目时返回 `None`
pub fn parse(raw: RawListeningPage) -> Option<ExtractedExam> {
    let questions: Vec<_> = raw
        .blocks
        .iter()
        .filter_map(block_to_question)
        .zip(1u32..)
        .map(|(mut question, number)| {
            question.question_number = number;
            question
        })
        .collect();

    if questions.is_empty() {
        return None;
    }

    Some(ExtractedExam {
        title: raw.title,
        body: ExamBody::Listening {
            audio_url: raw.audio_url.filter(|url| !url.is_empty()),
            questions,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OptionLetter, RawQuestionBlock};

    fn block(options: &[&str]) -> RawQuestionBlock {
        RawQuestionBlock {
            options: options.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn numbers_retained_questions_contiguously() {
        let raw = RawListeningPage {
            title: "Listening 1".to_string(),
            audio_url: Some("https://cdn.example/audio/1.mp3".to_string()),
            blocks: vec![
                block(&["A. one", "B. two"]),
                block(&["Instructions only"]),
                block(&["A. three", "B. four", "C. five", "D. six"]),
            ],
        };

        let extracted = parse(raw).expect("has questions");
        let ExamBody::Listening { audio_url, questions } = extracted.body else {
            panic!("expected listening body");
        };
        assert_eq!(audio_url.as_deref(), Some("https://cdn.example/audio/1.mp3"));
        let numbers: Vec<u32> = questions.iter().map(|q| q.question_number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(questions[1].options[&OptionLetter::D], "six");
    }

    #[test]
    fn page_without_questions_is_empty() {
        let raw = RawListeningPage {
            title: "Listening".to_string(),
            audio_url: None,
            blocks: vec![block(&["no options here"])],
        };
        assert!(parse(raw).is_none());
    }

    #[test]
    fn blank_audio_src_becomes_none() {
        let raw = RawListeningPage {
            title: "Listening".to_string(),
            audio_url: Some(String::new()),
            blocks: vec![block(&["A. yes"])],
        };
        let extracted = parse(raw).expect("has questions");
        assert!(matches!(
            extracted.body,
            ExamBody::Listening { audio_url: None, .. }
        ));
    }
}
