use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 考试类型（四种题型）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamType {
    /// 听力
    Listening,
    /// 阅读
    Reading,
    /// 写作
    Writing,
    /// 口语
    Speaking,
}

impl ExamType {
    /// 按固定顺序列出全部题型
    pub const ALL: [ExamType; 4] = [
        ExamType::Listening,
        ExamType::Reading,
        ExamType::Writing,
        ExamType::Speaking,
    ];

    /// 输出目录名 / 日志名
    pub fn name(self) -> &'static str {
        match self {
            ExamType::Listening => "listening",
            ExamType::Reading => "reading",
            ExamType::Writing => "writing",
            ExamType::Speaking => "speaking",
        }
    }

    /// 站点上的做题页路径段
    pub fn path_segment(self) -> &'static str {
        match self {
            ExamType::Listening => "lam-bai-nghe",
            ExamType::Reading => "lam-bai-doc",
            ExamType::Writing => "lam-bai-viet",
            ExamType::Speaking => "lam-bai-noi",
        }
    }

    /// 是否需要通过交卷获取正确答案
    pub fn reveals_answers(self) -> bool {
        matches!(self, ExamType::Listening | ExamType::Reading)
    }

    /// 拼接做题页 URL: `<base>/luyen-de/<segment>/<id>`
    pub fn exam_url(self, base_url: &str, exam_id: u32) -> String {
        format!(
            "{}/luyen-de/{}/{}",
            base_url.trim_end_matches('/'),
            self.path_segment(),
            exam_id
        )
    }
}

impl fmt::Display for ExamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 选项字母，只接受 A-D
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OptionLetter {
    A,
    B,
    C,
    D,
}

impl OptionLetter {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(OptionLetter::A),
            'B' => Some(OptionLetter::B),
            'C' => Some(OptionLetter::C),
            'D' => Some(OptionLetter::D),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            OptionLetter::A => 'A',
            OptionLetter::B => 'B',
            OptionLetter::C => 'C',
            OptionLetter::D => 'D',
        }
    }
}

impl fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// 正确答案表：题号（从 1 开始）→ 选项字母
pub type AnswerKey = BTreeMap<u32, OptionLetter>;

/// 选择题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question_number: u32,
    pub options: BTreeMap<OptionLetter, String>,
    pub correct_answer: Option<OptionLetter>,
}

/// 阅读文章
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    pub passage_number: u32,
    pub content: String,
    pub questions: Vec<Question>,
}

/// 写作任务
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub task_number: u32,
    pub prompt: String,
    pub word_limit: Option<u32>,
}

/// 口语部分
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakingPart {
    pub part_number: u32,
    pub topic: Option<String>,
    pub instructions: String,
    #[serde(default)]
    pub follow_up_questions: Vec<String>,
    /// 单位：分钟
    pub speaking_time: Option<u32>,
}

/// 各题型的正文结构
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExamBody {
    Listening {
        audio_url: Option<String>,
        questions: Vec<Question>,
    },
    Reading {
        passages: Vec<Passage>,
    },
    Writing {
        tasks: Vec<Task>,
    },
    Speaking {
        parts: Vec<SpeakingPart>,
    },
}

impl ExamBody {
    pub fn exam_type(&self) -> ExamType {
        match self {
            ExamBody::Listening { .. } => ExamType::Listening,
            ExamBody::Reading { .. } => ExamType::Reading,
            ExamBody::Writing { .. } => ExamType::Writing,
            ExamBody::Speaking { .. } => ExamType::Speaking,
        }
    }

    /// 依次遍历全部选择题（阅读按文章顺序展开）
    pub fn questions(&self) -> Vec<&Question> {
        match self {
            ExamBody::Listening { questions, .. } => questions.iter().collect(),
            ExamBody::Reading { passages } => {
                passages.iter().flat_map(|p| p.questions.iter()).collect()
            }
            ExamBody::Writing { .. } | ExamBody::Speaking { .. } => Vec::new(),
        }
    }

    /// 按题号回填正确答案，答案表中没有的题保持为空
    pub fn apply_answers(&mut self, answers: &AnswerKey) {
        let questions: Vec<&mut Question> = match self {
            ExamBody::Listening { questions, .. } => questions.iter_mut().collect(),
            ExamBody::Reading { passages } => passages
                .iter_mut()
                .flat_map(|p| p.questions.iter_mut())
                .collect(),
            ExamBody::Writing { .. } | ExamBody::Speaking { .. } => return,
        };

        for question in questions {
            question.correct_answer = answers.get(&question.question_number).copied();
        }
    }
}

/// 单份试卷的最终输出记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamRecord {
    pub exam_type: ExamType,
    pub exam_id: String,
    pub title: String,
    pub source_url: String,
    #[serde(with = "timestamp")]
    pub scraped_at: NaiveDateTime,
    #[serde(flatten)]
    pub body: ExamBody,
}

/// `scraped_at` 精确到秒，格式 `%Y-%m-%dT%H:%M:%S`
mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn question(number: u32, letters: &[OptionLetter]) -> Question {
        Question {
            question_number: number,
            options: letters.iter().map(|l| (*l, format!("option {}", l))).collect(),
            correct_answer: None,
        }
    }

    fn sample_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|d| d.and_hms_opt(8, 30, 15))
            .unwrap()
    }

    #[test]
    fn exam_url_uses_modality_segment() {
        assert_eq!(
            ExamType::Reading.exam_url("https://luyenthivstep.vn/", 12),
            "https://luyenthivstep.vn/luyen-de/lam-bai-doc/12"
        );
        assert_eq!(
            ExamType::Speaking.exam_url("https://luyenthivstep.vn", 3),
            "https://luyenthivstep.vn/luyen-de/lam-bai-noi/3"
        );
    }

    #[test]
    fn only_listening_and_reading_reveal_answers() {
        assert!(ExamType::Listening.reveals_answers());
        assert!(ExamType::Reading.reveals_answers());
        assert!(!ExamType::Writing.reveals_answers());
        assert!(!ExamType::Speaking.reveals_answers());
    }

    #[test]
    fn option_letter_rejects_outside_a_to_d() {
        assert_eq!(OptionLetter::from_char('C'), Some(OptionLetter::C));
        assert_eq!(OptionLetter::from_char('E'), None);
        assert_eq!(OptionLetter::from_char('a'), None);
    }

    #[test]
    fn apply_answers_leaves_missing_numbers_empty() {
        let mut body = ExamBody::Reading {
            passages: vec![
                Passage {
                    passage_number: 1,
                    content: "first".to_string(),
                    questions: vec![question(1, &[OptionLetter::A, OptionLetter::B])],
                },
                Passage {
                    passage_number: 3,
                    content: "second".to_string(),
                    questions: vec![question(2, &[OptionLetter::A, OptionLetter::B])],
                },
            ],
        };
        let answers: AnswerKey = [(2, OptionLetter::B)].into_iter().collect();

        body.apply_answers(&answers);

        let answers: Vec<_> = body.questions().iter().map(|q| q.correct_answer).collect();
        assert_eq!(answers, vec![None, Some(OptionLetter::B)]);
    }

    #[test]
    fn listening_record_serializes_flat_shape() {
        let record = ExamRecord {
            exam_type: ExamType::Listening,
            exam_id: "5".to_string(),
            title: "Đề nghe 5".to_string(),
            source_url: "https://luyenthivstep.vn/luyen-de/lam-bai-nghe/5".to_string(),
            scraped_at: sample_time(),
            body: ExamBody::Listening {
                audio_url: None,
                questions: vec![Question {
                    correct_answer: Some(OptionLetter::A),
                    ..question(1, &[OptionLetter::A])
                }],
            },
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["exam_type"], "listening");
        assert_eq!(value["scraped_at"], "2024-05-01T08:30:15");
        assert!(value["audio_url"].is_null());
        assert_eq!(value["questions"][0]["question_number"], 1);
        assert_eq!(value["questions"][0]["options"]["A"], "option A");
        assert_eq!(value["questions"][0]["correct_answer"], "A");

        let back: ExamRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn speaking_record_reads_back_as_speaking_body() {
        let json = r#"{
            "exam_type": "speaking",
            "exam_id": "7",
            "title": "Speaking",
            "source_url": "https://luyenthivstep.vn/luyen-de/lam-bai-noi/7",
            "scraped_at": "2024-05-01T08:30:15",
            "parts": [
                {
                    "part_number": 1,
                    "topic": null,
                    "instructions": "Talk about your hometown for two minutes.",
                    "follow_up_questions": [],
                    "speaking_time": 2
                }
            ]
        }"#;

        let record: ExamRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.body.exam_type(), ExamType::Speaking);
        assert_eq!(record.exam_id, "7");
    }
}
