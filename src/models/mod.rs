pub mod exam;
pub mod raw;

pub use exam::{
    AnswerKey, ExamBody, ExamRecord, ExamType, OptionLetter, Passage, Question, SpeakingPart,
    Task,
};
pub use raw::{
    RawAnswerPage, RawCardPage, RawListeningPage, RawPassage, RawQuestionBlock, RawReadingPage,
};
