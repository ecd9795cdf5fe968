pub mod answer_revealer;
pub mod dedup;
pub mod extraction;
pub mod page_classifier;
pub mod record_assembler;
pub mod session;
pub mod storage;

pub use answer_revealer::AnswerRevealer;
pub use dedup::{DedupReport, DuplicateReducer};
pub use extraction::{ExtractedExam, ExtractionEngine};
pub use page_classifier::PageClassifier;
pub use record_assembler::RecordAssembler;
pub use session::SessionController;
pub use storage::{ExamStore, StoredRecord};
