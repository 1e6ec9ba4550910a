mod answer_report;
mod document;

pub use answer_report::{AnswerReport, StageTimings};
pub use document::{Document, RankedList};
