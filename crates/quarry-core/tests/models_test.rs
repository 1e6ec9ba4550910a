use quarry_core::models::{AnswerReport, Document, StageTimings};

#[test]
fn document_metadata_defaults_to_null() {
    let document: Document =
        serde_json::from_str(r#"{"id":"1","content":"x","score":0.5}"#).unwrap();
    assert!(document.metadata.is_null());
}

#[test]
fn document_preserves_metadata_through_serde() {
    let mut document = Document::new("p7", "passage", 0.3);
    document.metadata = serde_json::json!({ "page": 7 });

    let encoded = serde_json::to_string(&document).unwrap();
    let decoded: Document = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded.metadata["page"], 7);
}

#[test]
fn stage_timings_default_to_zero() {
    let timings = StageTimings::default();
    assert_eq!(timings.retrieval_ms, 0);
    assert_eq!(timings.rerank_ms, 0);
    assert_eq!(timings.generation_ms, 0);
    assert_eq!(timings.total_ms, 0);
}

#[test]
fn answer_report_serde_roundtrip() {
    let report = AnswerReport {
        answer: "fused and generated".into(),
        cache_hit: false,
        timings: StageTimings {
            retrieval_ms: 12,
            rerank_ms: 3,
            generation_ms: 40,
            total_ms: 55,
        },
    };

    let encoded = serde_json::to_string(&report).unwrap();
    let decoded: AnswerReport = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded.answer, report.answer);
    assert_eq!(decoded.timings, report.timings);
}
