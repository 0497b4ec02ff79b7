use rand::seq::SliceRandom;
use time::OffsetDateTime;

use crate::{
    assistant::dto::{
        Comparison, ComparisonTable, Quiz, QuizDifficulty, QuizQuestion, Summary, SummaryKind,
    },
    documents::registry::Document,
    messages::Messages,
};

/// Canned chat answer used whenever the completion provider is unavailable.
pub fn fallback_answer(m: &Messages, question: &str) -> String {
    let template = m
        .fallback_templates
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(m.empty_answer);
    template.replace("{question}", question)
}

// The builders below produce the placeholder payloads served while no
// extraction pipeline exists. They still echo the caller's resolved
// documents so the envelope matches what a real analysis would return.

pub fn demo_summary(m: &Messages, kind: SummaryKind, _doc: &Document) -> Summary {
    let content = match kind {
        SummaryKind::Detailed => m.summary_detailed_body,
        SummaryKind::Brief => m.summary_brief_body,
    };
    Summary {
        kind,
        content: content.to_string(),
        generated_at: OffsetDateTime::now_utc(),
        word_count: content.split_whitespace().count(),
    }
}

pub fn demo_comparison(m: &Messages, topic: Option<String>, docs: &[Document]) -> Comparison {
    Comparison {
        topic: topic.unwrap_or_else(|| m.general_comparison.to_string()),
        documents: docs.iter().map(|d| d.id).collect(),
        table: ComparisonTable {
            headers: m.comparison_headers.iter().map(|h| h.to_string()).collect(),
            rows: m
                .comparison_rows
                .iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        },
        generated_at: OffsetDateTime::now_utc(),
    }
}

pub fn demo_quiz(m: &Messages, doc: &Document, difficulty: QuizDifficulty) -> Quiz {
    Quiz {
        document_id: doc.id,
        difficulty,
        questions: vec![
            QuizQuestion {
                id: 1,
                question: m.quiz_mc_question.to_string(),
                kind: "multiple-choice",
                options: Some(m.quiz_mc_options.iter().map(|o| o.to_string()).collect()),
                statement: None,
                correct_answer: serde_json::json!(0),
            },
            QuizQuestion {
                id: 2,
                question: m.quiz_text_question.to_string(),
                kind: "text",
                options: None,
                statement: None,
                correct_answer: serde_json::json!(m.quiz_text_answer),
            },
            QuizQuestion {
                id: 3,
                question: m.quiz_tf_question.to_string(),
                kind: "true-false",
                options: None,
                statement: Some(m.quiz_tf_statement.to_string()),
                correct_answer: serde_json::json!(true),
            },
        ],
        generated_at: OffsetDateTime::now_utc(),
    }
}
