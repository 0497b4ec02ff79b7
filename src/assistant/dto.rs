use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// POST /ai/chat request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub document_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    /// Present (true) only when the answer came from the fallback set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo: Option<bool>,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryKind {
    #[default]
    Detailed,
    #[serde(other)]
    Brief,
}

/// POST /ai/summary request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub document_id: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: SummaryKind,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    #[serde(rename = "type")]
    pub kind: SummaryKind,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
    pub word_count: usize,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub success: bool,
    pub summary: Summary,
    pub demo: bool,
}

/// POST /ai/compare request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    #[serde(default)]
    pub document_ids: Vec<String>,
    pub topic: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ComparisonTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub topic: String,
    pub documents: Vec<Uuid>,
    pub table: ComparisonTable,
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub success: bool,
    pub comparison: Comparison,
    pub demo: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizDifficulty {
    Easy,
    Hard,
    #[default]
    #[serde(other)]
    Medium,
}

/// POST /ai/quiz request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRequest {
    pub document_id: Option<String>,
    #[serde(default)]
    pub difficulty: QuizDifficulty,
    #[serde(default = "default_question_count")]
    pub question_count: u32,
}

fn default_question_count() -> u32 {
    5
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: u32,
    pub question: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement: Option<String>,
    pub correct_answer: serde_json::Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub document_id: Uuid,
    pub difficulty: QuizDifficulty,
    pub questions: Vec<QuizQuestion>,
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub quiz: Quiz,
    pub demo: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_defaults() {
        let req: ChatRequest = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
        assert_eq!(req.message, "hi");
        assert!(req.document_ids.is_empty());

        let req: ChatRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert!(req.message.is_empty());
    }

    #[test]
    fn summary_kind_falls_back_to_brief() {
        let req: SummaryRequest =
            serde_json::from_str(r#"{"documentId":"x","type":"detailed"}"#).unwrap();
        assert_eq!(req.kind, SummaryKind::Detailed);

        let req: SummaryRequest =
            serde_json::from_str(r#"{"documentId":"x","type":"whatever"}"#).unwrap();
        assert_eq!(req.kind, SummaryKind::Brief);

        let req: SummaryRequest = serde_json::from_str(r#"{"documentId":"x"}"#).unwrap();
        assert_eq!(req.kind, SummaryKind::Detailed);
    }

    #[test]
    fn quiz_request_defaults() {
        let req: QuizRequest = serde_json::from_str(r#"{"documentId":"x"}"#).unwrap();
        assert_eq!(req.difficulty, QuizDifficulty::Medium);
        assert_eq!(req.question_count, 5);
    }

    #[test]
    fn chat_response_omits_demo_for_provider_answers() {
        let resp = ChatResponse {
            success: true,
            response: "answer".into(),
            demo: None,
            timestamp: OffsetDateTime::now_utc(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("demo"));
    }
}
