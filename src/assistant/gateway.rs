use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use crate::{
    assistant::{
        dto::{Comparison, Quiz, QuizDifficulty, Summary, SummaryKind},
        fallback::{demo_comparison, demo_quiz, demo_summary, fallback_answer},
        provider::CompletionClient,
    },
    documents::registry::{Document, DocumentStore},
    error::ApiError,
    messages::Messages,
};

/// The two ways an ask can succeed. Provider failures are folded into
/// `Fallback`, so callers see the always-available contract in the type: an
/// ask either errors on the caller's own input or produces an answer.
#[derive(Debug)]
pub enum Answer {
    Provider(String),
    Fallback(String),
}

impl Answer {
    pub fn text(&self) -> &str {
        match self {
            Answer::Provider(t) | Answer::Fallback(t) => t,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Answer::Fallback(_))
    }
}

pub struct AssistantGateway {
    client: Option<CompletionClient>,
    documents: Arc<dyn DocumentStore>,
    messages: &'static Messages,
}

impl AssistantGateway {
    pub fn new(
        client: Option<CompletionClient>,
        documents: Arc<dyn DocumentStore>,
        messages: &'static Messages,
    ) -> Self {
        Self {
            client,
            documents,
            messages,
        }
    }

    /// Answer a question over the caller's referenced documents. Every id must
    /// resolve to a document owned by `owner_id`; the resolved content is
    /// attached to the prompt so the provider answers from the material, not
    /// from the question alone.
    pub async fn ask(
        &self,
        owner_id: Uuid,
        question: &str,
        document_ids: &[Uuid],
    ) -> Result<Answer, ApiError> {
        let m = self.messages;
        if question.trim().is_empty() {
            return Err(ApiError::Validation(m.question_required.into()));
        }
        let docs = self.resolve(owner_id, document_ids).await?;
        let prompt = build_prompt(m, question, &docs);

        let client = match &self.client {
            Some(client) => client,
            None => {
                warn!("no provider credential configured; serving fallback answer");
                return Ok(Answer::Fallback(fallback_answer(m, question)));
            }
        };

        match client.complete(m.system_prompt, &prompt).await {
            Ok(Some(text)) => Ok(Answer::Provider(text)),
            Ok(None) => Ok(Answer::Provider(m.empty_answer.to_string())),
            Err(e) => {
                warn!(error = %e, "completion provider failed; serving fallback answer");
                Ok(Answer::Fallback(fallback_answer(m, question)))
            }
        }
    }

    /// Placeholder summary over one resolved document, marked as demo output.
    pub async fn summarize(
        &self,
        owner_id: Uuid,
        document_id: Uuid,
        kind: SummaryKind,
    ) -> Result<Summary, ApiError> {
        let doc = self.resolve_one(owner_id, document_id).await?;
        Ok(demo_summary(self.messages, kind, &doc))
    }

    /// Placeholder comparison across two or more resolved documents.
    pub async fn compare(
        &self,
        owner_id: Uuid,
        document_ids: &[Uuid],
        topic: Option<String>,
    ) -> Result<Comparison, ApiError> {
        let m = self.messages;
        if document_ids.len() < 2 {
            return Err(ApiError::Validation(m.compare_needs_two.into()));
        }
        let docs = self.resolve(owner_id, document_ids).await?;
        Ok(demo_comparison(m, topic, &docs))
    }

    /// Placeholder quiz for one resolved document.
    pub async fn quiz(
        &self,
        owner_id: Uuid,
        document_id: Uuid,
        difficulty: QuizDifficulty,
    ) -> Result<Quiz, ApiError> {
        let doc = self.resolve_one(owner_id, document_id).await?;
        Ok(demo_quiz(self.messages, &doc, difficulty))
    }

    async fn resolve(
        &self,
        owner_id: Uuid,
        document_ids: &[Uuid],
    ) -> Result<Vec<Document>, ApiError> {
        let mut docs = Vec::with_capacity(document_ids.len());
        for id in document_ids {
            docs.push(self.resolve_one(owner_id, *id).await?);
        }
        Ok(docs)
    }

    async fn resolve_one(&self, owner_id: Uuid, id: Uuid) -> Result<Document, ApiError> {
        self.documents
            .get_owned(owner_id, id)
            .await
            .ok_or_else(|| ApiError::NotFound(self.messages.document_not_found.into()))
    }
}

/// Assemble the user content: one section per referenced document carrying its
/// extracted text (or an explicit unprocessed marker), then the question.
fn build_prompt(m: &Messages, question: &str, docs: &[Document]) -> String {
    let mut prompt = String::new();
    for doc in docs {
        prompt.push_str("### ");
        prompt.push_str(&doc.original_name);
        prompt.push('\n');
        prompt.push_str(doc.content.as_deref().unwrap_or(m.unprocessed_note));
        prompt.push_str("\n\n");
    }
    prompt.push_str(question);
    prompt
}
