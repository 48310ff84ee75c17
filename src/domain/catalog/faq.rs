//! Frequently asked questions.

use serde::{Deserialize, Serialize};

use super::service::required;
use crate::domain::foundation::{FaqId, Timestamp, ValidationError};

/// A question/answer pair curated by barangay staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqRecord {
    pub id: FaqId,
    pub question: String,
    pub answer: String,
    pub created_at: Timestamp,
}

impl FaqRecord {
    /// Creates a fresh record from validated input.
    pub fn from_draft(draft: FaqDraft) -> Self {
        Self {
            id: FaqId::new(),
            question: draft.question,
            answer: draft.answer,
            created_at: Timestamp::now(),
        }
    }

    /// Replaces question and answer, keeping identity and creation time.
    pub fn apply(&mut self, draft: FaqDraft) {
        self.question = draft.question;
        self.answer = draft.answer;
    }
}

/// Validated input for creating or editing an FAQ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqDraft {
    pub question: String,
    pub answer: String,
}

impl FaqDraft {
    /// Both question and answer are required.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            question: required("question", question.into())?,
            answer: required("answer", answer.into())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_requires_both_fields() {
        assert!(FaqDraft::new("", "Yes").is_err());
        assert!(FaqDraft::new("Open on Saturday?", "   ").is_err());
        assert!(FaqDraft::new("Open on Saturday?", "Until noon.").is_ok());
    }

    #[test]
    fn apply_replaces_text() {
        let mut faq = FaqRecord::from_draft(FaqDraft::new("Q1", "A1").unwrap());
        let id = faq.id;
        faq.apply(FaqDraft::new("Q2", "A2").unwrap());

        assert_eq!(faq.id, id);
        assert_eq!(faq.question, "Q2");
        assert_eq!(faq.answer, "A2");
    }

    #[test]
    fn serializes_camel_case() {
        let faq = FaqRecord::from_draft(FaqDraft::new("Q", "A").unwrap());
        let json = serde_json::to_value(&faq).unwrap();
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["question"], "Q");
    }
}
