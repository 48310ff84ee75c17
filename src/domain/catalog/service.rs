//! Barangay service listings.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ServiceId, Timestamp, ValidationError};

/// A service offered by the barangay office (clearance, certificate, permit...).
///
/// Owned by the datastore; the chat pipeline only ever reads these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub id: ServiceId,
    pub title: String,
    /// Free text, usually one requirement per line.
    pub requirements: String,
    /// Fee in pesos.
    pub price: f64,
    /// Free text processing time, e.g. "1-2 days".
    pub duration: String,
    pub created_at: Timestamp,
}

impl ServiceRecord {
    /// Creates a fresh record from validated input.
    pub fn from_draft(draft: ServiceDraft) -> Self {
        Self {
            id: ServiceId::new(),
            title: draft.title,
            requirements: draft.requirements,
            price: draft.price,
            duration: draft.duration,
            created_at: Timestamp::now(),
        }
    }

    /// Replaces the editable fields, keeping identity and creation time.
    pub fn apply(&mut self, draft: ServiceDraft) {
        self.title = draft.title;
        self.requirements = draft.requirements;
        self.price = draft.price;
        self.duration = draft.duration;
    }

    /// Fee rendered the way citizens read it: `50`, `75.5`, `0`.
    pub fn fee_display(&self) -> String {
        format_price(self.price)
    }
}

/// Validated input for creating or editing a service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceDraft {
    pub title: String,
    pub requirements: String,
    pub price: f64,
    pub duration: String,
}

impl ServiceDraft {
    /// Validates and normalizes admin input.
    ///
    /// Title, requirements and duration are required; price must be a
    /// finite, non-negative amount.
    pub fn new(
        title: impl Into<String>,
        requirements: impl Into<String>,
        price: f64,
        duration: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = required("title", title.into())?;
        let requirements = required("requirements", requirements.into())?;
        let duration = required("duration", duration.into())?;

        if !price.is_finite() {
            return Err(ValidationError::invalid_format("price", "must be a number"));
        }
        if price < 0.0 {
            return Err(ValidationError::invalid_format("price", "must not be negative"));
        }

        Ok(Self {
            title,
            requirements,
            price,
            duration,
        })
    }
}

pub(super) fn required(field: &str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}

fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        return format!("{:.0}", price);
    }
    let fixed = format!("{:.2}", price);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}
