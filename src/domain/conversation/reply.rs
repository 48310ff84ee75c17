//! Outcome of a generation attempt.

/// Answer shown when the generation service cannot be used.
pub const FALLBACK_RESPONSE: &str = "I'm sorry, I'm having trouble connecting to my knowledge base right now. Please try again in a moment or visit your local Barangay office for immediate assistance.";

/// Answer used by the quick-answer endpoint when generation fails.
pub const QUICK_ANSWER_FALLBACK: &str = "Sorry, I couldn't get an answer right now. Please contact the barangay office.";

/// Text produced for the citizen, generated or substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub text: String,
    pub succeeded: bool,
}

impl GenerationResult {
    /// A generated answer.
    pub fn generated(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            succeeded: true,
        }
    }

    /// The static fallback answer.
    pub fn fallback() -> Self {
        Self::substitute(FALLBACK_RESPONSE)
    }

    /// A failed attempt answered with the given canned text.
    pub fn substitute(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            succeeded: false,
        }
    }

    /// Whether the stored bot turn should be flagged as an error.
    pub fn is_error(&self) -> bool {
        !self.succeeded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_flagged() {
        let result = GenerationResult::fallback();
        assert_eq!(result.text, FALLBACK_RESPONSE);
        assert!(result.is_error());
    }

    #[test]
    fn generated_is_not_flagged() {
        let result = GenerationResult::generated("Opo, bring a valid ID.");
        assert!(result.succeeded);
        assert!(!result.is_error());
    }
}
