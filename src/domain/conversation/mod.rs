//! Conversation module - the grounded chat pipeline's domain logic.
//!
//! - `turn` - the append-only chat log entries
//! - `prompt` - prompt composition within a context budget
//! - `sanitizer` - markup cleanup of generated answers
//! - `reply` - generation outcome and fallback text

mod prompt;
mod reply;
mod sanitizer;
mod turn;

pub use prompt::{
    ComposedPrompt, ContextBudget, PromptComposer, PromptContext, PERSONA_INSTRUCTIONS,
    QUICK_ANSWER_INSTRUCTIONS,
};
pub use reply::{GenerationResult, FALLBACK_RESPONSE, QUICK_ANSWER_FALLBACK};
pub use sanitizer::sanitize_response;
pub use turn::{ConversationTurn, Exchange, Sender};
