//! Prompt composition for grounded answers.
//!
//! Turns the barangay catalog and the recent chat log into a single text
//! prompt. The persona block and the citizen's message are always present;
//! catalog records and history are trimmed to fit a [`ContextBudget`].

use crate::domain::catalog::{FaqRecord, ServiceRecord};

use super::turn::ConversationTurn;

/// Persona and behavior rules placed at the top of every prompt.
pub const PERSONA_INSTRUCTIONS: &str = "\
You are BaranGuide, a helpful assistant for barangay-related inquiries in the Philippines.
You help citizens navigate barangay services, requirements, fees, and procedures.
You should be polite, informative, and provide specific information about barangay services.
If you don't know the answer to a question, please say so and suggest they visit the barangay office.
Use Filipino phrases occasionally to sound more friendly and approachable. But answer in English if the question is in English.
Keep your answers concise and directly address the user's question.
Your responses should be helpful for Filipino citizens who are trying to navigate barangay procedures.

When users ask about requirements for a service, provide a clear list of all requirements.
When users ask where to get the requirements, provide specific locations or offices where they can obtain each requirement.
For example, if a requirement is a birth certificate, specify that they can get it from the PSA (Philippine Statistics Authority) or their local civil registry office.
If a requirement is a barangay clearance, specify that they can get it from their barangay office.";

/// Shorter rules for one-off questions that carry no history.
pub const QUICK_ANSWER_INSTRUCTIONS: &str = "\
You are a helpful barangay assistant. Answer the user's question using only the following FAQs and services. \
If you don't know the answer, say you don't know and suggest contacting the barangay office.";

const CONTEXT_HEADER: &str =
    "Below is information about the specific services and FAQs available in this barangay:";
const NO_SERVICES: &str = "No services available.";
const NO_FAQS: &str = "No FAQs available.";
const HISTORY_HEADER: &str = "Previous conversation:";
const REQUEST_LINE: &str = "Please respond to the following message from a citizen:";

/// Size limits for the grounding data placed in a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextBudget {
    /// Maximum service records listed.
    pub max_services: usize,
    /// Maximum FAQ records listed.
    pub max_faqs: usize,
    /// Maximum characters for the rendered services + FAQs section.
    pub max_context_chars: usize,
    /// Maximum characters for the replayed conversation.
    pub max_history_chars: usize,
}

impl ContextBudget {
    /// Creates a new budget.
    pub fn new(
        max_services: usize,
        max_faqs: usize,
        max_context_chars: usize,
        max_history_chars: usize,
    ) -> Self {
        Self {
            max_services,
            max_faqs,
            max_context_chars,
            max_history_chars,
        }
    }

    /// A budget that never trims anything.
    pub fn unlimited() -> Self {
        Self::new(usize::MAX, usize::MAX, usize::MAX, usize::MAX)
    }
}

impl Default for ContextBudget {
    fn default() -> Self {
        Self::new(50, 100, 12_000, 4_000)
    }
}

/// Catalog data read for one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptContext {
    /// Services in priority order; trailing entries are trimmed first.
    pub services: Vec<ServiceRecord>,
    /// FAQs in priority order; trailing entries are trimmed first.
    pub faqs: Vec<FaqRecord>,
}

impl PromptContext {
    /// Creates a context from catalog reads.
    pub fn new(services: Vec<ServiceRecord>, faqs: Vec<FaqRecord>) -> Self {
        Self { services, faqs }
    }
}

/// A prompt ready for the generation service, plus what was left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    pub text: String,
    pub omitted_services: usize,
    pub omitted_faqs: usize,
    pub omitted_turns: usize,
}

impl ComposedPrompt {
    /// Returns true if any grounding data was dropped to fit the budget.
    pub fn was_truncated(&self) -> bool {
        self.omitted_services + self.omitted_faqs + self.omitted_turns > 0
    }
}

/// Builds prompts within a fixed [`ContextBudget`].
#[derive(Debug, Clone, Default)]
pub struct PromptComposer {
    budget: ContextBudget,
}

impl PromptComposer {
    /// Creates a composer with the given budget.
    pub fn new(budget: ContextBudget) -> Self {
        Self { budget }
    }

    /// Returns the configured budget.
    pub fn budget(&self) -> &ContextBudget {
        &self.budget
    }

    /// Composes the chat prompt.
    ///
    /// `context` is `None` when the catalog could not be read; the data
    /// section is then left out entirely rather than claiming there are no
    /// services. `recent_turns` must be oldest first.
    pub fn compose(
        &self,
        context: Option<&PromptContext>,
        recent_turns: &[ConversationTurn],
        message: &str,
    ) -> ComposedPrompt {
        let mut text = String::with_capacity(PERSONA_INSTRUCTIONS.len() + message.len() + 512);
        text.push_str(PERSONA_INSTRUCTIONS);
        text.push_str("\n\n");

        let (omitted_services, omitted_faqs) = match context {
            Some(context) => {
                let section = self.render_catalog(context);
                text.push_str(CONTEXT_HEADER);
                text.push_str("\n\n");
                text.push_str(&section.text);
                (section.omitted_services, section.omitted_faqs)
            }
            None => (0, 0),
        };

        let history = self.render_history(recent_turns);
        text.push_str(&history.text);

        text.push_str(REQUEST_LINE);
        text.push_str("\n\nUser: ");
        text.push_str(message);

        ComposedPrompt {
            text,
            omitted_services,
            omitted_faqs,
            omitted_turns: history.omitted,
        }
    }

    /// Composes the stateless quick-answer prompt (no history).
    pub fn compose_quick(&self, context: Option<&PromptContext>, question: &str) -> ComposedPrompt {
        let mut text = String::from(QUICK_ANSWER_INSTRUCTIONS);
        text.push_str("\n\n");

        let (omitted_services, omitted_faqs) = match context {
            Some(context) => {
                let section = self.render_catalog(context);
                text.push_str(&section.text);
                (section.omitted_services, section.omitted_faqs)
            }
            None => (0, 0),
        };

        text.push_str("Answer as helpfully and concisely as possible.\n\nUser's question: ");
        text.push_str(question);

        ComposedPrompt {
            text,
            omitted_services,
            omitted_faqs,
            omitted_turns: 0,
        }
    }

    fn render_catalog(&self, context: &PromptContext) -> CatalogSection {
        let mut remaining = self.budget.max_context_chars;

        let services: Vec<String> = context.services.iter().map(render_service).collect();
        let faqs: Vec<String> = context.faqs.iter().map(render_faq).collect();

        let mut text = String::from("SERVICES:\n");
        let kept_services = take_within(&services, self.budget.max_services, &mut remaining);
        push_entries(&mut text, &services[..kept_services], NO_SERVICES);
        let omitted_services = services.len() - kept_services;
        if omitted_services > 0 {
            text.push_str(&format!("({} more services not listed)\n\n", omitted_services));
        }

        text.push_str("FREQUENTLY ASKED QUESTIONS:\n");
        let kept_faqs = take_within(&faqs, self.budget.max_faqs, &mut remaining);
        push_entries(&mut text, &faqs[..kept_faqs], NO_FAQS);
        let omitted_faqs = faqs.len() - kept_faqs;
        if omitted_faqs > 0 {
            text.push_str(&format!("({} more FAQs not listed)\n\n", omitted_faqs));
        }

        CatalogSection {
            text,
            omitted_services,
            omitted_faqs,
        }
    }

    fn render_history(&self, turns: &[ConversationTurn]) -> HistorySection {
        if turns.is_empty() {
            return HistorySection::default();
        }

        let lines: Vec<String> = turns
            .iter()
            .map(|turn| format!("{}: {}\n", turn.sender.prompt_label(), turn.content))
            .collect();

        // Keep the newest lines that fit; replay them oldest first.
        let mut used = 0usize;
        let mut first_kept = lines.len();
        for (i, line) in lines.iter().enumerate().rev() {
            let len = line.chars().count();
            if used + len > self.budget.max_history_chars {
                break;
            }
            used += len;
            first_kept = i;
        }

        if first_kept == lines.len() {
            return HistorySection {
                text: String::new(),
                omitted: lines.len(),
            };
        }

        let mut text = String::from(HISTORY_HEADER);
        text.push('\n');
        for line in &lines[first_kept..] {
            text.push_str(line);
        }
        text.push('\n');

        HistorySection {
            text,
            omitted: first_kept,
        }
    }
}

#[derive(Debug, Default)]
struct CatalogSection {
    text: String,
    omitted_services: usize,
    omitted_faqs: usize,
}

#[derive(Debug, Default)]
struct HistorySection {
    text: String,
    omitted: usize,
}

fn render_service(service: &ServiceRecord) -> String {
    format!(
        "Service: {}\nRequirements: {}\nFee: {}\nDuration: {}\n\n",
        service.title,
        service.requirements,
        service.fee_display(),
        service.duration
    )
}

fn render_faq(faq: &FaqRecord) -> String {
    format!("Q: {}\nA: {}\n\n", faq.question, faq.answer)
}

/// Counts how many leading entries fit under both limits, charging `remaining`.
fn take_within(entries: &[String], max_count: usize, remaining: &mut usize) -> usize {
    let mut kept = 0;
    for entry in entries.iter().take(max_count) {
        let len = entry.chars().count();
        if len > *remaining {
            break;
        }
        *remaining -= len;
        kept += 1;
    }
    kept
}

fn push_entries(text: &mut String, entries: &[String], placeholder: &str) {
    if entries.is_empty() {
        text.push_str(placeholder);
        text.push_str("\n\n");
        return;
    }
    for entry in entries {
        text.push_str(entry);
    }
}
