//! Data context loading shared by the chat handlers.

use crate::domain::conversation::PromptContext;
use crate::ports::CatalogReader;

/// Reads services and FAQs concurrently.
///
/// Returns `None` when either read fails; the caller composes without
/// grounding data instead of failing the request.
pub async fn load_context(catalog: &dyn CatalogReader) -> Option<PromptContext> {
    match futures::try_join!(catalog.list_services(), catalog.list_faqs()) {
        Ok((services, faqs)) => Some(PromptContext::new(services, faqs)),
        Err(err) => {
            tracing::warn!(
                error = %err,
                code = %err.code(),
                "catalog unavailable, composing prompt without grounding data"
            );
            None
        }
    }
}
