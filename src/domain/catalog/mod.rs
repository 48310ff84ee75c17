//! Catalog module - the barangay's service listings and FAQs.
//!
//! These records ground the chatbot's answers and are edited through the
//! admin API.

mod faq;
mod service;

pub use faq::{FaqDraft, FaqRecord};
pub use service::{ServiceDraft, ServiceRecord};
