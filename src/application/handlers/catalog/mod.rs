//! Catalog admin handlers - services and FAQs.

mod faqs;
mod services;

pub use faqs::{FaqInput, ManageFaqsHandler};
pub use services::{ManageServicesHandler, ServiceInput};
