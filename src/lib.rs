//! BaranGuide - Barangay services assistant
//!
//! Answers citizen questions about barangay services with a generation
//! model grounded in the office's own catalog of services and FAQs, and
//! keeps a shared conversation log.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
