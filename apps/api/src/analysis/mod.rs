//! Analysis module — the resume/job-description pipeline.
//!
//! Submodules: input validation, prompt templates, the orchestrating
//! pipeline, and the HTTP handlers that expose it.

pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod validation;
