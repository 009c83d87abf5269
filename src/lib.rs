//! Brochure-to-copy service: extracts text from an uploaded property brochure,
//! wraps it in a content-writing prompt and asks a hosted language model for
//! listing copy and area or building guides.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
