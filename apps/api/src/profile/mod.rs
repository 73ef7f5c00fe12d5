// Brand profile: vocabularies, raw input, validation.

pub mod handlers;
pub mod models;
pub mod validation;
pub mod vocabulary;
