pub mod composer;
pub mod handlers;
pub mod pipeline;
pub mod posting_extractor;
pub mod prompts;
pub mod tone;
