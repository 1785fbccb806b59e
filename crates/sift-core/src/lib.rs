//! Sift Core - Sensitive data classification.
//!
//! Classifies free text into one of six sensitive-data categories by asking
//! a hosted chat-completion model and parsing its JSON answer. Classification
//! never fails from the caller's point of view: any error is folded into a
//! "Non-Sensitive" fallback result carrying the error message.

pub mod category;
pub mod classifier;
pub mod config;
pub mod error;
pub mod llm;
pub mod parser;
pub mod prompt;

pub use category::{ClassificationResult, SensitiveCategory};
pub use classifier::SensitiveDataClassifier;
pub use config::ClassifierConfig;
pub use error::{ClassifierError, Result};
pub use llm::{ChatModel, OpenAiChatModel};
