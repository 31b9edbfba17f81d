//! Prompt-construction and response-validation core for AI-assisted
//! proposal documents: legal instruments, cover letters, company profiles,
//! project-relevance evaluations, and contact directories.
//!
//! Data flows strictly one way: caller payload → prompt builder (backed by
//! the locale template store) → provider invocation → response validation
//! (structured kinds only) → caller. Nothing is persisted and nothing is
//! retried.

pub mod config;
pub mod contacts;
pub mod errors;
pub mod evaluation;
pub mod facade;
pub mod models;
pub mod prompt;
pub mod provider;
pub mod templates;

pub use config::Config;
pub use contacts::{Contact, ContactSortField};
pub use errors::{DocumentError, ValidationError};
pub use evaluation::{EvaluationResult, ProjectEvaluation, Recommendation};
pub use facade::DocumentService;
pub use models::{CoverLetterRequest, FirmProfile, Party, PastProject};
pub use provider::{GenerationError, TextGenerator};
pub use templates::{DocumentKind, Locale};
