//! Document Facade — one entry point per document kind.
//!
//! Each operation is a straight composition: build prompt → invoke →
//! (parse, for project evaluations) → return. Contact lists are assembled
//! locally with no model call. No retries anywhere; a failed request is
//! reported, not repeated.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::config::Config;
use crate::contacts::{self, Contact, ContactSortField};
use crate::errors::DocumentError;
use crate::evaluation::{parse_evaluation, EvaluationResult};
use crate::models::{CoverLetterRequest, FirmProfile, Party, PastProject};
use crate::prompt;
use crate::provider::{GeminiClient, OpenAiClient, TextGenerator};
use crate::templates::{DocumentKind, Locale};

/// Entry point for all document generation.
///
/// Holds no per-request state and the template store is immutable, so
/// concurrent requests need no coordination. Cheap to clone.
#[derive(Clone)]
pub struct DocumentService {
    /// Letter-family provider: legal instruments and cover letters.
    letters: Arc<dyn TextGenerator>,
    /// Analysis-family provider: company profiles and project evaluations.
    analysis: Arc<dyn TextGenerator>,
}

impl DocumentService {
    pub fn new(letters: Arc<dyn TextGenerator>, analysis: Arc<dyn TextGenerator>) -> Self {
        Self { letters, analysis }
    }

    /// Wires the default provider split: Gemini for the letter family,
    /// OpenAI for the analysis family. Credentials come from `Config`,
    /// resolved once at startup and never per-request.
    pub fn from_config(config: &Config) -> Self {
        let timeout = Duration::from_secs(config.request_timeout_secs);
        Self::new(
            Arc::new(GeminiClient::new(config.gemini_api_key.clone(), timeout)),
            Arc::new(OpenAiClient::new(config.openai_api_key.clone(), timeout)),
        )
    }

    /// Generates a power-of-attorney or letter-of-association document.
    ///
    /// For `power_of_attorney` the party list must have at least two
    /// entries; only the first two are used (index 0 = grantor, index 1 =
    /// representative) and any additional entries are ignored by design.
    /// Any non-legal kind is rejected before a provider call.
    pub async fn generate_legal_document(
        &self,
        kind: DocumentKind,
        parties: &[Party],
        project_name: &str,
        locale: Locale,
    ) -> Result<String, DocumentError> {
        let prompt = prompt::build_legal_prompt(kind, parties, project_name, locale)?;
        info!("Generating {kind} for project '{project_name}'");
        Ok(self.letters.invoke(&prompt).await?)
    }

    /// Generates a consortium cover letter addressed to the funding
    /// institution named in the request.
    pub async fn generate_cover_letter(
        &self,
        request: &CoverLetterRequest,
        locale: Locale,
    ) -> Result<String, DocumentError> {
        let prompt = prompt::build_cover_letter_prompt(request, locale);
        info!("Generating cover_letter for project '{}'", request.project_name);
        Ok(self.letters.invoke(&prompt).await?)
    }

    /// Generates a company profile section tailored to the caller-supplied
    /// relevance statement.
    pub async fn generate_company_profile(
        &self,
        firm: &FirmProfile,
        relevance: &str,
        locale: Locale,
    ) -> Result<String, DocumentError> {
        let prompt = prompt::build_profile_prompt(firm, relevance, locale);
        info!("Generating company_profile for firm '{}'", firm.name);
        Ok(self.analysis.invoke(&prompt).await?)
    }

    /// Scores each past project for relevance to the current one and
    /// collects three additional recommendations.
    ///
    /// This is the structured kind: the model response must honor the
    /// evaluation JSON contract, and any violation is a hard failure. A
    /// truncated score list would silently misinform a business decision,
    /// so no partial result is ever returned.
    pub async fn generate_project_evaluation(
        &self,
        current_project: &str,
        past_projects: &[PastProject],
    ) -> Result<EvaluationResult, DocumentError> {
        let prompt =
            prompt::build_evaluation_prompt(current_project, past_projects, Locale::default());
        info!("Evaluating {} past projects", past_projects.len());

        let raw = self.analysis.invoke(&prompt).await?;
        let result = parse_evaluation(&raw, past_projects.len())?;

        // Cardinality is enforced above; a drifted title is logged, not fatal.
        for (supplied, scored) in past_projects.iter().zip(&result.evaluations) {
            if supplied.title != scored.title {
                warn!(
                    "Evaluation title drifted from input: '{}' vs '{}'",
                    supplied.title, scored.title
                );
            }
        }

        Ok(result)
    }

    /// Formats a contact directory: stable sort by the requested field,
    /// one labeled block per contact. Purely local, no model call.
    pub fn generate_contact_list(
        &self,
        contacts: &[Contact],
        sort_field: ContactSortField,
    ) -> Vec<String> {
        contacts::generate_contact_list(contacts, sort_field)
    }
}
