//! Caller-supplied payloads. All of these are transient: constructed per
//! request, never persisted by this crate.

use serde::{Deserialize, Serialize};

/// A named actor with a role string (e.g. "Principal", "Lead Firm").
///
/// Identity is positional within a list. For power-of-attorney documents
/// the first party is the grantor/principal and the second the authorized
/// representative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    pub role: String,
}

/// Structured input for a company profile section. The free-text
/// relevance statement is supplied separately by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirmProfile {
    pub name: String,
    pub description: String,
    pub certifications: Vec<String>,
    pub achievements: Vec<String>,
}

/// A completed project offered as evidence of relevant experience.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PastProject {
    pub title: String,
    pub description: String,
}

/// Input for a consortium cover letter addressed to a funding institution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverLetterRequest {
    pub project_name: String,
    pub project_description: String,
    pub funding_institution: String,
    pub firms: Vec<Party>,
    pub lead_firm: String,
}
