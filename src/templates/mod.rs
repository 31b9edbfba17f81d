//! Locale Template Store — instruction and example text per document kind
//! and locale. Templates are immutable `'static` constants; there is
//! nothing to load and nothing to mutate, so concurrent lookups need no
//! coordination.

mod cover_letter;
mod evaluation;
mod legal;
mod profile;

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of document kinds this core can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    PowerOfAttorney,
    LetterOfAssociation,
    CoverLetter,
    CompanyProfile,
    ProjectEvaluation,
    ContactList,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentKind::PowerOfAttorney => "power_of_attorney",
            DocumentKind::LetterOfAssociation => "letter_of_association",
            DocumentKind::CoverLetter => "cover_letter",
            DocumentKind::CompanyProfile => "company_profile",
            DocumentKind::ProjectEvaluation => "project_evaluation",
            DocumentKind::ContactList => "contact_list",
        };
        f.write_str(name)
    }
}

/// Supported output languages. Every template family defines all three.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Portuguese,
    Spanish,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::English, Locale::Portuguese, Locale::Spanish];

    /// Normalizes a caller-supplied locale string. Unknown or empty input
    /// silently resolves to English rather than failing.
    pub fn parse(raw: &str) -> Locale {
        match raw.trim().to_lowercase().as_str() {
            "portuguese" => Locale::Portuguese,
            "spanish" => Locale::Spanish,
            _ => Locale::English,
        }
    }
}

/// Instruction block plus optional worked example for one (kind, locale) pair.
#[derive(Debug, Clone, Copy)]
pub struct TemplateSet {
    pub instructions: &'static str,
    /// Absent for the kinds that have no worked example: the legal
    /// instruments, and project_evaluation (which embeds its output schema
    /// inline in the instructions instead).
    pub example: Option<&'static str>,
}

/// Looks up the template set for a prompted document kind.
///
/// Total for every kind that goes to a provider. Asking for `contact_list`
/// templates is a programmer error: that kind is assembled locally and has
/// no prompt family.
pub fn templates(kind: DocumentKind, locale: Locale) -> TemplateSet {
    match kind {
        DocumentKind::PowerOfAttorney => TemplateSet {
            instructions: legal::power_of_attorney(locale),
            example: None,
        },
        DocumentKind::LetterOfAssociation => TemplateSet {
            instructions: legal::letter_of_association(locale),
            example: None,
        },
        DocumentKind::CoverLetter => TemplateSet {
            instructions: cover_letter::instructions(locale),
            example: Some(cover_letter::example(locale)),
        },
        DocumentKind::CompanyProfile => TemplateSet {
            instructions: profile::instructions(locale),
            example: Some(profile::example(locale)),
        },
        DocumentKind::ProjectEvaluation => TemplateSet {
            instructions: evaluation::instructions(locale),
            example: None,
        },
        DocumentKind::ContactList => {
            panic!("contact_list documents are assembled locally and have no prompt templates")
        }
    }
}
