//! Prompt Builder — merges instructions, caller data, and worked examples
//! into one text block per document kind.
//!
//! Construction order is fixed: locale instructions verbatim, labeled
//! caller fields, worked example (kinds that have one), closing imperative
//! line. List fields render one `- item` line per element in input order;
//! an empty list renders an explicit placeholder line, never an empty
//! section.

use crate::errors::DocumentError;
use crate::models::{CoverLetterRequest, FirmProfile, Party, PastProject};
use crate::templates::{templates, DocumentKind, Locale};

/// Builds the prompt for either legal instrument kind. Any other kind is
/// rejected before a provider is ever touched.
pub fn build_legal_prompt(
    kind: DocumentKind,
    parties: &[Party],
    project_name: &str,
    locale: Locale,
) -> Result<String, DocumentError> {
    match kind {
        DocumentKind::PowerOfAttorney => build_power_of_attorney(parties, project_name, locale),
        DocumentKind::LetterOfAssociation => {
            Ok(build_letter_of_association(parties, project_name, locale))
        }
        other => Err(DocumentError::Input(format!(
            "{other} is not a legal document kind"
        ))),
    }
}

/// The first party is the principal and the second the attorney-in-fact.
/// Parties beyond the first two are silently ignored; this mirrors how the
/// documents are actually executed and is intentional, not data loss.
fn build_power_of_attorney(
    parties: &[Party],
    project_name: &str,
    locale: Locale,
) -> Result<String, DocumentError> {
    let (principal, representative) = match parties {
        [principal, representative, ..] => (principal, representative),
        _ => {
            return Err(DocumentError::Input(format!(
                "power_of_attorney requires at least 2 parties (grantor and representative), got {}",
                parties.len()
            )))
        }
    };

    let set = templates(DocumentKind::PowerOfAttorney, locale);
    Ok(format!(
        "{}\n\nProject Name: {}\n\nPrincipal: {} ({})\nAttorney-in-fact: {} ({})\n\nGenerate the full legal Power of Attorney document below:",
        set.instructions,
        project_name,
        principal.name,
        principal.role,
        representative.name,
        representative.role,
    ))
}

fn build_letter_of_association(parties: &[Party], project_name: &str, locale: Locale) -> String {
    let set = templates(DocumentKind::LetterOfAssociation, locale);
    format!(
        "{}\n\nProject Name: {}\n\nParticipating Firms:\n{}\n\nGenerate the full legal Letter of Association document below:",
        set.instructions,
        project_name,
        party_lines(parties),
    )
}

pub fn build_cover_letter_prompt(request: &CoverLetterRequest, locale: Locale) -> String {
    let set = templates(DocumentKind::CoverLetter, locale);

    let firm_names = if request.firms.is_empty() {
        "None provided".to_string()
    } else {
        request
            .firms
            .iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    // Keep the example consistent with the request so the model is not
    // shown one project name and asked for another.
    let example = set
        .example
        .unwrap_or_default()
        .replace("{project_name}", &request.project_name)
        .replace("{lead_firm}", &request.lead_firm)
        .replace("{firms}", &firm_names);

    format!(
        "{}\n\nHere is the project information you must incorporate:\n\nProject Name: {}\nProject Description: {}\nFunding Institution: {}\nParticipating Firms: {}\nLead Firm: {}\n\n{}\n\nNow generate the cover letter following these guidelines.",
        set.instructions,
        request.project_name,
        request.project_description,
        request.funding_institution,
        firm_names,
        request.lead_firm,
        example,
    )
}

pub fn build_profile_prompt(firm: &FirmProfile, relevance: &str, locale: Locale) -> String {
    let set = templates(DocumentKind::CompanyProfile, locale);
    format!(
        "{}\n\nGenerate a company profile using the data below.\n\nCompany Name: {}\nDescription: {}\nCertifications:\n{}\nKey Achievements:\n{}\nRelevance to Project: {}\n\n{}\n\nNow produce the tailored company profile.",
        set.instructions,
        firm.name,
        firm.description,
        bullet_lines(&firm.certifications),
        bullet_lines(&firm.achievements),
        relevance,
        set.example.unwrap_or_default(),
    )
}

pub fn build_evaluation_prompt(
    current_project: &str,
    past_projects: &[PastProject],
    locale: Locale,
) -> String {
    let set = templates(DocumentKind::ProjectEvaluation, locale);

    let listing = if past_projects.is_empty() {
        "- None provided".to_string()
    } else {
        past_projects
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{}. Title: {}\n   Description: {}", i + 1, p.title, p.description))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "{}\n\nCURRENT PROJECT:\n\"\"\"{}\"\"\"\n\nPAST PROJECTS:\n{}\n\nReturn the JSON document now, with no surrounding text.",
        set.instructions, current_project, listing,
    )
}

/// Renders `- item` lines in input order, or an explicit placeholder when
/// the list is empty. An empty section invites the model to fabricate
/// structure from silence.
fn bullet_lines(items: &[String]) -> String {
    if items.is_empty() {
        return "- None provided".to_string();
    }
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn party_lines(parties: &[Party]) -> String {
    if parties.is_empty() {
        return "- None provided".to_string();
    }
    parties
        .iter()
        .map(|p| format!("- {} ({})", p.name, p.role))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn party(name: &str, role: &str) -> Party {
        Party {
            name: name.to_string(),
            role: role.to_string(),
        }
    }

    fn sample_firm() -> FirmProfile {
        FirmProfile {
            name: "Alpha Consulting".to_string(),
            description: "A multidisciplinary engineering firm specializing in urban infrastructure."
                .to_string(),
            certifications: vec!["ISO 9001".to_string(), "ISO 14001".to_string()],
            achievements: vec!["Completed 50+ international projects".to_string()],
        }
    }

    fn two_parties() -> Vec<Party> {
        vec![
            party("John Doe", "Principal"),
            party("Jane Smith", "Attorney-in-fact"),
        ]
    }

    #[test]
    fn test_every_prompt_contains_its_instructions_verbatim() {
        for locale in Locale::ALL {
            let poa =
                build_legal_prompt(DocumentKind::PowerOfAttorney, &two_parties(), "P", locale)
                    .unwrap();
            assert!(poa.contains(templates(DocumentKind::PowerOfAttorney, locale).instructions));

            let loa =
                build_legal_prompt(DocumentKind::LetterOfAssociation, &two_parties(), "P", locale)
                    .unwrap();
            assert!(loa.contains(templates(DocumentKind::LetterOfAssociation, locale).instructions));

            let profile = build_profile_prompt(&sample_firm(), "relevant", locale);
            assert!(profile.contains(templates(DocumentKind::CompanyProfile, locale).instructions));

            let letter = build_cover_letter_prompt(&sample_cover_letter(), locale);
            assert!(letter.contains(templates(DocumentKind::CoverLetter, locale).instructions));

            let eval = build_evaluation_prompt("current", &[], locale);
            assert!(eval.contains(templates(DocumentKind::ProjectEvaluation, locale).instructions));
        }
    }

    #[test]
    fn test_unknown_locale_string_behaves_like_english() {
        let unknown = Locale::parse("klingon");
        let english = build_profile_prompt(&sample_firm(), "relevant", Locale::English);
        let fallback = build_profile_prompt(&sample_firm(), "relevant", unknown);
        assert_eq!(english, fallback);
    }

    #[test]
    fn test_power_of_attorney_uses_only_first_two_parties() {
        let parties = vec![
            party("John Doe", "Principal"),
            party("Jane Smith", "Attorney-in-fact"),
            party("Carlos Third", "Observer"),
        ];
        let prompt =
            build_legal_prompt(DocumentKind::PowerOfAttorney, &parties, "Dam", Locale::English)
                .unwrap();
        assert!(prompt.contains("John Doe (Principal)"));
        assert!(prompt.contains("Jane Smith (Attorney-in-fact)"));
        assert!(!prompt.contains("Carlos Third"));
        assert!(!prompt.contains("Observer"));
    }

    #[test]
    fn test_power_of_attorney_rejects_fewer_than_two_parties() {
        let result = build_legal_prompt(
            DocumentKind::PowerOfAttorney,
            &[party("Solo", "Principal")],
            "Dam",
            Locale::English,
        );
        assert!(matches!(result, Err(DocumentError::Input(_))));
    }

    #[test]
    fn test_legal_prompt_rejects_non_legal_kinds() {
        for kind in [
            DocumentKind::CompanyProfile,
            DocumentKind::ProjectEvaluation,
            DocumentKind::ContactList,
            DocumentKind::CoverLetter,
        ] {
            let result = build_legal_prompt(kind, &two_parties(), "P", Locale::English);
            assert!(matches!(result, Err(DocumentError::Input(_))), "{kind} accepted");
        }
    }

    #[test]
    fn test_letter_of_association_lists_all_firms_in_order() {
        let parties = vec![
            party("Alpha Consulting", "Lead Firm"),
            party("Beta Engineering", "Partner"),
            party("Gamma Solutions", "Partner"),
        ];
        let prompt = build_legal_prompt(
            DocumentKind::LetterOfAssociation,
            &parties,
            "Renewable Energy Project",
            Locale::English,
        )
        .unwrap();

        let alpha = prompt.find("- Alpha Consulting (Lead Firm)").unwrap();
        let beta = prompt.find("- Beta Engineering (Partner)").unwrap();
        let gamma = prompt.find("- Gamma Solutions (Partner)").unwrap();
        assert!(alpha < beta && beta < gamma);
        assert!(prompt.contains("Project Name: Renewable Energy Project"));
    }

    #[test]
    fn test_empty_profile_lists_render_placeholder_not_empty_section() {
        let firm = FirmProfile {
            name: "Bare Firm".to_string(),
            description: "desc".to_string(),
            certifications: vec![],
            achievements: vec![],
        };
        let prompt = build_profile_prompt(&firm, "relevant", Locale::English);
        assert!(prompt.contains("Certifications:\n- None provided"));
        assert!(prompt.contains("Key Achievements:\n- None provided"));
    }

    #[test]
    fn test_profile_prompt_renders_lists_in_input_order() {
        let prompt = build_profile_prompt(&sample_firm(), "supports smart city goals", Locale::English);
        let first = prompt.find("- ISO 9001").unwrap();
        let second = prompt.find("- ISO 14001").unwrap();
        assert!(first < second);
        assert!(prompt.contains("Relevance to Project: supports smart city goals"));
        assert!(prompt.contains("Now produce the tailored company profile."));
    }

    fn sample_cover_letter() -> CoverLetterRequest {
        CoverLetterRequest {
            project_name: "Sustainable Energy Initiative".to_string(),
            project_description: "Developing renewable energy solutions.".to_string(),
            funding_institution: "Global Energy Fund".to_string(),
            firms: vec![
                party("Alpha Consulting", "Lead Firm"),
                party("Beta Engineers", "Partner"),
            ],
            lead_firm: "Alpha Consulting".to_string(),
        }
    }

    #[test]
    fn test_cover_letter_example_placeholders_are_substituted() {
        let prompt = build_cover_letter_prompt(&sample_cover_letter(), Locale::English);
        assert!(!prompt.contains("{project_name}"));
        assert!(!prompt.contains("{lead_firm}"));
        assert!(!prompt.contains("{firms}"));
        assert!(prompt.contains("the project titled \"Sustainable Energy Initiative\""));
        assert!(prompt.contains("Alpha Consulting, Beta Engineers"));
    }

    #[test]
    fn test_cover_letter_with_no_firms_uses_placeholder() {
        let mut request = sample_cover_letter();
        request.firms.clear();
        let prompt = build_cover_letter_prompt(&request, Locale::English);
        assert!(prompt.contains("Participating Firms: None provided"));
    }

    #[test]
    fn test_evaluation_prompt_numbers_projects_in_order() {
        let past = vec![
            PastProject {
                title: "Urban Smart Grid Deployment".to_string(),
                description: "City-wide smart grid.".to_string(),
            },
            PastProject {
                title: "IoT Environmental Monitoring".to_string(),
                description: "Air and water quality tracking.".to_string(),
            },
        ];
        let prompt = build_evaluation_prompt("AI water systems", &past, Locale::English);
        assert!(prompt.contains("1. Title: Urban Smart Grid Deployment"));
        assert!(prompt.contains("2. Title: IoT Environmental Monitoring"));
        assert!(prompt.contains("CURRENT PROJECT:\n\"\"\"AI water systems\"\"\""));
    }

    #[test]
    fn test_evaluation_prompt_handles_empty_project_list() {
        let prompt = build_evaluation_prompt("current", &[], Locale::English);
        assert!(prompt.contains("PAST PROJECTS:\n- None provided"));
    }
}
