//! Project-evaluation templates. This family has no worked example: the
//! expected output schema is embedded in the instructions instead, and the
//! JSON field names stay identical across locales so the parser never
//! depends on the requested language.

use super::Locale;

pub(super) fn instructions(locale: Locale) -> &'static str {
    match locale {
        Locale::English => INSTRUCTIONS_EN,
        Locale::Portuguese => INSTRUCTIONS_PT,
        Locale::Spanish => INSTRUCTIONS_ES,
    }
}

const INSTRUCTIONS_EN: &str = r#"You are a proposal analyst. Given the current project and a list of past projects, do the following:

1. For each past project, rate its relevancy to the CURRENT PROJECT on a scale of 0-100.
2. Provide a one-sentence rationale for each rating.
3. Suggest three additional project ideas or case studies (title + one-line description) that would strengthen our proposal.

Use this format in JSON (no extra text):
{
  "evaluations": [
    {
      "title": "Project Title",
      "score": 0-100,
      "rationale": "One sentence justification"
    },
    ...
  ],
  "additional_recommendations": [
    {
      "title": "Recommended Project Title",
      "description": "One-line description"
    },
    ...
  ]
}"#;

const INSTRUCTIONS_PT: &str = r#"Você é um analista de propostas. Dado o projeto atual e uma lista de projetos anteriores, faça o seguinte:

1. Para cada projeto anterior, avalie sua relevância para o PROJETO ATUAL em uma escala de 0-100.
2. Forneça uma justificativa de uma frase para cada avaliação.
3. Sugira três ideias de projetos ou estudos de caso adicionais (título + descrição de uma linha) que fortaleceriam nossa proposta.

Use este formato em JSON (sem texto adicional):
{
  "evaluations": [
    {
      "title": "Título do Projeto",
      "score": 0-100,
      "rationale": "Justificativa de uma frase"
    },
    ...
  ],
  "additional_recommendations": [
    {
      "title": "Título do Projeto Recomendado",
      "description": "Descrição de uma linha"
    },
    ...
  ]
}"#;

const INSTRUCTIONS_ES: &str = r#"Eres un analista de propuestas. Dado el proyecto actual y una lista de proyectos anteriores, haz lo siguiente:

1. Para cada proyecto anterior, califica su relevancia para el PROYECTO ACTUAL en una escala de 0-100.
2. Proporciona una justificación de una frase para cada calificación.
3. Sugiere tres ideas de proyectos o casos de estudio adicionales (título + descripción de una línea) que fortalecerían nuestra propuesta.

Usa este formato en JSON (sin texto adicional):
{
  "evaluations": [
    {
      "title": "Título del Proyecto",
      "score": 0-100,
      "rationale": "Justificación de una frase"
    },
    ...
  ],
  "additional_recommendations": [
    {
      "title": "Título del Proyecto Recomendado",
      "description": "Descripción de una línea"
    },
    ...
  ]
}"#;
