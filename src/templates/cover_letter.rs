//! Cover-letter templates. The examples carry `{project_name}`,
//! `{lead_firm}` and `{firms}` placeholders that the prompt builder fills
//! from the request, so the example stays consistent with the real data.

use super::Locale;

pub(super) fn instructions(locale: Locale) -> &'static str {
    match locale {
        Locale::English => INSTRUCTIONS_EN,
        Locale::Portuguese => INSTRUCTIONS_PT,
        Locale::Spanish => INSTRUCTIONS_ES,
    }
}

pub(super) fn example(locale: Locale) -> &'static str {
    match locale {
        Locale::English => EXAMPLE_EN,
        Locale::Portuguese => EXAMPLE_PT,
        Locale::Spanish => EXAMPLE_ES,
    }
}

const INSTRUCTIONS_EN: &str = r#"You are a professional proposal writer tasked with creating a formal, clear, and engaging cover letter for a consulting or engineering project proposal.

- Use the English language.
- Address the funding institution respectfully.
- Mention the project name and a concise summary.
- Highlight the participating firms by name and emphasize the leadership of the lead firm.
- Showcase the strengths, experience, and relevance of the consortium.
- Match the tone expected by funding bodies: formal, confident, and precise.
- Avoid overly technical jargon but maintain professionalism.
- Format the letter as a standard business letter."#;

const INSTRUCTIONS_PT: &str = r#"Você é um redator profissional de propostas encarregado de criar uma carta de apresentação formal, clara e envolvente para uma proposta de projeto de consultoria ou engenharia.

- Use a língua portuguesa.
- Dirija-se respeitosamente à instituição financiadora.
- Mencione o nome do projeto e um resumo conciso.
- Destaque as empresas participantes pelo nome e enfatize a liderança da empresa líder.
- Apresente os pontos fortes, a experiência e a relevância do consórcio.
- Adote o tom esperado pelas instituições financiadoras: formal, confiante e preciso.
- Evite jargões técnicos excessivos, mas mantenha o profissionalismo.
- Formate a carta como uma carta comercial padrão."#;

const INSTRUCTIONS_ES: &str = r#"Eres un redactor profesional de propuestas encargado de crear una carta de presentación formal, clara y atractiva para una propuesta de proyecto de consultoría o ingeniería.

- Usa el idioma español.
- Dirígete respetuosamente a la institución financiadora.
- Menciona el nombre del proyecto y un resumen conciso.
- Destaca las empresas participantes por nombre y enfatiza el liderazgo de la empresa líder.
- Muestra las fortalezas, experiencia y relevancia del consorcio.
- Adopta el tono esperado por las instituciones financiadoras: formal, confiado y preciso.
- Evita la jerga técnica excesiva pero mantén el profesionalismo.
- Formatea la carta como una carta comercial estándar."#;

const EXAMPLE_EN: &str = r#"Example Cover Letter:

Dear Review Committee,

We are pleased to submit our Expression of Interest for the project titled "{project_name}".
Our consortium, led by {lead_firm}, includes {firms}.
With a combined experience of over 50 years in sustainable energy projects, we are confident in delivering exceptional results aligned with the funding institution's objectives.

We look forward to collaborating on this transformative project.

Sincerely,
{lead_firm}"#;

const EXAMPLE_PT: &str = r#"Exemplo de Carta de Apresentação:

Prezada Comissão Avaliadora,

Temos o prazer de submeter nossa Manifestação de Interesse para o projeto intitulado "{project_name}".
Nosso consórcio, liderado pela {lead_firm}, inclui {firms}.
Com uma experiência combinada de mais de 50 anos em projetos de energia sustentável, estamos confiantes em entregar resultados excepcionais alinhados aos objetivos da instituição financiadora.

Esperamos colaborar neste projeto transformador.

Atenciosamente,
{lead_firm}"#;

const EXAMPLE_ES: &str = r#"Ejemplo de Carta de Presentación:

Estimado Comité Evaluador,

Nos complace presentar nuestra Manifestación de Interés para el proyecto titulado "{project_name}".
Nuestro consorcio, liderado por {lead_firm}, incluye a {firms}.
Con una experiencia combinada de más de 50 años en proyectos de energía sostenible, confiamos en ofrecer resultados excepcionales alineados con los objetivos de la institución financiadora.

Esperamos colaborar en este proyecto transformador.

Atentamente,
{lead_firm}"#;
