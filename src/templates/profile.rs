//! Company-profile templates: instructions plus a worked example per locale.

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

const INSTRUCTIONS_EN: &str = r#"You are an expert technical writer. Generate a concise, engaging company profile section for a proposal.

- Use the English language.
- Include company name, core competencies, certifications, and notable achievements.
- Highlight relevance to the current project.
- Keep it under 200 words.
- Format with headings and bullet points for clarity."#;

const INSTRUCTIONS_PT: &str = r#"Você é um redator técnico especializado. Gere uma seção de perfil da empresa concisa e envolvente para uma proposta.

- Use a língua portuguesa.
- Inclua nome da empresa, competências principais, certificações e conquistas notáveis.
- Destaque a relevância para o projeto atual.
- Mantenha abaixo de 200 palavras.
- Formate com títulos e marcadores para clareza."#;

const INSTRUCTIONS_ES: &str = r#"Eres un redactor técnico experto. Genera una sección de perfil de empresa concisa y atractiva para una propuesta.

- Usa el idioma español.
- Incluye nombre de la empresa, competencias clave, certificaciones y logros destacados.
- Resalta la relevancia para el proyecto actual.
- Mantén menos de 200 palabras.
- Formatea con encabezados y viñetas para claridad."#;

const EXAMPLE_EN: &str = r#"Example Company Profile:

**Alpha Consulting**
Alpha Consulting is a leading engineering firm with over 20 years of experience in infrastructure development.
Key Strengths:
- Expertise in smart city solutions
- ISO 9001 and ISO 14001 certified
- Proven track record with 50+ projects completed in 10 countries

Contact: contact@alphaconsulting.com | +1-555-1234"#;

const EXAMPLE_PT: &str = r#"Exemplo de Perfil da Empresa:

**Alpha Consulting**
A Alpha Consulting é uma empresa líder em engenharia com mais de 20 anos de experiência em desenvolvimento de infraestrutura.
Principais Pontos Fortes:
- Especialização em soluções de cidades inteligentes
- Certificações ISO 9001 e ISO 14001
- Histórico comprovado com mais de 50 projetos concluídos em 10 países

Contato: contato@alphaconsulting.com | +55-11-5555-1234"#;

const EXAMPLE_ES: &str = r#"Ejemplo de Perfil de la Empresa:

**Alpha Consulting**
Alpha Consulting es una firma de ingeniería líder con más de 20 años de experiencia en desarrollo de infraestructura.
Puntos Fuertes:
- Experiencia en soluciones de ciudades inteligentes
- Certificaciones ISO 9001 e ISO 14001
- Historial comprobado con más de 50 proyectos completados en 10 países

Contacto: contacto@alphaconsulting.com | +34-555-123-456"#;
