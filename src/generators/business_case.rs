//! Business case for financial advisors.

use super::Generator;
use crate::common::{RGBColor, Result};
use crate::outline::{Alignment, Heading, Outline, OutlineBuilder, Paragraph, Run};

const TITLE: &str = "Business Case: AVE CRM Platform";

/// Dark red from the product's palette.
const BRAND_RED: RGBColor = RGBColor::new(128, 4, 0);

const INTRODUCTION: [&str; 2] = [
    "AVE CRM is een modern, cloud-based softwareplatform specifiek ontwikkeld voor de werving- en selectiebranche. \
     Het systeem digitaliseert en automatiseert het volledige proces van kandidaat-bemiddeling: van het importeren \
     van CV's tot het matchen van kandidaten op opdrachten bij klanten.",
    "In tegenstelling tot standaardpakketten is AVE CRM gebouwd met de nieuwste technologieën (AI, Cloud) en \
     volledig afgestemd op de specifieke werkwijze van AVE, met een sterke focus op snelheid en privacy.",
];

const INTERNAL_VALUE: [(&str, &str); 4] = [
    (
        "Efficiëntieslag door AI:",
        "Gebruik van Google Gemini & Vertex AI om automatisch CV's uit te lezen. Bespaart recruiters uren aan handmatig invoerwerk per week.",
    ),
    (
        "Professionalisering:",
        "Integratie met Microsoft 365 (Agenda & Mail) en een moderne interface voor een sterke marktuitstraling.",
    ),
    (
        "Centrale Data & Inzicht:",
        "Eliminatie van versnipperde Excel-lijstjes; alle stuurinformatie (KPI's) is direct en centraal inzichtelijk.",
    ),
    (
        "AVG/GDPR Compliance:",
        "Privacy by Design opzet met veilige dataverwerking binnen Europa, essentieel voor gevoelige kandidaatgegevens.",
    ),
];

const COMMERCIAL_POTENTIAL: [(&str, &str); 4] = [
    (
        "Multi-Tenant Architectuur:",
        "Technisch gebouwd om eenvoudig nieuwe, afgeschermde omgevingen voor externe klanten op te starten (SaaS-model).",
    ),
    (
        "Generieke Marktbehoefte:",
        "De oplossing is niet AVE-specifiek maar lost universele problemen in de recruitmentsector op.",
    ),
    (
        "Toekomstbestendig:",
        "Gebouwd met de nieuwste standaarden (Laravel 12, React 19). Dit garandeert een lange technische levensduur en hoge marktwaarde.",
    ),
    (
        "Scalair Verdienmodel:",
        "Uitstekend geschikt voor een licentiemodel (MRR - Monthly Recurring Revenue), wat zorgt voor een voorspelbare waardestijging.",
    ),
];

const FOOTER: &str = "Vertrouwelijk document - Enkel voor intern gebruik en financieel advies.";

/// `AVE_CRM_Business_Case.docx`: what the platform is, its value for AVE,
/// and its resale potential.
#[derive(Debug, Clone, Copy, Default)]
pub struct BusinessCase;

impl Generator for BusinessCase {
    type Document = Outline;

    const FILE_NAME: &'static str = "AVE_CRM_Business_Case.docx";

    fn build(&self) -> Result<Outline> {
        let info = Paragraph::new()
            .run(Run::new("Betreft:").bold())
            .text(" Software analyse t.b.v. financieel advies en waardebepaling\n")
            .run(Run::new("Datum:").bold())
            .text(" 30 januari 2026\n")
            .align(Alignment::Right);

        let outline = OutlineBuilder::new(TITLE)
            .base_font("Arial", 11.0)
            .heading(Heading::new(TITLE, 0).align(Alignment::Center))
            .paragraph(info)
            .heading(section("1. Wat is AVE CRM?"))
            .paragraphs(INTRODUCTION.map(Paragraph::plain))
            .heading(section("2. Waarde voor AVE Services (Interne Business Case)"))
            .bullets(INTERNAL_VALUE.map(labelled))
            .heading(section("3. Commerciële Potentie (Doorverkoop aan Derden)"))
            .bullets(COMMERCIAL_POTENTIAL.map(labelled))
            .spacer()
            .paragraph(
                Paragraph::new()
                    .run(Run::new(FOOTER).italic().size_pt(8.0))
                    .align(Alignment::Center),
            )
            .build()?;
        Ok(outline)
    }

    fn confirmation(&self) -> String {
        format!("Document succesvol gegenereerd: {}", Self::FILE_NAME)
    }
}

fn section(title: &str) -> Heading {
    Heading::new(title, 1).color(BRAND_RED).size_pt(14.0)
}

/// A bold label followed by its explanation.
fn labelled((label, text): (&str, &str)) -> Paragraph {
    Paragraph::new()
        .run(Run::new(label).bold())
        .text(format!(" {text}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::{Block, ParagraphStyle};

    #[test]
    fn test_outline_shape() {
        let outline = BusinessCase.build().unwrap();
        assert_eq!(outline.headings().count(), 4);
        assert_eq!(outline.body_element_count(), 17);
        assert_eq!(outline.base_font().unwrap().family, "Arial");

        let sections: Vec<_> = outline.headings().filter(|h| h.level == 1).collect();
        assert_eq!(sections.len(), 3);
        for heading in sections {
            assert_eq!(heading.color, Some(BRAND_RED));
            assert_eq!(heading.size.map(|s| s.half_points()), Some(28));
        }
    }

    #[test]
    fn test_bullets_have_bold_labels() {
        let outline = BusinessCase.build().unwrap();
        let lists: Vec<_> = outline
            .blocks()
            .iter()
            .filter_map(|b| match b {
                Block::BulletList(items) => Some(items),
                _ => None,
            })
            .collect();
        assert_eq!(lists.len(), 2);
        for item in lists.iter().flat_map(|items| items.iter()) {
            assert_eq!(item.style, ParagraphStyle::ListBullet);
            assert!(item.runs[0].bold);
            assert!(!item.runs[1].bold);
            assert!(item.runs[1].text.starts_with(' '));
        }
    }

    #[test]
    fn test_footer_is_last() {
        let outline = BusinessCase.build().unwrap();
        let blocks = outline.blocks();
        assert!(matches!(blocks[blocks.len() - 2], Block::Spacer));
        match &blocks[blocks.len() - 1] {
            Block::Paragraph(p) => {
                assert_eq!(p.alignment, Some(Alignment::Center));
                assert!(p.runs.iter().all(|r| r.italic));
            },
            other => panic!("unexpected footer {other:?}"),
        }
    }

    #[test]
    fn test_confirmation_names_file() {
        assert_eq!(
            BusinessCase.confirmation(),
            "Document succesvol gegenereerd: AVE_CRM_Business_Case.docx"
        );
    }
}
