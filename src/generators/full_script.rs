//! Fully written-out speaker script.

use super::{CUE_RED, DARK_BLUE, Generator};
use crate::common::Result;
use crate::outline::{Alignment, Heading, Outline, OutlineBuilder, Paragraph, Run};

const TITLE: &str = "Volledig Uitgeschreven Script: Eindpresentatie AVE CRM";

/// Spoken text for one slide, with an optional stage direction read
/// before it.
struct SlideScript {
    title: &'static str,
    text: &'static str,
    cue: Option<&'static str>,
}

const SLIDES: [SlideScript; 13] = [
    SlideScript {
        title: "Titel Slide",
        text: "Goedemorgen allemaal. Welkom bij mijn eindpresentatie.\n\n\
               Mijn naam is Stijn van der Neut en de afgelopen 20 weken heb ik mij beziggehouden met de digitale transformatie van AVE Consultancy. \
               Vandaag neem ik jullie mee in de reis van een klassieke, analoge werkwijze naar een modern, digitaal SaaS-platform. \
               Ik vertel jullie niet alleen WAT ik heb gebouwd, maar vooral WAAROM, en hoe ik mijzelf tijdens dit proces heb ontwikkeld van student naar professional.",
        cue: None,
    },
    SlideScript {
        title: "Agenda",
        text: "Om structuur te geven aan het verhaal, beginnen we bij de basis: de situatie zoals ik die aantrof. \
               Daarna kijken we naar het probleem dat daaruit voortkwam en het onderzoek dat ik heb gedaan. \
               Vervolgens duiken we de diepte in: ik laat jullie de oplossing zien en we bespreken twee technische hoogtepunten: Multi-Tenancy en AI. \
               Ik sluit af met een persoonlijke reflectie op mijn leerproces en een blik op de toekomst.\n\n\
               Vragen mogen tussendoor als ze dringend zijn, maar voor de flow bewaar ik ze het liefst voor het einde.",
        cue: None,
    },
    SlideScript {
        title: "Situatieschets & Aanleiding",
        text: "Laten we teruggaan naar september. AVE Consultancy is een succesvol headhuntingbureau met de ambitie om te groeien. \
               Maar als we onder de motorkap keken, zagen we dat de bedrijfsprocessen die ambitie niet konden bijbenen.\n\n\
               De situatie was als volgt: informatie stond versnipperd. CV's stonden in mappen op Dropbox, klantgegevens in verschillende Excel-lijsten en communicatie zat vast in de mailboxen van individuele medewerkers. \
               Er was geen centraal brein. Als Adriaan wilde weten: 'Welke kandidaten hebben we voorgesteld aan Klant X?', dan was dat een zoektocht van soms wel een uur.",
        cue: None,
    },
    SlideScript {
        title: "Opdracht, Scope & Tijdsframe",
        text: "Dat moest anders. De opdracht die ik kreeg was helder, maar uitdagend: 'Ontwikkel een fundering voor de toekomst'. \
               Niet zomaar een database, maar een SaaS-platform (Software as a Service) waarmee AVE niet alleen zelf kan werken, maar dat in de toekomst ook aan andere bureaus verkocht kan worden.\n\n\
               Ik had 20 weken de tijd. We hebben daarom een strakke scope bepaald voor een MVP (Minimum Viable Product). \
               De focus lag op de kern van het vak: Relaties beheren. Kandidaten, Klanten en de Opdrachten daartussen. \
               Zaken als facturatie of een mobiele app hebben we bewust buiten beschouwing gelaten om kwaliteit te kunnen garanderen.",
        cue: None,
    },
    SlideScript {
        title: "Probleemstelling",
        text: "Waarom was die oude situatie nu zo problematisch? \n\
               Ten eerste: Inefficiëntie. Het handmatig verwerken van honderden CV's kostte letterlijk dagen werk.\n\
               Ten tweede: Risico. We werken met persoonsgegevens. Excel-lijstjes heen en weer mailen is in 2026 echt niet meer AVG-proof.\n\
               En ten derde: Gebrek aan inzicht. Zonder relaties in je data kun je niet sturen op cijfers. Je vaart blind.",
        cue: None,
    },
    SlideScript {
        title: "Onderzoek (Build vs Buy)",
        text: "Als HBO-professional ga je niet meteen bouwen. Je gaat eerst analyseren. Moeten we dit wel zelf maken?\n\n\
               Ik heb volgens de DSR-methode (Design Science Research) gekeken naar de markt. We zagen twee smaken:\n\
               Aan de ene kant de Enterprise giganten zoals Bullhorn of Salesforce. Geweldig, maar extreem duur en complex om in te richten voor een klein bureau.\n\
               Aan de andere kant systemen zoals Recruitee. Betaalbaar, maar die zijn gemaakt voor HR-afdelingen, niet voor bureaus die 'makelen' tussen partijen.\n\n\
               De conclusie was duidelijk: Er is een 'gap' in de markt. Maatwerk was de enige manier om de specifieke werkwijze van AVE te ondersteunen én eigenaar te blijven van de data.",
        cue: None,
    },
    SlideScript {
        title: "De Oplossing (Tech Stack)",
        text: "Dus zijn we gaan bouwen. Ik heb gekozen voor een robuuste, moderne tech stack.\n\n\
               Aan de achterkant (Backend) draait Laravel (PHP). Dit is de wereldwijde standaard voor SaaS-applicaties: veilig en stabiel.\n\
               Aan de voorkant (Frontend) zien de gebruikers een React applicatie. Dit zorgt voor die snelle, 'snappy' ervaring die je verwacht van moderne software, zonder dat de pagina steeds moet herladen.\n\
               Voor de opslag van die duizenden CV's gebruiken we Cloudflare R2. Dat is net zo goed als Amazon S3, maar een stuk goedkoper en sneller.",
        cue: None,
    },
    SlideScript {
        title: "Diepgang 1: Multi-Tenancy",
        text: "Dan nu de technische diepgang. Want hoe zorg je er in een SaaS-omgeving voor dat Klant A nooit de data van Klant B ziet?\n\n\
               Ik heb gekozen voor een 'Database-per-Tenant' strategie. Dit is de meest veilige optie. \n\
               Iedere klant die inlogt, krijgt zijn eigen, fysiek gescheiden database. \n\
               Het systeem kijkt naar het domein, bijvoorbeeld 'klant-a.avecrm.nl', en weet dan: ik mag alléén verbinden met Database A.\n\
               Zelfs als ik als programmeur een fout maak in de code, is het technisch onmogelijk om data van de verkeerde klant op te halen. Veiligheid 'by design' dus.",
        cue: None,
    },
    SlideScript {
        title: "Diepgang 2: AI Bulk Import",
        text: "Het tweede technische hoogtepunt loste ons grootste probleem op: De historie. We hadden 3500 oude CV's in mapjes.\n\n\
               Ik heb een AI-pipeline gebouwd met Google Gemini 3 Pro.\n\
               Het werkt zo: Je sleept 100 CV's in het systeem. De server pakt ze op, en de AI 'leest' ze als een mens.\n\
               Hij haalt de naam, e-mail, skills en werkervaring eruit en stopt dit netjes in de database.\n\
               Wat vroeger 15 minuten per CV kostte aan typewerk, gebeurt nu in enkele seconden. Dit is de ware kracht van digitalisering.",
        cue: Some("Als je een video/demo hebt, start die hier."),
    },
    SlideScript {
        title: "Persoonlijke Ontwikkeling (Veerkracht)",
        text: "Tijdens dit project ging niet alles vlekkeloos. En daar wil ik eerlijk over zijn.\n\n\
               Halverwege de stage, in Sprint 4, crashte mijn ontwikkelomgeving. Omdat ik geen goede backups had, was ik een week werk kwijt.\n\
               Mijn eerste reactie was paniek. Ik trok me terug, het zogenoemde 'oestergedrag'. Ik dacht: ik los dit wel alleen op.\n\
               Maar ik leerde dat dat niet werkt. Ik heb het opgebiecht aan mijn begeleider. In plaats van boosheid, kreeg ik hulp.\n\
               Ik heb diezelfde dag nog een geautomatiseerd backup-script geschreven. \n\
               De les die ik meeneem: Fouten maken mag, zolang je erover communiceert en het oplost.",
        cue: None,
    },
    SlideScript {
        title: "Persoonlijke Ontwikkeling (Professionaliteit)",
        text: "Als ik kijk naar de Stijn van 20 weken geleden, zie ik een afwachtende student. Ik vroeg: 'Wat moet ik doen?'\n\n\
               Nu sta ik hier als professional. Ik wacht niet meer af, ik stel voor. \n\
               Ik heb zelf de wekelijkse meetings opgezet, ik beheer de planning en ik adviseer Adriaan over technische keuzes.\n\
               Zoals in de feedback van Hugo stond: Ik heb de rol gepakt van 'Strategisch Partner'.",
        cue: None,
    },
    SlideScript {
        title: "Toekomstvisie",
        text: "En nu? De stage stopt, maar het product leeft.\n\n\
               De MVP gaat live. We gaan het systeem nu intern gebruiken ('Dogfooding') om de laatste puntjes op de i te zetten.\n\
               De volgende stap is de koppeling met Outlook, zodat ook de agenda's gesynchroniseerd zijn.\n\
               En op de lange termijn staat de weg open om dit platform in de markt te zetten voor andere bureaus.",
        cue: None,
    },
    SlideScript {
        title: "Conclusie",
        text: "Samenvattend: We zijn in 20 weken van een analoge chaos naar een gestructureerd, digitaal fundament gegaan.\n\
               Er staat een veilig systeem, er is een slimme AI-oplossing en ik heb mijzelf ontwikkeld tot een zelfstandige developer.\n\n\
               Ik wil Adriaan en mijn begeleiders bedanken voor het vertrouwen.\n\
               Dit was mijn presentatie. Zijn er nog vragen?",
        cue: None,
    },
];

/// `Volledig_Script_Eindpresentatie_AVE_CRM.docx`: one spoken-text
/// paragraph per slide, ready to read aloud.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullScript;

impl Generator for FullScript {
    type Document = Outline;

    const FILE_NAME: &'static str = "Volledig_Script_Eindpresentatie_AVE_CRM.docx";

    fn build(&self) -> Result<Outline> {
        let builder = OutlineBuilder::new(TITLE)
            .base_font("Arial", 11.0)
            .heading(Heading::new(TITLE, 0).align(Alignment::Center))
            .paragraph(
                Paragraph::new()
                    .run(Run::new("Spreektaal - Klaar om voor te lezen of te oefenen").italic())
                    .align(Alignment::Center),
            )
            .spacer();

        let outline = SLIDES
            .iter()
            .enumerate()
            .fold(builder, |builder, (index, slide)| slide_section(builder, index + 1, slide))
            .build()?;
        Ok(outline)
    }
}

fn slide_section(builder: OutlineBuilder, number: usize, slide: &SlideScript) -> OutlineBuilder {
    let builder = builder
        .heading(Heading::new(format!("Slide {}: {}", number, slide.title), 2).color(DARK_BLUE));
    let builder = match slide.cue {
        Some(cue) => builder.paragraph(cue_paragraph(cue)),
        None => builder,
    };
    builder.paragraph(Paragraph::plain(slide.text)).spacer()
}

fn cue_paragraph(cue: &str) -> Paragraph {
    Paragraph::new().run(
        Run::new(format!("[ACTIE: {cue}]"))
            .bold()
            .italic()
            .color(CUE_RED),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::Block;

    #[test]
    fn test_outline_counts() {
        let outline = FullScript.build().unwrap();
        let cues = SLIDES.iter().filter(|s| s.cue.is_some()).count();
        assert_eq!(cues, 1);
        assert_eq!(outline.body_element_count(), 3 + 3 * SLIDES.len() + cues);
    }

    #[test]
    fn test_cue_precedes_spoken_text() {
        let outline = FullScript.build().unwrap();
        let blocks = outline.blocks();
        let cue_at = blocks
            .iter()
            .position(|b| matches!(b, Block::Paragraph(p) if p.plain_text().starts_with("[ACTIE:")))
            .unwrap();
        assert!(matches!(
            &blocks[cue_at - 1],
            Block::Heading(h) if h.text == "Slide 9: Diepgang 2: AI Bulk Import"
        ));
        match &blocks[cue_at] {
            Block::Paragraph(p) => {
                let run = &p.runs[0];
                assert!(run.bold && run.italic);
                assert_eq!(run.color, Some(CUE_RED));
                assert_eq!(run.text, "[ACTIE: Als je een video/demo hebt, start die hier.]");
            },
            other => panic!("unexpected block {other:?}"),
        }
    }

    #[test]
    fn test_spoken_text_keeps_line_breaks() {
        assert!(SLIDES[0].text.contains("eindpresentatie.\n\nMijn naam"));
        assert!(
            SLIDES[4]
                .text
                .starts_with("Waarom was die oude situatie nu zo problematisch? \nTen eerste")
        );
    }
}
