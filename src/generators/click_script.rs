//! Speaker script with explicit click moments.

use super::{CUE_RED, DARK_BLUE, Generator};
use crate::common::Result;
use crate::outline::{Alignment, Heading, Outline, OutlineBuilder, Paragraph, Run};

const TITLE: &str = "Klik-Script: Eindpresentatie AVE CRM";

const CLICK_TEXT: &str = "--- [KLIK] NAAR VOLGENDE SLIDE ---";

/// One line of a slide's script.
#[derive(Debug, Clone, Copy)]
enum Line {
    Say(&'static str),
    /// Advance to the next slide.
    Click,
}

use Line::{Click, Say};

struct Section {
    title: &'static str,
    lines: &'static [Line],
}

const SECTIONS: [Section; 13] = [
    Section {
        title: "Titel Slide",
        lines: &[
            Say("Goedemorgen allemaal. Welkom bij mijn eindpresentatie."),
            Say("Mijn naam is Stijn van der Neut en de afgelopen 20 weken heb ik mij beziggehouden met de digitale transformatie van AVE Consultancy."),
            Say("Vandaag neem ik jullie mee in de reis van een klassieke, analoge werkwijze naar een modern, digitaal SaaS-platform."),
            Say("Ik vertel jullie niet alleen WAT ik heb gebouwd, maar vooral WAAROM, en hoe ik mijzelf tijdens dit proces heb ontwikkeld van student naar professional."),
            Click,
        ],
    },
    Section {
        title: "Agenda",
        lines: &[
            Say("Om structuur te geven aan het verhaal, beginnen we bij de basis: de situatie zoals ik die aantrof."),
            Say("Daarna kijken we naar het probleem dat daaruit voortkwam en het onderzoek dat ik heb gedaan."),
            Say("Vervolgens duiken we de diepte in: ik laat jullie de oplossing zien en we bespreken twee technische hoogtepunten: Multi-Tenancy en AI."),
            Say("Ik sluit af met een persoonlijke reflectie op mijn leerproces en een blik op de toekomst."),
            Say("Vragen mogen tussendoor als ze dringend zijn, maar voor de flow bewaar ik ze het liefst voor het einde."),
            Click,
        ],
    },
    Section {
        title: "Situatieschets & Aanleiding",
        lines: &[
            Say("Laten we teruggaan naar september. AVE Consultancy is een succesvol headhuntingbureau met de ambitie om te groeien."),
            Say("Maar als we onder de motorkap keken, zagen we dat de bedrijfsprocessen die ambitie niet konden bijbenen."),
            Say("De situatie was als volgt: informatie stond versnipperd. CV's stonden in mappen op Dropbox, klantgegevens in verschillende Excel-lijsten en communicatie zat vast in de mailboxen van individuele medewerkers."),
            Say("Het gevolg was simpel maar pijnlijk: Er was geen centraal inzicht. Als Adriaan wilde weten: 'Welke kandidaten hebben we voorgesteld aan Klant X?', dan was dat een zoektocht van soms wel een uur."),
            Click,
        ],
    },
    Section {
        title: "Opdracht, Scope & Tijdsframe",
        lines: &[
            Say("Dat moest anders. De opdracht die ik kreeg was helder, maar uitdagend: 'Ontwikkel een fundering voor de toekomst'."),
            Say("Niet zomaar een database, maar een SaaS-platform (Software as a Service) waarmee AVE niet alleen zelf kan werken, maar dat in de toekomst ook aan andere bureaus verkocht kan worden."),
            Say("Ik had 20 weken de tijd. We hebben daarom een strakke scope bepaald voor een MVP (Minimum Viable Product)."),
            Say("De focus lag op de kern van het vak: Relaties beheren. Kandidaten, Klanten en de Opdrachten daartussen."),
            Say("Zaken als facturatie of een mobiele app hebben we bewust buiten beschouwing gelaten om kwaliteit te kunnen garanderen."),
            Click,
        ],
    },
    Section {
        title: "Probleemstelling",
        lines: &[
            Say("Waarom was die oude situatie nu zo problematisch? Ik heb dit samengevat in drie punten."),
            Say("Ten eerste: Inefficiëntie. Het handmatig verwerken van honderden CV's kostte letterlijk dagen werk."),
            Say("Ten tweede: Risico. We werken met persoonsgegevens. Excel-lijstjes heen en weer mailen is in 2026 echt niet meer AVG-proof."),
            Say("En ten derde: Gebrek aan inzicht. Zonder relaties in je data kun je niet sturen op cijfers. Je vaart blind."),
            Click,
        ],
    },
    Section {
        title: "Onderzoek (Build vs Buy)",
        lines: &[
            Say("Als HBO-professional ga je niet meteen bouwen. Je gaat eerst analyseren. Moeten we dit wel zelf maken?"),
            Say("Ik heb volgens de DSR-methode gekeken naar de markt en zag twee smaken:"),
            Say("Optie A: De Enterprise giganten zoals Bullhorn of Salesforce. Geweldig, maar extreem duur en complex om in te richten voor een klein bureau."),
            Say("Optie B: Systemen zoals Recruitee. Betaalbaar, maar die zijn gemaakt voor HR-afdelingen, niet voor bureaus die 'makelen' tussen partijen."),
            Say("De conclusie was duidelijk: Er is een 'gap' in de markt. Maatwerk was de enige manier om de specifieke werkwijze van AVE te ondersteunen én eigenaar te blijven van de data."),
            Click,
        ],
    },
    Section {
        title: "De Oplossing (Tech Stack)",
        lines: &[
            Say("Dus zijn we gaan bouwen. Ik heb gekozen voor een robuuste, moderne tech stack."),
            Say("Aan de achterkant draait Laravel (PHP). Dit is de wereldwijde standaard voor SaaS-applicaties: veilig en stabiel."),
            Say("Aan de voorkant zien de gebruikers een React applicatie. Dit zorgt voor die snelle, 'snappy' ervaring die je verwacht van moderne software."),
            Say("Voor de opslag van die duizenden CV's gebruiken we Cloudflare R2. Dat is net zo goed als Amazon S3, maar een stuk goedkoper en sneller."),
            Click,
        ],
    },
    Section {
        title: "Diepgang 1: Multi-Tenancy",
        lines: &[
            Say("Dan nu de technische diepgang. Want hoe zorg je er in een SaaS-omgeving voor dat Klant A nooit de data van Klant B ziet?"),
            Say("Ik heb gekozen voor een 'Database-per-Tenant' strategie. Dit is de meest veilige optie."),
            Say("Iedere klant die inlogt, krijgt zijn eigen, fysiek gescheiden database."),
            Say("Het systeem kijkt naar het domein, bijvoorbeeld 'klant-a.avecrm.nl', en weet dan: ik mag alléén verbinden met Database A."),
            Say("Zelfs als ik als programmeur een fout maak in de code, is het technisch onmogelijk om data van de verkeerde klant op te halen. Veiligheid 'by design' dus."),
            Click,
        ],
    },
    Section {
        title: "Diepgang 2: AI Bulk Import",
        lines: &[
            Say("Het tweede technische hoogtepunt loste ons grootste probleem op: De historie. We hadden 3500 oude CV's in mapjes."),
            Say("Ik heb een AI-pipeline gebouwd met Google Gemini 3 Pro."),
            Say("Het werkt zo: Je sleept 100 CV's in het systeem. De server pakt ze op, en de AI 'leest' ze als een mens."),
            Say("Hij haalt de naam, e-mail, skills en werkervaring eruit en stopt dit netjes in de database."),
            Say("Wat vroeger 15 minuten per CV kostte aan typewerk, gebeurt nu in enkele seconden. Dit is de ware kracht van digitalisering."),
            Click,
        ],
    },
    Section {
        title: "Reflectie: Veerkracht",
        lines: &[
            Say("Tijdens dit project ging niet alles vlekkeloos. En daar wil ik eerlijk over zijn."),
            Say("Halverwege de stage, in Sprint 4, crashte mijn ontwikkelomgeving. Omdat ik geen goede backups had, was ik een week werk kwijt."),
            Say("Mijn eerste reactie was paniek. Ik trok me terug, het zogenoemde 'oestergedrag'. Ik dacht: ik los dit wel alleen op."),
            Say("Maar ik leerde dat dat niet werkt. Ik heb het opgebiecht aan mijn begeleider. In plaats van boosheid, kreeg ik hulp."),
            Say("Ik heb diezelfde dag nog een geautomatiseerd backup-script geschreven. De les die ik meeneem: Fouten maken mag, zolang je erover communiceert en het oplost."),
            Click,
        ],
    },
    Section {
        title: "Reflectie: Professionaliteit",
        lines: &[
            Say("Als ik kijk naar de Stijn van 20 weken geleden, zie ik een afwachtende student. Ik vroeg: 'Wat moet ik doen?'."),
            Say("Nu sta ik hier als professional. Ik wacht niet meer af, ik stel voor."),
            Say("Ik heb zelf de wekelijkse meetings opgezet, ik beheer de planning en ik adviseer Adriaan over technische keuzes."),
            Say("Zoals in de feedback van Hugo stond: Ik heb de rol gepakt van 'Strategisch Partner'."),
            Click,
        ],
    },
    Section {
        title: "Toekomstvisie",
        lines: &[
            Say("En nu? De stage stopt, maar het product leeft."),
            Say("De MVP gaat live. We gaan het systeem nu intern gebruiken ('Dogfooding') om de laatste puntjes op de i te zetten."),
            Say("De volgende stap is de koppeling met Outlook, zodat ook de agenda's gesynchroniseerd zijn."),
            Say("En op de lange termijn staat de weg open om dit platform in de markt te zetten voor andere bureaus."),
            Click,
        ],
    },
    Section {
        title: "Conclusie",
        lines: &[
            Say("Samenvattend: We zijn in 20 weken van een analoge chaos naar een gestructureerd, digitaal fundament gegaan."),
            Say("Er staat een veilig systeem, er is een slimme AI-oplossing en ik heb mijzelf ontwikkeld tot een zelfstandige developer."),
            Say("Ik wil Adriaan en mijn begeleiders bedanken voor het vertrouwen."),
            Say("Dit was mijn presentatie. Zijn er nog vragen?"),
        ],
    },
];

/// `Volledig_Script_Met_Klikmomenten.docx`: the spoken script split into
/// lines, with a marker wherever the slide advances.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickScript;

impl Generator for ClickScript {
    type Document = Outline;

    const FILE_NAME: &'static str = "Volledig_Script_Met_Klikmomenten.docx";

    fn build(&self) -> Result<Outline> {
        let builder = OutlineBuilder::new(TITLE)
            .base_font("Arial", 11.0)
            .heading(Heading::new(TITLE, 0).align(Alignment::Center))
            .paragraph(
                Paragraph::new()
                    .run(Run::new("Met exacte [KLIK] momenten voor naadloze timing").italic())
                    .align(Alignment::Center),
            )
            .spacer();

        let outline = SECTIONS
            .iter()
            .enumerate()
            .fold(builder, |builder, (index, section)| {
                let heading = Heading::new(format!("Slide {}: {}", index + 1, section.title), 2)
                    .color(DARK_BLUE);
                section
                    .lines
                    .iter()
                    .fold(builder.heading(heading), |builder, line| {
                        builder.paragraph(line_paragraph(*line))
                    })
                    .spacer()
            })
            .build()?;
        Ok(outline)
    }
}

fn line_paragraph(line: Line) -> Paragraph {
    match line {
        Say(text) => Paragraph::plain(text),
        Click => Paragraph::new()
            .run(Run::new(CLICK_TEXT).bold().color(CUE_RED).size_pt(12.0))
            .align(Alignment::Center)
            .space_before_pt(12.0)
            .space_after_pt(12.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::Block;

    #[test]
    fn test_every_section_but_the_last_ends_with_a_click() {
        let (last, rest) = SECTIONS.split_last().unwrap();
        assert!(rest.iter().all(|s| matches!(s.lines.last(), Some(Click))));
        assert!(!last.lines.iter().any(|l| matches!(l, Click)));
    }

    #[test]
    fn test_click_paragraph_format() {
        let para = line_paragraph(Click);
        assert_eq!(para.plain_text(), CLICK_TEXT);
        assert_eq!(para.alignment, Some(Alignment::Center));
        assert_eq!(para.space_before.map(|s| s.twips()), Some(240));
        assert_eq!(para.space_after.map(|s| s.twips()), Some(240));
        let run = &para.runs[0];
        assert!(run.bold);
        assert_eq!(run.color, Some(CUE_RED));
    }

    #[test]
    fn test_outline_counts() {
        let outline = ClickScript.build().unwrap();
        let lines: usize = SECTIONS.iter().map(|s| s.lines.len()).sum();
        // title, subtitle, spacer, then heading + lines + spacer per section
        assert_eq!(outline.body_element_count(), 3 + lines + 2 * SECTIONS.len());

        let headings: Vec<_> = outline.headings().filter(|h| h.level == 2).collect();
        assert_eq!(headings.len(), 13);
        assert_eq!(headings[0].text, "Slide 1: Titel Slide");
        assert_eq!(headings[12].text, "Slide 13: Conclusie");
        assert!(headings.iter().all(|h| h.color == Some(DARK_BLUE)));
    }

    #[test]
    fn test_ends_with_spacer() {
        let outline = ClickScript.build().unwrap();
        assert!(matches!(outline.blocks().last(), Some(Block::Spacer)));
    }
}
