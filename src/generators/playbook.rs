//! Run-of-show playbook with a per-slide cheat sheet.

use super::{DARK_BLUE, Generator};
use crate::common::{Length, Result};
use crate::outline::{
    Alignment, Cell, Heading, Outline, OutlineBuilder, Paragraph, Run, TableBuilder,
};

const TITLE: &str = "Draaiboek Eindpresentatie: AVE CRM";

const CHECKLIST: [&str; 6] = [
    "Laptop aansluiten op scherm (HDMI/USB-C).",
    "Presentatie openen in 'Presenter View' (zodat je notities ziet).",
    "Zorg dat de demo-omgeving (localhost) draait voor het geval er vragen zijn.",
    "Glas water klaarzetten.",
    "Telefoon op 'Niet storen'.",
    "Ademhaling check: Rustig in, rustig uit. Je bent de expert van dit project.",
];

const HEADER: [&str; 3] = ["Slide", "Kernboodschap & Wat te vertellen", "Tijd"];

/// Column widths in inches.
const COLUMN_WIDTHS: [f64; 3] = [1.0, 4.5, 0.8];

/// One row of the cheat sheet.
struct Cue {
    slide: &'static str,
    key_message: &'static str,
    points: &'static [&'static str],
    time: &'static str,
}

const CHEAT_SHEET: [Cue; 13] = [
    Cue {
        slide: "1. Titel",
        key_message: "Welkom & Introductie.",
        points: &[
            "Welkom heten (Hugo, begeleiders, collega's).",
            "Kort voorstellen: Stijn van der Neut, student HBO-ICT.",
            "Titel toelichten: Vandaag neem ik jullie mee in de transformatie van AVE Consultancy.",
        ],
        time: "0:30",
    },
    Cue {
        slide: "2. Agenda",
        key_message: "Structuur bieden.",
        points: &[
            "Kort de punten nalopen.",
            "Benadrukken: Eerst de business context, dan de techniek, dan persoonlijke groei.",
            "Meld dat vragen aan het einde mogen (of tussendoor, wat je fijn vindt).",
        ],
        time: "0:30",
    },
    Cue {
        slide: "3. Situatie",
        key_message: "De chaos van Excel/Dropbox.",
        points: &[
            "AVE is een ambitieus bureau, maar de systemen liepen achter.",
            "Beschrijf de oude situatie: 'Bestanden in Dropbox, lijsten in Excel, communicatie via losse mails'.",
            "Het gevolg: Geen inzicht. Wie heeft welke kandidaat gesproken? Alles zat in hoofden van mensen.",
        ],
        time: "2:00",
    },
    Cue {
        slide: "4. Opdracht",
        key_message: "SaaS & MVP.",
        points: &[
            "De vraag van Adriaan: 'Bouw een fundering voor de toekomst'.",
            "Niet zomaar een database, maar een SaaS-platform (Software as a Service).",
            "Scope: 20 weken. Focus op de kern: Relaties (CRM) en Kandidaten.",
            "Financiën en App vallen buiten scope.",
        ],
        time: "1:00",
    },
    Cue {
        slide: "5. Probleem",
        key_message: "Waarom is dit erg?",
        points: &[
            "Business pijn: Handmatig 3500 CV's verwerken kost maanden.",
            "Risico: GDPR (AVG). Excel sheetjes mailen is niet veilig.",
            "Technisch: Geen relaties. Je weet in Excel niet dat Kandidaat X bij Klant Y op gesprek is geweest.",
        ],
        time: "1:30",
    },
    Cue {
        slide: "6. Onderzoek",
        key_message: "Waarom niet kopen?",
        points: &[
            "Belangrijkste slide voor school (Software Adviseren/Analyseren).",
            "Ik heb gekeken naar Bullhorn (te duur/complex) en Recruitee (focus op HR, niet bureaus).",
            "Conclusie Gap-analyse: Er was niets dat én betaalbaar was, én specifiek voor bureaus, én SaaS-ready.",
            "Daarom: Maatwerk (Build vs Buy beslissing).",
        ],
        time: "2:30",
    },
    Cue {
        slide: "7. Oplossing",
        key_message: "De Tech Stack.",
        points: &[
            "High-level overview.",
            "Backend: Laravel (PHP) - Bewezen, veilig, snel.",
            "Frontend: React - Modern, snel, app-gevoel.",
            "Opslag: Cloudflare R2 - Goedkoper dan AWS, sneller dan lokale disk.",
        ],
        time: "1:00",
    },
    Cue {
        slide: "8. Multi-Tenancy",
        key_message: "Technische Diepgang 1.",
        points: &[
            "Hoe garanderen we veiligheid als we meerdere klanten op 1 systeem hebben?",
            "Strategie: 'Database per Tenant'.",
            "Leg uit: Klant A heeft Database A. Klant B heeft Database B.",
            "Fysiek gescheiden. Zelfs als de code faalt, kan Klant A nooit data van Klant B zien.",
        ],
        time: "2:30",
    },
    Cue {
        slide: "9. AI Import",
        key_message: "Technische Diepgang 2 (Wow-factor).",
        points: &[
            "Probleem: Die 3500 oude CV's.",
            "Oplossing: AI (Gemini 3 Pro) leest de CV's.",
            "Demo-achtig vertellen: 'Het systeem pakt een PDF, leest hem, snapt wat een Skill is, en stopt het in de database'.",
            "Winst: Van 15 min per CV naar secondenwerk.",
        ],
        time: "2:30",
    },
    Cue {
        slide: "10. Tegenslag",
        key_message: "Reflectie & Eerlijkheid.",
        points: &[
            "Het moment van de 'Crash': Dataverlies door geen backups.",
            "Eerlijk zijn: Ik schoot in de stress ('Oestergedrag').",
            "De wending: Ik heb het eerlijk opgebiecht en direct een oplossing gebouwd (Automated Backups).",
            "Les: Fouten maken mag, verzwijgen niet.",
        ],
        time: "2:00",
    },
    Cue {
        slide: "11. Prof. Groei",
        key_message: "Van Student naar Professional.",
        points: &[
            "Begin: Afwachtend. 'Zeg maar wat ik moet doen'.",
            "Einde: Proactief. 'Ik heb een plan gemaakt voor de migratie'.",
            "Refereer aan feedback Hugo/Adriaan: 'Strategisch partner'.",
        ],
        time: "1:30",
    },
    Cue {
        slide: "12. Toekomst",
        key_message: "Hoe nu verder?",
        points: &[
            "Het stopt hier niet.",
            "Nu: Livegang MVP.",
            "Straks: 'Dogfooding' (Zelf gebruiken) en Outlook integratie.",
            "Droom: Dit platform verkopen aan andere bureaus.",
        ],
        time: "1:00",
    },
    Cue {
        slide: "13. Conclusie",
        key_message: "Afronding.",
        points: &[
            "Samenvatten: We gingen van chaos naar structuur.",
            "Ik heb laten zien dat ik kan Analyseren, Ontwerpen en Bouwen.",
            "Bedankje richting Adriaan/Hugo voor de kans.",
            "Vragenronde openen.",
        ],
        time: "0:30",
    },
];

const QUESTIONS: [(&str, &str); 4] = [
    (
        "Waarom heb je niet gewoon Salesforce gebruikt?",
        "Dat heb ik onderzocht. Salesforce is geweldig, maar de licentiekosten voor een starter zijn hoog en de implementatietijd is lang. Voor de specifieke wensen van AVE (snel, simpel, bureau-gericht) was maatwerk op lange termijn goedkoper en effectiever.",
    ),
    (
        "Is AI wel veilig met persoonsgegevens?",
        "Goede vraag. We gebruiken de Enterprise API van Google (Vertex AI/Gemini). De data wordt verwerkt in Europa (regio europe-west4) en Google gebruikt deze data *niet* om hun modellen te trainen. Dit is contractueel vastgelegd.",
    ),
    (
        "Wat gebeurt er als je weggaat? Wie onderhoudt dit?",
        "De code is volledig gedocumenteerd en gebouwd op standaarden (Laravel/React). Elke professionele PHP-ontwikkelaar kan dit overnemen. Daarnaast ligt er een technische overdrachtsdocumentatie.",
    ),
    (
        "Waarom Database-per-tenant? Dat is toch duur?",
        "In opslagruimte valt dat mee, structuur is klein. Het levert vooral enorme veiligheidswinst op. Bij één gedeelde database is één vergeten 'WHERE client_id = ...' al een datalek. Nu is dat fysiek onmogelijk.",
    ),
];

/// `Draaiboek_Eindpresentatie_AVE_CRM.docx`: checklist, cheat sheet table,
/// and expected questions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Playbook;

impl Generator for Playbook {
    type Document = Outline;

    const FILE_NAME: &'static str = "Draaiboek_Eindpresentatie_AVE_CRM.docx";

    fn build(&self) -> Result<Outline> {
        let info = Paragraph::new()
            .run(
                Run::new("Datum: 19 Januari 2026 | Spreker: Stijn van der Neut | Duur: ~20 min + Vragen")
                    .italic()
                    .size_pt(11.0),
            )
            .align(Alignment::Center);

        let outline = OutlineBuilder::new(TITLE)
            .heading(Heading::new(TITLE, 0).align(Alignment::Center))
            .paragraph(info)
            .spacer()
            .heading(Heading::new("1. Voorbereiding & Checklist (5 min voor start)", 1))
            .bullets(CHECKLIST.map(Paragraph::plain))
            .page_break()
            .heading(Heading::new("2. Script & Spiekbriefje", 1))
            .table(cheat_sheet())
            .page_break()
            .heading(Heading::new("3. Verwachte Vragen (Q&A Voorbereiding)", 1))
            .with(|builder| {
                QUESTIONS.iter().fold(builder, |builder, (question, answer)| {
                    builder
                        .paragraph(Paragraph::new().run(Run::new(format!("Q: {question}")).bold()))
                        .paragraph(Paragraph::plain(format!("A: {answer}")))
                        .spacer()
                })
            })
            .build()?;
        Ok(outline)
    }
}

fn cheat_sheet() -> TableBuilder {
    let table = TableBuilder::new(HEADER.len())
        .style("Table Grid")
        .widths(COLUMN_WIDTHS.map(Length::from_inches))
        .row(HEADER);
    CHEAT_SHEET.iter().fold(table, |table, cue| table.row(cue_cells(cue)))
}

fn cue_cells(cue: &Cue) -> [Cell; 3] {
    let slide = Paragraph::new().run(Run::new(cue.slide).bold());
    let key_message = Paragraph::new().run(
        Run::new(format!("KERN: {}", cue.key_message))
            .bold()
            .color(DARK_BLUE),
    );
    let content = Cell::new()
        .paragraph(key_message)
        .paragraphs(cue.points.iter().map(|point| Paragraph::bullet(*point)));
    let time = Paragraph::plain(cue.time).align(Alignment::Center);

    [slide.into(), content, time.into()]
}
